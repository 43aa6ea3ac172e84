pub struct Config {
    /// Suppresses headers and separators when greater than zero.
    pub quiet: u8,
    /// Disables ANSI colors in every line written to the terminal.
    pub no_color: bool,
}
