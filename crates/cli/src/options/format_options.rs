use clap::ValueEnum;

/// Extra report printed after a successful rewrite.
///
/// The host summary line is always logged; this adds a coloured line or a JSON document on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for scripts
    #[value(name = "json")]
    Json,
    /// Human-readable terminal output
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    pub fn print(&self, stdout_msg: &str, json_msg: &str) {
        match self {
            Self::Stdout => println!("{stdout_msg}"),
            Self::Json => println!("{json_msg}"),
        }
    }
}
