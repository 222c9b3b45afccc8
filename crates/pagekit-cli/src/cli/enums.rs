use clap::ValueEnum;
use pagekit_config::Mode;

/// Build mode selectable from the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Minified output with hashed assets
    #[value(name = "production")]
    Production,

    /// Inline source maps and dev server settings
    #[value(name = "development")]
    Development,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Production => Mode::Production,
            ModeArg::Development => Mode::Development,
        }
    }
}

/// Serialization format for the composed configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    #[value(name = "json")]
    Json,

    /// TOML document
    #[value(name = "toml")]
    Toml,
}
