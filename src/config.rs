use std::path::PathBuf;

/// What the CLI should report about the looked-up key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Print the first value for the key
    #[default]
    Value,
    /// Print whether the key appears at all
    Presence,
    /// Print every query item, ignoring the key
    List,
}

/// Configuration for a single CLI run
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// URL whose query component is read
    pub url: String,

    /// Parameter name to look up (exact, case-sensitive)
    pub key: Option<String>,

    pub mode: LookupMode,

    /// Emit results as JSON instead of plain text
    pub json: bool,

    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<PathBuf>,
}
