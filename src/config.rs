// Startup options. Parsed once from the command line into an immutable
// Config; components receive what they need through their constructors.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "sysmond",
    about = "Monitors system metrics and writes them to a SQLite database for troubleshooting"
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(short = 'p', long = "path", default_value = "/usr/share/sysmon.db")]
    path: String,

    /// Drop the existing database on startup; useful for dev/debugging
    #[arg(short = 'd', long = "drop")]
    drop: bool,

    /// Frequency (in seconds) to poll for metrics and info
    #[arg(short = 'f', long = "frequency", default_value_t = 60)]
    frequency: u64,

    /// Echo every captured event to stdout
    #[arg(short = 's', long = "stdout")]
    stdout: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub drop_db: bool,
    pub frequency_secs: u64,
    pub log_to_stdout: bool,
}

impl Config {
    pub fn parse_args() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Parse from an explicit argument list (e.g. for tests).
    pub fn from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_cli(Cli::try_parse_from(args)?)
    }

    fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let config = Config {
            db_path: cli.path,
            drop_db: cli.drop,
            frequency_secs: cli.frequency,
            log_to_stdout: cli.stdout,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.db_path.is_empty(), "database path must be non-empty");
        Ok(())
    }
}
