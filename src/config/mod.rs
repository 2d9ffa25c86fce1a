pub mod scenario;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use scenario::Scenario;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-calc")]
#[command(about = "A four-function integer calculator demo")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "TOML scenario to run instead of the built-in one")]
    pub scenario: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl CliConfig {
    /// Parses `args` without ever failing the run. Anything clap rejects falls
    /// back to the default configuration and the error is handed back so it
    /// can be logged once the logger is up. `--help` still prints and exits.
    pub fn parse_lenient_from<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => (config, None),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_scenario(&self) -> Result<Scenario> {
        let scenario = match &self.scenario {
            Some(path) => {
                tracing::info!("📁 Loading scenario from: {}", path);
                Scenario::from_file(path)?
            }
            None => Scenario::builtin()?,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;
        }
        Ok(())
    }
}
