pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{scenario::Scenario, CliConfig};
pub use core::{calculator::Calculator, driver::Driver, Arithmetic, Operation, Report, Step};
pub use utils::error::{CalcError, Result};
