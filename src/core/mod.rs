pub mod calculator;
pub mod driver;

pub use crate::domain::model::{Operation, Report, Step};
pub use crate::domain::ports::{Arithmetic, ScenarioProvider};
pub use crate::utils::error::Result;
pub use calculator::Calculator;
