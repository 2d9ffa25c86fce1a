use crate::domain::model::{Operation, Step};
use crate::utils::error::Result;

/// Integer arithmetic over two operands. Implementations hold no state.
pub trait Arithmetic: Send + Sync {
    fn add(&self, a: i32, b: i32) -> i32;
    fn subtract(&self, a: i32, b: i32) -> i32;
    fn multiply(&self, a: i32, b: i32) -> i32;
    fn divide(&self, a: i32, b: i32) -> Result<i32>;

    fn apply(&self, operation: Operation, a: i32, b: i32) -> Result<i32> {
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}

pub trait ScenarioProvider {
    fn steps(&self) -> &[Step];
}
