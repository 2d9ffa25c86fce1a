//! Stateless four-function integer calculator.
//!
//! Addition, subtraction and multiplication are total and wrap on overflow.
//! Division truncates toward zero and fails only on a zero divisor.

use crate::core::Arithmetic;
use crate::utils::error::{CalcError, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    /// Truncating quotient `a / b`. `i32::MIN / -1` wraps to `i32::MIN`.
    fn divide(&self, a: i32, b: i32) -> Result<i32> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }
}
