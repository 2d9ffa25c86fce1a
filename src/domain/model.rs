use crate::utils::error::CalcError;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

/// One demonstration call: a labelled operation over two operands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Step {
    pub label: String,
    pub operation: Operation,
    pub a: i32,
    pub b: i32,
}

impl Step {
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.a, self.operation.symbol(), self.b)
    }
}

/// Outcome of running one [`Step`]. Renders as the line printed for it.
#[derive(Debug)]
pub struct Report {
    pub step: Step,
    pub outcome: Result<i32, CalcError>,
}

impl Report {
    pub fn value(&self) -> Option<i32> {
        self.outcome.as_ref().ok().copied()
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "{}: {} = {}", self.step.label, self.step.expression(), value),
            Err(e) => write!(f, "{}: {}", self.step.label, e),
        }
    }
}
