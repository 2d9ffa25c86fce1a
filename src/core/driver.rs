use crate::core::{Arithmetic, Report, ScenarioProvider};
use crate::utils::error::{CalcError, Result};
use std::io::{ErrorKind, Write};

/// Runs every step of a scenario against an [`Arithmetic`] implementation
/// and writes one line per step.
pub struct Driver<A: Arithmetic, S: ScenarioProvider> {
    calculator: A,
    scenario: S,
}

impl<A: Arithmetic, S: ScenarioProvider> Driver<A, S> {
    pub fn new(calculator: A, scenario: S) -> Self {
        Self {
            calculator,
            scenario,
        }
    }

    /// Arithmetic errors are reported in the step's line. A closed reader on
    /// `out` ends the run early with the reports gathered so far; any other
    /// write failure is returned as `Err`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Report>> {
        let steps = self.scenario.steps();
        tracing::info!("Running {} calculator steps", steps.len());

        let mut reports = Vec::with_capacity(steps.len());
        for step in steps {
            let outcome = self.calculator.apply(step.operation, step.a, step.b);
            let report = Report {
                step: step.clone(),
                outcome,
            };

            match &report.outcome {
                Ok(value) => tracing::debug!("{} -> {}", step.expression(), value),
                Err(CalcError::DivisionByZero) => {
                    tracing::debug!("{} -> division by zero caught", step.expression())
                }
                Err(e) => tracing::warn!("{} failed: {}", step.expression(), e),
            }

            if let Err(e) = writeln!(out, "{}", report) {
                if e.kind() == ErrorKind::BrokenPipe {
                    tracing::debug!("Output closed after {} lines", reports.len());
                    return Ok(reports);
                }
                return Err(e.into());
            }
            reports.push(report);
        }

        match out.flush() {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
            _ => Ok(reports),
        }
    }
}
