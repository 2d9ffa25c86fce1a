use crate::core::{ScenarioProvider, Step};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_SCENARIO: &str = include_str!("default_scenario.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The five demonstration calls run when no scenario file is given.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SCENARIO)
    }

    /// Reads and parses a scenario file. The result is not validated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl ScenarioProvider for Scenario {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("step", &self.steps)?;
        for (i, step) in self.steps.iter().enumerate() {
            validate_non_empty_string(&format!("step[{}].label", i), &step.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_scenario() {
        let scenario = Scenario::builtin().unwrap();
        assert!(scenario.validate().is_ok());
        assert_eq!(scenario.len(), 5);

        let labels: Vec<_> = scenario.steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Addition Test",
                "Subtraction Test",
                "Multiplication Test",
                "Division Test",
                "Division by Zero Test",
            ]
        );

        let last = &scenario.steps[4];
        assert_eq!(last.operation, Operation::Divide);
        assert_eq!((last.a, last.b), (10, 0));
    }

    #[test]
    fn test_parse_negative_operands() {
        let scenario = Scenario::from_toml_str(
            r#"
[[step]]
label = "Negative"
operation = "multiply"
a = -4
b = 5
"#,
        )
        .unwrap();
        assert_eq!(scenario.steps[0].a, -4);
        assert_eq!(scenario.steps[0].operation, Operation::Multiply);
    }

    #[test]
    fn test_unknown_operation_is_config_error() {
        let err = Scenario::from_toml_str(
            r#"
[[step]]
label = "Modulo"
operation = "modulo"
a = 1
b = 2
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }

    #[test]
    fn test_operand_out_of_range_is_config_error() {
        let err = Scenario::from_toml_str(
            r#"
[[step]]
label = "Too big"
operation = "add"
a = 4294967296
b = 1
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }

    #[test]
    fn test_empty_scenario_fails_validation() {
        let scenario = Scenario::from_toml_str("").unwrap();
        assert!(scenario.is_empty());
        assert!(matches!(
            scenario.validate(),
            Err(CalcError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_blank_label_fails_validation() {
        let scenario = Scenario::from_toml_str(
            r#"
[[step]]
label = "  "
operation = "add"
a = 1
b = 2
"#,
        )
        .unwrap();
        match scenario.validate() {
            Err(CalcError::ValidationError { field, .. }) => assert_eq!(field, "step[0].label"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[step]]\nlabel = \"File\"\noperation = \"subtract\"\na = 3\nb = 9\n")
            .unwrap();

        let scenario = Scenario::from_file(temp_file.path()).unwrap();
        assert_eq!(scenario.len(), 1);
        assert_eq!(scenario.steps[0].label, "File");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scenario::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CalcError::IoError(_)));
    }
}
