use thiserror::Error;

#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid input: {field} = {value} (allowed {})", allowed_range(.min, .max))]
    InvalidInput {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Unknown scenario: {0} (expected low, mid or high)")]
    UnknownScenario(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BudgetError {
    /// Name of the input field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BudgetError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}

fn allowed_range(min: &u32, max: &u32) -> String {
    if *max == u32::MAX {
        format!("{} or more", min)
    } else {
        format!("{}..={}", min, max)
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
