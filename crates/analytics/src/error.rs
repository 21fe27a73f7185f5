use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Not enough data to perform calculation: {0}")]
    NotEnoughData(String),

    #[error("Calculation error: Division by zero encountered in metric '{0}'")]
    DivisionByZero(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
