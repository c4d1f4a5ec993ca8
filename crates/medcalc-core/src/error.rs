use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    /// A calculator's declared precondition was not met. User-correctable;
    /// carries the calculator name and a specific message.
    #[error("{calculator}: {message}")]
    Validation { calculator: String, message: String },

    /// Raised by callers when a registry lookup comes back empty. The
    /// registry itself returns `None`, never this.
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
}
