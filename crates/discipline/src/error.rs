use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisciplineError {
    #[error("Rule '{0}' has an empty label.")]
    EmptyLabel(String),

    #[error("Rule '{id}' needs a threshold greater than zero, got {threshold}.")]
    InvalidThreshold { id: String, threshold: Decimal },
}
