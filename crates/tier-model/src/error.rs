use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Two required fields were mapped onto the same source column.
    #[error("column {column} is assigned to both {first} and {second}")]
    OverlappingColumns {
        column: usize,
        first: &'static str,
        second: &'static str,
    },
    /// A multi-column field was configured with no columns.
    #[error("field {field} has no source columns")]
    EmptyField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
