use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdsError {
    #[error("empty {field} in mapping table {table}")]
    EmptyMapping {
        table: &'static str,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IdsError>;
