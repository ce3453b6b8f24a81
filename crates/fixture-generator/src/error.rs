//! Error types for fixture generation.

use thiserror::Error;

/// Errors that can occur during record generation.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Orders and inventory reference catalog products, so a catalog of
    /// zero products cannot back either dataset.
    #[error("catalog is empty; orders and inventory require at least one product")]
    EmptyCatalog,
}
