//! Module containing error definitions.

use std::str::Utf8Error;

use thiserror::Error;

use crate::DataType;

/// Type alias for the `Result`
pub type PaddleResult<T> = std::result::Result<T, PaddleError>;

/// Error type centralizing all possible errors
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PaddleError {
    /// For errors with libloading
    #[error("Failed to load Paddle Inference library: {0}")]
    Library(#[from] libloading::Error),
    /// A function this crate needs is not exported by the loaded library
    #[error("Symbol {name} is missing from Paddle Inference library: {message}")]
    MissingSymbol {
        /// Name of the C function
        name: &'static str,
        /// Loader message
        message: String,
    },
    /// An argument handed to this crate cannot be used, e.g. a null tensor pointer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The element type cannot be copied to or from a tensor
    #[error("Data type {0:?} is not supported for data transfer")]
    UnsupportedType(DataType),
    /// The tensor holds elements of another type than the one requested
    #[error("Tensor holds {actual:?} elements, not {expected:?}")]
    TypeMismatch {
        /// Element type requested by the caller
        expected: DataType,
        /// Element type reported by the engine
        actual: DataType,
    },
    /// A call into the C API signalled failure
    #[error("Native call failed: {0}")]
    NativeCallFailure(String),
    /// The tensor was used after being released
    #[error("Tensor was already released")]
    Released,
    /// A shape cannot be represented on one side of the C API
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
    /// A data buffer does not match the element count of the tensor's shape
    #[error("Buffer holds {actual} elements while the tensor shape holds {expected}")]
    LengthMismatch {
        /// Element count of the tensor's shape
        expected: usize,
        /// Length of the provided buffer
        actual: usize,
    },
    /// The C API can message to the caller using a C `char *` which needs to be converted
    /// to Rust's `String`. This operation can fail.
    #[error("Failed to convert native string to UTF-8")]
    StringConversion(#[source] Utf8Error),
}

pub(crate) fn assert_not_null_pointer<T>(ptr: *const T, name: &str) -> PaddleResult<()> {
    (!ptr.is_null())
        .then_some(())
        .ok_or_else(|| PaddleError::NativeCallFailure(format!("{name} returned a null pointer")))
}
