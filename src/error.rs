use thiserror::Error;

/// Result codes for ring buffer operations
///
/// Failures are returned in `Err`; `Success` exists so callers that report
/// a flat status (e.g. across an FFI or logging boundary) can use
/// [`ResultCode::of`] without matching on the `Result` themselves.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// Operation completed successfully
    #[error("success")]
    Success,
    /// Backing storage could not be allocated
    #[error("out of memory")]
    OutOfMemory,
    /// Not enough free slots for the whole write; nothing was written
    #[error("write overflow")]
    WriteOverflow,
    /// Fewer elements buffered than requested; nothing was read
    #[error("read incomplete")]
    ReadIncomplete,
    /// Zero capacity or element size, or a caller slice too short for the request
    #[error("invalid argument")]
    InvalidArgument,
}

impl ResultCode {
    /// Flatten an operation result into its status code.
    pub fn of<T>(result: &Result<T, ResultCode>) -> ResultCode {
        match result {
            Ok(_) => ResultCode::Success,
            Err(code) => *code,
        }
    }

    /// Whether this code reports success.
    pub fn is_success(self) -> bool {
        self == ResultCode::Success
    }
}
