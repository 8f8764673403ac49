use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most of the extraction pipeline is infallible by construction: unrecognized log lines,
/// malformed frame markers and unterminated blocks are skipped rather than reported, and a
/// dump whose length is not chunk-aligned only produces a diagnostic. What remains are
/// failures to obtain the input at all, and invalid caller-supplied configuration.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::FileError`] - Filesystem I/O errors while loading a log or dump
/// - [`Error::OutOfBounds`] - A requested window lies outside the loaded buffer
///
/// ## Configuration Errors
/// - [`Error::InvalidConfig`] - Analyzer parameters that cannot be used (zero sizes)
/// - [`Error::Malformed`] - Caller-supplied values that could not be interpreted
///
/// ## Output Errors
/// - [`Error::Json`] - Serialization of extracted records failed
///
/// # Examples
///
/// ```rust,no_run
/// use dumpscope::{Error, file::Dump};
///
/// match Dump::from_file("snapshot.vram") {
///     Ok(dump) => println!("Loaded {} bytes", dump.len()),
///     Err(Error::FileError(io_err)) => eprintln!("I/O error: {}", io_err),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be interpreted.
    ///
    /// Carries the source location where the problem was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted.
    ///
    /// Raised when an analysis window or data slice reaches past the end of the buffer.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening, mapping or reading
    /// an input artifact.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Analyzer configuration that cannot be used.
    #[error("Invalid configuration - {0}")]
    InvalidConfig(String),

    /// Serialization of extracted records failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
