//! Error types for 3MF export
//!
//! Every error message carries an error code so failures can be told apart in
//! logs without matching on the variant.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML serialization errors
//!
//! ## Error Codes
//!
//! - `E1002`: ZIP archive error while assembling a 3MF package
//! - `E1004`: Output file could not be created
//! - `E1005`: Final flush of the output failed
//! - `E2005`: XML writing error

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for 3MF export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
///
/// Lets callers branch on the failure phase without matching on variant payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The output target could not be created or opened
    ResourceCreation,
    /// The sink rejected a write while the document or package was being written
    Encoding,
    /// The document was fully generated but the final flush failed
    Flush,
    /// The OPC (ZIP) container could not be assembled
    Package,
}

/// Errors that can occur when exporting a 3MF document
#[derive(Error, Debug)]
pub enum Error {
    /// ZIP archive error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - The in-memory archive rejected a write
    /// - The archive could not be finalized
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The output file could not be created
    ///
    /// **Error Code**: E1004
    ///
    /// **Common Causes**:
    /// - Parent directory does not exist
    /// - Insufficient permissions
    /// - Disk full or read-only file system
    ///
    /// No document has been written when this error is returned.
    #[error("[E1004] Failed to create output file '{}': {source}", path.display())]
    CreateFile {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The final flush of buffered output failed
    ///
    /// **Error Code**: E1005
    ///
    /// The in-memory document was complete, but the bytes on disk are not.
    /// Treat the output file as partial.
    #[error("[E1005] Failed to flush output '{}': {source}", path.display())]
    Flush {
        /// Path of the output being flushed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// XML writing error
    ///
    /// **Error Code**: E2005
    ///
    /// **Common Causes**:
    /// - I/O error while the document was being serialized
    /// - I/O error while a finished package was copied to the sink
    /// - Output stream closed or full
    #[error("[E2005] XML writing error: {0}")]
    XmlWrite(String),
}

impl Error {
    /// Create an XmlWrite error
    ///
    /// # Arguments
    /// * `message` - Description of the writing error
    pub fn xml_write(message: String) -> Self {
        Error::XmlWrite(message)
    }

    /// Create a CreateFile error for the given path
    pub fn create_file(path: &Path, source: io::Error) -> Self {
        Error::CreateFile {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a Flush error for the given path
    pub fn flush(path: &Path, source: io::Error) -> Self {
        Error::Flush {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The failure phase this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Zip(_) => ErrorKind::Package,
            Error::CreateFile { .. } => ErrorKind::ResourceCreation,
            Error::Flush { .. } => ErrorKind::Flush,
            Error::XmlWrite(_) => ErrorKind::Encoding,
        }
    }

    /// Whether a partially written output may have been left behind
    ///
    /// Only a failure to create the target guarantees nothing was written.
    pub fn is_partial_output(&self) -> bool {
        self.kind() != ErrorKind::ResourceCreation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let create = Error::create_file(
            Path::new("/missing/out.3mf"),
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(create.to_string().contains("[E1004]"));
        assert!(create.to_string().contains("/missing/out.3mf"));

        let flush = Error::flush(
            Path::new("out.3mf"),
            io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        );
        assert!(flush.to_string().contains("[E1005]"));

        let xml = Error::xml_write("Failed to write vertex: closed".to_string());
        assert!(xml.to_string().contains("[E2005]"));
        assert!(xml.to_string().contains("Failed to write vertex"));
    }

    #[test]
    fn test_error_kinds() {
        let create = Error::create_file(
            Path::new("a"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(create.kind(), ErrorKind::ResourceCreation);
        assert!(!create.is_partial_output());

        let encoding = Error::xml_write("broken pipe".to_string());
        assert_eq!(encoding.kind(), ErrorKind::Encoding);
        assert!(encoding.is_partial_output());

        let flush = Error::flush(Path::new("a"), io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(flush.kind(), ErrorKind::Flush);
        assert!(flush.is_partial_output());

        let zip_err = Error::from(zip::result::ZipError::Io(io::Error::new(
            io::ErrorKind::Other,
            "archive",
        )));
        assert_eq!(zip_err.kind(), ErrorKind::Package);
        assert!(zip_err.to_string().contains("[E1002]"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = Error::create_file(
            Path::new("out.3mf"),
            io::Error::new(io::ErrorKind::NotFound, "inner cause"),
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("inner cause"));
    }
}
