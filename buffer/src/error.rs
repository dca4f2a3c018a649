//! Error types for buffer operations.

use std::fmt;

/// Result type for buffer and format operations.
pub type WireResult<T> = Result<T, WireError>;

/// Errors that can occur while packing or unpacking wire fields.
///
/// Every operation returns success or exactly one of these. Nothing is
/// retried or recovered internally; a failed operation leaves the buffer's
/// length and read offset where they were.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WireError {
    /// A width outside {1, 2, 4, 8} was requested for an identifier or
    /// fixed-width field. Unset identifier widths (0) land here too.
    SizeUnsupported {
        /// The rejected width in bytes.
        width: u8,
    },

    /// An unrecognized format tag was encountered.
    OperationUnsupported {
        /// The offending tag character.
        tag: char,
    },

    /// Storage growth could not allocate the required capacity.
    HeapFault {
        /// Total capacity in bytes that was requested.
        requested: usize,
    },

    /// An unpack required more unread bytes than remain.
    NeedLength {
        /// Number of bytes requested.
        requested: usize,
        /// Number of unread bytes available.
        available: usize,
    },

    /// A batch pack reached a format tag with no value left to consume.
    MissingValue {
        /// Zero-based index of the tag in the format.
        position: usize,
    },

    /// The transport closed or reached end of file.
    ///
    /// Note: This variant is reserved for the transport layer. Nothing in
    /// this crate returns it.
    TransportClosed,

    /// The handshake with the target process did not complete.
    ///
    /// Note: This variant is reserved for the session layer. Nothing in
    /// this crate returns it.
    HandshakeFailed,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeUnsupported { width } => {
                write!(f, "identifier size {width} not supported")
            }
            Self::OperationUnsupported { tag } => {
                write!(f, "packing operand {tag:?} not supported")
            }
            Self::HeapFault { requested } => {
                write!(
                    f,
                    "insufficient heap memory to grow buffer to {requested} bytes"
                )
            }
            Self::NeedLength {
                requested,
                available,
            } => {
                write!(
                    f,
                    "insufficient length to unpack value: need {requested} bytes, {available} available"
                )
            }
            Self::MissingValue { position } => {
                write!(f, "no value supplied for format tag at position {position}")
            }
            Self::TransportClosed => write!(f, "transport closed or end of file reached"),
            Self::HandshakeFailed => write!(f, "could not complete handshake with process"),
        }
    }
}

impl std::error::Error for WireError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_need_length() {
        let err = WireError::NeedLength {
            requested: 4,
            available: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("need 4"), "should mention requested bytes");
        assert!(msg.contains("2 available"), "should mention available bytes");
    }

    #[test]
    fn error_display_size_unsupported() {
        let err = WireError::SizeUnsupported { width: 3 };
        assert!(err.to_string().contains("size 3"));
    }

    #[test]
    fn error_display_operation_unsupported() {
        let err = WireError::OperationUnsupported { tag: 'x' };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn error_display_heap_fault() {
        let err = WireError::HeapFault { requested: 4096 };
        let msg = err.to_string();
        assert!(msg.contains("heap"));
        assert!(msg.contains("4096"));
    }

    #[test]
    fn error_display_missing_value() {
        let err = WireError::MissingValue { position: 2 };
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn reserved_variants_display() {
        assert!(WireError::TransportClosed.to_string().contains("transport"));
        assert!(WireError::HandshakeFailed.to_string().contains("handshake"));
    }

    #[test]
    fn error_equality() {
        let err1 = WireError::NeedLength {
            requested: 8,
            available: 3,
        };
        let err2 = WireError::NeedLength {
            requested: 8,
            available: 3,
        };
        let err3 = WireError::NeedLength {
            requested: 8,
            available: 4,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<WireError>();
    }
}
