use std::io;

use thiserror::Error;

use crate::types::Kind;

/// Errors from binwire stream operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// Fewer bytes than the kind's wire size were obtainable from the
    /// reader.  The cause is `None` when the stream simply ended early.
    #[error("short read: got {got} of {want} bytes")]
    ShortRead {
        /// Number of bytes the decode needed.
        want: usize,

        /// Number of bytes actually consumed before the stream gave out.
        got: usize,

        /// Underlying I/O failure, absent on a clean end-of-stream.
        #[source]
        cause: Option<io::Error>,
    },

    /// The writer failed to accept the encoded bytes.  The writer's own
    /// error passes through unmodified.
    #[error(transparent)]
    Write(#[from] io::Error),

    /// A comparison was attempted between two values of different concrete
    /// kinds.  This variant never travels through a `Result`; it is the
    /// payload of the panic raised by `equals`/`less` on mismatched kinds.
    #[error("cannot compare {left} with {right}")]
    KindMismatch {
        /// Kind of the left-hand value.
        left: Kind,

        /// Kind of the right-hand value.
        right: Kind,
    },
}

/// Aborts a comparison between values of two different concrete kinds.
#[track_caller]
pub(crate) fn kind_mismatch(left: Kind, right: Kind) -> ! {
    panic!("{}", WireError::KindMismatch { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_read_message() {
        let e = WireError::ShortRead {
            want: 2,
            got: 1,
            cause: None,
        };
        assert_eq!(e.to_string(), "short read: got 1 of 2 bytes");
    }

    #[test]
    fn test_write_message_is_transparent() {
        let inner = io::Error::other("device yanked");
        let msg = inner.to_string();
        let e = WireError::from(inner);
        assert_eq!(e.to_string(), msg);
    }

    #[test]
    fn test_kind_mismatch_message_names_both_kinds() {
        let e = WireError::KindMismatch {
            left: Kind::U16,
            right: Kind::I32,
        };
        assert_eq!(e.to_string(), "cannot compare u16 with i32");
    }

    #[test]
    fn test_short_read_source() {
        use std::error::Error as _;

        let e = WireError::ShortRead {
            want: 8,
            got: 3,
            cause: Some(io::Error::other("backing store fell over")),
        };
        let src = e.source().expect("test: expected a source");
        assert_eq!(src.to_string(), "backing store fell over");

        let clean = WireError::ShortRead {
            want: 8,
            got: 0,
            cause: None,
        };
        assert!(clean.source().is_none());
    }
}
