use std::any::Any;
use std::fmt;
use std::io;

use crate::errors::WireError;

/// Identity tag for a concrete scalar kind.
///
/// Every scalar type reports its tag through [`Binary::kind`], which is how
/// mismatched comparisons get diagnosed by name instead of by opaque type id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Raw byte.
    Byte,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed platform-width integer.
    Isize,
    /// Unsigned platform-width integer.
    Usize,
}

impl Kind {
    /// Number of bytes a value of this kind occupies on the wire.
    pub const fn byte_size(&self) -> usize {
        match self {
            Kind::Byte | Kind::I8 | Kind::U8 => 1,
            Kind::I16 | Kind::U16 => 2,
            Kind::I32 | Kind::U32 => 4,
            Kind::I64 | Kind::U64 => 8,
            Kind::Isize | Kind::Usize => core::mem::size_of::<usize>(),
        }
    }

    /// Lowercase name of the kind, as used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Byte => "byte",
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::Isize => "isize",
            Kind::Usize => "usize",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared capability set of every scalar kind.
///
/// Object-safe so heterogeneous values can be held behind `dyn Binary`, which
/// is also what the comparison methods accept.  Comparisons are only defined
/// between values of the identical concrete kind; handing `equals` or `less`
/// a value of any other kind is a contract violation and panics with a
/// [`WireError::KindMismatch`] message naming both kinds.
pub trait Binary: Any + fmt::Debug {
    /// Identity tag of the concrete kind.
    fn kind(&self) -> Kind;

    /// Number of bytes this value occupies on the wire.  Pure, never fails.
    fn byte_size(&self) -> usize;

    /// Returns whether `other` is the same concrete kind and numerically
    /// equal to `self`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is a different concrete kind.
    fn equals(&self, other: &dyn Binary) -> bool;

    /// Returns whether `self` is strictly less than `other` by native
    /// numeric ordering.
    ///
    /// # Panics
    ///
    /// Panics if `other` is a different concrete kind.
    fn less(&self, other: &dyn Binary) -> bool;

    /// Serializes `self` as [`byte_size`](Binary::byte_size) little-endian
    /// bytes and submits them to `writer` in one bounded write call.
    ///
    /// Returns the number of bytes the writer accepted, which the writer's
    /// own semantics may make smaller than the wire size; there is no retry
    /// or partial-write recovery here.  A writer error passes through
    /// unmodified as [`WireError::Write`].
    fn write_to(&self, writer: &mut dyn io::Write) -> Result<u64, WireError>;

    /// Upcast hook for concrete-kind downcasting in comparisons.
    fn as_any(&self) -> &dyn Any;
}

/// Static decode surface of a scalar kind.
///
/// Decoding produces a new value rather than operating on an existing one,
/// so these are associated functions on the sized type instead of methods
/// on `dyn Binary`.
pub trait ReadBinary: Binary + Sized {
    /// Identity tag of this kind.
    const KIND: Kind;

    /// Wire size of this kind in bytes.
    const SIZE: usize;

    /// Reads exactly [`SIZE`](ReadBinary::SIZE) bytes from `reader`, looping
    /// across short reads until enough bytes are obtained, end-of-stream, or
    /// a reader error.  On success decodes them little-endian and returns
    /// the value together with the byte count.
    ///
    /// On failure returns [`WireError::ShortRead`] carrying the number of
    /// bytes actually consumed and the underlying I/O cause, if any.  This
    /// is the only decode entry point that reports failure as data.
    fn try_read(reader: &mut impl io::Read) -> Result<(Self, u64), WireError>;

    /// Reads a value and its byte count from `reader`.
    ///
    /// # Panics
    ///
    /// Panics if [`try_read`](ReadBinary::try_read) fails; the message
    /// carries the short-read detail and underlying cause.  Only suitable
    /// for trusted, well-formed input.
    #[track_caller]
    fn read_n(reader: &mut impl io::Read) -> (Self, u64) {
        Self::try_read(reader).expect("binwire: read failed")
    }

    /// Reads a value from `reader`, discarding the byte count.
    ///
    /// # Panics
    ///
    /// Panics if [`try_read`](ReadBinary::try_read) fails, as
    /// [`read_n`](ReadBinary::read_n) does.
    #[track_caller]
    fn read(reader: &mut impl io::Read) -> Self {
        Self::try_read(reader).expect("binwire: read failed").0
    }
}
