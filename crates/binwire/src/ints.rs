//! The eleven concrete scalar kinds and their codec impls.

use std::any::Any;
use std::io;

use crate::errors::{WireError, kind_mismatch};
use crate::types::{Binary, Kind, ReadBinary};

/// Fills `buf` from `reader`, looping across short reads and retrying
/// `Interrupted` per the std convention.  Reports the count consumed so far
/// when the stream gives out, with the cause absent on clean end-of-stream.
fn read_exact_counted(reader: &mut impl io::Read, buf: &mut [u8]) -> Result<(), WireError> {
    let want = buf.len();
    let mut got = 0;
    while got < want {
        match reader.read(&mut buf[got..]) {
            Ok(0) => return Err(WireError::ShortRead { want, got, cause: None }),
            Ok(n) => got += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(WireError::ShortRead {
                    want,
                    got,
                    cause: Some(e),
                });
            }
        }
    }
    Ok(())
}

/// Generates a scalar newtype with its `Binary`/`ReadBinary` impls and inner
/// conversions.  All eleven kinds are structurally identical, differing only
/// in inner primitive, kind tag, and wire width.
macro_rules! impl_scalar {
    ( $(#[$attr:meta])* $name:ident, $inner:ty, $kind:ident, $size:expr ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($inner);

        impl $name {
            /// Wraps an inner value.
            pub const fn new(v: $inner) -> Self {
                Self(v)
            }

            /// Returns the inner value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl Binary for $name {
            fn kind(&self) -> Kind {
                Kind::$kind
            }

            fn byte_size(&self) -> usize {
                $size
            }

            #[track_caller]
            fn equals(&self, other: &dyn Binary) -> bool {
                match other.as_any().downcast_ref::<$name>() {
                    Some(o) => self.0 == o.0,
                    None => kind_mismatch(Kind::$kind, other.kind()),
                }
            }

            #[track_caller]
            fn less(&self, other: &dyn Binary) -> bool {
                match other.as_any().downcast_ref::<$name>() {
                    Some(o) => self.0 < o.0,
                    None => kind_mismatch(Kind::$kind, other.kind()),
                }
            }

            fn write_to(&self, writer: &mut dyn io::Write) -> Result<u64, WireError> {
                let n = writer.write(&self.0.to_le_bytes())?;
                Ok(n as u64)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl ReadBinary for $name {
            const KIND: Kind = Kind::$kind;
            const SIZE: usize = $size;

            fn try_read(reader: &mut impl io::Read) -> Result<(Self, u64), WireError> {
                let mut buf = [0u8; $size];
                read_exact_counted(reader, &mut buf)?;
                Ok((Self(<$inner>::from_le_bytes(buf)), $size as u64))
            }
        }

        impl From<$inner> for $name {
            fn from(v: $inner) -> Self {
                Self(v)
            }
        }

        impl From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

impl_scalar! {
    /// Raw byte.  Same width and encoding as [`U8`] but a distinct kind;
    /// the two do not compare.
    Byte, u8, Byte, 1
}

impl_scalar! {
    /// Signed 8-bit scalar.
    I8, i8, I8, 1
}

impl_scalar! {
    /// Unsigned 8-bit scalar.
    U8, u8, U8, 1
}

impl_scalar! {
    /// Signed 16-bit scalar, little-endian on the wire.
    I16, i16, I16, 2
}

impl_scalar! {
    /// Unsigned 16-bit scalar, little-endian on the wire.
    U16, u16, U16, 2
}

impl_scalar! {
    /// Signed 32-bit scalar, little-endian on the wire.
    I32, i32, I32, 4
}

impl_scalar! {
    /// Unsigned 32-bit scalar, little-endian on the wire.
    U32, u32, U32, 4
}

impl_scalar! {
    /// Signed 64-bit scalar, little-endian on the wire.
    I64, i64, I64, 8
}

impl_scalar! {
    /// Unsigned 64-bit scalar, little-endian on the wire.
    U64, u64, U64, 8
}

impl_scalar! {
    /// Signed platform-width scalar.  The wire size is
    /// `size_of::<isize>()`, fixed per build, so streams only round-trip
    /// between hosts of the same pointer width.
    Isize, isize, Isize, core::mem::size_of::<isize>()
}

impl_scalar! {
    /// Unsigned platform-width scalar.  Same portability caveat as
    /// [`Isize`].
    Usize, usize, Usize, core::mem::size_of::<usize>()
}
