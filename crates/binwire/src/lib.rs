//! Fixed-width binary scalar codec.
//!
//! A family of scalar value types (1/2/4/8-byte signed and unsigned
//! integers, a raw byte, and the platform-width pair) sharing one
//! capability set: equality, strict ordering, wire size, and stream
//! encode/decode over [`std::io::Read`] / [`std::io::Write`].  Encoding is
//! always little-endian, exactly the kind's wire size, with no padding,
//! framing, or type tag; the reader must already know which kind to decode.
//!
//! | Kind | Width (bytes) | Encoding |
//! |---|---|---|
//! | [`Byte`] | 1 | raw byte |
//! | [`I8`] / [`U8`] | 1 | raw byte |
//! | [`I16`] / [`U16`] | 2 | little-endian |
//! | [`I32`] / [`U32`] | 4 | little-endian |
//! | [`I64`] / [`U64`] | 8 | little-endian |
//! | [`Isize`] / [`Usize`] | `size_of::<usize>()`, fixed per build | little-endian |
//!
//! Reading from in-memory bytes needs no helper, since `&[u8]` implements
//! [`std::io::Read`]:
//!
//! ```
//! use binwire::{ReadBinary, U16, write_to_vec};
//!
//! let v = U16::new(0x1234);
//! let bytes = write_to_vec(&v)?;
//! assert_eq!(bytes, [0x34, 0x12]);
//!
//! let (back, n) = U16::try_read(&mut &bytes[..])?;
//! assert_eq!(back, v);
//! assert_eq!(n, 2);
//! # Ok::<(), binwire::WireError>(())
//! ```
//!
//! # Panic policy
//!
//! [`Binary::write_to`] and [`ReadBinary::try_read`] report every failure
//! as a [`WireError`] and never panic.  The convenience readers
//! [`ReadBinary::read_n`] / [`ReadBinary::read`] and the comparisons
//! [`Binary::equals`] / [`Binary::less`] on mismatched kinds panic instead;
//! they are shortcuts for trusted input and same-kind values, not for
//! anything arriving off a wire you don't control.

mod errors;
pub use errors::WireError;

mod types;
pub use types::{Binary, Kind, ReadBinary};

mod ints;
pub use ints::{Byte, I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};

mod util;
pub use util::write_to_vec;
