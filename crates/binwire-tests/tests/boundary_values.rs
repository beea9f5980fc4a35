//! Explicit boundary-value round trips for every scalar kind.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use binwire_tests::binwire::{ReadBinary, write_to_vec};

macro_rules! check_bounds {
    ($type:ty, $inner:ty) => {
        for raw in [0 as $inner, <$inner>::MIN, <$inner>::MAX] {
            let value = <$type>::new(raw);
            let encoded = write_to_vec(&value).expect("test: encoding should succeed");
            assert_eq!(encoded.len(), <$type>::SIZE);
            let (decoded, n) =
                <$type>::try_read(&mut &encoded[..]).expect("test: decoding should succeed");
            assert_eq!(decoded, value);
            assert_eq!(n, <$type>::SIZE as u64);
        }
    };
}

#[test]
fn test_boundary_roundtrips() {
    check_bounds!(binwire::Byte, u8);
    check_bounds!(binwire::I8, i8);
    check_bounds!(binwire::U8, u8);
    check_bounds!(binwire::I16, i16);
    check_bounds!(binwire::U16, u16);
    check_bounds!(binwire::I32, i32);
    check_bounds!(binwire::U32, u32);
    check_bounds!(binwire::I64, i64);
    check_bounds!(binwire::U64, u64);
    check_bounds!(binwire::Isize, isize);
    check_bounds!(binwire::Usize, usize);
}

#[test]
fn test_signed_extremes_byte_exact() {
    assert_eq!(
        write_to_vec(&binwire::I8::new(i8::MIN)).expect("test: encode"),
        [0x80]
    );
    assert_eq!(
        write_to_vec(&binwire::I8::new(i8::MAX)).expect("test: encode"),
        [0x7F]
    );
    assert_eq!(
        write_to_vec(&binwire::U16::new(u16::MAX)).expect("test: encode"),
        [0xFF, 0xFF]
    );
    assert_eq!(
        write_to_vec(&binwire::I16::new(i16::MIN)).expect("test: encode"),
        [0x00, 0x80]
    );
}
