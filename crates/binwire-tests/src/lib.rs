//! Property testing macros and utilities for binwire.
//!
//! This crate provides a macro to generate property tests for the binwire
//! scalar kinds. The main export is the `generate_scalar_tests!` macro.

// Re-export dependencies for macro usage
pub use binwire;
pub use paste;
pub use proptest;

/// Generates property tests for one binwire scalar kind using proptest.
///
/// The generated module verifies that:
/// 1. Writing then reading produces the original value and the full byte
///    count (round-trip property)
/// 2. The encoding is deterministic (same input always produces same output)
/// 3. Different inputs produce different encodings (exact, since the width
///    is fixed)
/// 4. The encoding agrees with the inner primitive's `to_le_bytes`
///
/// Takes the scalar type, its inner primitive, and a snake-case name for
/// the generated module.
///
/// # Example
/// ```rust,no_run
/// use binwire_tests::generate_scalar_tests;
///
/// generate_scalar_tests!(binwire::U16, u16, "u16");
/// ```
#[macro_export]
macro_rules! generate_scalar_tests {
    ($type:ty, $inner:ty, $name:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _scalar>] {
                use $crate::binwire::{ReadBinary, write_to_vec};
                use $crate::proptest::prelude::{any, prop_assert_eq, prop_assert_ne, prop_assume};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_scalar_roundtrip>](raw in any::<$inner>()) {
                        let value = <$type>::new(raw);
                        let encoded = write_to_vec(&value).expect("test: encoding should succeed");
                        prop_assert_eq!(encoded.len(), <$type>::SIZE);
                        let (decoded, n) = <$type>::try_read(&mut &encoded[..])
                            .expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                        prop_assert_eq!(n, <$type>::SIZE as u64);
                    }

                    #[test]
                    fn [<test_scalar_deterministic>](raw in any::<$inner>()) {
                        let value = <$type>::new(raw);
                        let encoded1 = write_to_vec(&value).expect("test: encoding should succeed");
                        let encoded2 = write_to_vec(&value).expect("test: encoding should succeed");
                        prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                    }

                    #[test]
                    fn [<test_scalar_distinct_encodings>](
                        raw1 in any::<$inner>(),
                        raw2 in any::<$inner>()
                    ) {
                        prop_assume!(raw1 != raw2);
                        let encoded1 = write_to_vec(&<$type>::new(raw1))
                            .expect("test: encoding should succeed");
                        let encoded2 = write_to_vec(&<$type>::new(raw2))
                            .expect("test: encoding should succeed");
                        prop_assert_ne!(encoded1, encoded2, "test: unexpected equality");
                    }

                    #[test]
                    fn [<test_scalar_matches_le_bytes>](raw in any::<$inner>()) {
                        let encoded = write_to_vec(&<$type>::new(raw))
                            .expect("test: encoding should succeed");
                        prop_assert_eq!(&encoded[..], &raw.to_le_bytes()[..]);
                    }
                }
            }
        }
    };
}
