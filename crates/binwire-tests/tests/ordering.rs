//! Comparison laws checked against the native primitives.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use binwire_tests::{
    binwire::{Binary, I8, I64, U16, Usize},
    proptest::prelude::*,
};

proptest! {
    #[test]
    fn test_less_matches_native_i8(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(I8::new(a).less(&I8::new(b)), a < b);
    }

    #[test]
    fn test_less_matches_native_u16(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(U16::new(a).less(&U16::new(b)), a < b);
    }

    #[test]
    fn test_less_matches_native_i64(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(I64::new(a).less(&I64::new(b)), a < b);
    }

    #[test]
    fn test_less_matches_native_usize(a in any::<usize>(), b in any::<usize>()) {
        prop_assert_eq!(Usize::new(a).less(&Usize::new(b)), a < b);
    }

    #[test]
    fn test_less_irreflexive_u16(a in any::<u16>()) {
        prop_assert!(!U16::new(a).less(&U16::new(a)));
    }

    #[test]
    fn test_equals_matches_native_i64(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(I64::new(a).equals(&I64::new(b)), a == b);
    }
}
