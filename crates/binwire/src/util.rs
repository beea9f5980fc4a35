//! High-level util functions.

use crate::errors::WireError;
use crate::types::Binary;

/// Encodes the value into a newly allocated vec.
pub fn write_to_vec(v: &dyn Binary) -> Result<Vec<u8>, WireError> {
    let mut buf = Vec::with_capacity(v.byte_size());
    v.write_to(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ints::U32;

    #[test]
    fn test_write_to_vec() {
        let buf = write_to_vec(&U32::new(0x0102_0304)).expect("test: encode");
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    }
}
