//! Proof-of-work targets: the predicate a block hash must satisfy.

use crate::hash::Hash;

/// Decides whether a digest meets the work target.
///
/// Mining retries nonces until this predicate accepts, so an
/// implementation must be deterministic and side-effect free. A
/// validator no digest can satisfy makes mining spin forever.
pub trait HashValidator {
    fn is_valid(&self, hash: &Hash) -> bool;
}

/// Accepts digests that start with at least this many zero bytes.
///
/// Each required byte multiplies the expected mining work by 256;
/// one or two bytes keep interactive use comfortable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadingZeroBytes(pub usize);

impl HashValidator for LeadingZeroBytes {
    fn is_valid(&self, hash: &Hash) -> bool {
        hash.len() >= self.0 && hash.as_bytes()[..self.0].iter().all(|&b| b == 0)
    }
}

/// Accepts digests with at least this many leading zero bits, for
/// difficulty steps finer than a whole byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadingZeroBits(pub u32);

impl HashValidator for LeadingZeroBits {
    fn is_valid(&self, hash: &Hash) -> bool {
        count_leading_zero_bits(hash) >= self.0
    }
}

/// Number of leading zero bits in `hash`.
pub fn count_leading_zero_bits(hash: &Hash) -> u32 {
    let mut total = 0u32;
    for b in hash.as_bytes() {
        if *b == 0 {
            total += 8;
        } else {
            total += b.leading_zeros();
            break;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_bits_examples() {
        let mut h = [0u8; 32];
        assert_eq!(count_leading_zero_bits(&Hash::new(&h)), 256);
        h[0] = 0x0F; // 00001111
        assert_eq!(count_leading_zero_bits(&Hash::new(&h)), 4);
        h = [0u8; 32];
        h[1] = 0x80; // 00000000 10000000
        assert_eq!(count_leading_zero_bits(&Hash::new(&h)), 8);
        h[1] = 0x40; // 01000000
        assert_eq!(count_leading_zero_bits(&Hash::new(&h)), 9);
    }

    #[test]
    fn the_empty_hash_has_no_zero_bits() {
        assert_eq!(count_leading_zero_bits(&Hash::empty()), 0);
    }

    #[test]
    fn zero_bytes_validator_examples() {
        assert!(LeadingZeroBytes(0).is_valid(&Hash::new(&[0xFF])));
        assert!(LeadingZeroBytes(0).is_valid(&Hash::empty()));
        assert!(LeadingZeroBytes(1).is_valid(&Hash::new(&[0x00, 0xFF])));
        assert!(!LeadingZeroBytes(1).is_valid(&Hash::new(&[0x01, 0x00])));
        assert!(!LeadingZeroBytes(2).is_valid(&Hash::new(&[0x00, 0x01])));
        // A digest shorter than the required prefix can never qualify.
        assert!(!LeadingZeroBytes(2).is_valid(&Hash::new(&[0x00])));
    }

    #[test]
    fn zero_bits_validator_examples() {
        assert!(LeadingZeroBits(0).is_valid(&Hash::new(&[0xFF])));
        assert!(LeadingZeroBits(9).is_valid(&Hash::new(&[0x00, 0x40])));
        assert!(!LeadingZeroBits(10).is_valid(&Hash::new(&[0x00, 0x40])));
        assert!(!LeadingZeroBits(1).is_valid(&Hash::empty()));
    }
}
