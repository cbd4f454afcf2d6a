/// Helper functions for bit operations.
pub mod bits {
    /// Calculates the number of bits a rust type requires.
    pub const fn bit_size<T>() -> usize {
        std::mem::size_of::<T>() * 8
    }

    /// Calculates the number of bits needed to write out n (at least 1).
    pub fn width(n: u32) -> u32 {
        (bit_size::<u32>() as u32 - n.leading_zeros()).max(1)
    }

    /// Number of hex digits needed to print n.
    pub fn hex_digits(n: u32) -> usize {
        ((width(n) + 3) / 4) as usize
    }

    /// Splits a u32 into (high, low) at the bit index.
    pub fn split_at(x: u32, n: u32) -> (u32, u32) {
        let mask = low_mask(n);
        let right = x & mask;
        let left = x.checked_shr(n).unwrap_or(0);
        (left, right)
    }

    /// Joins two u32s together at the bit index.
    pub fn join_at(x: u32, y: u32, n: u32) -> u32 {
        let x_shifted = x << n;
        x_shifted | (y & low_mask(n))
    }

    fn low_mask(n: u32) -> u32 {
        1u32.checked_shl(n).map_or(u32::MAX, |b| b - 1)
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn split_and_join() {
            let (x, y) = split_at(119, 3);
            assert_eq!((x, y), (14, 7));
            assert_eq!(join_at(x, y, 3), 119);
        }

        #[test]
        fn split_wide() {
            let (x, y) = split_at(2273197461, 13);
            assert_eq!((x, y), (277489, 7573));
        }

        #[test]
        fn zero_bit_split() {
            assert_eq!(split_at(42, 0), (42, 0));
            assert_eq!(join_at(42, 5, 0), 42);
        }

        #[test]
        fn hex_digit_counts() {
            assert_eq!(hex_digits(0), 1);
            assert_eq!(hex_digits(7), 1);
            assert_eq!(hex_digits(0xf), 1);
            assert_eq!(hex_digits(0x10), 2);
            assert_eq!(hex_digits(0xfff), 3);
            assert_eq!(hex_digits(u32::MAX), 8);
        }
    }
}
