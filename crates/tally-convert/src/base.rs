//! Integer base conversion by repeated division.
//!
//! Negative values are encoded as fixed-width two's complement: the widths
//! below are part of the output contract and are never derived from the
//! input magnitude. A negative value whose magnitude exceeds the width
//! produces an all-zero field (the adjusted value goes non-positive and the
//! digit loop yields nothing) rather than an error.

/// Fixed bit width for the two's-complement binary form of negatives.
pub const BINARY_TWOS_COMPLEMENT_BITS: usize = 10;

/// Fixed bit width for the two's-complement hexadecimal form of negatives
/// (four bits per hex digit, so ten digits).
pub const HEX_TWOS_COMPLEMENT_BITS: usize = 40;

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Converts a non-negative integer to its binary digits.
///
/// # Examples
///
/// ```
/// use tally_convert::to_binary;
///
/// assert_eq!(to_binary(10), "1010");
/// assert_eq!(to_binary(0), "0");
/// ```
#[must_use]
pub fn to_binary(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = String::new();
    let mut number = value;
    while number > 0 {
        digits.push(if number % 2 == 0 { '0' } else { '1' });
        number /= 2;
    }
    digits.chars().rev().collect()
}

/// Converts a non-negative integer to uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use tally_convert::to_hex;
///
/// assert_eq!(to_hex(10), "A");
/// assert_eq!(to_hex(255), "FF");
/// assert_eq!(to_hex(0), "0");
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn to_hex(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = String::new();
    let mut number = value;
    while number > 0 {
        digits.push(HEX_DIGITS[(number % 16) as usize]);
        number /= 16;
    }
    digits.chars().rev().collect()
}

/// Encodes a negative integer as fixed-width two's-complement binary.
#[must_use]
pub fn to_binary_twos_complement(value: i64, bits: usize) -> String {
    let adjusted = (1_i64 << bits) + value;
    let digits = u64::try_from(adjusted).map_or_else(|_| String::new(), to_binary);
    format!("{digits:0>bits$}")
}

/// Encodes a negative integer as fixed-width two's-complement hexadecimal.
#[must_use]
pub fn to_hex_twos_complement(value: i64, bits: usize) -> String {
    let adjusted = (1_i64 << bits) + value;
    let digits = u64::try_from(adjusted).map_or_else(|_| String::new(), to_hex);
    let width = bits / 4;
    format!("{digits:0>width$}")
}

/// Converts an integer to its binary and hexadecimal report forms.
///
/// Non-negative values convert directly; negative values use the fixed
/// [`BINARY_TWOS_COMPLEMENT_BITS`] and [`HEX_TWOS_COMPLEMENT_BITS`] widths.
#[must_use]
pub fn convert_value(value: i64) -> (String, String) {
    match u64::try_from(value) {
        Ok(positive) => (to_binary(positive), to_hex(positive)),
        Err(_) => (
            to_binary_twos_complement(value, BINARY_TWOS_COMPLEMENT_BITS),
            to_hex_twos_complement(value, HEX_TWOS_COMPLEMENT_BITS),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_of_small_values() {
        assert_eq!(to_binary(0), "0");
        assert_eq!(to_binary(1), "1");
        assert_eq!(to_binary(2), "10");
        assert_eq!(to_binary(10), "1010");
        assert_eq!(to_binary(255), "11111111");
    }

    #[test]
    fn test_hex_of_small_values() {
        assert_eq!(to_hex(0), "0");
        assert_eq!(to_hex(10), "A");
        assert_eq!(to_hex(16), "10");
        assert_eq!(to_hex(255), "FF");
        assert_eq!(to_hex(48879), "BEEF");
    }

    #[test]
    fn test_negative_one_fills_the_fixed_widths() {
        assert_eq!(
            to_binary_twos_complement(-1, BINARY_TWOS_COMPLEMENT_BITS),
            "1111111111",
        );
        assert_eq!(
            to_hex_twos_complement(-1, HEX_TWOS_COMPLEMENT_BITS),
            "FFFFFFFFFF",
        );
    }

    #[test]
    fn test_negative_values_are_zero_padded_to_width() {
        // -1000 in 10 bits: 1024 - 1000 = 24 = 0b11000
        assert_eq!(
            to_binary_twos_complement(-1000, BINARY_TWOS_COMPLEMENT_BITS),
            "0000011000",
        );
        // -16 in 40 bits: 2^40 - 16 = 0xFFFFFFFFF0
        assert_eq!(
            to_hex_twos_complement(-16, HEX_TWOS_COMPLEMENT_BITS),
            "FFFFFFFFF0",
        );
    }

    #[test]
    fn test_negative_magnitude_beyond_width_yields_all_zeros() {
        // 1024 + (-5000) is negative, so no digits are produced and the
        // padding fills the whole field.
        assert_eq!(
            to_binary_twos_complement(-5000, BINARY_TWOS_COMPLEMENT_BITS),
            "0000000000",
        );
        // Exactly -2^10 adjusts to zero, which also renders as all zeros.
        assert_eq!(
            to_binary_twos_complement(-1024, BINARY_TWOS_COMPLEMENT_BITS),
            "0000000000",
        );
    }

    #[test]
    fn test_convert_value_dispatches_on_sign() {
        assert_eq!(convert_value(10), ("1010".to_string(), "A".to_string()));
        assert_eq!(convert_value(0), ("0".to_string(), "0".to_string()));
        assert_eq!(
            convert_value(-2),
            ("1111111110".to_string(), "FFFFFFFFFE".to_string()),
        );
    }
}
