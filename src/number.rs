use crate::consts::{MAX_DIGITS, MIN_DIGITS};
use crate::error::{DfResult, DigitForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated string of 4 to 8 ASCII decimal digits.
///
/// Leading zeros are allowed: the value is a digit string, not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    pub fn parse(input: &str) -> DfResult<Self> {
        validate_length(input.len())?;
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DigitForgeError::InvalidInput(format!(
                "'{}' contains non-digit characters",
                input
            )));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `"{len}-digit"`, the length bucket used in categorization output.
    pub fn digit_category(&self) -> String {
        format!("{}-digit", self.len())
    }
}

impl FromStr for DigitString {
    type Err = DigitForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DigitString {
    type Error = DigitForgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate_length(length: usize) -> DfResult<()> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&length) {
        return Err(DigitForgeError::InvalidInput(format!(
            "Input must be {} to {} digits, got {}",
            MIN_DIGITS, MAX_DIGITS, length
        )));
    }
    Ok(())
}

/// Writes `value` into `out` as zero-padded ASCII digits (most significant first).
#[inline(always)]
pub(crate) fn encode_digits(mut value: u64, out: &mut [u8]) {
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

/// `10^length`, the size of the digit-string space for a length.
pub(crate) fn space_size(length: usize) -> u64 {
    10u64.pow(length as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_is_valid() {
        let n = DigitString::parse("0042").unwrap();
        assert_eq!(n.as_str(), "0042");
        assert_eq!(n.digit_category(), "4-digit");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(DigitString::parse("123").is_err());
        assert!(DigitString::parse("123456789").is_err());
        assert!(DigitString::parse("12a4").is_err());
        assert!(DigitString::parse("").is_err());
        assert!(DigitString::parse("１２３４").is_err());
    }

    #[test]
    fn test_encode_digits_pads() {
        let mut buf = [0u8; 6];
        encode_digits(4071, &mut buf);
        assert_eq!(&buf, b"004071");
    }
}
