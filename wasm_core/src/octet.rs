//! Decimal octet to binary conversion with a trace of every bit decision.
//!
//! The trace is rendered verbatim by the page, so the order of [`POWERS`]
//! and the meaning of each [`ConversionStep`] field are part of the output.

use serde::Serialize;

use crate::error::OctetError;

/// Powers of two tested against the remainder, most significant first.
pub const POWERS: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// One bit decision of the subtraction algorithm.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStep {
    /// Remainder examined before the decision.
    pub value: u8,
    /// Power of two tested.
    pub power: u8,
    /// 1 when `value >= power`.
    pub bit: u8,
    /// `value - power` when the bit is set, `value` otherwise.
    pub new_remainder: u8,
}

impl ConversionStep {
    pub fn is_on(&self) -> bool {
        self.bit == 1
    }
}

/// Bits and bit-decision trace for a single octet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub decimal: u8,
    pub bits: [u8; 8],
    pub steps: [ConversionStep; 8],
}

impl ConversionResult {
    /// Bits as an 8-character string, e.g. `"11000000"`.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|b| if *b == 1 { '1' } else { '0' }).collect()
    }

    /// Bits read back as a big-endian number.
    pub fn value(&self) -> u8 {
        self.bits.iter().fold(0u8, |acc, b| (acc << 1) | b)
    }

    pub fn final_remainder(&self) -> u8 {
        self.steps[self.steps.len() - 1].new_remainder
    }
}

/// Converts an octet to its 8 bits, recording each subtraction step.
pub fn convert(decimal: u8) -> ConversionResult {
    let mut bits = [0u8; 8];
    let mut steps = [ConversionStep {
        value: 0,
        power: 0,
        bit: 0,
        new_remainder: 0,
    }; 8];
    let mut remainder = decimal;
    for (idx, power) in POWERS.iter().copied().enumerate() {
        let on = remainder >= power;
        let new_remainder = if on { remainder - power } else { remainder };
        bits[idx] = on as u8;
        steps[idx] = ConversionStep {
            value: remainder,
            power,
            bit: on as u8,
            new_remainder,
        };
        remainder = new_remainder;
    }
    ConversionResult {
        decimal,
        bits,
        steps,
    }
}

/// Range-checked entry point for callers holding a wider integer.
pub fn octet_to_binary(decimal: u32) -> Result<ConversionResult, OctetError> {
    let octet = u8::try_from(decimal).map_err(|_| OctetError::InvalidArgument(decimal))?;
    Ok(convert(octet))
}

/// Reads a numeric literal the way a browser `Number()` call does: decimal
/// with optional sign, fraction and exponent, or an unsigned `0x`/`0o`/`0b`
/// integer. Input must already be trimmed and non-empty.
fn parse_js_number(text: &str) -> Option<f64> {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0f64, |acc, ch| {
            ch.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        });
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return text.parse::<f64>().ok();
    }
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    if let Some(exp) = exponent {
        let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if exp_digits.is_empty() || !all_digits(exp_digits) {
            return None;
        }
    }
    text.parse::<f64>().ok()
}

/// Parses raw field text into an octet.
///
/// Accepts anything that reads as a whole number in `0..=255` after trimming:
/// `"007"`, `"1.0"`, `"10."`, `"1e2"` and `"0x10"` are all octets.
pub fn parse_octet(raw: &str) -> Result<u8, OctetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OctetError::Empty);
    }
    let number =
        parse_js_number(trimmed).ok_or_else(|| OctetError::NotANumber(trimmed.to_string()))?;
    if !number.is_finite() || number.fract() != 0.0 {
        return Err(OctetError::NotAnInteger(trimmed.to_string()));
    }
    // -0 compares equal to 0 and is accepted.
    if !(0.0..=255.0).contains(&number) {
        return Err(OctetError::OutOfRange(trimmed.to_string()));
    }
    Ok(number as u8)
}

pub fn is_valid_octet(raw: &str) -> bool {
    parse_octet(raw).is_ok()
}

/// True for fields that should carry the "invalid" marker: something was
/// typed, but it is not an octet.
pub fn is_flagged_invalid(raw: &str) -> bool {
    !raw.trim().is_empty() && !is_valid_octet(raw)
}
