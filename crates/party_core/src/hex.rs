//! Conversions from user numbers to the fixed-width hex slots templates expect.

use crate::core_api::{CoreError, CoreErrorCode};

const LI_OPCODE: u32 = 0x3800_0000;

pub fn hex8(value: u8) -> String {
    format!("{value:02X}")
}

pub fn hex16(value: u16) -> String {
    format!("{value:04X}")
}

pub fn hex24(value: u32) -> String {
    format!("{:06X}", value & 0x00FF_FFFF)
}

/// Sixteen-bit two's complement, as loaded by `li rD, -amount`.
pub fn neg_hex16(value: u16) -> String {
    hex16(value.wrapping_neg())
}

/// Encodes `li reg, imm` (`addi reg, 0, imm`).
pub fn li_instruction(reg: u8, imm: u16) -> String {
    let word = LI_OPCODE | (u32::from(reg & 0x1F) << 21) | u32::from(imm);
    format!("{word:08X}")
}

/// Parses a user-entered amount: decimal, or hex with a `0x` prefix.
pub fn parse_amount(text: &str) -> Result<u16, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::new(
            CoreErrorCode::InvalidInput,
            "amount must not be empty",
        ));
    }

    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => trimmed.parse::<u16>(),
    };

    parsed.map_err(|e| {
        CoreError::new(
            CoreErrorCode::InvalidInput,
            format!("invalid amount {trimmed:?}: {e}"),
        )
    })
}
