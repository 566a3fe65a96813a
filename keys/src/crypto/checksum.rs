//! # CRC16-XModem
//!
//! The StrKey checksum. CCITT polynomial `x^16 + x^12 + x^5 + 1` (0x1021),
//! initial value zero, no reflection, no final XOR. This is the XModem
//! variant, *not* CRC16-CCITT-FALSE (which starts at 0xFFFF).
//!
//! It is not a cryptographic checksum and isn't meant to be. It catches
//! typos: every single-character substitution in a StrKey is a burst error of
//! at most 5 bits, and a 16-bit CRC detects all bursts up to 16 bits.

/// Generator polynomial.
const POLYNOMIAL: u16 = 0x1021;

/// Compute the CRC16-XModem checksum of `data`.
///
/// Bits are processed MSB-first, one at a time. The input is small (at most
/// ~100 bytes for a StrKey) so a lookup table buys nothing.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x0000;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// CRC16 of `data` as the two little-endian bytes appended to a StrKey.
pub fn crc16_le_bytes(data: &[u8]) -> [u8; 2] {
    crc16(data).to_le_bytes()
}
