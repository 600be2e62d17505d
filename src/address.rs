//! Address-field subfield layout.
//!
//! Every subfield is seven octets: six callsign characters, ASCII codes
//! shifted one bit left and space padded, then an SSID octet packing the
//! command/response (or has-been-repeated) bit, two reserved bits, the
//! four SSID bits and the end-of-address extension bit. Bit 0 of every
//! callsign octet is zero; only the last subfield of the address field has
//! the extension bit set.
//!
//! Reference: AX.25 v2.2, chapter 4.1.

#[cfg(feature = "parse")]
use alloc::string::String;

#[cfg(feature = "parse")]
use nom::{IResult, Parser, bytes::complete::take};

use crate::callsign;

/// Command/response bit of a destination or source SSID octet; the
/// has-been-repeated bit of a repeater SSID octet.
pub const CRH_BIT: u8 = 0b1000_0000;
/// The two reserved bits.
pub const RESERVED_MASK: u8 = 0b0110_0000;
/// The four SSID bits.
pub const SSID_MASK: u8 = 0b0001_1110;
/// End-of-address extension bit.
pub const EXTENSION_BIT: u8 = 0b0000_0001;

/// Largest SSID the four-bit field can carry.
pub const MAX_SSID: u8 = 15;

/// Width of the callsign part of a subfield.
pub const CALLSIGN_LEN: usize = callsign::MAX_LEN;
/// Width of one full address subfield.
pub const SUBFIELD_LEN: usize = CALLSIGN_LEN + 1;

/// The SSID carried by an SSID octet.
pub fn ssid_bits(octet: u8) -> u8 {
    (octet & SSID_MASK) >> 1
}

/// The command/response (or has-been-repeated) bit.
pub fn crh_bit(octet: u8) -> bool {
    octet & CRH_BIT != 0
}

/// Whether the octet terminates the address field.
pub fn is_last(octet: u8) -> bool {
    octet & EXTENSION_BIT != 0
}

/// The six wire octets of a callsign: character codes shifted left one
/// bit, space padded to the full width.
#[cfg(feature = "encode")]
pub fn encode_callsign(callsign: &str) -> [u8; CALLSIGN_LEN] {
    let mut field = [b' ' << 1; CALLSIGN_LEN];
    for (slot, byte) in field.iter_mut().zip(callsign.bytes()) {
        *slot = byte << 1;
    }
    field
}

/// Destination SSID octet: command/response bit from `command`, both
/// reserved bits set, extension bit clear (the source subfield always
/// follows).
#[cfg(feature = "encode")]
pub fn destination_octet(ssid: u8, command: bool) -> u8 {
    (u8::from(command) << 7) | RESERVED_MASK | (ssid << 1)
}

/// Source SSID octet: the complement of `command` (the response bit),
/// reserved bit 6 cleared under modulo-128 sequencing, reserved bit 5
/// set, extension bit set when no repeater subfields follow.
#[cfg(feature = "encode")]
pub fn source_octet(ssid: u8, command: bool, modulo128: bool, last: bool) -> u8 {
    (u8::from(!command) << 7)
        | (u8::from(!modulo128) << 6)
        | (1 << 5)
        | (ssid << 1)
        | u8::from(last)
}

/// Repeater SSID octet: extension bit set only on the final repeater.
#[cfg(feature = "encode")]
pub fn repeater_octet(ssid: u8, last: bool) -> u8 {
    (ssid << 1) | u8::from(last)
}

/// Reads the callsign part of a subfield, each octet shifted back right by
/// one bit. Trailing space padding is kept verbatim.
#[cfg(feature = "parse")]
pub fn parse_callsign(input: &[u8]) -> IResult<&[u8], String, ()> {
    let (input, raw) = take(CALLSIGN_LEN).parse(input)?;
    Ok((input, raw.iter().map(|&byte| char::from(byte >> 1)).collect()))
}
