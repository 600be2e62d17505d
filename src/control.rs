//! Control-field layout: frame classes, frame types and the sequence and
//! poll/final bits.
//!
//! The low two bits of the first control octet select the frame class.
//! Information and Supervisory frames carry sequence numbers in the
//! remaining bits and grow to a 16-bit control word under modulo-128
//! sequencing; Unnumbered frames carry a modifier pattern instead and keep
//! the single-octet layout in every mode.
//!
//! Reference: AX.25 Link Access Protocol for Amateur Packet Radio v2.2,
//! chapter 4.2.

use core::fmt;

use derive_try_from_primitive::TryFromPrimitive;

/// Class code of a Supervisory control octet (bit 0 set, bit 1 clear).
pub const S_FRAME: u8 = 0b01;
/// Class code of an Unnumbered control octet (bits 0 and 1 set).
pub const U_FRAME: u8 = 0b11;
/// Frame-class bits of the first control octet.
pub const CLASS_MASK: u8 = 0b0000_0011;
/// Supervisory subtype: class plus S bits, N(R) and poll/final stripped.
pub const S_SUBTYPE_MASK: u8 = 0b0000_1101;
/// Unnumbered subtype: class plus M bits, poll/final stripped.
pub const U_SUBTYPE_MASK: u8 = 0b1110_1111;

/// Poll/final bit of a standard control octet.
pub const PF: u8 = 0b0001_0000;
/// N(R) bits of a standard control octet.
pub const NR_MASK: u8 = 0b1110_0000;
/// N(S) bits of a standard control octet.
pub const NS_MASK: u8 = 0b0000_1110;

/// Poll/final bit of a modulo-128 control word.
pub const PF_MODULO128: u16 = 1 << 8;
/// N(R) bits of a modulo-128 control word.
pub const NR_MODULO128_MASK: u16 = 0x7f << 9;
/// N(S) bits of a modulo-128 control word.
pub const NS_MODULO128_MASK: u16 = 0x7f << 1;

/// Largest sequence number under standard sequencing.
pub const MAX_SEQUENCE: u8 = 7;
/// Largest sequence number under modulo-128 sequencing.
pub const MAX_SEQUENCE_MODULO128: u8 = 127;

/// The three AX.25 frame classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FrameClass {
    Information,
    Supervisory,
    Unnumbered,
}

/// Frame types, with the raw control-field value (sequence numbers zero,
/// poll/final clear) as discriminant.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum FrameType {
    Information                  = 0x00,
    ReceiveReady                 = 0x01,
    UnnumberedInformation        = 0x03,
    ReceiveNotReady              = 0x05,
    Reject                       = 0x09,
    SelectiveReject              = 0x0d,
    DisconnectedMode             = 0x0f,
    SetAsyncBalancedMode         = 0x2f,
    Disconnect                   = 0x43,
    UnnumberedAck                = 0x63,
    SetAsyncBalancedModeExtended = 0x6f,
    FrameReject                  = 0x87,
    ExchangeIdentification       = 0xaf,
    Test                         = 0xe3,
}

impl FrameType {
    /// The class encoded in the low two bits of the control value.
    pub fn class(self) -> FrameClass {
        match self as u8 & CLASS_MASK {
            U_FRAME => FrameClass::Unnumbered,
            S_FRAME => FrameClass::Supervisory,
            _ => FrameClass::Information,
        }
    }

    /// Classifies a first control octet, stripping the sequence and
    /// poll/final bits. Returns the octet unchanged when the unnumbered
    /// modifier bits match no assigned frame type.
    pub fn from_control(control: u8) -> Result<Self, u8> {
        match control & CLASS_MASK {
            U_FRAME => Self::try_from(control & U_SUBTYPE_MASK).map_err(|_| control),
            S_FRAME => Self::try_from(control & S_SUBTYPE_MASK).map_err(|_| control),
            _ => Ok(Self::Information),
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Information => "I",
            Self::ReceiveReady => "RR",
            Self::UnnumberedInformation => "UI",
            Self::ReceiveNotReady => "RNR",
            Self::Reject => "REJ",
            Self::SelectiveReject => "SREJ",
            Self::DisconnectedMode => "DM",
            Self::SetAsyncBalancedMode => "SABM",
            Self::Disconnect => "DISC",
            Self::UnnumberedAck => "UA",
            Self::SetAsyncBalancedModeExtended => "SABME",
            Self::FrameReject => "FRMR",
            Self::ExchangeIdentification => "XID",
            Self::Test => "TEST",
        })
    }
}

/// How many frames `leader` is ahead of `follower` in sequence-number
/// space, modulo `modulus` (8 or 128). Window arithmetic for the state
/// machines consuming N(R)/N(S).
pub fn sequence_distance(leader: u8, follower: u8, modulus: u8) -> u8 {
    if leader < follower { leader + (modulus - follower) } else { leader - follower }
}
