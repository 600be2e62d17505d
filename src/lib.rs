//! AX.25 version 2.2 link-layer frame encoding and decoding.
//!
//! This library translates between [`Frame`], a validated record of one
//! AX.25 frame, and the exact octets of that frame on the air. It covers
//! the address field with its digipeat path, the standard and the extended
//! (modulo 128) control field formats, the PID octet and the information
//! field. Framing itself is out of scope: flags, bit stuffing and the FCS
//! are handled by the modem or TNC in front of this crate.
//!
//! ## Features
//!
//! - `parse` (default): decoding received frames, via `nom`
//! - `encode` (default): building frames for transmission
//! - `std` (default): `std::error::Error` impls for the error types
//! - `serde`: `Serialize` impls for [`Frame`] and its field types
//!
//! ## Examples
//!
//! ```
//! use ax25_frame::{Frame, FrameType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut frame = Frame::new();
//! frame.set_destination_callsign("APRX29")?;
//! frame.set_source_callsign("SP4MK ")?;
//! frame.set_source_ssid(15)?;
//! frame.set_frame_type(FrameType::UnnumberedInformation);
//! frame.set_info_string("Siema!")?;
//!
//! let bytes = frame.encode()?;
//!
//! let mut received = Frame::new();
//! received.decode(&bytes)?;
//! assert_eq!(received.info_string(), "Siema!");
//! assert_eq!(received.to_string(), "SP4MK-15>APRX29 UI: Siema!");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod callsign;
pub mod control;
pub mod frame;
pub mod pid;
pub mod text;


pub use control::{FrameClass, FrameType};
pub use frame::{Frame, MIN_FRAME_LEN, Repeater};

/// A field value rejected by one of the [`Frame`] setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Callsign is longer than six characters or contains characters
    /// other than ASCII letters and digits.
    InvalidCallsign,
    /// SSID does not fit the four-bit field.
    SsidOutOfRange(u8),
    /// Sequence number exceeds the active modulus.
    SequenceOutOfRange { value: u8, max: u8 },
    /// The frame type does not carry a PID octet.
    PidNotAllowed(FrameType),
    /// The frame type does not carry an information field.
    InfoNotAllowed(FrameType),
    /// Text contains characters outside Latin-1.
    TextNotLatin1,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCallsign => {
                write!(f, "Callsign must be at most six ASCII letters or digits")
            }
            Self::SsidOutOfRange(ssid) => write!(f, "SSID {} is outside the range 0 to 15", ssid),
            Self::SequenceOutOfRange { value, max } => {
                write!(f, "Sequence number {} is outside the range 0 to {}", value, max)
            }
            Self::PidNotAllowed(frame_type) => {
                write!(f, "{} frames do not carry a PID", frame_type)
            }
            Self::InfoNotAllowed(frame_type) => {
                write!(f, "{} frames do not carry an information field", frame_type)
            }
            Self::TextNotLatin1 => write!(f, "Text contains characters outside Latin-1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// A [`Frame`] that cannot be turned into wire octets as it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Destination callsign is not set.
    MissingDestination,
    /// Source callsign is not set.
    MissingSource,
    /// Information frame is missing its PID or its payload.
    MissingPayload,
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDestination => write!(f, "Destination callsign is not set"),
            Self::MissingSource => write!(f, "Source callsign is not set"),
            Self::MissingPayload => {
                write!(f, "Information frame requires a PID and a payload")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// A received byte sequence that does not decode as an AX.25 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is shorter than the smallest possible frame.
    FrameTooShort(usize),
    /// Input ended in the middle of a field.
    Truncated,
    /// Control octet does not match any known frame type.
    UnrecognizedControl(u8),
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FrameTooShort(len) => {
                write!(f, "Frame is {} bytes, shorter than the {} byte minimum", len, MIN_FRAME_LEN)
            }
            Self::Truncated => write!(f, "Frame ended inside a field"),
            Self::UnrecognizedControl(control) => {
                write!(f, "Unrecognized control field 0x{:02x}", control)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
