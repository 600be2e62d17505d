//! The AX.25 frame record: validated field access, wire encoding and wire
//! decoding.
//!
//! [`Frame`] holds the semantic fields of one frame; the control field is
//! never stored, it is derived from the frame type, the sequence numbers
//! and the poll/final flag on demand. Setters check the field's domain,
//! so every reachable record can be encoded as far as field validity is
//! concerned. Encoding and decoding work on the deframed byte sequence
//! between the opening and closing flags; bit stuffing and the FCS belong
//! to the physical framing layer in front of this codec.

use alloc::{string::String, vec::Vec};
use core::fmt;

#[cfg(feature = "parse")]
use nom::number::complete::u8;

use crate::control::{FrameClass, FrameType, MAX_SEQUENCE, MAX_SEQUENCE_MODULO128, PF, PF_MODULO128};
#[cfg(feature = "parse")]
use crate::control::{
    CLASS_MASK, NR_MASK, NR_MODULO128_MASK, NS_MASK, NS_MODULO128_MASK, S_FRAME, U_FRAME,
};
#[cfg(feature = "parse")]
use crate::DecodeError;
#[cfg(feature = "encode")]
use crate::EncodeError;
use crate::{ValidationError, address, callsign, pid, text};

/// Minimum decodable frame: destination and source subfields plus one
/// control octet.
pub const MIN_FRAME_LEN: usize = 2 * address::SUBFIELD_LEN + 1;

/// One entry of the digipeat path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Repeater {
    pub callsign: String,
    pub ssid: u8,
}

impl Repeater {
    pub fn new(callsign: &str, ssid: u8) -> Self {
        Self { callsign: String::from(callsign), ssid }
    }
}

/// One AX.25 frame.
///
/// Field writes go through checked setters and fail with
/// [`ValidationError`] instead of storing an out-of-domain value. The
/// decoder writes wire-derived values directly; decoded callsigns keep
/// their space padding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    destination_callsign: String,
    destination_ssid: u8,
    source_callsign: String,
    source_ssid: u8,
    repeater_path: Vec<Repeater>,
    poll_final: bool,
    command: bool,
    frame_type: FrameType,
    nr: u8,
    ns: u8,
    pid: Option<u8>,
    info: Vec<u8>,
    sent: bool,
    modulo128: bool,
}

impl Frame {
    /// An empty frame: blank callsigns, zero SSIDs, no repeaters, an
    /// Information type and the "no layer 3" PID.
    pub fn new() -> Self {
        Self {
            destination_callsign: String::new(),
            destination_ssid: 0,
            source_callsign: String::new(),
            source_ssid: 0,
            repeater_path: Vec::new(),
            poll_final: false,
            command: false,
            frame_type: FrameType::Information,
            nr: 0,
            ns: 0,
            pid: Some(pid::NONE),
            info: Vec::new(),
            sent: false,
            modulo128: false,
        }
    }

    pub fn destination_callsign(&self) -> &str {
        &self.destination_callsign
    }

    pub fn set_destination_callsign(&mut self, callsign: &str) -> Result<(), ValidationError> {
        if !callsign::is_valid(callsign) {
            return Err(ValidationError::InvalidCallsign);
        }
        self.destination_callsign = String::from(callsign);
        Ok(())
    }

    pub fn destination_ssid(&self) -> u8 {
        self.destination_ssid
    }

    pub fn set_destination_ssid(&mut self, ssid: u8) -> Result<(), ValidationError> {
        if ssid > address::MAX_SSID {
            return Err(ValidationError::SsidOutOfRange(ssid));
        }
        self.destination_ssid = ssid;
        Ok(())
    }

    pub fn source_callsign(&self) -> &str {
        &self.source_callsign
    }

    pub fn set_source_callsign(&mut self, callsign: &str) -> Result<(), ValidationError> {
        if !callsign::is_valid(callsign) {
            return Err(ValidationError::InvalidCallsign);
        }
        self.source_callsign = String::from(callsign);
        Ok(())
    }

    pub fn source_ssid(&self) -> u8 {
        self.source_ssid
    }

    pub fn set_source_ssid(&mut self, ssid: u8) -> Result<(), ValidationError> {
        if ssid > address::MAX_SSID {
            return Err(ValidationError::SsidOutOfRange(ssid));
        }
        self.source_ssid = ssid;
        Ok(())
    }

    pub fn repeater_path(&self) -> &[Repeater] {
        &self.repeater_path
    }

    /// Replaces the digipeat path. Order is the routing order; the last
    /// entry is marked end-of-address on the wire.
    pub fn set_repeater_path(&mut self, path: Vec<Repeater>) -> Result<(), ValidationError> {
        for repeater in &path {
            if !callsign::is_valid(&repeater.callsign) {
                return Err(ValidationError::InvalidCallsign);
            }
            if repeater.ssid > address::MAX_SSID {
                return Err(ValidationError::SsidOutOfRange(repeater.ssid));
            }
        }
        self.repeater_path = path;
        Ok(())
    }

    pub fn poll_final(&self) -> bool {
        self.poll_final
    }

    pub fn set_poll_final(&mut self, poll_final: bool) {
        self.poll_final = poll_final;
    }

    pub fn command(&self) -> bool {
        self.command
    }

    pub fn set_command(&mut self, command: bool) {
        self.command = command;
    }

    /// Response view of the command/response flag: the same underlying bit
    /// read and written under its other name.
    pub fn response(&self) -> bool {
        self.command
    }

    pub fn set_response(&mut self, response: bool) {
        self.command = response;
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    /// Changing the type does not touch fields that only carry meaning for
    /// some types; a stored PID or payload simply stops being emitted.
    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        self.frame_type = frame_type;
    }

    pub fn nr(&self) -> u8 {
        self.nr
    }

    pub fn set_nr(&mut self, nr: u8) -> Result<(), ValidationError> {
        let max = self.max_sequence();
        if nr > max {
            return Err(ValidationError::SequenceOutOfRange { value: nr, max });
        }
        self.nr = nr;
        Ok(())
    }

    pub fn ns(&self) -> u8 {
        self.ns
    }

    pub fn set_ns(&mut self, ns: u8) -> Result<(), ValidationError> {
        let max = self.max_sequence();
        if ns > max {
            return Err(ValidationError::SequenceOutOfRange { value: ns, max });
        }
        self.ns = ns;
        Ok(())
    }

    pub fn pid(&self) -> Option<u8> {
        self.pid
    }

    /// The PID only exists on I and UI frames.
    pub fn set_pid(&mut self, pid: u8) -> Result<(), ValidationError> {
        if !matches!(self.frame_type, FrameType::Information | FrameType::UnnumberedInformation) {
            return Err(ValidationError::PidNotAllowed(self.frame_type));
        }
        self.pid = Some(pid);
        Ok(())
    }

    pub fn info(&self) -> &[u8] {
        &self.info
    }

    /// The payload field belongs to Information frames and the Unnumbered
    /// class; Supervisory frames carry none.
    pub fn set_info(&mut self, info: Vec<u8>) -> Result<(), ValidationError> {
        if self.frame_type.class() == FrameClass::Supervisory {
            return Err(ValidationError::InfoNotAllowed(self.frame_type));
        }
        self.info = info;
        Ok(())
    }

    /// The payload as Latin-1 text.
    pub fn info_string(&self) -> String {
        text::from_bytes(&self.info)
    }

    pub fn set_info_string(&mut self, info: &str) -> Result<(), ValidationError> {
        let bytes = text::to_bytes(info)?;
        self.set_info(bytes)
    }

    pub fn sent(&self) -> bool {
        self.sent
    }

    /// Bookkeeping only; never read or written by the codec.
    pub fn set_sent(&mut self, sent: bool) {
        self.sent = sent;
    }

    pub fn modulo128(&self) -> bool {
        self.modulo128
    }

    /// Selects extended (modulo 128) sequencing. Stored sequence numbers
    /// are not re-examined; `set_nr`/`set_ns` check against the mode
    /// active at call time.
    pub fn set_modulo128(&mut self, modulo128: bool) {
        self.modulo128 = modulo128;
    }

    /// The control field derived from the frame type, the sequence numbers
    /// and the poll/final flag. Unnumbered frames keep the single-octet
    /// layout in every mode, so their value always fits the low byte.
    pub fn control(&self) -> u16 {
        let extended = self.extended_control();
        let mut control = u16::from(self.frame_type as u8);

        if matches!(self.frame_type.class(), FrameClass::Information | FrameClass::Supervisory) {
            control |= u16::from(self.nr) << if extended { 9 } else { 5 };
        }
        if self.frame_type == FrameType::Information {
            control |= u16::from(self.ns) << 1;
        }
        if self.poll_final {
            control |= if extended { PF_MODULO128 } else { u16::from(PF) };
        }

        control
    }

    fn max_sequence(&self) -> u8 {
        if self.modulo128 { MAX_SEQUENCE_MODULO128 } else { MAX_SEQUENCE }
    }

    /// Whether this frame uses the 16-bit control word.
    fn extended_control(&self) -> bool {
        self.modulo128 && self.frame_type.class() != FrameClass::Unnumbered
    }

    /// The wire octets of the frame: address field, control field, then
    /// PID and payload where the frame type carries them. No flags, FCS or
    /// bit stuffing. All-or-nothing; nothing is produced on error.
    #[cfg(feature = "encode")]
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        if self.destination_callsign.is_empty() {
            return Err(EncodeError::MissingDestination);
        }
        if self.source_callsign.is_empty() {
            return Err(EncodeError::MissingSource);
        }
        if self.frame_type == FrameType::Information
            && (self.pid.is_none() || self.info.is_empty())
        {
            return Err(EncodeError::MissingPayload);
        }

        let mut frame = Vec::with_capacity(
            (2 + self.repeater_path.len()) * address::SUBFIELD_LEN + 3 + self.info.len(),
        );

        frame.extend_from_slice(&address::encode_callsign(&self.destination_callsign));
        frame.push(address::destination_octet(self.destination_ssid, self.command));
        frame.extend_from_slice(&address::encode_callsign(&self.source_callsign));
        frame.push(address::source_octet(
            self.source_ssid,
            self.command,
            self.modulo128,
            self.repeater_path.is_empty(),
        ));
        for (index, repeater) in self.repeater_path.iter().enumerate() {
            frame.extend_from_slice(&address::encode_callsign(&repeater.callsign));
            frame
                .push(address::repeater_octet(repeater.ssid, index == self.repeater_path.len() - 1));
        }

        let control = self.control();
        if self.extended_control() {
            frame.push((control & 0xff) as u8);
            frame.push((control >> 8) as u8);
        } else {
            frame.push(control as u8);
        }

        let carries_pid = matches!(
            self.frame_type,
            FrameType::Information | FrameType::UnnumberedInformation
        );
        if carries_pid {
            if let Some(pid) = self.pid {
                frame.push(pid);
            }
        }
        if !self.info.is_empty() && (carries_pid || self.frame_type == FrameType::Test) {
            frame.extend_from_slice(&self.info);
        }

        Ok(frame)
    }

    /// Decodes a received frame into this record in one forward scan,
    /// overwriting the address and control fields and appending to the
    /// repeater path.
    ///
    /// `modulo128` must already be set to match the link: the extended
    /// control format is not self-describing, and an extended I or S frame
    /// decoded in standard mode misreads the control field and everything
    /// after it. On error the record keeps the fields populated before the
    /// failure and should be discarded.
    #[cfg(feature = "parse")]
    pub fn decode(&mut self, frame: &[u8]) -> Result<(), DecodeError> {
        if frame.len() < MIN_FRAME_LEN {
            return Err(DecodeError::FrameTooShort(frame.len()));
        }

        let (input, destination) = read_callsign(frame)?;
        self.destination_callsign = destination;
        let (input, destination_octet) = read_octet(input)?;
        self.destination_ssid = address::ssid_bits(destination_octet);
        self.command = address::crh_bit(destination_octet);

        let (input, source) = read_callsign(input)?;
        self.source_callsign = source;
        let (mut input, mut marker) = read_octet(input)?;
        self.source_ssid = address::ssid_bits(marker);

        // The source SSID octet doubles as the first end-of-address marker.
        while !address::is_last(marker) {
            let (rest, repeater) = read_callsign(input)?;
            let (rest, repeater_octet) = read_octet(rest)?;
            self.repeater_path
                .push(Repeater { callsign: repeater, ssid: address::ssid_bits(repeater_octet) });
            input = rest;
            marker = repeater_octet;
        }

        let (input, first) = read_octet(input)?;
        match first & CLASS_MASK {
            U_FRAME => {
                self.poll_final = first & PF != 0;
                self.frame_type =
                    FrameType::from_control(first).map_err(DecodeError::UnrecognizedControl)?;
                match self.frame_type {
                    FrameType::UnnumberedInformation => {
                        let (input, pid) = read_octet(input)?;
                        self.pid = Some(pid);
                        self.info = input.to_vec();
                    }
                    FrameType::Test if !input.is_empty() => {
                        self.info = input.to_vec();
                    }
                    FrameType::ExchangeIdentification => {
                        // XID negotiation parameters are recognized but not
                        // parsed; any payload is dropped.
                    }
                    _ => {}
                }
            }
            S_FRAME => {
                self.frame_type =
                    FrameType::from_control(first).map_err(DecodeError::UnrecognizedControl)?;
                if self.modulo128 {
                    let (_, second) = read_octet(input)?;
                    let control = u16::from(first) | (u16::from(second) << 8);
                    self.nr = ((control & NR_MODULO128_MASK) >> 9) as u8;
                    self.poll_final = control & PF_MODULO128 != 0;
                } else {
                    self.nr = (first & NR_MASK) >> 5;
                    self.poll_final = first & PF != 0;
                }
            }
            _ => {
                self.frame_type = FrameType::Information;
                let input = if self.modulo128 {
                    let (input, second) = read_octet(input)?;
                    let control = u16::from(first) | (u16::from(second) << 8);
                    self.nr = ((control & NR_MODULO128_MASK) >> 9) as u8;
                    self.ns = ((control & NS_MODULO128_MASK) >> 1) as u8;
                    self.poll_final = control & PF_MODULO128 != 0;
                    input
                } else {
                    self.nr = (first & NR_MASK) >> 5;
                    self.ns = (first & NS_MASK) >> 1;
                    self.poll_final = first & PF != 0;
                    input
                };
                let (input, pid) = read_octet(input)?;
                self.pid = Some(pid);
                self.info = input.to_vec();
            }
        }

        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Conventional monitor form, callsigns trimmed for display:
/// `SOURCE-1>DEST,DIGI1,DIGI2 TYPE: payload`.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_station(f, &self.source_callsign, self.source_ssid)?;
        f.write_str(">")?;
        write_station(f, &self.destination_callsign, self.destination_ssid)?;
        for repeater in &self.repeater_path {
            f.write_str(",")?;
            write_station(f, &repeater.callsign, repeater.ssid)?;
        }
        write!(f, " {}", self.frame_type)?;
        if !self.info.is_empty() {
            write!(f, ": {}", self.info_string())?;
        }
        Ok(())
    }
}

fn write_station(f: &mut fmt::Formatter<'_>, callsign: &str, ssid: u8) -> fmt::Result {
    f.write_str(callsign.trim_end())?;
    if ssid > 0 {
        write!(f, "-{}", ssid)?;
    }
    Ok(())
}

#[cfg(feature = "parse")]
fn read_octet(input: &[u8]) -> Result<(&[u8], u8), DecodeError> {
    u8::<_, ()>(input).map_err(|_| DecodeError::Truncated)
}

#[cfg(feature = "parse")]
fn read_callsign(input: &[u8]) -> Result<(&[u8], String), DecodeError> {
    address::parse_callsign(input).map_err(|_| DecodeError::Truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    #[cfg(feature = "encode")]
    fn station_pair() -> Frame {
        let mut frame = Frame::new();
        frame.set_destination_callsign("N0CALL").unwrap();
        frame.set_source_callsign("N1CALL").unwrap();
        frame.set_source_ssid(1).unwrap();
        frame
    }

    #[test]
    fn test_new_frame_defaults() {
        let frame = Frame::new();

        assert_eq!(frame.destination_callsign(), "");
        assert_eq!(frame.source_callsign(), "");
        assert_eq!(frame.destination_ssid(), 0);
        assert_eq!(frame.source_ssid(), 0);
        assert!(frame.repeater_path().is_empty());
        assert_eq!(frame.frame_type(), FrameType::Information);
        assert_eq!(frame.pid(), Some(pid::NONE));
        assert!(frame.info().is_empty());
        assert!(!frame.poll_final());
        assert!(!frame.command());
        assert!(!frame.sent());
        assert!(!frame.modulo128());
    }

    #[test]
    fn test_set_callsign_validates() {
        let mut frame = Frame::new();

        assert!(frame.set_destination_callsign("APRX29").is_ok());
        assert_eq!(frame.set_destination_callsign("TOOLONG1"), Err(ValidationError::InvalidCallsign));
        assert_eq!(frame.set_source_callsign("AB-3"), Err(ValidationError::InvalidCallsign));
        // The failed writes left the fields alone.
        assert_eq!(frame.destination_callsign(), "APRX29");
        assert_eq!(frame.source_callsign(), "");
    }

    #[test]
    fn test_set_callsign_keeps_case_and_padding() {
        let mut frame = Frame::new();

        frame.set_source_callsign("SP4MK ").unwrap();
        assert_eq!(frame.source_callsign(), "SP4MK ");

        frame.set_source_callsign("sp4mk").unwrap();
        assert_eq!(frame.source_callsign(), "sp4mk");
    }

    #[test]
    fn test_ssid_boundary() {
        let mut frame = Frame::new();

        assert!(frame.set_destination_ssid(15).is_ok());
        assert_eq!(frame.set_destination_ssid(16), Err(ValidationError::SsidOutOfRange(16)));
        assert_eq!(frame.destination_ssid(), 15);

        assert!(frame.set_source_ssid(15).is_ok());
        assert_eq!(frame.set_source_ssid(255), Err(ValidationError::SsidOutOfRange(255)));
    }

    #[test]
    fn test_repeater_path_validation() {
        let mut frame = Frame::new();

        assert!(frame.set_repeater_path(vec![Repeater::new("WIDE1", 1)]).is_ok());
        assert_eq!(
            frame.set_repeater_path(vec![Repeater::new("TOOLONG1", 0)]),
            Err(ValidationError::InvalidCallsign)
        );
        assert_eq!(
            frame.set_repeater_path(vec![Repeater::new("WIDE2", 16)]),
            Err(ValidationError::SsidOutOfRange(16))
        );
        // The last successful path is still in place.
        assert_eq!(frame.repeater_path(), &[Repeater::new("WIDE1", 1)]);
    }

    #[test]
    fn test_sequence_boundary_standard() {
        let mut frame = Frame::new();

        assert!(frame.set_ns(7).is_ok());
        assert_eq!(frame.set_ns(8), Err(ValidationError::SequenceOutOfRange { value: 8, max: 7 }));
        assert!(frame.set_nr(7).is_ok());
        assert_eq!(frame.set_nr(8), Err(ValidationError::SequenceOutOfRange { value: 8, max: 7 }));
    }

    #[test]
    fn test_sequence_boundary_modulo128() {
        let mut frame = Frame::new();
        frame.set_modulo128(true);

        assert!(frame.set_ns(127).is_ok());
        assert_eq!(
            frame.set_ns(128),
            Err(ValidationError::SequenceOutOfRange { value: 128, max: 127 })
        );
        assert!(frame.set_nr(127).is_ok());
        assert_eq!(
            frame.set_nr(128),
            Err(ValidationError::SequenceOutOfRange { value: 128, max: 127 })
        );
    }

    #[test]
    fn test_pid_only_on_information_frames() {
        let mut frame = Frame::new();

        assert!(frame.set_pid(pid::NETROM).is_ok());
        frame.set_frame_type(FrameType::UnnumberedInformation);
        assert!(frame.set_pid(pid::NONE).is_ok());

        frame.set_frame_type(FrameType::ReceiveReady);
        assert_eq!(
            frame.set_pid(pid::NONE),
            Err(ValidationError::PidNotAllowed(FrameType::ReceiveReady))
        );
        assert_eq!(frame.pid(), Some(pid::NONE));
    }

    #[test]
    fn test_info_not_on_supervisory_frames() {
        let mut frame = Frame::new();

        assert!(frame.set_info(vec![0x73]).is_ok());
        frame.set_frame_type(FrameType::Test);
        assert!(frame.set_info(vec![0x73]).is_ok());

        frame.set_frame_type(FrameType::Reject);
        assert_eq!(
            frame.set_info(vec![0x73]),
            Err(ValidationError::InfoNotAllowed(FrameType::Reject))
        );
    }

    #[test]
    fn test_info_string_accessors() {
        let mut frame = Frame::new();

        frame.set_info_string("Siema!").unwrap();
        assert_eq!(frame.info(), b"Siema!");
        assert_eq!(frame.info_string(), "Siema!");

        assert_eq!(frame.set_info_string("\u{2022}"), Err(ValidationError::TextNotLatin1));
        assert_eq!(frame.info(), b"Siema!");
    }

    #[test]
    fn test_response_is_the_command_bit() {
        let mut frame = Frame::new();

        frame.set_command(true);
        assert!(frame.response());
        frame.set_response(false);
        assert!(!frame.command());
    }

    #[test]
    fn test_control_information_standard() {
        let mut frame = Frame::new();
        frame.set_ns(3).unwrap();
        frame.set_nr(5).unwrap();
        frame.set_poll_final(true);

        assert_eq!(frame.control(), 0x00b6);
    }

    #[test]
    fn test_control_supervisory_standard() {
        let mut frame = Frame::new();
        frame.set_frame_type(FrameType::ReceiveReady);
        frame.set_nr(5).unwrap();
        frame.set_poll_final(true);

        assert_eq!(frame.control(), 0x00b1);
    }

    #[test]
    fn test_control_modulo128() {
        let mut frame = Frame::new();
        frame.set_modulo128(true);
        frame.set_ns(64).unwrap();
        frame.set_nr(127).unwrap();

        assert_eq!(frame.control(), 0xfe80);

        frame.set_poll_final(true);
        assert_eq!(frame.control(), 0xff80);

        let mut frame = Frame::new();
        frame.set_modulo128(true);
        frame.set_frame_type(FrameType::ReceiveReady);
        frame.set_nr(100).unwrap();
        frame.set_poll_final(true);
        assert_eq!(frame.control(), 0xc901);
    }

    #[test]
    fn test_control_unnumbered_stays_single_octet() {
        let mut frame = Frame::new();
        frame.set_modulo128(true);
        frame.set_frame_type(FrameType::UnnumberedInformation);
        frame.set_poll_final(true);

        // The poll bit stays at position 4; U control never widens.
        assert_eq!(frame.control(), 0x0013);
    }

    #[test]
    fn test_display_monitor_form() {
        let mut frame = Frame::new();
        frame.set_destination_callsign("APRX29").unwrap();
        frame.set_source_callsign("SP4MK ").unwrap();
        frame.set_source_ssid(15).unwrap();
        frame.set_repeater_path(vec![Repeater::new("SR4DIG", 0)]).unwrap();
        frame.set_info_string("Siema!").unwrap();

        assert_eq!(frame.to_string(), "SP4MK-15>APRX29,SR4DIG I: Siema!");
    }

    #[cfg(feature = "encode")]
    #[test]
    fn test_encode_requires_callsigns() {
        let mut frame = Frame::new();
        frame.set_frame_type(FrameType::UnnumberedInformation);

        assert_eq!(frame.encode(), Err(EncodeError::MissingDestination));
        frame.set_destination_callsign("N0CALL").unwrap();
        assert_eq!(frame.encode(), Err(EncodeError::MissingSource));
    }

    #[cfg(feature = "encode")]
    #[test]
    fn test_encode_information_requires_payload() {
        let mut frame = station_pair();

        assert_eq!(frame.encode(), Err(EncodeError::MissingPayload));
        frame.set_info_string("73").unwrap();
        assert!(frame.encode().is_ok());
    }

    #[cfg(feature = "encode")]
    #[test]
    fn test_encode_supervisory() {
        let mut frame = station_pair();
        frame.set_command(true);
        frame.set_frame_type(FrameType::ReceiveReady);
        frame.set_nr(2).unwrap();

        assert_eq!(
            frame.encode().unwrap(),
            vec![
                0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0xe0, // N0CALL, command set
                0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x63, // N1CALL-1, end of address
                0x41, // RR, nr=2
            ]
        );
    }

    #[cfg(feature = "encode")]
    #[test]
    fn test_encode_ui_with_pid_and_payload() {
        let mut frame = station_pair();
        frame.set_frame_type(FrameType::UnnumberedInformation);
        frame.set_pid(pid::NONE).unwrap();
        frame.set_info_string("hi").unwrap();

        let bytes = frame.encode().unwrap();
        assert_eq!(&bytes[14..], &[0x03, 0xf0, 0x68, 0x69]);
    }

    #[cfg(feature = "encode")]
    #[test]
    fn test_encode_test_frame_has_no_pid() {
        let mut frame = station_pair();
        frame.set_frame_type(FrameType::Test);
        frame.set_info(vec![0xaa, 0x55]).unwrap();

        let bytes = frame.encode().unwrap();
        // Control is followed directly by the payload.
        assert_eq!(&bytes[14..], &[0xe3, 0xaa, 0x55]);
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_rejects_short_input() {
        let mut frame = Frame::new();

        assert_eq!(frame.decode(&[0x00; 10]), Err(DecodeError::FrameTooShort(10)));
        // Nothing was touched.
        assert_eq!(frame, Frame::new());
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_supervisory() {
        let mut frame = Frame::new();
        frame
            .decode(&[
                0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0xe0, //
                0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x63, //
                0x41,
            ])
            .unwrap();

        assert_eq!(frame.destination_callsign(), "N0CALL");
        assert_eq!(frame.source_callsign(), "N1CALL");
        assert_eq!(frame.source_ssid(), 1);
        assert!(frame.command());
        assert_eq!(frame.frame_type(), FrameType::ReceiveReady);
        assert_eq!(frame.nr(), 2);
        assert!(!frame.poll_final());
        assert!(frame.repeater_path().is_empty());
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_unrecognized_control() {
        let mut frame = Frame::new();

        let result = frame.decode(&[
            0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0x60, //
            0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x63, //
            0x23,
        ]);
        assert_eq!(result, Err(DecodeError::UnrecognizedControl(0x23)));
        // The address field had already been consumed.
        assert_eq!(frame.destination_callsign(), "N0CALL");
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_truncated_repeater_subfield() {
        let mut frame = Frame::new();

        // Source octet leaves the extension bit clear, but the input ends
        // one byte later.
        let result = frame.decode(&[
            0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0x60, //
            0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x62, //
            0x41,
        ]);
        assert_eq!(result, Err(DecodeError::Truncated));
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_truncated_information_pid() {
        let mut frame = Frame::new();

        // An I control octet with nothing after it.
        let result = frame.decode(&[
            0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0x60, //
            0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x63, //
            0x00,
        ]);
        assert_eq!(result, Err(DecodeError::Truncated));
    }

    #[cfg(feature = "parse")]
    #[test]
    fn test_decode_xid_drops_parameters() {
        let mut frame = Frame::new();
        frame
            .decode(&[
                0x9c, 0x60, 0x86, 0x82, 0x98, 0x98, 0x60, //
                0x9c, 0x62, 0x86, 0x82, 0x98, 0x98, 0x63, //
                0xaf, 0x01, 0x02, 0x03,
            ])
            .unwrap();

        assert_eq!(frame.frame_type(), FrameType::ExchangeIdentification);
        assert!(frame.info().is_empty());
    }

    #[cfg(all(feature = "encode", feature = "parse"))]
    #[test]
    fn test_roundtrip_supervisory() {
        let mut frame = station_pair();
        frame.set_frame_type(FrameType::ReceiveNotReady);
        frame.set_nr(6).unwrap();
        frame.set_poll_final(true);

        let mut decoded = Frame::new();
        decoded.decode(&frame.encode().unwrap()).unwrap();
        assert_eq!(decoded, frame);
    }

    #[cfg(all(feature = "encode", feature = "parse"))]
    #[test]
    fn test_roundtrip_keeps_wire_pid_byte() {
        let mut frame = station_pair();
        frame.set_frame_type(FrameType::UnnumberedInformation);
        frame.set_pid(0x00).unwrap();
        frame.set_info(vec![0x01]).unwrap();

        let bytes = frame.encode().unwrap();
        assert_eq!(&bytes[14..], &[0x03, 0x00, 0x01]);

        let mut decoded = Frame::new();
        decoded.decode(&bytes).unwrap();
        assert_eq!(decoded.pid(), Some(0x00));
    }

    #[cfg(all(feature = "encode", feature = "parse"))]
    #[test]
    fn test_decode_keeps_callsign_padding() {
        let mut frame = station_pair();
        frame.set_destination_callsign("ABC").unwrap();
        frame.set_frame_type(FrameType::UnnumberedAck);

        let mut decoded = Frame::new();
        decoded.decode(&frame.encode().unwrap()).unwrap();
        assert_eq!(decoded.destination_callsign(), "ABC   ");
    }
}
