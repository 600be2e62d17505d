//! Protocol identifier (PID) octet values.
//!
//! The PID names the layer 3 protocol carried by an I or UI frame. Values
//! are those assigned in AX.25 v2.2, chapter 3.3.

/// ISO 8208/CCITT X.25 PLP.
pub const X25: u8 = 0x01;
/// Compressed TCP/IP packet (Van Jacobson).
pub const COMPRESSED_TCPIP: u8 = 0x06;
/// Uncompressed TCP/IP packet (Van Jacobson).
pub const UNCOMPRESSED_TCPIP: u8 = 0x07;
/// Segmentation fragment.
pub const SEGMENTATION_FRAGMENT: u8 = 0x08;
/// TEXNET datagram protocol.
pub const TEXNET: u8 = 0xc3;
/// Link quality protocol.
pub const LINK_QUALITY: u8 = 0xc4;
/// AppleTalk.
pub const APPLETALK: u8 = 0xca;
/// AppleTalk ARP.
pub const APPLETALK_ARP: u8 = 0xcb;
/// ARPA Internet Protocol.
pub const ARPA_IP: u8 = 0xcc;
/// ARPA address resolution.
pub const ARPA_ARP: u8 = 0xcd;
/// FlexNet.
pub const FLEXNET: u8 = 0xce;
/// NET/ROM.
pub const NETROM: u8 = 0xcf;
/// No layer 3 protocol.
pub const NONE: u8 = 0xf0;
/// Escape character; the next octet carries more layer 3 information.
pub const ESCAPE: u8 = 0xff;
