/// Longest callsign the address field can carry.
pub const MAX_LEN: usize = 6;

/// Checks whether `callsign` is legal AX.25 callsign text: at most six
/// characters and, after trimming trailing whitespace and upper-casing,
/// only `[0-9A-Z]`.
///
/// The empty string is accepted; whether an empty callsign is usable is the
/// caller's decision (the encoder rejects empty destination and source).
/// The length limit applies before the trim, so an over-long but
/// space-padded string is still rejected.
pub fn is_valid(callsign: &str) -> bool {
    if callsign.chars().count() > MAX_LEN {
        return false;
    }

    callsign.trim_end().chars().all(|c| c.to_ascii_uppercase().is_ascii_alphanumeric())
}
