/// Length of the run of ASCII digits at the start of `bytes`.
pub fn digit_run_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
///
/// Leading zeros are accepted (`"0080"` is port 80).
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Zero padding does not count toward the u16 range.
    let significant = port.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    significant.parse::<u16>().ok()
}
