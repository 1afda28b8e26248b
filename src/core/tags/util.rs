//! core/tags/util.rs
//! Small parsing helpers shared by tag reading and the region scanner.

/// Parse strings like:
/// - "3" -> (Some(3), None)
/// - "3/12" -> (Some(3), Some(12))
pub(crate) fn parse_slash_pair_u32(s: Option<&str>) -> (Option<u32>, Option<u32>) {
    let Some(s) = s else { return (None, None) };
    let s = s.trim();
    if s.is_empty() {
        return (None, None);
    }

    let mut parts = s.split('/');
    let a = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let b = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    (a, b)
}

/// Decode a 4-byte ID3v2 "syncsafe" integer (7 bits per byte, high bit always 0).
/// Returns `None` if any high bit is set.
pub(crate) fn parse_syncsafe_u32(bytes: [u8; 4]) -> Option<u32> {
    let mut v: u32 = 0;
    for b in bytes {
        if b & 0x80 != 0 {
            return None;
        }
        v = (v << 7) | u32::from(b);
    }
    Some(v)
}
