//! Parse captured HTTP response header lines.

/// Returns the `Content-Type` value from raw header lines, or None when the
/// header never appeared. A redirected transfer emits one header block per
/// hop; the last occurrence belongs to the final response and wins.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut found = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                found = Some(value.trim().to_string());
            }
        }
    }
    found
}
