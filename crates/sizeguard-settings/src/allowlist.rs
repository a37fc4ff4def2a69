/// Parse allowlist file contents: one glob per line.
///
/// Lines are trimmed; empty lines and lines starting with `#` are skipped.
pub fn parse_allowlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
