//! Text normalisation helpers for asserting on command output.

/// Splits captured output into trimmed, non-empty lines.
#[must_use]
pub fn output_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
