//! Byte count formatting

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format `bytes` for display.
///
/// Raw mode prints the decimal byte count. Human-readable mode scales by the
/// largest power of 1024 that keeps the magnitude below 1024 and prints two
/// decimals plus a binary prefix (`1536` becomes `1.50KB`). Values below 1024
/// are printed as a bare integer in both modes.
#[must_use]
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable || bytes < UNIT {
        return bytes.to_string();
    }

    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp + 1 < PREFIXES.len() {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / div as f64;
    format!("{scaled:.2}{}B", PREFIXES[exp])
}
