/// Size and count formatting used by the reports and the GUI.
///
/// All sizes are `u64` bytes; rounding is done in integer arithmetic so the
/// register column never depends on float formatting.
use std::cmp::Ordering;

const KIB: u64 = 1024;

/// Round a byte count to whole kibibytes, ties to even.
///
/// 512 bytes is exactly half a kibibyte and rounds down to 0; 1536 bytes
/// rounds up to 2; 2560 bytes rounds down to 2.
pub fn round_kib(bytes: u64) -> u64 {
    let whole = bytes / KIB;
    match (bytes % KIB).cmp(&(KIB / 2)) {
        Ordering::Less => whole,
        Ordering::Greater => whole + 1,
        Ordering::Equal => whole + (whole & 1),
    }
}

/// Render a byte count the way the register's "Dateigröße" column shows it.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{}kB", round_kib(bytes))
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
