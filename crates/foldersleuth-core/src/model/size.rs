/// Size formatting utilities: human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Units in ascending order; sizes of a terabyte and up stay in GB.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Picks the unit from `floor(log1024(bytes))`, scales, rounds to two
/// decimals and drops trailing zeros: `1536` → `"1.5 KB"`, `1 GiB` → `"1 GB"`.
/// The exponent is computed with integer arithmetic so exact powers of 1024
/// never land one unit too low.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exp = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exp as i32);
    format!("{} {}", trim_decimals(scaled), UNITS[exp])
}

/// Two decimal places without trailing zeros (`1.50` → `1.5`, `2.00` → `2`).
///
/// Ties round up (`1.125` → `1.13`). `{:.2}` alone would round them to even.
fn trim_decimals(value: f64) -> String {
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    let fixed = format!("{rounded:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a file count with thousand separators.
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
