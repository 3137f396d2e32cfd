// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display helpers for file metadata.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display: base 1024, at most two decimals,
/// trailing zeros trimmed ("0 Bytes", "1.5 KB", "2 MB").
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(human_size(0), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte() {
        assert_eq!(human_size(512), "512 Bytes");
        assert_eq!(human_size(1023), "1023 Bytes");
    }

    #[test]
    fn fractional_units() {
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn largest_unit_is_gigabytes() {
        assert_eq!(human_size(2 * 1024 * 1024 * 1024), "2 GB");
        assert_eq!(human_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
