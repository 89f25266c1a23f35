// Copyright (c) KAI
// SPDX-License-Identifier: Apache-2.0

//! Rupiah formatting in the id-ID style used across the dashboard

/// Separator between the currency symbol and the digits, a no-break space
/// as emitted by id-ID number formatting.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Format a whole-rupiah amount, e.g. `450000` -> `"Rp\u{a0}450.000"`.
pub fn format_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("Rp{}{}", SYMBOL_SEPARATOR, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_idr() {
        assert_eq!(format_idr(0), "Rp\u{a0}0");
        assert_eq!(format_idr(999), "Rp\u{a0}999");
        assert_eq!(format_idr(1_000), "Rp\u{a0}1.000");
        assert_eq!(format_idr(450_000), "Rp\u{a0}450.000");
        assert_eq!(format_idr(6_100_000), "Rp\u{a0}6.100.000");
    }

    #[test]
    fn test_separator_is_no_break_space() {
        let formatted = format_idr(350_000);
        assert!(!formatted.contains(' '));
        assert_eq!(formatted.chars().nth(2), Some('\u{a0}'));
    }
}
