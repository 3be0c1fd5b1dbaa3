//! Whitespace normalization for recovered text.

use unicode_normalization::UnicodeNormalization;

/// Normalize recovered text.
///
/// Applies Unicode NFC (OCR output often carries combining characters),
/// collapses runs of horizontal whitespace inside each line to a single
/// space, trims each line, and drops empty lines. Line breaks between
/// non-empty lines are preserved; the line-oriented extractors depend on
/// them.
///
/// Pure and idempotent: `normalize(normalize(t)) == normalize(t)`.
pub fn normalize(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    composed
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("a  \t b"), "a b");
        assert_eq!(normalize("  leading and trailing  "), "leading and trailing");
    }

    #[test]
    fn test_drops_empty_lines_keeps_breaks() {
        let input = "JANE DOE\n\n\nEXPERIENCE\n   \nEngineer, Acme";
        assert_eq!(normalize(input), "JANE DOE\nEXPERIENCE\nEngineer, Acme");
    }

    #[test]
    fn test_handles_crlf() {
        assert_eq!(normalize("one\r\ntwo\r\n"), "one\ntwo");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "JANE DOE\n\n  Senior   Engineer \n\tEXPERIENCE\n",
            "",
            "   ",
            "a\nb\nc",
            "caf\u{0065}\u{0301} menu", // decomposed é
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_nfc_composition() {
        // "é" as e + combining acute becomes the composed code point.
        assert_eq!(normalize("caf\u{0065}\u{0301}"), "caf\u{00e9}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n\n"), "");
    }
}
