//! Generic fixed-column record parser.
//!
//! Every UCTE record occupies one line, and every field sits at a fixed
//! character range of that line. [`field`] extracts and coerces a single
//! field; [`UcteRecord`] ties a record type to its column layout.

/// Trait for types that can be parsed from one line of a UCTE section.
///
/// Implementations decode each attribute independently through the
/// [`field`] helpers, so one bad field never prevents the rest of the record
/// from being built. Parsing cannot fail.
pub trait UcteRecord: Sized + Send {
    /// Record kind, used in diagnostics.
    const KIND: &'static str;

    /// Builds a record from one line (without its line terminator).
    fn from_line(line: &str) -> Self;
}

/// Helper functions for decoding fixed-column field values.
///
/// Ranges are half-open and count characters, not bytes. A range that runs
/// past the end of the line is clipped to it, so truncated lines decode
/// whatever is present. Blank or malformed content decodes to `None`.
pub mod field {
    use std::ops::Range;
    use std::str::FromStr;

    /// Byte offset of the character at `position`, or the line length past the end.
    fn byte_offset(line: &str, position: usize) -> usize {
        line.char_indices()
            .nth(position)
            .map_or(line.len(), |(offset, _)| offset)
    }

    /// Returns the characters of `line` in `range`, clipped to the line.
    pub fn slice(line: &str, range: Range<usize>) -> &str {
        debug_assert!(range.start <= range.end, "reversed field range {:?}", range);
        let start = byte_offset(line, range.start);
        let end = byte_offset(line, range.end).max(start);
        &line[start..end]
    }

    /// Parses a decimal integer with an optional sign. Surrounding blanks are ignored.
    pub fn integer<T: FromStr>(line: &str, range: Range<usize>) -> Option<T> {
        let value = slice(line, range).trim();
        if value.is_empty() {
            return None;
        }
        value.parse::<T>().ok()
    }

    /// Parses a finite decimal number. Surrounding blanks are ignored.
    pub fn real(line: &str, range: Range<usize>) -> Option<f64> {
        let value = slice(line, range).trim();
        if value.is_empty() {
            return None;
        }
        value.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Returns the raw text in `range`, or `None` if nothing is there.
    ///
    /// The text is not trimmed: names keep their trailing blanks.
    pub fn text(line: &str, range: Range<usize>) -> Option<String> {
        let value = slice(line, range);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Returns the single character at `position`.
    pub fn character(line: &str, position: usize) -> Option<char> {
        line.chars().nth(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "HDOLIN5  HMEDUL5  1 0   0.96   3.31    22.35  ";

    #[test]
    fn test_slice_within_line() {
        assert_eq!(field::slice(LINE, 0..8), "HDOLIN5 ");
        assert_eq!(field::slice(LINE, 9..17), "HMEDUL5 ");
        assert_eq!(field::slice(LINE, 22..28), "  0.96");
    }

    #[test]
    fn test_slice_clipped_to_line() {
        assert_eq!(field::slice(LINE, 45..51), " ");
        assert_eq!(field::slice(LINE, 52..64), "");
        assert_eq!(field::slice("", 0..8), "");
        assert_eq!(field::slice("abc", 3..3), "");
    }

    #[test]
    fn test_slice_counts_characters() {
        let line = "HÖ  X";
        assert_eq!(field::slice(line, 1..2), "Ö");
        assert_eq!(field::slice(line, 4..9), "X");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(field::integer::<i32>("  2001 ", 0..7), Some(2001));
        assert_eq!(field::integer::<i32>(" -12", 0..4), Some(-12));
        assert_eq!(field::integer::<i32>(" +12", 0..4), Some(12));
        assert_eq!(field::integer::<u8>("8", 0..1), Some(8));
        assert_eq!(field::integer::<i32>("      ", 0..6), None);
        assert_eq!(field::integer::<i32>("  1.5 ", 0..6), None);
        assert_eq!(field::integer::<i32>("1 2", 0..3), None);
        assert_eq!(field::integer::<u8>("A", 0..1), None);
        assert_eq!(field::integer::<i32>("12", 5..9), None);
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(field::real("   1.28", 0..7), Some(1.28));
        assert_eq!(field::real(" -37.057", 0..8), Some(-37.057));
        assert_eq!(field::real("   400", 0..6), Some(400.0));
        assert_eq!(field::real("    .5", 0..6), Some(0.5));
        assert_eq!(field::real("  abc ", 0..6), None);
        assert_eq!(field::real("   inf", 0..6), None);
        assert_eq!(field::real("   NaN", 0..6), None);
        assert_eq!(field::real("", 0..6), None);
    }

    #[test]
    fn test_text_keeps_spacing() {
        assert_eq!(
            field::text("x DIV 42 TR EQ", 2..14),
            Some("DIV 42 TR EQ".to_string())
        );
        assert_eq!(field::text("HE Dale     ", 0..12), Some("HE Dale     ".to_string()));
        assert_eq!(field::text("short", 6..10), None);
    }

    #[test]
    fn test_character() {
        assert_eq!(field::character("abc", 1), Some('b'));
        assert_eq!(field::character("abc", 3), None);
        assert_eq!(field::character("a c", 1), Some(' '));
    }

    #[test]
    fn test_decoding_is_repeatable() {
        let first = field::real(LINE, 36..44);
        let second = field::real(LINE, 36..44);
        assert_eq!(first, Some(22.35));
        assert_eq!(first, second);
    }
}
