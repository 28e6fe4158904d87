//! Marker-delimited section reader.
//!
//! A UCTE file is a flat sequence of lines in which blocks of homogeneous
//! records are introduced by literal marker lines (`##L`, `##T`, ...). A
//! section is the span strictly between the first line equal to its start
//! marker and the first later line equal to its end marker. Markers match
//! whole lines exactly: `##T` never matches `##TT`.

use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::parser::UcteRecord;
use crate::types::{UcteConfig, UcteError, UcteResult};

/// Literal marker lines of the UCTE format.
pub mod markers {
    /// Cross-border X-node block; also ends the country node block.
    pub const BORDER_NODES: &str = "##ZXX";
    /// Line block.
    pub const LINES: &str = "##L";
    /// Transformer block.
    pub const TRANSFORMERS: &str = "##T";
    /// Transformer regulation block.
    pub const REGULATION: &str = "##R";
    /// Special transformer tap-step block.
    pub const SPEC_PARAMS: &str = "##TT";
    /// End of the tap-step block.
    pub const END: &str = "##E";

    /// Node block marker of a country, `##Z<cc>`.
    pub fn country_nodes(country_code: &str) -> String {
        format!("##Z{}", country_code)
    }
}

/// Location of a section in a line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// The start marker does not occur.
    Missing,
    /// The section body, marker lines excluded.
    Found {
        /// Indices of the body lines.
        body: Range<usize>,
        /// False when the end marker never appeared and the body runs to the end.
        terminated: bool,
    },
}

enum ScanState {
    SeekingStart,
    InSection { first: usize },
    Done { first: usize, end: usize },
}

/// Finds the body of the section delimited by `start` and `end`.
///
/// # Examples
///
/// ```
/// use ucte_loader::section::{locate, Span};
///
/// let lines = ["##C header", "##L", "a", "b", "##T", "c"];
/// assert_eq!(locate(&lines, "##L", "##T"), Span::Found { body: 2..4, terminated: true });
/// assert_eq!(locate(&lines, "##R", "##TT"), Span::Missing);
/// ```
pub fn locate<S: AsRef<str>>(lines: &[S], start: &str, end: &str) -> Span {
    let mut state = ScanState::SeekingStart;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        state = match state {
            ScanState::SeekingStart if line == start => ScanState::InSection { first: index + 1 },
            ScanState::InSection { first } if line == end => ScanState::Done { first, end: index },
            other => other,
        };
        if matches!(state, ScanState::Done { .. }) {
            break;
        }
    }

    match state {
        ScanState::SeekingStart => Span::Missing,
        ScanState::InSection { first } => Span::Found {
            body: first..lines.len(),
            terminated: false,
        },
        ScanState::Done { first, end } => Span::Found {
            body: first..end,
            terminated: true,
        },
    }
}

/// Reads the records of one section.
///
/// A missing start marker yields an empty vector. A missing end marker makes
/// the section run to the end of the input, unless
/// [`UcteConfig::require_end_marker`] is set, in which case it is an error.
pub fn read_section<T, S>(
    lines: &[S],
    start: &str,
    end: &str,
    config: &UcteConfig,
) -> UcteResult<Vec<T>>
where
    T: UcteRecord,
    S: AsRef<str> + Sync,
{
    let (body, terminated) = match locate(lines, start, end) {
        Span::Missing => {
            tracing::debug!(kind = T::KIND, start, "section marker not found");
            return Ok(Vec::new());
        }
        Span::Found { body, terminated } => (body, terminated),
    };

    if !terminated {
        if config.require_end_marker {
            return Err(UcteError::UnterminatedSection {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        tracing::warn!(
            kind = T::KIND,
            start,
            end,
            "end marker not found, reading section to end of input"
        );
    }

    let records = materialize::<T, S>(&lines[body]);
    tracing::debug!(kind = T::KIND, start, count = records.len(), "section read");
    Ok(records)
}

#[cfg(not(feature = "parallel"))]
fn materialize<T: UcteRecord, S: AsRef<str>>(body: &[S]) -> Vec<T> {
    body.iter().map(|line| T::from_line(line.as_ref())).collect()
}

#[cfg(feature = "parallel")]
fn materialize<T: UcteRecord, S: AsRef<str> + Sync>(body: &[S]) -> Vec<T> {
    body.par_iter()
        .map(|line| T::from_line(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucte_types::{Line, Transformer};

    const SOURCE: &[&str] = &[
        "##C 2007.05.01",
        "comment",
        "##L",
        "HERNES1  XER_PE11 1 8   1.28  13.47   161.48   2001 ",
        "LBERIC2  LKLECE2  2 1  4.000 53.500  120.000    640 BER-KLE220EQ",
        "##T",
        "HKONJS2  HKONJS1  1 0 231.0 400.0 400.0  0.194   15.6    -8.66    2.4   1000 ",
        "##TT",
        "##R",
    ];

    #[test]
    fn test_locate_excludes_markers() {
        assert_eq!(
            locate(SOURCE, markers::LINES, markers::TRANSFORMERS),
            Span::Found {
                body: 3..5,
                terminated: true
            }
        );
    }

    #[test]
    fn test_markers_match_whole_lines() {
        // `##T` must not be taken for `##TT` or the other way round.
        assert_eq!(
            locate(SOURCE, markers::SPEC_PARAMS, markers::REGULATION),
            Span::Found {
                body: 8..8,
                terminated: true
            }
        );
        assert_eq!(
            locate(&["##LX", "a", "##T"], markers::LINES, markers::TRANSFORMERS),
            Span::Missing
        );
    }

    #[test]
    fn test_adjacent_sections_are_disjoint() {
        let config = UcteConfig::default();
        let lines: Vec<Line> =
            read_section(SOURCE, markers::LINES, markers::TRANSFORMERS, &config).unwrap();
        let transformers: Vec<Transformer> =
            read_section(SOURCE, markers::TRANSFORMERS, markers::SPEC_PARAMS, &config).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].node1.as_deref(), Some("HERNES1 "));
        assert_eq!(lines[1].node1.as_deref(), Some("LBERIC2 "));

        assert_eq!(transformers.len(), 1);
        assert_eq!(transformers[0].node1.as_deref(), Some("HKONJS2 "));
    }

    #[test]
    fn test_missing_start_marker_is_empty() {
        let lines: Vec<Line> =
            read_section(SOURCE, "##ZHR", markers::BORDER_NODES, &UcteConfig::strict()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_first_start_marker_wins() {
        let source = ["##L", "a", "##T", "##L", "b", "##T"];
        assert_eq!(
            locate(&source, "##L", "##T"),
            Span::Found {
                body: 1..2,
                terminated: true
            }
        );
    }

    #[test]
    fn test_unterminated_section_runs_to_end() {
        let source = ["##R", "##TT", "x", "y"];
        assert_eq!(
            locate(&source, markers::SPEC_PARAMS, markers::END),
            Span::Found {
                body: 2..4,
                terminated: false
            }
        );

        let lines: Vec<Line> =
            read_section(&source, markers::SPEC_PARAMS, markers::END, &UcteConfig::default())
                .unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_unterminated_section_strict() {
        let source = ["##TT", "x"];
        let result: UcteResult<Vec<Line>> =
            read_section(&source, markers::SPEC_PARAMS, markers::END, &UcteConfig::strict());

        match result {
            Err(UcteError::UnterminatedSection { start, end }) => {
                assert_eq!(start, "##TT");
                assert_eq!(end, "##E");
            }
            other => panic!("expected UnterminatedSection, got {:?}", other),
        }
    }

    #[test]
    fn test_country_marker() {
        assert_eq!(markers::country_nodes("HR"), "##ZHR");
    }
}
