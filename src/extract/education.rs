//! Education extraction from the education section.

use crate::model::EducationEntry;
use regex::Regex;
use std::sync::OnceLock;

fn degree_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Degree keyword plus its tail, up to a comma or end of line.
    RE.get_or_init(|| {
        Regex::new(r"(?i)(B\.?Sc|M\.?Sc|B\.?Eng|M\.?Eng|Bachelor|Master|PhD|MBA)[^,\n]*")
            .unwrap()
    })
}

/// Scan each line of the education section for a degree keyword.
///
/// A matching line yields one entry: degree = the full matched span,
/// institution = the full line.
pub fn parse_education(section: &str) -> Vec<EducationEntry> {
    section
        .lines()
        .filter_map(|line| {
            degree_re().find(line).map(|m| EducationEntry {
                degree: m.as_str().trim().to_string(),
                institution: line.trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_span_and_institution() {
        let entries = parse_education("B.Sc in Computer Science, MIT, 2016");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "B.Sc in Computer Science");
        assert_eq!(entries[0].institution, "B.Sc in Computer Science, MIT, 2016");
    }

    #[test]
    fn test_case_insensitive() {
        let entries = parse_education("bachelor of arts, Oberlin College");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "bachelor of arts");
    }

    #[test]
    fn test_keyword_without_dots() {
        let entries = parse_education("BSc Physics, ETH Zurich\nMSc Physics, ETH Zurich");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "BSc Physics");
        assert_eq!(entries[1].degree, "MSc Physics");
    }

    #[test]
    fn test_mba_and_phd() {
        let entries = parse_education("MBA, Wharton\nPhD in Biology, Stanford University");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "MBA");
        assert_eq!(entries[1].degree, "PhD in Biology");
    }

    #[test]
    fn test_lines_without_degrees_skipped() {
        let entries = parse_education("Relevant coursework:\nAlgorithms\nB.Eng, TU Delft");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "B.Eng, TU Delft");
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_education("").is_empty());
    }
}
