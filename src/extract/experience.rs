//! Work history extraction from the experience section.

use crate::model::ExperienceEntry;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn block_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

fn date_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Month+year, bare year, or the literal "Present" on each side of an
    // ASCII hyphen or en dash.
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z]{3}\s\d{4}|\d{4}|Present)\s*[-–]\s*([A-Za-z]{3}\s\d{4}|\d{4}|Present)")
            .unwrap()
    })
}

/// Split the experience section into blocks on blank-line boundaries and
/// parse each non-empty block.
pub fn parse_experience(section: &str) -> Vec<ExperienceEntry> {
    block_split_re()
        .split(section)
        .filter(|block| !block.trim().is_empty())
        .map(parse_experience_block)
        .collect()
}

/// Parse one contiguous experience block.
///
/// The first date-range match supplies the period; each side resolves to
/// a calendar-year string or stays `"Present"`, and an unparseable side
/// becomes `None`. The first line is the role/company line, split on the
/// first comma. Remaining non-empty lines become description bullets with
/// leading bullet punctuation stripped.
pub fn parse_experience_block(block: &str) -> ExperienceEntry {
    let (start_date, end_date) = match date_range_re().captures(block) {
        Some(caps) => (resolve_period(&caps[1]), resolve_period(&caps[2])),
        None => (None, None),
    };

    let mut lines = block.lines();
    let role_line = lines.next().unwrap_or("").trim();
    let (role, company) = match role_line.split_once(',') {
        Some((left, right)) => (
            Some(left.trim().to_string()),
            Some(right.trim().to_string()),
        ),
        None => (None, None),
    };

    let description = lines
        .filter(|l| !l.trim().is_empty() && !is_date_line(l))
        .map(|l| l.trim_matches(|c| matches!(c, '-' | '*' | '•' | ' ')).to_string())
        .collect();

    ExperienceEntry {
        start_date,
        end_date,
        role,
        company,
        description,
    }
}

/// A line that is nothing but a date range belongs to the period, not the
/// description.
fn is_date_line(line: &str) -> bool {
    let trimmed = line.trim();
    date_range_re()
        .find(trimmed)
        .map(|m| m.start() == 0 && m.end() == trimmed.len())
        .unwrap_or(false)
}

/// Resolve one side of a date range to a year string, or keep the
/// literal "Present".
fn resolve_period(raw: &str) -> Option<String> {
    if raw == "Present" {
        return Some("Present".to_string());
    }
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return Some(raw.to_string());
    }
    // "Jan 2020" has no day; pin it to the first of the month for parsing.
    NaiveDate::parse_from_str(&format!("1 {raw}"), "%d %b %Y")
        .ok()
        .map(|d| d.year().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_block() {
        let entry = parse_experience_block("Engineer, Acme\nJan 2020 - Present\n- built X");
        assert_eq!(entry.role.as_deref(), Some("Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme"));
        assert_eq!(entry.start_date.as_deref(), Some("2020"));
        assert_eq!(entry.end_date.as_deref(), Some("Present"));
        assert_eq!(entry.description, vec!["built X"]);
    }

    #[test]
    fn test_bare_year_range() {
        let entry = parse_experience_block("Analyst, Initech\n2016 - 2019");
        assert_eq!(entry.start_date.as_deref(), Some("2016"));
        assert_eq!(entry.end_date.as_deref(), Some("2019"));
    }

    #[test]
    fn test_en_dash_range() {
        let entry = parse_experience_block("Analyst, Initech\nMar 2016 – Nov 2019");
        assert_eq!(entry.start_date.as_deref(), Some("2016"));
        assert_eq!(entry.end_date.as_deref(), Some("2019"));
    }

    #[test]
    fn test_unparseable_month_becomes_none() {
        // "Xyz 2020" matches the shape but is not a month.
        let entry = parse_experience_block("Engineer, Acme\nXyz 2020 - Present");
        assert_eq!(entry.start_date, None);
        assert_eq!(entry.end_date.as_deref(), Some("Present"));
    }

    #[test]
    fn test_no_dates() {
        let entry = parse_experience_block("Engineer, Acme\n- did things");
        assert_eq!(entry.start_date, None);
        assert_eq!(entry.end_date, None);
    }

    #[test]
    fn test_no_comma_means_no_role_company() {
        let entry = parse_experience_block("Freelance work\n2018 - 2020");
        assert_eq!(entry.role, None);
        assert_eq!(entry.company, None);
    }

    #[test]
    fn test_company_keeps_text_after_second_comma() {
        let entry = parse_experience_block("Engineer, Acme, Inc\n2020 - 2021");
        assert_eq!(entry.role.as_deref(), Some("Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme, Inc"));
    }

    #[test]
    fn test_date_line_not_a_bullet() {
        let entry = parse_experience_block("Engineer, Acme\nJan 2020 - Present\n- built X\n- shipped Y");
        assert_eq!(entry.description, vec!["built X", "shipped Y"]);
    }

    #[test]
    fn test_bullet_markers_stripped() {
        let entry = parse_experience_block(
            "Engineer, Acme\n- dash bullet\n* star bullet\n• dot bullet",
        );
        assert_eq!(entry.description, vec!["dash bullet", "star bullet", "dot bullet"]);
    }

    #[test]
    fn test_section_splits_on_blank_lines() {
        let section = "Engineer, Acme\n2020 - Present\n\nAnalyst, Initech\n2016 - 2019";
        let entries = parse_experience(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company.as_deref(), Some("Acme"));
        assert_eq!(entries[1].company.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_whitespace_only_blocks_skipped() {
        let entries = parse_experience("Engineer, Acme\n\n   \n\nAnalyst, Initech");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_experience("").is_empty());
        assert!(parse_experience("   \n  ").is_empty());
    }
}
