//! Integration tests for end-to-end field extraction over text.

use unresume::extract::{Entity, EntityLabel, NerTagger};
use unresume::{
    DuplicateHeadings, HeadingDetector, KeywordGroup, NameFallback, ParserOptions, ResumeParser,
    Result,
};

/// Mock tagger that knows exactly one person.
struct KnownPerson(&'static str);

impl NerTagger for KnownPerson {
    fn entities(&self, line: &str) -> Result<Vec<Entity>> {
        if line.contains(self.0) {
            Ok(vec![Entity::new(self.0, EntityLabel::Person)])
        } else {
            Ok(Vec::new())
        }
    }
}

const RESUME: &str = "\
Jane Doe
Senior Software Engineer
jane.doe@example.com | +1 555-123-4567
https://www.linkedin.com/in/janedoe | https://github.com/janedoe | https://janedoe.dev
EXPERIENCE
Engineer, Acme
Jan 2020 - Present
- built X
- shipped the Y service
EDUCATION
B.Sc Computer Science, MIT, 2016
REFERENCES
Available on request";

fn parser() -> ResumeParser {
    ResumeParser::new().with_tagger(Box::new(KnownPerson("Jane Doe")))
}

#[test]
fn test_full_record() {
    let record = parser().parse_text(RESUME).unwrap();

    assert_eq!(record.name.as_deref(), Some("Jane Doe"));

    assert_eq!(record.contacts.emails, vec!["jane.doe@example.com"]);
    assert_eq!(record.contacts.phones.len(), 1);
    let digits: String = record.contacts.phones[0]
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    assert_eq!(digits, "15551234567");

    assert!(record
        .links
        .linkedin
        .contains("https://www.linkedin.com/in/janedoe"));
    assert!(record.links.github.contains("https://github.com/janedoe"));
    assert!(record.links.other.contains("https://janedoe.dev"));

    assert_eq!(record.experience.len(), 1);
    let exp = &record.experience[0];
    assert_eq!(exp.role.as_deref(), Some("Engineer"));
    assert_eq!(exp.company.as_deref(), Some("Acme"));
    assert_eq!(exp.start_date.as_deref(), Some("2020"));
    assert_eq!(exp.end_date.as_deref(), Some("Present"));
    assert_eq!(exp.description, vec!["built X", "shipped the Y service"]);

    assert_eq!(record.education.len(), 1);
    assert_eq!(record.education[0].degree, "B.Sc Computer Science");
    assert_eq!(
        record.education[0].institution,
        "B.Sc Computer Science, MIT, 2016"
    );

    // No skill index attached: field present but empty.
    assert!(record.skills.is_empty());
}

#[test]
fn test_record_json_shape() {
    let record = parser().parse_text(RESUME).unwrap();
    let json = serde_json::to_string_pretty(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for field in [
        "name",
        "contacts",
        "links",
        "skills",
        "experience",
        "education",
        "raw_text",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    // raw_text serializes last.
    assert!(json.trim_end_matches(['}', '\n', ' ']).ends_with(&format!(
        "\"raw_text\": {}",
        serde_json::to_string(value["raw_text"].as_str().unwrap()).unwrap()
    )));
}

#[test]
fn test_name_fallback_variants() {
    let text = "JANE DOE\njane@example.com";

    let first_line = ResumeParser::new()
        .with_tagger(Box::new(KnownPerson("Nobody Here")))
        .parse_text(text)
        .unwrap();
    assert_eq!(first_line.name.as_deref(), Some("JANE DOE"));

    let none = ResumeParser::with_options(
        ParserOptions::new().with_name_fallback(NameFallback::None),
    )
    .with_tagger(Box::new(KnownPerson("Nobody Here")))
    .parse_text(text)
    .unwrap();
    assert_eq!(none.name, None);
}

#[test]
fn test_tagger_error_propagates() {
    struct Failing;
    impl NerTagger for Failing {
        fn entities(&self, _: &str) -> Result<Vec<Entity>> {
            Err(unresume::Error::Ner("model crashed".to_string()))
        }
    }

    let err = ResumeParser::new()
        .with_tagger(Box::new(Failing))
        .parse_text("Jane Doe")
        .unwrap_err();
    assert!(matches!(err, unresume::Error::Ner(_)));
}

#[test]
fn test_fuzzy_headings_option() {
    let text = "\
Jane Doe
Employment
Engineer, Acme
2020 - 2022
Academics
M.Sc Robotics, ETH Zurich";

    let options = ParserOptions::new().with_heading_detector(HeadingDetector::FuzzyKeywords(
        KeywordGroup::default_groups(),
    ));
    let record = ResumeParser::with_options(options)
        .with_tagger(Box::new(KnownPerson("Jane Doe")))
        .parse_text(text)
        .unwrap();

    assert_eq!(record.experience.len(), 1);
    assert_eq!(record.experience[0].company.as_deref(), Some("Acme"));
    assert_eq!(record.education.len(), 1);
    assert_eq!(record.education[0].degree, "M.Sc Robotics");
}

#[test]
fn test_duplicate_heading_policy_flows_through() {
    let text = "EXPERIENCE\nEngineer, Acme\nEXPERIENCE\nAnalyst, Initech";

    let keep_first = ResumeParser::with_options(
        ParserOptions::new().with_duplicate_headings(DuplicateHeadings::KeepFirst),
    )
    .parse_text(text)
    .unwrap();
    assert_eq!(keep_first.experience[0].company.as_deref(), Some("Acme"));

    let keep_last = ResumeParser::new().parse_text(text).unwrap();
    assert_eq!(keep_last.experience[0].company.as_deref(), Some("Initech"));
}

#[test]
fn test_phone_whitespace_variant() {
    let text = "call +1 555 123 4567 today";

    let stripped = ResumeParser::new().parse_text(text).unwrap();
    assert_eq!(stripped.contacts.phones, vec!["+15551234567"]);

    let kept = ResumeParser::with_options(ParserOptions::new().keep_phone_whitespace())
        .parse_text(text)
        .unwrap();
    assert_eq!(kept.contacts.phones, vec!["+1 555 123 4567"]);
}
