//! Turns a [`LeakResult`] into a [`DisplayDocument`].
//!
//! The display surface rejects field values longer than
//! [`FIELD_VALUE_LIMIT`] characters. A breach list that is too long is split
//! into two halves with contiguous numbering. The split is not recursive, so
//! a result whose halves are themselves too long can still exceed the limit.

use chrono::{DateTime, Utc};

use crate::model::{
    BreachSource, Color, DisplayDocument, DisplayField, ExposedFields, LeakResult,
    FIELD_VALUE_LIMIT,
};

pub const DEFAULT_TITLE: &str = "🔍 Breach Checker";

const BREACHES_TITLE: &str = "📋 Breaches Found";
const EXPOSED_TITLE: &str = "📊 Exposed Data";
const EMPTY_VALUE: &str = "None";

#[derive(Debug, Clone)]
pub struct ResultRenderer {
    title: String,
}

impl ResultRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders `result` for `query`, stamped with the current time.
    pub fn render(&self, result: &LeakResult, query: &str, kind_label: &str) -> DisplayDocument {
        self.render_at(result, query, kind_label, Utc::now())
    }

    pub fn render_at(
        &self,
        result: &LeakResult,
        query: &str,
        kind_label: &str,
        timestamp: DateTime<Utc>,
    ) -> DisplayDocument {
        if let Some(error) = &result.error {
            return self.error_document(error, timestamp);
        }

        let (color, status) = if result.found {
            (Color::Alert, "✅ Found in Breaches")
        } else {
            (Color::Safe, "❌ Not Found")
        };

        let mut fields = vec![
            DisplayField::inline("Query", format!("`{}`", clamp(query, FIELD_VALUE_LIMIT - 2))),
            DisplayField::inline("Type", kind_label),
            DisplayField::inline("Status", status),
        ];

        if result.found {
            if let Some(sources) = &result.sources {
                fields.extend(breach_fields(sources));
            }
            if let Some(exposed) = &result.fields {
                fields.push(DisplayField::new(
                    EXPOSED_TITLE,
                    format!("`{}`", clamp(&exposed_text(exposed), FIELD_VALUE_LIMIT - 2)),
                ));
            }
        }

        DisplayDocument {
            title: self.title.clone(),
            color,
            timestamp,
            fields,
            found: result.found,
        }
    }

    /// A document with a single field describing `message`.
    pub fn render_error(&self, message: &str) -> DisplayDocument {
        self.error_document(message, Utc::now())
    }

    fn error_document(&self, message: &str, timestamp: DateTime<Utc>) -> DisplayDocument {
        let value = format!("❌ {}", message);
        DisplayDocument {
            title: self.title.clone(),
            color: Color::Alert,
            timestamp,
            fields: vec![DisplayField::new("Error", clamp(&value, FIELD_VALUE_LIMIT))],
            found: false,
        }
    }
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

fn breach_fields(sources: &[BreachSource]) -> Vec<DisplayField> {
    let block = numbered_lines(sources, 1);
    if block.chars().count() <= FIELD_VALUE_LIMIT {
        return vec![DisplayField::new(
            format!("{} ({})", BREACHES_TITLE, sources.len()),
            non_empty(block),
        )];
    }

    let mid = sources.len().div_ceil(2);
    let (first, second) = sources.split_at(mid);
    vec![
        DisplayField::new(
            format!("{} (Part 1)", BREACHES_TITLE),
            non_empty(numbered_lines(first, 1)),
        ),
        DisplayField::new(
            format!("{} (Part 2)", BREACHES_TITLE),
            non_empty(numbered_lines(second, mid + 1)),
        ),
    ]
}

fn numbered_lines(sources: &[BreachSource], start: usize) -> String {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| format!("{}. {}", start + i, source_line(source)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn source_line(source: &BreachSource) -> String {
    match source {
        BreachSource::Record {
            name,
            date: Some(date),
        } => format!("{} ({})", name, date),
        BreachSource::Record { name, date: None } => name.clone(),
        BreachSource::Label(label) => label.clone(),
    }
}

fn exposed_text(exposed: &ExposedFields) -> String {
    match exposed {
        ExposedFields::Text(text) => text.clone(),
        ExposedFields::List(items) => items.join(", "),
    }
}

fn non_empty(value: String) -> String {
    if value.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        value
    }
}

/// Cuts `s` to at most `max_chars` characters, ending in an ellipsis when cut.
fn clamp(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &LeakResult) -> DisplayDocument {
        ResultRenderer::default().render(result, "someone@example.com", "Email")
    }

    fn names(doc: &DisplayDocument) -> Vec<&str> {
        doc.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn generated(count: usize) -> Vec<BreachSource> {
        (1..=count)
            .map(|i| BreachSource::label(format!("Breach-{:04}", i)))
            .collect()
    }

    #[test]
    fn test_not_found_has_three_header_fields() {
        let doc = render(&LeakResult::not_found());

        assert_eq!(names(&doc), vec!["Query", "Type", "Status"]);
        assert!(doc.fields.iter().all(|f| f.inline));
        assert_eq!(doc.fields[0].value, "`someone@example.com`");
        assert_eq!(doc.fields[1].value, "Email");
        assert_eq!(doc.fields[2].value, "❌ Not Found");
        assert_eq!(doc.color, Color::Safe);
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert!(!doc.found);
    }

    #[test]
    fn test_not_found_ignores_sources_and_fields() {
        let result = LeakResult {
            found: false,
            sources: Some(generated(3)),
            fields: Some(ExposedFields::Text("email".into())),
            error: None,
        };
        assert_eq!(render(&result).fields.len(), 3);
    }

    #[test]
    fn test_found_with_labels_and_fields() {
        let result = LeakResult::found(vec![BreachSource::label("A"), BreachSource::label("B")])
            .with_fields(ExposedFields::List(vec!["x".into(), "y".into()]));
        let doc = render(&result);

        assert_eq!(
            names(&doc),
            vec!["Query", "Type", "Status", "📋 Breaches Found (2)", "📊 Exposed Data"]
        );
        assert_eq!(doc.fields[2].value, "✅ Found in Breaches");
        assert_eq!(doc.fields[3].value, "1. A\n2. B");
        assert!(!doc.fields[3].inline);
        assert_eq!(doc.fields[4].value, "`x, y`");
        assert_eq!(doc.color, Color::Alert);
        assert!(doc.found);
    }

    #[test]
    fn test_records_with_and_without_dates() {
        let result = LeakResult::found(vec![
            BreachSource::record("LinkedIn", Some("2012-05")),
            BreachSource::record("Dropbox", None),
            BreachSource::label("Combolist"),
        ]);
        let doc = render(&result);
        let breaches = doc.field("📋 Breaches Found (3)").unwrap();
        assert_eq!(breaches.value, "1. LinkedIn (2012-05)\n2. Dropbox\n3. Combolist");
    }

    #[test]
    fn test_single_source_renders_as_one_element_list() {
        let result = LeakResult::found(vec![BreachSource::label("Collection #1")]);
        let doc = render(&result);
        assert_eq!(doc.field("📋 Breaches Found (1)").unwrap().value, "1. Collection #1");
    }

    #[test]
    fn test_empty_source_list() {
        let doc = render(&LeakResult::found(Vec::new()));
        assert_eq!(doc.field("📋 Breaches Found (0)").unwrap().value, "None");
    }

    #[test]
    fn test_text_exposed_fields() {
        let result = LeakResult {
            found: true,
            sources: None,
            fields: Some(ExposedFields::Text("email, username".into())),
            error: None,
        };
        let doc = render(&result);
        assert_eq!(names(&doc).len(), 4);
        assert_eq!(doc.field("📊 Exposed Data").unwrap().value, "`email, username`");
    }

    #[test]
    fn test_large_source_list_is_split_in_two() {
        let doc = render(&LeakResult::found(generated(200)));

        let part1 = doc.field("📋 Breaches Found (Part 1)").unwrap();
        let part2 = doc.field("📋 Breaches Found (Part 2)").unwrap();
        assert_eq!(doc.fields.len(), 5);

        let first: Vec<&str> = part1.value.lines().collect();
        let second: Vec<&str> = part2.value.lines().collect();
        assert_eq!(first.len(), 100);
        assert_eq!(second.len(), 100);
        assert_eq!(first[0], "1. Breach-0001");
        assert_eq!(first[99], "100. Breach-0100");
        assert_eq!(second[0], "101. Breach-0101");
        assert_eq!(second[99], "200. Breach-0200");
    }

    #[test]
    fn test_split_uses_ceiling_midpoint() {
        let doc = render(&LeakResult::found(generated(101)));
        let part2 = doc.field("📋 Breaches Found (Part 2)").unwrap();
        assert!(part2.value.starts_with("52. Breach-0052\n"));
        assert_eq!(part2.value.lines().count(), 50);
    }

    #[test]
    fn test_split_halves_fit_when_possible() {
        // 80 entries overflow as a whole, but each half fits.
        let sources = generated(80);
        assert!(numbered_lines(&sources, 1).chars().count() > FIELD_VALUE_LIMIT);

        let doc = render(&LeakResult::found(sources));
        assert!(doc.fields.iter().all(DisplayField::fits));
    }

    #[test]
    fn test_block_at_exact_limit_is_not_split() {
        // "1. " + 1021 chars = 1024
        let label = "x".repeat(FIELD_VALUE_LIMIT - 3);
        let doc = render(&LeakResult::found(vec![BreachSource::label(label)]));
        assert!(doc.field("📋 Breaches Found (1)").is_some());
    }

    #[test]
    fn test_oversized_single_source_is_not_fixed() {
        let label = "x".repeat(FIELD_VALUE_LIMIT + 10);
        let doc = render(&LeakResult::found(vec![BreachSource::label(label)]));

        let part1 = doc.field("📋 Breaches Found (Part 1)").unwrap();
        let part2 = doc.field("📋 Breaches Found (Part 2)").unwrap();
        assert!(!part1.fits());
        assert_eq!(part2.value, "None");
    }

    #[test]
    fn test_error_short_circuits() {
        let mut result = LeakResult::found(generated(3))
            .with_fields(ExposedFields::Text("email".into()));
        result.error = Some("API returned status 500".into());

        let doc = render(&result);
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.fields[0].name, "Error");
        assert_eq!(doc.fields[0].value, "❌ API returned status 500");
        assert_eq!(doc.color, Color::Alert);
        assert!(doc.is_error());
        assert!(!doc.found);
    }

    #[test]
    fn test_long_query_and_error_are_clamped() {
        let renderer = ResultRenderer::default();
        let long = "q".repeat(5000);

        let doc = renderer.render(&LeakResult::not_found(), &long, "Username");
        assert!(doc.fields[0].fits());
        assert!(doc.fields[0].value.ends_with("…`"));

        let doc = renderer.render_error(&long);
        assert_eq!(doc.fields[0].value_len(), FIELD_VALUE_LIMIT);
    }

    #[test]
    fn test_long_exposed_data_is_clamped() {
        let exposed = (1..=200).map(|i| format!("field_{:03}", i)).collect();
        let result = LeakResult::found(vec![BreachSource::label("A")])
            .with_fields(ExposedFields::List(exposed));
        let doc = render(&result);

        let field = doc.field("📊 Exposed Data").unwrap();
        assert_eq!(field.value_len(), FIELD_VALUE_LIMIT);
        assert!(field.value.starts_with("`field_001, field_002"));
        assert!(field.value.ends_with("…`"));
        assert!(doc.fields.iter().all(DisplayField::fits));
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = ResultRenderer::new("Checker");
        let result = LeakResult::found(generated(200))
            .with_fields(ExposedFields::List(vec!["email".into()]));

        let a = renderer.render(&result, "neo", "Username");
        let b = renderer.render(&result, "neo", "Username");
        assert_eq!(a.fields, b.fields);
        assert_eq!(a.title, "Checker");
        assert_eq!(a.color, b.color);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp("abc", 3), "abc");
        assert_eq!(clamp("abcd", 3), "ab…");
        assert_eq!(clamp("ééé", 2), "é…");
    }
}
