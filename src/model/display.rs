use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Hard cap the display surface puts on a field value, in characters.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Status marker of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// A breach was found or the lookup failed.
    Alert,
    /// Nothing was found.
    Safe,
}

impl Color {
    pub fn rgb(&self) -> u32 {
        match self {
            Color::Alert => 0xFF0000,
            Color::Safe => 0x00FF00,
        }
    }

    pub fn hex(&self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.rgb())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl DisplayField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: true,
            ..Self::new(name, value)
        }
    }

    /// Length of the value as the display surface counts it.
    pub fn value_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn fits(&self) -> bool {
        self.value_len() <= FIELD_VALUE_LIMIT
    }
}

/// A rendered reply. Serializes to the payload shape the chat surface expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDocument {
    pub title: String,
    pub color: Color,
    pub timestamp: DateTime<Utc>,
    pub fields: Vec<DisplayField>,
    /// Whether the lookup reported at least one breach.
    #[serde(skip)]
    pub found: bool,
}

impl DisplayDocument {
    pub fn field(&self, name: &str) -> Option<&DisplayField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_error(&self) -> bool {
        self.fields.len() == 1 && self.fields[0].name == "Error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert_eq!(Color::Alert.hex(), "#FF0000");
        assert_eq!(Color::Safe.hex(), "#00FF00");
        assert_eq!(Color::Safe.rgb(), 65280);
    }

    #[test]
    fn test_field_length_counts_chars() {
        let field = DisplayField::new("x", "é".repeat(FIELD_VALUE_LIMIT));
        assert_eq!(field.value_len(), FIELD_VALUE_LIMIT);
        assert!(field.fits());
        assert!(!DisplayField::new("x", "a".repeat(FIELD_VALUE_LIMIT + 1)).fits());
    }

    #[test]
    fn test_document_serializes_as_payload() {
        let doc = DisplayDocument {
            title: "t".into(),
            color: Color::Safe,
            timestamp: DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
            fields: vec![DisplayField::inline("Type", "Email")],
            found: false,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["color"], 65280);
        assert_eq!(json["timestamp"], "2024-01-02T03:04:05Z");
        assert_eq!(json["fields"][0]["inline"], true);
        assert!(json.get("found").is_none());
    }
}
