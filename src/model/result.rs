use serde::Serialize;
use serde_json::{Map, Value};

/// One breach reported by the lookup API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BreachSource {
    Record {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    Label(String),
}

impl BreachSource {
    pub fn label(text: impl Into<String>) -> Self {
        BreachSource::Label(text.into())
    }

    pub fn record(name: impl Into<String>, date: Option<&str>) -> Self {
        BreachSource::Record {
            name: name.into(),
            date: date.map(str::to_string),
        }
    }

    fn from_json(value: &Value) -> Self {
        if let Value::Object(obj) = value {
            if let Some(Value::String(name)) = obj.get("name") {
                if !name.is_empty() {
                    let date = obj.get("date").and_then(date_text);
                    return BreachSource::Record {
                        name: name.clone(),
                        date,
                    };
                }
            }
        }
        BreachSource::Label(plain_text(value))
    }
}

/// The `fields` attribute: which kinds of data were exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExposedFields {
    Text(String),
    List(Vec<String>),
}

impl ExposedFields {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(ExposedFields::List(items.iter().map(plain_text).collect())),
            other if is_truthy(other) => Some(ExposedFields::Text(plain_text(other))),
            _ => None,
        }
    }
}

/// Outcome of a single lookup.
///
/// When `error` is set every other attribute is ignored by consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeakResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<BreachSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ExposedFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeakResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(sources: Vec<BreachSource>) -> Self {
        Self {
            found: true,
            sources: Some(sources),
            ..Default::default()
        }
    }

    pub fn with_fields(mut self, fields: ExposedFields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Builds a result from an arbitrary API payload.
    ///
    /// Never fails: shapes that don't match are treated as absent. A single
    /// non-array `sources` value becomes a one-element list.
    pub fn from_json(value: Value) -> Self {
        let obj = match value {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };

        let error = obj.get("error").filter(|v| is_truthy(v)).map(plain_text);

        let sources = obj.get("sources").and_then(|v| match v {
            Value::Array(items) => Some(items.iter().map(BreachSource::from_json).collect()),
            other if is_truthy(other) => Some(vec![BreachSource::from_json(other)]),
            _ => None,
        });

        Self {
            found: obj.get("found").map(is_truthy).unwrap_or(false),
            sources,
            fields: obj.get("fields").and_then(ExposedFields::from_json),
            error,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn date_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
