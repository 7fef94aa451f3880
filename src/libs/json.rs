use std::fmt::Write;

/// Scalar values the encoder knows how to emit. Numbers and booleans go out
/// unquoted in their `Display` form, which is locale-independent.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::Str(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::Str(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Int(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Float(value)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

/// Encodes an ordered sequence of unique keys and scalar values as a JSON
/// object with no surrounding whitespace. Keys are emitted in input order,
/// so identical input always produces identical output.
pub fn encode_object<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, JsonValue)>,
{
    let mut json = String::from("{");
    let mut first = true;

    for (key, value) in fields {
        if !first {
            json.push(',');
        }

        json.push('"');
        json.push_str(&escape(key));
        json.push_str("\":");

        match value {
            JsonValue::Str(s) => {
                json.push('"');
                json.push_str(&escape(&s));
                json.push('"');
            }
            JsonValue::Int(n) => {
                let _ = write!(json, "{}", n);
            }
            JsonValue::Float(n) => {
                let _ = write!(json, "{}", n);
            }
            JsonValue::Bool(b) => {
                let _ = write!(json, "{}", b);
            }
        }

        first = false;
    }

    json.push('}');
    json
}

/// Maps backslash, double quote and the common control characters to their
/// two-character JSON escapes.
fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }

    escaped
}
