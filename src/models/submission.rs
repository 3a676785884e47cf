use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Raw form fields as posted by the client.
///
/// Each field is extracted on its own: strings are trimmed, anything else
/// (absent, `null`, numbers, objects) becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default, deserialize_with = "trimmed_string")]
    pub school: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub platform: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub user: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub password: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub payment_method: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub payment_plan: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub payment_note: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub login_type: String,

    #[serde(default, deserialize_with = "trimmed_string")]
    pub run_time: String,
}

impl SubmissionRequest {
    /// Parses a request body. Valid JSON that is not an object yields an
    /// empty request, which then fails required-field validation.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: JsonValue = serde_json::from_slice(body)?;

        match value {
            JsonValue::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }
}

fn trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;

    Ok(match value {
        JsonValue::String(s) => s.trim_matches(is_trimmable).to_string(),
        _ => String::new(),
    })
}

// Byte order marks count as padding alongside Unicode whitespace.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
