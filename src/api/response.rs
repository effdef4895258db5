/// Response shapes for the signatures endpoint.
///
/// Every field is optional: the API omits fields freely and a missing field is
/// a normal outcome for the caller to handle, not a decode failure.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::ApiError;

/// Base endpoint response carrying the total signature count.
#[derive(Debug, Default, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: Option<u64>,
}

/// One page of signatures.
///
/// `_embedded` is kept as raw JSON because the API has served it both as an
/// array and as an object keyed by record id.
#[derive(Debug, Default, Deserialize)]
pub struct SignaturePage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Value>,
}

/// A single signature record.
#[derive(Debug, Default, Deserialize)]
pub struct SignatureRecord {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<RecordEmbedded>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordEmbedded {
    #[serde(default)]
    pub user: Option<SignatureUser>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignatureUser {
    #[serde(default)]
    pub name: Option<String>,
}

impl SignaturePage {
    /// The embedded records, or `None` when the page carries no usable
    /// collection (missing, null, an empty array, or a scalar).
    ///
    /// An empty object still counts as a collection and yields no records.
    #[must_use]
    pub fn records(&self) -> Option<Vec<&Value>> {
        match self.embedded.as_ref()? {
            Value::Array(items) if items.is_empty() => None,
            Value::Array(items) => Some(items.iter().collect()),
            Value::Object(map) => Some(map.values().collect()),
            _ => None,
        }
    }
}

impl SignatureRecord {
    /// Decode a raw record. Records of the wrong shape yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// The signer's name when present and non-empty.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()?
            .user
            .as_ref()?
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Decode a response body that must be a JSON object.
///
/// # Errors
///
/// Returns `ApiError::Json` when the body is not valid JSON or a field has the
/// wrong type, and `ApiError::NotObject` for arrays, scalars, and `null`.
pub fn decode_object<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ApiError::NotObject);
    }
    Ok(T::deserialize(value)?)
}
