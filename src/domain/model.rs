use serde::{Deserialize, Serialize};

/// Decoded body of the random dog endpoint.
///
/// Only `url` is consumed. Whatever else the service sends (file size and the
/// like) is kept in `extra` untouched so it can be echoed to the diagnostic
/// stream along with the rest of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogImageResponse {
    pub url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DogImageResponse {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// The payload as it was decoded, `url` included.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = self.extra.clone();
        object.insert("url".to_string(), serde_json::Value::from(self.url.as_str()));
        serde_json::Value::Object(object)
    }
}
