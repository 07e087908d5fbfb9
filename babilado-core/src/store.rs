//! Document store client for the map data listing
//!
//! Lists a collection over the store's REST API and flattens each
//! document's typed field encoding into plain JSON, with the document
//! id injected as a regular field.

use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::{ConfigError, StoreConfig};
use crate::http::client::build_client;

/// Errors raised while listing documents.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A setting the listing needed was missing or unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The store answered with a non-success status.
    #[error("store returned status {status}")]
    Status { status: u16, body: String },

    /// The store could not be reached or answered unreadably.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for listing documents from the configured collection.
pub struct DocumentStore {
    client: Client,
    config: StoreConfig,
}

impl DocumentStore {
    /// Create a new document store client
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = build_client()?;
        Ok(Self { client, config })
    }

    /// List every document in the collection as flattened JSON objects.
    pub async fn list(&self) -> Result<Vec<Value>, StoreError> {
        let endpoint = self
            .config
            .endpoint
            .as_ref()
            .ok_or(ConfigError::Missing {
                field: "store endpoint",
            })?;

        let raw = format!(
            "{}/{}",
            endpoint.as_str().trim_end_matches('/'),
            self.config.collection
        );
        let url = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
            name: "collection".to_string(),
            message: format!("could not build listing URL: {}", e),
        })?;

        debug!("Listing collection {} from document store", self.config.collection);

        let mut req_builder = self.client.get(url);
        if let Some(credential) = &self.config.credential {
            req_builder = req_builder.query(&[("key", credential.expose_secret())]);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        Ok(decode_documents(&payload))
    }
}

/// Decode a listing payload into flattened documents.
///
/// A payload without a `documents` array decodes to an empty listing,
/// which is how the store reports an empty collection.
fn decode_documents(payload: &Value) -> Vec<Value> {
    payload
        .get("documents")
        .and_then(|documents| documents.as_array())
        .map(|documents| documents.iter().map(decode_document).collect())
        .unwrap_or_default()
}

/// Flatten one document: id from the resource name, then each field.
fn decode_document(document: &Value) -> Value {
    let id = document
        .get("name")
        .and_then(|name| name.as_str())
        .and_then(|name| name.rsplit('/').next())
        .unwrap_or_default();

    let mut flattened = Map::new();
    flattened.insert("id".to_string(), Value::from(id));

    if let Some(fields) = document.get("fields").and_then(|fields| fields.as_object()) {
        for (key, wrapped) in fields {
            flattened.insert(key.clone(), decode_value(wrapped));
        }
    }

    Value::Object(flattened)
}

/// Unwrap one typed field value into plain JSON.
fn decode_value(wrapped: &Value) -> Value {
    let (tag, inner) = match wrapped.as_object().and_then(|object| object.iter().next()) {
        Some(entry) => entry,
        None => return Value::Null,
    };

    match tag.as_str() {
        // The wire encodes integers as strings to survive 64-bit range.
        "integerValue" => inner
            .as_str()
            .and_then(|raw| raw.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or_else(|| inner.clone()),
        "nullValue" => Value::Null,
        "mapValue" => inner
            .get("fields")
            .and_then(|fields| fields.as_object())
            .map(|fields| {
                Value::Object(
                    fields
                        .iter()
                        .map(|(key, value)| (key.clone(), decode_value(value)))
                        .collect(),
                )
            })
            .unwrap_or_else(|| Value::Object(Map::new())),
        "arrayValue" => inner
            .get("values")
            .and_then(|values| values.as_array())
            .map(|values| Value::Array(values.iter().map(decode_value).collect()))
            .unwrap_or_else(|| Value::Array(Vec::new())),
        // stringValue, booleanValue, doubleValue, timestampValue and
        // geoPointValue all carry their payload directly.
        _ => inner.clone(),
    }
}
