//! Parsed nginx generator configuration.

use serde::Deserialize;
use serde_json::Value;

use super::AppError;
use super::validation::validate_file_component;

/// The parsed config document.
///
/// Only the `ssl` mapping is interpreted here; every other field is handed to the
/// templates untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NginxConfig {
    document: Value,
}

/// One certificate entry from the `ssl` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SslEntry {
    /// Mapping key; names the generated `ssl-<key>.conf` snippet.
    pub key: String,
    pub cert_domain: String,
}

#[derive(Deserialize)]
struct SslRecord {
    #[serde(rename = "certDomain")]
    cert_domain: String,
}

impl NginxConfig {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// The whole document, used as the context for `ssl-params` and `site-block`.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Validated `ssl` entries in key order.
    pub fn ssl_entries(&self) -> Result<Vec<SslEntry>, AppError> {
        let ssl = self
            .document
            .get("ssl")
            .and_then(Value::as_object)
            .ok_or(AppError::MissingSslSection)?;

        ssl.iter()
            .map(|(key, record)| {
                if !validate_file_component(key) {
                    return Err(AppError::InvalidSslEntry {
                        key: key.clone(),
                        reason: "key must be a non-empty file name without path separators"
                            .to_string(),
                    });
                }
                let record = SslRecord::deserialize(record).map_err(|err| {
                    AppError::InvalidSslEntry { key: key.clone(), reason: err.to_string() }
                })?;
                Ok(SslEntry { key: key.clone(), cert_domain: record.cert_domain })
            })
            .collect()
    }
}
