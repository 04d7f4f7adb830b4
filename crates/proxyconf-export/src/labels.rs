//! Label extraction
//!
//! A label is a flattened `key=value` pair describing one setting that
//! differs from the provider defaults. Labels feed the CLI flag string and
//! the Docker/Kubernetes templates.

use std::collections::BTreeMap;

use proxyconf_config::{Configuration, ProviderKind};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Separator between the segments of an encoded key.
pub const SEPARATOR: char = '.';

/// Flatten any serializable value into `path -> value` pairs.
///
/// Keys are built from serialized field names, each segment preceded by
/// [`SEPARATOR`], so every key starts with one. Null values are skipped,
/// arrays of scalars are joined with commas and arrays of tables are
/// indexed as `key[i]`.
pub fn encode<T: Serialize>(value: &T) -> Result<BTreeMap<String, String>> {
    let value = serde_json::to_value(value).map_err(|e| Error::encode("labels", e))?;
    let mut encoded = BTreeMap::new();
    flatten(&value, String::new(), &mut encoded);
    Ok(encoded)
}

fn flatten(value: &Value, path: String, encoded: &mut BTreeMap<String, String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                flatten(child, format!("{path}{SEPARATOR}{key}"), encoded);
            }
        }
        Value::Array(items) if items.iter().all(is_scalar) => {
            let joined = items
                .iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            encoded.insert(path, joined);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(item, format!("{path}[{index}]"), encoded);
            }
        }
        scalar => {
            if let Some(text) = scalar_to_string(scalar) {
                encoded.insert(path, text);
            }
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Labels for every setting of `conf` that differs from its baseline.
///
/// Each label is `prefix + key + "=" + value`, lower-cased. Enabled Docker
/// and Kubernetes CRD providers always add their marker label (also
/// prefixed), whether or not any of their settings changed. The result is
/// sorted.
pub fn extract_labels(conf: &Configuration, prefix: &str) -> Result<Vec<String>> {
    let encoded = encode(conf)
        .map_err(|e| Error::encode("labels", format!("failed to encode the configuration: {e}")))?;
    let defaults = encode(&conf.baseline())
        .map_err(|e| Error::encode("labels", format!("failed to encode the defaults: {e}")))?;

    let mut labels: Vec<String> = encoded
        .iter()
        .filter(|(key, value)| defaults.get(*key) != Some(*value))
        .filter_map(|(key, value)| {
            let key = key.strip_prefix(SEPARATOR).unwrap_or(key);
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some(format!("{prefix}{key}={value}").to_lowercase())
        })
        .collect();

    labels.extend(
        conf.provider_kinds()
            .iter()
            .filter_map(ProviderKind::marker_label)
            .map(|marker| format!("{prefix}{marker}")),
    );

    labels.sort();
    tracing::debug!(count = labels.len(), "extracted labels");
    Ok(labels)
}
