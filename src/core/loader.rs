use crate::core::ContentSource;
use crate::utils::error::LoadError;
use serde::de::DeserializeOwned;

/// Fetches and parses one collection, failing soft.
///
/// Any [`LoadError`] is logged and replaced by an empty collection so a
/// missing or broken source only empties its own section.
pub async fn load<T, S>(source: &S, name: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    match try_load(source, name).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(
                source = %source.describe(),
                resource = e.source_name(),
                "❌ Error loading collection: {}",
                e
            );
            Vec::new()
        }
    }
}

/// Strict variant of [`load`].
///
/// The payload must be a JSON array. Elements that do not match the record
/// shape are skipped with a warning; the rest keep their order.
pub async fn try_load<T, S>(source: &S, name: &str) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    S: ContentSource + ?Sized,
{
    tracing::debug!("Fetching '{}' from {}", name, source.describe());
    let bytes = source.fetch(name).await?;
    parse_collection(name, &bytes)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn parse_collection<T: DeserializeOwned>(name: &str, bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let items: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
            name: name.to_string(),
            source,
        })?;

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("⚠️ Skipping malformed record #{} in '{}': {}", index, name, e);
            }
        }
    }

    tracing::debug!("Parsed {}/{} records from '{}'", records.len(), total, name);
    Ok(records)
}
