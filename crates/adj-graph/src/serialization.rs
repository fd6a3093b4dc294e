use adj_core::errors::{AdjError, ErrorInfo};
use adj_core::schema::SchemaVersion;
use adj_core::{AdjacencyList, Index};
use serde::{Deserialize, Serialize};

/// Serializes the list to a compact binary representation using `bincode`.
pub fn list_to_bytes(list: &AdjacencyList) -> Result<Vec<u8>, AdjError> {
    let serializable = SerializableList::from_list(list);
    bincode::serialize(&serializable)
        .map_err(|err| AdjError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a list from its binary representation.
pub fn list_from_bytes(bytes: &[u8]) -> Result<AdjacencyList, AdjError> {
    let serializable: SerializableList = bincode::deserialize(bytes)
        .map_err(|err| AdjError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_list()
}

/// Serializes the list to a JSON string.
pub fn list_to_json(list: &AdjacencyList) -> Result<String, AdjError> {
    let serializable = SerializableList::from_list(list);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| AdjError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a list from a JSON string.
pub fn list_from_json(json: &str) -> Result<AdjacencyList, AdjError> {
    let serializable: SerializableList = serde_json::from_str(json)
        .map_err(|err| AdjError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_list()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableList {
    schema_version: SchemaVersion,
    nodes: Vec<Vec<Index>>,
}

impl SerializableList {
    fn from_list(list: &AdjacencyList) -> Self {
        Self {
            schema_version: SchemaVersion::CURRENT,
            nodes: list.as_nested().to_vec(),
        }
    }

    fn into_list(self) -> Result<AdjacencyList, AdjError> {
        if !SchemaVersion::CURRENT.is_compatible_with(&self.schema_version) {
            let found = self.schema_version;
            return Err(AdjError::Serde(
                ErrorInfo::new(
                    "schema-mismatch",
                    "payload was written under an incompatible schema",
                )
                .with_context(
                    "found",
                    format!("{}.{}.{}", found.major, found.minor, found.patch),
                )
                .with_context("expected_major", SchemaVersion::CURRENT.major),
            ));
        }
        Ok(AdjacencyList::from_nested(self.nodes))
    }
}
