use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreErrorCode};
use super::types::{Game, Request};

/// One entry of a batch request file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchEntry {
    pub game: Game,
    pub request: Request,
}

/// Decodes a JSON array of [`BatchEntry`] values.
pub fn load_batch<B: AsRef<[u8]>>(bytes: B) -> Result<Vec<BatchEntry>, CoreError> {
    let entries: Vec<BatchEntry> = serde_json::from_slice(bytes.as_ref()).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("failed to parse batch file: {e}"),
        )
    })?;

    if entries.is_empty() {
        return Err(CoreError::new(
            CoreErrorCode::EmptyRequest,
            "batch file contains no requests",
        ));
    }

    Ok(entries)
}
