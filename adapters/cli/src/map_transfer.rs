#![allow(clippy::missing_errors_doc)]

use mapsmith_core::{GridPoint, GridSize, MapDocument};
use thiserror::Error;

/// Encodes the document into the canonical single-line JSON object.
///
/// Field names and order (`width`, `height`, `blockades`, `playerSpawns`,
/// `npcSpawns`, points as `{"x":…,"y":…}`) are the binding contract with
/// the game runtime and follow from the declaration order in
/// [`MapDocument`].
pub(crate) fn encode(document: &MapDocument) -> String {
    serde_json::to_string(document).expect("map document serialization never fails")
}

/// Decodes and validates a previously exported map document.
pub(crate) fn decode(value: &str) -> Result<MapDocument, MapTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MapTransferError::EmptyPayload);
    }

    let document: MapDocument =
        serde_json::from_str(trimmed).map_err(MapTransferError::InvalidPayload)?;

    let size = GridSize::new(document.width, document.height).map_err(|_| {
        MapTransferError::InvalidDimensions {
            width: document.width,
            height: document.height,
        }
    })?;

    let regions = [
        &document.blockades,
        &document.player_spawns,
        &document.npc_spawns,
    ];
    for point in regions.into_iter().flatten() {
        if !size.contains(*point) {
            return Err(MapTransferError::PointOutOfBounds { point: *point });
        }
    }

    Ok(document)
}

/// Errors that can occur while reading back an exported map document.
#[derive(Debug, Error)]
pub(crate) enum MapTransferError {
    /// The provided text was empty or contained only whitespace.
    #[error("map document payload was empty")]
    EmptyPayload,
    /// The payload was not a well-formed map document.
    #[error("could not parse map document payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
    /// The document declared non-positive grid dimensions.
    #[error("map document declares invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Declared number of columns.
        width: u32,
        /// Declared number of rows.
        height: u32,
    },
    /// A region listed a point outside the declared grid.
    #[error("map document lists point ({}, {}) outside its grid", .point.x(), .point.y())]
    PointOutOfBounds {
        /// Offending point from one of the region lists.
        point: GridPoint,
    },
}
