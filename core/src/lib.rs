#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the mapsmith editor.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative editing session, and pure systems. Adapters submit
//! [`Command`] values describing desired mutations, the session executes
//! those commands via its `apply` entry point, and then broadcasts
//! [`Event`] values confirming or rejecting each mutation. Systems consume
//! event streams, query immutable snapshots, and respond exclusively with
//! new command batches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic value a grid cell can hold.
///
/// The numeric encoding is part of the export contract with the game
/// runtime and must never change: `Empty = 0`, `Blockade = 1`,
/// `PlayerSpawn = 2`, `NpcSpawn = 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Unpainted cell.
    Empty,
    /// Cell that blocks traversal in the exported level.
    Blockade,
    /// Cell where the player character enters the level.
    PlayerSpawn,
    /// Cell where a non-player character enters the level.
    NpcSpawn,
}

impl Marker {
    /// Markers an author may select for painting, in palette order.
    pub const PAINTABLE: [Marker; 3] = [Marker::Blockade, Marker::PlayerSpawn, Marker::NpcSpawn];

    /// Canonical numeric value stored per cell and understood by the runtime.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Blockade => 1,
            Self::PlayerSpawn => 2,
            Self::NpcSpawn => 3,
        }
    }

    /// Resolves a marker from its canonical numeric value.
    ///
    /// Accepts `0` because grid cells legitimately hold [`Marker::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::UnknownMarker`] for values outside the fixed set.
    pub fn from_value(value: u8) -> Result<Self, MarkerError> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Blockade),
            2 => Ok(Self::PlayerSpawn),
            3 => Ok(Self::NpcSpawn),
            other => Err(MarkerError::UnknownMarker {
                identifier: other.to_string(),
            }),
        }
    }

    /// Resolves a paintable marker from its textual identifier.
    ///
    /// Only the three paintable identifiers are recognised; `Empty` cannot
    /// be selected as an active marker, so no identifier maps to it.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::UnknownMarker`] for unrecognised identifiers.
    pub fn from_identifier(identifier: &str) -> Result<Self, MarkerError> {
        match identifier {
            "blockade" => Ok(Self::Blockade),
            "player-spawn" => Ok(Self::PlayerSpawn),
            "npc-spawn" => Ok(Self::NpcSpawn),
            other => Err(MarkerError::UnknownMarker {
                identifier: other.to_owned(),
            }),
        }
    }

    /// Textual identifier used by adapters when naming the marker.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Blockade => "blockade",
            Self::PlayerSpawn => "player-spawn",
            Self::NpcSpawn => "npc-spawn",
        }
    }

    /// Reports whether an author may select this marker for painting.
    #[must_use]
    pub const fn is_paintable(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Display colour adapters should use when presenting a painted cell.
    #[must_use]
    pub const fn color(self) -> MarkerColor {
        match self {
            Self::Empty => MarkerColor::from_rgb(0xee, 0xee, 0xee),
            Self::Blockade => MarkerColor::from_rgb(0xff, 0xa5, 0x00),
            Self::PlayerSpawn => MarkerColor::from_rgb(0x00, 0xff, 0xff),
            Self::NpcSpawn => MarkerColor::from_rgb(0x7f, 0xff, 0xd4),
        }
    }
}

/// Visual appearance associated with a marker.
///
/// Presentation data only; it never appears in the exported document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl MarkerColor {
    /// Creates a new marker colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Location of a single grid cell expressed as zero-based x and y indices.
///
/// Doubles as node identity in the blockade connectivity graph and as the
/// point representation of the export contract (`{"x":…,"y":…}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    x: u32,
    y: u32,
}

impl GridPoint {
    /// Creates a new grid point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the point.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the point.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }
}

/// Validated grid dimensions.
///
/// Both axes are guaranteed positive, so an invalid grid configuration is
/// unrepresentable once a value of this type exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a new grid size from the provided dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError::InvalidDimension`] unless both dimensions
    /// are positive.
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells contained in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reports whether the point addresses a cell inside the grid.
    #[must_use]
    pub const fn contains(&self, point: GridPoint) -> bool {
        point.x() < self.width && point.y() < self.height
    }
}

/// Commands that express all permissible session mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the grid with an all-empty matrix of the given dimensions,
    /// discarding prior paint.
    ConfigureGrid {
        /// Validated dimensions of the replacement grid.
        size: GridSize,
    },
    /// Replaces the active marker used by subsequent toggles.
    SelectMarker {
        /// Marker the author picked from the palette.
        marker: Marker,
    },
    /// Toggles a cell against the active marker: a cell already holding the
    /// active marker is reset to empty, any other cell is overwritten.
    ToggleCell {
        /// Address of the cell to toggle.
        point: GridPoint,
    },
    /// Overwrites a cell unconditionally with the provided marker.
    SetMarker {
        /// Address of the cell to overwrite.
        point: GridPoint,
        /// Marker to store, which may be [`Marker::Empty`].
        marker: Marker,
    },
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the grid was replaced with an all-empty matrix.
    GridConfigured {
        /// Dimensions of the freshly configured grid.
        size: GridSize,
    },
    /// Confirms that the active marker changed.
    MarkerSelected {
        /// Marker that became active.
        marker: Marker,
    },
    /// Reports that a marker selection request was rejected.
    MarkerSelectionRejected {
        /// Marker provided in the selection request.
        marker: Marker,
        /// Specific reason the selection failed.
        reason: MarkerError,
    },
    /// Confirms that a cell changed value.
    CellChanged {
        /// Address of the changed cell.
        point: GridPoint,
        /// Marker the cell held before the change.
        previous: Marker,
        /// Marker the cell holds after the change.
        current: Marker,
    },
    /// Reports that a cell mutation request was rejected.
    CellChangeRejected {
        /// Address provided in the rejected request.
        point: GridPoint,
        /// Specific reason the mutation failed.
        reason: CellError,
    },
}

/// Reasons a grid size may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum GridSizeError {
    /// One or both dimensions were not positive integers.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Reasons a cell mutation or read may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum CellError {
    /// The address lies outside the current grid.
    #[error(
        "point ({}, {}) lies outside the {}x{} grid",
        .point.x(),
        .point.y(),
        .size.width(),
        .size.height()
    )]
    OutOfBounds {
        /// Address provided in the request.
        point: GridPoint,
        /// Dimensions of the grid at the time of the request.
        size: GridSize,
    },
}

/// Reasons a marker lookup or selection may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum MarkerError {
    /// The identifier or numeric value named no known marker.
    #[error("unknown marker '{identifier}'")]
    UnknownMarker {
        /// Token provided in the request.
        identifier: String,
    },
    /// The marker exists but cannot be selected for painting.
    #[error("marker '{}' cannot be selected for painting", .marker.identifier())]
    NotPaintable {
        /// Marker provided in the selection request.
        marker: Marker,
    },
}

/// Canonical exported description of the authored grid.
///
/// This is the binding contract with the external game runtime: field names
/// and declaration order must match the emitted JSON exactly
/// (`width`, `height`, `blockades`, `playerSpawns`, `npcSpawns`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Number of grid columns captured at export time.
    pub width: u32,
    /// Number of grid rows captured at export time.
    pub height: u32,
    /// Cells painted with [`Marker::Blockade`], in (y, x) ascending order.
    pub blockades: Vec<GridPoint>,
    /// Cells painted with [`Marker::PlayerSpawn`], in (y, x) ascending order.
    #[serde(rename = "playerSpawns")]
    pub player_spawns: Vec<GridPoint>,
    /// Cells painted with [`Marker::NpcSpawn`], in (y, x) ascending order.
    #[serde(rename = "npcSpawns")]
    pub npc_spawns: Vec<GridPoint>,
}
