#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative editing-session state for the mapsmith grid editor.
//!
//! The session owns the marker grid and the active-marker selection.
//! Adapters and systems never touch either directly: they submit
//! [`Command`] values through [`apply`], observe the resulting [`Event`]
//! stream, and read state through the [`query`] module. All mutations run
//! to completion before the next command is dispatched, so queries always
//! observe a consistent snapshot.

use mapsmith_core::{CellError, Command, Event, GridPoint, GridSize, Marker, MarkerError};

mod flood;

const DEFAULT_GRID_WIDTH: u32 = 10;
const DEFAULT_GRID_HEIGHT: u32 = 20;

/// Represents one independent editing session.
///
/// Sessions are plain values with no ambient state, so several can coexist
/// within a process and be exercised in isolation.
#[derive(Clone, Debug)]
pub struct EditorSession {
    grid: MarkerGrid,
    active_marker: Marker,
}

impl EditorSession {
    /// Creates a new session holding the editor's default 10x20 empty grid
    /// with the blockade marker active, matching the palette's initial
    /// selection.
    #[must_use]
    pub fn new() -> Self {
        let size = GridSize::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
            .expect("default grid dimensions are positive");
        Self {
            grid: MarkerGrid::new(size),
            active_marker: Marker::Blockade,
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the session, mutating state deterministically.
///
/// Every accepted mutation is confirmed with an event; every rejected
/// mutation surfaces its reason as a rejection event and leaves the grid
/// untouched. Validation always happens before any write.
pub fn apply(session: &mut EditorSession, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureGrid { size } => {
            session.grid.reset(size);
            out_events.push(Event::GridConfigured { size });
        }
        Command::SelectMarker { marker } => {
            if marker.is_paintable() {
                session.active_marker = marker;
                out_events.push(Event::MarkerSelected { marker });
            } else {
                out_events.push(Event::MarkerSelectionRejected {
                    marker,
                    reason: MarkerError::NotPaintable { marker },
                });
            }
        }
        Command::ToggleCell { point } => match session.grid.marker_at(point) {
            Some(previous) => {
                // The toggle compares against the active marker, not mere
                // emptiness: repainting a differently-painted cell replaces
                // its marker instead of erasing it.
                let current = if previous == session.active_marker {
                    Marker::Empty
                } else {
                    session.active_marker
                };
                let _ = session.grid.set(point, current);
                out_events.push(Event::CellChanged {
                    point,
                    previous,
                    current,
                });
            }
            None => out_events.push(Event::CellChangeRejected {
                point,
                reason: CellError::OutOfBounds {
                    point,
                    size: session.grid.size(),
                },
            }),
        },
        Command::SetMarker { point, marker } => match session.grid.set(point, marker) {
            Some(previous) => out_events.push(Event::CellChanged {
                point,
                previous,
                current: marker,
            }),
            None => out_events.push(Event::CellChangeRejected {
                point,
                reason: CellError::OutOfBounds {
                    point,
                    size: session.grid.size(),
                },
            }),
        },
    }
}

/// Query functions that provide read-only access to the session state.
///
/// Scans always read the live grid; nothing is cached across mutations.
pub mod query {
    use mapsmith_core::{CellError, GridPoint, GridSize, MapDocument, Marker};

    use super::{flood, EditorSession};

    /// Current dimensions of the session's grid.
    #[must_use]
    pub fn dimensions(session: &EditorSession) -> GridSize {
        session.grid.size()
    }

    /// Marker currently selected for painting.
    #[must_use]
    pub fn active_marker(session: &EditorSession) -> Marker {
        session.active_marker
    }

    /// Marker held by the cell at the provided point.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::OutOfBounds`] if the point lies outside the grid.
    pub fn marker_at(session: &EditorSession, point: GridPoint) -> Result<Marker, CellError> {
        session
            .grid
            .marker_at(point)
            .ok_or(CellError::OutOfBounds {
                point,
                size: session.grid.size(),
            })
    }

    /// Collects every cell currently holding the requested marker.
    ///
    /// Visits the grid in row-major order, so the result is ordered by
    /// (y, then x) ascending. Pure read; runs in O(width * height).
    #[must_use]
    pub fn region(session: &EditorSession, marker: Marker) -> Vec<GridPoint> {
        let size = session.grid.size();
        let mut points = Vec::new();
        for y in 0..size.height() {
            for x in 0..size.width() {
                let point = GridPoint::new(x, y);
                if session.grid.marker_at(point) == Some(marker) {
                    points.push(point);
                }
            }
        }
        points
    }

    /// Extracts the maximal 4-adjacent components of the requested marker.
    ///
    /// Operates on a scratch copy of the grid, so the canonical state is
    /// never mutated and repeated calls yield identical results.
    #[must_use]
    pub fn connected_components(session: &EditorSession, marker: Marker) -> Vec<Vec<GridPoint>> {
        flood::connected_components(session.grid.size(), session.grid.cells(), marker)
    }

    /// Assembles the canonical map document from the live grid.
    ///
    /// Captures the current dimensions plus one region scan per paintable
    /// marker. No playability validation is performed.
    #[must_use]
    pub fn map_document(session: &EditorSession) -> MapDocument {
        let size = session.grid.size();
        MapDocument {
            width: size.width(),
            height: size.height(),
            blockades: region(session, Marker::Blockade),
            player_spawns: region(session, Marker::PlayerSpawn),
            npc_spawns: region(session, Marker::NpcSpawn),
        }
    }
}

/// Dense row-major matrix of markers backing one session.
#[derive(Clone, Debug)]
struct MarkerGrid {
    size: GridSize,
    cells: Vec<Marker>,
}

impl MarkerGrid {
    fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Marker::Empty; size.cell_count()],
        }
    }

    /// Destructive and total: prior paint is discarded atomically.
    fn reset(&mut self, size: GridSize) {
        self.size = size;
        self.cells = vec![Marker::Empty; size.cell_count()];
    }

    fn size(&self) -> GridSize {
        self.size
    }

    fn cells(&self) -> &[Marker] {
        &self.cells
    }

    fn marker_at(&self, point: GridPoint) -> Option<Marker> {
        self.index(point)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Overwrites the cell, returning its previous marker, or `None` when
    /// the point is out of bounds (in which case nothing is written).
    fn set(&mut self, point: GridPoint, marker: Marker) -> Option<Marker> {
        let index = self.index(point)?;
        let slot = self.cells.get_mut(index)?;
        let previous = *slot;
        *slot = marker;
        Some(previous)
    }

    fn index(&self, point: GridPoint) -> Option<usize> {
        if !self.size.contains(point) {
            return None;
        }
        let row = usize::try_from(point.y()).ok()?;
        let column = usize::try_from(point.x()).ok()?;
        let width = usize::try_from(self.size.width()).ok()?;
        Some(row * width + column)
    }
}
