#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure painting system that translates pointer input into toggle commands.
//!
//! Pointer adapters address cells by a linear index, the way a flat list of
//! clickable boxes does. This system resolves that index against the grid
//! width (`col = index mod width`, `row = index div width`) and emits
//! [`Command::ToggleCell`] batches; the session stays the sole authority on
//! bounds and toggle semantics.

use mapsmith_core::{Command, Event, GridPoint, GridSize};

/// Input snapshot distilled from adapter-provided pointer data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PainterInput {
    /// Indicates whether the author pressed a cell on this frame.
    pub paint_action: bool,
    /// Linear index of the pressed cell, counted row-major from the origin.
    pub cell_index: Option<u32>,
}

impl PainterInput {
    /// Creates a new input descriptor with explicit field values.
    #[must_use]
    pub const fn new(paint_action: bool, cell_index: Option<u32>) -> Self {
        Self {
            paint_action,
            cell_index,
        }
    }
}

impl Default for PainterInput {
    fn default() -> Self {
        Self {
            paint_action: false,
            cell_index: None,
        }
    }
}

/// Painting system that resolves pointer indices into cell toggles.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    size: GridSize,
}

impl Painter {
    /// Creates a new painter resolving indices against the provided grid size.
    #[must_use]
    pub const fn new(size: GridSize) -> Self {
        Self { size }
    }

    /// Consumes session events and pointer input to emit toggle commands.
    ///
    /// Grid reconfigurations observed in `events` update the width used for
    /// index resolution before the input is processed. An index past the
    /// last row still resolves to a grid point and is forwarded, so the
    /// session performs the authoritative out-of-bounds rejection.
    pub fn handle(&mut self, events: &[Event], input: PainterInput, out: &mut Vec<Command>) {
        for event in events {
            if let Event::GridConfigured { size } = event {
                self.size = *size;
            }
        }

        if !input.paint_action {
            return;
        }

        let Some(index) = input.cell_index else {
            return;
        };

        // GridSize guarantees a positive width.
        let width = self.size.width();
        let point = GridPoint::new(index % width, index / width);
        out.push(Command::ToggleCell { point });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> GridSize {
        GridSize::new(width, height).expect("valid test dimensions")
    }

    #[test]
    fn index_resolution_uses_row_major_layout() {
        let mut painter = Painter::new(size(10, 20));
        let mut commands = Vec::new();

        painter.handle(&[], PainterInput::new(true, Some(27)), &mut commands);

        assert_eq!(
            commands,
            vec![Command::ToggleCell {
                point: GridPoint::new(7, 2),
            }],
        );
    }

    #[test]
    fn no_command_without_paint_action() {
        let mut painter = Painter::new(size(10, 20));
        let mut commands = Vec::new();

        painter.handle(&[], PainterInput::new(false, Some(3)), &mut commands);

        assert!(commands.is_empty());
    }
}
