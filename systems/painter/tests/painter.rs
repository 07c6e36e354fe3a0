use mapsmith_core::{Command, Event, GridPoint, GridSize};
use mapsmith_system_painter::{Painter, PainterInput};

fn size(width: u32, height: u32) -> GridSize {
    GridSize::new(width, height).expect("valid test dimensions")
}

#[test]
fn click_on_first_cell_targets_the_origin() {
    let mut painter = Painter::new(size(10, 20));
    let mut commands = Vec::new();

    painter.handle(&[], PainterInput::new(true, Some(0)), &mut commands);

    assert_eq!(
        commands,
        vec![Command::ToggleCell {
            point: GridPoint::new(0, 0),
        }],
        "index zero must map to the grid origin",
    );
}

#[test]
fn reconfiguration_event_changes_index_resolution() {
    let mut painter = Painter::new(size(10, 20));
    let mut commands = Vec::new();

    painter.handle(
        &[Event::GridConfigured { size: size(4, 8) }],
        PainterInput::new(true, Some(9)),
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![Command::ToggleCell {
            point: GridPoint::new(1, 2),
        }],
        "resolution must use the reconfigured width, not the seed width",
    );
}

#[test]
fn index_past_the_grid_is_forwarded_for_session_rejection() {
    let mut painter = Painter::new(size(3, 2));
    let mut commands = Vec::new();

    painter.handle(&[], PainterInput::new(true, Some(6)), &mut commands);

    assert_eq!(
        commands,
        vec![Command::ToggleCell {
            point: GridPoint::new(0, 2),
        }],
        "the painter forwards the resolved address so the session owns bounds checks",
    );
}

#[test]
fn absent_pointer_index_emits_nothing() {
    let mut painter = Painter::new(size(3, 2));
    let mut commands = Vec::new();

    painter.handle(&[], PainterInput::new(true, None), &mut commands);

    assert!(commands.is_empty(), "a press without a cell has no target");
}
