use mapsmith_core::{Command, GridPoint, GridSize, MapDocument, Marker};
use mapsmith_session::{apply, query, EditorSession};

fn configured_session(width: u32, height: u32) -> EditorSession {
    let mut session = EditorSession::new();
    let mut events = Vec::new();
    let size = GridSize::new(width, height).expect("valid test dimensions");
    apply(&mut session, Command::ConfigureGrid { size }, &mut events);
    session
}

fn paint(session: &mut EditorSession, point: GridPoint, marker: Marker) {
    let mut events = Vec::new();
    apply(session, Command::SetMarker { point, marker }, &mut events);
}

#[test]
fn region_returns_exactly_the_painted_set_in_row_major_order() {
    let mut session = configured_session(4, 3);
    let painted = [
        GridPoint::new(3, 0),
        GridPoint::new(0, 1),
        GridPoint::new(2, 2),
    ];
    for point in painted {
        paint(&mut session, point, Marker::Blockade);
    }
    paint(&mut session, GridPoint::new(1, 1), Marker::PlayerSpawn);

    assert_eq!(
        query::region(&session, Marker::Blockade),
        vec![
            GridPoint::new(3, 0),
            GridPoint::new(0, 1),
            GridPoint::new(2, 2),
        ],
        "scan must collect blockades only, ordered by (y, x)",
    );
}

#[test]
fn map_document_captures_dimensions_and_all_three_regions() {
    let mut session = configured_session(3, 2);
    paint(&mut session, GridPoint::new(0, 0), Marker::Blockade);
    paint(&mut session, GridPoint::new(1, 0), Marker::Blockade);
    paint(&mut session, GridPoint::new(2, 1), Marker::PlayerSpawn);

    let document = query::map_document(&session);

    assert_eq!(
        document,
        MapDocument {
            width: 3,
            height: 2,
            blockades: vec![GridPoint::new(0, 0), GridPoint::new(1, 0)],
            player_spawns: vec![GridPoint::new(2, 1)],
            npc_spawns: Vec::new(),
        },
    );
}

#[test]
fn export_is_a_fresh_snapshot_per_request() {
    let mut session = configured_session(3, 3);
    paint(&mut session, GridPoint::new(1, 1), Marker::NpcSpawn);

    let first = query::map_document(&session);
    paint(&mut session, GridPoint::new(2, 2), Marker::NpcSpawn);
    let second = query::map_document(&session);

    assert_eq!(first.npc_spawns, vec![GridPoint::new(1, 1)]);
    assert_eq!(
        second.npc_spawns,
        vec![GridPoint::new(1, 1), GridPoint::new(2, 2)],
        "scans must read live state, never a stale cache",
    );
}

#[test]
fn connected_components_do_not_disturb_the_grid() {
    let mut session = configured_session(4, 4);
    let painted = [
        GridPoint::new(0, 0),
        GridPoint::new(1, 0),
        GridPoint::new(3, 3),
    ];
    for point in painted {
        paint(&mut session, point, Marker::Blockade);
    }

    let components = query::connected_components(&session, Marker::Blockade);
    assert_eq!(components.len(), 2);

    assert_eq!(
        query::region(&session, Marker::Blockade),
        painted.to_vec(),
        "component extraction must operate on a private copy",
    );
    assert_eq!(
        query::connected_components(&session, Marker::Blockade),
        components,
        "repeated extraction must be idempotent",
    );
}

#[test]
fn sessions_are_independent_values() {
    let mut first = configured_session(3, 3);
    let second = configured_session(3, 3);
    paint(&mut first, GridPoint::new(0, 0), Marker::Blockade);

    assert_eq!(
        query::marker_at(&second, GridPoint::new(0, 0)),
        Ok(Marker::Empty),
        "painting one session must not leak into another",
    );
}
