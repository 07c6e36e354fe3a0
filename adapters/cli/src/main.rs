#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a mapsmith editing session.
//!
//! Stands in for the editor's visual collaborators: it configures the
//! grid, selects markers, forwards paint input through the painter
//! system, and writes the exported map document. It can also read back a
//! previously exported document and report on it.

mod map_transfer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mapsmith_core::{Command, Event, GridPoint, GridSize, Marker};
use mapsmith_session::{apply, query, EditorSession};
use mapsmith_system_connectivity::build_blockade_graph;
use mapsmith_system_painter::{Painter, PainterInput};

#[derive(Debug, Parser)]
#[command(
    name = "mapsmith",
    about = "Paint semantic markers onto a cell grid and export the map document"
)]
struct Args {
    /// Number of grid columns.
    #[arg(long, default_value_t = 10)]
    width: u32,
    /// Number of grid rows.
    #[arg(long, default_value_t = 20)]
    height: u32,
    /// Paint instructions of the form MARKER:X,Y, applied in order
    /// (markers: blockade, player-spawn, npc-spawn).
    #[arg(long = "paint", value_name = "MARKER:X,Y")]
    paint: Vec<String>,
    /// Raw pointer presses forwarded as row-major linear cell indices,
    /// toggled with the marker given by --marker.
    #[arg(long = "click", value_name = "INDEX")]
    clicks: Vec<u32>,
    /// Active marker used for --click input.
    #[arg(long, default_value = "blockade", value_name = "MARKER")]
    marker: String,
    /// Report on the planar blockade graph after painting.
    #[arg(long)]
    link_blockades: bool,
    /// Write the exported document to this path instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Validate a previously exported document and report its contents
    /// instead of editing.
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["paint", "clicks", "marker", "link_blockades", "out"]
    )]
    check: Option<PathBuf>,
}

/// Entry point for the mapsmith command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.check {
        return check_document(path);
    }

    let size = GridSize::new(args.width, args.height)
        .context("grid dimensions were rejected")?;

    let mut session = EditorSession::new();
    let mut events = Vec::new();
    apply(&mut session, Command::ConfigureGrid { size }, &mut events);
    let mut painter = Painter::new(query::dimensions(&session));

    for instruction in &args.paint {
        let (marker, point) = parse_paint_instruction(instruction)
            .with_context(|| format!("invalid paint instruction '{instruction}'"))?;
        select_marker(&mut session, marker)?;
        // Addressed cells go straight to the session so its bounds check
        // rejects them; folding into a linear index would alias any
        // x >= width onto a different in-bounds cell.
        toggle_point(&mut session, point)?;
    }

    if !args.clicks.is_empty() {
        let marker = Marker::from_identifier(&args.marker)
            .context("marker selection was rejected")?;
        select_marker(&mut session, marker)?;
        for &index in &args.clicks {
            toggle_index(&mut session, &mut painter, index)?;
        }
    }

    if args.link_blockades {
        report_blockade_graph(&session)?;
    }

    let document = query::map_document(&session);
    let encoded = map_transfer::encode(&document);
    match &args.out {
        Some(path) => fs::write(path, &encoded)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{encoded}"),
    }

    Ok(())
}

/// Applies a marker selection and surfaces any rejection as a failure.
fn select_marker(session: &mut EditorSession, marker: Marker) -> Result<()> {
    let mut events = Vec::new();
    apply(session, Command::SelectMarker { marker }, &mut events);
    for event in &events {
        if let Event::MarkerSelectionRejected { reason, .. } = event {
            bail!("marker selection rejected: {reason}");
        }
    }
    Ok(())
}

/// Toggles an explicitly addressed cell, surfacing rejections as failures.
fn toggle_point(session: &mut EditorSession, point: GridPoint) -> Result<()> {
    let mut events = Vec::new();
    apply(session, Command::ToggleCell { point }, &mut events);
    fail_on_rejection(&events)
}

/// Routes one pointer press through the painter system into the session.
fn toggle_index(session: &mut EditorSession, painter: &mut Painter, index: u32) -> Result<()> {
    let mut commands = Vec::new();
    painter.handle(
        &[],
        PainterInput::new(true, Some(index)),
        &mut commands,
    );

    let mut events = Vec::new();
    for command in commands {
        apply(session, command, &mut events);
    }
    fail_on_rejection(&events)
}

/// Fails on the first cell-change rejection observed in the event batch.
fn fail_on_rejection(events: &[Event]) -> Result<()> {
    for event in events {
        if let Event::CellChangeRejected { reason, .. } = event {
            bail!("paint rejected: {reason}");
        }
    }
    Ok(())
}

/// Parses a MARKER:X,Y paint instruction.
fn parse_paint_instruction(instruction: &str) -> Result<(Marker, GridPoint)> {
    let Some((identifier, coordinates)) = instruction.split_once(':') else {
        bail!("expected MARKER:X,Y");
    };
    let marker = Marker::from_identifier(identifier.trim())?;

    let Some((x, y)) = coordinates.split_once(',') else {
        bail!("expected coordinates of the form X,Y");
    };
    let x: u32 = x
        .trim()
        .parse()
        .with_context(|| format!("could not parse column '{}'", x.trim()))?;
    let y: u32 = y
        .trim()
        .parse()
        .with_context(|| format!("could not parse row '{}'", y.trim()))?;

    Ok((marker, GridPoint::new(x, y)))
}

/// Builds the planar blockade graph and prints a short summary to stderr.
fn report_blockade_graph(session: &EditorSession) -> Result<()> {
    let blockades = query::region(session, Marker::Blockade);
    let graph = build_blockade_graph(&blockades).context("failed to link blockade cells")?;
    let root = graph
        .node(graph.root())
        .context("blockade graph root did not resolve")?;
    eprintln!(
        "linked {} blockade cells; root at ({}, {})",
        graph.len(),
        root.point().x(),
        root.point().y(),
    );
    Ok(())
}

/// Reads back an exported document and prints a content summary.
fn check_document(path: &Path) -> Result<()> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = map_transfer::decode(&payload)
        .with_context(|| format!("{} is not a valid map document", path.display()))?;
    println!(
        "{}x{} map: {} blockades, {} player spawns, {} npc spawns",
        document.width,
        document.height,
        document.blockades.len(),
        document.player_spawns.len(),
        document.npc_spawns.len(),
    );
    Ok(())
}
