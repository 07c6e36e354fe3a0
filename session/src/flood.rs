//! Connected-component extraction used by the session's scanner queries.

use mapsmith_core::{GridPoint, GridSize, Marker};

/// Maximal sets of 4-adjacent cells holding `marker`, extracted from a
/// scratch copy of the grid so the canonical state stays untouched.
///
/// Consumed cells are marked with a `None` sentinel, which no live marker
/// can collide with. Components are discovered in row-major order of their
/// first cell; cells within a component follow the depth-first visitation
/// order (right, left, down, up from each cell).
pub(crate) fn connected_components(
    size: GridSize,
    cells: &[Marker],
    marker: Marker,
) -> Vec<Vec<GridPoint>> {
    let mut scratch: Vec<Option<Marker>> = cells.iter().copied().map(Some).collect();
    let mut components = Vec::new();

    for y in 0..size.height() {
        for x in 0..size.width() {
            let start = GridPoint::new(x, y);
            let Some(index) = index(size, start) else {
                continue;
            };
            if scratch.get(index).copied().flatten() != Some(marker) {
                continue;
            }
            components.push(collect_component(&mut scratch, size, start, marker));
        }
    }

    components
}

/// Depth-first fill with an explicit stack so the traversal depth stays
/// bounded regardless of grid size.
fn collect_component(
    scratch: &mut [Option<Marker>],
    size: GridSize,
    start: GridPoint,
    marker: Marker,
) -> Vec<GridPoint> {
    let mut component = Vec::new();
    let mut stack = vec![start];

    while let Some(point) = stack.pop() {
        let Some(index) = index(size, point) else {
            continue;
        };
        let Some(slot) = scratch.get_mut(index) else {
            continue;
        };
        if *slot != Some(marker) {
            // Already consumed, or a different marker: empty contribution.
            continue;
        }

        *slot = None;
        component.push(point);

        // Pushed in reverse so the pop order explores right, left, down,
        // then up.
        if let Some(y) = point.y().checked_sub(1) {
            stack.push(GridPoint::new(point.x(), y));
        }
        if point.y() + 1 < size.height() {
            stack.push(GridPoint::new(point.x(), point.y() + 1));
        }
        if let Some(x) = point.x().checked_sub(1) {
            stack.push(GridPoint::new(x, point.y()));
        }
        if point.x() + 1 < size.width() {
            stack.push(GridPoint::new(point.x() + 1, point.y()));
        }
    }

    component
}

fn index(size: GridSize, point: GridPoint) -> Option<usize> {
    if !size.contains(point) {
        return None;
    }
    let row = usize::try_from(point.y()).ok()?;
    let column = usize::try_from(point.x()).ok()?;
    let width = usize::try_from(size.width()).ok()?;
    Some(row * width + column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(size: GridSize, painted: &[GridPoint], marker: Marker) -> Vec<Marker> {
        let mut cells = vec![Marker::Empty; size.cell_count()];
        for point in painted {
            let offset = index(size, *point).expect("test points are in bounds");
            cells[offset] = marker;
        }
        cells
    }

    #[test]
    fn separated_clusters_form_distinct_components() {
        let size = GridSize::new(5, 3).expect("valid size");
        let painted = [
            GridPoint::new(0, 0),
            GridPoint::new(1, 0),
            GridPoint::new(4, 2),
        ];
        let cells = grid(size, &painted, Marker::Blockade);

        let components = connected_components(size, &cells, Marker::Blockade);

        assert_eq!(components.len(), 2);
        assert_eq!(
            components[0],
            vec![GridPoint::new(0, 0), GridPoint::new(1, 0)],
        );
        assert_eq!(components[1], vec![GridPoint::new(4, 2)]);
    }

    #[test]
    fn diagonal_neighbours_stay_separate() {
        let size = GridSize::new(3, 3).expect("valid size");
        let painted = [GridPoint::new(0, 0), GridPoint::new(1, 1)];
        let cells = grid(size, &painted, Marker::PlayerSpawn);

        let components = connected_components(size, &cells, Marker::PlayerSpawn);

        assert_eq!(components.len(), 2);
    }

    #[test]
    fn l_shaped_cluster_is_one_component() {
        let size = GridSize::new(4, 4).expect("valid size");
        let painted = [
            GridPoint::new(1, 1),
            GridPoint::new(1, 2),
            GridPoint::new(2, 2),
        ];
        let cells = grid(size, &painted, Marker::Blockade);

        let components = connected_components(size, &cells, Marker::Blockade);

        assert_eq!(components.len(), 1);
        let mut cells_in_component = components[0].clone();
        cells_in_component.sort();
        assert_eq!(cells_in_component, painted.to_vec());
    }

    #[test]
    fn other_markers_are_not_absorbed() {
        let size = GridSize::new(3, 1).expect("valid size");
        let mut cells = grid(size, &[GridPoint::new(0, 0)], Marker::Blockade);
        let spawn_offset = index(size, GridPoint::new(1, 0)).expect("in bounds");
        cells[spawn_offset] = Marker::PlayerSpawn;

        let components = connected_components(size, &cells, Marker::Blockade);

        assert_eq!(components, vec![vec![GridPoint::new(0, 0)]]);
    }

    #[test]
    fn input_cells_are_left_untouched() {
        let size = GridSize::new(2, 2).expect("valid size");
        let cells = grid(size, &[GridPoint::new(0, 0)], Marker::Blockade);
        let snapshot = cells.clone();

        let _ = connected_components(size, &cells, Marker::Blockade);

        assert_eq!(cells, snapshot);
    }
}
