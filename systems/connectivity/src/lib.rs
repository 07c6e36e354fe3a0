#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Planar connectivity builder over an unordered set of grid points.
//!
//! Typically run as a post-processing step over the blockade region, the
//! builder produces a single rooted structure whose directional links
//! expose horizontal runs per row and vertical attachment to the row
//! above. Nodes live in an index-addressed arena and reference each other
//! through [`NodeId`] values, so the bidirectional link graph carries no
//! ownership cycles.

use std::collections::HashMap;

use mapsmith_core::GridPoint;
use thiserror::Error;

/// Opaque handle to a node within a [`BlockadeGraph`] arena.
///
/// Ids are only minted by the builder, so a handle always resolves within
/// the graph that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node of the planar link structure.
///
/// Relations are non-owning lookups into the graph's arena. Links are set
/// in pairs: whenever a node gains a `right` neighbour, that neighbour's
/// `left` points back, and likewise for `bottom`/`top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNode {
    point: GridPoint,
    left: Option<NodeId>,
    right: Option<NodeId>,
    top: Option<NodeId>,
    bottom: Option<NodeId>,
}

impl GridNode {
    const fn new(point: GridPoint) -> Self {
        Self {
            point,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// Grid point serving as the node's identity.
    #[must_use]
    pub const fn point(&self) -> GridPoint {
        self.point
    }

    /// Neighbour to the left within the same horizontal run, if any.
    #[must_use]
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Neighbour to the right within the same horizontal run, if any.
    #[must_use]
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Neighbour in the row above this node's column, if any.
    #[must_use]
    pub const fn top(&self) -> Option<NodeId> {
        self.top
    }

    /// Neighbour in the row below this node's column, if any.
    #[must_use]
    pub const fn bottom(&self) -> Option<NodeId> {
        self.bottom
    }
}

/// Rooted planar link structure built over a set of grid points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockadeGraph {
    nodes: Vec<GridNode>,
    root: NodeId,
}

impl BlockadeGraph {
    /// Handle of the root node (the first point in build order).
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Resolves a handle to its node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&GridNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes contained in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Reports whether the graph contains no nodes.
    ///
    /// Always false for graphs produced by [`build_blockade_graph`], which
    /// rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Reasons the connectivity builder may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ConnectivityError {
    /// The input contained no points, so no root exists.
    #[error("cannot build a connectivity graph over an empty region")]
    EmptyRegion,
    /// A vertical link required a node at `(x, y - 1)` that was never built.
    #[error(
        "no node exists in the row above ({}, {}) to anchor a vertical link",
        .point.x(),
        .point.y()
    )]
    MissingRowAbove {
        /// Point whose upper-row anchor could not be resolved.
        point: GridPoint,
    },
}

/// Builds the rooted planar link structure over the provided points.
///
/// Points are sorted by `x` ascending with ties broken by `y` ascending.
/// The sort key is deliberately x-major even though vertical linking
/// resolves row-major: consumers of the structure depend on this traversal
/// order, so it is preserved as-is rather than aligned with the adjacency
/// logic. Each point after the first either extends the previous node to
/// the right (when its `x` strictly increased) or hangs below the node at
/// `(x, y - 1)`.
///
/// The result only connects points that were contiguous in the sorted
/// traversal; it is not a spanning structure over all 4-adjacencies.
///
/// # Errors
///
/// Returns [`ConnectivityError::EmptyRegion`] for empty input and
/// [`ConnectivityError::MissingRowAbove`] when a vertical link cannot
/// resolve its upper-row anchor, including for points in row zero.
pub fn build_blockade_graph(points: &[GridPoint]) -> Result<BlockadeGraph, ConnectivityError> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x().cmp(&b.x()).then(a.y().cmp(&b.y())));

    let first = *sorted.first().ok_or(ConnectivityError::EmptyRegion)?;
    let root = NodeId(0);
    let mut nodes = vec![GridNode::new(first)];

    // Rows index: y -> x -> node, populated as nodes are created.
    let mut rows: HashMap<u32, HashMap<u32, NodeId>> = HashMap::new();
    let _ = rows.entry(first.y()).or_default().insert(first.x(), root);

    let mut current = root;
    for &point in &sorted[1..] {
        let id = NodeId(nodes.len());
        nodes.push(GridNode::new(point));
        let _ = rows.entry(point.y()).or_default().insert(point.x(), id);

        if point.x() > nodes[current.0].point.x() {
            nodes[current.0].right = Some(id);
            nodes[id.0].left = Some(current);
        } else {
            let above = point
                .y()
                .checked_sub(1)
                .and_then(|row| rows.get(&row))
                .and_then(|columns| columns.get(&point.x()).copied())
                .ok_or(ConnectivityError::MissingRowAbove { point })?;
            nodes[above.0].bottom = Some(id);
            nodes[id.0].top = Some(above);
        }

        // The freshly created node becomes "previous" in both branches.
        current = id;
    }

    Ok(BlockadeGraph { nodes, root })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_becomes_an_unlinked_root() {
        let graph = build_blockade_graph(&[GridPoint::new(2, 3)]).expect("graph builds");

        assert_eq!(graph.len(), 1);
        let root = graph.node(graph.root()).expect("root resolves");
        assert_eq!(root.point(), GridPoint::new(2, 3));
        assert_eq!(root.left(), None);
        assert_eq!(root.right(), None);
        assert_eq!(root.top(), None);
        assert_eq!(root.bottom(), None);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            build_blockade_graph(&[]),
            Err(ConnectivityError::EmptyRegion),
        );
    }
}
