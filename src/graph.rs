//! Level-synchronous construction of the equivalence-class DAG.
//!
//! The builder walks the game one move index at a time: the frontier of a
//! level is fixed before the level is expanded, every raw successor board
//! is resolved against the registry (reuse an existing class or mint a new
//! one), and converging move paths collapse into a single directed edge.

use crate::error::Result;
use crate::identifiers::ClassId;
use crate::registry::Registry;
use crate::tictactoe::{Board, Orbit, CELL_COUNT};

/// One node of the class DAG, identified by its class id.
///
/// Nodes live in a flat arena indexed by [`ClassId`], and edges are stored
/// as ids rather than references, so the structure has no cycles to manage
/// and serializes trivially.
#[derive(Debug, Clone)]
pub struct Node {
    /// The equivalence class this node stands for
    pub class: ClassId,
    /// Successor classes, deduplicated; logically a set of directed edges
    pub successors: Vec<ClassId>,
}

impl Node {
    fn new(class: ClassId) -> Self {
        Node {
            class,
            successors: Vec::new(),
        }
    }
}

/// The finished DAG of symmetry-equivalence classes.
///
/// Owns the registry that was used to build it, so canonical boards and
/// full orbits stay available to reporting and export collaborators.
#[derive(Debug)]
pub struct ClassDag {
    nodes: Vec<Node>,
    level_sizes: Vec<usize>,
    registry: Registry,
}

impl ClassDag {
    /// The class of the empty board
    pub fn root(&self) -> ClassId {
        self.nodes[0].class
    }

    /// Total number of classes discovered
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.successors.len()).sum()
    }

    /// All nodes in class-id order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node for a class
    pub fn node(&self, class: ClassId) -> Result<&Node> {
        self.nodes
            .get(class.index())
            .ok_or(crate::Error::UnknownClass { class })
    }

    /// Number of classes first discovered at each move index.
    ///
    /// `level_sizes()[k]` is the size of the frontier entering level `k`.
    pub fn level_sizes(&self) -> &[usize] {
        &self.level_sizes
    }

    /// The canonical representative board of a class
    pub fn canonical_of(&self, class: ClassId) -> Result<&Board> {
        self.registry.canonical_of(class)
    }

    /// The full orbit of a class
    pub fn orbit_of_class(&self, class: ClassId) -> Result<&Orbit> {
        self.registry.orbit_of_class(class)
    }

    /// The move index at which a class was first discovered.
    ///
    /// Every board of a class carries the same number of tokens, and a
    /// class is only ever created while its first move index is being
    /// expanded, so the depth equals the canonical board's occupancy.
    pub fn level_of(&self, class: ClassId) -> Result<usize> {
        self.canonical_of(class).map(Board::occupied_count)
    }

    /// The full edge list as (source, target) class-id pairs.
    ///
    /// Produced by an iterative sweep over the node arena in id order; no
    /// recursion is involved, so graph depth is never a concern.
    pub fn edge_list(&self) -> Vec<(ClassId, ClassId)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for node in &self.nodes {
            for &successor in &node.successors {
                edges.push((node.class, successor));
            }
        }
        edges
    }
}

/// Explore the reachable state space from the empty board and assemble the
/// class DAG.
///
/// One level per move index, starting at level 0 with the empty board's
/// class alone in the frontier. The bound of [`CELL_COUNT`] move indices
/// guarantees termination; in practice the frontier empties at the same
/// point because no game continues past a full board.
///
/// # Errors
///
/// Any error out of the registry here is an invariant violation in the
/// builder's own lookup-then-register sequencing and is propagated as
/// fatal rather than patched over.
pub fn build_class_dag() -> Result<ClassDag> {
    let mut registry = Registry::new();
    let mut nodes = Vec::new();
    let mut level_sizes = Vec::new();

    let root = registry.register_new(Board::new())?;
    nodes.push(Node::new(root));
    level_sizes.push(1);

    let mut frontier = vec![root];
    let mut move_index = 0;

    while !frontier.is_empty() && move_index < CELL_COUNT {
        let mut next_frontier = Vec::new();

        for &class in &frontier {
            // The representative stands in for every member of its class:
            // symmetric boards reach symmetric successors.
            let canonical = *registry.canonical_of(class)?;

            for successor in canonical.successors(move_index) {
                let target = match registry.lookup(&successor) {
                    Some(existing) => existing,
                    None => {
                        let fresh = registry.register_new(successor)?;
                        nodes.push(Node::new(fresh));
                        next_frontier.push(fresh);
                        fresh
                    }
                };

                let node = &mut nodes[class.index()];
                if !node.successors.contains(&target) {
                    node.successors.push(target);
                }
            }
        }

        if !next_frontier.is_empty() {
            level_sizes.push(next_frontier.len());
        }
        frontier = next_frontier;
        move_index += 1;
    }

    Ok(ClassDag {
        nodes,
        level_sizes,
        registry,
    })
}
