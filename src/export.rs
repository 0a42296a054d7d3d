//! DAG export in JSON, CSV, and DOT formats.
//!
//! Exports are read-only views for external reporting and visualization
//! collaborators: the edge list, the per-class canonical boards, and the
//! per-level counts. No layout or rendering happens here; the DOT output
//! is plain graph text for an external Graphviz run.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::graph::ClassDag;
use crate::identifiers::ClassId;
use crate::tictactoe::Token;

/// Exportable summary of one equivalence class
#[derive(Debug, Clone, Serialize)]
pub struct ClassRecord {
    pub id: ClassId,
    /// Move index at which the class was first discovered
    pub level: usize,
    /// Canonical representative board, encoded row-major
    pub canonical: String,
    /// Number of distinct boards in the class's orbit
    pub orbit_size: usize,
    /// Owner of a completed line, when the class is a finished game
    pub winner: Option<char>,
}

/// Complete exportable view of a class DAG
#[derive(Debug, Clone, Serialize)]
pub struct DagExport {
    pub class_count: usize,
    pub edge_count: usize,
    pub level_sizes: Vec<usize>,
    pub classes: Vec<ClassRecord>,
    pub edges: Vec<(ClassId, ClassId)>,
}

fn winner_char(winner: Option<Token>) -> Option<char> {
    winner.map(|token| match token {
        Token::X => 'X',
        Token::O => 'O',
    })
}

/// Assemble the serializable view of a DAG
pub fn dag_export(dag: &ClassDag) -> Result<DagExport> {
    let mut classes = Vec::with_capacity(dag.node_count());
    for node in dag.nodes() {
        let canonical = dag.canonical_of(node.class)?;
        classes.push(ClassRecord {
            id: node.class,
            level: canonical.occupied_count(),
            canonical: canonical.encode(),
            orbit_size: dag.orbit_of_class(node.class)?.len(),
            winner: winner_char(canonical.winner()),
        });
    }

    Ok(DagExport {
        class_count: dag.node_count(),
        edge_count: dag.edge_count(),
        level_sizes: dag.level_sizes().to_vec(),
        classes,
        edges: dag.edge_list(),
    })
}

/// Write the DAG as pretty-printed JSON
pub fn write_json<W: Write>(dag: &ClassDag, writer: W) -> Result<()> {
    let export = dag_export(dag)?;
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

/// Write the DAG as CSV, one row per class.
///
/// Successor ids are semicolon-joined in the last column so the single
/// file carries both the node table and the edge list.
pub fn write_csv<W: Write>(dag: &ClassDag, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "id",
        "level",
        "orbit_size",
        "winner",
        "canonical",
        "successors",
    ])?;

    for record in dag_export(dag)?.classes {
        let node = dag.node(record.id)?;
        let successors = node
            .successors
            .iter()
            .map(ClassId::to_string)
            .collect::<Vec<_>>()
            .join(";");
        csv_writer.write_record([
            record.id.to_string(),
            record.level.to_string(),
            record.orbit_size.to_string(),
            record.winner.map(String::from).unwrap_or_default(),
            record.canonical,
            successors,
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the DAG in Graphviz DOT format.
///
/// Finished-game classes get doubled borders so a renderer distinguishes
/// them; everything else is left to the external layout engine.
pub fn write_dot<W: Write>(dag: &ClassDag, mut writer: W) -> Result<()> {
    writeln!(writer, "digraph ttt_classes {{")?;
    writeln!(writer, "    rankdir=TB;")?;
    writeln!(writer, "    node [shape=box fontname=\"monospace\"];")?;

    for record in dag_export(dag)?.classes {
        let rows = format!(
            "{}\\n{}\\n{}",
            &record.canonical[0..3],
            &record.canonical[3..6],
            &record.canonical[6..9]
        );
        let decoration = if record.winner.is_some() {
            " peripheries=2"
        } else {
            ""
        };
        writeln!(
            writer,
            "    c{} [label=\"{}\"{}];",
            record.id, rows, decoration
        )?;
    }

    for (source, target) in dag.edge_list() {
        writeln!(writer, "    c{source} -> c{target};")?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_class_dag;

    #[test]
    fn export_view_matches_dag_metrics() {
        let dag = build_class_dag().unwrap();
        let export = dag_export(&dag).unwrap();

        assert_eq!(export.class_count, dag.node_count());
        assert_eq!(export.edge_count, dag.edge_count());
        assert_eq!(export.edges.len(), export.edge_count);
        assert_eq!(export.classes.len(), export.class_count);
        assert_eq!(export.classes[0].canonical, ".........");
        assert_eq!(export.classes[0].level, 0);
    }

    #[test]
    fn dot_output_is_well_formed() {
        let dag = build_class_dag().unwrap();
        let mut buffer = Vec::new();
        write_dot(&dag, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("digraph ttt_classes {"));
        assert!(text.trim_end().ends_with('}'));
        assert!(text.contains("c0 ["));
        assert!(text.contains("peripheries=2"), "winner classes are marked");
    }
}
