//! Explore command - enumerate the state space and report complexity

use anyhow::Result;
use clap::Parser;

use crate::cli::output::{format_number, print_kv, print_section};
use crate::graph::build_class_dag;

#[derive(Parser, Debug)]
#[command(about = "Enumerate the symmetry-reduced state space")]
pub struct ExploreArgs {
    /// Also print the canonical boards of every class first discovered at
    /// this move index
    #[arg(long, value_name = "MOVE_INDEX")]
    pub show_depth: Option<usize>,
}

pub fn execute(args: ExploreArgs) -> Result<()> {
    let dag = build_class_dag()?;

    print_section("Symmetry-reduced Tic-Tac-Toe state space");

    println!("\n  {:>10}  {:>8}", "move index", "classes");
    for (move_index, size) in dag.level_sizes().iter().enumerate() {
        println!("  {move_index:>10}  {size:>8}");
    }
    println!();
    print_kv("Total classes", &format_number(dag.node_count()));
    print_kv("Total edges", &format_number(dag.edge_count()));

    if let Some(depth) = args.show_depth {
        print_section(&format!("Canonical boards at move index {depth}"));
        let mut shown = 0usize;
        for node in dag.nodes() {
            if dag.level_of(node.class)? != depth {
                continue;
            }
            let canonical = dag.canonical_of(node.class)?;
            println!("\nclass {} (orbit size {}):", node.class, dag.orbit_of_class(node.class)?.len());
            println!("{canonical}");
            shown += 1;
        }
        if shown == 0 {
            println!("\n  no classes at this depth");
        }
    }

    Ok(())
}
