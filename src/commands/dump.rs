//! Strategy tree export in GraphViz format
//!
//! Nodes are labelled with their guess and the number of possible solutions
//! when it is played; edges with the score that leads to the next guess.
//! The opening is circled in red and final guesses are drawn in green.

use crate::core::{GameConfig, SolverError};
use crate::solver::{NodeId, StrategyTree};
use std::io::Write;
use tracing::info;

/// Conventional file name for a game's strategy graph
#[must_use]
pub fn default_strategy_path(game: GameConfig) -> String {
    format!("mastermind_strategy_{}p{}c.gv", game.pin_count(), game.color_count())
}

/// Write `tree` as a GraphViz digraph and return the number of nodes written
///
/// # Errors
/// Returns [`SolverError::Io`] if writing fails.
pub fn write_strategy_dot<W: Write>(tree: &StrategyTree, game: GameConfig, mut out: W) -> Result<usize, SolverError> {
    let (pins, colors) = (game.pin_count(), game.color_count());
    writeln!(out, "digraph Mastermind_Strategy_{pins}p{colors}c {{")?;
    writeln!(out, "size=\"40,40\"")?;
    writeln!(out, "overlap=true")?;
    writeln!(out, "ranksep=5")?;
    writeln!(out, "ordering=out")?;
    writeln!(out, "node [shape=plaintext]")?;

    let root = tree.root();
    let root_node = tree.get(root);
    writeln!(out, "root=n{}", root.index())?;
    writeln!(
        out,
        "n{} [label=\"{} - {}\",shape=circle,color=red]",
        root.index(),
        root_node.guess(),
        root_node.solutions_remaining()
    )?;

    let mut written = 1;
    // Depth first, highest score first, matching the edge order within a node
    let mut pending: Vec<NodeId> = vec![root];
    while let Some(id) = pending.pop() {
        let children = tree.get(id).children();
        for &(score, child) in &children {
            let node = tree.get(child);
            if node.is_leaf() {
                writeln!(out, "n{} [label=\"{}\",fontcolor=green,style=bold]", child.index(), node.guess())?;
            } else {
                writeln!(
                    out,
                    "n{} [label=\"{} - {}\"]",
                    child.index(),
                    node.guess(),
                    node.solutions_remaining()
                )?;
            }
            writeln!(out, "n{} -> n{} [label=\"{score}\"]", id.index(), child.index())?;
            written += 1;
        }
        pending.extend(children.iter().rev().map(|&(_, child)| child));
    }

    writeln!(out, "}}")?;
    out.flush()?;
    info!(nodes = written, "Wrote strategy graph");
    Ok(written)
}
