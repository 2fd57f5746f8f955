use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use graphlang::graph::GraphView;
use graphlang::trace::{Algorithm, BreadthFirstSearch};
use graphlang::{Grammar, compile};

/// Compile a graph description and print the result as JSON.
#[derive(Debug, Parser)]
#[clap(name = "graphlang", about = "Graph description compiler")]
struct Args {
    /// Source file to compile.
    file: PathBuf,

    /// Grammar of the source: `dot` or `call`. Defaults from the extension
    /// (`.dot`/`.gv` are dot, anything else is call).
    #[clap(long)]
    grammar: Option<Grammar>,

    /// Print structural counts instead of the graph.
    #[clap(long, conflicts_with = "bfs")]
    summary: bool,

    /// Print a breadth-first search trace starting at this vertex.
    #[clap(long, value_name = "START")]
    bfs: Option<String>,
}

fn grammar_for(path: &Path) -> Grammar {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("dot") | Some("gv") => Grammar::Dot,
        _ => Grammar::Call,
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let grammar = args.grammar.unwrap_or_else(|| grammar_for(&args.file));

    let graph = match compile(&source, grammar) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err.render(&source));
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = if args.summary {
        serde_json::to_string_pretty(&GraphView::build(&graph).summary())?
    } else if let Some(start) = &args.bfs {
        let trace = BreadthFirstSearch.run(&graph, start)?;
        serde_json::to_string_pretty(&trace)?
    } else {
        serde_json::to_string_pretty(&graph)?
    };
    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}
