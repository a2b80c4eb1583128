use std::{fs, io, path::PathBuf};

use anyhow::{ensure, Context};
use city_paths::{
    console::{ConsoleSession, Medium},
    graphs::{
        graph_factory::{to_file_text, GraphFactory},
        Vertex,
    },
    report::{write_outcome, write_outcome_to_file},
    search::{bellman_ford::BellmanFord, path::ShortestPathRequest, PathFinding},
    utility::{get_progressspinner, has_txt_extension, init_tracing},
};
use clap::Parser;

/// Finds the length of the shortest road between two cities. Without
/// `--graph` the graph is entered interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in the .txt incidence list format
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Departure city, asked for when missing
    #[arg(short, long)]
    source: Option<Vertex>,
    /// Arrival city, asked for when missing
    #[arg(short, long)]
    target: Option<Vertex>,
    /// .txt file the result line is written to
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Saves the graph in the .txt incidence list format
    #[arg(long)]
    save_graph: Option<PathBuf>,
    /// Prints the result as JSON instead of a text line
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut session = ConsoleSession::new(stdin.lock(), io::stdout());

    let graph = match &args.graph {
        Some(path) => {
            ensure!(
                has_txt_extension(path),
                "wrong file type, only .txt files are allowed"
            );
            let spinner = get_progressspinner("Reading graph");
            let graph = GraphFactory::from_file(path);
            spinner.finish_and_clear();
            graph.with_context(|| format!("unable to load graph from {}", path.display()))?
        }
        None => {
            println!("Finds the shortest path between two cities from the incidence lists of a road graph.");
            match session.read_medium("Choose the input method:", "Console input", "File input")? {
                Medium::Console => session.read_graph()?,
                Medium::File => session.read_graph_from_file()?,
            }
        }
    };

    println!("Incidence lists:");
    print!("{}", graph.incidence_list());

    let request = match (args.source, args.target) {
        (Some(source), Some(target)) => ShortestPathRequest::new(&graph, source, target)
            .with_context(|| {
                format!(
                    "cities must be between 1 and {}",
                    graph.number_of_vertices()
                )
            })?,
        _ => session.read_request(&graph)?,
    };

    let outcome = BellmanFord::new(&graph).shortest_path_distance(&request);

    if let Some(path) = &args.save_graph {
        fs::write(path, to_file_text(&graph))
            .with_context(|| format!("unable to save graph to {}", path.display()))?;
    }

    match &args.output {
        Some(path) => {
            ensure!(
                has_txt_extension(path),
                "wrong file type, only .txt files are allowed"
            );
            write_outcome_to_file(path, &outcome)?;
        }
        None if args.graph.is_none() => {
            match session.read_medium("Choose the output method:", "Console output", "File output")? {
                Medium::Console => write_outcome(session.output(), &outcome, args.json)?,
                Medium::File => session.write_outcome_to_chosen_file(&outcome)?,
            }
        }
        None => write_outcome(&mut io::stdout(), &outcome, args.json)?,
    }

    Ok(())
}
