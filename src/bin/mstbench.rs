use std::{error::Error, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use mstbench::{gens::*, io::*, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run Prim and Kruskal on every graph of a graph set and write the reports
    Run(RunConfig),
    /// Write a graph set of random connected graphs
    Generate(GenerateConfig),
}

#[derive(Args, Debug)]
struct RunConfig {
    /// Graph set to read
    #[arg(short = 'i', long, env = "MSTBENCH_INPUT", default_value = "data/assign_3_input.json")]
    input: PathBuf,

    /// Json file the results are written to
    #[arg(short = 'o', long, env = "MSTBENCH_OUTPUT", default_value = "data/assign_3_output.json")]
    output: PathBuf,

    /// Csv summary file
    #[arg(short = 'c', long, env = "MSTBENCH_CSV", default_value = "results/summary.csv")]
    csv: PathBuf,

    /// Folder the Dot renderings are written to
    #[arg(short = 'f', long, env = "MSTBENCH_FIGURES", default_value = "figures")]
    figures: PathBuf,

    /// Do not render the graphs
    #[arg(long, env = "MSTBENCH_NO_FIGURES", action = ArgAction::SetTrue)]
    no_figures: bool,

    /// Skip edges leaving the vertex range instead of rejecting the input
    #[arg(long, action = ArgAction::SetTrue)]
    skip_out_of_range: bool,
}

#[derive(Args, Debug)]
struct GenerateConfig {
    /// Number of graphs
    #[arg(short = 'k', long, default_value_t = 10)]
    graphs: u32,

    /// Number of nodes of the smallest graph; graph `i` has `i` times as many
    #[arg(short = 'n', long, default_value_t = 10)]
    nodes: NumNodes,

    /// Number of edges added to each spanning tree, per node
    #[arg(short = 'd', long, default_value_t = 2)]
    extra_edges_per_node: NumEdges,

    /// Largest weight; weights are drawn from `1..=max_weight`
    #[arg(short = 'w', long, default_value_t = 100)]
    max_weight: Weight,

    /// Seed of the random number generator
    #[arg(short = 's', long, env = "MSTBENCH_SEED", default_value_t = 1)]
    seed: u64,

    /// File the graph set is written to
    #[arg(short = 'o', long, default_value = "data/generated_input.json")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Run(config) => run(config),
        Command::Generate(config) => generate(config),
    }
}

fn run(config: RunConfig) -> Result<(), Box<dyn Error>> {
    let graphs = GraphSetReader::new()
        .skip_out_of_range(config.skip_out_of_range)
        .try_read_file(&config.input)?;
    info!(graphs = graphs.len(), input = %config.input.display(), "read graph set");

    let dot_writer = DotWriter::new();
    let mut reports = Vec::with_capacity(graphs.len());

    for labelled in &graphs {
        let report = GraphReport::benchmark(labelled);
        if !report.costs_agree() {
            warn!(
                id = labelled.id,
                prim = report.prim.total_cost(),
                kruskal = report.kruskal.total_cost(),
                "engines disagree on the cost; the graph is probably disconnected"
            );
        }

        if !config.no_figures {
            let path = config.figures.join(format!("graph_{:02}.dot", labelled.id));
            // a failed rendering does not invalidate the results
            if let Err(e) =
                dot_writer.try_write_graph_file(&labelled.graph, Some(&report.kruskal), &path)
            {
                warn!(id = labelled.id, error = %e, "could not draw graph");
            }
        }

        reports.push(report);
    }

    JsonReportWriter::new().try_write_reports_file(&reports, &config.output)?;
    CsvSummaryWriter::new().try_write_reports_file(&reports, &config.csv)?;

    info!(
        json = %config.output.display(),
        csv = %config.csv.display(),
        figures = %config.figures.display(),
        "completed successfully"
    );
    Ok(())
}

fn generate(config: GenerateConfig) -> Result<(), Box<dyn Error>> {
    let rng = &mut Pcg64Mcg::seed_from_u64(config.seed);

    let graphs: Vec<LabelledGraph> = (1..=config.graphs)
        .map(|i| {
            let n = config.nodes.saturating_mul(i);
            let graph = RandomWeightedGraph::new()
                .nodes(n)
                .extra_edges(n.saturating_mul(config.extra_edges_per_node))
                .weights(1..=config.max_weight.max(1))
                .build(rng);

            LabelledGraph {
                id: i as i64,
                graph,
            }
        })
        .collect();

    GraphSetWriter::new().try_write_file(&graphs, &config.output)?;
    info!(
        graphs = graphs.len(),
        output = %config.output.display(),
        seed = config.seed,
        "wrote graph set"
    );
    Ok(())
}
