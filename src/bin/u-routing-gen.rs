use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use u_routing_gen::format;
use u_routing_gen::generation::{generate_instance, DemandConfig, GraphConfig, InstanceConfig};
use u_routing_gen::models::Instance;

#[derive(Debug, Parser)]
#[command(
    name = "u-routing-gen",
    version,
    about = "Generate random CVRP instances in the plain-text solver format"
)]
struct Args {
    /// Number of customers (the depot is added implicitly)
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Largest edge weight
    #[arg(long)]
    max_weight: Option<u32>,

    /// Probability that two customers are connected
    #[arg(short, long)]
    probability: Option<f64>,

    /// Smallest customer demand
    #[arg(long)]
    min_demand: Option<u32>,

    /// Largest customer demand
    #[arg(long)]
    max_demand: Option<u32>,

    /// Seed for the random source; drawn at random when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load generation parameters from a JSON file (flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the instance to this file instead of stdout
    #[arg(short, long, conflicts_with = "count")]
    output: Option<PathBuf>,

    /// Generate this many instances as grafo_1.txt .. grafo_K.txt
    #[arg(short, long, requires = "out_dir")]
    count: Option<usize>,

    /// Directory for --count output
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Emit JSON instead of the plain-text format
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<InstanceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<InstanceConfig>(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => InstanceConfig::default(),
    };
    if let Some(nodes) = args.nodes {
        config = config.with_num_nodes(nodes);
    }

    let demand = config.demand();
    let min = args.min_demand.unwrap_or(demand.min());
    let max = args.max_demand.unwrap_or(demand.max());
    let Some(demand) = DemandConfig::new(min, max) else {
        bail!("invalid demand range [{min}, {max}]: need 1 <= min <= max");
    };

    let graph = config.graph();
    let max_weight = args.max_weight.unwrap_or(graph.max_weight());
    let probability = args.probability.unwrap_or(graph.probability());
    let Some(graph) = GraphConfig::new(max_weight, probability) else {
        bail!("invalid graph parameters: max weight {max_weight}, probability {probability}");
    };

    Ok(config.with_demand(demand).with_graph(graph))
}

fn render(instance: &Instance, json: bool) -> Result<String> {
    if json {
        let mut text = instance.to_json().context("failed to serialize instance")?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(format::to_string(instance))
    }
}

fn write_file(path: &Path, instance: &Instance, json: bool) -> Result<()> {
    let text = render(instance, json)?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        path = %path.display(),
        nodes = instance.num_nodes(),
        edges = instance.graph().len(),
        density = instance.customer_edge_density(),
        "wrote instance"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "info" })
            }),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let config = build_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        nodes = config.num_nodes(),
        max_weight = config.graph().max_weight(),
        probability = config.graph().probability(),
        "generating"
    );

    if let Some(count) = args.count {
        let Some(out_dir) = &args.out_dir else {
            bail!("--count requires --out-dir");
        };
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        let ext = if args.json { "json" } else { "txt" };
        for k in 1..=count {
            let instance_seed = seed.wrapping_add(k as u64 - 1);
            debug!(k, seed = instance_seed, "generating batch instance");
            let mut rng = StdRng::seed_from_u64(instance_seed);
            let instance = generate_instance(&config, &mut rng);
            write_file(&out_dir.join(format!("grafo_{k}.{ext}")), &instance, args.json)?;
        }
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let instance = generate_instance(&config, &mut rng);
    match &args.output {
        Some(path) => write_file(path, &instance, args.json)?,
        None => {
            let text = render(&instance, args.json)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
