mod report;

use anyhow::Context;
use clap::Parser;
use grid::{GridBounds, Lattice};
use sdf::Registry;

/// Evaluate a named signed distance field over a sample lattice.
#[derive(Parser, Debug)]
#[command(name = "sdf-viewer", version, about)]
struct Args {
	/// Name of the sdf to evaluate (see --list)
	name: Option<String>,

	/// Grid resolution per axis
	#[arg(short, long, default_value_t = 32)]
	resolution: u32,

	/// Time parameter for animated sdfs
	#[arg(short, long, default_value_t = 0.0)]
	time: f32,

	/// Random seed for procedural sdfs
	#[arg(short, long, default_value_t = sdf::DEFAULT_SEED)]
	seed: u32,

	/// List all available sdfs
	#[arg(short, long)]
	list: bool,

	/// Emit the raw values as json instead of the text report
	#[arg(long)]
	json: bool,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let args = Args::parse();
	let registry = Registry::standard();

	if args.list {
		println!("Available sdfs:");
		for name in registry.names() {
			println!("  {}", name);
		}
		return Ok(());
	}

	let Some(name) = args.name else {
		anyhow::bail!("no sdf name given; use --list to see available sdfs");
	};

	// The lattice spans [-1, 1]^3 to match typical sdf bounds
	let lattice = Lattice::new(GridBounds::symmetric(1.0), args.resolution)
		.context("building the sample lattice")?;
	let points = lattice.points();

	let values = registry
		.evaluate(&name, &points, args.time, args.seed)
		.context("use --list to see available sdfs")?;

	if args.json {
		let out = serde_json::json!({
			"name": name,
			"resolution": args.resolution,
			"time": args.time,
			"seed": args.seed,
			"values": values,
		});
		println!("{}", out);
	} else {
		print!("{}", report::summary(&name, &lattice, &values));
		print!("{}", report::mid_slice(&lattice, &values));
	}

	Ok(())
}
