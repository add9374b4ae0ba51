use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hullscan::synthetic::{uniform_points, DEFAULT_EXTENT};
use hullscan::{compute_convex_hull, convex_hull, Dim, HullCfg, HullMetrics};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod report;

use report::{reduction_pct, HullReport};

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Convex hulls of point clouds via Graham's scan")]
struct Cmd {
    /// Log at DEBUG level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a CSV/OBJ point file and write it as CSV
    Hull(HullArgs),
    /// Time hull computation on synthetic uniform point clouds
    Bench(BenchArgs),
}

#[derive(Args)]
struct HullArgs {
    /// Input points: CSV (x,y[,z]) or OBJ (v x y z)
    #[arg(long)]
    input: PathBuf,
    /// Output CSV for the hull vertices
    #[arg(long)]
    out: PathBuf,
    /// Force 2D or 3D (default: detect from the file)
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    dim: Option<u8>,
    /// Worker threads for the angular sort
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,
    /// Do not write `<out stem>.report.json`
    #[arg(long)]
    no_report: bool,
}

#[derive(Args)]
struct BenchArgs {
    /// Worker threads for the angular sort
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    threads: u32,
    /// Dimensionality of the generated points
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
    dim: u8,
    /// Comma-separated point counts
    #[arg(long, value_delimiter = ',', default_values_t = [100usize, 1_000, 10_000])]
    sizes: Vec<usize>,
    /// RNG seed (default: from entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull(args) => hull(args),
        Action::Bench(args) => bench(args),
    }
}

fn dim_of(d: u8) -> Dim {
    if d == 3 {
        Dim::Three
    } else {
        Dim::Two
    }
}

fn fmt_metric(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.2}"))
}

fn hull(args: HullArgs) -> Result<()> {
    tracing::info!(
        input = %args.input.display(),
        out = %args.out.display(),
        threads = args.threads,
        "hull"
    );
    let start = Instant::now();

    let mut set = io::load_points(&args.input)?;
    if let Some(d) = args.dim {
        set = set.with_dim(dim_of(d));
    }
    println!(
        "Loaded {} points (3D: {}) from {}",
        set.len(),
        set.is_3d(),
        args.input.display()
    );

    let cfg = HullCfg::default().with_threads(args.threads as usize);
    let result = convex_hull(&set, cfg)
        .with_context(|| format!("computing hull of {}", args.input.display()))?;
    let metrics = HullMetrics::of(&result);

    println!("Mode: hull (Threads: {})", args.threads);
    println!("Simplified from {} to {} points", set.len(), result.len());
    println!("Area: {}", fmt_metric(metrics.area));
    println!("Perimeter: {}", fmt_metric(metrics.perimeter));

    io::save_points(&result, &args.out)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    println!("Computation time: {elapsed_ms:.2} ms");

    if !args.no_report {
        let rep = HullReport {
            code_rev: report::code_rev(),
            input: args.input.display().to_string(),
            output: args.out.display().to_string(),
            dim: result.dim().as_usize(),
            threads: cfg.effective_threads(),
            input_count: set.len(),
            hull_count: result.len(),
            reduction_pct: reduction_pct(set.len(), result.len()),
            area: metrics.area,
            perimeter: metrics.perimeter,
            elapsed_ms,
        };
        let path = report::write_sidecar(&args.out, &rep)?;
        tracing::info!(report = %path.display(), "report written");
    }
    Ok(())
}

/// One `bench` result line; `hull_count` is `None` when the hull failed.
fn bench_line(n: usize, ms: f64, hull_count: Option<usize>) -> String {
    match hull_count {
        Some(h) => format!(
            "Size {n}: Time {ms:.2} ms, Simplified to {h} points (Reduction: {:.1}%)",
            reduction_pct(n, h)
        ),
        None => format!("Size {n}: Time {ms:.2} ms, hull failed (Reduction: n/a)"),
    }
}

fn bench(args: BenchArgs) -> Result<()> {
    let dim = dim_of(args.dim);
    let threads = args.threads as usize;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    println!(
        "Running benchmarks (Threads: {}, Dim: {}D)...",
        threads,
        dim.as_usize()
    );
    for &n in &args.sizes {
        let set = uniform_points(n, dim, DEFAULT_EXTENT, &mut rng);
        let start = Instant::now();
        let result = compute_convex_hull(&set, threads);
        let ms = start.elapsed().as_secs_f64() * 1e3;
        let hull_count = match &result {
            Ok(h) => Some(h.len()),
            Err(e) => {
                tracing::warn!(size = n, error = %e, "hull failed");
                None
            }
        };
        println!("{}", bench_line(n, ms, hull_count));
    }
    Ok(())
}
