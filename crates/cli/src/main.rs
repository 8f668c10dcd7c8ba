use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linsep::api::{draw_point_sets, Layout, Point2, PointSets, SampleCfg, SampleReplay, Strategy};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod dataset;
mod report;

use dataset::Dataset;
use report::{format_points, format_timed, run_timed, speedup, verdict_label};

#[derive(Parser)]
#[command(name = "linsep")]
#[command(about = "Decide whether two planar point sets are linearly separable")]
#[command(version = linsep::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the two hand-checked control examples
    Demo,
    /// Draw a synthetic dataset and save it as JSON
    Generate {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Load a JSON dataset and check it
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
        strategy: StrategyArg,
        /// Points to print per set before checking
        #[arg(long, default_value_t = 0)]
        show: usize,
    },
    /// Draw a synthetic dataset, optionally save it, and check it with both strategies
    Run {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Time both strategies on a large random dataset
    Bench {
        #[arg(long, default_value_t = 1_000_000)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(clap::Args)]
struct SampleArgs {
    #[arg(long, value_enum)]
    layout: LayoutArg,
    /// Points per set
    #[arg(long)]
    count: usize,
    /// Defaults to the current UNIX time
    #[arg(long)]
    seed: Option<u64>,
    /// Half-width of the sampling square (layout default if omitted)
    #[arg(long)]
    range: Option<f64>,
    /// Half-width of the gap for the separable layout
    #[arg(long)]
    margin: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Separable,
    Mixed,
    Random,
}

impl From<LayoutArg> for Layout {
    fn from(l: LayoutArg) -> Self {
        match l {
            LayoutArg::Separable => Layout::Separable,
            LayoutArg::Mixed => Layout::Mixed,
            LayoutArg::Random => Layout::Random,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Sequential,
    Parallel,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::Sequential => &[Strategy::Sequential],
            StrategyArg::Parallel => &[Strategy::Parallel],
            StrategyArg::Both => &Strategy::ALL,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Generate { sample, out } => generate(sample, out),
        Action::Check {
            input,
            strategy,
            show,
        } => check(input, strategy, show),
        Action::Run { sample, save } => run(sample, save),
        Action::Bench { count, seed } => bench(count, seed),
    }
}

fn demo() -> Result<()> {
    let cases: [(&str, &[(f64, f64)], &[(f64, f64)], bool); 2] = [
        (
            "A left of x=-2, B right of x=2",
            &[(-5.0, 0.0), (-3.0, 2.0), (-4.0, -1.0), (-6.0, 3.0)],
            &[(3.0, 0.0), (5.0, 1.0), (4.0, -2.0), (6.0, 2.0)],
            true,
        ),
        (
            "interleaved triangles",
            &[(-1.0, 0.0), (1.0, 1.0), (0.0, -1.0)],
            &[(0.0, 0.0), (-1.0, 1.0), (1.0, -1.0)],
            false,
        ),
    ];
    for (title, a, b, expected) in cases {
        let a: Vec<Point2> = a.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        let b: Vec<Point2> = b.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        println!("{title}");
        print_sets(&a, &b, usize::MAX);
        let got = Strategy::Sequential.run(&a, &b);
        tracing::info!(title, expected, got, "demo");
        println!(
            "  expected: {}  ->  result: {}\n",
            verdict_label(expected),
            verdict_label(got)
        );
        if got != expected {
            bail!("control example `{title}` gave the wrong verdict");
        }
    }
    Ok(())
}

fn generate(args: SampleArgs, out: PathBuf) -> Result<()> {
    let sets = draw(&args)?;
    Dataset::from(&sets).save(&out)?;
    tracing::info!(out = %out.display(), a = sets.a.len(), b = sets.b.len(), "saved");
    Ok(())
}

fn check(input: PathBuf, strategy: StrategyArg, show: usize) -> Result<()> {
    let sets = Dataset::load(&input)?.to_points();
    tracing::info!(input = %input.display(), a = sets.a.len(), b = sets.b.len(), "loaded");
    if show > 0 {
        print_sets(&sets.a, &sets.b, show);
    }
    check_sets(&sets, strategy.strategies());
    Ok(())
}

fn run(args: SampleArgs, save: Option<PathBuf>) -> Result<()> {
    let sets = draw(&args)?;
    if let Some(path) = save {
        Dataset::from(&sets).save(&path)?;
        tracing::info!(out = %path.display(), "saved");
    }
    check_sets(&sets, &Strategy::ALL);
    Ok(())
}

fn bench(count: usize, seed: u64) -> Result<()> {
    tracing::info!(count, seed, "bench");
    let cfg = SampleCfg::new(Layout::Random, count);
    let sets = draw_point_sets(&cfg, SampleReplay::from_seed(seed))?;
    let seq = run_timed(Strategy::Sequential, &sets.a, &sets.b);
    println!("{}", format_timed(&seq));
    let par = run_timed(Strategy::Parallel, &sets.a, &sets.b);
    println!("{}", format_timed(&par));
    if seq.separable != par.separable {
        tracing::warn!("sequential and parallel verdicts differ");
    }
    if let Some(s) = speedup(&seq, &par) {
        println!("  speedup: {s:.2}x");
    }
    Ok(())
}

fn draw(args: &SampleArgs) -> Result<PointSets> {
    let mut cfg = SampleCfg::new(args.layout.into(), args.count);
    if let Some(r) = args.range {
        cfg.coord_range = r;
    }
    if let Some(m) = args.margin {
        cfg.margin = m;
    }
    let seed = match args.seed {
        Some(s) => s,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs(),
    };
    tracing::info!(layout = %cfg.layout, count = cfg.count, seed, "draw");
    Ok(draw_point_sets(&cfg, SampleReplay::from_seed(seed))?)
}

fn check_sets(sets: &PointSets, strategies: &[Strategy]) {
    for &s in strategies {
        println!("{}", format_timed(&run_timed(s, &sets.a, &sets.b)));
    }
}

fn print_sets(a: &[Point2], b: &[Point2], max_show: usize) {
    for line in format_points("A", a, max_show)
        .into_iter()
        .chain(format_points("B", b, max_show))
    {
        println!("{line}");
    }
}
