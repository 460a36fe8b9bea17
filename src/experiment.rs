use std::error::Error;
use std::path::{Path, PathBuf};

use bst_churn::{Churn, ChurnConfig, ChurnError, Mode, Tree, graphviz};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "bst-experiment")]
#[command(about = "Watch a BST's internal path length drift under delete/reinsert churn")]
struct Args {
    /// Number of nodes in the random tree
    #[arg(long, default_value = "64")]
    size: usize,

    /// Number of perturbation cycles
    #[arg(long, default_value = "30")]
    cycles: usize,

    #[arg(long, value_enum, default_value = "symmetric")]
    mode: ModeArg,

    /// Seed for reproducible runs, OS entropy otherwise
    #[arg(long)]
    seed: Option<u64>,

    /// Where the DOT snapshots are written
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Fresh values are drawn below this bound
    #[arg(long, default_value = "32767")]
    value_bound: i32,

    /// Churn events are logged at info level; -v debug, -vv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Asymmetric,
    Symmetric,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Asymmetric => Mode::Asymmetric,
            ModeArg::Symmetric => Mode::Symmetric,
        }
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    example_scenario(&args.out_dir);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let config = ChurnConfig {
        value_bound: args.value_bound,
        ..ChurnConfig::default()
    };
    if let Err(e) = churn_scenario(&args, config, rng) {
        report(&e);
        std::process::exit(1);
    }
}

/// The six-node tree from the textbook IPL example, then a few edits on it.
fn example_scenario(out_dir: &Path) {
    let mut tree: Tree = [10, 5, 15, 2, 7, 20].into_iter().collect();
    println!("{tree}");
    println!("Internal Path Length: {}", tree.internal_path_length());
    snapshot(&tree, &out_dir.join("bst_snapshot.dot"));

    tree.insert(12);
    println!("{tree}");
    for value in [5, 12, 12] {
        if let Err(e) = tree.remove(value) {
            println!("{e}");
        }
        println!("{tree}");
    }
}

fn churn_scenario(args: &Args, config: ChurnConfig, rng: StdRng) -> Result<(), ChurnError> {
    let mut churn = Churn::populate(config, rng, args.size)?;
    println!("Internal Path Length: {}", churn.internal_path_length());
    let before = args.out_dir.join(format!("bst{}_snapshot.dot", args.size));
    snapshot(churn.tree(), &before);

    let result = churn.run(args.mode.into(), args.cycles)?;
    println!(
        "Removed {} values over {} cycles",
        result.removals, result.cycles
    );
    println!("Size of live set: {}", churn.live().len());
    println!(
        "Internal Path Length: {} (was {}), height {}",
        result.ipl_after,
        result.ipl_before,
        churn.tree().height()
    );
    let after = args.out_dir.join(format!("bst{}_D_snapshot.dot", args.size));
    snapshot(churn.tree(), &after);
    Ok(())
}

fn snapshot(tree: &Tree, path: &Path) {
    if let Err(e) = graphviz::write_dot(tree, path) {
        report(&e);
    }
}

fn report(err: &dyn Error) {
    let mut message = format!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    eprintln!("{message}");
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn setup_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(verbosity))
        .with_target(false)
        .init();
}
