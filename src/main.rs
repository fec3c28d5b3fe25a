use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use interval_sum_tree::{run_script, IntervalSumTree, Outcome, Sizing, TreeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "interval-sum-tree", about = "Point updates and range sums in O(log n)")]
struct Cli {
    /// Tree-array sizing strategy.
    #[arg(long, value_enum, default_value_t = SizingArg::Conservative, global = true)]
    sizing: SizingArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a command script (`values`, `sum`, `update`, `get`, `total`).
    Run {
        /// Script file; reads stdin when omitted.
        script: Option<PathBuf>,
    },
    /// Build [1, 3, 5, 7, 9, 11] and walk through a few queries and an update.
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SizingArg {
    /// 4N slots.
    Conservative,
    /// 2 · next_power_of_two(N) slots.
    Tight,
}

impl From<SizingArg> for TreeConfig {
    fn from(arg: SizingArg) -> Self {
        let sizing = match arg {
            SizingArg::Conservative => Sizing::Conservative,
            SizingArg::Tight => Sizing::Tight,
        };
        TreeConfig { sizing }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = TreeConfig::from(cli.sizing);

    match cli.command {
        Commands::Run { script } => run(script, config)?,
        Commands::Demo => demo(config)?,
    }

    Ok(())
}

fn run(script: Option<PathBuf>, config: TreeConfig) -> Result<()> {
    let outcomes = match script {
        Some(path) => {
            let reader = BufReader::new(File::open(&path).with_context(|| {
                format!("failed to open script {}", path.display())
            })?);
            run_script(reader, config)
                .with_context(|| format!("script {} failed", path.display()))?
        }
        None => run_script(io::stdin().lock(), config).context("script on stdin failed")?,
    };

    for outcome in outcomes {
        println!("{}", outcome);
    }

    Ok(())
}

fn demo(config: TreeConfig) -> Result<()> {
    let values = vec![1, 3, 5, 7, 9, 11];
    println!("values = {:?}", values);

    let mut tree =
        IntervalSumTree::with_config(values, config).context("failed to build demo tree")?;
    println!("capacity = {} ({:?})", tree.capacity(), config.sizing);

    for (left, right) in [(0, 6), (1, 3), (0, 1)] {
        print_sum(&tree, left, right);
    }

    tree.update(2, 100).context("demo update failed")?;
    println!("update 2 -> 100");

    for (left, right) in [(1, 3), (0, 6)] {
        print_sum(&tree, left, right);
    }

    Ok(())
}

fn print_sum(tree: &IntervalSumTree, left: usize, right: usize) {
    let outcome = Outcome::Sum {
        left,
        right,
        value: tree.sum(left, right),
    };
    println!("{}", outcome);
}
