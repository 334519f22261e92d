//! # Introduction
//!
//! Classic in-memory sorting algorithms where every swap and merge can be
//! watched as it happens. The [`engine`] module is the algorithmic core; the
//! [`render`] module draws each reported step as a terminal bar chart.
//!
//! # Example
//!
//! ```
//! use sortviz_engine::engine::{QuickSorter, Sorter};
//!
//! let mut slice = vec![5, 3, 8, 1, 9, 2];
//! QuickSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 5, 8, 9], slice);
//! ```

pub mod engine;
pub mod render;

use std::time::Duration;

use clap::{Args, Subcommand, ValueEnum};

/// An example Clap Argument builder. Install the
/// [`sortviz`](https://crates.io/crates/sortviz) crate and run
/// `sortviz engine` to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct EngineArgs {
    #[command(subcommand)]
    command: EngineCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum EngineCommands {
    /// Watch an algorithm rearrange a random sequence of bars.
    Watch {
        /// Which sorting algorithm to run.
        #[arg(value_enum)]
        algorithm: Algorithm,

        /// How many bars to sort.
        #[arg(short, long, default_value_t = 60)]
        count: usize,

        /// Tallest possible bar.
        #[arg(short, long, default_value_t = 40)]
        max_value: u32,

        /// Frame delay in milliseconds.
        #[arg(short, long, default_value_t = 25)]
        delay: u64,
    },

    /// Time every algorithm against random sequences of increasing length.
    Bench,
}

/// The sorting strategies the engine knows about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Shell,
    Merge,
    Quick,
    Tim,
    Tree,
}

impl Algorithm {
    /// Human readable name, used in frame summaries and bench tables.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Tim => "Tim Sort",
            Algorithm::Tree => "Tree Sort",
        }
    }
}

impl EngineArgs {
    pub fn run(self) {
        match self.command {
            EngineCommands::Watch {
                algorithm,
                count,
                max_value,
                delay,
            } => {
                render::watch(algorithm, count, max_value, Duration::from_millis(delay));
            }
            EngineCommands::Bench => engine::benchmark::run_all(),
        }
    }
}
