//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{compare::CompareArgs, moves::MovesArgs, search::SearchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "santorini",
    about = "Compares minimax and alpha-beta search growth on fixed Santorini positions"
)]
pub enum Santorini {
    #[structopt(
        name = "compare",
        about = "Run minimax and alpha-beta on the benchmark positions for every depth from `--min-depth` (default: 1) to `--depth` (default: 4) and report node counts and timings. Restrict to one position with `--position` (an index or a name such as `late`). Use `--format csv` for machine-readable output."
    )]
    Compare(CompareArgs),
    #[structopt(
        name = "search",
        about = "Run a single search on a benchmark position at the given `--depth` (default: 4) with `--algorithm` (minimax or alpha-beta, default: alpha-beta) and print the score and node counts."
    )]
    Search(SearchArgs),
    #[structopt(
        name = "moves",
        about = "List the moves available to the side to move in a benchmark position."
    )]
    Moves(MovesArgs),
}

impl crate::cli::commands::Command for Santorini {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Compare(cmd),
            Search(cmd),
            Moves(cmd),
        }
    }
}
