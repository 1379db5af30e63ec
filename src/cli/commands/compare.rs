//! Compare command - tabulate minimax and alpha-beta search growth.

use santorini_search::fixtures::BENCHMARK_POSITIONS;
use santorini_search::game::complexity_analysis::{run_complexity_analysis, AnalysisConfig};
use santorini_search::game::report::{render, OutputFormat};
use structopt::StructOpt;

use super::{exit_with_error, Command};

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long, default_value = "1")]
    pub min_depth: u8,
    #[structopt(short, long)]
    pub position: Option<String>,
    #[structopt(short, long, default_value = "table")]
    pub format: OutputFormat,
    #[structopt(long, help = "Skip the check that both algorithms agree on every score")]
    pub no_check: bool,
    #[structopt(long)]
    pub list: bool,
}

impl Command for CompareArgs {
    fn execute(self) {
        if self.list {
            println!("Available benchmark positions:");
            for (i, position) in BENCHMARK_POSITIONS.iter().enumerate() {
                println!("  [{}] {}", i, position.name);
            }
            return;
        }

        let config = AnalysisConfig {
            position_filter: self.position,
            check_equivalence: !self.no_check,
            ..AnalysisConfig::with_depth_range(self.min_depth, self.depth)
        };

        match run_complexity_analysis(&config) {
            Ok(rows) => print!("{}", render(&rows, self.format)),
            Err(err) => exit_with_error(err),
        }
    }
}
