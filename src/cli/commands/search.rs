//! Search command - run one search on a benchmark position.

use std::time::Instant;

use santorini_search::game::complexity_analysis::select_positions;
use santorini_search::santorini_search::search_root;
use santorini_search::searcher::Algorithm;
use structopt::StructOpt;

use super::{exit_with_error, Command};

#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub algorithm: Algorithm,
    #[structopt(short, long, default_value = "opening")]
    pub position: String,
}

impl Command for SearchArgs {
    fn execute(self) {
        let positions =
            select_positions(Some(&self.position)).unwrap_or_else(|err| exit_with_error(err));

        for position in positions {
            let state = position.state();
            println!("{}\n{}", position.name, state);

            let start = Instant::now();
            let outcome = search_root(self.algorithm, &state, self.depth)
                .unwrap_or_else(|err| exit_with_error(err));
            let elapsed = start.elapsed();

            println!(
                "{} depth {}: score {} ({}) in {:.3} ms\n",
                self.algorithm,
                self.depth,
                outcome.score,
                outcome.metrics,
                elapsed.as_secs_f64() * 1000.0
            );
        }
    }
}
