//! Moves command - list the moves available in a benchmark position.

use santorini_search::game::complexity_analysis::select_positions;
use santorini_search::move_generator::generate_moves;
use structopt::StructOpt;

use super::{exit_with_error, Command};

#[derive(StructOpt)]
pub struct MovesArgs {
    #[structopt(short, long, default_value = "opening")]
    pub position: String,
}

impl Command for MovesArgs {
    fn execute(self) {
        let positions =
            select_positions(Some(&self.position)).unwrap_or_else(|err| exit_with_error(err));

        for position in positions {
            let state = position.state();
            let moves = generate_moves(&state);
            println!("{}\n{}", position.name, state);
            println!("branching factor: {}", moves.len());
            for action in &moves {
                println!("  {}", action);
            }
            println!();
        }
    }
}
