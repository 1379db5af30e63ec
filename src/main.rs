mod cli;

use cli::commands::Command;
use cli::Santorini;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    let args = Santorini::from_args();
    args.execute();
}
