use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::KnightsTour;

mod cli;

fn main() {
    env_logger::init();
    KnightsTour::from_args().execute();
}
