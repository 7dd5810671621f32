//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, solve::SolveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "knights-tour",
    about = "Knight's tour search and practice board ♞"
)]
pub enum KnightsTour {
    #[structopt(
        name = "solve",
        about = "Exhaustively enumerate knight tours on the 5x5 board and report the longest one found. The frontier is expanded breadth-first by default; select depth-first expansion with `--order lifo`."
    )]
    Solve(SolveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the search dive depth-first for the first complete 5x5 tour, with a live full-screen view of each expanded board and the number of boards still in progress."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "play",
        about = "Play the knight's tour yourself on the 8x8 board. Enter steps as `<row>,<col>`; legal continuations are marked with `x`, and `quit` ends the session."
    )]
    Play(PlayArgs),
}

impl crate::cli::commands::Command for KnightsTour {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Solve(cmd),
            Watch(cmd),
            Play(cmd),
        }
    }
}
