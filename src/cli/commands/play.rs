//! Play command - interactive knight placement with suggestions.

use knights_tour::board::PLAY_BOARD_SIZE;
use knights_tour::game::play::run_play;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {}

impl Command for PlayArgs {
    fn execute(self) {
        run_play(PLAY_BOARD_SIZE);
    }
}
