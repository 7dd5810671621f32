//! Watch command - live view of the first-full-tour search.

use knights_tour::board::SEARCH_BOARD_SIZE;
use knights_tour::game::watch::run_watch;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {}

impl Command for WatchArgs {
    fn execute(self) {
        run_watch(SEARCH_BOARD_SIZE);
    }
}
