//! Solve command - exhaustively enumerate tours on the search board.

use knights_tour::board::SEARCH_BOARD_SIZE;
use knights_tour::game::solve::run_solve;
use knights_tour::searcher::FrontierDiscipline;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct SolveArgs {
    #[structopt(short, long, default_value = "fifo")]
    pub order: FrontierDiscipline,
}

impl Command for SolveArgs {
    fn execute(self) {
        run_solve(SEARCH_BOARD_SIZE, self.order);
    }
}
