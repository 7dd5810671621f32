//! Live search view: depth-first dive that stops at the first full tour.

use crate::game::display::{tour_grid, LiveSearchDisplay};
use crate::searcher::{SearchStrategy, Searcher};

pub fn run_watch(size: i32) {
    println!("Start calculating");

    let report = {
        let mut display = LiveSearchDisplay::new();
        let mut searcher = Searcher::new(size, SearchStrategy::first_tour());
        searcher.run(&mut display)
        // dropping the display restores the primary screen before the
        // summary prints
    };

    println!("Finished calculating");
    if report.solved {
        println!("SOLVED!");
    }
    if let Some(best) = &report.best {
        println!("{}", tour_grid(best));
    }
}
