//! Exhaustive enumeration of knight tours, reporting the longest one found.

use crate::board::Tour;
use crate::game::display::tour_grid;
use crate::searcher::{FrontierDiscipline, SearchReport, SearchStrategy, Searcher, SilentRenderer};

pub fn run_solve(size: i32, order: FrontierDiscipline) {
    println!("Start calculating");
    let mut searcher = Searcher::new(size, SearchStrategy::exhaustive(order));
    let report = searcher.run(&mut SilentRenderer);
    println!("Finished calculating");
    print_report(&report);
}

fn print_report(report: &SearchReport) {
    println!("Finished boards: {}", report.terminal_count);
    let best = match &report.best {
        Some(best) => best,
        None => return,
    };
    println!("MAX len steps: {}", best.len());
    println!("Steps: {}", format_steps(best));
    println!("{}", tour_grid(best));
}

fn format_steps(tour: &Tour) -> String {
    tour.steps()
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_format_steps() {
        let tour = Tour::new(5)
            .extended(Square::new(0, 0))
            .extended(Square::new(2, 1));
        assert_eq!(format_steps(&tour), "(row 0, col 0), (row 2, col 1)");
    }
}
