use std::fmt::Write;
use std::io;

use termion::screen::AlternateScreen;
use termion::{clear, cursor};

use crate::board::{Square, Tour};
use crate::game::session::Session;
use crate::searcher::SearchRenderer;

/// Marker shown on squares the next step may legally land on.
pub const AUTOSUGGEST_MARK: &str = "x";

/// A bordered text grid with an index header, one row label per rank, and
/// a `cell` callback deciding what each square shows (at most 2 chars).
fn grid_lines<F>(size: i32, cell: F) -> String
where
    F: Fn(Square) -> String,
{
    let mut out = String::new();

    let mut header = String::new();
    for col in 0..size {
        write!(header, "{:>3} ", col).unwrap();
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let mut rule = String::new();
    for _ in 0..size {
        rule.push_str("+---");
    }
    rule.push_str("+\n");

    out.push_str(&rule);
    for row in 0..size {
        for col in 0..size {
            write!(out, "|{:>2} ", cell(Square::new(row, col))).unwrap();
        }
        writeln!(out, "| {}", row).unwrap();
        out.push_str(&rule);
    }

    out
}

/// The grid of a tour: each visited square shows its 0-based visit index,
/// unvisited squares are blank.
pub fn tour_grid(tour: &Tour) -> String {
    grid_lines(tour.size(), |square| {
        tour.steps()
            .iter()
            .position(|&s| s == square)
            .map(|i| i.to_string())
            .unwrap_or_default()
    })
}

/// The grid of an interactive session: placed steps show their 1-based
/// step number, currently legal continuations show the suggestion marker.
pub fn session_grid(session: &Session) -> String {
    let suggestions = session.suggestions();
    grid_lines(session.size(), |square| {
        if let Some(number) = session.step_number(square) {
            number.to_string()
        } else if suggestions.contains(&square) {
            AUTOSUGGEST_MARK.to_string()
        } else {
            String::new()
        }
    })
}

/// Reusable frame buffer that repaints the whole screen on each render
/// rather than appending to the scrollback.
pub struct GameDisplay {
    buffer: String,
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_session(&mut self, session: &Session) {
        self.clear();
        self.buffer.push_str(&session_grid(session));
        match session.last_step() {
            Some(step) => {
                writeln!(self.buffer, "Your step {}: {}", session.step_count(), step).unwrap()
            }
            None => self.buffer.push_str("Choose a starting square.\n"),
        }
        print!("{}", self.buffer);
    }

    pub fn render_search_state(&mut self, tour: &Tour, frontier_len: usize) {
        self.clear();
        self.buffer.push_str(&tour_grid(tour));
        writeln!(self.buffer, "Steps made: {}", tour.len()).unwrap();
        writeln!(self.buffer, "Boards in progress: {}", frontier_len).unwrap();
        print!("{}", self.buffer);
    }

    pub fn render_best_tour(&mut self, tour: &Tour) {
        self.clear();
        self.buffer.push_str(&tour_grid(tour));
        writeln!(self.buffer, "Longest tour so far: {} steps", tour.len()).unwrap();
        print!("{}", self.buffer);
    }
}

/// Full-screen live view of a running search.
///
/// Holds the alternate screen for the lifetime of the search; dropping it
/// restores the primary screen on every exit path, including the early
/// exit after the first full tour.
pub struct LiveSearchDisplay {
    _screen: AlternateScreen<io::Stdout>,
    display: GameDisplay,
}

impl LiveSearchDisplay {
    pub fn new() -> Self {
        Self {
            _screen: AlternateScreen::from(io::stdout()),
            display: GameDisplay::new(),
        }
    }
}

impl SearchRenderer for LiveSearchDisplay {
    fn render_progress(&mut self, tour: &Tour, frontier_len: usize) {
        self.display.render_search_state(tour, frontier_len);
    }

    fn render_best(&mut self, tour: &Tour) {
        self.display.render_best_tour(tour);
    }
}
