//! Interactive play mode: walk the knight yourself with move suggestions.

use crate::game::display::GameDisplay;
use crate::game::session::Session;
use crate::input_handler::{self, InputError};

pub fn run_play(size: i32) {
    let mut session = Session::new(size);
    let mut display = GameDisplay::new();
    display.render_session(&session);

    loop {
        println!("Choose step format <row>,<col>:");

        let step = match input_handler::parse_step_input() {
            Ok(step) => step,
            Err(InputError::UserExit) => break,
            Err(error) => {
                println!("{}", error);
                continue;
            }
        };

        match session.try_step(step) {
            Ok(step_number) => {
                println!("Your step {}", step_number);
                display.render_session(&session);
            }
            Err(error) => {
                println!("{}", error);
                continue;
            }
        }

        if session.is_complete() {
            println!("Every square visited, well done!");
            break;
        }
    }
}
