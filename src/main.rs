mod board;
mod min_max;
mod player;
mod game;
mod console;

extern crate lazy_static;

use crate::board::{Board, Mark};
use crate::console::ConsoleDisplay;
use crate::player::{HumanPlayer, MachinePlayer};

fn main() {
    let name = console::read_name();
    console::greet(&name);

    let mut machine = MachinePlayer::new(Mark::X, "Machine".to_string());
    let prompt_name = name.clone();
    let mut human = HumanPlayer::new(Mark::O, name, move |board: &Board| {
        console::read_move(board, &prompt_name)
    });

    let mut board = Board::empty();
    game::play(&mut board, &mut machine, &mut human, &mut ConsoleDisplay);
}
