use std::io;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use itertools::Itertools;

use crate::board::{Board, Mark, Outcome};
use crate::game::DisplaySink;

const MOVE_PACE: Duration = Duration::from_secs(1);

pub fn greet(name: &str) {
    println!("Welcome {}, this is the Tic Tac Toe game.", name);
    println!("To play, just select the number of the square that you want, following the schematic below.");
    print_numbered_board();
}

pub fn print_numbered_board() {
    for row in 0..3 {
        println!("{}", (row * 3 + 1..=row * 3 + 3).join(" | "));
    }
}

pub fn print_board(board: &Board) {
    for row in 0..3 {
        println!("{}", board.cells()[row * 3..row * 3 + 3].iter().join(" | "));
    }
}

pub fn read_name() -> String {
    print!("What's your name? ");
    io::stdout().flush().expect("failed to flush stdout");
    capitalize(&read_trimmed_line(&mut io::stdin().lock()))
}

// the prompt counts 1-9 like the schematic, the board counts 0-8
pub fn read_move(board: &Board, name: &str) -> usize {
    read_move_from(&mut io::stdin().lock(), board, name)
}

fn read_move_from<R: BufRead>(input: &mut R, board: &Board, name: &str) -> usize {
    loop {
        print!("{}'s turn. Input move (1-9): ", name);
        io::stdout().flush().expect("failed to flush stdout");

        match read_trimmed_line(input).parse::<usize>() {
            Ok(number) if number >= 1 && board.available_moves().contains(&(number - 1)) => {
                return number - 1;
            }
            _ => println!("Invalid square. Try again."),
        }
    }
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> String {
    let mut buffer = String::new();
    // read_line reports end of input as Ok(0), not as an error
    let bytes = input.read_line(&mut buffer).expect("failed stdin read");
    if bytes == 0 {
        panic!("stdin closed");
    }
    buffer.trim().to_string()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn move_played(&mut self, mark: Mark, cell: usize, board: &Board) {
        println!("{} makes a move to square {}", mark, cell + 1);
        print_board(board);
        thread::sleep(MOVE_PACE);
    }

    fn match_over(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) => println!("{} wins!", mark),
            Outcome::Draw => println!("It's a tie!"),
            Outcome::InProgress => {}
        }
    }
}
