use crate::board::{Board, Mark};
use crate::min_max::best_move;

pub trait MoveSource {
    fn mark(&self) -> Mark;
    fn name(&self) -> &str;
    fn pick_move(&mut self, board: &Board) -> usize;
}

#[derive(Debug, Clone)]
pub struct MachinePlayer {
    mark: Mark,
    name: String,
}

impl MachinePlayer {
    pub fn new(mark: Mark, name: String) -> Self {
        Self { mark, name }
    }
}

impl MoveSource for MachinePlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, board: &Board) -> usize {
        let mut scratch = board.clone();
        let scored = best_move(&mut scratch, self.mark, self.mark);
        scored.position.expect("a live position always yields a move")
    }
}

pub struct HumanPlayer<F: FnMut(&Board) -> usize> {
    mark: Mark,
    name: String,
    fetch: F,
}

impl<F: FnMut(&Board) -> usize> HumanPlayer<F> {
    pub fn new(mark: Mark, name: String, fetch: F) -> Self {
        Self { mark, name, fetch }
    }
}

impl<F: FnMut(&Board) -> usize> MoveSource for HumanPlayer<F> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn pick_move(&mut self, board: &Board) -> usize {
        (self.fetch)(board)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::CellState::{Empty as E, O, X};
    use crate::board::{Board, Mark};
    use super::*;

    #[test]
    fn the_machine_plays_the_winning_square_off_a_snapshot() {
        let board = Board::new([
            X, X, E,
            O, O, E,
            E, E, E,
        ]);
        let before = board.clone();
        let mut machine = MachinePlayer::new(Mark::X, "Machine".to_string());
        assert_eq!(machine.pick_move(&board), 2);
        assert_eq!(board, before);
        assert_eq!(machine.mark(), Mark::X);
        assert_eq!(machine.name(), "Machine");
    }

    #[test]
    fn human_answers_come_from_the_injected_input() {
        let mut human = HumanPlayer::new(Mark::O, "Ana".to_string(), |_board: &Board| 7);
        assert_eq!(human.pick_move(&Board::empty()), 7);
        assert_eq!(human.mark(), Mark::O);
        assert_eq!(human.name(), "Ana");
    }
}
