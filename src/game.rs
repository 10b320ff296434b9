use crate::board::{Board, Mark, Outcome};
use crate::player::MoveSource;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum MatchState {
    AwaitingMove(Mark),
    Terminal(Outcome),
}

pub trait DisplaySink {
    fn move_played(&mut self, mark: Mark, cell: usize, board: &Board);
    fn match_over(&mut self, outcome: Outcome);
}

#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn move_played(&mut self, _mark: Mark, _cell: usize, _board: &Board) {}
    fn match_over(&mut self, _outcome: Outcome) {}
}

pub fn play<'a>(
    board: &mut Board,
    x_source: &'a mut dyn MoveSource,
    o_source: &'a mut dyn MoveSource,
    display: &mut dyn DisplaySink,
) -> Outcome {
    assert_eq!(x_source.mark(), Mark::X, "the first source must play X");
    assert_eq!(o_source.mark(), Mark::O, "the second source must play O");

    let mut state = MatchState::AwaitingMove(Mark::X);
    loop {
        let mark = match state {
            MatchState::AwaitingMove(mark) => mark,
            MatchState::Terminal(outcome) => {
                display.match_over(outcome);
                return outcome;
            }
        };
        let source = match mark {
            Mark::X => &mut *x_source,
            Mark::O => &mut *o_source,
        };
        let cell = source.pick_move(board);
        if !board.apply_move(cell, mark) {
            // a rejected square costs no turn, the same mover is asked again
            continue;
        }
        display.move_played(mark, cell, board);
        state = match board.outcome_after(cell, mark) {
            Outcome::InProgress => MatchState::AwaitingMove(!mark),
            outcome => MatchState::Terminal(outcome),
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::board::CellState::{Empty as E, O, X};
    use crate::board::{Board, Mark, Outcome};
    use crate::player::{HumanPlayer, MachinePlayer};
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingDisplay {
        moves: Vec<(Mark, usize)>,
        outcome: Option<Outcome>,
    }

    impl DisplaySink for RecordingDisplay {
        fn move_played(&mut self, mark: Mark, cell: usize, _board: &Board) {
            self.moves.push((mark, cell));
        }

        fn match_over(&mut self, outcome: Outcome) {
            self.outcome = Some(outcome);
        }
    }

    fn scripted(mark: Mark, moves: Vec<usize>) -> HumanPlayer<impl FnMut(&Board) -> usize> {
        let mut queue = moves.into_iter();
        HumanPlayer::new(mark, format!("{} script", mark), move |_board: &Board| {
            queue.next().expect("script ran out of moves")
        })
    }

    #[test]
    fn x_wins_on_the_main_diagonal() {
        let mut board = Board::empty();
        let mut x = scripted(Mark::X, vec![0, 4, 8]);
        let mut o = scripted(Mark::O, vec![3, 5]);
        let mut display = RecordingDisplay::default();

        let outcome = play(&mut board, &mut x, &mut o, &mut display);

        assert_eq!(outcome, Outcome::Win(Mark::X));
        assert_eq!(display.outcome, Some(Outcome::Win(Mark::X)));
        assert_eq!(display.moves, vec![
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 4),
            (Mark::O, 5),
            (Mark::X, 8),
        ]);
        assert_eq!(board.cells(), &[
            X, E, E,
            O, X, O,
            E, E, X,
        ]);
    }

    #[test]
    fn a_full_board_without_a_line_is_a_tie() {
        let mut board = Board::empty();
        let mut x = scripted(Mark::X, vec![0, 2, 3, 7, 8]);
        let mut o = scripted(Mark::O, vec![1, 4, 5, 6]);
        let mut display = RecordingDisplay::default();

        let outcome = play(&mut board, &mut x, &mut o, &mut display);

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(display.outcome, Some(Outcome::Draw));
        assert_eq!(display.moves.len(), 9);
        assert_eq!(board.cells(), &[
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
    }

    #[test]
    fn a_rejected_square_costs_no_turn() {
        let mut board = Board::empty();
        let mut x = scripted(Mark::X, vec![0, 4, 8]);
        // the first answer targets a taken square and is asked again
        let mut o = scripted(Mark::O, vec![0, 3, 5]);
        let mut display = RecordingDisplay::default();

        let outcome = play(&mut board, &mut x, &mut o, &mut display);

        assert_eq!(outcome, Outcome::Win(Mark::X));
        assert_eq!(display.moves, vec![
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 4),
            (Mark::O, 5),
            (Mark::X, 8),
        ]);
    }

    #[test]
    fn machine_against_machine_always_ties() {
        for _ in 0..10 {
            let mut board = Board::empty();
            let mut x = MachinePlayer::new(Mark::X, "X machine".to_string());
            let mut o = MachinePlayer::new(Mark::O, "O machine".to_string());
            let outcome = play(&mut board, &mut x, &mut o, &mut NullDisplay);
            assert_eq!(outcome, Outcome::Draw);
        }
    }

    #[test]
    fn the_machine_never_loses_to_a_naive_opponent() {
        for _ in 0..5 {
            let mut board = Board::empty();
            let mut machine = MachinePlayer::new(Mark::X, "Machine".to_string());
            let mut naive = HumanPlayer::new(Mark::O, "naive".to_string(), |board: &Board| {
                board.available_moves()[0]
            });
            let outcome = play(&mut board, &mut machine, &mut naive, &mut NullDisplay);
            // whatever the random opening, the searching side never drops a game
            assert!(matches!(outcome, Outcome::Win(Mark::X) | Outcome::Draw));
        }
    }
}
