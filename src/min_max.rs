use rand::seq::SliceRandom;

use crate::board::{Board, Mark};

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ScoredMove {
    pub score: i32,
    pub position: Option<usize>,
}

impl ScoredMove {
    pub fn new(score: i32, position: Option<usize>) -> ScoredMove {
        ScoredMove { score, position }
    }
}

pub fn best_move(board: &mut Board, mover: Mark, max_mark: Mark) -> ScoredMove {
    assert!(board.winner().is_none(), "search needs a live position");
    assert!(board.has_empty(), "search needs at least one open square");

    // every opening draws under optimal play, so an untouched board gets a random square
    if board.empty_count() == 9 {
        let position = board.available_moves().choose(&mut rand::thread_rng()).copied();
        return ScoredMove::new(0, position);
    }
    minimax(board, mover, max_mark, None)
}

fn minimax(board: &mut Board, mover: Mark, max_mark: Mark, last_move: Option<usize>) -> ScoredMove {
    // the square just filled is the only place a line can have been completed
    if let Some(last) = last_move {
        let previous = !mover;
        if board.check_winner(last, previous) {
            let weight = board.empty_count() as i32 + 1;
            let score = if previous == max_mark { weight } else { -weight };
            return ScoredMove::new(score, None);
        }
    }
    if !board.has_empty() {
        return ScoredMove::new(0, None);
    }

    let mut best = if mover == max_mark {
        ScoredMove::new(-i32::MAX, None)
    } else {
        ScoredMove::new(i32::MAX, None)
    };
    for cell in board.available_moves() {
        board.apply_move(cell, mover);
        let mut scored = minimax(board, !mover, max_mark, Some(cell));
        board.undo_move(cell);
        scored.position = Some(cell);

        if mover == max_mark {
            if scored.score > best.score {
                best = scored;
            }
        } else if scored.score < best.score {
            best = scored;
        }
    }
    best
}
