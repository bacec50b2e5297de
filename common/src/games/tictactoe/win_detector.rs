use super::board::Board;
use super::types::{Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.cell(a).mark()?;
        if board.cell(b).mark() == Some(mark) && board.cell(c).mark() == Some(mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}
