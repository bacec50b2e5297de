use common::games::tictactoe::{Board, Mark, SIDE, WinningLine};
use crossterm::style::Stylize;

fn mark_symbol(mark: Mark, highlight: bool, color: bool) -> String {
    if !color {
        return mark.to_string();
    }
    let styled = match mark {
        Mark::X => mark.to_string().red(),
        Mark::O => mark.to_string().blue(),
    };
    if highlight {
        styled.bold().underlined().to_string()
    } else {
        styled.to_string()
    }
}

/// Draws the grid with X in red and O in blue. Empty cells show their
/// index, which is what the player types to claim them.
pub fn render_board(board: &Board, winning_line: Option<&WinningLine>, color: bool) -> String {
    let mut out = String::new();
    for row in 0..SIDE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let idx = row * SIDE + col;
                match board.cell(idx).mark() {
                    Some(mark) => {
                        let highlight = winning_line.is_some_and(|line| line.contains(idx));
                        mark_symbol(mark, highlight, color)
                    }
                    None => idx.to_string(),
                }
            })
            .collect();
        out.push_str(&format!(" {} | {} | {} \n", cells[0], cells[1], cells[2]));
    }
    out
}
