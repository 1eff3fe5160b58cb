//! Human-readable board rendering.
//!
//! Presentation only: rows of fixed-width tokens, underscores for empty
//! squares, framed by `#` rules. The search core never depends on this.

use crate::core::Board;

/// Render a board as fixed-width rows.
///
/// Each token is padded to the width of the longest identity on the board;
/// empty squares render as a same-width run of underscores.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let width = board
        .positions()
        .filter_map(|p| board.cell(p).identity.as_ref().map(|t| t.as_str().len()))
        .max()
        .unwrap_or(1);

    let frame = "#".repeat((width + 1) * board.size() + 1);
    let mut out = String::new();
    out.push_str(&frame);
    out.push('\n');

    for row in 0..board.size() {
        for col in 0..board.size() {
            let pos = crate::core::Pos::new(row, col);
            match &board.cell(pos).identity {
                Some(token) => out.push_str(&format!("{:<width$} ", token.as_str())),
                None => out.push_str(&format!("{} ", "_".repeat(width))),
            }
        }
        // Drop the trailing space on each row.
        out.pop();
        out.push('\n');
    }

    out.push_str(&frame);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::npuzzle::solved_board;
    use crate::games::nqueens::board_with_queens;
    use crate::core::Pos;

    #[test]
    fn test_render_solved_puzzle() {
        let rendered = render_board(&solved_board(3).unwrap());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "1 2 3");
        assert_eq!(lines[2], "4 5 6");
        assert_eq!(lines[3], "7 8 _");
        assert!(lines[0].chars().all(|c| c == '#'));
    }

    #[test]
    fn test_render_pads_to_widest_token() {
        let board = solved_board(4).unwrap();
        let rendered = render_board(&board);

        // 15-puzzle tokens reach width 2: "1" pads, "_" doubles.
        assert!(rendered.contains("1  2  3  4"));
        assert!(rendered.contains("13 14 15 __"));
    }

    #[test]
    fn test_render_queens() {
        let board = board_with_queens(2, &[Pos::new(1, 0)]).unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "_ _");
        assert_eq!(lines[2], "Q _");
    }

    #[test]
    fn test_display_delegates_to_render() {
        let board = solved_board(3).unwrap();
        assert_eq!(board.to_string(), render_board(&board));
    }
}
