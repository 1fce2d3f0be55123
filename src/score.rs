// gradbingo/src/score.rs
// Win detection for a bingo card.

use crate::defs::CARDCONFIG;
use crate::marks::MarkState;

/// Returns true when at least one full row, column or diagonal is marked.
/// The whole grid is rescanned on every call.
pub fn check_bingo(marks: &MarkState) -> bool {
    let size = CARDCONFIG.rows; // the card is square

    // Rows and columns
    for i in 0..size {
        if (0..size).all(|j| marks.is_marked(i, j)) || (0..size).all(|j| marks.is_marked(j, i)) {
            return true;
        }
    }

    // Diagonals
    (0..size).all(|i| marks.is_marked(i, i))
        || (0..size).all(|i| marks.is_marked(i, size - 1 - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_at(cells: &[(usize, usize)]) -> MarkState {
        let mut marks = MarkState::new();
        for &(row, col) in cells {
            marks.toggle(row, col).unwrap();
        }
        marks
    }

    #[test]
    fn test_empty_grid_is_not_bingo() {
        assert!(!check_bingo(&MarkState::new()));
    }

    #[test]
    fn test_full_row_is_bingo() {
        let marks = marked_at(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert!(check_bingo(&marks));
    }

    #[test]
    fn test_full_column_is_bingo() {
        let marks = marked_at(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);
        assert!(check_bingo(&marks));
    }

    #[test]
    fn test_main_diagonal_is_bingo() {
        let marks = marked_at(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(check_bingo(&marks));
    }

    #[test]
    fn test_anti_diagonal_is_bingo() {
        let marks = marked_at(&[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]);
        assert!(check_bingo(&marks));
    }

    #[test]
    fn test_four_of_five_everywhere_is_not_bingo() {
        // Mark every cell except (0,0), (1,3), (2,4), (3,2) and (4,1).
        // The gaps form a permutation touching both diagonals, so every
        // row, column and diagonal ends up with exactly four marks.
        let gaps = [(0, 0), (1, 3), (2, 4), (3, 2), (4, 1)];
        let mut marks = MarkState::new();
        for row in 0..5 {
            for col in 0..5 {
                if !gaps.contains(&(row, col)) {
                    marks.toggle(row, col).unwrap();
                }
            }
        }

        assert_eq!(marks.marked_count(), 20);
        assert!(!check_bingo(&marks));
    }

    #[test]
    fn test_unmarking_breaks_the_win() {
        let mut marks = marked_at(&[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        assert!(check_bingo(&marks));

        marks.toggle(2, 1).unwrap();
        assert!(!check_bingo(&marks));
    }

    #[test]
    fn test_multiple_complete_lines_still_true() {
        // Row 2 and column 2 complete at once; the result is still a
        // plain true.
        let mut marks = marked_at(&[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        for row in [0, 1, 3, 4] {
            marks.toggle(row, 2).unwrap();
        }
        assert!(check_bingo(&marks));
    }
}
