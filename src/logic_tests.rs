#[cfg(test)]
mod tests {
    use crate::core::{Board, PlayerId, Position, BOARD_SIZE};
    use crate::logic::{has_five_at, has_five_in_row, legal_moves};

    /// (x0, y0) から (dx, dy) 方向に len 個の石を並べる
    fn place_line(board: &mut Board, x0: i32, y0: i32, dx: i32, dy: i32, len: i32, player: PlayerId) {
        for k in 0..len {
            let pos = Position::new((x0 + k * dx) as usize, (y0 + k * dy) as usize);
            board.place_stone(pos, player);
        }
    }

    #[test]
    fn test_exactly_five_wins() {
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 0, 9, 1, 0, 5, PlayerId::Player1);

        // 連のどの石を起点にしても勝ちと判定される
        for x in 0..5 {
            assert!(has_five_at(&board, Position::new(x, 9), PlayerId::Player1));
        }
        assert!(has_five_in_row(&board, PlayerId::Player1));
        assert!(!has_five_in_row(&board, PlayerId::Player2));
    }

    #[test]
    fn test_four_in_row_is_not_a_win() {
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 2, 6, 1, 0, 4, PlayerId::Player2);

        assert!(!has_five_at(&board, Position::new(2, 6), PlayerId::Player2));
        assert!(!has_five_in_row(&board, PlayerId::Player2));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        // 長連の禁止はしない (6連以上も勝ち)
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 3, 0, 1, 0, 6, PlayerId::Player1);

        assert!(has_five_at(&board, Position::new(5, 0), PlayerId::Player1));
        assert!(has_five_in_row(&board, PlayerId::Player1));
    }

    #[test]
    fn test_five_in_all_directions() {
        // 縦
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 4, 2, 0, 1, 5, PlayerId::Player2);
        assert!(has_five_in_row(&board, PlayerId::Player2));

        // 右下がり
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 1, 1, 1, 1, 5, PlayerId::Player1);
        assert!(has_five_in_row(&board, PlayerId::Player1));

        // 右上がり
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 2, 8, 1, -1, 5, PlayerId::Player2);
        assert!(has_five_in_row(&board, PlayerId::Player2));
    }

    #[test]
    fn test_five_into_corner() {
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 7, 7, 1, 1, 5, PlayerId::Player1);

        assert!(has_five_at(&board, Position::new(11, 11), PlayerId::Player1));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new(BOARD_SIZE);
        // x=2 が空いたまま: 2連 + 4連 = 石6個でも五目ではない
        place_line(&mut board, 0, 5, 1, 0, 2, PlayerId::Player1);
        place_line(&mut board, 3, 5, 1, 0, 4, PlayerId::Player1);

        assert!(!has_five_in_row(&board, PlayerId::Player1));
    }

    #[test]
    fn test_no_win_across_board_edge() {
        let mut board = Board::new(BOARD_SIZE);
        // 行末の3連と次の行頭の2連は繋がらない
        place_line(&mut board, 9, 0, 1, 0, 3, PlayerId::Player2);
        place_line(&mut board, 0, 1, 1, 0, 2, PlayerId::Player2);

        assert!(!has_five_in_row(&board, PlayerId::Player2));
    }

    #[test]
    fn test_per_move_check_agrees_with_full_scan() {
        // 既存の五目がない盤面では、置いた石を起点にした判定と
        // 盤面全体の再走査は全空点・両者で一致する
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 1, 3, 1, 0, 4, PlayerId::Player1);
        place_line(&mut board, 6, 6, 0, 1, 3, PlayerId::Player2);
        let snapshot = board.clone();

        for player in [PlayerId::Player1, PlayerId::Player2] {
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    let pos = Position::new(x, y);
                    if board.get_stone(pos).is_some() {
                        continue;
                    }
                    board.place_stone(pos, player);
                    assert_eq!(
                        has_five_at(&board, pos, player),
                        has_five_in_row(&board, player),
                        "mismatch at {} for {:?}",
                        pos,
                        player
                    );
                    board.remove_stone(pos);
                }
            }
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_win_check_does_not_mutate_board() {
        let mut board = Board::new(BOARD_SIZE);
        place_line(&mut board, 0, 0, 1, 1, 5, PlayerId::Player1);
        let snapshot = board.clone();

        assert!(has_five_at(&board, Position::new(2, 2), PlayerId::Player1));
        assert!(has_five_in_row(&board, PlayerId::Player1));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let mut board = Board::new(BOARD_SIZE);
        board.place_stone(Position::new(0, 0), PlayerId::Player1);
        board.place_stone(Position::new(7, 4), PlayerId::Player2);

        let moves = legal_moves(&board);
        assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE - 2);
        assert!(!moves.contains(&Position::new(0, 0)));
        assert!(!moves.contains(&Position::new(7, 4)));

        // 行優先 (y が先、同じ行では x の昇順)
        for pair in moves.windows(2) {
            assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
        }
    }

    #[test]
    fn test_legal_moves_empty_on_full_board() {
        let mut board = Board::new(BOARD_SIZE);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                board.place_stone(Position::new(x, y), PlayerId::Player1);
            }
        }
        assert!(board.is_full());
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_out_of_bounds_reads_are_empty() {
        let mut board = Board::new(BOARD_SIZE);
        board.place_stone(Position::new(11, 11), PlayerId::Player1);

        assert_eq!(board.get_stone(Position::new(12, 0)), None);
        assert_eq!(board.get_stone(Position::new(0, 12)), None);
        assert_eq!(board.stone_at(-1, 0), None);
        assert_eq!(board.stone_at(0, -1), None);
        assert_eq!(board.stone_at(12, 12), None);
    }

    #[test]
    fn test_board_wire_format() {
        // セルは 0/1/2 の正方行列として送られる (旧フロントエンドの形式)
        let mut board = Board::new(BOARD_SIZE);
        board.place_stone(Position::new(1, 0), PlayerId::Player1);
        board.place_stone(Position::new(2, 0), PlayerId::Player2);

        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["cells"][0][0], 0);
        assert_eq!(value["cells"][0][1], 1);
        assert_eq!(value["cells"][0][2], 2);

        let decoded: Board = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, board);
    }
}
