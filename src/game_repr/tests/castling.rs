use super::*;

fn white_castle_board(extra: &[(&'static str, Coord)]) -> Position {
    let mut placements = vec![("wk", c(0, 4)), ("wr", c(0, 7)), ("bk", c(7, 0))];
    placements.extend_from_slice(extra);
    board(&placements)
}

#[test]
fn test_white_kingside_castle_registered() {
    let mut pos = white_castle_board(&[]);
    let castles = pos.update_castles(Color::White).to_vec();

    assert_eq!(
        castles,
        vec![Castle {
            king_to: c(0, 6),
            rook_from: c(0, 7),
            rook_to: c(0, 5),
        }]
    );
}

#[test]
fn test_white_kingside_castle_applied() {
    init_logger();
    let mut pos = white_castle_board(&[]);
    pos.update_castles(Color::White);
    pos.move_piece(c(0, 4), c(0, 6), Color::White).unwrap();

    assert!(pos.get_piece(c(0, 6)).is_kind(Color::White, Kind::King));
    assert!(pos.get_piece(c(0, 5)).is_kind(Color::White, Kind::Rook));
    assert!(pos.get_piece(c(0, 4)).is_empty());
    assert!(pos.get_piece(c(0, 7)).is_empty());
    assert!(pos.get_piece(c(0, 6)).has_moved());
    assert!(pos.get_piece(c(0, 5)).has_moved());
    assert_eq!(pos.king_square(Color::White), Some(c(0, 6)));
}

#[test]
fn test_white_queenside_castle() {
    let mut pos = board(&[("wk", c(0, 4)), ("wr", c(0, 0)), ("bk", c(7, 7))]);
    let castles = pos.update_castles(Color::White).to_vec();
    assert_eq!(
        castles,
        vec![Castle {
            king_to: c(0, 2),
            rook_from: c(0, 0),
            rook_to: c(0, 3),
        }]
    );

    pos.move_piece(c(0, 4), c(0, 2), Color::White).unwrap();
    assert!(pos.get_piece(c(0, 2)).is_kind(Color::White, Kind::King));
    assert!(pos.get_piece(c(0, 3)).is_kind(Color::White, Kind::Rook));
    assert!(pos.get_piece(c(0, 0)).is_empty());
}

#[test]
fn test_both_sides_available() {
    let mut pos = white_castle_board(&[("wr", c(0, 0))]);
    let targets: Vec<Coord> = pos
        .update_castles(Color::White)
        .iter()
        .map(|castle| castle.king_to)
        .collect();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&c(0, 2)));
    assert!(targets.contains(&c(0, 6)));
}

#[test]
fn test_black_kingside_castle() {
    let mut pos = board(&[("bk", c(7, 4)), ("br", c(7, 7)), ("wk", c(0, 0))]);
    let castles = pos.update_castles(Color::Black).to_vec();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].king_to, c(7, 6));
    assert_eq!(castles[0].rook_to, c(7, 5));

    pos.move_piece(c(7, 4), c(7, 6), Color::Black).unwrap();
    assert!(pos.get_piece(c(7, 5)).is_kind(Color::Black, Kind::Rook));
}

#[test]
fn test_castle_blocked_by_piece() {
    let mut pos = white_castle_board(&[("wn", c(0, 6))]);
    assert!(pos.update_castles(Color::White).is_empty());
    assert!(pos.castling_live(Color::White), "A blocked castle is only lost for now");
}

#[test]
fn test_castle_lost_after_king_moves() {
    let mut pos = white_castle_board(&[]);
    pos.move_piece(c(0, 4), c(0, 3), Color::White).unwrap();
    pos.move_piece(c(0, 3), c(0, 4), Color::White).unwrap();

    assert!(pos.update_castles(Color::White).is_empty());
    assert!(!pos.castling_live(Color::White));
}

#[test]
fn test_moved_rook_is_skipped() {
    let mut pos = white_castle_board(&[("wr", c(0, 0))]);
    pos.move_piece(c(0, 7), c(1, 7), Color::White).unwrap();
    pos.move_piece(c(1, 7), c(0, 7), Color::White).unwrap();

    let castles = pos.update_castles(Color::White).to_vec();
    assert_eq!(castles.len(), 1, "Only the untouched a1 rook remains eligible");
    assert_eq!(castles[0].rook_from, c(0, 0));
    assert!(pos.castling_live(Color::White));
}

#[test]
fn test_castle_lost_when_every_rook_moved() {
    let mut pos = white_castle_board(&[]);
    pos.move_piece(c(0, 7), c(1, 7), Color::White).unwrap();
    pos.move_piece(c(1, 7), c(0, 7), Color::White).unwrap();

    assert!(pos.update_castles(Color::White).is_empty());
    assert!(!pos.castling_live(Color::White));
}

#[test]
fn test_no_castle_while_in_check() {
    let mut pos = white_castle_board(&[("br", c(7, 4))]); // e8 rook checks e1
    assert!(pos.assess_check(Color::White));
    assert!(pos.update_castles(Color::White).is_empty());
    assert!(pos.castling_live(Color::White));
}

#[test]
fn test_no_castle_through_attacked_square() {
    let mut pos = white_castle_board(&[("br", c(7, 5))]); // f8 rook covers f1
    assert!(pos.update_castles(Color::White).is_empty());
}

#[test]
fn test_no_castle_into_attacked_square() {
    let mut pos = white_castle_board(&[("br", c(7, 6))]); // g8 rook covers g1
    assert!(pos.update_castles(Color::White).is_empty());
}

#[test]
fn test_queenside_ignores_attack_on_b_file() {
    // The king never crosses b1
    let mut pos = board(&[
        ("wk", c(0, 4)),
        ("wr", c(0, 0)),
        ("br", c(7, 1)),
        ("bk", c(7, 7)),
    ]);
    assert_eq!(pos.update_castles(Color::White).len(), 1);
}

#[test]
fn test_rook_too_close_to_castle() {
    let mut pos = board(&[("wk", c(0, 4)), ("wr", c(0, 6)), ("bk", c(7, 7))]);
    assert!(pos.get_piece(c(0, 6)).sees_king());
    assert!(pos.update_castles(Color::White).is_empty());
}

#[test]
fn test_castle_without_registration_is_illegal() {
    let mut pos = white_castle_board(&[]);
    let before = pos.clone();
    assert_eq!(
        pos.move_piece(c(0, 4), c(0, 6), Color::White),
        Err(EngineError::IllegalMove {
            from: c(0, 4),
            to: c(0, 6),
        })
    );
    assert_eq!(pos, before);
}

#[test]
fn test_castles_cleared_by_any_move() {
    let mut pos = white_castle_board(&[]);
    assert_eq!(pos.update_castles(Color::White).len(), 1);

    pos.move_piece(c(7, 0), c(6, 0), Color::Black).unwrap();
    assert!(pos.castles(Color::White).is_empty());
}

#[test]
fn test_start_position_has_no_castle_but_keeps_rights() {
    let mut pos = Position::new();
    assert!(pos.update_castles(Color::White).is_empty());
    assert!(pos.castling_live(Color::White));
    assert!(pos.castling_live(Color::Black));
}

#[test]
fn test_no_king_revokes_castling() {
    let mut pos = board(&[("wr", c(0, 7))]);
    assert!(pos.update_castles(Color::White).is_empty());
    assert!(!pos.castling_live(Color::White));
}

#[test]
fn test_castle_target_from_non_king_square_is_illegal() {
    let mut pos = white_castle_board(&[("wn", c(1, 5))]); // f2 knight
    assert_eq!(pos.update_castles(Color::White).len(), 1);
    let before = pos.clone();

    // g1 is the registered king destination, but only the king may use it
    assert!(!has_move(&pos, c(1, 5), c(0, 6)));
    assert_eq!(
        pos.move_piece(c(1, 5), c(0, 6), Color::White),
        Err(EngineError::IllegalMove {
            from: c(1, 5),
            to: c(0, 6),
        })
    );
    assert_eq!(pos, before);
}
