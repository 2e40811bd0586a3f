use super::*;

#[test]
fn test_simple_stalemate() {
    // Queen on c2 covers a2, b1 and b2 without attacking a1
    let pos = board(&[("wk", c(0, 0)), ("bq", c(1, 2)), ("bk", c(7, 7))]);

    assert!(!pos.assess_check(Color::White));
    assert!(pos.assess_checkmate(Color::White));
    assert!(pos.is_stalemate(Color::White));
    assert!(!pos.is_checkmate(Color::White));
}

#[test]
fn test_check_is_not_stalemate() {
    let pos = board(&[("wk", c(0, 0)), ("br", c(7, 0)), ("bk", c(7, 7))]);
    assert!(pos.assess_check(Color::White));
    assert!(!pos.is_stalemate(Color::White));
}

#[test]
fn test_pawn_move_prevents_stalemate() {
    let pos = board(&[
        ("wk", c(0, 0)),
        ("wp", c(1, 0)), // a2
        ("bq", c(1, 2)),
        ("bk", c(7, 7)),
    ]);
    assert!(!pos.is_stalemate(Color::White));
}

#[test]
fn test_no_pieces_is_vacuously_stuck() {
    // A side with no pieces has no candidate and is not in check
    let pos = board(&[("bk", c(7, 7))]);
    assert!(pos.is_stalemate(Color::White));
}
