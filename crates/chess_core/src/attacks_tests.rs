use super::*;

fn s(name: &str) -> Square {
    parse_square(name).unwrap()
}

fn board_with(pieces: &[(&str, Piece)]) -> Board {
    let mut b = Board::empty();
    for &(name, pc) in pieces {
        b.set_piece(s(name), Some(pc));
    }
    b
}

const WP: Piece = Piece::new(Color::White, PieceKind::Pawn);
const WN: Piece = Piece::new(Color::White, PieceKind::Knight);
const WR: Piece = Piece::new(Color::White, PieceKind::Rook);
const WQ: Piece = Piece::new(Color::White, PieceKind::Queen);
const BP: Piece = Piece::new(Color::Black, PieceKind::Pawn);
const BB: Piece = Piece::new(Color::Black, PieceKind::Bishop);

#[test]
fn test_path_adjacent_is_clear() {
    let b = Board::startpos();
    assert!(path_is_empty(&b, s("e1"), s("e2")));
    assert!(path_is_empty(&b, s("e1"), s("d2")));
}

#[test]
fn test_path_unaligned_is_never_clear() {
    let b = Board::empty();
    assert!(!path_is_empty(&b, s("b1"), s("c3")));
    assert!(!path_is_empty(&b, s("a1"), s("a1")));
}

#[test]
fn test_path_blocked_between() {
    let b = Board::startpos();
    // Knight on b1 and bishop on c1 sit between rook and king
    assert!(!path_is_empty(&b, s("e1"), s("a1")));
    assert!(path_is_empty(&b, s("e2"), s("e7")));
    assert!(!path_is_empty(&b, s("e1"), s("e8")));
}

#[test]
fn test_pawn_attacks_forward_diagonals_only() {
    let b = board_with(&[("e4", WP), ("d5", BP)]);
    assert!(can_attack(&b, WP, s("e4"), s("d5")));
    assert!(can_attack(&b, WP, s("e4"), s("f5")));
    assert!(!can_attack(&b, WP, s("e4"), s("e5")));
    assert!(!can_attack(&b, WP, s("e4"), s("d3")));
    assert!(can_attack(&b, BP, s("d5"), s("e4")));
    assert!(!can_attack(&b, BP, s("d5"), s("e6")));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let b = Board::startpos();
    let knight = b.piece_at(s("g1")).unwrap();
    assert_eq!(knight, WN);
    assert!(can_attack(&b, knight, s("g1"), s("f3")));
    assert!(!can_attack(&b, knight, s("g1"), s("e2")));
}

#[test]
fn test_slider_blocked_by_piece() {
    let b = board_with(&[("a1", WR), ("a4", BP), ("a8", BB)]);
    assert!(can_attack(&b, WR, s("a1"), s("a4")));
    assert!(!can_attack(&b, WR, s("a1"), s("a8")));
    assert!(can_attack(&b, WR, s("a1"), s("h1")));
    assert!(!can_attack(&b, WR, s("a1"), s("b2")));
}

#[test]
fn test_cannot_attack_friendly_square() {
    let b = board_with(&[("d1", WQ), ("d2", WP)]);
    assert!(!can_attack(&b, WQ, s("d1"), s("d2")));
    assert!(covers_square(&b, WQ, s("d1"), s("d2")));
}

#[test]
fn test_square_attacked_by_color() {
    let b = board_with(&[("c4", BB), ("h1", WR)]);
    assert!(is_square_attacked(&b, s("f1"), Color::Black));
    assert!(is_square_attacked(&b, s("f1"), Color::White));
    assert!(!is_square_attacked(&b, s("f2"), Color::White));
    assert!(is_square_attacked(&b, s("a6"), Color::Black));
}

#[test]
fn test_defended_counts_friendly_occupant() {
    // Pawn on e4 protected by the pawn on d3, knight on a1 unprotected
    let b = board_with(&[("e4", WP), ("d3", WP), ("a1", WN)]);
    assert!(is_square_defended(&b, s("e4"), Color::White));
    assert!(!is_square_defended(&b, s("a1"), Color::White));
    // The attack test never reports a friendly square
    assert!(!is_square_attacked(&b, s("e4"), Color::White));
}

#[test]
fn test_direction() {
    assert_eq!(direction(s("a1"), s("h8")), Some((-1, 1)));
    assert_eq!(direction(s("e4"), s("e8")), Some((-1, 0)));
    assert_eq!(direction(s("e4"), s("a4")), Some((0, -1)));
    assert_eq!(direction(s("b1"), s("c3")), None);
    assert_eq!(direction(s("c3"), s("c3")), None);
}
