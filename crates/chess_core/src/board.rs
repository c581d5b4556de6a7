use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk,
            (Color::White, CastleSide::QueenSide) => self.wq,
            (Color::Black, CastleSide::KingSide) => self.bk,
            (Color::Black, CastleSide::QueenSide) => self.bq,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        let flag = match (color, side) {
            (Color::White, CastleSide::KingSide) => &mut self.wk,
            (Color::White, CastleSide::QueenSide) => &mut self.wq,
            (Color::Black, CastleSide::KingSide) => &mut self.bk,
            (Color::Black, CastleSide::QueenSide) => &mut self.bq,
        };
        *flag = value;
    }

    pub fn clear_color(&mut self, color: Color) {
        self.set(color, CastleSide::KingSide, false);
        self.set(color, CastleSide::QueenSide, false);
    }

    /// Drops the right tied to a corner rook square, if `sq` is one.
    pub fn clear_corner(&mut self, sq: Square) {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if Some(sq) == rook_home(color, side) {
                    self.set(color, side, false);
                }
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Starting square of the king of `color`.
pub fn king_home(color: Color) -> Square {
    color.back_row() as u8 * 8 + KING_HOME_COL as u8
}

/// Starting square of the castling rook of `color` on `side`.
pub fn rook_home(color: Color, side: CastleSide) -> Option<Square> {
    sq(color.back_row(), side.rook_col())
}

/// Piece placement: 64 squares, each empty or holding one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8i8 {
            for color in Color::BOTH {
                if let Some(s) = sq(color.pawn_row(), col) {
                    b.set_piece(s, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            for color in Color::BOTH {
                if let Some(s) = sq(color.back_row(), col as i8) {
                    b.set_piece(s, Some(Piece::new(color, kind)));
                }
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq as usize].is_none()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).map(|p| p.kind)
    }

    /// Square of the first piece equal to `piece`, scanning from a8.
    pub fn find_piece(&self, piece: Piece) -> Option<Square> {
        self.squares
            .iter()
            .position(|&p| p == Some(piece))
            .map(|i| i as Square)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.find_piece(Piece::new(color, PieceKind::King))
    }

    /// Occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i as Square, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
