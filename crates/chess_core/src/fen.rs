//! Forsyth-Edwards Notation for setting up and printing states.

use crate::board::{Board, CastlingRights};
use crate::error::{RulesError, RulesResult};
use crate::state::GameState;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn invalid(msg: impl Into<String>) -> RulesError {
    RulesError::InvalidFen(msg.into())
}

impl GameState {
    /// Parses a FEN string. The clocks are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields"));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("board section must have 8 ranks"));
        }

        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let pc = Piece::from_fen_char(ch)
                        .ok_or_else(|| invalid(format!("invalid piece char '{ch}'")))?;
                    let s = sq(row as i8, col)
                        .ok_or_else(|| invalid(format!("too many files in rank '{rank_str}'")))?;
                    board.set_piece(s, Some(pc));
                    col += 1;
                }
                if col > 8 {
                    return Err(invalid(format!("too many files in rank '{rank_str}'")));
                }
            }
            if col != 8 {
                return Err(invalid(format!("not enough files in rank '{rank_str}'")));
            }
        }

        let turn = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(invalid(format!("invalid side to move '{other}'"))),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(invalid(format!("invalid castling char '{c}'"))),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            Some(parse_square(ep_part).ok_or_else(|| invalid(format!("bad en-passant square '{ep_part}'")))?)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| invalid(format!("bad halfmove clock '{halfmove_part}'")))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| invalid(format!("bad fullmove number '{fullmove_part}'")))?;

        Ok(GameState::from_parts(
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..8i8 {
            let mut empty = 0;
            for col in 0..8i8 {
                let pc = sq(row, col).and_then(|s| self.board.piece_at(s));
                match pc {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let c = &self.castling;
        let rights: String = [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')]
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, ch)| *ch)
            .collect();
        if rights.is_empty() {
            out.push('-');
        } else {
            out.push_str(&rights);
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&square_name(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
