use crate::types::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("empty fen")]
    Empty,
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {0} does not describe 8 files")]
    RankWidth(String),
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

/// Piece placement only. Side to move, castling rights, en-passant targets
/// and move clocks are not part of this model; callers track whose turn it
/// is themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board { squares: [None; 64] }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            b.squares[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
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
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            b.squares[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        b
    }

    /// Parses the piece-placement field of a FEN string. Any further fields
    /// (side to move, castling, clocks) are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board_part = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let mut board = Board::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(FenError::UnexpectedChar(ch)),
                    };
                    let sq = sq(file, rank).ok_or_else(|| FenError::RankWidth(rank_str.to_string()))?;
                    board.squares[sq as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth(rank_str.to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth(rank_str.to_string()));
            }
        }

        Ok(board)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.squares[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    /// Returns the board after `mv`, leaving `self` untouched. Captures are
    /// overwritten silently; a set `promo` replaces the moved piece's kind.
    /// No legality checking happens here.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = self.clone();
        debug_assert!(
            next.squares[mv.from as usize].is_some(),
            "apply from empty square {}",
            sq_to_coord(mv.from)
        );
        let mut moved = next.squares[mv.from as usize].take();
        if let Some(pc) = moved.as_mut()
            && let Some(kind) = mv.promo
        {
            pc.kind = kind;
        }
        next.squares[mv.to as usize] = moved;
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
