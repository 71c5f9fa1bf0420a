use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

impl Board {
    /// Load a FEN string into this board, overwriting all existing state.
    ///
    /// Accepts fields 1-4 (piece placement, side to move, castling rights,
    /// en passant target) as mandatory; fields 5-6 (halfmove clock, fullmove
    /// number) are parsed when present and default to 0/1 otherwise.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or("FEN missing piece placement field")?;
        let side = fields.next().ok_or("FEN missing side-to-move field")?;
        let castling = fields.next().ok_or("FEN missing castling rights field")?;
        let ep = fields.next().ok_or("FEN missing en passant field")?;
        let halfmove = fields.next();
        let fullmove = fields.next();

        let mut piece_bb = [[0u64; 6]; 2];

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "FEN piece placement must have 8 ranks, found {}",
                ranks.len()
            ));
        }

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                if file >= 8 {
                    return Err(format!("FEN rank '{rank_str}' overflows 8 files"));
                }
                let (piece, color) = CHAR_TO_PC[c as usize]
                    .ok_or_else(|| format!("FEN contains unrecognized piece glyph '{c}'"))?;
                let sq = rank * 8 + file;
                piece_bb[color as usize][piece as usize] |= 1u64 << sq;
                file += 1;
            }
            if file != 8 {
                return Err(format!("FEN rank '{rank_str}' does not cover 8 files"));
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("FEN side-to-move must be 'w' or 'b', got '{other}'")),
        };

        let mut castling_rights = 0u8;
        if castling != "-" {
            for c in castling.chars() {
                castling_rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("FEN contains unrecognized castling glyph '{other}'")),
                };
            }
        }

        let en_passant = if ep == "-" {
            None
        } else {
            let mut chars = ep.chars();
            let file_ch = chars.next().ok_or("FEN en passant field is empty")?;
            let rank_ch = chars
                .next()
                .ok_or_else(|| format!("FEN en passant square '{ep}' is malformed"))?;
            if !file_ch.is_ascii_lowercase() || !('1'..='8').contains(&rank_ch) {
                return Err(format!("FEN en passant square '{ep}' is malformed"));
            }
            let file = file_ch as u8 - b'a';
            let rank = rank_ch as u8 - b'1';
            if file > 7 {
                return Err(format!("FEN en passant square '{ep}' is malformed"));
            }
            Some(Square::from_file_rank(file, rank))
        };

        let halfmove_clock = match halfmove {
            Some(s) => s
                .parse()
                .map_err(|_| format!("FEN halfmove clock '{s}' is not a number"))?,
            None => 0,
        };
        let fullmove_number = match fullmove {
            Some(s) => s
                .parse()
                .map_err(|_| format!("FEN fullmove number '{s}' is not a number"))?,
            None => 1,
        };

        *self = Board::new_empty();
        for color in [Color::White, Color::Black] {
            for piece in [
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                self.set_bb(color, piece, piece_bb[color as usize][piece as usize]);
            }
        }

        self.side_to_move = side_to_move;
        self.castling_rights = castling_rights;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.history.clear();
        self.refresh_zobrist();

        Ok(())
    }

    /// Serialize this board back into a full (six-field) FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(64);
        for rank_from_top in 0..8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u32;
            for file in 0..8 {
                let sq = rank * 8 + file;
                match self.piece_at(Square::from_index(sq as u8)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        placement.push(PC_TO_CHAR[idx]);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank_from_top != 7 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.has_castling(CASTLE_WK) {
            castling.push('K');
        }
        if self.has_castling(CASTLE_WQ) {
            castling.push('Q');
        }
        if self.has_castling(CASTLE_BK) {
            castling.push('k');
        }
        if self.has_castling(CASTLE_BQ) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.en_passant {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_round_trips() {
        let mut board = Board::new_empty();
        board
            .set_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn kiwipete_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut board = Board::new_empty();
        board.set_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn en_passant_square_is_parsed() {
        let mut board = Board::new_empty();
        board
            .set_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .unwrap();
        assert_eq!(board.en_passant.map(|s| s.to_string()), Some("e6".to_string()));
    }

    #[test]
    fn rejects_malformed_placement() {
        let mut board = Board::new_empty();
        assert!(board.set_fen("not a fen").is_err());
    }

    #[test]
    fn missing_move_counters_default_to_zero_and_one() {
        let mut board = Board::new_empty();
        board
            .set_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -")
            .unwrap();
        assert_eq!(board.halfmove_clock, 0);
        assert_eq!(board.fullmove_number, 1);
    }
}
