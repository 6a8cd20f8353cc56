//! Piece and color types with their notation and class mappings.
//!
//! A piece maps three ways: to a notation character (uppercase = white,
//! lowercase = black), to a signed code (positive = white, negative = black,
//! magnitude = piece type, 0 = empty square), and to a one-hot class index
//! (code + 6, so classes run from black king at 0 to white king at 12 with
//! the empty square at 6).

/// Number of one-hot classes per square: six piece types per color + empty.
pub const NUM_CLASSES: usize = 13;

/// One-hot class index of an empty square.
pub const EMPTY_CLASS: usize = 6;

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// The type of a chess piece.
///
/// The discriminant is the unsigned magnitude of the piece code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// Parses a piece type from the magnitude of a piece code.
    pub fn from_magnitude(m: i8) -> Option<PieceType> {
        match m {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Rook),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Returns the signed piece code: positive for white, negative for black.
    pub const fn code(self) -> i8 {
        match self.color {
            Color::White => self.piece_type as i8,
            Color::Black => -(self.piece_type as i8),
        }
    }

    /// Parses a piece from a signed code. Returns `None` for 0 (an empty
    /// square carries no piece) and for codes outside -6..=6.
    pub fn from_code(code: i8) -> Option<Piece> {
        let color = if code > 0 { Color::White } else { Color::Black };
        PieceType::from_magnitude(code.checked_abs()?).map(|piece_type| Piece { piece_type, color })
    }

    /// Returns the notation character: uppercase for white, lowercase for black.
    pub const fn notation_char(self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        };
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parses a piece from its notation character.
    pub fn from_notation_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };
        Some(Piece { piece_type, color })
    }

    /// Returns the one-hot class index of this piece (code + 6).
    pub const fn class_index(self) -> usize {
        (self.code() + 6) as usize
    }
}
