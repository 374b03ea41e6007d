/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Piece, Square};

/// What, if anything, is special about a move.
///
/// The discriminants are the packed 3-bit flag field of a [`Move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum MoveFlag {
    /// A regular move or capture.
    #[default]
    Quiet = 0,
    PromoteKnight = 1,
    PromoteBishop = 2,
    PromoteRook = 3,
    PromoteQueen = 4,
    /// Queenside castling, encoded as king-to-rook-origin.
    LongCastle = 5,
    /// Kingside castling, encoded as king-to-rook-origin.
    ShortCastle = 6,
    EnPassant = 7,
}

impl MoveFlag {
    #[inline(always)]
    const fn from_bits(bits: u64) -> Self {
        match bits {
            0 => Self::Quiet,
            1 => Self::PromoteKnight,
            2 => Self::PromoteBishop,
            3 => Self::PromoteRook,
            4 => Self::PromoteQueen,
            5 => Self::LongCastle,
            6 => Self::ShortCastle,
            _ => Self::EnPassant,
        }
    }
}

/// One state transition, packed into a single `u64`.
///
/// The low 24 bits are the canonical encoding:
///
/// ```text
/// PPPP CCCC SSSSSS EEEEEEE FFF
/// 3         1         0
/// 321098765432109876543210
/// ```
///
/// `P` = moving piece code, `C` = captured piece code (12 = none),
/// `S` = start square, `E` = end square (64 = null move), `F` = flag.
/// Bits 32..64 hold a mutable ordering key that is excluded from equality,
/// hashing, and the canonical encoding.
///
/// Castling moves store the *rook origin* as their end square; [`fmt::Display`]
/// renders the conventional king destination instead.
#[derive(Clone, Copy)]
pub struct Move {
    data: u64,
}

/// Captured-piece code meaning "nothing was captured".
const NO_CAPTURE: u64 = 12;

/// End-square code reserved for the null move.
const NULL_SQUARE: u64 = 64;

/// Mask of the 24 canonical bits.
const CANONICAL_MASK: u64 = 0xFF_FFFF;

impl Move {
    /// The null move: a recognizable non-move that terminates move lists.
    pub const NULL: Self = Self {
        data: (NO_CAPTURE << 20) | (NO_CAPTURE << 16) | (NULL_SQUARE << 3),
    };

    /// Packs a new [`Move`].
    #[inline(always)]
    pub const fn new(
        piece: Piece,
        from: Square,
        captured: Option<Piece>,
        to: Square,
        flag: MoveFlag,
    ) -> Self {
        let captured = match captured {
            Some(piece) => piece.index() as u64,
            None => NO_CAPTURE,
        };
        Self {
            data: (piece.index() as u64) << 20
                | captured << 16
                | (from.index() as u64) << 10
                | (to.index() as u64) << 3
                | flag as u64,
        }
    }

    /// The piece being moved.
    #[inline(always)]
    pub const fn piece(&self) -> Piece {
        Piece::from_index_unchecked(((self.data >> 20) & 0xF) as usize)
    }

    /// The piece captured by this move, if any.
    ///
    /// En passant reports `None` here; the captured pawn is implied by the
    /// flag and does not sit on the end square.
    #[inline(always)]
    pub const fn captured(&self) -> Option<Piece> {
        let code = (self.data >> 16) & 0xF;
        if code == NO_CAPTURE {
            None
        } else {
            Some(Piece::from_index_unchecked(code as usize))
        }
    }

    /// The square the piece moves from.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        Square::from_index_unchecked(((self.data >> 10) & 0x3F) as usize)
    }

    /// The square the piece moves to. For castling this is the rook's origin.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        Square::from_index_unchecked(((self.data >> 3) & 0x7F) as usize)
    }

    /// What is special about this move.
    #[inline(always)]
    pub const fn flag(&self) -> MoveFlag {
        MoveFlag::from_bits(self.data & 0x7)
    }

    /// Returns `true` if this is the null move.
    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        self.data & 0x200 != 0
    }

    /// The mutable ordering key.
    #[inline(always)]
    pub const fn sort_key(&self) -> u32 {
        (self.data >> 32) as u32
    }

    /// Replaces the ordering key, leaving the canonical encoding untouched.
    #[inline(always)]
    pub fn set_sort_key(&mut self, key: u32) {
        self.data = self.data & 0xFFFF_FFFF | (key as u64) << 32;
    }

    /// A most-valuable-victim / least-valuable-attacker capture score.
    ///
    /// Promotion to queen outranks every capture; the remaining promotions and
    /// castling score zero. Everything else weighs the victim's code far above
    /// the attacker's inverted code, so en passant (whose implied victim slot
    /// carries the none-sentinel) sorts with the captures. Only meaningful for
    /// noisy moves.
    #[inline(always)]
    pub const fn mvv_lva(&self) -> i32 {
        match self.flag() {
            MoveFlag::PromoteQueen => 384,
            MoveFlag::PromoteKnight
            | MoveFlag::PromoteBishop
            | MoveFlag::PromoteRook
            | MoveFlag::LongCastle
            | MoveFlag::ShortCastle => 0,
            _ => {
                let victim = ((self.data >> 16) & 0xF) as i32;
                let attacker = ((self.data >> 20) & 0xF) as i32;
                (victim << 5) + (attacker ^ 15)
            }
        }
    }
}

impl Default for Move {
    #[inline(always)]
    fn default() -> Self {
        Self::NULL
    }
}

/// Equality covers only the canonical 24 bits; the ordering key is ignored.
impl PartialEq for Move {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        (self.data ^ other.data) & CANONICAL_MASK == 0
    }
}

impl Eq for Move {}

impl Hash for Move {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.data & CANONICAL_MASK).hash(state);
    }
}

/// Sorts descending by ordering key, falling back to raw-field order, so a
/// plain `sort` brings the best-scored moves to the front.
impl Ord for Move {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        other.data.cmp(&self.data)
    }
}

impl PartialOrd for Move {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        let to = match self.flag() {
            MoveFlag::LongCastle => self.to().offset(2),
            MoveFlag::ShortCastle => self.to().offset(-1),
            _ => self.to(),
        };
        write!(f, "{}{}", self.from(), to)?;
        match self.flag() {
            MoveFlag::PromoteKnight => write!(f, "n"),
            MoveFlag::PromoteBishop => write!(f, "b"),
            MoveFlag::PromoteRook => write!(f, "r"),
            MoveFlag::PromoteQueen => write!(f, "q"),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({self}, {:?}, key {})", self.flag(), self.sort_key())
    }
}
