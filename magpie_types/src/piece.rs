/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use anyhow::{bail, Result};

/// The color of a player or piece. White moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 2;

    /// This [`Color`] as a `usize`, for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The other [`Color`].
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// This [`Color`] as a FEN side-to-move character: `'w'` or `'b'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

impl Not for Color {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        self.opponent()
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" | "W" => Ok(Self::White),
            "b" | "B" => Ok(Self::Black),
            _ => bail!("Invalid color string {s:?}. Expected \"w\" or \"b\""),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// The six kinds of chess piece, ordered by conventional material value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds, in value order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// This [`PieceKind`] as a `usize`, for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// This [`PieceKind`] as a lowercase FEN character.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A chess piece: a [`PieceKind`] plus a [`Color`], packed into one byte.
///
/// The packed code is `kind * 2 + color`, giving the twelve values
/// `0 = white pawn`, `1 = black pawn`, ..., `11 = black king`. Bitboard and
/// Zobrist tables are indexed by this code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces (6 kinds x 2 colors).
    pub const COUNT: usize = 12;

    /// Creates a new [`Piece`] of `color` and `kind`.
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self((kind as u8) << 1 | color as u8)
    }

    /// Creates a new [`Piece`] from a packed code, without verifying it is below 12.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);
        Self(index as u8)
    }

    /// Creates a new [`Piece`] from a FEN character like `'N'` or `'q'`.
    pub fn from_uci(c: char) -> Result<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => bail!("Invalid piece character {c:?}"),
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self::new(color, kind))
    }

    /// The packed code of this [`Piece`], for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The [`Color`] of this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        if self.0 & 1 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        PieceKind::ALL[(self.0 >> 1) as usize]
    }

    /// Returns `true` if this [`Piece`] is a pawn.
    #[inline(always)]
    pub const fn is_pawn(&self) -> bool {
        self.0 >> 1 == PieceKind::Pawn as u8
    }

    /// Returns `true` if this [`Piece`] is a king.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        self.0 >> 1 == PieceKind::King as u8
    }

    /// This [`Piece`] as a FEN character: uppercase for White, lowercase for Black.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self.color() {
            Color::White => self.kind().char().to_ascii_uppercase(),
            Color::Black => self.kind().char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_codes_are_disjoint() {
        let mut seen = [false; Piece::COUNT];
        for kind in PieceKind::ALL {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(color, kind);
                assert!(!seen[piece.index()]);
                seen[piece.index()] = true;
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn uci_round_trip() {
        for c in "PNBRQKpnbrqk".chars() {
            assert_eq!(Piece::from_uci(c).unwrap().char(), c);
        }
        assert!(Piece::from_uci('x').is_err());
    }

    #[test]
    fn opponent_flips() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }
}
