/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{Piece, Square, XorShift64};

/// Seed for the key tables. Changing it changes every key in the program, so
/// it must never vary at runtime.
const ZOBRIST_SEED: u64 = 0xC1A5_51C4_0B5E_55ED;

/// Independent pseudo-random keys for every feature of a position.
///
/// Castling and en-passant keys are indexed by square, with index 64 meaning
/// "no right" / "no target", so an `Option<Square>` maps straight onto a row.
struct ZobristTable {
    pieces: [[u64; Square::COUNT]; Piece::COUNT],
    castling: [u64; Square::COUNT + 1],
    en_passant: [u64; Square::COUNT + 1],
    side_to_move: u64,
}

impl ZobristTable {
    const fn generate() -> Self {
        let mut rng = XorShift64::new(ZOBRIST_SEED);

        let mut pieces = [[0; Square::COUNT]; Piece::COUNT];
        let mut piece = 0;
        while piece < Piece::COUNT {
            let mut square = 0;
            while square < Square::COUNT {
                pieces[piece][square] = rng.next_u64();
                square += 1;
            }
            piece += 1;
        }

        let mut castling = [0; Square::COUNT + 1];
        let mut slot = 0;
        while slot < castling.len() {
            castling[slot] = rng.next_u64();
            slot += 1;
        }

        let mut en_passant = [0; Square::COUNT + 1];
        let mut slot = 0;
        while slot < en_passant.len() {
            en_passant[slot] = rng.next_u64();
            slot += 1;
        }

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move: rng.next_u64(),
        }
    }
}

/// The table is generated once, at compile time.
static ZOBRIST: ZobristTable = ZobristTable::generate();

/// A position-identity hash, built by XOR-ing independent keys per state
/// feature (piece placement, side to move, castling rights, en passant).
///
/// Keys combine and cancel under XOR, which is what makes incremental
/// maintenance in `make_move` possible: applying the same feature key twice
/// removes it again.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ZobristKey(u64);

impl ZobristKey {
    /// The raw `u64` behind this key.
    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Toggles the key of `piece` sitting on `square`.
    #[inline(always)]
    pub fn hash_piece(&mut self, square: Square, piece: Piece) {
        self.0 ^= ZOBRIST.pieces[piece.index()][square.index()];
    }

    /// Toggles the key of one castling slot, keyed by its rook-origin square.
    #[inline(always)]
    pub fn hash_castling_slot(&mut self, slot: Option<Square>) {
        self.0 ^= ZOBRIST.castling[slot.map_or(Square::COUNT, |square| square.index())];
    }

    /// Toggles the key of the en-passant target square.
    #[inline(always)]
    pub fn hash_en_passant(&mut self, target: Option<Square>) {
        self.0 ^= ZOBRIST.en_passant[target.map_or(Square::COUNT, |square| square.index())];
    }

    /// Toggles the side-to-move key. Applied on every move so that the same
    /// piece layout with different players to move hashes differently.
    #[inline(always)]
    pub fn hash_side_to_move(&mut self) {
        self.0 ^= ZOBRIST.side_to_move;
    }
}

impl fmt::Display for ZobristKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018X}", self.0)
    }
}

impl fmt::Debug for ZobristKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZobristKey({:#018X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    #[test]
    fn hashing_a_feature_twice_cancels() {
        let mut key = ZobristKey::default();
        key.hash_piece(Square::E4, Piece::new(Color::White, PieceKind::Knight));
        assert_ne!(key, ZobristKey::default());
        key.hash_piece(Square::E4, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(key, ZobristKey::default());
    }

    #[test]
    fn distinct_features_have_distinct_keys() {
        let mut a = ZobristKey::default();
        a.hash_piece(Square::E4, Piece::new(Color::White, PieceKind::Knight));

        let mut b = ZobristKey::default();
        b.hash_piece(Square::E4, Piece::new(Color::Black, PieceKind::Knight));

        let mut c = ZobristKey::default();
        c.hash_piece(Square::E5, Piece::new(Color::White, PieceKind::Knight));

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn none_slots_still_contribute_a_key() {
        let mut key = ZobristKey::default();
        key.hash_castling_slot(None);
        assert_ne!(key, ZobristKey::default());

        let mut other = ZobristKey::default();
        other.hash_castling_slot(Some(Square::H1));
        assert_ne!(key, other);
    }
}
