/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use magpie_types::*;

/// Attack lookups (leaper tables, rays, magic bitboards) and staged pseudo-legal move generation.
mod movegen;
/// A packed move encoding with a mutable ordering key, plus the move-list alias.
mod moves;
/// Utility functions for performance testing.
mod perft;
/// A chessboard, complete with piece placements, make/undo history, and game state information.
mod position;
/// Zobrist keys for hashing chess positions.
mod zobrist;

pub use movegen::*;
pub use moves::*;
pub use perft::*;
pub use position::*;
pub use zobrist::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::perft::*;
    pub use crate::position::*;
    pub use crate::zobrist::*;
    pub use magpie_types::*;
}
