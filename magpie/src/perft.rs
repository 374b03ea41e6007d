/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{GenStage, Move, MoveList, Position};

/// Counts the leaf nodes of the legal game tree `depth` plies below `position`.
///
/// This is the standard correctness stress for move generation: every count is
/// checkable against published tables. The walk is generate, refine, make,
/// king-safety check, recurse, undo; the position comes back exactly as it
/// went in.
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    position.generate(GenStage::All, position.side_to_move(), &mut moves);

    let mut nodes = 0;
    for mv in moves {
        if !position.is_legal(mv) {
            continue;
        }
        position.make_move(mv);
        if !position.moved_into_check() {
            nodes += perft(position, depth - 1);
        }
        position.undo_move(mv);
    }
    nodes
}

/// Like [`perft`], but prints the node count below each root move, sorted by
/// coordinate, before returning the total.
///
/// Diffing this output against another engine's pins a generation bug to a
/// single root move.
pub fn splitperft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    position.generate(GenStage::All, position.side_to_move(), &mut moves);

    let mut tallies: Vec<(Move, u64)> = Vec::new();
    for mv in moves {
        if !position.is_legal(mv) {
            continue;
        }
        position.make_move(mv);
        if !position.moved_into_check() {
            tallies.push((mv, perft(position, depth - 1)));
        }
        position.undo_move(mv);
    }

    tallies.sort_by_key(|(mv, _)| (mv.from().index(), mv.to().index()));

    let mut total = 0;
    for (mv, nodes) in &tallies {
        println!("{mv} {nodes}");
        total += nodes;
    }
    println!("{total}");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FEN_KIWIPETE, FEN_STARTPOS};

    fn assert_perft(fen: &str, expected: &[u64]) {
        let mut position = Position::from_fen(fen).unwrap();
        for (i, &expected_nodes) in expected.iter().enumerate() {
            let depth = i + 1;
            assert_eq!(
                perft(&mut position, depth),
                expected_nodes,
                "perft({depth}) of {fen}"
            );
        }
        // The walk must leave the position untouched.
        assert_eq!(position.to_fen(), fen);
        assert_eq!(position.key(), position.recompute_key());
    }

    #[test]
    fn perft_startpos() {
        assert_perft(FEN_STARTPOS, &[20, 400, 8_902, 197_281]);
    }

    #[test]
    fn perft_kiwipete() {
        assert_perft(FEN_KIWIPETE, &[48, 2_039, 97_862]);
    }

    #[test]
    fn perft_rook_endgame_with_pins_and_en_passant() {
        assert_perft("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2_812, 43_238]);
    }

    #[test]
    fn perft_promotion_heavy_middlegame() {
        assert_perft(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            &[6, 264, 9_467],
        );
    }

    #[test]
    fn perft_underpromotion_and_castling_interplay() {
        assert_perft(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[44, 1_486, 62_379],
        );
    }

    #[test]
    fn perft_quiet_symmetrical_middlegame() {
        assert_perft(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1b1/2B1P1B1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            &[46, 2_079, 89_890],
        );
    }

    #[test]
    fn perft_mirrored_positions_agree() {
        // The promotion-heavy position and its color-mirror must produce
        // identical counts.
        assert_perft(
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
            &[6, 264, 9_467],
        );
    }
}
