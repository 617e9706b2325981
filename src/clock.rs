//! Dial/mirror move engine for the clock family.
//!
//! State is a pair of dial-value sequences (front and back), each value in
//! `1..=12`. A turn adds a signed delta to a fixed subset of dials on the
//! active side; dials with a mirror partner mechanically counter-rotate the
//! paired dial on the opposite face. The tables here are static per-variant
//! configuration.

use crate::moves::{self, DialToken, UnknownTokens};
use crate::variant::{Family, Variant};

/// Dial value shown on a solved clock face.
pub const SOLVED_DIAL: u8 = 12;

/// Static per-variant dial configuration.
struct DialTables {
    /// Move name to affected dial positions. Positions are raw labels when a
    /// `label_to_index` map is present, array indices otherwise.
    moves: &'static [(&'static str, &'static [usize])],
    /// Logical dial label to array index. Kept as explicit configuration
    /// rather than derived arithmetic.
    label_to_index: Option<&'static [(usize, usize)]>,
    /// Front dial index to the back dial index it counter-rotates.
    mirror: &'static [(usize, usize)],
}

const TRIANGULAR_TABLES: DialTables = DialTables {
    moves: &[
        ("DR", &[5, 4, 2]),
        ("DL", &[3, 4, 1]),
        ("U", &[0, 1, 2]),
        ("R", &[0, 1, 2, 4, 5]),
        ("D", &[1, 2, 3, 4, 5]),
        ("L", &[0, 1, 2, 3, 4]),
        ("ALL", &[0, 1, 2, 3, 4, 5]),
    ],
    label_to_index: None,
    mirror: &[(0, 0), (3, 5), (5, 3)],
};

const PENTAGONAL_LABEL_TO_INDEX: &[(usize, usize)] = &[
    (1, 0),
    (3, 2),
    (5, 4),
    (7, 6),
    (9, 8),
    (2, 1),
    (4, 3),
    (6, 5),
    (8, 7),
    (10, 9),
];

const PENTAGONAL_TABLES: DialTables = DialTables {
    moves: &[
        ("UR", &[2, 6, 7]),
        ("DR", &[3, 7, 8]),
        ("DL", &[4, 8, 9]),
        ("UL", &[5, 9, 10]),
        ("UM", &[10, 6, 1]),
        ("L", &[5, 4, 9, 10, 1]),
        ("U", &[2, 10, 1, 5, 6]),
        ("R", &[1, 2, 3, 6, 7]),
        ("DRW", &[3, 4, 2, 8, 7]),
        ("DLW", &[5, 4, 3, 8, 9]),
        ("ALL", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
    ],
    label_to_index: Some(PENTAGONAL_LABEL_TO_INDEX),
    mirror: &[(0, 0), (1, 4), (2, 3), (3, 2), (4, 1)],
};

const SUPER_PENTAGONAL_LABEL_TO_INDEX: &[(usize, usize)] = &[
    (1, 0),
    (3, 2),
    (5, 4),
    (7, 6),
    (9, 8),
    (2, 1),
    (4, 3),
    (6, 5),
    (8, 7),
    (10, 9),
    (11, 10),
];

// The Super-Pentagonal adds an 11th dial (label 11) to the corner moves and
// ALL. It has no entry in the mirror table: a front-side turn moves it without
// any back compensation, and it only receives turns directly once the
// sequence has flipped sides.
const SUPER_PENTAGONAL_TABLES: DialTables = DialTables {
    moves: &[
        ("UR", &[2, 6, 7, 11]),
        ("DR", &[3, 7, 8, 11]),
        ("DL", &[4, 8, 9, 11]),
        ("UL", &[5, 9, 10, 11]),
        ("UM", &[10, 6, 1, 11]),
        ("L", &[5, 4, 9, 10, 1]),
        ("U", &[2, 10, 1, 5, 6]),
        ("R", &[1, 2, 3, 6, 7]),
        ("DRW", &[3, 4, 2, 8, 7]),
        ("DLW", &[5, 4, 3, 8, 9]),
        ("ALL", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    ],
    label_to_index: Some(SUPER_PENTAGONAL_LABEL_TO_INDEX),
    mirror: &[(0, 0), (1, 4), (2, 3), (3, 2), (4, 1)],
};

fn tables(variant: Variant) -> &'static DialTables {
    match variant {
        Variant::Triangular => &TRIANGULAR_TABLES,
        Variant::Pentagonal => &PENTAGONAL_TABLES,
        Variant::SuperPentagonal => &SUPER_PENTAGONAL_TABLES,
        _ => panic!("{variant} is not a clock-family variant"),
    }
}

impl DialTables {
    fn lookup(&self, name: &str) -> Option<&'static [usize]> {
        self.moves
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|&(_, positions)| positions)
    }

    /// Resolves a table position to an array index. A label missing from the
    /// index map is a table bug, not a runtime condition.
    fn resolve(&self, position: usize) -> usize {
        match self.label_to_index {
            Some(map) => map
                .iter()
                .find(|&&(label, _)| label == position)
                .map(|&(_, index)| index)
                .unwrap_or_else(|| panic!("dial label {position} missing from index map")),
            None => position,
        }
    }

    fn mirror_of(&self, index: usize) -> Option<usize> {
        self.mirror
            .iter()
            .find(|&&(front, _)| front == index)
            .map(|&(_, back)| back)
    }
}

/// Adds a signed delta to a dial value, staying within `1..=12`.
fn advance(value: u8, delta: i32) -> u8 {
    ((value as i32 + delta - 1).rem_euclid(12) + 1) as u8
}

/// Coupled front/back dial state for one clock-family puzzle instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    variant: Variant,
    front: Vec<u8>,
    back: Vec<u8>,
}

impl ClockState {
    /// Creates the solved state (all dials at 12) for a variant.
    ///
    /// Panics for cuboid-family variants.
    pub fn solved(variant: Variant) -> Self {
        assert_eq!(
            variant.family(),
            Family::Clock,
            "{variant} has no dial state"
        );
        let count = variant.dial_count();
        Self {
            variant,
            front: vec![SOLVED_DIAL; count],
            back: vec![SOLVED_DIAL; count],
        }
    }

    /// Returns both sides to all-12.
    pub fn reset(&mut self) {
        self.front.fill(SOLVED_DIAL);
        self.back.fill(SOLVED_DIAL);
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn front(&self) -> &[u8] {
        &self.front
    }

    pub fn back(&self) -> &[u8] {
        &self.back
    }

    /// True when every dial on both sides reads 12.
    pub fn is_solved(&self) -> bool {
        let all_twelve = |side: &[u8]| side.iter().all(|&v| v == SOLVED_DIAL);
        all_twelve(&self.front) && all_twelve(&self.back)
    }

    /// Replays a move sequence from solved.
    ///
    /// Each call starts from a clean base state rather than accumulating onto
    /// the previous one; a sequence fully determines the resulting state.
    /// Stray tokens are dropped. The side-flip marker toggles which side
    /// subsequent turns act on; mirror compensation applies only while the
    /// front side is active, matching the physical linkage.
    pub fn apply_sequence(&mut self, text: &str) {
        self.reset();
        let tables = tables(self.variant);
        let tokens =
            moves::parse_dial(text, UnknownTokens::Skip).expect("skip policy never rejects");
        let mut on_back = false;
        for token in tokens {
            match token {
                DialToken::SideFlip => on_back = !on_back,
                DialToken::Turn { name, delta } => {
                    let Some(positions) = tables.lookup(name) else {
                        continue;
                    };
                    let (active, other) = if on_back {
                        (&mut self.back, &mut self.front)
                    } else {
                        (&mut self.front, &mut self.back)
                    };
                    for &position in positions {
                        let index = tables.resolve(position);
                        if index >= active.len() {
                            continue;
                        }
                        active[index] = advance(active[index], delta);
                        if !on_back {
                            if let Some(mirror) = tables.mirror_of(index) {
                                other[mirror] = advance(other[mirror], -delta);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOCK_VARIANTS: [Variant; 3] = [
        Variant::Triangular,
        Variant::Pentagonal,
        Variant::SuperPentagonal,
    ];

    #[test]
    fn test_reset_is_idempotent() {
        for variant in CLOCK_VARIANTS {
            let solved = ClockState::solved(variant);
            let mut state = solved.clone();
            state.reset();
            assert_eq!(state, solved);
            state.reset();
            assert_eq!(state, solved);
        }
    }

    #[test]
    fn test_advance_stays_in_clock_range() {
        for value in 1..=12u8 {
            for delta in -30..=30 {
                let result = advance(value, delta);
                assert!((1..=12).contains(&result), "advance({value}, {delta}) = {result}");
            }
        }
        assert_eq!(advance(12, 1), 1);
        assert_eq!(advance(1, -1), 12);
        assert_eq!(advance(12, 6), 6);
        assert_eq!(advance(6, -6), 12);
    }

    #[test]
    fn test_zero_delta_is_a_noop() {
        let mut state = ClockState::solved(Variant::Pentagonal);
        state.apply_sequence("U0+");
        assert!(state.is_solved());
    }

    #[test]
    fn test_every_dial_stays_in_range_after_long_sequences() {
        let mut state = ClockState::solved(Variant::SuperPentagonal);
        state.apply_sequence("ALL6+ UR5- DLw4+ y2 ALL6+ U3- R2+");
        for &value in state.front().iter().chain(state.back()) {
            assert!((1..=12).contains(&value));
        }
    }

    #[test]
    fn test_front_turn_counter_rotates_mirror_partner() {
        // Pentagonal UR affects labels [2, 6, 7] -> indices [1, 5, 6]; only
        // index 1 has a mirror partner (back index 4).
        let mut state = ClockState::solved(Variant::Pentagonal);
        state.apply_sequence("UR1+");
        assert_eq!(state.front()[1], 1);
        assert_eq!(state.front()[5], 1);
        assert_eq!(state.front()[6], 1);
        assert_eq!(state.back()[4], 11);
        let untouched_back: Vec<usize> = (0..10).filter(|&i| i != 4).collect();
        for index in untouched_back {
            assert_eq!(state.back()[index], 12, "back index {index} moved");
        }
    }

    #[test]
    fn test_back_turn_applies_no_compensation() {
        let mut state = ClockState::solved(Variant::Triangular);
        state.apply_sequence("y2 U2+");
        assert_eq!(state.back()[..3], [2, 2, 2]);
        assert!(state.front().iter().all(|&v| v == 12));
    }

    #[test]
    fn test_triangular_flip_scenario() {
        let mut state = ClockState::solved(Variant::Triangular);
        state.apply_sequence("U3+ y2 U3-");
        // front gained +3 on dials 0..3 from the first turn only
        assert_eq!(state.front(), &[3, 3, 3, 12, 12, 12]);
        // back dial 0 took the -3 mirror compensation and then the direct -3
        assert_eq!(state.back(), &[6, 9, 9, 12, 12, 12]);
    }

    #[test]
    fn test_side_flip_marker_is_case_insensitive() {
        let mut lower = ClockState::solved(Variant::Triangular);
        lower.apply_sequence("y2 DR2+");
        let mut upper = ClockState::solved(Variant::Triangular);
        upper.apply_sequence("Y2 DR2+");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_super_pentagonal_extra_dial_has_no_mirror() {
        let mut state = ClockState::solved(Variant::SuperPentagonal);
        state.apply_sequence("UR2+");
        // label 11 -> index 10 moves on the front with no back compensation
        assert_eq!(state.front()[10], 2);
        assert!(state.back().iter().all(|&v| v == 12));
    }

    #[test]
    fn test_super_pentagonal_extra_dial_turns_after_flip() {
        let mut state = ClockState::solved(Variant::SuperPentagonal);
        state.apply_sequence("y2 ALL1+");
        assert!(state.back().iter().all(|&v| v == 1));
        assert!(state.front().iter().all(|&v| v == 12));
    }

    #[test]
    fn test_pentagonal_move_table_has_no_extra_dial() {
        let mut state = ClockState::solved(Variant::Pentagonal);
        state.apply_sequence("ALL3+");
        assert_eq!(state.front().len(), 10);
        assert!(state.front().iter().all(|&v| v == 3));
    }

    #[test]
    fn test_unknown_move_names_are_skipped() {
        let mut state = ClockState::solved(Variant::Triangular);
        state.apply_sequence("QQ3+ U1+");
        assert_eq!(state.front()[..3], [1, 1, 1]);
    }

    #[test]
    fn test_sequences_replay_from_solved_not_accumulate() {
        let mut state = ClockState::solved(Variant::Triangular);
        state.apply_sequence("U3+");
        state.apply_sequence("U3+");
        assert_eq!(state.front()[..3], [3, 3, 3]);
    }
}
