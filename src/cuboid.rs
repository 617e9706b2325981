//! Sticker/cycle move engine for the cuboid family.
//!
//! State is a mapping from sticker labels to colors; a move permutes the
//! colors along fixed label cycles or swap pairs. The per-variant tables in
//! this module encode each mechanism's physics as plain data; everything
//! else is generic over them.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::moves::{self, CycleMove, Modifier, UnknownTokens};
use crate::variant::{Family, Variant};

/// A sticker label: face letter plus positional index (e.g. `U1`, `G0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sticker {
    /// Uppercase ASCII face letter.
    pub face: u8,
    /// Position on the face. Most variants count from 1; Pyraminx Duo from 0.
    pub index: u8,
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face as char, self.index)
    }
}

/// Builds a sticker from a two-character label, validated at compile time.
///
/// All callers are `const` tables below, so a malformed label is a build
/// failure rather than a runtime surprise.
const fn st(label: &str) -> Sticker {
    let bytes = label.as_bytes();
    assert!(bytes.len() == 2, "sticker label must be FACE + DIGIT");
    assert!(bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_digit());
    Sticker {
        face: bytes[0],
        index: bytes[1] - b'0',
    }
}

/// A sticker color. Hex codes are what external renderers consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
    NeonGreen,
    Pink,
    SkyBlue,
}

impl Color {
    /// CSS hex code for rendering.
    pub fn hex(self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Yellow => "#FFFF00",
            Color::Orange => "#FF8C00",
            Color::Red => "#FF0000",
            Color::Green => "#00FF00",
            Color::Blue => "#0000FF",
            Color::NeonGreen => "#39FF14",
            Color::Pink => "#FF1493",
            Color::SkyBlue => "#00BFFF",
        }
    }

    /// Single-letter abbreviation for text rendering.
    ///
    /// Unique within any one variant's palette, not across palettes.
    pub fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green | Color::NeonGreen => 'G',
            Color::Blue | Color::SkyBlue => 'B',
            Color::Pink => 'P',
        }
    }
}

/// The effect of turning one face.
#[derive(Clone, Copy)]
enum FaceTurn {
    /// Quarter-turn label cycles: each value shifts one position forward
    /// along the cycle (with wraparound). `'` shifts backward, `2` twice.
    Cycles(&'static [&'static [Sticker]]),
    /// A self-inverse half turn expressed as pairwise swaps. These faces only
    /// admit 180-degree turns, so modifiers carry no extra meaning and the
    /// swap list is applied exactly once per token.
    Swaps(&'static [(Sticker, Sticker)]),
}

/// Face layout: (face letter, first index, last index).
type Layout = &'static [(u8, u8, u8)];

/// Move table: face letter to turn effect.
type MoveTable = &'static [(u8, FaceTurn)];

const CUBOID_1X2X3_LAYOUT: Layout = &[
    (b'U', 1, 2),
    (b'D', 1, 2),
    (b'L', 1, 3),
    (b'R', 1, 3),
    (b'F', 1, 6),
    (b'B', 1, 6),
];

const CUBOID_1X2X3_MOVES: MoveTable = &[
    (
        b'R',
        FaceTurn::Swaps(&[
            (st("F2"), st("B5")),
            (st("R1"), st("R3")),
            (st("U2"), st("D2")),
            (st("B1"), st("F6")),
            (st("F4"), st("B3")),
        ]),
    ),
    (
        b'U',
        FaceTurn::Swaps(&[
            (st("F1"), st("B1")),
            (st("L1"), st("R1")),
            (st("U1"), st("U2")),
            (st("B2"), st("F2")),
        ]),
    ),
    (
        b'D',
        FaceTurn::Swaps(&[
            (st("F5"), st("B5")),
            (st("L3"), st("R3")),
            (st("D1"), st("D2")),
            (st("B6"), st("F6")),
        ]),
    ),
];

const CUBOID_2X2X3_LAYOUT: Layout = &[
    (b'U', 1, 4),
    (b'D', 1, 4),
    (b'L', 1, 6),
    (b'R', 1, 6),
    (b'F', 1, 6),
    (b'B', 1, 6),
];

const CUBOID_2X2X3_MOVES: MoveTable = &[
    (
        b'U',
        FaceTurn::Cycles(&[
            &[st("U1"), st("U2"), st("U4"), st("U3")],
            &[st("L1"), st("B1"), st("R1"), st("F1")],
            &[st("L2"), st("B2"), st("R2"), st("F2")],
        ]),
    ),
    (
        b'D',
        FaceTurn::Cycles(&[
            &[st("D1"), st("D2"), st("D4"), st("D3")],
            &[st("F5"), st("R5"), st("B5"), st("L5")],
            &[st("F6"), st("R6"), st("B6"), st("L6")],
        ]),
    ),
    (
        b'R',
        FaceTurn::Swaps(&[
            (st("U2"), st("D2")),
            (st("U4"), st("D4")),
            (st("F2"), st("B5")),
            (st("F4"), st("B3")),
            (st("F6"), st("B1")),
            (st("R1"), st("R6")),
            (st("R2"), st("R5")),
            (st("R3"), st("R4")),
        ]),
    ),
    (
        b'F',
        FaceTurn::Swaps(&[
            (st("U3"), st("D2")),
            (st("U4"), st("D1")),
            (st("L2"), st("R5")),
            (st("L4"), st("R3")),
            (st("L6"), st("R1")),
            (st("F1"), st("F6")),
            (st("F2"), st("F5")),
            (st("F3"), st("F4")),
        ]),
    ),
    (
        b'B',
        FaceTurn::Swaps(&[
            (st("U1"), st("D4")),
            (st("U2"), st("D3")),
            (st("L1"), st("R6")),
            (st("L3"), st("R4")),
            (st("L5"), st("R2")),
            (st("B1"), st("B6")),
            (st("B2"), st("B5")),
            (st("B3"), st("B4")),
        ]),
    ),
];

const CUBOID_3X3X1_LAYOUT: Layout = &[
    (b'U', 1, 9),
    (b'D', 1, 9),
    (b'L', 1, 3),
    (b'R', 1, 3),
    (b'F', 1, 3),
    (b'B', 1, 3),
];

const CUBOID_3X3X1_MOVES: MoveTable = &[
    (
        b'R',
        FaceTurn::Swaps(&[
            (st("U3"), st("D3")),
            (st("U6"), st("D6")),
            (st("U9"), st("D9")),
            (st("F3"), st("B1")),
            (st("R1"), st("R3")),
        ]),
    ),
    (
        b'L',
        FaceTurn::Swaps(&[
            (st("U1"), st("D1")),
            (st("U4"), st("D4")),
            (st("U7"), st("D7")),
            (st("F1"), st("B3")),
            (st("L1"), st("L3")),
        ]),
    ),
    (
        b'F',
        FaceTurn::Swaps(&[
            (st("U7"), st("D3")),
            (st("U8"), st("D2")),
            (st("U9"), st("D1")),
            (st("L3"), st("R1")),
            (st("F1"), st("F3")),
        ]),
    ),
    (
        b'B',
        FaceTurn::Swaps(&[
            (st("U1"), st("D9")),
            (st("U2"), st("D8")),
            (st("U3"), st("D7")),
            (st("L1"), st("R3")),
            (st("B1"), st("B3")),
        ]),
    ),
];

const CUBOID_3X3X2_LAYOUT: Layout = &[
    (b'U', 1, 9),
    (b'D', 1, 9),
    (b'L', 1, 6),
    (b'R', 1, 6),
    (b'F', 1, 6),
    (b'B', 1, 6),
];

const CUBOID_3X3X2_MOVES: MoveTable = &[
    (
        b'U',
        FaceTurn::Cycles(&[
            &[st("U1"), st("U3"), st("U9"), st("U7")],
            &[st("U2"), st("U6"), st("U8"), st("U4")],
            &[st("F1"), st("L1"), st("B1"), st("R1")],
            &[st("F2"), st("L2"), st("B2"), st("R2")],
            &[st("F3"), st("L3"), st("B3"), st("R3")],
        ]),
    ),
    (
        b'D',
        FaceTurn::Cycles(&[
            &[st("D1"), st("D3"), st("D9"), st("D7")],
            &[st("D2"), st("D6"), st("D8"), st("D4")],
            &[st("F4"), st("R4"), st("B4"), st("L4")],
            &[st("F5"), st("R5"), st("B5"), st("L5")],
            &[st("F6"), st("R6"), st("B6"), st("L6")],
        ]),
    ),
    (
        b'R',
        FaceTurn::Swaps(&[
            (st("U3"), st("D3")),
            (st("U6"), st("D6")),
            (st("U9"), st("D9")),
            (st("F3"), st("B4")),
            (st("F6"), st("B1")),
            (st("R1"), st("R6")),
            (st("R2"), st("R5")),
            (st("R3"), st("R4")),
        ]),
    ),
    (
        b'L',
        FaceTurn::Swaps(&[
            (st("U1"), st("D1")),
            (st("U4"), st("D4")),
            (st("U7"), st("D7")),
            (st("F1"), st("B6")),
            (st("F4"), st("B3")),
            (st("L1"), st("L6")),
            (st("L2"), st("L5")),
            (st("L3"), st("L4")),
        ]),
    ),
    (
        b'F',
        FaceTurn::Swaps(&[
            (st("U7"), st("D3")),
            (st("U8"), st("D2")),
            (st("U9"), st("D1")),
            (st("L3"), st("R4")),
            (st("L6"), st("R1")),
            (st("F1"), st("F6")),
            (st("F2"), st("F5")),
            (st("F3"), st("F4")),
        ]),
    ),
    (
        b'B',
        FaceTurn::Swaps(&[
            (st("U1"), st("D9")),
            (st("U2"), st("D8")),
            (st("U3"), st("D7")),
            (st("L1"), st("R6")),
            (st("L4"), st("R3")),
            (st("B1"), st("B6")),
            (st("B2"), st("B5")),
            (st("B3"), st("B4")),
        ]),
    ),
];

const IVY_LAYOUT: Layout = &[
    (b'U', 1, 3),
    (b'D', 1, 3),
    (b'L', 1, 3),
    (b'R', 1, 3),
    (b'F', 1, 3),
    (b'B', 1, 3),
];

// Note: the Ivy Cube's mechanism turns are L, R, D, and B. The scramble
// alphabet for this variant also emits U moves, which match no table entry
// and therefore leave the state untouched.
const IVY_MOVES: MoveTable = &[
    (
        b'L',
        FaceTurn::Cycles(&[
            &[st("L2"), st("U2"), st("F2")],
            &[st("L3"), st("U1"), st("F1")],
        ]),
    ),
    (
        b'R',
        FaceTurn::Cycles(&[
            &[st("R2"), st("U2"), st("B2")],
            &[st("R3"), st("U3"), st("B1")],
        ]),
    ),
    (
        b'D',
        FaceTurn::Cycles(&[
            &[st("D2"), st("F2"), st("R2")],
            &[st("D3"), st("F3"), st("R1")],
        ]),
    ),
    (
        b'B',
        FaceTurn::Cycles(&[
            &[st("B2"), st("L2"), st("D2")],
            &[st("B3"), st("L1"), st("D1")],
        ]),
    ),
];

const DUO_LAYOUT: Layout = &[(b'G', 0, 3), (b'Y', 0, 3), (b'P', 0, 3), (b'B', 0, 3)];

const DUO_MOVES: MoveTable = &[
    (
        b'U',
        FaceTurn::Cycles(&[
            &[st("G0"), st("B0"), st("P0")],
            &[st("G1"), st("B3"), st("P2")],
        ]),
    ),
    (
        b'R',
        FaceTurn::Cycles(&[
            &[st("G0"), st("P0"), st("Y0")],
            &[st("G3"), st("P1"), st("Y3")],
        ]),
    ),
    (
        b'L',
        FaceTurn::Cycles(&[
            &[st("G0"), st("Y0"), st("B0")],
            &[st("G2"), st("Y2"), st("B1")],
        ]),
    ),
    (
        b'B',
        FaceTurn::Cycles(&[
            &[st("B0"), st("Y0"), st("P0")],
            &[st("B2"), st("Y1"), st("P3")],
        ]),
    ),
];

fn layout(variant: Variant) -> Layout {
    match variant {
        Variant::Cuboid1x2x3 => CUBOID_1X2X3_LAYOUT,
        Variant::Cuboid2x2x3 => CUBOID_2X2X3_LAYOUT,
        Variant::Cuboid3x3x1 => CUBOID_3X3X1_LAYOUT,
        Variant::Cuboid3x3x2 => CUBOID_3X3X2_LAYOUT,
        Variant::IvyCube => IVY_LAYOUT,
        Variant::PyraminxDuo => DUO_LAYOUT,
        _ => panic!("{variant} is not a cuboid-family variant"),
    }
}

fn move_table(variant: Variant) -> MoveTable {
    match variant {
        Variant::Cuboid1x2x3 => CUBOID_1X2X3_MOVES,
        Variant::Cuboid2x2x3 => CUBOID_2X2X3_MOVES,
        Variant::Cuboid3x3x1 => CUBOID_3X3X1_MOVES,
        Variant::Cuboid3x3x2 => CUBOID_3X3X2_MOVES,
        Variant::IvyCube => IVY_MOVES,
        Variant::PyraminxDuo => DUO_MOVES,
        _ => panic!("{variant} is not a cuboid-family variant"),
    }
}

/// Solved color of a face for a given variant.
fn face_color(variant: Variant, face: u8) -> Color {
    if variant == Variant::PyraminxDuo {
        match face {
            b'G' => Color::NeonGreen,
            b'Y' => Color::Yellow,
            b'P' => Color::Pink,
            b'B' => Color::SkyBlue,
            _ => panic!("unknown Pyraminx Duo face {:?}", face as char),
        }
    } else {
        match face {
            b'U' => Color::White,
            b'D' => Color::Yellow,
            b'L' => Color::Orange,
            b'R' => Color::Red,
            b'F' => Color::Green,
            b'B' => Color::Blue,
            _ => panic!("unknown cuboid face {:?}", face as char),
        }
    }
}

/// Sticker state for one cuboid-family puzzle instance.
///
/// The key set is fixed at construction and never changes; moves only permute
/// the values. Two states compare equal when every sticker has the same color,
/// which is how scramble verification tests against the solved snapshot.
#[derive(Clone, PartialEq)]
pub struct CuboidState {
    variant: Variant,
    stickers: FxHashMap<Sticker, Color>,
}

impl CuboidState {
    /// Creates the solved state for a variant.
    ///
    /// Panics for clock-family variants.
    pub fn solved(variant: Variant) -> Self {
        assert_eq!(
            variant.family(),
            Family::Cuboid,
            "{variant} has no sticker state"
        );
        let mut stickers = FxHashMap::default();
        for &(face, first, last) in layout(variant) {
            for index in first..=last {
                stickers.insert(Sticker { face, index }, face_color(variant, face));
            }
        }
        Self { variant, stickers }
    }

    /// Restores every sticker to its face's solved color.
    pub fn reset(&mut self) {
        for (sticker, color) in &mut self.stickers {
            *color = face_color(self.variant, sticker.face);
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True when every sticker shows its face's solved color.
    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .all(|(sticker, &color)| color == face_color(self.variant, sticker.face))
    }

    /// Color currently shown at a sticker position, if the label exists.
    pub fn sticker(&self, face: u8, index: u8) -> Option<Color> {
        self.stickers.get(&Sticker { face, index }).copied()
    }

    /// Iterates sticker positions in layout order (face by face, ascending
    /// index). This is the order external renderers should consume.
    pub fn stickers(&self) -> impl Iterator<Item = (Sticker, Color)> + '_ {
        layout(self.variant).iter().flat_map(move |&(face, first, last)| {
            (first..=last).map(move |index| {
                let sticker = Sticker { face, index };
                (sticker, self.color(sticker))
            })
        })
    }

    /// Parses a move sequence and applies it, dropping stray tokens.
    pub fn apply_sequence(&mut self, text: &str) {
        let parsed =
            moves::parse_cuboid(text, UnknownTokens::Skip).expect("skip policy never rejects");
        for mv in parsed {
            self.apply(mv);
        }
    }

    /// Applies a single parsed move.
    ///
    /// A face letter with no entry in the variant's move table is ignored,
    /// matching the lenient sequence-level behavior.
    pub fn apply(&mut self, mv: CycleMove) {
        let Some(turn) = move_table(self.variant)
            .iter()
            .find(|&&(face, _)| face == mv.face)
            .map(|&(_, turn)| turn)
        else {
            return;
        };
        match turn {
            FaceTurn::Cycles(cycles) => {
                let (repetitions, reverse) = match mv.modifier {
                    Modifier::Clockwise => (1, false),
                    Modifier::Counter => (1, true),
                    Modifier::Double => (2, false),
                };
                for _ in 0..repetitions {
                    for cycle in cycles {
                        self.rotate(cycle, reverse);
                    }
                }
            }
            FaceTurn::Swaps(pairs) => {
                for &(a, b) in pairs {
                    let (ca, cb) = (self.color(a), self.color(b));
                    self.stickers.insert(a, cb);
                    self.stickers.insert(b, ca);
                }
            }
        }
    }

    /// Shifts each color one position forward along the cycle (backward when
    /// `reverse` is set), with wraparound.
    fn rotate(&mut self, cycle: &[Sticker], reverse: bool) {
        let mut order: Vec<Sticker> = cycle.to_vec();
        if reverse {
            order.reverse();
        }
        let carried = self.color(order[order.len() - 1]);
        for i in (1..order.len()).rev() {
            let color = self.color(order[i - 1]);
            self.stickers.insert(order[i], color);
        }
        self.stickers.insert(order[0], carried);
    }

    /// Color at a table-referenced sticker. A miss means a cycle table names
    /// a label outside the variant's layout, which is a table bug.
    fn color(&self, sticker: Sticker) -> Color {
        match self.stickers.get(&sticker) {
            Some(&color) => color,
            None => panic!("move table references unknown sticker {sticker}"),
        }
    }
}

impl fmt::Debug for CuboidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CuboidState({}", self.variant)?;
        for (sticker, color) in self.stickers() {
            write!(f, " {sticker}={}", color.initial())?;
        }
        write!(f, ")")
    }
}
