//! Scramble generation.
//!
//! Produces random, constraint-valid move sequences per variant and verifies
//! each one by full replay against the solved snapshot before handing it out.
//! Degenerate sequences (replay equals solved) are regenerated; a retry
//! ceiling turns the theoretically unbounded loop into an explicit failure.

use rand::Rng;

use crate::clock::ClockState;
use crate::cuboid::CuboidState;
use crate::moves::SIDE_FLIP;
use crate::variant::{Family, Variant};

/// Whole-sequence regeneration attempts before giving up.
///
/// The rejection constraints make a degenerate scramble rare even for the
/// smallest move alphabets; hitting this ceiling indicates a broken move
/// table rather than bad luck.
const MAX_ATTEMPTS: u32 = 100;

/// Draws per sequence before the attempt is abandoned.
const MAX_DRAWS: u32 = 10_000;

/// Scramble generation failure.
#[derive(Debug, thiserror::Error)]
pub enum ScrambleError {
    #[error("could not generate a non-degenerate {variant} scramble in {attempts} attempts")]
    RetriesExhausted { variant: Variant, attempts: u32 },
}

/// Cuboid-family generation parameters: legal move alphabet plus the
/// inclusive sequence-length range to draw from.
struct CuboidScramble {
    alphabet: &'static [&'static str],
    min_len: usize,
    max_len: usize,
}

fn cuboid_scramble(variant: Variant) -> CuboidScramble {
    match variant {
        Variant::Cuboid1x2x3 => CuboidScramble {
            alphabet: &["U2", "D2", "R2"],
            min_len: 8,
            max_len: 10,
        },
        Variant::Cuboid2x2x3 => CuboidScramble {
            alphabet: &["U", "U'", "U2", "D", "D'", "D2", "R2", "F2"],
            min_len: 10,
            max_len: 13,
        },
        Variant::Cuboid3x3x1 => CuboidScramble {
            alphabet: &["R", "L", "F", "B"],
            min_len: 4,
            max_len: 8,
        },
        Variant::Cuboid3x3x2 => CuboidScramble {
            alphabet: &["U", "U'", "U2", "R2", "L2", "F2", "B2"],
            min_len: 25,
            max_len: 25,
        },
        Variant::IvyCube => CuboidScramble {
            alphabet: &["R", "R'", "L", "L'", "U", "U'", "B", "B'"],
            min_len: 7,
            max_len: 10,
        },
        Variant::PyraminxDuo => CuboidScramble {
            alphabet: &["U", "U'", "L", "L'", "R", "R'", "B", "B'"],
            min_len: 6,
            max_len: 7,
        },
        _ => panic!("{variant} is not a cuboid-family variant"),
    }
}

/// Clock-family generation parameters: every alphabet entry is emitted exactly
/// once per segment, in order, so each scramble exercises the full mechanism.
/// The back segment excludes the corner moves that only make sense pre-flip.
struct ClockScramble {
    front: &'static [&'static str],
    back: &'static [&'static str],
}

fn clock_scramble(variant: Variant) -> ClockScramble {
    match variant {
        Variant::Triangular => ClockScramble {
            front: &["DR", "DL", "U", "R", "D", "L", "ALL"],
            back: &["DR", "DL", "U", "ALL"],
        },
        Variant::Pentagonal | Variant::SuperPentagonal => ClockScramble {
            front: &[
                "UR", "DR", "DL", "UL", "UM", "L", "U", "R", "DRw", "DLw", "ALL",
            ],
            back: &["L", "U", "R", "DRw", "DLw", "ALL"],
        },
        _ => panic!("{variant} is not a clock-family variant"),
    }
}

/// Generates a verified scramble sequence for any variant.
pub fn generate(variant: Variant, rng: &mut impl Rng) -> Result<String, ScrambleError> {
    match variant.family() {
        Family::Cuboid => generate_cuboid(variant, rng),
        Family::Clock => generate_clock(variant, rng),
    }
}

/// Generate-and-test loop for the cuboid family: rejection-sample a sequence,
/// replay it from solved, and keep it only if the result is scrambled.
fn generate_cuboid(variant: Variant, rng: &mut impl Rng) -> Result<String, ScrambleError> {
    let params = cuboid_scramble(variant);
    let solved = CuboidState::solved(variant);

    for _ in 0..MAX_ATTEMPTS {
        let length = rng.gen_range(params.min_len..=params.max_len);
        let Some(sequence) = draw_sequence(variant, &params, length, rng) else {
            continue;
        };
        let text = sequence.join(" ");

        let mut state = solved.clone();
        state.apply_sequence(&text);
        if state != solved {
            return Ok(text);
        }
        log::debug!("degenerate {variant} scramble {text:?}, regenerating");
    }

    Err(ScrambleError::RetriesExhausted {
        variant,
        attempts: MAX_ATTEMPTS,
    })
}

/// Rejection-samples one candidate sequence, or `None` if the draw budget ran
/// out before reaching the target length.
fn draw_sequence(
    variant: Variant,
    params: &CuboidScramble,
    length: usize,
    rng: &mut impl Rng,
) -> Option<Vec<&'static str>> {
    let mut sequence: Vec<&'static str> = Vec::with_capacity(length);
    let mut draws = 0;
    while sequence.len() < length {
        draws += 1;
        if draws > MAX_DRAWS {
            return None;
        }
        let candidate = params.alphabet[rng.gen_range(0..params.alphabet.len())];
        if rejects(variant, &sequence, candidate) {
            continue;
        }
        sequence.push(candidate);
    }
    Some(sequence)
}

/// Per-variant rejection rules, applied to the candidate against the sequence
/// built so far. Faces are compared by their leading letter.
fn rejects(variant: Variant, sequence: &[&str], candidate: &str) -> bool {
    let face = |m: &str| m.as_bytes()[0];
    let candidate_face = face(candidate);

    // no two consecutive moves on the same face
    if let Some(&last) = sequence.last() {
        if face(last) == candidate_face {
            return true;
        }
    }

    if sequence.len() >= 2 {
        let two_back = face(sequence[sequence.len() - 2]);
        let previous = face(sequence[sequence.len() - 1]);

        // no U,D,U or D,U,D alternation across three moves
        let triple = [two_back, previous, candidate_face];
        if triple == [b'U', b'D', b'U'] || triple == [b'D', b'U', b'D'] {
            return true;
        }

        // 3x3x2 only: an echo of the same face at distance two is rejected
        // when that face pair lies on the R/L or F/B axis
        if variant == Variant::Cuboid3x3x2
            && two_back == candidate_face
            && opposite_faces(two_back, candidate_face)
        {
            return true;
        }
    }

    false
}

fn opposite_faces(a: u8, b: u8) -> bool {
    matches!(
        (a, b),
        (b'R', b'L') | (b'L', b'R') | (b'F', b'B') | (b'B', b'F')
    )
}

/// Builds a clock scramble: a front segment over the full alphabet, the
/// side-flip marker, then the reduced back segment. No per-move rejection is
/// applied; only the final replay check can trigger a retry.
fn generate_clock(variant: Variant, rng: &mut impl Rng) -> Result<String, ScrambleError> {
    let params = clock_scramble(variant);
    let mut state = ClockState::solved(variant);

    for _ in 0..MAX_ATTEMPTS {
        let mut tokens: Vec<String> = Vec::with_capacity(params.front.len() + params.back.len() + 1);
        tokens.extend(params.front.iter().map(|name| dial_token(name, rng)));
        tokens.push(SIDE_FLIP.to_string());
        tokens.extend(params.back.iter().map(|name| dial_token(name, rng)));
        let text = tokens.join(" ");

        state.apply_sequence(&text);
        if !state.is_solved() {
            return Ok(text);
        }
        log::debug!("degenerate {variant} scramble {text:?}, regenerating");
    }

    Err(ScrambleError::RetriesExhausted {
        variant,
        attempts: MAX_ATTEMPTS,
    })
}

/// One dial move token: name, magnitude in `0..=6`, sign.
///
/// The sign is forced to `+` at the extremes, since `+0` and `-0` are the
/// same turn and `+6` and `-6` reach the same dial value; this keeps every
/// turn's textual encoding unique.
fn dial_token(name: &str, rng: &mut impl Rng) -> String {
    let magnitude: u8 = rng.gen_range(0..=6);
    let sign = if magnitude == 0 || magnitude == 6 || rng.gen_bool(0.5) {
        '+'
    } else {
        '-'
    };
    format!("{name}{magnitude}{sign}")
}
