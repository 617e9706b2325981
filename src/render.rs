//! Plain-text rendering of puzzle state snapshots.
//!
//! The engine is agnostic to geometry; these helpers turn a snapshot into a
//! line-per-face (or line-per-side) listing for terminals and tests. Anything
//! layout-aware lives outside the crate and consumes the snapshot directly.

use crate::clock::ClockState;
use crate::cuboid::CuboidState;

/// Formats a sticker state as one line per face: the face letter followed by
/// the color initial of each sticker in ascending index order.
pub fn format_cuboid(state: &CuboidState) -> String {
    let mut output = String::new();
    let mut current_face = 0u8;
    for (sticker, color) in state.stickers() {
        if sticker.face != current_face {
            if current_face != 0 {
                output.push('\n');
            }
            output.push(sticker.face as char);
            output.push(':');
            current_face = sticker.face;
        }
        output.push(' ');
        output.push(color.initial());
    }
    output.push('\n');
    output
}

/// Formats a dial state as two lines of values, front then back.
pub fn format_clock(state: &ClockState) -> String {
    let row = |side: &[u8]| {
        side.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!(
        "front: {}\nback:  {}\n",
        row(state.front()),
        row(state.back())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_solved_3x3x2_rendering() {
        let state = CuboidState::solved(Variant::Cuboid3x3x2);
        insta::assert_snapshot!(format_cuboid(&state), @r###"
        U: W W W W W W W W W
        D: Y Y Y Y Y Y Y Y Y
        L: O O O O O O
        R: R R R R R R
        F: G G G G G G
        B: B B B B B B
        "###);
    }

    #[test]
    fn test_3x3x2_rendering_after_r_turn() {
        let mut state = CuboidState::solved(Variant::Cuboid3x3x2);
        state.apply_sequence("R");
        insta::assert_snapshot!(format_cuboid(&state), @r###"
        U: W W Y W W Y W W Y
        D: Y Y W Y Y W Y Y W
        L: O O O O O O
        R: R R R R R R
        F: G G B G G B
        B: G B B G B B
        "###);
    }

    #[test]
    fn test_solved_duo_rendering() {
        let state = CuboidState::solved(Variant::PyraminxDuo);
        insta::assert_snapshot!(format_cuboid(&state), @r###"
        G: G G G G
        Y: Y Y Y Y
        P: P P P P
        B: B B B B
        "###);
    }

    #[test]
    fn test_clock_rendering_shows_both_sides() {
        let mut state = ClockState::solved(Variant::Triangular);
        state.apply_sequence("U3+");
        insta::assert_snapshot!(format_clock(&state), @r###"
        front: 3 3 3 12 12 12
        back:  9 12 12 12 12 12
        "###);
    }
}
