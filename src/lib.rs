//! Twisty-Puzzle Scramble Engine
//!
//! Models a fixed catalog of mechanical puzzles (axis-cuboids, the Ivy Cube,
//! the Pyraminx Duo, and clock-style dial puzzles) and generates randomized,
//! replay-verified scramble sequences for competitive use.
//!
//! Two engine families share the discrete-state + move-operator shape:
//! [`cuboid`] permutes sticker colors along fixed label cycles, and [`clock`]
//! applies signed deltas to coupled front/back dial values. [`scramble`]
//! drives both through a generate-and-test loop, and [`render`] turns state
//! snapshots into plain text for callers without a graphical renderer.

pub mod clock;
pub mod cuboid;
pub mod moves;
pub mod render;
pub mod scramble;
pub mod variant;

pub use clock::ClockState;
pub use cuboid::CuboidState;
pub use scramble::{generate, ScrambleError};
pub use variant::{Family, Variant};
