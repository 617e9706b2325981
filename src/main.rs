//! Twisty-Puzzle Scrambler
//!
//! Generates verified scramble sheets for a fixed catalog of mechanical
//! puzzles: axis-cuboids (1x2x3, 2x2x3, 3x3x1, 3x3x2), the Ivy Cube, the
//! Pyraminx Duo, and clock-style dial puzzles (Triangular, Pentagonal,
//! Super-Pentagonal). Sheets follow the competition round structure of five
//! scrambles plus two extras.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use scrambler::{clock, cuboid, render, scramble, Family, Variant};

/// Scrambles per round before the extra scrambles.
const SCRAMBLES_PER_ROUND: usize = 5;

/// Extra scrambles per round.
const EXTRA_SCRAMBLES: usize = 2;

/// Generates verified scrambles for twisty puzzles.
#[derive(Parser)]
#[command(name = "scrambler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for reproducible output; OS entropy when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a scramble sheet for a puzzle variant.
    Generate {
        /// Puzzle variant key (see `scrambler variants`).
        variant: Variant,
        /// Number of rounds to generate.
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Print the resulting puzzle state under each scramble.
        #[arg(long)]
        show_state: bool,
    },
    /// Apply a move sequence to a solved puzzle and print the state.
    Apply {
        /// Puzzle variant key (see `scrambler variants`).
        variant: Variant,
        /// Move sequence, e.g. `U R2 U' F2` or `U3+ y2 DR2-`.
        moves: Vec<String>,
    },
    /// List the supported puzzle variants.
    Variants,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Generate {
            variant,
            rounds,
            show_state,
        } => run_generate(variant, rounds, show_state, &mut rng),
        Command::Apply { variant, moves } => run_apply(variant, &moves.join(" ")),
        Command::Variants => run_variants(),
    }
}

/// Prints `rounds` scramble sheets for a variant.
fn run_generate(variant: Variant, rounds: u32, show_state: bool, rng: &mut StdRng) {
    for round in 1..=rounds {
        println!("{variant} Round {round}");
        println!();
        for i in 1..=SCRAMBLES_PER_ROUND + EXTRA_SCRAMBLES {
            if i == SCRAMBLES_PER_ROUND + 1 {
                println!();
                println!("Extra scrambles");
            }
            let label = if i <= SCRAMBLES_PER_ROUND {
                format!("{i}")
            } else {
                format!("E{}", i - SCRAMBLES_PER_ROUND)
            };
            let sequence = match scramble::generate(variant, rng) {
                Ok(sequence) => sequence,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            println!("{label:>2}. {sequence}");
            if show_state {
                print_indented(&render_state(variant, &sequence));
            }
        }
        println!();
    }
}

/// Applies a sequence to a solved puzzle and prints the rendered state.
fn run_apply(variant: Variant, sequence: &str) {
    print!("{}", render_state(variant, sequence));
}

/// Lists variant keys and display names.
fn run_variants() {
    for variant in Variant::ALL {
        println!("{:<18} {variant}", variant.key());
    }
}

/// Replays a sequence from solved and renders the final state.
fn render_state(variant: Variant, sequence: &str) -> String {
    match variant.family() {
        Family::Cuboid => {
            let mut state = cuboid::CuboidState::solved(variant);
            state.apply_sequence(sequence);
            render::format_cuboid(&state)
        }
        Family::Clock => {
            let mut state = clock::ClockState::solved(variant);
            state.apply_sequence(sequence);
            render::format_clock(&state)
        }
    }
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("    {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_replays_from_solved() {
        let output = render_state(Variant::Cuboid3x3x2, "R R");
        assert_eq!(output, render_state(Variant::Cuboid3x3x2, ""));
    }

    #[test]
    fn test_render_state_handles_both_families() {
        assert!(render_state(Variant::PyraminxDuo, "U").starts_with("G:"));
        assert!(render_state(Variant::Pentagonal, "U1+").starts_with("front:"));
    }
}
