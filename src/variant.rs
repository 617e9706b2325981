//! Puzzle variant catalog.
//!
//! Every supported puzzle is a fixed, enumerable topology. The variant tag
//! selects the static move tables used by the two engine families; nothing
//! about a puzzle is defined at runtime.

use std::fmt;
use std::str::FromStr;

/// The two engine families sharing the discrete-state + move-operator shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Sticker permutations driven by cycle/swap tables.
    Cuboid,
    /// Coupled front/back dial values driven by delta tables.
    Clock,
}

/// A supported puzzle variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Cuboid1x2x3,
    Cuboid2x2x3,
    Cuboid3x3x1,
    Cuboid3x3x2,
    IvyCube,
    PyraminxDuo,
    Triangular,
    Pentagonal,
    SuperPentagonal,
}

impl Variant {
    /// All variants, in presentation order.
    pub const ALL: [Variant; 9] = [
        Variant::Cuboid1x2x3,
        Variant::Cuboid2x2x3,
        Variant::Cuboid3x3x1,
        Variant::Cuboid3x3x2,
        Variant::IvyCube,
        Variant::PyraminxDuo,
        Variant::Triangular,
        Variant::Pentagonal,
        Variant::SuperPentagonal,
    ];

    /// Which engine family this variant belongs to.
    pub fn family(self) -> Family {
        match self {
            Variant::Cuboid1x2x3
            | Variant::Cuboid2x2x3
            | Variant::Cuboid3x3x1
            | Variant::Cuboid3x3x2
            | Variant::IvyCube
            | Variant::PyraminxDuo => Family::Cuboid,
            Variant::Triangular | Variant::Pentagonal | Variant::SuperPentagonal => Family::Clock,
        }
    }

    /// Short key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Variant::Cuboid1x2x3 => "1x2x3",
            Variant::Cuboid2x2x3 => "2x2x3",
            Variant::Cuboid3x3x1 => "3x3x1",
            Variant::Cuboid3x3x2 => "3x3x2",
            Variant::IvyCube => "ivy",
            Variant::PyraminxDuo => "duo",
            Variant::Triangular => "triangular",
            Variant::Pentagonal => "pentagonal",
            Variant::SuperPentagonal => "super-pentagonal",
        }
    }

    /// Number of dials per side for clock variants.
    ///
    /// Panics for cuboid-family variants, which have no dials.
    pub fn dial_count(self) -> usize {
        match self {
            Variant::Triangular => 6,
            Variant::Pentagonal => 10,
            Variant::SuperPentagonal => 11,
            _ => panic!("{self} has no dials"),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Cuboid1x2x3 => "1x2x3 Cuboid",
            Variant::Cuboid2x2x3 => "2x2x3 Cuboid",
            Variant::Cuboid3x3x1 => "3x3x1 Cuboid",
            Variant::Cuboid3x3x2 => "3x3x2 Cuboid",
            Variant::IvyCube => "Ivy Cube",
            Variant::PyraminxDuo => "Pyraminx Duo",
            Variant::Triangular => "Triangular Clock",
            Variant::Pentagonal => "Pentagonal Clock",
            Variant::SuperPentagonal => "Super-Pentagonal Clock",
        };
        f.write_str(name)
    }
}

/// Error for a variant key that matches nothing in the catalog.
#[derive(Debug, thiserror::Error)]
#[error("unknown puzzle variant {0:?} (see `scrambler variants`)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| s.eq_ignore_ascii_case(v.key()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip_through_from_str() {
        for variant in Variant::ALL {
            let parsed: Variant = variant.key().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("IVY".parse::<Variant>().unwrap(), Variant::IvyCube);
        assert_eq!(
            "Super-Pentagonal".parse::<Variant>().unwrap(),
            Variant::SuperPentagonal
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!("4x4x4".parse::<Variant>().is_err());
    }

    #[test]
    fn test_dial_counts() {
        assert_eq!(Variant::Triangular.dial_count(), 6);
        assert_eq!(Variant::Pentagonal.dial_count(), 10);
        assert_eq!(Variant::SuperPentagonal.dial_count(), 11);
    }
}
