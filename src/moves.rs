//! Move notation tokenizer.
//!
//! Both engine families consume whitespace-separated textual move sequences.
//! Tokens are validated once here into typed values; the engines never re-match
//! raw text. Tokens that fit no grammar are handled per an explicit
//! [`UnknownTokens`] policy instead of silently falling through ad hoc parsing.

use std::fmt;

/// Turn direction/magnitude suffix on a cuboid move token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// No suffix: one quarter turn clockwise.
    Clockwise,
    /// `'` suffix: one quarter turn counterclockwise.
    Counter,
    /// `2` suffix: a half turn (two quarter turns).
    Double,
}

/// A parsed cuboid-family move: a face letter plus a turn modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleMove {
    /// Uppercase ASCII face letter.
    pub face: u8,
    pub modifier: Modifier,
}

impl fmt::Display for CycleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.modifier {
            Modifier::Clockwise => "",
            Modifier::Counter => "'",
            Modifier::Double => "2",
        };
        write!(f, "{}{}", self.face as char, suffix)
    }
}

/// A parsed clock-family token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialToken<'a> {
    /// The side-flip marker: subsequent turns act on the opposite side.
    SideFlip,
    /// A dial turn: move name plus signed delta.
    Turn { name: &'a str, delta: i32 },
}

/// The side-flip marker token (matched case-insensitively).
pub const SIDE_FLIP: &str = "y2";

/// What to do with a token that fits no grammar.
///
/// Generated sequences are well formed, so unknown tokens only arise from
/// hand-typed input; the engines default to [`UnknownTokens::Skip`] and keep
/// processing the rest of the sequence either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownTokens {
    /// Drop the token silently.
    #[default]
    Skip,
    /// Drop the token after logging a warning.
    Warn,
    /// Stop and report the token.
    Reject,
}

/// Error produced under [`UnknownTokens::Reject`].
#[derive(Debug, thiserror::Error)]
#[error("unrecognized move token {token:?}")]
pub struct UnknownToken {
    pub token: String,
}

/// Parses a cuboid move sequence.
///
/// Each whitespace-separated token must be a single ASCII letter followed by
/// an optional `2` or `'`, matched case-insensitively. Whether the letter is
/// a legal face for the puzzle at hand is decided later by the move-table
/// lookup, not here.
pub fn parse_cuboid(text: &str, policy: UnknownTokens) -> Result<Vec<CycleMove>, UnknownToken> {
    let mut moves = Vec::new();
    for token in text.split_whitespace() {
        match parse_cuboid_token(token) {
            Some(mv) => moves.push(mv),
            None => handle_unknown(token, policy)?,
        }
    }
    Ok(moves)
}

fn parse_cuboid_token(token: &str) -> Option<CycleMove> {
    let bytes = token.as_bytes();
    let (&face, rest) = bytes.split_first()?;
    if !face.is_ascii_alphabetic() {
        return None;
    }
    let modifier = match rest {
        [] => Modifier::Clockwise,
        [b'2'] => Modifier::Double,
        [b'\''] => Modifier::Counter,
        _ => return None,
    };
    Some(CycleMove {
        face: face.to_ascii_uppercase(),
        modifier,
    })
}

/// Parses a clock dial move sequence.
///
/// Each token is either the side-flip marker or `LETTERS DIGITS SIGN`, where
/// the sign is `+`, `-`, or the typographic minus `−`.
pub fn parse_dial(text: &str, policy: UnknownTokens) -> Result<Vec<DialToken<'_>>, UnknownToken> {
    let mut tokens = Vec::new();
    for token in text.split_whitespace() {
        if token.eq_ignore_ascii_case(SIDE_FLIP) {
            tokens.push(DialToken::SideFlip);
        } else {
            match parse_dial_token(token) {
                Some(turn) => tokens.push(turn),
                None => handle_unknown(token, policy)?,
            }
        }
    }
    Ok(tokens)
}

fn parse_dial_token(token: &str) -> Option<DialToken<'_>> {
    let name_len = token
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    let (name, rest) = token.split_at(name_len);
    let digit_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    let (digits, sign) = rest.split_at(digit_len);
    if name.is_empty() || digits.is_empty() {
        return None;
    }
    let magnitude: i32 = digits.parse().ok()?;
    let delta = match sign {
        "+" => magnitude,
        "-" | "\u{2212}" => -magnitude,
        _ => return None,
    };
    Some(DialToken::Turn { name, delta })
}

fn handle_unknown(token: &str, policy: UnknownTokens) -> Result<(), UnknownToken> {
    match policy {
        UnknownTokens::Skip => Ok(()),
        UnknownTokens::Warn => {
            log::warn!("skipping unrecognized move token {token:?}");
            Ok(())
        }
        UnknownTokens::Reject => Err(UnknownToken {
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_tokens_parse_with_modifiers() {
        let moves = parse_cuboid("U R2 f' b", UnknownTokens::Reject).unwrap();
        assert_eq!(
            moves,
            vec![
                CycleMove { face: b'U', modifier: Modifier::Clockwise },
                CycleMove { face: b'R', modifier: Modifier::Double },
                CycleMove { face: b'F', modifier: Modifier::Counter },
                CycleMove { face: b'B', modifier: Modifier::Clockwise },
            ]
        );
    }

    #[test]
    fn test_cuboid_skip_policy_drops_bad_tokens() {
        let moves = parse_cuboid("U xx R2' 3 R2", UnknownTokens::Skip).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[1], CycleMove { face: b'R', modifier: Modifier::Double });
    }

    #[test]
    fn test_cuboid_reject_policy_names_the_token() {
        let err = parse_cuboid("U xx", UnknownTokens::Reject).unwrap_err();
        assert_eq!(err.token, "xx");
    }

    #[test]
    fn test_dial_tokens_parse_names_deltas_and_flip() {
        let tokens = parse_dial("DRw3+ ALL0+ Y2 U5-", UnknownTokens::Reject).unwrap();
        assert_eq!(
            tokens,
            vec![
                DialToken::Turn { name: "DRw", delta: 3 },
                DialToken::Turn { name: "ALL", delta: 0 },
                DialToken::SideFlip,
                DialToken::Turn { name: "U", delta: -5 },
            ]
        );
    }

    #[test]
    fn test_dial_accepts_typographic_minus() {
        let tokens = parse_dial("U4\u{2212}", UnknownTokens::Reject).unwrap();
        assert_eq!(tokens, vec![DialToken::Turn { name: "U", delta: -4 }]);
    }

    #[test]
    fn test_dial_malformed_tokens_follow_policy() {
        assert_eq!(parse_dial("U+ 3+ U3 U3*", UnknownTokens::Skip).unwrap(), vec![]);
        assert!(parse_dial("U3", UnknownTokens::Reject).is_err());
    }

    #[test]
    fn test_cycle_move_display_roundtrips() {
        for token in ["U", "U'", "U2", "R2"] {
            let mv = parse_cuboid(token, UnknownTokens::Reject).unwrap()[0];
            assert_eq!(mv.to_string(), token);
        }
    }
}
