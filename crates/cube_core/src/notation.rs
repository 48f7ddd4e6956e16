//! Move notation such as `R U R' U'`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MoveKey;

/// Quarter turn of one face.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to turn.
    pub key: MoveKey,
    /// Whether to turn counterclockwise instead of clockwise.
    pub reversed: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if self.reversed {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)?.as_slice() {
            [mv] => Ok(*mv),
            _ => Err(ParseMoveError::NotQuarterTurn(s.to_owned())),
        }
    }
}

impl Move {
    /// Clockwise quarter turn of `key`.
    pub const fn cw(key: MoveKey) -> Self {
        Self {
            key,
            reversed: false,
        }
    }
    /// Counterclockwise quarter turn of `key`.
    pub const fn ccw(key: MoveKey) -> Self {
        Self {
            key,
            reversed: true,
        }
    }
    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }
}

/// Error encountered while parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The input contains no moves.
    #[error("empty move")]
    Empty,
    /// A move starts with a letter that is not a face.
    #[error("unknown face {0:?}")]
    UnknownFace(char),
    /// A move has a suffix other than `'`, `2`, or `2'`.
    #[error("invalid suffix {suffix:?} on move {token:?}")]
    BadSuffix {
        /// Whole move token.
        token: String,
        /// Unrecognized suffix.
        suffix: String,
    },
    /// A single quarter turn was expected.
    #[error("{0:?} is not a single quarter turn")]
    NotQuarterTurn(String),
}

/// Parses whitespace-separated moves. Face letters are case-insensitive;
/// `'` reverses a move and `2` doubles it.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut ret = vec![];
    for token in s.split_whitespace() {
        ret.extend(parse_token(token)?);
    }
    Ok(ret)
}

fn parse_token(token: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut chars = token.chars();
    let c = chars.next().ok_or(ParseMoveError::Empty)?;
    let key = MoveKey::from_char(c).ok_or(ParseMoveError::UnknownFace(c))?;
    match chars.as_str() {
        "" => Ok(vec![Move::cw(key)]),
        "'" => Ok(vec![Move::ccw(key)]),
        "2" | "2'" => Ok(vec![Move::cw(key); 2]),
        suffix => Err(ParseMoveError::BadSuffix {
            token: token.to_owned(),
            suffix: suffix.to_owned(),
        }),
    }
}

/// Returns the sequence of moves that undoes `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CubeState;

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("R U' f2  b").unwrap();
        assert_eq!(
            vec![
                Move::cw(MoveKey::R),
                Move::ccw(MoveKey::U),
                Move::cw(MoveKey::F),
                Move::cw(MoveKey::F),
                Move::cw(MoveKey::B),
            ],
            moves,
        );
        assert_eq!(Ok(vec![]), parse_moves("   "));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(ParseMoveError::UnknownFace('x')), parse_moves("R x"));
        assert_eq!(
            Err(ParseMoveError::BadSuffix {
                token: "U3".to_owned(),
                suffix: "3".to_owned(),
            }),
            parse_moves("U3"),
        );
        assert_eq!(
            Err(ParseMoveError::NotQuarterTurn("D2".to_owned())),
            "D2".parse::<Move>(),
        );
        assert_eq!(Err(ParseMoveError::Empty), "".parse::<Move>());
    }

    #[test]
    fn test_display_roundtrip() {
        for key in MoveKey::ALL {
            for mv in [Move::cw(key), Move::ccw(key)] {
                assert_eq!(Ok(mv), mv.to_string().parse());
            }
        }
        assert_eq!("L'", Move::ccw(MoveKey::L).to_string());
    }

    #[test]
    fn test_invert_sequence() {
        let moves = parse_moves("R U F' D2 L B'").unwrap();
        let mut state = CubeState::solved();
        state.apply_moves(moves.iter().copied());
        assert!(!state.is_solved());
        state.apply_moves(invert_sequence(&moves));
        assert!(state.is_solved());
    }
}
