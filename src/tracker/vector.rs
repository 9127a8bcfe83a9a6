// Comma-separated owned-count vectors, as typed by the user or carried in the address bar.
use std::fmt;

use crate::{Error, Result};

/// One cell of a comparison vector. Anything that did not parse as a
/// base-10 integer is `Unknown` and never counts as a valid owned count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareCell {
    Known(i32),
    Unknown,
}

impl CompareCell {
    pub fn known(self) -> Option<i32> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for CompareCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => write!(f, "{v}"),
            Self::Unknown => f.write_str("?"),
        }
    }
}

/// Every token must be an integer; the first bad token rejects the whole text.
pub fn parse_strict(text: &str) -> Result<Vec<i32>> {
    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            token.trim().parse::<i32>().map_err(|_| Error::InvalidToken {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Bad tokens become [`CompareCell::Unknown`] instead of failing.
pub fn parse_lenient(text: &str) -> Vec<CompareCell> {
    text.split(',')
        .map(|token| match token.trim().parse::<i32>() {
            Ok(v) => CompareCell::Known(v),
            Err(_) => CompareCell::Unknown,
        })
        .collect()
}

pub fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_signed_integers_with_spaces() {
        assert_eq!(parse_strict("5, -1 ,3").unwrap(), vec![5, -1, 3]);
    }

    #[test]
    fn strict_reports_first_bad_token() {
        match parse_strict("1,a,3") {
            Err(Error::InvalidToken { token, position }) => {
                assert_eq!(token, "a");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_strict("").is_err());
        assert!(parse_strict("1,,2").is_err());
        assert!(parse_strict("1.5").is_err());
    }

    #[test]
    fn lenient_marks_bad_tokens_unknown() {
        assert_eq!(
            parse_lenient("1,a,-1"),
            vec![CompareCell::Known(1), CompareCell::Unknown, CompareCell::Known(-1)]
        );
    }

    #[test]
    fn join_matches_input_shape() {
        assert_eq!(join(&[5, -1, 3]), "5,-1,3");
        assert_eq!(join(&[CompareCell::Known(2), CompareCell::Unknown]), "2,?");
        assert_eq!(join::<i32>(&[]), "");
    }
}
