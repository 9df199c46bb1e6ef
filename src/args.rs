//! Command-line argument types.

use std::str::FromStr;

use crate::geometry::{parse_coordinates, ParseError, Point};

/// A fill request in the form `X,Y` or `X,Y,C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FillArg {
    pub seed: Point,

    /// `None` if the configured filler should be used.
    pub filler: Option<char>,
}

impl FromStr for FillArg {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let coordinates = parts
            .by_ref()
            .take(2)
            .collect::<Vec<_>>()
            .join(",");

        let seed = match parse_coordinates(&coordinates, 2)?[..] {
            [x, y] => Point::new(x, y),
            _ => unreachable!(),
        };

        let filler = match parts.next() {
            None => None,
            Some(filler) => {
                let mut chars = filler.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(ParseError::Filler(filler.to_owned())),
                }
            }
        };

        Ok(FillArg { seed, filler })
    }
}
