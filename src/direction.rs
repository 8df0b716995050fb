use crate::errors::InputError;
use std::fmt;
use std::str::FromStr;

/// Lowest accepted direction code.
pub const DIR_MIN: u8 = 0;
/// Highest accepted direction code.
pub const DIR_MAX: u8 = 5;

/// Placement direction for a word, keyed by its numeric code 0-5.
///
/// The names describe where the downstream generator writes the word; this
/// crate only validates, stores and serializes the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    RightDown,
    RightUp,
}

impl Direction {
    /// The numeric code this direction serializes to.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Up => 3,
            Direction::RightDown => 4,
            Direction::RightUp => 5,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InputError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Right),
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Down),
            3 => Ok(Direction::Up),
            4 => Ok(Direction::RightDown),
            5 => Ok(Direction::RightUp),
            _ => Err(InputError::DirectionOutOfRange {
                value: u32::from(code),
                min: DIR_MIN,
                max: DIR_MAX,
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InputError::Empty);
        }
        if !crate::text::is_numeric(s) {
            return Err(InputError::NotNumeric);
        }
        let code: u32 = s.parse().map_err(|_| InputError::NotNumeric)?;
        let code = u8::try_from(code).map_err(|_| InputError::DirectionOutOfRange {
            value: code,
            min: DIR_MIN,
            max: DIR_MAX,
        })?;
        Direction::try_from(code)
    }
}

impl fmt::Display for Direction {
    // Serialized form is the bare code digit.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in DIR_MIN..=DIR_MAX {
            let dir = Direction::try_from(code).unwrap();
            assert_eq!(dir.code(), code, "code {} did not round-trip", code);
            assert_eq!(dir.to_string(), code.to_string());
        }
    }

    #[test]
    fn test_from_str_accepts_all_codes() {
        assert_eq!("0".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("1".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("2".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("3".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("4".parse::<Direction>().unwrap(), Direction::RightDown);
        assert_eq!("5".parse::<Direction>().unwrap(), Direction::RightUp);
    }

    #[test]
    fn test_from_str_rejects_out_of_range() {
        assert!(matches!(
            "6".parse::<Direction>(),
            Err(InputError::DirectionOutOfRange { value: 6, .. })
        ));
        assert!(matches!(
            "255".parse::<Direction>(),
            Err(InputError::DirectionOutOfRange { value: 255, .. })
        ));
        // Larger than u8 entirely.
        assert!(matches!(
            "1000".parse::<Direction>(),
            Err(InputError::DirectionOutOfRange { value: 1000, .. })
        ));
    }

    #[test]
    fn test_from_str_rejects_non_numeric() {
        for input in ["-1", "+2", "abc", "2 ", " 2", "2.0"] {
            assert!(
                matches!(input.parse::<Direction>(), Err(InputError::NotNumeric)),
                "should reject '{}' as non-numeric",
                input
            );
        }
    }

    #[test]
    fn test_from_str_rejects_empty() {
        assert!(matches!("".parse::<Direction>(), Err(InputError::Empty)));
    }
}
