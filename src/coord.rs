// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

pub const EXIT_COMMAND: &str = "exit";

// Only parse_command makes these, so a Coord always fits the board it was
// checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    #[inline(always)]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline(always)]
    pub fn col(&self) -> usize {
        self.col
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Mark(Coord),
}

fn parse_axis(s: &str, size: usize) -> Result<Option<usize>, error::InputError> {
    // same range as a 32-bit int; anything else is not a number.
    let v = s
        .parse::<i32>()
        .map_err(|_| error::InputError::NotNumeric)?;
    if v < 0 || v as usize >= size {
        Ok(None)
    } else {
        Ok(Some(v as usize))
    }
}

pub fn parse_command(token: &str, dim: &matrix::Dim) -> Result<Command, error::InputError> {
    if token == EXIT_COMMAND {
        return Ok(Command::Exit);
    }
    let parts = token.split(',').collect::<Vec<_>>();
    if parts.len() != 2 {
        return Err(error::InputError::BadShape);
    }
    // both halves must be numbers before range is considered.
    let row = parse_axis(parts[0], dim.rows)?;
    let col = parse_axis(parts[1], dim.cols)?;
    match (row, col) {
        (Some(row), Some(col)) => Ok(Command::Mark(Coord { row, col })),
        _ => Err(error::InputError::OutOfRange { size: dim.size() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIM: matrix::Dim = matrix::Dim { rows: 5, cols: 5 };

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse_command("exit", &DIM), Ok(Command::Exit));
        assert_eq!(
            parse_command("EXIT", &DIM),
            Err(error::InputError::BadShape)
        );
        assert_eq!(
            parse_command("exit,", &DIM),
            Err(error::InputError::NotNumeric)
        );
    }

    #[test]
    fn test_parse_mark() {
        match parse_command("1,3", &DIM) {
            Ok(Command::Mark(coord)) => {
                assert_eq!(coord.row(), 1);
                assert_eq!(coord.col(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(parse_command("0,0", &DIM), Ok(Command::Mark(_))));
        assert!(matches!(parse_command("4,4", &DIM), Ok(Command::Mark(_))));
        assert!(matches!(parse_command("+2,02", &DIM), Ok(Command::Mark(_))));
    }

    #[test]
    fn test_parse_bad_shape() {
        for token in ["5", "1,2,3", "", "1;2", "1,,2"] {
            assert_eq!(
                parse_command(token, &DIM),
                Err(error::InputError::BadShape),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn test_parse_not_numeric() {
        for token in ["a,b", "1,b", "a,1", "1,", ",1", "1.5,2", "99999999999,1"] {
            assert_eq!(
                parse_command(token, &DIM),
                Err(error::InputError::NotNumeric),
                "{:?}",
                token
            );
        }
        // a bad number wins over an out-of-range one.
        assert_eq!(
            parse_command("9,x", &DIM),
            Err(error::InputError::NotNumeric)
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        for token in ["5,0", "0,5", "5,5", "-1,0", "0,-1", "2147483647,0"] {
            assert_eq!(
                parse_command(token, &DIM),
                Err(error::InputError::OutOfRange { size: 5 }),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            error::InputError::NotNumeric.to_string(),
            "Only numbers are permitted for x and y"
        );
        assert_eq!(
            error::InputError::OutOfRange { size: 5 }.to_string(),
            "Board is of size 5"
        );
        assert_eq!(
            error::InputError::BadShape.to_string(),
            "expecting coordinates in the pattern x,y"
        );
    }
}
