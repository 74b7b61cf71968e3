// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds { row: usize, col: usize, size: usize },
    InsufficientWords { needed: usize, available: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col, size } => write!(
                f,
                "invalid coordinates {},{} for a board of size {}",
                row, col, size
            ),
            BoardError::InsufficientWords { needed, available } => write!(
                f,
                "dictionary has {} usable entries but the board needs {}",
                available, needed
            ),
        }
    }
}

impl std::error::Error for BoardError {}

// Display is the exact line shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    BadShape,
    NotNumeric,
    OutOfRange { size: usize },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::BadShape => write!(f, "expecting coordinates in the pattern x,y"),
            InputError::NotNumeric => write!(f, "Only numbers are permitted for x and y"),
            InputError::OutOfRange { size } => write!(f, "Board is of size {}", size),
        }
    }
}

impl std::error::Error for InputError {}

#[derive(Debug)]
pub enum DictionaryError {
    Io(std::io::Error),
    NotAscii { line: usize },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::Io(err) => write!(f, "{}", err),
            DictionaryError::NotAscii { line } => {
                write!(f, "non-ASCII byte on line {}", line)
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io(err) => Some(err),
            DictionaryError::NotAscii { .. } => None,
        }
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        DictionaryError::Io(err)
    }
}
