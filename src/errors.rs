use std::fmt;

#[derive(Debug, PartialEq)]
pub enum BurgerError {
    IndexOutOfRange { index: usize, len: usize },
    MissingBun,
    UnknownBun(String),
    UnknownIngredient(String),
    FileReaderError,
}

impl fmt::Display for BurgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurgerError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} ingredients", index, len)
            }
            BurgerError::MissingBun => write!(f, "no bun set"),
            BurgerError::UnknownBun(name) => write!(f, "unknown bun '{}'", name),
            BurgerError::UnknownIngredient(name) => write!(f, "unknown ingredient '{}'", name),
            BurgerError::FileReaderError => write!(f, "could not read the file"),
        }
    }
}

impl std::error::Error for BurgerError {}

impl From<std::io::Error> for BurgerError {
    fn from(_: std::io::Error) -> Self {
        BurgerError::FileReaderError
    }
}

impl From<serde_json::Error> for BurgerError {
    fn from(_: serde_json::Error) -> Self {
        BurgerError::FileReaderError
    }
}
