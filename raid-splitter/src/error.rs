use thiserror::Error;

/// Enumeration of errors that abort a roster split.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("cannot split into fewer than two raids (asked for {0})")]
    InvalidRaidCount(usize),
    /// A character record carries a class id outside the class table. Registration
    /// validates classes, so this means the stored data is corrupt.
    #[error("character {character_id} has unknown class id {class_id}")]
    UnknownClass { character_id: i64, class_id: i64 },
}

pub type Result<T> = std::result::Result<T, SplitError>;
