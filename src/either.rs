//! Left/Right tagged union
//!
//! Carries per-row import outcomes without aborting a batch: `Left` for a
//! failed row, `Right` for a parsed one.

use serde::{Deserialize, Serialize};

/// Serialized as `{"tag": "left", "value": ...}` or `{"tag": "right", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "lowercase")]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(err) => Either::Left(err),
        }
    }
}

/// Both sides of a partitioned sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split<L, R> {
    pub lefts: Vec<L>,
    pub rights: Vec<R>,
}

impl<L, R> Default for Split<L, R> {
    fn default() -> Self {
        Self {
            lefts: Vec::new(),
            rights: Vec::new(),
        }
    }
}

/// Partition into lefts and rights, each side keeping input order
pub fn split<L, R, I>(values: I) -> Split<L, R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    values
        .into_iter()
        .fold(Split::default(), |mut acc, value| {
            match value {
                Either::Left(l) => acc.lefts.push(l),
                Either::Right(r) => acc.rights.push(r),
            }
            acc
        })
}
