//! Score-dependent remarks

mod book;
mod loader;

pub use book::{RemarkBook, EMPTY_REMARKS, NO_REMARKS};
pub use loader::parse_remarks;

use rand::Rng;

use crate::types::Score;

/// Pick a remark for `score` from `book`
pub fn pick_remark<'a, R: Rng + ?Sized>(book: &'a RemarkBook, score: Score, rng: &mut R) -> &'a str {
    book.pick_remark(score, rng)
}
