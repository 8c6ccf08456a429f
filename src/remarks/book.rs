//! Remark table keyed by score

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Score;

/// Returned for scores that have no remarks at all
pub const NO_REMARKS: &str =
    "No insults available for this level. Consider being more creative with your passwords!";

/// Returned when a score's remark list exists but is empty
pub const EMPTY_REMARKS: &str = "Somehow, this insult file is empty. That's an insult in itself.";

const LEVEL_1: &[&str] = &[
    "My cat walked across the keyboard and came up with something better.",
    "This password is the reason security teams drink.",
    "Congratulations, you have invented the welcome mat.",
    "Hackers won't crack this. They'll just guess it on the first try.",
    "Did you pick this from a list titled 'passwords not to use'?",
];

const LEVEL_2: &[&str] = &[
    "Slightly better than leaving the door open. Slightly.",
    "A toddler with a dictionary would be through this by lunch.",
    "You put in the minimum effort and it shows.",
    "This password has the structural integrity of wet cardboard.",
];

const LEVEL_3: &[&str] = &[
    "It's a password. Technically.",
    "Your password called. It wants a few more characters.",
    "Good news: it isn't 'password'. Bad news: that's the only good news.",
    "Somewhere, a script kiddie just smiled.",
];

const LEVEL_4: &[&str] = &[
    "Getting warmer. Still lukewarm.",
    "Not terrible. Not great. Very 'meh'.",
    "A determined teenager with a gaming PC says hi.",
    "You're halfway to a real password. Keep going.",
];

const LEVEL_10: &[&str] = &[
    "Fine. That's actually a good password. Don't let it go to your head.",
    "Even I can't make fun of this one. Annoying.",
    "The heat death of the universe will arrive first.",
    "Now write it on a sticky note under your keyboard and undo all this hard work.",
];

/// Remarks grouped by score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemarkBook {
    entries: BTreeMap<u8, Vec<String>>,
}

impl RemarkBook {
    /// Empty book; every score falls back to [`NO_REMARKS`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in remarks for scores 1-4 and 10
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for (score, remarks) in [
            (1, LEVEL_1),
            (2, LEVEL_2),
            (3, LEVEL_3),
            (4, LEVEL_4),
            (10, LEVEL_10),
        ] {
            book.set(score, remarks.iter().map(|r| r.to_string()).collect());
        }
        book
    }

    /// Replace the remarks for a score
    pub fn set(&mut self, score: u8, remarks: Vec<String>) {
        self.entries.insert(score, remarks);
    }

    /// Overlay another book's entries onto this one
    pub fn merge(&mut self, other: RemarkBook) {
        self.entries.extend(other.entries);
    }

    pub fn remarks_for(&self, score: Score) -> Option<&[String]> {
        self.entries.get(&score.value()).map(Vec::as_slice)
    }

    /// Scores with an entry, ascending
    pub fn scores(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.keys().copied()
    }

    /// Pick a remark for `score` uniformly at random
    pub fn pick_remark<'a, R: Rng + ?Sized>(&'a self, score: Score, rng: &mut R) -> &'a str {
        match self.remarks_for(score) {
            None => NO_REMARKS,
            Some(remarks) => remarks
                .choose(rng)
                .map(String::as_str)
                .unwrap_or(EMPTY_REMARKS),
        }
    }
}
