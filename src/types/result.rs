//! Classification outcome.

use serde::{Deserialize, Serialize};

/// Outcome of a `comment-check` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckResult {
    /// `true` when the content was classified as spam.
    pub spam: bool,
    /// Set when the service sent `X-akismet-pro-tip: discard`: the content is
    /// blatant spam and can be dropped without review.
    pub discard: bool,
}

impl CheckResult {
    pub const fn spam() -> Self {
        Self {
            spam: true,
            discard: false,
        }
    }

    pub const fn ham() -> Self {
        Self {
            spam: false,
            discard: false,
        }
    }

    pub const fn is_spam(&self) -> bool {
        self.spam
    }

    pub const fn is_ham(&self) -> bool {
        !self.spam
    }
}
