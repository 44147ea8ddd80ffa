//! Request and response types.

mod comment;
mod result;

pub use comment::{Comment, CommentType, ParseCommentTypeError};
pub use result::CheckResult;
