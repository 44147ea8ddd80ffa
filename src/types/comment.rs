//! Content records submitted for classification or feedback.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content being evaluated.
///
/// Serialized as the lowercase hyphenated token the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentType {
    /// A blog comment.
    Comment,
    /// A top-level forum post.
    ForumPost,
    /// A reply to a top-level forum post.
    Reply,
    /// A blog post.
    BlogPost,
    /// A contact form or feedback form submission.
    ContactForm,
    /// A new user account.
    Signup,
    /// A message sent between just a few users.
    Message,
}

impl CommentType {
    pub const ALL: [Self; 7] = [
        Self::Comment,
        Self::ForumPost,
        Self::Reply,
        Self::BlogPost,
        Self::ContactForm,
        Self::Signup,
        Self::Message,
    ];

    /// Wire token for this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::ForumPost => "forum-post",
            Self::Reply => "reply",
            Self::BlogPost => "blog-post",
            Self::ContactForm => "contact-form",
            Self::Signup => "signup",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`CommentType::from_str`] for unknown tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comment type: {0}")]
pub struct ParseCommentTypeError(pub String);

impl FromStr for CommentType {
    type Err = ParseCommentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseCommentTypeError(s.to_string()))
    }
}

/// A piece of content to check or report.
///
/// Empty strings, `false` and `None` are treated as "not provided" and never
/// reach the wire, except `blog` and `user_ip` which are always sent.
///
/// # Example
/// ```rust,ignore
/// use akismet::{Comment, CommentType};
///
/// let comment = Comment::new("https://example.com", "192.0.2.1")
///     .with_comment_type(CommentType::Comment)
///     .with_comment_author("alice")
///     .with_comment_content("hello there")
///     .with_is_test(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Front page or home URL of the site making the request, including scheme.
    pub blog: String,

    /// IP address of the comment submitter.
    pub user_ip: String,

    /// Browser user agent of the submitter (not the user agent of this library).
    pub user_agent: String,

    /// Content of the HTTP `Referer` header of the submission.
    pub referrer: String,

    /// Full permanent URL of the entry the comment was submitted to.
    pub permalink: String,

    /// What kind of content this is.
    pub comment_type: Option<CommentType>,

    /// Name submitted with the comment.
    pub comment_author: String,

    /// Email address submitted with the comment.
    pub comment_author_email: String,

    /// URL submitted with the comment. Only send URLs the user typed in.
    pub comment_author_url: String,

    /// The submitted content.
    pub comment_content: String,

    /// Creation time of the comment. May be omitted for `comment-check`
    /// requests sent at creation time.
    pub comment_date: Option<DateTime<Utc>>,

    /// Publication time of the post or thread the comment was posted on.
    pub comment_post_modified: Option<DateTime<Utc>>,

    /// Languages in use on the site, ISO 639-1, comma separated (`"en, fr_ca"`).
    pub blog_lang: String,

    /// Character encoding of the `comment_*` values, e.g. `"UTF-8"`.
    pub blog_charset: String,

    /// Role of the submitter. `"administrator"` always classifies as ham.
    pub user_role: String,

    /// Marks the request as a test query.
    pub is_test: bool,

    /// Why the content is being re-checked, e.g. `"edit"`.
    pub recheck_reason: String,

    /// Name of the honeypot field on the submission form.
    pub honeypot_field_name: String,
}

impl Comment {
    /// Create a record with the two fields the service requires.
    pub fn new<B: Into<String>, I: Into<String>>(blog: B, user_ip: I) -> Self {
        Self {
            blog: blog.into(),
            user_ip: user_ip.into(),
            ..Default::default()
        }
    }

    pub fn with_blog<S: Into<String>>(mut self, blog: S) -> Self {
        self.blog = blog.into();
        self
    }

    pub fn with_user_ip<S: Into<String>>(mut self, user_ip: S) -> Self {
        self.user_ip = user_ip.into();
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_referrer<S: Into<String>>(mut self, referrer: S) -> Self {
        self.referrer = referrer.into();
        self
    }

    pub fn with_permalink<S: Into<String>>(mut self, permalink: S) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub const fn with_comment_type(mut self, comment_type: CommentType) -> Self {
        self.comment_type = Some(comment_type);
        self
    }

    pub fn with_comment_author<S: Into<String>>(mut self, author: S) -> Self {
        self.comment_author = author.into();
        self
    }

    pub fn with_comment_author_email<S: Into<String>>(mut self, email: S) -> Self {
        self.comment_author_email = email.into();
        self
    }

    pub fn with_comment_author_url<S: Into<String>>(mut self, url: S) -> Self {
        self.comment_author_url = url.into();
        self
    }

    pub fn with_comment_content<S: Into<String>>(mut self, content: S) -> Self {
        self.comment_content = content.into();
        self
    }

    /// Set the creation time; any time zone is accepted and stored as UTC.
    pub fn with_comment_date<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.comment_date = Some(date.with_timezone(&Utc));
        self
    }

    /// Set the post publication time; stored as UTC.
    pub fn with_comment_post_modified<Tz: TimeZone>(mut self, date: DateTime<Tz>) -> Self {
        self.comment_post_modified = Some(date.with_timezone(&Utc));
        self
    }

    pub fn with_blog_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.blog_lang = lang.into();
        self
    }

    pub fn with_blog_charset<S: Into<String>>(mut self, charset: S) -> Self {
        self.blog_charset = charset.into();
        self
    }

    pub fn with_user_role<S: Into<String>>(mut self, role: S) -> Self {
        self.user_role = role.into();
        self
    }

    pub const fn with_is_test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    pub fn with_recheck_reason<S: Into<String>>(mut self, reason: S) -> Self {
        self.recheck_reason = reason.into();
        self
    }

    pub fn with_honeypot_field_name<S: Into<String>>(mut self, name: S) -> Self {
        self.honeypot_field_name = name.into();
        self
    }
}
