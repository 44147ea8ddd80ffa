//! Form body construction.
//!
//! Fields are kept in a sorted map so the same input always encodes to the
//! same bytes.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::{ExposeSecret, SecretString};

use crate::types::Comment;

/// An ordered set of form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: BTreeMap<&'static str, String>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field unconditionally.
    pub fn set<S: Into<String>>(&mut self, key: &'static str, value: S) -> &mut Self {
        self.fields.insert(key, value.into());
        self
    }

    /// Set a field only when `value` is non-empty.
    pub fn set_non_empty(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    /// Set a field to `"1"` when `flag` is true.
    pub fn set_flag(&mut self, key: &'static str, flag: bool) -> &mut Self {
        if flag {
            self.set(key, "1");
        }
        self
    }

    /// Set a field to the RFC 3339 UTC form of `value`, second precision.
    pub fn set_timestamp(&mut self, key: &'static str, value: Option<&DateTime<Utc>>) -> &mut Self {
        if let Some(ts) = value {
            self.set(key, ts.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in key order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// Body for `verify-key`: only `api_key` and `blog`.
pub fn verify_key_form(api_key: &SecretString, blog: &str) -> FormBody {
    let mut form = FormBody::new();
    form.set("api_key", api_key.expose_secret())
        .set("blog", blog);
    form
}

/// Body for `comment-check`, `submit-ham` and `submit-spam`.
///
/// `api_key`, `blog` and `user_ip` are always present; everything else only
/// when it differs from its zero value.
pub fn comment_form(api_key: &SecretString, comment: &Comment) -> FormBody {
    let mut form = FormBody::new();
    form.set("api_key", api_key.expose_secret())
        .set("blog", comment.blog.as_str())
        .set("user_ip", comment.user_ip.as_str())
        .set_non_empty("user_agent", &comment.user_agent)
        .set_non_empty("referrer", &comment.referrer)
        .set_non_empty("permalink", &comment.permalink)
        .set_non_empty(
            "comment_type",
            comment.comment_type.map(|t| t.as_str()).unwrap_or_default(),
        )
        .set_non_empty("comment_author", &comment.comment_author)
        .set_non_empty("comment_author_email", &comment.comment_author_email)
        .set_non_empty("comment_author_url", &comment.comment_author_url)
        .set_non_empty("comment_content", &comment.comment_content)
        .set_timestamp("comment_date_gmt", comment.comment_date.as_ref())
        .set_timestamp(
            "comment_post_modified_gmt",
            comment.comment_post_modified.as_ref(),
        )
        .set_non_empty("blog_lang", &comment.blog_lang)
        .set_non_empty("blog_charset", &comment.blog_charset)
        .set_non_empty("user_role", &comment.user_role)
        .set_flag("is_test", comment.is_test)
        .set_non_empty("recheck_reason", &comment.recheck_reason)
        .set_non_empty("honeypot_field_name", &comment.honeypot_field_name);
    form
}
