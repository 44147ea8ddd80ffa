//! Response interpretation for the three operation families.
//!
//! Each function looks at one fully read response and turns it into the
//! operation's result or an [`AkismetError`]. Bodies are compared after
//! trimming, case-sensitively.

use crate::error::{AkismetError, Result};
use crate::execution::http::transport::HttpTransportResponse;
use crate::types::CheckResult;

pub const DEBUG_HELP_HEADER: &str = "x-akismet-debug-help";
pub const PRO_TIP_HEADER: &str = "x-akismet-pro-tip";

fn ensure_ok(resp: &HttpTransportResponse) -> Result<()> {
    if resp.status != 200 {
        return Err(AkismetError::UnexpectedStatus {
            status: resp.status,
        });
    }
    Ok(())
}

fn debug_help(resp: &HttpTransportResponse) -> Option<String> {
    resp.header(DEBUG_HELP_HEADER).map(str::to_string)
}

/// `verify-key`: `valid` means the key works, anything else is returned verbatim.
pub fn interpret_verify_key(resp: &HttpTransportResponse) -> Result<()> {
    ensure_ok(resp)?;
    let text = resp.trimmed_text();
    if text == "valid" {
        return Ok(());
    }
    Err(AkismetError::InvalidKey {
        message: text,
        debug_help: debug_help(resp),
    })
}

/// `comment-check`: `true` is spam, `false` is ham.
///
/// The service reports some failures as a 200 with a diagnostic body; those
/// become [`AkismetError::ServerError`].
pub fn interpret_comment_check(resp: &HttpTransportResponse) -> Result<CheckResult> {
    ensure_ok(resp)?;
    let spam = match resp.trimmed_text().as_str() {
        "true" => true,
        "false" => false,
        other => {
            return Err(AkismetError::ServerError {
                message: other.to_string(),
                debug_help: debug_help(resp),
            });
        }
    };
    Ok(CheckResult {
        spam,
        discard: spam && resp.header(PRO_TIP_HEADER) == Some("discard"),
    })
}

/// `submit-ham` / `submit-spam`: only the status matters.
pub fn interpret_submission(resp: &HttpTransportResponse) -> Result<()> {
    ensure_ok(resp)
}
