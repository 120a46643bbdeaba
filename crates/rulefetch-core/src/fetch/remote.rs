//! Remote rule-list fetch: one HTTP GET, manual status validation.

use std::str;

use crate::rules::{self, RuleSet};

use super::{parse, FetchError, FetchOptions};

/// Fetches a rule list from `url` with a single GET.
///
/// The URL is parsed (and thereby percent-encoded) before the request goes
/// out. libcurl accepts every HTTP status at the transport level; validation
/// happens here, in order: status must be 200 or 0, the final response must
/// be `text/plain`, and the body must be non-empty after trimming. The first
/// violated condition is the one reported.
///
/// Runs in the current thread; call [`fetch_remote`] from async code.
pub fn fetch_remote_blocking(url: &str, opts: &FetchOptions) -> Result<RuleSet, FetchError> {
    let parsed = url::Url::parse(url)?;

    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(parsed.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    let mut list = curl::easy::List::new();
    list.append("Pragma: no-cache")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 && code != 0 {
        return Err(FetchError::InvalidStatus(code));
    }

    let content_type = parse::content_type(&header_lines);
    let is_plain_text = content_type
        .as_deref()
        .is_some_and(|ct| ct.contains("text/plain"));
    if !is_plain_text {
        return Err(FetchError::InvalidContentType(content_type));
    }

    let text = String::from_utf8_lossy(&body);
    let ruleset = rules::split_rules(&text);
    if ruleset.is_empty() {
        return Err(FetchError::EmptyResponse);
    }
    Ok(ruleset)
}

/// Async wrapper over [`fetch_remote_blocking`]. The transfer runs on the
/// blocking pool, so concurrent fetches do not block each other.
pub async fn fetch_remote(url: &str, opts: FetchOptions) -> Result<RuleSet, FetchError> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || fetch_remote_blocking(&url, &opts))
        .await
        .unwrap_or_else(|e| panic!("fetch task panicked: {e}"))
}
