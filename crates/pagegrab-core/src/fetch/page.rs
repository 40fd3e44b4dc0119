//! Mandatory page fetch. Any failure here ends the run.

use super::{configure, ResponseHead};
use crate::config::HttpConfig;
use crate::control::AbortToken;
use crate::error::RunError;
use std::borrow::Cow;
use std::cell::RefCell;
use url::Url;

/// A page fetched with status 200.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// Raw body bytes as served. This is what gets saved.
    pub body: Vec<u8>,
}

impl PageResponse {
    /// Body decoded as UTF-8 for markup scanning; invalid sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// GETs `url` into memory. Non-200 final status is `RunError::PageStatus`.
pub fn fetch_page(url: &Url, http: &HttpConfig, abort: &AbortToken) -> Result<PageResponse, RunError> {
    let request_err = |source| RunError::PageRequest {
        url: url.to_string(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, http).map_err(request_err)?;

    let head = RefCell::new(ResponseHead::default());
    let mut body: Vec<u8> = Vec::new();
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                head.borrow_mut().feed(data);
                true
            })
            .map_err(request_err)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(request_err)?;
        transfer
            .progress_function(|_, _, _, _| !abort.is_aborted())
            .map_err(request_err)?;
        transfer.perform()
    };

    if abort.is_aborted() {
        return Err(RunError::Aborted);
    }
    performed.map_err(request_err)?;

    let code = easy.response_code().map_err(request_err)?;
    tracing::info!(url = %url, status = code, bytes = body.len(), "page response");
    if code != 200 {
        return Err(RunError::PageStatus {
            url: url.to_string(),
            code,
        });
    }

    let head = head.into_inner();
    tracing::debug!(
        url = %url,
        effective_url = easy.effective_url().ok().flatten().unwrap_or_default(),
        content_type = head.content_type.as_deref().unwrap_or_default(),
        "page accepted"
    );
    Ok(PageResponse { body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_lossy_utf8() {
        let page = PageResponse {
            body: b"<p>caf\xc3\xa9 \xff</p>".to_vec(),
        };
        assert_eq!(page.text(), "<p>caf\u{e9} \u{fffd}</p>");
    }
}
