//! Fetcher: blocking libcurl GETs for the page and its assets.
//!
//! One `Easy` handle per request, redirects followed, bounded by the connect
//! timeout and low-speed cutoff from `HttpConfig`. The abort token is polled
//! from the progress callback so Ctrl-C interrupts an in-flight transfer.

mod asset;
mod head;
mod page;

pub use asset::{fetch_asset, SavedAsset};
pub use head::ResponseHead;
pub use page::{fetch_page, PageResponse};

use crate::config::HttpConfig;
use url::Url;

/// Applies the shared transfer options to a fresh handle.
fn configure(easy: &mut curl::easy::Easy, url: &Url, http: &HttpConfig) -> Result<(), curl::Error> {
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(http.max_redirections)?;
    easy.connect_timeout(http.connect_timeout())?;
    easy.low_speed_limit(http.low_speed_limit_bytes)?;
    easy.low_speed_time(http.low_speed_time())?;
    easy.useragent(&http.user_agent())?;
    // Needed for the progress callback (abort polling) to fire.
    easy.progress(true)?;
    Ok(())
}
