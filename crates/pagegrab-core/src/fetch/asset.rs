//! Best-effort streaming asset download.

use super::{configure, ResponseHead};
use crate::config::HttpConfig;
use crate::control::AbortToken;
use crate::error::AssetError;
use crate::progress::{EventSink, RunEvent, TransferStats};
use crate::storage::AssetFile;
use crate::url_model::asset_filename;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use url::Url;

/// A successfully written asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAsset {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Streams `url` into `dest_dir/<last path segment>`.
///
/// The file (and `dest_dir`) is created on the first body chunk of a 200
/// response, so failed responses leave nothing behind. Progress is reported
/// through `sink` as chunks arrive. On failure after the file was opened the
/// partial file is removed, except on abort, where it is left as is.
pub fn fetch_asset(
    url: &Url,
    dest_dir: &Path,
    http: &HttpConfig,
    sink: &dyn EventSink,
    abort: &AbortToken,
) -> Result<SavedAsset, AssetError> {
    let filename = asset_filename(url);
    let target_path = dest_dir.join(&filename);
    let storage_err = |source: io::Error| AssetError::Storage {
        path: target_path.clone(),
        source,
    };

    let mut easy = curl::easy::Easy::new();
    configure(&mut easy, url, http).map_err(AssetError::Request)?;

    let head = RefCell::new(ResponseHead::default());
    let mut file: Option<AssetFile> = None;
    let mut write_err: Option<io::Error> = None;
    let started = Instant::now();

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                head.borrow_mut().feed(data);
                true
            })
            .map_err(AssetError::Request)?;
        transfer
            .write_function(|data| {
                let head = head.borrow();
                if !head.is_ok() || abort.is_aborted() {
                    return Ok(0); // abort transfer; status decides the error below
                }
                if file.is_none() {
                    match AssetFile::open(dest_dir, &filename) {
                        Ok(f) => {
                            sink.emit(RunEvent::AssetResponse {
                                url: url.clone(),
                                total_bytes: head.content_length,
                            });
                            file = Some(f);
                        }
                        Err(e) => {
                            write_err = Some(e);
                            return Ok(0);
                        }
                    }
                }
                let Some(f) = file.as_mut() else {
                    return Ok(0);
                };
                if let Err(e) = f.write_chunk(data) {
                    write_err = Some(e);
                    return Ok(0);
                }
                sink.emit(RunEvent::AssetProgress {
                    url: url.clone(),
                    stats: TransferStats {
                        bytes_done: f.written(),
                        total_bytes: head.content_length,
                        elapsed_secs: started.elapsed().as_secs_f64(),
                    },
                });
                Ok(data.len())
            })
            .map_err(AssetError::Request)?;
        transfer
            .progress_function(|_, _, _, _| !abort.is_aborted())
            .map_err(AssetError::Request)?;
        transfer.perform()
    };

    if abort.is_aborted() {
        // Interrupted transfers keep whatever was written.
        if let Some(f) = file {
            tracing::debug!(path = %f.path().display(), bytes = f.written(), "keeping partial file");
            let _ = f.finish();
        }
        return Err(AssetError::Aborted);
    }

    let fail = |file: Option<AssetFile>, err: AssetError| -> Result<SavedAsset, AssetError> {
        if let Some(f) = file {
            f.discard();
        }
        Err(err)
    };

    if let Some(e) = write_err {
        return fail(file, storage_err(e));
    }
    let code = match easy.response_code() {
        Ok(code) => code,
        Err(e) => return fail(file, AssetError::Request(e)),
    };
    if code != 0 && code != 200 {
        return fail(file, AssetError::Status(code));
    }
    if let Err(e) = performed {
        return fail(file, AssetError::Request(e));
    }

    // 200 with an empty body: the write callback never ran.
    let file = match file {
        Some(f) => f,
        None => AssetFile::open(dest_dir, &filename).map_err(storage_err)?,
    };
    let (path, bytes) = file.finish().map_err(storage_err)?;
    tracing::debug!(url = %url, path = %path.display(), bytes, "asset saved");
    Ok(SavedAsset { path, bytes })
}
