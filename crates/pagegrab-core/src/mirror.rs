//! One run: fetch the page, save it, discover assets, fetch each asset.
//!
//! Strictly sequential. The page phase is mandatory and any failure there is
//! fatal; the asset phase is best-effort and only an abort stops it early.

use crate::config::HttpConfig;
use crate::control::AbortToken;
use crate::error::{AssetError, RunError};
use crate::extract::{extract_assets, AssetCategory};
use crate::fetch::{fetch_asset, fetch_page};
use crate::progress::{EventSink, RunEvent, RunSummary};
use crate::storage::{save_text, OutputLayout};
use crate::url_model::{base_url, parse_target};
use std::path::PathBuf;
use url::Url;

/// Per-asset outcome, keyed by source URL. `path` is `None` when the asset was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub category: AssetCategory,
    pub url: Url,
    pub path: Option<PathBuf>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct MirrorReport {
    pub page_url: Url,
    pub index_path: PathBuf,
    pub results: Vec<DownloadResult>,
    pub summary: RunSummary,
}

/// Inputs shared by every transfer of a run.
pub struct Mirror<'a> {
    pub layout: &'a OutputLayout,
    pub http: &'a HttpConfig,
    pub sink: &'a dyn EventSink,
    pub abort: &'a AbortToken,
}

impl Mirror<'_> {
    /// Runs the whole pipeline for `target` (raw user input).
    pub fn run(&self, target: &str) -> Result<MirrorReport, RunError> {
        let page_url = parse_target(target)?;
        tracing::info!(url = %page_url, root = %self.layout.root().display(), "run started");
        self.sink.emit(RunEvent::PageStarted {
            url: page_url.clone(),
        });

        let page = fetch_page(&page_url, self.http, self.abort)?;
        let index_path = self.layout.index_path();
        save_text(&page.body, &index_path)?;
        self.sink.emit(RunEvent::PageSaved {
            path: index_path.clone(),
            bytes: page.body.len() as u64,
        });

        let markup = page.text();
        let assets = extract_assets(&markup, &base_url(&page_url));
        self.sink.emit(RunEvent::AssetsDiscovered {
            stylesheets: assets.stylesheets.len(),
            scripts: assets.scripts.len(),
            images: assets.images.len(),
        });

        let mut results = Vec::with_capacity(assets.len());
        for (category, url) in assets.iter() {
            if self.abort.is_aborted() {
                return Err(RunError::Aborted);
            }
            let path = self.fetch_one(category, url)?;
            results.push(DownloadResult {
                category,
                url: url.clone(),
                path,
            });
        }

        let assets_saved = results.iter().filter(|r| r.path.is_some()).count();
        let summary = RunSummary {
            root: self.layout.root().to_path_buf(),
            assets_found: results.len(),
            assets_saved,
            assets_failed: results.len() - assets_saved,
        };
        tracing::info!(
            saved = summary.assets_saved,
            failed = summary.assets_failed,
            "run finished"
        );
        self.sink.emit(RunEvent::Finished(summary.clone()));

        Ok(MirrorReport {
            page_url,
            index_path,
            results,
            summary,
        })
    }

    /// Downloads one asset. Failures become `Ok(None)`; only an abort is returned as an error.
    fn fetch_one(&self, category: AssetCategory, url: &Url) -> Result<Option<PathBuf>, RunError> {
        self.sink.emit(RunEvent::AssetStarted {
            category,
            url: url.clone(),
        });
        let dest_dir = self.layout.category_dir(category);
        match fetch_asset(url, &dest_dir, self.http, self.sink, self.abort) {
            Ok(saved) => {
                self.sink.emit(RunEvent::AssetSaved {
                    category,
                    url: url.clone(),
                    path: saved.path.clone(),
                    bytes: saved.bytes,
                });
                Ok(Some(saved.path))
            }
            Err(AssetError::Aborted) => Err(RunError::Aborted),
            Err(e) => {
                tracing::warn!(url = %url, %category, "failed to download asset: {}", e);
                self.sink.emit(RunEvent::AssetFailed {
                    category,
                    url: url.clone(),
                    reason: e.to_string(),
                });
                Ok(None)
            }
        }
    }
}
