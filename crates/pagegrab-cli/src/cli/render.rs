//! Console rendering of run events: status lines on stdout, one progress bar per asset.

use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use pagegrab_core::progress::RunEvent;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use super::style::OutputStyle;

pub struct ConsoleRenderer {
    style: OutputStyle,
    bar: Option<ProgressBar>,
}

impl ConsoleRenderer {
    pub fn new(style: OutputStyle) -> Self {
        Self { style, bar: None }
    }

    /// Renders events until every sender is dropped.
    pub fn drain(mut self, rx: Receiver<RunEvent>) {
        for event in rx {
            self.handle(&event);
        }
        self.clear_bar();
    }

    fn handle(&mut self, event: &RunEvent) {
        match event {
            RunEvent::AssetResponse { url, total_bytes } => {
                let name = url
                    .path_segments()
                    .and_then(|s| s.last())
                    .unwrap_or_default()
                    .to_string();
                self.start_bar(name, *total_bytes);
            }
            RunEvent::AssetProgress { stats, .. } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(stats.bytes_done);
                }
            }
            RunEvent::AssetSaved { .. } | RunEvent::AssetFailed { .. } => {
                self.clear_bar();
            }
            _ => {}
        }
        if let Some(line) = self.line_for(event) {
            println!("{}", line);
        }
    }

    fn start_bar(&mut self, name: String, total: Option<u64>) {
        self.clear_bar();
        let bar = match total {
            Some(len) => {
                let template = if self.style.color() {
                    "  {msg:20!} [{bar:30.cyan/blue}] {bytes:>9}/{total_bytes:<9} {bytes_per_sec}"
                } else {
                    "  {msg:20!} [{bar:30}] {bytes:>9}/{total_bytes:<9} {bytes_per_sec}"
                };
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::with_template(template) {
                    bar.set_style(style.progress_chars("#>-"));
                }
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("  {spinner} {msg:20!} {bytes} {bytes_per_sec}") {
                    bar.set_style(style);
                }
                bar.enable_steady_tick(Duration::from_millis(100));
                bar
            }
        };
        bar.set_message(name);
        self.bar = Some(bar);
    }

    fn clear_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// The status line printed for `event`, if any.
    fn line_for(&self, event: &RunEvent) -> Option<String> {
        let s = &self.style;
        match event {
            RunEvent::PageStarted { url } => {
                Some(s.green(&format!("Downloading website {}...", url)))
            }
            RunEvent::PageSaved { path, bytes } => Some(format!(
                "Saved page to {} ({})",
                path.display(),
                HumanBytes(*bytes)
            )),
            RunEvent::AssetsDiscovered {
                stylesheets,
                scripts,
                images,
            } => Some(s.dim(&format!(
                "Found {} stylesheet(s), {} script(s), {} image(s)",
                stylesheets, scripts, images
            ))),
            RunEvent::AssetSaved {
                category,
                path,
                bytes,
                ..
            } => Some(format!(
                "  {} {} {} ({})",
                s.green("ok"),
                category,
                path.display(),
                HumanBytes(*bytes)
            )),
            RunEvent::AssetFailed { url, reason, .. } => Some(s.red(&format!(
                "  Failed to download {}, {}",
                url, reason
            ))),
            RunEvent::Finished(summary) => {
                let mut line = s.green(&format!(
                    "Website downloaded successfully to {}",
                    summary.root.display()
                ));
                if summary.assets_found > 0 {
                    line.push_str(&format!(
                        " ({} of {} assets saved{})",
                        summary.assets_saved,
                        summary.assets_found,
                        if summary.assets_failed > 0 {
                            format!(", {} failed", summary.assets_failed)
                        } else {
                            String::new()
                        }
                    ));
                }
                Some(line)
            }
            RunEvent::AssetStarted { .. }
            | RunEvent::AssetResponse { .. }
            | RunEvent::AssetProgress { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrab_core::extract::AssetCategory;
    use pagegrab_core::progress::RunSummary;
    use std::path::PathBuf;
    use url::Url;

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer::new(OutputStyle::new(false))
    }

    #[test]
    fn failure_line_names_url_and_status() {
        let line = plain()
            .line_for(&RunEvent::AssetFailed {
                category: AssetCategory::Image,
                url: Url::parse("http://ex.com/a.png").unwrap(),
                reason: "status code: 500".to_string(),
            })
            .unwrap();
        assert_eq!(line, "  Failed to download http://ex.com/a.png, status code: 500");
    }

    #[test]
    fn summary_line_counts_failures() {
        let line = plain()
            .line_for(&RunEvent::Finished(RunSummary {
                root: PathBuf::from("/home/u/Downloads/website_download"),
                assets_found: 3,
                assets_saved: 2,
                assets_failed: 1,
            }))
            .unwrap();
        assert_eq!(
            line,
            "Website downloaded successfully to /home/u/Downloads/website_download (2 of 3 assets saved, 1 failed)"
        );
    }

    #[test]
    fn progress_events_print_nothing() {
        let event = RunEvent::AssetStarted {
            category: AssetCategory::Script,
            url: Url::parse("http://ex.com/a.js").unwrap(),
        };
        assert!(plain().line_for(&event).is_none());
    }
}
