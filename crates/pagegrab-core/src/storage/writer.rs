//! Streaming writer for one asset file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sequential file writer for an asset body. The directory and file are only
/// created by `open`, which the fetcher calls on the first body chunk of a 200
/// response; nothing touches the disk for failed responses.
pub struct AssetFile {
    out: BufWriter<File>,
    path: PathBuf,
    written: u64,
}

impl AssetFile {
    /// Create `dir` if absent and truncate-or-create `dir/filename`.
    pub fn open(dir: &Path, filename: &str) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(filename);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    pub fn write_chunk(&mut self, data: &[u8]) -> std::io::Result<()> {
        self.out.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush buffered data and close the file. Returns the final path and size.
    pub fn finish(mut self) -> std::io::Result<(PathBuf, u64)> {
        self.out.flush()?;
        self.out.get_ref().sync_data()?;
        Ok((self.path, self.written))
    }

    /// Close and delete the file (failed transfer).
    pub fn discard(self) {
        let path = self.path.clone();
        drop(self.out);
        if let Err(e) = fs::remove_file(&path) {
            tracing::debug!(path = %path.display(), "could not remove partial file: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_dir_and_writes_chunks() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("css");
        let mut f = AssetFile::open(&sub, "site.css").unwrap();
        f.write_chunk(b"body {").unwrap();
        f.write_chunk(b" color: red }").unwrap();
        assert_eq!(f.written(), 19);
        let (path, n) = f.finish().unwrap();
        assert_eq!(n, 19);
        assert_eq!(fs::read_to_string(path).unwrap(), "body { color: red }");
    }

    #[test]
    fn open_truncates_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "old contents that are long").unwrap();
        let mut f = AssetFile::open(dir.path(), "a.js").unwrap();
        f.write_chunk(b"new").unwrap();
        f.finish().unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.js")).unwrap(), "new");
    }

    #[test]
    fn discard_removes_file() {
        let dir = tempdir().unwrap();
        let mut f = AssetFile::open(dir.path(), "x.png").unwrap();
        f.write_chunk(b"partial").unwrap();
        let path = f.path().to_path_buf();
        f.discard();
        assert!(!path.exists());
    }
}
