//! Output tree: fixed layout root, page save, streaming asset files.

mod layout;
mod writer;

pub use layout::{save_text, OutputLayout, INDEX_FILE, OUTPUT_DIR_NAME};
pub use writer::AssetFile;
