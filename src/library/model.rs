use std::path::PathBuf;
use std::sync::Arc;

/// Handle to the bytes of a playable file.
#[derive(Debug, Clone)]
pub enum FileRef {
    /// Lazy handle; bytes are read from disk on request.
    Path(PathBuf),
    /// File already loaded into memory (manual selection).
    Memory { name: String, bytes: Arc<[u8]> },
}

impl FileRef {
    /// Resolve the handle to its bytes.
    pub async fn read(&self) -> std::io::Result<Arc<[u8]>> {
        match self {
            FileRef::Path(path) => Ok(tokio::fs::read(path).await?.into()),
            FileRef::Memory { bytes, .. } => Ok(Arc::clone(bytes)),
        }
    }

    /// Human readable origin, used in log lines.
    pub fn describe(&self) -> String {
        match self {
            FileRef::Path(path) => path.display().to_string(),
            FileRef::Memory { name, .. } => name.clone(),
        }
    }
}

/// A playable file found by the folder source, before it gets an id.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub display_name: String,
    pub file: FileRef,
}
