use crate::domain::LocationRecord;
use crate::store::StoreError;
use std::io;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::{fs, task};
use tracing::{instrument, trace};

#[instrument]
pub async fn load(path: &Path) -> Result<Vec<LocationRecord>, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound),
        Err(err) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::StorageCorrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes to a temporary file next to the snapshot, then renames it over the snapshot.
#[instrument(skip(records))]
pub async fn persist(path: &Path, records: &[LocationRecord], pretty: bool) -> Result<(), StoreError> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(records)
    } else {
        serde_json::to_vec(records)
    }
    .map_err(StoreError::Serialize)?;

    let path = path.to_path_buf();
    task::spawn_blocking(move || write_atomically(&path, &bytes)).await?
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let persist_failure = |source: io::Error| StoreError::PersistFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(persist_failure)?;
    temp.write_all(bytes).map_err(persist_failure)?;
    temp.as_file().sync_all().map_err(persist_failure)?;
    trace!(temp = %temp.path().display(), "Renaming temporary snapshot into place");
    temp.persist(path).map_err(|err| persist_failure(err.error))?;

    // Best effort, makes the rename itself durable
    #[cfg(unix)]
    {
        if let Ok(dir) = std::fs::File::open(dir) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
