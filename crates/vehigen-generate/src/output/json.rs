use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use vehigen_core::VehicleRecord;

use crate::errors::GenerationError;

/// Write records as a pretty-printed JSON array, replacing `path` in one
/// rename. Returns the number of bytes written.
///
/// The rename swaps in a new file: a symlink at `path` is replaced rather
/// than written through, and the new file gets default permissions.
pub fn write_records_json(path: &Path, records: &[VehicleRecord]) -> Result<u64, GenerationError> {
    let data = serde_json::to_vec_pretty(records)?;
    write_bytes_atomic(path, &data).map_err(|source| GenerationError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data.len() as u64)
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path(path)?;
    let written = write_synced(&tmp_path, data).and_then(|()| std::fs::rename(&tmp_path, path));
    if let Err(err) = written {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        sync_dir(parent)?;
    }

    Ok(())
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
