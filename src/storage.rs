use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub const LIST_KEY: &str = "list_items";
pub const TTL_DAYS: u64 = 365;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no writable data directory")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    expires_at: u64,
    values: Vec<String>,
}

/// File-backed key-value store for sequences of strings, with an expiry
/// stamp per record. Anything unreadable or expired reads as absent; the
/// caller keeps its in-memory state and carries on.
pub struct FileStore {
    dir: Option<PathBuf>,
}

impl FileStore {
    pub fn open() -> Self {
        Self {
            dir: directories::ProjectDirs::from("com", "quick_list", "quick_list")
                .map(|dirs| dirs.data_dir().to_path_buf()),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn load(&self, key: &str) -> Option<Vec<String>> {
        let path = self.dir.as_ref()?.join(format!("{key}.json"));
        let file = std::fs::File::open(path).ok()?;
        let record: Record = match serde_json::from_reader(file) {
            Ok(record) => record,
            Err(err) => {
                warn!("Failed to parse stored list, starting empty: {err}");
                return None;
            }
        };
        if unix_now() >= record.expires_at {
            return None;
        }
        Some(record.values)
    }

    pub fn save(&self, key: &str, values: &[String], ttl_days: u64) -> Result<(), StorageError> {
        let Some(dir) = &self.dir else {
            return Err(StorageError::NoDataDir);
        };
        std::fs::create_dir_all(dir)?;
        let record = Record {
            expires_at: unix_now() + ttl_days * 24 * 60 * 60,
            values: values.to_vec(),
        };
        let file = std::fs::File::create(dir.join(format!("{key}.json")))?;
        serde_json::to_writer_pretty(file, &record)?;
        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> (FileStore, PathBuf) {
        let uniq = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("quick_list_{tag}_{uniq}"));
        (FileStore::with_dir(&dir), dir)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn save_then_load_round_trips() {
        let (store, dir) = temp_store("round_trip");
        let values = strings(&["Milk", "Eggs", "Bread"]);
        store.save(LIST_KEY, &values, TTL_DAYS).expect("save");
        assert_eq!(store.load(LIST_KEY), Some(values));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn expired_record_reads_as_absent() {
        let (store, dir) = temp_store("expired");
        store
            .save(LIST_KEY, &strings(&["Milk"]), 0)
            .expect("save");
        assert_eq!(store.load(LIST_KEY), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupted_record_reads_as_absent() {
        let (store, dir) = temp_store("corrupted");
        std::fs::create_dir_all(&dir).expect("create dir");
        std::fs::write(dir.join(format!("{LIST_KEY}.json")), b"not json").expect("write");
        assert_eq!(store.load(LIST_KEY), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_key_reads_as_absent() {
        let (store, dir) = temp_store("missing");
        assert_eq!(store.load(LIST_KEY), None);
        let _ = std::fs::remove_dir_all(dir);
    }
}
