//! Storage partitions: one browser data directory per partition key, and on
//! macOS/iOS one WebKit data store identifier per key.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Directory name for a partition key: `persist:gmail` -> `persist-gmail`.
///
/// Anything outside `[A-Za-z0-9_.-]` becomes `-`, so a key can never name a
/// path outside the partitions root.
pub fn partition_dir_name(partition: &str) -> String {
    let name: String = partition
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    match name.as_str() {
        "" | "." | ".." => format!("partition{name}"),
        _ => name,
    }
}

/// Data directory of `partition` under `root`.
pub fn partition_data_dir(root: &Path, partition: &str) -> PathBuf {
    root.join(partition_dir_name(partition))
}

/// Stable 16-byte data store identifier for `partition`.
pub fn partition_store_id(partition: &str) -> [u8; 16] {
    let name = format!("switchboard://partition/{partition}");
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).into_bytes()
}
