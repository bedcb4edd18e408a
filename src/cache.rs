use crate::report::Finding;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
    pub findings: Vec<Finding>,
}

/// Findings per file, reused while the file contents and the rule
/// configuration are unchanged.
pub struct ResultCache {
    cache_dir: PathBuf,
    fingerprint: String,
}

impl ResultCache {
    pub fn new(cache_dir: impl Into<PathBuf>, fingerprint: impl Into<String>) -> Self {
        let cache_dir = cache_dir.into();
        if !cache_dir.exists() {
            if let Err(e) = fs::create_dir_all(&cache_dir) {
                warn!(dir = %cache_dir.display(), error = %e, "cannot create cache directory");
            }
        }
        Self {
            cache_dir,
            fingerprint: fingerprint.into(),
        }
    }

    pub fn compute_hash(source: &str, fingerprint: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(fingerprint.as_bytes());
        hasher.update([0u8]);
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn get_cache_path(&self, file_path: &Path) -> PathBuf {
        let safe_name = file_path
            .to_string_lossy()
            .replace('/', "_")
            .replace('\\', "_")
            .replace(':', "_");
        self.cache_dir.join(format!("{}.json", safe_name))
    }

    pub fn get(&self, file_path: &Path, source: &str) -> Option<Vec<Finding>> {
        let cache_path = self.get_cache_path(file_path);
        if !cache_path.exists() {
            return None;
        }

        let data = fs::read_to_string(&cache_path).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&data) {
            Ok(e) => e,
            Err(e) => {
                warn!(file = %file_path.display(), error = %e, "corrupt cache entry removed");
                fs::remove_file(cache_path).ok();
                return None;
            }
        };

        if entry.hash == Self::compute_hash(source, &self.fingerprint) {
            Some(entry.findings)
        } else {
            None
        }
    }

    pub fn set(&self, file_path: &Path, source: &str, findings: &[Finding]) {
        let cache_path = self.get_cache_path(file_path);
        let entry = CacheEntry {
            hash: Self::compute_hash(source, &self.fingerprint),
            findings: findings.to_vec(),
        };

        match serde_json::to_string(&entry) {
            Ok(data) => {
                if let Err(e) = fs::write(&cache_path, data) {
                    warn!(file = %file_path.display(), error = %e, "cache write failed");
                }
            }
            Err(e) => warn!(file = %file_path.display(), error = %e, "cache encode failed"),
        }
    }
}
