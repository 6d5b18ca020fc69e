use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::PERSISTENCE;
use crate::data::{CreateDashboardData, DashboardBundle};

/// Serialized bundle snapshot written after a successful load so the next
/// start can skip regeneration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BundleCacheFile {
    pub version: u32,
    pub timestamp_ms: i64,
    pub bundle: DashboardBundle,
}

impl BundleCacheFile {
    pub fn new(bundle: DashboardBundle, version: u32) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            bundle,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache: BundleCacheFile = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        cache.validate()?;
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.version != PERSISTENCE.bundle_version {
            bail!(
                "Cache version mismatch: file v{} vs required v{}",
                self.version,
                PERSISTENCE.bundle_version
            );
        }

        let seconds_ago = (Utc::now().timestamp_millis() - self.timestamp_ms) / 1000;
        if seconds_ago > PERSISTENCE.bundle_acceptable_age_secs {
            bail!(
                "Cache too old: created {} seconds ago (limit: {} seconds)",
                seconds_ago,
                PERSISTENCE.bundle_acceptable_age_secs
            );
        }

        Ok(())
    }

    pub fn default_cache_path() -> PathBuf {
        PathBuf::from(PERSISTENCE.bundle_path)
    }
}

/// Write the bundle snapshot without blocking the caller's thread.
pub async fn write_bundle_async(signature: &'static str, bundle: DashboardBundle) -> Result<()> {
    if signature == CACHE_SIGNATURE {
        // The data already came from disk; nothing new to persist.
        return Ok(());
    }

    tokio::task::spawn_blocking(move || {
        let cache = BundleCacheFile::new(bundle, PERSISTENCE.bundle_version);
        cache.save_to_path(&BundleCacheFile::default_cache_path())
    })
    .await
    .context("Cache write task panicked")?
}

pub const CACHE_SIGNATURE: &str = "Local Cache";

/// Provider that reads a previously written bundle snapshot.
pub struct CacheVersion;

#[async_trait]
impl CreateDashboardData for CacheVersion {
    fn signature(&self) -> &'static str {
        CACHE_SIGNATURE
    }

    async fn create_dashboard_data(&self) -> Result<DashboardBundle> {
        let path = BundleCacheFile::default_cache_path();
        let cache = tokio::task::spawn_blocking(move || BundleCacheFile::load_from_path(&path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load cache file")?;

        log::info!("✅ Cache loaded: {} markets", cache.bundle.catalog.len());
        Ok(cache.bundle)
    }
}
