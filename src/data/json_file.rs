use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::{CreateDashboardData, DashboardBundle};

/// Provider that reads a full bundle from a JSON file, the same shape the
/// original backend served over HTTP. Lets real exported data replace the
/// synthetic demo without a network layer.
pub struct JsonVersion {
    pub path: PathBuf,
}

#[async_trait]
impl CreateDashboardData for JsonVersion {
    fn signature(&self) -> &'static str {
        "JSON Bundle"
    }

    async fn create_dashboard_data(&self) -> Result<DashboardBundle> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .context(format!("Failed to read bundle file: {:?}", self.path))?;
        serde_json::from_slice(&bytes)
            .context(format!("Failed to parse bundle JSON: {:?}", self.path))
    }
}
