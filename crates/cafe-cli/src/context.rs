use anyhow::Context;
use cafe_config::CafeConfig;
use cafe_db::service::CafeService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: CafeService,
    pub config: CafeConfig,
}

impl AppContext {
    /// Open the store at `db_override`, or at the configured path.
    ///
    /// The parent directory of an on-disk database is created if missing.
    pub async fn init(mut config: CafeConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = db_override {
            config.database.path = path.to_string();
        }

        if let Some(parent) = config.database.parent_dir() {
            std::fs::create_dir_all(&parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let service = CafeService::new_local(&config.database.path, config.money.rounding)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        tracing::debug!(
            path = %config.database.path,
            rounding = ?config.money.rounding,
            "cafe store ready"
        );

        Ok(Self { service, config })
    }

    /// Effective list limit: global `--limit`, else the configured default.
    #[must_use]
    pub fn limit(&self, flag: Option<u32>) -> u32 {
        crate::commands::shared::limit::effective_limit(
            flag,
            self.config.general.default_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use cafe_config::CafeConfig;

    use super::AppContext;

    #[tokio::test]
    async fn override_path_wins_and_parent_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("cafe.db");
        let path = path.to_str().expect("utf-8 path");

        let ctx = AppContext::init(CafeConfig::default(), Some(path))
            .await
            .expect("context should open");

        assert_eq!(ctx.config.database.path, path);
        assert!(dir.path().join("nested").is_dir());
    }

    #[tokio::test]
    async fn limit_falls_back_to_configured_default() {
        let mut config = CafeConfig::default();
        config.general.default_limit = 7;
        let ctx = AppContext::init(config, Some(":memory:"))
            .await
            .expect("context should open");

        assert_eq!(ctx.limit(None), 7);
        assert_eq!(ctx.limit(Some(3)), 3);
    }
}
