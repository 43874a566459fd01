use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Parent directory of every upload folder.
    pub upload_root: PathBuf,
    /// Prefix for image, QR and view links handed back to clients.
    pub public_url: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = env_or("CAMPUS_HOST", "127.0.0.1");
        let port: u16 = env_or("CAMPUS_PORT", "8000")
            .parse()
            .context("CAMPUS_PORT is not a valid port")?;
        let db_path: PathBuf = env_or("CAMPUS_DB_PATH", "campus.db").into();
        let upload_root: PathBuf = env_or("CAMPUS_UPLOAD_ROOT", ".").into();
        let public_url = normalize_public_url(&env_or("CAMPUS_PUBLIC_URL", "http://127.0.0.1:8000"));
        let max_upload_mb: usize = env_or("CAMPUS_MAX_UPLOAD_MB", "20")
            .parse()
            .context("CAMPUS_MAX_UPLOAD_MB is not a number")?;

        let config = Self {
            host,
            port,
            db_path,
            upload_root,
            public_url,
            max_upload_bytes: upload_limit_bytes(max_upload_mb)?,
        };
        info!(
            "Config: db={} uploads={} public_url={}",
            config.db_path.display(),
            config.upload_root.display(),
            config.public_url
        );
        Ok(config)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn upload_limit_bytes(megabytes: usize) -> Result<usize> {
    megabytes
        .checked_mul(1024 * 1024)
        .context("CAMPUS_MAX_UPLOAD_MB is too large")
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Links are built as `{public_url}/...`, so drop any trailing slash.
pub fn normalize_public_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_loses_trailing_slashes() {
        assert_eq!(normalize_public_url("http://campus.local/"), "http://campus.local");
        assert_eq!(normalize_public_url(" http://127.0.0.1:8000 "), "http://127.0.0.1:8000");
    }

    #[test]
    fn upload_limit_overflow_is_an_error() {
        assert_eq!(upload_limit_bytes(20).unwrap(), 20 * 1024 * 1024);
        assert!(upload_limit_bytes(usize::MAX).is_err());
    }

    #[test]
    fn addr_rejects_bad_host() {
        let config = Config {
            host: "not a host".into(),
            port: 8000,
            db_path: "campus.db".into(),
            upload_root: ".".into(),
            public_url: "http://127.0.0.1:8000".into(),
            max_upload_bytes: 1024,
        };
        assert!(config.addr().is_err());
    }
}
