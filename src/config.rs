use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub sheet_api_url: Option<String>,
    pub service_host: String,
    pub service_port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let sheet_api_url = env::var("SHEET_API_URL").ok();

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Config {
            sheet_api_url,
            service_host,
            service_port,
            static_dir,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Sheet API URL: {}",
            self.sheet_api_url.as_deref().unwrap_or("unset")
        );
        tracing::info!("  Static asset root: {}", self.static_dir.display());
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // These tests mutate process-wide environment variables, so they take a
    // shared lock to keep parallel test threads from interleaving.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn clear_env_vars() {
        env::remove_var("SHEET_API_URL");
        env::remove_var("SERVICE_HOST");
        env::remove_var("SERVICE_PORT");
        env::remove_var("STATIC_DIR");
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_env();
        clear_env_vars();
        env::set_var("SHEET_API_URL", "https://example.com/sheet");
        env::set_var("SERVICE_HOST", "127.0.0.1");
        env::set_var("SERVICE_PORT", "8080");
        env::set_var("STATIC_DIR", "assets");

        let config = Config::from_env().unwrap();
        clear_env_vars();

        assert_eq!(
            config.sheet_api_url,
            Some("https://example.com/sheet".to_string())
        );
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_env();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.sheet_api_url, None);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 5000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_missing_sheet_api_url_is_not_an_error() {
        let _guard = lock_env();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        // The URL is simply unavailable to templates; startup must succeed.
        assert!(config.sheet_api_url.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_env();
        clear_env_vars();
        env::set_var("SERVICE_PORT", "not-a-number");

        let result = Config::from_env();
        clear_env_vars();

        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_env();
        clear_env_vars();
        env::set_var("SERVICE_PORT", "99999");

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }
}
