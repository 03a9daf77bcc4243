use std::env;
use std::path::PathBuf;
use anyhow::{Result, Context};
use axum::http::HeaderValue;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Deployment name reported by `/health`.
    pub environment: String,
    pub upload_dir: PathBuf,
    pub allowed_origin: String,
    pub max_file_size_mb: usize,
    pub ocr_enabled: bool,
    pub tesseract_cmd: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "dev".to_string(),
            upload_dir: PathBuf::from("uploads"),
            allowed_origin: "http://localhost:3000".to_string(),
            max_file_size_mb: 10,
            ocr_enabled: true,
            tesseract_cmd: "tesseract".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing variables
    /// take their defaults; unparseable values are logged and defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // PORT is what most hosting platforms inject, so it wins over SERVER_PORT.
        let server_port = match lookup("PORT") {
            Some(_) => Self::parse_var(&lookup, "PORT", defaults.server_port),
            None => Self::parse_var(&lookup, "SERVER_PORT", defaults.server_port),
        };

        let config = Config {
            server_host: Self::string_var(&lookup, "SERVER_HOST", &defaults.server_host),
            server_port,
            environment: Self::string_var(&lookup, "ENV", &defaults.environment),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            allowed_origin: Self::string_var(&lookup, "ALLOWED_ORIGIN", &defaults.allowed_origin),
            max_file_size_mb: Self::parse_var(&lookup, "MAX_FILE_SIZE_MB", defaults.max_file_size_mb),
            ocr_enabled: Self::parse_var(&lookup, "OCR_ENABLED", defaults.ocr_enabled),
            tesseract_cmd: Self::string_var(&lookup, "TESSERACT_CMD", &defaults.tesseract_cmd),
        };

        config.validate().context("Invalid configuration")?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn string_var<F>(lookup: &F, var_name: &str, default: &str) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(var_name).unwrap_or_else(|| {
            info!("{} not set, using default: {}", var_name, default);
            default.to_string()
        })
    }

    fn parse_var<F, T>(lookup: &F, var_name: &str, default: T) -> T
    where
        F: Fn(&str) -> Option<String>,
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match lookup(var_name) {
            Some(val) => match val.trim().parse() {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    default
                }
            },
            None => {
                info!("{} not set, using default: {:?}", var_name, default);
                default
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.checked_max_file_size_bytes().is_none() {
            return Err(anyhow::anyhow!(
                "MAX_FILE_SIZE_MB is too large: {}MB overflows a byte count",
                self.max_file_size_mb
            ));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }
        if self.tesseract_cmd.trim().is_empty() {
            return Err(anyhow::anyhow!("TESSERACT_CMD must not be empty"));
        }
        self.cors_origin()?;
        Ok(())
    }

    /// The allowed origin as a header value, ready for the CORS layer.
    pub fn cors_origin(&self) -> Result<HeaderValue> {
        let origin = self.allowed_origin.trim();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "ALLOWED_ORIGIN must start with http:// or https://, got {:?}",
                origin
            ));
        }
        HeaderValue::from_str(origin)
            .with_context(|| format!("ALLOWED_ORIGIN is not a valid header value: {:?}", origin))
    }

    fn checked_max_file_size_bytes(&self) -> Option<usize> {
        self.max_file_size_mb.checked_mul(1024 * 1024)
    }

    /// Body limit in bytes. Saturates for configs that skipped `validate()`.
    pub fn max_file_size_bytes(&self) -> usize {
        self.checked_max_file_size_bytes().unwrap_or(usize::MAX)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
