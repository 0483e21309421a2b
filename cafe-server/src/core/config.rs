/// Server configuration
///
/// # Environment variables
///
/// All options can be overridden via environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | cafe.db | SQLite database file |
/// | PUBLIC_BASE_URL | http://localhost:3000 | Base of the QR ordering URLs |
/// | QR_IMAGE_ENDPOINT | https://api.qrserver.com/v1/create-qr-code/ | External image collaborator |
/// | QR_IMAGE_SIZE | 300x300 | Requested image size |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | (none) | Daily rolling log directory |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Public base URL encoded into QR payloads
    pub public_base_url: String,
    /// External QR image generation endpoint
    pub qr_image_endpoint: String,
    /// Requested QR image size (WxH)
    pub qr_image_size: String,
    /// Tracing log level
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafe.db".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            qr_image_endpoint: std::env::var("QR_IMAGE_ENDPOINT")
                .unwrap_or_else(|_| "https://api.qrserver.com/v1/create-qr-code/".into()),
            qr_image_size: std::env::var("QR_IMAGE_SIZE").unwrap_or_else(|_| "300x300".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the volatile parts of the config, for tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }
}
