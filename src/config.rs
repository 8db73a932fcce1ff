use std::net::IpAddr;
use std::path::PathBuf;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub contact_to: String,
    pub smtp: SmtpConfig,
    pub mail_timeout_secs: u64,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub cors_origins: Vec<String>,
    pub rate_limit: u32,
    pub rate_window_secs: u64,
    pub honeypot_field: Option<String>,
    pub site_dir: PathBuf,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub tls: TlsMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TlsMode {
    StartTls,
    Tls,
    None,
}

impl TlsMode {
    fn parse(s: &str) -> Result<Self, String> {
        match s {
            "starttls" => Ok(TlsMode::StartTls),
            "tls" => Ok(TlsMode::Tls),
            "none" => Ok(TlsMode::None),
            other => Err(format!("Invalid FOLIO_SMTP_TLS: {other} (expected starttls, tls or none)")),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let contact_to = env_required("FOLIO_CONTACT_TO")?;
        let smtp_user = env_required("FOLIO_SMTP_USER")?;
        let smtp_pass = env_required("FOLIO_SMTP_PASS")?;

        let host: IpAddr = env_or("FOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = env_or("FOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_PORT: {e}"))?;

        let smtp = SmtpConfig {
            host: env_or("FOLIO_SMTP_HOST", "smtp.gmail.com"),
            port: env_or("FOLIO_SMTP_PORT", "587")
                .parse()
                .map_err(|e| format!("Invalid FOLIO_SMTP_PORT: {e}"))?,
            from: env_or("FOLIO_SMTP_FROM", &smtp_user),
            user: smtp_user,
            pass: smtp_pass,
            tls: TlsMode::parse(&env_or("FOLIO_SMTP_TLS", "starttls"))?,
        };

        let mail_timeout_secs: u64 = env_or("FOLIO_MAIL_TIMEOUT_SECS", "15")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_MAIL_TIMEOUT_SECS: {e}"))?;

        let max_body_size: usize = env_or("FOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = split_list(&env_or("FOLIO_TRUSTED_PROXIES", ""))
            .map(|s| {
                s.parse()
                    .map_err(|e| format!("Invalid FOLIO_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cors_origins: Vec<String> = split_list(&env_or("FOLIO_CORS_ORIGINS", ""))
            .map(str::to_string)
            .collect();

        let rate_limit: u32 = env_or("FOLIO_RATE_LIMIT", "5")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_RATE_LIMIT: {e}"))?;

        let rate_window_secs: u64 = env_or("FOLIO_RATE_WINDOW_SECS", "600")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_RATE_WINDOW_SECS: {e}"))?;

        let honeypot_field = Some(env_or("FOLIO_HONEYPOT_FIELD", "website"))
            .filter(|s| !s.trim().is_empty());

        let site_dir = PathBuf::from(env_or("FOLIO_SITE_DIR", "public"));
        let log_level = env_or("FOLIO_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            contact_to,
            smtp,
            mail_timeout_secs,
            max_body_size,
            trusted_proxies,
            cors_origins,
            rate_limit,
            rate_window_secs,
            honeypot_field,
            site_dir,
            log_level,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
