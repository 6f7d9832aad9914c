//! Environment-first configuration.
//!
//! Loads a `.env` file when present, then reads individual variables.
//! Either `OPERATOR_PASSWORD_HASH` (argon2 PHC string) or a plaintext
//! `OPERATOR_PASSWORD` must be set; the plaintext form is hashed at
//! startup and reported as a warning so deployments migrate to the hash.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use carta_core::auth::hash_password;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL the storefront reaches this server at; asset URLs are
    /// minted under it.
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub operator_email: String,
    pub operator_password_hash: String,
    pub session_ttl_hours: i64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub assets: AssetConfig,
    pub auth: AuthConfig,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<ConfigLoad> {
        let mut warnings = Vec::new();

        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("failed to read .env file"),
        }

        let host = env_or("CARTA_HOST", "0.0.0.0");
        let port = env_or("CARTA_PORT", "3000")
            .parse::<u16>()
            .context("CARTA_PORT must be a port number")?;
        let public_base_url =
            env_or("CARTA_PUBLIC_URL", &format!("http://localhost:{port}"));

        let url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL must be set"))?;

        let dir = PathBuf::from(env_or("CARTA_ASSET_DIR", "./assets"));

        let operator_email = std::env::var("OPERATOR_EMAIL")
            .map_err(|_| anyhow!("OPERATOR_EMAIL must be set"))?;
        let operator_password_hash = match std::env::var("OPERATOR_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let password = std::env::var("OPERATOR_PASSWORD").map_err(|_| {
                    anyhow!("set OPERATOR_PASSWORD_HASH or OPERATOR_PASSWORD")
                })?;
                warnings.push(
                    "OPERATOR_PASSWORD is set in plaintext; prefer OPERATOR_PASSWORD_HASH"
                        .to_string(),
                );
                hash_password(&password)
                    .map_err(|e| anyhow!("failed to hash operator password: {e}"))?
            }
        };
        let session_ttl_hours = env_or("CARTA_SESSION_TTL_HOURS", "24")
            .parse::<i64>()
            .context("CARTA_SESSION_TTL_HOURS must be an integer")?;

        Ok(ConfigLoad {
            config: Config {
                server: ServerConfig {
                    host,
                    port,
                    public_base_url,
                },
                database: DatabaseConfig { url },
                assets: AssetConfig { dir },
                auth: AuthConfig {
                    operator_email,
                    operator_password_hash,
                    session_ttl_hours,
                },
            },
            warnings,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
