use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://ecommerce.db";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONN: u32 = 5;
const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";

/// Digest used to sign uploads. Cloudinary accepts SHA-1 from every account,
/// SHA-256 only from accounts configured for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => bail!("unsupported signature algorithm: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
    pub api_base: String,
    pub signature_algorithm: SignatureAlgorithm,
}

impl CloudinaryConfig {
    pub fn init() -> Result<Self> {
        let cloud_name =
            std::env::var("CLOUD_NAME").context("Missing environment variable: CLOUD_NAME")?;
        let api_key = std::env::var("API_KEY").context("Missing environment variable: API_KEY")?;
        let api_secret =
            std::env::var("API_SECRET").context("Missing environment variable: API_SECRET")?;
        let api_base = std::env::var("CLOUDINARY_API_BASE")
            .unwrap_or_else(|_| DEFAULT_CLOUDINARY_API_BASE.to_string());
        let signature_algorithm = match std::env::var("CLOUDINARY_SIGNATURE_ALGORITHM") {
            Ok(value) => value
                .parse()
                .context("CLOUDINARY_SIGNATURE_ALGORITHM must be sha1 or sha256")?,
            Err(_) => SignatureAlgorithm::default(),
        };

        Ok(Self {
            cloud_name,
            api_key,
            api_secret: SecretString::from(api_secret),
            api_base,
            signature_algorithm,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_conn: u32,
    pub port: u16,
    pub cloudinary: CloudinaryConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            Err(_) => DEFAULT_PORT,
        };

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(max_str) => max_str
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => DEFAULT_DB_MAX_CONN,
        };

        let cloudinary = CloudinaryConfig::init().context("failed cloudinary config")?;

        Ok(Self {
            database_url,
            db_max_conn,
            port,
            cloudinary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_algorithm_parses_case_insensitively() {
        assert_eq!("sha1".parse::<SignatureAlgorithm>().unwrap(), SignatureAlgorithm::Sha1);
        assert_eq!(" SHA256 ".parse::<SignatureAlgorithm>().unwrap(), SignatureAlgorithm::Sha256);
        assert!("md5".parse::<SignatureAlgorithm>().is_err());
        assert_eq!(SignatureAlgorithm::default(), SignatureAlgorithm::Sha1);
    }
}
