use std::net::IpAddr;

use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://blogly.db";

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub host: IpAddr,
	pub port: u16,
	pub log_level: Level,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{name} has an invalid value {value:?}")]
	Invalid { name: &'static str, value: String },
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds the configuration from any variable source, falling back to
	/// defaults for unset variables.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		Ok(Self {
			database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
			host: parse(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?,
			port: parse(&lookup, "PORT", 3000)?,
			log_level: parse(&lookup, "LOG_LEVEL", Level::INFO)?,
		})
	}
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
	F: Fn(&str) -> Option<String>,
	T: std::str::FromStr,
{
	match lookup(name) {
		Some(value) => value
			.trim()
			.parse()
			.map_err(|_| ConfigError::Invalid { name, value }),
		None => Ok(default),
	}
}
