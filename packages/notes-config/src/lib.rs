mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Security, Service, Storage};

use std::{env, fs, path::Path};

pub const ENV_PG_DSN: &str = "NOTES_PG_DSN";
pub const ENV_HTTP_BIND: &str = "NOTES_HTTP_BIND";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	apply_env_overrides(&mut cfg);
	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Parses a config document without touching the environment or validating it.
pub fn parse(raw: &str) -> Result<Config> {
	toml::from_str(raw).map_err(|err| Error::ParseConfig { path: Default::default(), source: err })
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !cfg.service.api_prefix.is_empty() && !cfg.service.api_prefix.starts_with('/') {
		return Err(Error::Validation {
			message: "service.api_prefix must start with '/' when set.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

pub fn normalize(cfg: &mut Config) {
	let prefix = cfg.service.api_prefix.trim().trim_end_matches('/');

	cfg.service.api_prefix = prefix.to_string();
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
}

fn apply_env_overrides(cfg: &mut Config) {
	if let Ok(dsn) = env::var(ENV_PG_DSN)
		&& !dsn.trim().is_empty()
	{
		cfg.storage.postgres.dsn = dsn;
	}
	if let Ok(bind) = env::var(ENV_HTTP_BIND)
		&& !bind.trim().is_empty()
	{
		cfg.service.http_bind = bind;
	}
}
