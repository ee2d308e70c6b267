//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};

use crate::Settings;

/// Load configuration from the optional config file, with `VITALS_`-prefixed
/// environment variables layered on top.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("VITALS").separator("__"))
		.build()?;

	s.try_deserialize()
}
