//! Configuration settings structures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vitals_types::VitalKind;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub logging: LoggingSettings,
	pub environment: EnvironmentSettings,
	/// Vital kinds to register on top of the built-in defaults, keyed by
	/// the identifier carried on records
	pub vitals: HashMap<String, VitalKindSettings>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			logging: LoggingSettings::default(),
			environment: EnvironmentSettings::default(),
			vitals: HashMap::new(),
		}
	}
}

impl Settings {
	/// Address the HTTP server binds to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Vital kinds declared in configuration, converted to domain
	/// descriptors
	pub fn configured_vital_kinds(&self) -> Vec<VitalKind> {
		self.vitals
			.iter()
			.map(|(id, kind)| VitalKind {
				id: id.clone(),
				label: kind.label.clone().unwrap_or_else(|| id.clone()),
				unit: kind.unit.clone(),
			})
			.collect()
	}
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Additional vital kind declared in configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct VitalKindSettings {
	pub label: Option<String>,
	pub unit: Option<String>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log output formats
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: false,
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_bind_the_conventional_port() {
		let settings = Settings::default();
		assert_eq!(settings.bind_address(), "0.0.0.0:8080");
		assert!(settings.vitals.is_empty());
	}

	#[test]
	fn configured_kinds_fall_back_to_the_id_as_label() {
		let mut settings = Settings::default();
		settings.vitals.insert(
			"BloodPressure".to_string(),
			VitalKindSettings {
				label: None,
				unit: Some("mmHg".to_string()),
			},
		);

		let kinds = settings.configured_vital_kinds();
		assert_eq!(kinds.len(), 1);
		assert_eq!(kinds[0].id, "BloodPressure");
		assert_eq!(kinds[0].label, "BloodPressure");
		assert_eq!(kinds[0].unit.as_deref(), Some("mmHg"));
	}
}
