//! Registry of known vital kinds
//!
//! Write-time membership validation consults this registry, so new kinds are
//! added here (or via configuration) without touching aggregation logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Descriptor for a measurable vital kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VitalKind {
	/// Identifier carried on records, matched case-sensitively
	pub id: String,
	/// Human-readable name
	pub label: String,
	/// Unit of measurement, when one applies
	pub unit: Option<String>,
}

impl VitalKind {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			unit: None,
		}
	}

	pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
		self.unit = Some(unit.into());
		self
	}
}

/// Registry of vital kinds accepted at write time.
#[derive(Debug, Clone, Default)]
pub struct VitalRegistry {
	kinds: HashMap<String, VitalKind>,
}

impl VitalRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry seeded with the kinds every deployment understands
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register(VitalKind::new("HeartRate", "Heart rate").with_unit("bpm"));
		registry.register(VitalKind::new("Temperature", "Body temperature").with_unit("°C"));
		registry
	}

	/// Register a kind, replacing any previous descriptor with the same id
	pub fn register(&mut self, kind: VitalKind) -> Option<VitalKind> {
		self.kinds.insert(kind.id.clone(), kind)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.kinds.contains_key(id)
	}

	pub fn get(&self, id: &str) -> Option<&VitalKind> {
		self.kinds.get(id)
	}

	/// Known kind identifiers, sorted for stable presentation
	pub fn ids(&self) -> Vec<String> {
		let mut ids: Vec<String> = self.kinds.keys().cloned().collect();
		ids.sort();
		ids
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}
