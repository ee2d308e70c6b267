//! Storage abstractions for pluggable backends

pub mod traits;

pub use traits::{
	StorageError, StorageResult, StorageStats, StorageTrait, UserStorageTrait, VitalStorageTrait,
};
