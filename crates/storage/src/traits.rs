//! Storage traits for pluggable storage implementations

// Re-export the storage traits from the types crate
pub use vitals_types::storage::{
	StorageError, StorageResult, StorageStats, StorageTrait as Storage,
	UserStorageTrait as UserStorage, VitalStorageTrait as VitalStorage,
};
