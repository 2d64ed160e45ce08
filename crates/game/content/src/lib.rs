//! File loaders for farm snapshots, action logs and engine configuration.
//!
//! This crate reads data that lives outside the engine and hands it to
//! farm-core as typed values:
//! - Engine configuration (TOML)
//! - State snapshots (JSON or RON, chosen by file extension)
//! - Action logs (JSON arrays of `{ createdAt, action }` entries)
//!
//! Nothing loaded here is interpreted beyond decoding; every rule lives in
//! farm-core.

pub mod loaders;

pub use loaders::{
    ActionLogLoader, ConfigLoader, ContentFactory, EngineConfig, FeatureConfig, LoadResult,
    SnapshotFormat, StateLoader,
};
