//! Opt-in cache counters (`metrics` feature).
//!
//! Recording is split from reading: the cache writes through
//! [`traits::LruMetricsRecorder`], callers read a plain
//! [`snapshot::LruMetricsSnapshot`] through
//! [`traits::MetricsSnapshotProvider`]. Without the feature none of this is
//! compiled and the cache carries no counter fields.

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
