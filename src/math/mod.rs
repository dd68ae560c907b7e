//! Mathematical utilities for the generation pipeline

/// Point distance metrics over grid coordinates
pub mod metrics;
