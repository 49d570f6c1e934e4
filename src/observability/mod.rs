//! Tracing initialization and subscriber setup.
//!
//! The engine itself only emits `tracing` spans and events; hosts that embed
//! it in a larger application will usually install their own subscriber and
//! never call into this module. For standalone use, [`init_tracing`] wires up
//! a formatted subscriber filtered by the configured level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::EngineConfig;

/// Initializes a formatted tracing subscriber from the engine configuration.
///
/// The filter directive comes from `config.trace_level` (default `"info"`);
/// an unparsable directive falls back to `"info"` rather than failing, since
/// observability is optional.
///
/// Idempotent: safe to call multiple times, only the first call installs a
/// subscriber.
pub fn init_tracing(config: &EngineConfig) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
