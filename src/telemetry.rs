//! Tracing initialization. All diagnostics go to stderr; stdout carries only
//! event records.

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::remap::keynames::get_key_name;
use crate::util;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber (stderr fmt layer + `RUST_LOG` filter) and
/// log the resolved configuration.
pub fn init_tracing(cfg: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid RUST_LOG '{}': {e}", cfg.log_filter);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // Use option_env! for git sha to avoid build errors outside git repo
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "capsremap starting"
    );

    info!(
        rules = cfg.table.len(),
        held_key = cfg.layer.as_ref().map_or("<none>", |l| get_key_name(l.key)),
        delay = %util::format_duration(cfg.delay),
        config = %cfg.source.as_ref().map_or_else(|| "<built-in>".to_string(), |p| p.display().to_string()),
        log_filter = %cfg.log_filter,
        "Configuration loaded"
    );

    for (source, target) in cfg.table.iter() {
        debug!(
            source = get_key_name(source),
            target = get_key_name(target),
            "remap rule"
        );
    }
    if let Some(layer) = &cfg.layer {
        for (source, target) in layer.table.iter() {
            debug!(
                held = get_key_name(layer.key),
                source = get_key_name(source),
                target = get_key_name(target),
                "held-layer rule"
            );
        }
    }
}
