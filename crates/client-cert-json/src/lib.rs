// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;

pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use bundle::CertificateBundle;
pub use config::BundleConfig;
pub use error::BundleError;

/// Init logging
///
/// Diagnostics go to stderr, filtered by `CLIENT_CERT_LOG` (default `warn`),
/// so the summary printed on stdout stays readable.
///
/// # Errors
///
/// Will return `Err` if failed to initialize logging
pub fn trace_init() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt};

    let env_filter =
        EnvFilter::try_from_env("CLIENT_CERT_LOG").unwrap_or_else(|_| EnvFilter::from("warn"));
    let output = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time();

    // journald only when started by a systemd unit
    let journald = std::env::var_os("INVOCATION_ID").and_then(|_| tracing_journald::layer().ok());

    let subscriber = tracing_subscriber::registry()
        .with(journald.with_filter(LevelFilter::INFO))
        .with(output.with_filter(env_filter));

    tracing::subscriber::set_global_default(subscriber)
        .context("tracing shouldn't already have been set up")?;
    Ok(())
}
