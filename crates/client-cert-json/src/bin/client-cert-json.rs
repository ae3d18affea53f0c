// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use client_cert_json::BundleConfig;
use client_cert_json::cli::execute;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "client-cert-json")]
#[command(
    about = "Bundle TEE mTLS client certificates into client-cert.json",
    long_about = None
)]
struct Cli {
    /// Directory holding the certificates (defaults to the executable's directory)
    #[arg(long, env = "CLIENT_CERT_DIR")]
    cert_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    client_cert_json::trace_init()?;

    let cli = Cli::parse();
    debug!("CLI is {:#?}", cli);

    let config = match cli.cert_dir {
        Some(dir) => BundleConfig::new(dir),
        None => BundleConfig::from_exe_dir()?,
    };

    execute(
        &config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
