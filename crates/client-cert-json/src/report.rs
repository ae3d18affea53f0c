// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::Path;

use console::{Emoji, style};

use crate::config::BundleConfig;
use crate::error::BundleError;

static CHECK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");

pub const TERRAFORM_CONSUMER: &str = "nautilus-enclave/certs.tf";

/// Summary printed after the bundle was written
///
/// # Errors
/// Fails if `out` can't be written
pub fn report_success<W: Write>(out: &mut W, config: &BundleConfig, path: &Path) -> io::Result<()> {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    writeln!(out, "{CHECK}{}", style(format!("Created {name}")).green())?;
    writeln!(out, "   File: {}", path.display())?;
    writeln!(out)?;
    writeln!(out, "This file contains:")?;
    writeln!(
        out,
        "  - client_cert: TEE client certificate (from {})",
        config.client_cert_name()
    )?;
    writeln!(
        out,
        "  - client_key: TEE client private key (from {})",
        config.client_key_name()
    )?;
    writeln!(
        out,
        "  - ca_cert: CA certificate to verify server certificate (from {})",
        config.ca_cert_name()
    )?;
    writeln!(out)?;
    writeln!(out, "To use with Terraform:")?;
    writeln!(out, "  This file will be read by {TERRAFORM_CONSUMER}")
}

/// Summary printed when inputs couldn't be read
///
/// # Errors
/// Fails if `err` can't be written
pub fn report_failure<W: Write>(
    err: &mut W,
    config: &BundleConfig,
    error: &BundleError,
) -> io::Result<()> {
    writeln!(
        err,
        "{CROSS}{} {error}",
        style("Error reading certificate files:").for_stderr().red()
    )?;
    writeln!(
        err,
        "   Make sure {}, {}, and {} exist in {}",
        config.client_cert_name(),
        config.client_key_name(),
        config.ca_cert_name(),
        config.base_dir().display()
    )?;
    writeln!(err, "   These are TEE-specific client certificates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_summary() -> anyhow::Result<()> {
        let config = BundleConfig::new("/srv/certs");
        let mut out = Vec::new();
        report_success(&mut out, &config, &config.output_path())?;
        let text = String::from_utf8(out)?;

        assert!(text.contains("Created client-cert.json"));
        assert!(text.contains("   File: /srv/certs/client-cert.json\n"));
        assert!(text.contains("  - client_cert: TEE client certificate (from tee-client.crt)\n"));
        assert!(text.contains("  - client_key: TEE client private key (from tee-client.key)\n"));
        assert!(text.contains(
            "  - ca_cert: CA certificate to verify server certificate (from ecs-ca.crt)\n"
        ));
        assert!(text.ends_with("  This file will be read by nautilus-enclave/certs.tf\n"));
        Ok(())
    }

    #[test]
    fn test_failure_summary() -> anyhow::Result<()> {
        let config = BundleConfig::new("/srv/certs");
        let error = BundleError::Read {
            path: config.client_key_path(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let mut err = Vec::new();
        report_failure(&mut err, &config, &error)?;
        let text = String::from_utf8(err)?;

        assert!(text.contains("Error reading certificate files:"));
        assert!(text.contains("failed to read /srv/certs/tee-client.key"));
        assert!(text.contains(
            "   Make sure tee-client.crt, tee-client.key, and ecs-ca.crt exist in /srv/certs\n"
        ));
        assert!(text.contains("TEE-specific"));
        Ok(())
    }
}
