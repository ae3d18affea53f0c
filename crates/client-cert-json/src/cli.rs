// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::process::ExitCode;

use crate::bundle;
use crate::config::BundleConfig;
use crate::report::{report_failure, report_success};

/// Build the bundle and print the summary.
///
/// Summary goes to `out` on success. A read failure is summarized on `err`
/// and yields `ExitCode::FAILURE`.
///
/// # Errors
/// Write and serialization failures are returned, unreported
pub fn execute<O: Write, E: Write>(
    config: &BundleConfig,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<ExitCode> {
    match bundle::run(config) {
        Ok(output) => {
            report_success(out, config, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_read() => {
            report_failure(err, config, &e)?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
