// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::BundleConfig;
use crate::error::BundleError;

/// Client certificate material consumed by the TEE provisioning.
///
/// Field order is the key order of the produced JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificateBundle {
    pub client_cert: String,
    pub client_key: String,
    pub ca_cert: String,
}

/// Strip outer whitespace and byte order marks, PEM bodies are kept verbatim.
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn read_text(path: &Path) -> Result<String, BundleError> {
    let raw = fs::read(path).map_err(|source| BundleError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!("read {} bytes from {}", raw.len(), path.display());
    // Content isn't checked for UTF-8, invalid sequences become U+FFFD
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Read all three inputs as text.
///
/// # Errors
/// Fails on the first unreadable file, nothing is returned for the others
pub fn read_all(config: &BundleConfig) -> Result<[String; 3], BundleError> {
    let [cert, key, ca] = config.inputs();
    Ok([read_text(&cert)?, read_text(&key)?, read_text(&ca)?])
}

impl CertificateBundle {
    #[must_use]
    pub fn new(client_cert: &str, client_key: &str, ca_cert: &str) -> Self {
        Self {
            client_cert: trim(client_cert).to_owned(),
            client_key: trim(client_key).to_owned(),
            ca_cert: trim(ca_cert).to_owned(),
        }
    }

    /// # Errors
    /// Fails if any of the input files can't be read
    pub fn from_config(config: &BundleConfig) -> Result<Self, BundleError> {
        let [cert, key, ca] = read_all(config)?;
        Ok(Self::new(&cert, &key, &ca))
    }

    /// Two-space indented JSON, without trailing newline.
    ///
    /// # Errors
    /// Fails if serialization fails
    pub fn to_pretty_json(&self) -> Result<String, BundleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Create or truncate `path` with the pretty JSON.
    ///
    /// # Errors
    /// Fails if serialization or write fails
    pub fn to_file(&self, path: &Path) -> Result<(), BundleError> {
        let json = self.to_pretty_json()?;
        write(path, &json)
    }
}

/// # Errors
/// Fails if file can't be created or written
pub fn write(path: &Path, json: &str) -> Result<(), BundleError> {
    fs::write(path, json).map_err(|source| BundleError::Write {
        path: path.to_owned(),
        source,
    })
}

/// Read inputs, then write the bundle. Returns the output path.
///
/// # Errors
/// `BundleError::Read` if any input is missing (output is left untouched),
/// other variants if serialization or write fails
pub fn run(config: &BundleConfig) -> Result<PathBuf, BundleError> {
    debug!("reading certificates from {}", config.base_dir().display());
    let bundle = CertificateBundle::from_config(config)?;

    let output = config.output_path();
    bundle.to_file(&output)?;
    info!("wrote certificate bundle to {}", output.display());
    Ok(output)
}
