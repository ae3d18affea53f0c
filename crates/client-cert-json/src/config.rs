// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::BundleError;
use std::path::{Path, PathBuf};

pub const CLIENT_CERT_FILE: &str = "tee-client.crt";
pub const CLIENT_KEY_FILE: &str = "tee-client.key";
pub const CA_CERT_FILE: &str = "ecs-ca.crt";
pub const OUTPUT_FILE: &str = "client-cert.json";

// Base directory is shared by inputs and output
#[derive(Clone, Debug, PartialEq)]
pub struct BundleConfig {
    pub(crate) base_dir: PathBuf,
    pub(crate) client_cert: String,
    pub(crate) client_key: String,
    pub(crate) ca_cert: String,
    pub(crate) output: String,
}

impl BundleConfig {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> BundleConfig {
        BundleConfig {
            base_dir: base_dir.into(),
            client_cert: CLIENT_CERT_FILE.to_string(),
            client_key: CLIENT_KEY_FILE.to_string(),
            ca_cert: CA_CERT_FILE.to_string(),
            output: OUTPUT_FILE.to_string(),
        }
    }

    /// Config rooted at the directory holding the running executable.
    ///
    /// # Errors
    /// Fails if the executable path can't be resolved or has no parent
    pub fn from_exe_dir() -> Result<BundleConfig, BundleError> {
        let exe = std::env::current_exe().map_err(BundleError::ExeDir)?;
        let dir = exe.parent().ok_or(BundleError::NoExeDir)?;
        Ok(Self::new(dir))
    }

    #[must_use]
    pub fn set_client_cert(self, client_cert: String) -> BundleConfig {
        Self {
            client_cert,
            ..self
        }
    }

    #[must_use]
    pub fn set_client_key(self, client_key: String) -> BundleConfig {
        Self { client_key, ..self }
    }

    #[must_use]
    pub fn set_ca_cert(self, ca_cert: String) -> BundleConfig {
        Self { ca_cert, ..self }
    }

    #[must_use]
    pub fn set_output(self, output: String) -> BundleConfig {
        Self { output, ..self }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn client_cert_name(&self) -> &str {
        &self.client_cert
    }

    #[must_use]
    pub fn client_key_name(&self) -> &str {
        &self.client_key
    }

    #[must_use]
    pub fn ca_cert_name(&self) -> &str {
        &self.ca_cert
    }

    #[must_use]
    pub fn client_cert_path(&self) -> PathBuf {
        self.base_dir.join(&self.client_cert)
    }

    #[must_use]
    pub fn client_key_path(&self) -> PathBuf {
        self.base_dir.join(&self.client_key)
    }

    #[must_use]
    pub fn ca_cert_path(&self) -> PathBuf {
        self.base_dir.join(&self.ca_cert)
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }

    /// Input files in read order: client certificate, client key, CA certificate
    #[must_use]
    pub fn inputs(&self) -> [PathBuf; 3] {
        [
            self.client_cert_path(),
            self.client_key_path(),
            self.ca_cert_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = BundleConfig::new("/etc/certs");
        assert_eq!(config.base_dir(), Path::new("/etc/certs"));
        assert_eq!(
            config.inputs(),
            [
                PathBuf::from("/etc/certs/tee-client.crt"),
                PathBuf::from("/etc/certs/tee-client.key"),
                PathBuf::from("/etc/certs/ecs-ca.crt"),
            ]
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/etc/certs/client-cert.json")
        );
    }

    #[test]
    fn test_overrides() {
        let config = BundleConfig::new("certs")
            .set_client_cert("a.crt".into())
            .set_client_key("a.key".into())
            .set_ca_cert("ca.pem".into())
            .set_output("out.json".into());
        assert_eq!(config.client_cert_path(), Path::new("certs").join("a.crt"));
        assert_eq!(config.client_key_path(), Path::new("certs").join("a.key"));
        assert_eq!(config.ca_cert_path(), Path::new("certs").join("ca.pem"));
        assert_eq!(config.output_path(), Path::new("certs").join("out.json"));
    }

    #[test]
    fn test_exe_dir() -> anyhow::Result<()> {
        let config = BundleConfig::from_exe_dir()?;
        let exe = std::env::current_exe()?;
        assert_eq!(Some(config.base_dir()), exe.parent());
        Ok(())
    }
}
