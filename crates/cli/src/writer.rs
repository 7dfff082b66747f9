//! Secret composition and persistence

use crate::config::OutputSettings;
use std::path::PathBuf;
use svckeys_core::{RegionalDetails, ResolvedKeyPair, Result, SecretDocument, ServiceType};
use svckeys_transform::ParserRegistry;
use svckeys_utils::write_atomic_string;

pub struct SecretWriter {
    settings: OutputSettings,
    registry: ParserRegistry,
}

impl SecretWriter {
    pub fn new(settings: OutputSettings, registry: ParserRegistry) -> Self {
        Self { settings, registry }
    }

    pub fn output_path(&self, output: &str) -> PathBuf {
        self.settings
            .output_dir
            .join(format!("{output}{}", self.settings.output_suffix))
    }

    /// Fail when the configured parser group cannot handle a service type
    /// that `details` uses
    pub fn ensure_supports(&self, details: &RegionalDetails) -> Result<()> {
        let used = ServiceType::ALL
            .into_iter()
            .filter(|service| !details.requests(*service).is_empty());
        self.registry
            .ensure_supports(&self.settings.parser_group, used)
    }

    /// Transform `keys` and write them as a Secret named `output`.
    ///
    /// Returns `Ok(None)` without touching the file system when both halves of
    /// `keys` are empty. An existing file at the target path is replaced.
    pub fn compose(
        &self,
        service: ServiceType,
        keys: &ResolvedKeyPair,
        output: &str,
    ) -> Result<Option<PathBuf>> {
        if keys.is_empty() {
            tracing::debug!(%service, %output, "no credentials, skipping");
            return Ok(None);
        }

        println!(
            "Processing {service} for output {output}{}",
            self.settings.output_suffix
        );

        let data = self.registry.transform(
            &self.settings.parser_group,
            service,
            keys,
            self.settings.encoding,
        )?;
        let secret = SecretDocument::new(output, &self.settings.namespace, data);

        let path = self.output_path(output);
        write_atomic_string(&path, &secret.to_json_pretty()?)?;
        tracing::info!(%service, path = %path.display(), "wrote secret");
        Ok(Some(path))
    }
}
