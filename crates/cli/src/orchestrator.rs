//! Run sequencing: resolve groups, resolve instances, fetch keys, write secrets

use crate::config::Config;
use crate::writer::SecretWriter;
use std::path::PathBuf;
use svckeys_cloud::client::build_http_client;
use svckeys_cloud::{
    IamSessionProvider, InstanceLookup, KeyFetcher, ResourceClient, ResourceGroupLookup,
    ResourceResolver, ServiceKeyLookup,
};
use svckeys_core::{Error, Manifest, Result};
use svckeys_transform::ParserRegistry;
use svckeys_utils::ensure_dir;

/// The provider-side collaborators of a run
#[derive(Clone, Copy)]
pub struct Remote<'a> {
    pub groups: &'a dyn ResourceGroupLookup,
    pub instances: &'a dyn InstanceLookup,
    pub keys: &'a dyn ServiceKeyLookup,
}

impl<'a, T> From<&'a T> for Remote<'a>
where
    T: ResourceGroupLookup + InstanceLookup + ServiceKeyLookup,
{
    fn from(provider: &'a T) -> Self {
        Self {
            groups: provider,
            instances: provider,
            keys: provider,
        }
    }
}

/// What a run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Secret files written, in processing order
    pub written: Vec<PathBuf>,
    /// Outputs skipped because no credentials were found for them
    pub skipped: Vec<String>,
    /// Resolution misses reported during the run
    pub misses: Vec<Error>,
}

pub struct Orchestrator<'a> {
    writer: SecretWriter,
    remote: Remote<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(writer: SecretWriter, remote: Remote<'a>) -> Self {
        Self { writer, remote }
    }

    /// Process every request of `manifest`.
    ///
    /// Resolution misses are printed and the run continues; key lookup,
    /// transformation and write errors abort it.
    pub async fn run(&self, manifest: &Manifest) -> Result<RunSummary> {
        self.writer.ensure_supports(&manifest.data)?;

        let mut summary = RunSummary::default();
        let resolver = ResourceResolver::new(self.remote.groups, self.remote.instances);

        let groups = resolver
            .resolve_groups(&manifest.account, &manifest.data)
            .await;
        report(&groups.misses);
        summary.misses.extend(groups.misses);

        let resolved = resolver
            .resolve_instances(&manifest.data, &groups.value, &manifest.region)
            .await;
        report(&resolved.misses);
        summary.misses.extend(resolved.misses);

        let fetcher = KeyFetcher::new(self.remote.keys);
        for (service, request) in resolved.value.iter() {
            let keys = fetcher.fetch(request).await?;
            match self.writer.compose(service, &keys, &request.output)? {
                Some(path) => summary.written.push(path),
                None => summary.skipped.push(request.output.clone()),
            }
        }

        tracing::debug!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            misses = summary.misses.len(),
            "run finished"
        );
        Ok(summary)
    }
}

fn report(misses: &[Error]) {
    for miss in misses {
        println!("{miss}");
    }
}

/// Execute a full run against IBM Cloud
pub async fn run(config: Config) -> Result<RunSummary> {
    ensure_dir(&config.output.output_dir)?;

    let manifest = Manifest::load(&config.input_file)?;
    tracing::info!(
        account = %manifest.account,
        region = %manifest.region,
        requests = manifest.data.len(),
        "loaded manifest"
    );

    let writer = SecretWriter::new(config.output, ParserRegistry::with_defaults());

    // IAM is only contacted on the first lookup, after the parser preflight
    let http = build_http_client()?;
    let iam = IamSessionProvider::new(http.clone(), &config.endpoints);
    let client = ResourceClient::connect(http, config.endpoints, iam, config.api_key);

    Orchestrator::new(writer, Remote::from(&client))
        .run(&manifest)
        .await
}
