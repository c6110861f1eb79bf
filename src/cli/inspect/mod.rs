//! `keys` and `models` commands - offline views of the registry

use std::fmt::Write as _;
use std::sync::Arc;

use clap::Args;

use crate::domain::model::default_registry;
use crate::domain::{CredentialResolver, CredentialStatus, ModelRegistry, ProviderName};
use crate::infrastructure::credentials::EnvSecretStore;

#[derive(Args, Debug, Clone, Default)]
pub struct KeysArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Only list models whose key is missing
    #[arg(long)]
    pub missing: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelsArgs {
    /// Only list models served by this provider
    #[arg(long)]
    pub provider: Option<ProviderName>,

    #[arg(long)]
    pub json: bool,
}

fn env_resolver() -> CredentialResolver {
    CredentialResolver::new(Arc::new(EnvSecretStore::new()))
}

pub fn run_keys(args: KeysArgs) -> anyhow::Result<()> {
    let report = env_resolver().report(&default_registry());
    let report: Vec<CredentialStatus> = report
        .into_iter()
        .filter(|status| !args.missing || !status.present)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_keys(&report));
    }
    Ok(())
}

pub fn run_models(args: ModelsArgs) -> anyhow::Result<()> {
    let registry = default_registry();
    let resolver = env_resolver();

    if args.json {
        let descriptors: Vec<_> = registry
            .iter()
            .filter(|d| args.provider.is_none_or(|p| d.provider == p))
            .collect();
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        print!("{}", render_models(&registry, &resolver, args.provider));
    }
    Ok(())
}

fn render_keys(report: &[CredentialStatus]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<52} {:<12} {:<24} KEY", "MODEL", "PROVIDER", "ENV");
    for status in report {
        let _ = writeln!(
            out,
            "{:<52} {:<12} {:<24} {}",
            status.model_id,
            status.provider,
            status.api_key_env,
            if status.present { "present" } else { "missing" }
        );
    }
    out
}

fn render_models(
    registry: &ModelRegistry,
    resolver: &CredentialResolver,
    provider: Option<ProviderName>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<52} {:<12} {:<9} NOTES", "MODEL", "PROVIDER", "READY");
    for descriptor in registry
        .iter()
        .filter(|d| provider.is_none_or(|p| d.provider == p))
    {
        let _ = writeln!(
            out,
            "{:<52} {:<12} {:<9} {}",
            descriptor.model_id,
            descriptor.provider,
            if resolver.is_available(descriptor) { "yes" } else { "no" },
            descriptor.comment.as_deref().unwrap_or("")
        );
    }
    out
}
