//! # chaos-configmaps
//!
//! Command-line interface for the ConfigMaps declared by chaos experiments.
//!
//! ## Usage
//!
//! ```bash
//! # Does the experiment declare any ConfigMaps?
//! chaos-configmaps check pod-delete -n litmus
//!
//! # Ensure they exist, creating missing ones from inline data
//! chaos-configmaps validate pod-delete -n litmus
//!
//! # Print the volumes and mounts to inject into the runner pod
//! chaos-configmaps volumes pod-delete -n litmus -o json
//!
//! # Create every declared ConfigMap without checking first
//! chaos-configmaps create pod-delete -n litmus
//! ```

use anyhow::{Context, Result};
use chaos_configmap_reconciler::prelude::*;
use chaos_configmap_reconciler::observability::{self, metrics};
use clap::{Parser, Subcommand, ValueEnum};
use kube::config::{Config, KubeConfigOptions};
use kube::Client;
use serde::Serialize;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// ChaosExperiment ConfigMap reconciler CLI
#[derive(Parser)]
#[command(name = "chaos-configmaps", version, long_version = LONG_VERSION)]
#[command(
    about = "Validate, create and mount the ConfigMaps declared by a ChaosExperiment",
    long_about = None,
    after_help = "\
Examples:
  chaos-configmaps check pod-delete -n litmus
  chaos-configmaps volumes pod-delete -n litmus -o json
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Namespace of the experiment and its ConfigMaps (defaults to APP_NAMESPACE, then "default")
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Kubernetes context to use
    #[arg(short, long, global = true)]
    context: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,

    /// Print Prometheus metrics after the command finishes
    #[arg(long, global = true)]
    metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether an experiment declares ConfigMaps
    Check {
        /// Name of the ChaosExperiment
        #[arg(value_name = "EXPERIMENT")]
        experiment: String,
    },
    /// Ensure the declared ConfigMaps exist, creating missing ones from inline data
    Validate {
        /// Name of the ChaosExperiment
        #[arg(value_name = "EXPERIMENT")]
        experiment: String,
    },
    /// Validate, then print the volumes and volume mounts for the runner pod
    Volumes {
        /// Name of the ChaosExperiment
        #[arg(value_name = "EXPERIMENT")]
        experiment: String,
    },
    /// Create every declared ConfigMap without checking for existing ones
    Create {
        /// Name of the ChaosExperiment
        #[arg(value_name = "EXPERIMENT")]
        experiment: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    experiment: &'a str,
    namespace: &'a str,
    has_config_maps: bool,
    config_maps: Vec<ConfigMapEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateReport<'a> {
    experiment: &'a str,
    namespace: &'a str,
    accepted: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // rustls 0.23 needs a process-wide provider before any TLS connection
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let cli = Cli::parse();
    let config = ReconcilerConfig::from_env();
    observability::init_tracing(&config);
    if config.enable_metrics {
        metrics::register_metrics()?;
    }

    let client = kube_client(cli.context.as_deref()).await?;
    let cluster = KubeClusterApi::new(client);
    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| config.app_namespace.clone());
    let engine = EngineDetails::new(namespace, &cluster);
    let reconciler = ConfigMapReconciler::new(config);

    match &cli.command {
        Commands::Check { experiment } => {
            let (present, config_maps) = reconciler.check(&engine, experiment).await?;
            print_output(
                cli.output,
                &CheckReport {
                    experiment,
                    namespace: &engine.app_namespace,
                    has_config_maps: present,
                    config_maps,
                },
            )?;
        }
        Commands::Validate { experiment } => {
            let (_, entries) = reconciler.check(&engine, experiment).await?;
            let accepted = reconciler.validate(&entries, &engine).await?;
            print_output(
                cli.output,
                &ValidateReport {
                    experiment,
                    namespace: &engine.app_namespace,
                    accepted: accepted.into_iter().map(|e| e.name).collect(),
                },
            )?;
        }
        Commands::Volumes { experiment } => {
            let prepared = reconciler.prepare_experiment(&engine, experiment).await?;
            print_output(cli.output, &prepared)?;
        }
        Commands::Create { experiment } => {
            let (_, entries) = reconciler.check(&engine, experiment).await?;
            reconciler.create(&entries, &engine).await?;
            println!(
                "Created {} ConfigMap(s) in namespace {}",
                entries.len(),
                engine.app_namespace
            );
        }
    }

    if cli.metrics {
        print!("{}", metrics::gather_metrics()?);
    }
    Ok(())
}

/// Kubernetes client for the requested kubeconfig context, or the ambient default
async fn kube_client(context: Option<&str>) -> Result<Client> {
    let Some(context) = context else {
        return Client::try_default()
            .await
            .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.");
    };

    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };
    let config = Config::from_kubeconfig(&options)
        .await
        .with_context(|| format!("Failed to load kubeconfig context '{context}'"))?;
    Client::try_from(config).context("Failed to create Kubernetes client")
}

fn print_output<T: Serialize>(format: OutputFormat, value: &T) -> Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
    };
    print!("{rendered}");
    Ok(())
}
