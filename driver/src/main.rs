use clap::Parser;
use log::info;
use rmscore::prelude::EmptyPolicy;
use rmscore::telemetry::MetricsRecorder;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Batch root-mean-square driver")]
struct Args {
    /// Load named sequences and the empty-input policy from YAML
    #[arg(long, conflicts_with = "values")]
    workflow: Option<PathBuf>,
    /// Comma-separated samples used when no workflow is given
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<f64>,
    /// Empty-input policy ("zero" or "error"); overrides the workflow file
    #[arg(long)]
    policy: Option<EmptyPolicy>,
    /// Write a JSON report of every sequence to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = match args.workflow {
        Some(path) => WorkflowConfig::load(path)?,
        None => WorkflowConfig::from_args(args.values, EmptyPolicy::default()),
    };
    let workflow_config = workflow_config.with_policy(args.policy);
    info!(
        "running {} sequence(s) with empty-input policy {}",
        workflow_config.sequences.len(),
        workflow_config.policy
    );

    let runner = Runner::new(workflow_config);
    let report = runner.execute();

    for sequence in &report.sequences {
        match (&sequence.rms, &sequence.error) {
            (Some(rms), _) => println!("{} (n={}) -> RMS {}", sequence.name, sequence.len, rms),
            (None, Some(error)) => println!("{} (n={}) -> {}", sequence.name, sequence.len, error),
            (None, None) => println!("{} (n={}) -> no result", sequence.name, sequence.len),
        }
    }

    if report.failures() > 0 {
        info!("{} sequence(s) produced no result", report.failures());
    }

    if let Some(path) = args.report {
        report.write_json(&path)?;
        info!("report written to {}", path.display());
    }

    check_outcome(report.policy, runner.metrics())
}

/// Fails the run when the policy rejected any empty sequence.
fn check_outcome(policy: EmptyPolicy, metrics: &MetricsRecorder) -> anyhow::Result<()> {
    let (computed, empty_inputs) = metrics.snapshot();
    info!("computed {} sequence(s), {} empty input(s)", computed, empty_inputs);

    if empty_inputs > 0 {
        anyhow::bail!(
            "{} empty sequence(s) rejected under the {} policy",
            empty_inputs,
            policy
        );
    }

    Ok(())
}
