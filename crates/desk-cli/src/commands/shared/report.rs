use desk_core::workflow::{StepOutcome, WorkflowReport};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output, output_list};

/// Print a workflow report, then fail if any step failed.
///
/// Steps that succeeded before the failure stay applied.
pub fn finish(report: &WorkflowReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        output_list(&report.steps, flags.format)?;
    } else {
        output(report, flags.format)?;
    }
    check(report)
}

/// Error describing the failed steps, if any.
pub fn check(report: &WorkflowReport) -> anyhow::Result<()> {
    let failures = report
        .failures()
        .into_iter()
        .map(|step| match &step.outcome {
            StepOutcome::Failed(detail) => format!("{}: {detail}", step.name),
            other => format!("{}: {}", step.name, other.as_str()),
        })
        .collect::<Vec<_>>();
    if failures.is_empty() {
        return Ok(());
    }
    anyhow::bail!(
        "{} finished with {} failed step(s): {}",
        report.workflow,
        failures.len(),
        failures.join("; ")
    )
}
