use std::path::PathBuf;

use anyhow::Context;

use crate::config::Options;
use crate::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::junit::{extract_suites, filter_failed_test_cases, TestCase, TestSuite};
use crate::report::{failure_signal, format_report};
use crate::sink::ReportSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub exit_code: i32,
    pub failures: Vec<TestCase>,
}

impl RunResult {
    fn quiet() -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
            failures: Vec::new(),
        }
    }
}

/// Finds the reports, collects their failing test cases and, if there are
/// any, sends one severity signal followed by the results table to `sink`.
pub async fn run(options: &Options, sink: &mut dyn ReportSink) -> anyhow::Result<RunResult> {
    let report_paths = find_reports(options)?;
    if report_paths.is_empty() {
        log::info!("No reports found matching {:?}", options.path_to_report);
        return Ok(RunResult::quiet());
    }

    let suites = gather_suites(report_paths).await?;
    let failures = filter_failed_test_cases(&suites);
    log::info!(
        "Found {} failed test cases in {} test suites",
        failures.len(),
        suites.len()
    );
    if failures.is_empty() {
        return Ok(RunResult::quiet());
    }

    let exit_code = report_failures(&failures, &options.display_name(), options.only_warn, sink);
    Ok(RunResult {
        exit_code,
        failures,
    })
}

/// Report files matching the configured pattern, in glob order.
pub fn find_reports(options: &Options) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = options.report_pattern()?;
    let mut report_paths = Vec::new();

    for entry in glob::glob(&pattern)
        .with_context(|| format!("Invalid report path pattern {:?}", pattern))?
    {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                return Err(anyhow::anyhow!("Error scanning reports: {:?}", e));
            }
        };
        if !path.is_file() {
            log::debug!("Skipping {:?} from {:?}, not a file", path, pattern);
            continue;
        }
        report_paths.push(path);
    }

    Ok(report_paths)
}

/// Reads every report concurrently and concatenates their suites in the order
/// of `report_paths`.
pub async fn gather_suites(report_paths: Vec<PathBuf>) -> anyhow::Result<Vec<TestSuite>> {
    let handles = report_paths
        .into_iter()
        .map(|path| {
            log::info!("Checking file: {}", path.display());
            tokio::spawn(extract_suites(path))
        })
        .collect::<Vec<_>>();

    let mut suites = Vec::new();
    for handle in handles {
        suites.extend(handle.await.context("Report reader task failed")??);
    }
    Ok(suites)
}

fn report_failures(
    failures: &[TestCase],
    name: &str,
    only_warn: bool,
    sink: &mut dyn ReportSink,
) -> i32 {
    let signal = failure_signal(name);
    let exit_code = if only_warn {
        sink.warn(&signal);
        EXIT_SUCCESS
    } else {
        sink.fail(&signal);
        EXIT_FAILURE
    };
    sink.markdown(&format_report(failures, name));
    exit_code
}
