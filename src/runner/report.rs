//! Suite reporting
//!
//! Collects per-scenario outcomes and prints the aggregate summary.
//! Transport errors are listed apart from assertion failures so
//! infrastructure noise does not read as fixture drift. Failures never
//! stop the suite; everything is reported together at the end.

use std::time::Duration;

use colored::Colorize;

use crate::common::{Error, FailureKind, Result};

/// Result of one executed scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Scenario name as reported
    pub name: String,
    /// Request line ("GET users?page=2") for context
    pub request: String,
    /// Round trip plus check evaluation time
    pub elapsed: Duration,
    /// The failure, when the scenario did not pass
    pub failure: Option<Error>,
}

impl ScenarioOutcome {
    /// Whether the scenario passed all its checks
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregate result of a suite run
#[derive(Debug, Default)]
pub struct SuiteReport {
    /// Outcomes in suite order
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    /// Record an outcome and print its progress line
    pub fn record(&mut self, outcome: ScenarioOutcome) {
        match &outcome.failure {
            None => println!(
                "  {} {} {}",
                "✓".green(),
                outcome.name,
                format!("{} ({}ms)", outcome.request, outcome.elapsed.as_millis()).dimmed()
            ),
            Some(failure) => println!(
                "  {} {} {}: {}",
                "✗".red(),
                outcome.name,
                outcome.request.dimmed(),
                failure
            ),
        }
        self.outcomes.push(outcome);
    }

    /// Number of scenarios run
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of scenarios that passed
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of scenarios that failed, for any reason
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every scenario passed
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    fn failures_of_kind(&self, kind: FailureKind) -> Vec<(&ScenarioOutcome, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.failure.as_ref().map(|failure| (outcome, failure)))
            .filter(|(_, failure)| failure.kind() == kind)
            .collect()
    }

    /// Print the aggregate summary, with failures grouped by kind
    pub fn print_summary(&self) {
        println!();
        if self.all_passed() {
            println!(
                "{} {}",
                "✓".green().bold(),
                format!("all {} scenarios passed", self.total()).green().bold()
            );
            return;
        }

        println!(
            "{}",
            format!(
                "{} scenarios: {} passed, {} failed",
                self.total(),
                self.passed(),
                self.failed()
            )
            .bold()
        );

        let assertions = self.failures_of_kind(FailureKind::Assertion);
        if !assertions.is_empty() {
            println!("\n{}", "assertion failures:".red().bold());
            for (outcome, failure) in assertions {
                println!("  {} {}: {}", "✗".red(), outcome.name, failure);
            }
        }

        let transport = self.failures_of_kind(FailureKind::Transport);
        if !transport.is_empty() {
            println!("\n{}", "transport errors:".yellow().bold());
            for (outcome, failure) in transport {
                println!("  {} {}: {}", "✗".yellow(), outcome.name, failure);
            }
        }
    }

    /// Map the aggregate result onto the process outcome
    pub fn into_result(self) -> Result<()> {
        if self.all_passed() {
            Ok(())
        } else {
            Err(Error::SuiteFailed {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed(name: &str) -> ScenarioOutcome {
        ScenarioOutcome {
            name: name.to_string(),
            request: format!("GET {name}"),
            elapsed: Duration::from_millis(10),
            failure: None,
        }
    }

    fn failed(name: &str, failure: Error) -> ScenarioOutcome {
        ScenarioOutcome {
            name: name.to_string(),
            request: format!("GET {name}"),
            elapsed: Duration::from_millis(10),
            failure: Some(failure),
        }
    }

    #[test]
    fn test_counts_and_all_passed() {
        let mut report = SuiteReport::default();
        report.record(passed("a"));
        report.record(passed("b"));
        assert_eq!(report.total(), 2);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 0);
        assert!(report.all_passed());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_one_failure_fails_the_suite() {
        let mut report = SuiteReport::default();
        report.record(passed("a"));
        report.record(failed(
            "b",
            Error::StatusMismatch {
                expected: 200,
                actual: 500,
            },
        ));
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());

        let err = report.into_result().unwrap_err();
        assert!(matches!(
            err,
            Error::SuiteFailed {
                failed: 1,
                total: 2
            }
        ));
    }

    #[test]
    fn test_failures_partition_by_kind() {
        let mut report = SuiteReport::default();
        report.record(failed(
            "assertion",
            Error::FieldMissing {
                path: "token".to_string(),
            },
        ));
        report.record(failed(
            "transport",
            Error::Timeout {
                url: "http://localhost/api/users".to_string(),
                timeout: Duration::from_secs(15),
            },
        ));
        assert_eq!(report.failures_of_kind(FailureKind::Assertion).len(), 1);
        assert_eq!(report.failures_of_kind(FailureKind::Transport).len(), 1);
        report.print_summary();
    }
}
