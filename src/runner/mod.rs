//! Scenario execution
//!
//! Runs each scenario as one isolated round trip: send the request, evaluate
//! the checks against that scenario's own response, record the outcome. A
//! failing scenario never aborts its siblings.

mod checks;
mod report;

pub use report::{ScenarioOutcome, SuiteReport};

use std::time::Instant;

use futures_util::{stream, StreamExt};

use crate::common::{RequestContext, Result};
use crate::http::ApiClient;
use crate::scenario::Scenario;

/// Execute `scenarios` against `context` and collect the aggregate report.
///
/// `jobs` bounds how many requests are in flight. With 1 (the default) the
/// run is strictly sequential: a scenario's response is received and checked
/// before the next request is sent. Outcomes are recorded in suite order
/// either way.
pub async fn run_suite(
    context: RequestContext,
    scenarios: Vec<Scenario>,
    jobs: usize,
) -> Result<SuiteReport> {
    let client = ApiClient::new(context)?;
    let jobs = jobs.max(1);

    let mut report = SuiteReport::default();
    let mut outcomes = stream::iter(scenarios)
        .map(|scenario| {
            let client = client.clone();
            async move { run_scenario(&client, scenario).await }
        })
        .buffered(jobs);

    while let Some(outcome) = outcomes.next().await {
        report.record(outcome);
    }

    Ok(report)
}

/// Run one scenario end-to-end and report its outcome
async fn run_scenario(client: &ApiClient, scenario: Scenario) -> ScenarioOutcome {
    let request = scenario.request_line();
    let started = Instant::now();
    let failure = match client.execute(&scenario).await {
        Ok(response) => checks::evaluate(&scenario, &response).err(),
        Err(err) => Some(err),
    };
    ScenarioOutcome {
        name: scenario.name,
        request,
        elapsed: started.elapsed(),
        failure,
    }
}
