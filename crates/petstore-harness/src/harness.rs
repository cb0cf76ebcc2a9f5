//! The harness: a dispatcher plus the presence assertion, and the
//! step-recording run that scenarios are written against.

use crate::HarnessError;
use crate::assertion::response_received;
use crate::config::HarnessConfig;
use crate::dispatcher::{Dispatch, HttpDispatcher};
use crate::report::{Outcome, ScenarioReport, StepRecord};
use crate::request::RequestSpec;
use crate::response::ApiResponse;
use log::{info, warn};
use std::time::Instant;
use tracing::Instrument;

pub struct Harness<D = HttpDispatcher> {
    dispatcher: D,
}

impl Harness<HttpDispatcher> {
    /// Harness talking HTTP to `config.base_url`.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        Ok(Self::with_dispatcher(HttpDispatcher::new(config)?))
    }
}

impl<D: Dispatch> Harness<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Dispatch one request and apply the presence assertion to the answer.
    pub async fn send(&self, spec: &RequestSpec) -> Result<ApiResponse, HarnessError> {
        let response = self.dispatcher.dispatch(spec).await?;
        response_received(Some(&response)).map_err(|e| match e {
            HarnessError::Assertion { message, .. } => HarnessError::Assertion {
                context: spec.describe(),
                message,
            },
            other => other,
        })?;
        Ok(response)
    }

    /// Start recording a scenario.
    pub fn scenario(&self, name: &str, feature: &str, story: &str) -> ScenarioRun<'_, D> {
        ScenarioRun {
            harness: self,
            span: tracing::info_span!("scenario", scenario = name, feature, story),
            report: ScenarioReport::new(name, feature, story),
        }
    }
}

/// One scenario in progress. Each [`step`](ScenarioRun::step) is recorded
/// in the report whether it passes or not.
pub struct ScenarioRun<'h, D> {
    harness: &'h Harness<D>,
    span: tracing::Span,
    report: ScenarioReport,
}

impl<D: Dispatch> ScenarioRun<'_, D> {
    pub async fn step(
        &mut self,
        name: &str,
        spec: RequestSpec,
    ) -> Result<ApiResponse, HarnessError> {
        let step_span = tracing::info_span!(
            parent: &self.span,
            "step",
            step = name,
            request = %spec.describe()
        );
        let path = spec
            .resolve_path()
            .unwrap_or_else(|_| spec.path_template().to_string());

        let started = Instant::now();
        let result = self.harness.send(&spec).instrument(step_span).await;
        let duration_ms = started.elapsed().as_millis() as u64;

        let (status_code, outcome, message) = match &result {
            Ok(response) => (Some(response.status()), Outcome::Passed, None),
            Err(e) => {
                warn!("step '{name}' ({}) failed: {e}", spec.describe());
                let status_code = match e {
                    HarnessError::Assertion { .. } => Some(0),
                    _ => None,
                };
                (status_code, Outcome::from_error(e), Some(e.to_string()))
            }
        };

        self.report.push_step(StepRecord {
            name: name.to_string(),
            method: spec.method().to_string(),
            path,
            status_code,
            outcome,
            message,
            duration_ms,
        });

        result
    }

    /// Close the run with the scenario body's result.
    pub fn finish(mut self, result: Result<(), HarnessError>) -> ScenarioOutcome {
        self.report.finish(result.as_ref().err());
        let _entered = self.span.enter();
        info!(
            "scenario '{}' finished: {:?} after {} step(s)",
            self.report.name,
            self.report.outcome,
            self.report.steps.len()
        );
        ScenarioOutcome {
            report: self.report,
            result,
        }
    }
}

/// Report plus the error that stopped the scenario, if any.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub report: ScenarioReport,
    pub result: Result<(), HarnessError>,
}

impl ScenarioOutcome {
    pub fn is_passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_result(self) -> Result<ScenarioReport, HarnessError> {
        self.result.map(|()| self.report)
    }
}
