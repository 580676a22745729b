//! Ordered execution plans with explicit step dependencies.
//!
//! Some operations only make sense when another operation has already been
//! applied: a liquidity read must see a fresh price, a swap must see its
//! allowance. A [`Pipeline`] records each step together with the stage it
//! depends on and refuses to build a plan in which that stage is not the
//! step immediately before it.
//!
//! ```
//! use euler_rs_api::pipeline::{Pipeline, PipelineError, Stage};
//!
//! let mut plan = Pipeline::new();
//! plan.push(Stage::PriceUpdate, None, "update").unwrap();
//! plan.push(Stage::Query, Some(Stage::PriceUpdate), "read").unwrap();
//! assert_eq!(plan.stages(), vec![Stage::PriceUpdate, Stage::Query]);
//!
//! let mut wrong = Pipeline::new();
//! let err = wrong.push(Stage::Query, Some(Stage::PriceUpdate), "read").unwrap_err();
//! assert!(matches!(err, PipelineError::MissingPrerequisite { .. }));
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Kind of work a step performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// Push a signed price attestation into the oracle.
    PriceUpdate,
    /// Read state that depends on an earlier step.
    Query,
    /// Mutate state that depends on an earlier step.
    Action,
    /// Grant a spending allowance.
    Approve,
    /// Execute a router swap.
    Swap,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PriceUpdate => "price update",
            Stage::Query => "query",
            Stage::Action => "action",
            Stage::Approve => "approve",
            Stage::Swap => "swap",
        };
        f.write_str(name)
    }
}

/// Reasons a step cannot be appended to a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The step depends on a stage, but the pipeline is empty.
    #[error("{stage} step requires a preceding {requires} step")]
    MissingPrerequisite { stage: Stage, requires: Stage },

    /// The immediately preceding step is not the declared prerequisite.
    #[error("{stage} step requires {requires} immediately before it, found {previous}")]
    OutOfOrder {
        stage: Stage,
        requires: Stage,
        previous: Stage,
    },
}

/// One entry of a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub stage: Stage,
    /// Stage whose committed effects this step relies on.
    pub requires: Option<Stage>,
    pub payload: T,
}

/// An ordered list of steps whose dependencies have been checked on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pipeline<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, checking that `requires` names the previous step's stage.
    pub fn push(
        &mut self,
        stage: Stage,
        requires: Option<Stage>,
        payload: T,
    ) -> Result<(), PipelineError> {
        if let Some(requires) = requires {
            match self.steps.last() {
                None => return Err(PipelineError::MissingPrerequisite { stage, requires }),
                Some(previous) if previous.stage != requires => {
                    return Err(PipelineError::OutOfOrder {
                        stage,
                        requires,
                        previous: previous.stage,
                    })
                }
                Some(_) => {}
            }
        }

        self.steps.push(Step {
            stage,
            requires,
            payload,
        });
        Ok(())
    }

    /// Builder form of [`Pipeline::push`].
    pub fn then(mut self, stage: Stage, requires: Option<Stage>, payload: T) -> Result<Self, PipelineError> {
        self.push(stage, requires, payload)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Stages in execution order.
    pub fn stages(&self) -> Vec<Stage> {
        self.steps.iter().map(|step| step.stage).collect()
    }

    /// Index of the first step with the given stage.
    pub fn position(&self, stage: Stage) -> Option<usize> {
        self.steps.iter().position(|step| step.stage == stage)
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    /// Payloads in execution order, dropping the stage bookkeeping.
    pub fn into_payloads(self) -> Vec<T> {
        self.steps.into_iter().map(|step| step.payload).collect()
    }
}
