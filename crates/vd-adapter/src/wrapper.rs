//! Lifecycle and step wrapper around one generated model instance.

use std::sync::Arc;

use tracing::{info, warn};
use vd_core::{VdError, ensure_finite};
use vd_model::{ErrorStatus, GeneratedModel, ModelInfo};

use crate::accessor::{self, ParameterWrite};
use crate::error::AdapterResult;
use crate::overrun::{OverrunGuard, StepState};
use crate::resolver::ParameterResolver;

/// Upper bound on the steps a single `run_for` call may take.
pub const MAX_RUN_STEPS: u64 = 1 << 32;

/// Result of a `step()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One fixed timestep was integrated.
    Advanced,
    /// A previous step was still in flight; nothing was integrated and the
    /// model's error status is now `Overrun`.
    Overrun,
}

/// Owns one model instance for its whole lifetime.
///
/// Construction runs the model's one-time initialization; dropping the
/// wrapper runs its termination exactly once, regardless of overruns.
pub struct DoubleTrackModelWrapper<M: GeneratedModel> {
    model: Box<M>,
    overrun: Arc<OverrunGuard>,
    steps: u64,
    overruns: u64,
}

impl<M: GeneratedModel> DoubleTrackModelWrapper<M> {
    /// Take ownership of `model` and initialize it.
    ///
    /// If initialization fails the model is terminated before the error is
    /// returned.
    pub fn new(model: M) -> AdapterResult<Self> {
        let mut model = Box::new(model);
        if let Err(e) = model.initialize() {
            warn!(model = %model.model_info().name, error = %e, "model initialization failed");
            model.terminate();
            return Err(e.into());
        }
        info!(
            model = %model.model_info().name,
            fixed_step_s = model.model_info().fixed_step_s,
            parameters = model.mapping_info().num_parameters(),
            "model initialized"
        );
        Ok(Self {
            model,
            overrun: Arc::new(OverrunGuard::new()),
            steps: 0,
            overruns: 0,
        })
    }

    /// Advance the model by one fixed timestep.
    ///
    /// If a step is already in flight, records `ErrorStatus::Overrun` on the
    /// model and returns without integrating.
    pub fn step(&mut self) -> StepOutcome {
        let guard = Arc::clone(&self.overrun);
        let Some(_token) = guard.try_enter() else {
            self.overruns += 1;
            warn!(
                model = %self.model.model_info().name,
                overruns = self.overruns,
                "step overrun, skipping"
            );
            self.model.set_error_status(ErrorStatus::Overrun);
            return StepOutcome::Overrun;
        };

        self.model.step();
        self.steps += 1;
        StepOutcome::Advanced
    }

    /// Step `n` times. Returns how many steps actually advanced.
    pub fn step_n(&mut self, n: u64) -> u64 {
        (0..n)
            .filter(|_| self.step() == StepOutcome::Advanced)
            .count() as u64
    }

    /// Step for `duration_s` of simulated time, rounded to whole base-rate
    /// steps. Returns the number of steps that advanced.
    ///
    /// Durations needing more than [`MAX_RUN_STEPS`] steps are rejected.
    pub fn run_for(&mut self, duration_s: f64) -> AdapterResult<u64> {
        let duration_s = ensure_finite(duration_s, "duration_s")?;
        if duration_s < 0.0 {
            return Err(VdError::InvalidArg {
                what: "duration_s must be non-negative",
            }
            .into());
        }
        let dt = self.model.model_info().fixed_step_s;
        if dt.is_nan() || dt <= 0.0 {
            return Err(VdError::Invariant {
                what: "model fixed step must be positive",
            }
            .into());
        }
        let n = (duration_s / dt).round();
        if n > MAX_RUN_STEPS as f64 {
            return Err(VdError::InvalidArg {
                what: "duration_s exceeds the maximum step count per run",
            }
            .into());
        }
        Ok(self.step_n(n as u64))
    }

    /// Write a named parameter; returns its address index, or `-1` if the
    /// name is unknown.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> i32 {
        accessor::set_parameter(&mut *self.model, name, value)
    }

    /// Read a named parameter; `0.0` if unknown or not readable.
    pub fn get_parameter(&self, name: &str) -> f64 {
        accessor::get_parameter(&*self.model, name)
    }

    pub fn try_set_parameter(&mut self, name: &str, value: f64) -> AdapterResult<ParameterWrite> {
        accessor::try_set_parameter(&mut *self.model, name, value)
    }

    pub fn try_get_parameter(&self, name: &str) -> AdapterResult<f64> {
        accessor::try_get_parameter(&*self.model, name)
    }

    pub fn find_parameter_address_index(&self, name: &str) -> i32 {
        self.resolver().find_parameter_address_index(name)
    }

    pub fn find_parameter_data_type(&self, name: &str) -> i32 {
        self.resolver().find_parameter_data_type(name)
    }

    pub fn resolver(&self) -> ParameterResolver<'_> {
        ParameterResolver::new(self.model.mapping_info())
    }

    /// Shared handle to the step guard, for contexts that drive `step()`
    /// from outside the owning thread of control.
    pub fn overrun_guard(&self) -> Arc<OverrunGuard> {
        Arc::clone(&self.overrun)
    }

    pub fn step_state(&self) -> StepState {
        self.overrun.state()
    }

    pub fn error_status(&self) -> Option<&ErrorStatus> {
        self.model.error_status()
    }

    /// Completed steps since construction.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Rejected steps since construction.
    pub fn overrun_count(&self) -> u64 {
        self.overruns
    }

    /// Simulated time covered by completed steps (seconds).
    pub fn sim_time_s(&self) -> f64 {
        self.steps as f64 * self.model.model_info().fixed_step_s
    }

    pub fn model_info(&self) -> &ModelInfo {
        self.model.model_info()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub(crate) fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }
}

impl<M: GeneratedModel> Drop for DoubleTrackModelWrapper<M> {
    fn drop(&mut self) {
        self.model.terminate();
        info!(
            model = %self.model.model_info().name,
            steps = self.steps,
            overruns = self.overruns,
            "model terminated"
        );
    }
}
