//! Lifecycle tests: initialize/terminate bracketing and the overrun guard.

use std::cell::Cell;
use std::rc::Rc;

use vd_adapter::{AdapterError, DoubleTrackModelWrapper, StepOutcome, StepState};
use vd_model::{
    DataAddressMap, ErrorStatus, ExternalInputs, ExternalOutputs, GeneratedModel, LoopbackModel,
    MappingBuilder, ModelError, ModelInfo, ModelMappingInfo, ModelResult,
};

#[derive(Default)]
struct Calls {
    initialize: Cell<u32>,
    step: Cell<u32>,
    terminate: Cell<u32>,
}

/// Model that only counts lifecycle calls.
struct CountingModel {
    calls: Rc<Calls>,
    fail_init: bool,
    info: ModelInfo,
    mapping: ModelMappingInfo,
    addresses: DataAddressMap,
    inputs: ExternalInputs,
    outputs: ExternalOutputs,
    status: Option<ErrorStatus>,
}

impl CountingModel {
    fn new(calls: Rc<Calls>) -> Self {
        let (mapping, addresses) = MappingBuilder::new().build().unwrap();
        Self {
            calls,
            fail_init: false,
            info: ModelInfo {
                name: "counting".to_string(),
                fixed_step_s: 0.01,
            },
            mapping,
            addresses,
            inputs: ExternalInputs::default(),
            outputs: ExternalOutputs::default(),
            status: None,
        }
    }
}

impl GeneratedModel for CountingModel {
    fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    fn initialize(&mut self) -> ModelResult<()> {
        self.calls.initialize.set(self.calls.initialize.get() + 1);
        if self.fail_init {
            return Err(ModelError::Initialization {
                message: "intentional failure".to_string(),
            });
        }
        Ok(())
    }

    fn step(&mut self) {
        self.calls.step.set(self.calls.step.get() + 1);
    }

    fn terminate(&mut self) {
        self.calls.terminate.set(self.calls.terminate.get() + 1);
    }

    fn mapping_info(&self) -> &ModelMappingInfo {
        &self.mapping
    }

    fn data_address_map(&self) -> &DataAddressMap {
        &self.addresses
    }

    fn data_address_map_mut(&mut self) -> &mut DataAddressMap {
        &mut self.addresses
    }

    fn inputs(&self) -> &ExternalInputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut ExternalInputs {
        &mut self.inputs
    }

    fn outputs(&self) -> &ExternalOutputs {
        &self.outputs
    }

    fn error_status(&self) -> Option<&ErrorStatus> {
        self.status.as_ref()
    }

    fn set_error_status(&mut self, status: ErrorStatus) {
        self.status = Some(status);
    }
}

#[test]
fn construct_then_drop_brackets_model_lifetime() {
    let calls = Rc::new(Calls::default());
    let dtm = DoubleTrackModelWrapper::new(CountingModel::new(Rc::clone(&calls))).unwrap();
    assert_eq!(calls.initialize.get(), 1);
    assert_eq!(calls.terminate.get(), 0);
    drop(dtm);

    assert_eq!(calls.initialize.get(), 1);
    assert_eq!(calls.step.get(), 0);
    assert_eq!(calls.terminate.get(), 1);
}

#[test]
fn each_step_calls_model_once() {
    let calls = Rc::new(Calls::default());
    let mut dtm = DoubleTrackModelWrapper::new(CountingModel::new(Rc::clone(&calls))).unwrap();
    assert_eq!(dtm.step_n(5), 5);
    assert_eq!(calls.step.get(), 5);
    assert_eq!(dtm.step_count(), 5);
}

#[test]
fn failed_initialization_still_terminates() {
    let calls = Rc::new(Calls::default());
    let mut model = CountingModel::new(Rc::clone(&calls));
    model.fail_init = true;

    let err = DoubleTrackModelWrapper::new(model).err().expect("init should fail");
    assert!(matches!(
        err,
        AdapterError::Model(ModelError::Initialization { .. })
    ));
    assert_eq!(calls.initialize.get(), 1);
    assert_eq!(calls.terminate.get(), 1);
}

#[test]
fn overrun_skips_step_and_records_status() {
    let calls = Rc::new(Calls::default());
    let mut dtm = DoubleTrackModelWrapper::new(CountingModel::new(Rc::clone(&calls))).unwrap();

    let guard = dtm.overrun_guard();
    let in_flight = guard.try_enter().expect("guard starts idle");
    assert_eq!(dtm.step_state(), StepState::Stepping);

    assert_eq!(dtm.step(), StepOutcome::Overrun);
    assert_eq!(calls.step.get(), 0);
    assert_eq!(dtm.error_status(), Some(&ErrorStatus::Overrun));
    assert_eq!(dtm.overrun_count(), 1);

    drop(in_flight);
    assert_eq!(dtm.step(), StepOutcome::Advanced);
    assert_eq!(calls.step.get(), 1);
    // Overrun status is persistent.
    assert_eq!(dtm.error_status(), Some(&ErrorStatus::Overrun));
}

#[test]
fn terminate_runs_after_overrun() {
    let calls = Rc::new(Calls::default());
    let mut dtm = DoubleTrackModelWrapper::new(CountingModel::new(Rc::clone(&calls))).unwrap();
    let guard = dtm.overrun_guard();
    {
        let _in_flight = guard.try_enter().unwrap();
        dtm.step();
    }
    drop(dtm);
    assert_eq!(calls.terminate.get(), 1);
}

#[test]
fn overrun_leaves_outputs_unchanged() {
    let mut dtm = DoubleTrackModelWrapper::new(LoopbackModel::new().unwrap()).unwrap();
    dtm.set_drive_torque(&[1.0, 1.0, 1.0, 1.0]);
    dtm.step();
    assert_eq!(dtm.drive_torque_fl_nm(), 1.0);

    dtm.set_drive_torque(&[5.0, 5.0, 5.0, 5.0]);
    let guard = dtm.overrun_guard();
    let in_flight = guard.try_enter().unwrap();
    assert_eq!(dtm.step(), StepOutcome::Overrun);
    drop(in_flight);

    assert_eq!(dtm.drive_torque_fl_nm(), 1.0);
    assert_eq!(dtm.model().steps(), 1);
    assert_eq!(dtm.error_status(), Some(&ErrorStatus::Overrun));
}
