//! Loopback reference model.
//!
//! Stands in for a generated double-track model: it carries a realistic
//! parameter table and the full signal layout, but applies no vehicle
//! dynamics. Each step copies the inputs into the matching output echoes.

use tracing::debug;

use crate::address::DataAddressMap;
use crate::error::ModelResult;
use crate::mapping::{BOOLEAN_T, MappingBuilder, ModelMappingInfo, REAL_T};
use crate::model::{ErrorStatus, GeneratedModel, ModelInfo};
use crate::signals::{ExternalInputs, ExternalOutputs};

#[derive(Debug)]
pub struct LoopbackModel {
    info: ModelInfo,
    mapping: ModelMappingInfo,
    addresses: DataAddressMap,
    inputs: ExternalInputs,
    outputs: ExternalOutputs,
    error_status: Option<ErrorStatus>,
    /// Raw default bytes per address, written at initialization.
    defaults: Vec<(usize, Vec<u8>)>,
    steps: u64,
}

impl LoopbackModel {
    /// Build the model and its mapping tables.
    ///
    /// Parameter table, in order:
    /// 0. `m_Vehicle_kg` (`real_T`)
    /// 1. `l_WheelbaseF_m` (`real_T`)
    /// 2. `switch_TireModel` (`boolean_T`)
    /// 3. `n_GearRatio` (`int32_T`, not accessible by name)
    /// 4. `mu_Road` (`real_T`)
    /// 5. `l_WheelbaseF_m` (`real_T`, duplicate, shadowed by entry 1)
    pub fn new() -> ModelResult<Self> {
        let mut b = MappingBuilder::new();
        let real = b.add_data_type(REAL_T, 8);
        let boolean = b.add_data_type(BOOLEAN_T, 1);
        let int32 = b.add_data_type("int32_T", 4);

        let defaults = vec![
            (b.add_parameter("m_Vehicle_kg", real)?, real_bytes(1160.0)),
            (b.add_parameter("l_WheelbaseF_m", real)?, real_bytes(1.5)),
            (b.add_parameter("switch_TireModel", boolean)?, vec![1]),
            (
                b.add_parameter("n_GearRatio", int32)?,
                6_i32.to_ne_bytes().to_vec(),
            ),
            (b.add_parameter("mu_Road", real)?, real_bytes(1.0)),
            // Shadowed by entry 1; distinct value keeps first-match lookups observable.
            (b.add_parameter("l_WheelbaseF_m", real)?, real_bytes(9.9)),
        ];

        let (mapping, addresses) = b.build()?;

        Ok(Self {
            info: ModelInfo {
                name: "loopback_dtm".to_string(),
                fixed_step_s: 0.001,
            },
            mapping,
            addresses,
            inputs: ExternalInputs::default(),
            outputs: ExternalOutputs::default(),
            error_status: None,
            defaults,
            steps: 0,
        })
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn write_defaults(&mut self) -> ModelResult<()> {
        for (addr, bytes) in &self.defaults {
            self.addresses.slot_mut(*addr)?.copy_from_slice(bytes);
        }
        Ok(())
    }
}

fn real_bytes(v: f64) -> Vec<u8> {
    v.to_ne_bytes().to_vec()
}

impl GeneratedModel for LoopbackModel {
    fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    fn initialize(&mut self) -> ModelResult<()> {
        self.inputs = ExternalInputs {
            lambda_mu_x: [1.0; 4],
            lambda_mu_y: [1.0; 4],
            ..ExternalInputs::default()
        };
        self.outputs = ExternalOutputs::default();
        self.error_status = None;
        self.steps = 0;
        self.write_defaults()?;
        debug!(model = %self.info.name, "loopback model initialized");
        Ok(())
    }

    fn step(&mut self) {
        let state = &mut self.outputs.sim_real_state;
        state.delta_wheel_rad = self.inputs.steering_angle_rad;
        state.drive_torque_nm = self.inputs.drive_torque_nm;
        state.brake_pressure_pa = self.inputs.brake_pressure_pa;
        self.steps += 1;
    }

    fn terminate(&mut self) {
        debug!(model = %self.info.name, steps = self.steps, "loopback model terminated");
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
        self.error_status.as_ref()
    }

    fn set_error_status(&mut self, status: ErrorStatus) {
        self.error_status = Some(status);
    }
}
