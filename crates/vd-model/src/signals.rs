//! Fixed input and output signals of the double-track model.
//!
//! These live at known locations inside the model and need no name
//! resolution. Per-wheel arrays are ordered FL, FR, RL, RR.

use serde::{Deserialize, Serialize};
use vd_core::Real;

/// Wheel position, usable as an index into per-wheel arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wheel {
    FrontLeft = 0,
    FrontRight = 1,
    RearLeft = 2,
    RearRight = 3,
}

impl Wheel {
    pub const ALL: [Wheel; 4] = [
        Wheel::FrontLeft,
        Wheel::FrontRight,
        Wheel::RearLeft,
        Wheel::RearRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Model inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalInputs {
    /// Drive torque per wheel (N·m)
    pub drive_torque_nm: [Real; 4],
    /// Brake pressure per wheel (Pa)
    pub brake_pressure_pa: [Real; 4],
    /// Steering angle at the wheel (rad)
    pub steering_angle_rad: Real,
    /// External force on the vehicle body (N)
    pub external_force_n: [Real; 3],
    /// External torque on the vehicle body (N·m)
    pub external_torque_nm: [Real; 3],
    /// Longitudinal friction scaling per tire
    pub lambda_mu_x: [Real; 4],
    /// Lateral friction scaling per tire
    pub lambda_mu_y: [Real; 4],
}

/// Real vehicle state reported by the model after each step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimRealState {
    pub x_m: Real,
    pub y_m: Real,
    pub psi_rad: Real,
    pub dpsi_radps: Real,
    pub vx_mps: Real,
    pub vy_mps: Real,
    pub ax_mps2: Real,
    pub ay_mps2: Real,
    /// Steering angle as seen by the wheels (rad)
    pub delta_wheel_rad: Real,
    /// Drive torque echo per wheel (N·m)
    pub drive_torque_nm: [Real; 4],
    /// Brake pressure echo per wheel (Pa)
    pub brake_pressure_pa: [Real; 4],
    /// Wheel speed per wheel (rad/s)
    pub omega_wheel_radps: [Real; 4],
}

/// Model outputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalOutputs {
    pub sim_real_state: SimRealState,
}
