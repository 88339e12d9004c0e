//! Fixed input/output signal accessors.
//!
//! Direct pass-throughs to known model locations: no validation, no unit
//! conversion. Array arity is part of each setter's signature. Wheel order
//! is FL, FR, RL, RR.

use vd_model::{GeneratedModel, SimRealState, Wheel};

use crate::wrapper::DoubleTrackModelWrapper;

impl<M: GeneratedModel> DoubleTrackModelWrapper<M> {
    /// Drive torque per wheel (N·m).
    pub fn set_drive_torque(&mut self, torque_nm: &[f64; 4]) {
        self.model_mut().inputs_mut().drive_torque_nm = *torque_nm;
    }

    /// Brake pressure per wheel (Pa).
    pub fn set_brake_pressure(&mut self, pressure_pa: &[f64; 4]) {
        self.model_mut().inputs_mut().brake_pressure_pa = *pressure_pa;
    }

    /// Steering angle (rad).
    pub fn set_steering_angle(&mut self, angle_rad: f64) {
        self.model_mut().inputs_mut().steering_angle_rad = angle_rad;
    }

    /// External force on the vehicle body (N).
    pub fn set_external_force(&mut self, force_n: &[f64; 3]) {
        self.model_mut().inputs_mut().external_force_n = *force_n;
    }

    /// External torque on the vehicle body (N·m).
    pub fn set_external_torque(&mut self, torque_nm: &[f64; 3]) {
        self.model_mut().inputs_mut().external_torque_nm = *torque_nm;
    }

    /// Longitudinal friction scaling per tire.
    pub fn set_lambda_mu_x(&mut self, lambda: &[f64; 4]) {
        self.model_mut().inputs_mut().lambda_mu_x = *lambda;
    }

    /// Lateral friction scaling per tire.
    pub fn set_lambda_mu_y(&mut self, lambda: &[f64; 4]) {
        self.model_mut().inputs_mut().lambda_mu_y = *lambda;
    }

    fn state(&self) -> &SimRealState {
        &self.model().outputs().sim_real_state
    }

    pub fn x_m(&self) -> f64 {
        self.state().x_m
    }

    pub fn y_m(&self) -> f64 {
        self.state().y_m
    }

    pub fn psi_rad(&self) -> f64 {
        self.state().psi_rad
    }

    pub fn dpsi_radps(&self) -> f64 {
        self.state().dpsi_radps
    }

    pub fn vx_mps(&self) -> f64 {
        self.state().vx_mps
    }

    pub fn vy_mps(&self) -> f64 {
        self.state().vy_mps
    }

    pub fn ax_mps2(&self) -> f64 {
        self.state().ax_mps2
    }

    pub fn ay_mps2(&self) -> f64 {
        self.state().ay_mps2
    }

    /// Steering angle echoed by the model (rad).
    pub fn steering_angle_rad(&self) -> f64 {
        self.state().delta_wheel_rad
    }

    /// Drive torque echoed for `wheel` (N·m).
    pub fn drive_torque_nm(&self, wheel: Wheel) -> f64 {
        self.state().drive_torque_nm[wheel.index()]
    }

    /// Brake pressure echoed for `wheel` (Pa).
    pub fn brake_pressure_pa(&self, wheel: Wheel) -> f64 {
        self.state().brake_pressure_pa[wheel.index()]
    }

    /// Wheel speed of `wheel` (rad/s).
    pub fn omega_wheel_radps(&self, wheel: Wheel) -> f64 {
        self.state().omega_wheel_radps[wheel.index()]
    }

    pub fn drive_torque_fl_nm(&self) -> f64 {
        self.drive_torque_nm(Wheel::FrontLeft)
    }

    pub fn drive_torque_fr_nm(&self) -> f64 {
        self.drive_torque_nm(Wheel::FrontRight)
    }

    pub fn drive_torque_rl_nm(&self) -> f64 {
        self.drive_torque_nm(Wheel::RearLeft)
    }

    pub fn drive_torque_rr_nm(&self) -> f64 {
        self.drive_torque_nm(Wheel::RearRight)
    }

    pub fn brake_pressure_fl_pa(&self) -> f64 {
        self.brake_pressure_pa(Wheel::FrontLeft)
    }

    pub fn brake_pressure_fr_pa(&self) -> f64 {
        self.brake_pressure_pa(Wheel::FrontRight)
    }

    pub fn brake_pressure_rl_pa(&self) -> f64 {
        self.brake_pressure_pa(Wheel::RearLeft)
    }

    pub fn brake_pressure_rr_pa(&self) -> f64 {
        self.brake_pressure_pa(Wheel::RearRight)
    }

    pub fn omega_wheel_fl_radps(&self) -> f64 {
        self.omega_wheel_radps(Wheel::FrontLeft)
    }

    pub fn omega_wheel_fr_radps(&self) -> f64 {
        self.omega_wheel_radps(Wheel::FrontRight)
    }

    pub fn omega_wheel_rl_radps(&self) -> f64 {
        self.omega_wheel_radps(Wheel::RearLeft)
    }

    pub fn omega_wheel_rr_radps(&self) -> f64 {
        self.omega_wheel_radps(Wheel::RearRight)
    }
}
