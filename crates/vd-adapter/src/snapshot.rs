//! Typed views over the fixed signals.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use vd_core::units::{
    Accel, Angle, AngularVelocity, Length, Pressure, Torque, Velocity, m, mps, mps2, nm, pa, rad,
    radps,
};
use vd_model::{GeneratedModel, Wheel};

use crate::wrapper::DoubleTrackModelWrapper;

/// Vehicle state after a step, in SI quantities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleStateSnapshot {
    /// Simulated time of the snapshot (seconds)
    pub t_s: f64,
    pub x: Length,
    pub y: Length,
    pub psi: Angle,
    pub dpsi: AngularVelocity,
    pub vx: Velocity,
    pub vy: Velocity,
    pub ax: Accel,
    pub ay: Accel,
    pub steering_angle: Angle,
    /// FL, FR, RL, RR
    pub drive_torque: [Torque; 4],
    pub brake_pressure: [Pressure; 4],
    pub omega_wheel: [AngularVelocity; 4],
}

impl<M: GeneratedModel> DoubleTrackModelWrapper<M> {
    /// Gather every output signal into one typed value.
    pub fn snapshot(&self) -> VehicleStateSnapshot {
        VehicleStateSnapshot {
            t_s: self.sim_time_s(),
            x: m(self.x_m()),
            y: m(self.y_m()),
            psi: rad(self.psi_rad()),
            dpsi: radps(self.dpsi_radps()),
            vx: mps(self.vx_mps()),
            vy: mps(self.vy_mps()),
            ax: mps2(self.ax_mps2()),
            ay: mps2(self.ay_mps2()),
            steering_angle: rad(self.steering_angle_rad()),
            drive_torque: Wheel::ALL.map(|w| nm(self.drive_torque_nm(w))),
            brake_pressure: Wheel::ALL.map(|w| pa(self.brake_pressure_pa(w))),
            omega_wheel: Wheel::ALL.map(|w| radps(self.omega_wheel_radps(w))),
        }
    }

    /// Apply an external force and torque together.
    pub fn apply_external_load(&mut self, load: &ExternalLoad) {
        let (f, t) = (&load.force_n, &load.torque_nm);
        self.set_external_force(&[f.x, f.y, f.z]);
        self.set_external_torque(&[t.x, t.y, t.z]);
    }
}

/// External force (N) and torque (N·m) acting on the vehicle body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExternalLoad {
    pub force_n: Vector3<f64>,
    pub torque_nm: Vector3<f64>,
}

impl ExternalLoad {
    pub fn new(force_n: Vector3<f64>, torque_nm: Vector3<f64>) -> Self {
        Self { force_n, torque_nm }
    }

    /// Pure force, no torque.
    pub fn force(force_n: Vector3<f64>) -> Self {
        Self {
            force_n,
            torque_nm: Vector3::zeros(),
        }
    }

    /// Sum of two loads.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            force_n: self.force_n + other.force_n,
            torque_nm: self.torque_nm + other.torque_nm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::angle::radian;
    use uom::si::torque::newton_meter;
    use vd_model::LoopbackModel;

    #[test]
    fn snapshot_carries_echoed_signals() {
        let mut dtm = DoubleTrackModelWrapper::new(LoopbackModel::new().unwrap()).unwrap();
        dtm.set_steering_angle(0.1);
        dtm.set_drive_torque(&[5.0, 6.0, 7.0, 8.0]);
        dtm.step();

        let snap = dtm.snapshot();
        assert_eq!(snap.steering_angle.get::<radian>(), 0.1);
        assert_eq!(snap.drive_torque[3].get::<newton_meter>(), 8.0);
        assert!((snap.t_s - 0.001).abs() < 1e-15);
    }

    #[test]
    fn external_load_sets_both_vectors() {
        let mut dtm = DoubleTrackModelWrapper::new(LoopbackModel::new().unwrap()).unwrap();
        let wind = ExternalLoad::force(Vector3::new(0.0, 250.0, 0.0));
        let yaw = ExternalLoad::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 40.0));
        dtm.apply_external_load(&wind.combine(&yaw));

        let inputs = dtm.model().inputs();
        assert_eq!(inputs.external_force_n, [0.0, 250.0, 0.0]);
        assert_eq!(inputs.external_torque_nm, [0.0, 0.0, 40.0]);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let dtm = DoubleTrackModelWrapper::new(LoopbackModel::new().unwrap()).unwrap();
        let json = serde_json::to_string(&dtm.snapshot()).unwrap();
        assert!(json.contains("\"vx\""));
    }
}
