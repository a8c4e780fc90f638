//! Orbit-plane to inertial-frame rotation.

use glam::DMat3;

/// Rotation taking orbit-plane coordinates into the Earth-centered inertial frame.
///
/// Composed as `Rz(raan) · Rx(inclination) · Rz(argument_of_pericenter)`: a
/// point is first turned within its plane by the argument of pericenter,
/// then tilted by the inclination, then swept about the polar axis by the
/// RAAN. The order is not interchangeable.
pub fn orbit_rotation(raan: f64, inclination: f64, argument_of_pericenter: f64) -> DMat3 {
    let r_raan = DMat3::from_rotation_z(raan);
    let r_inc = DMat3::from_rotation_x(inclination);
    let r_omega = DMat3::from_rotation_z(argument_of_pericenter);
    r_raan * r_inc * r_omega
}
