use crate::Sdf;
use glam::{Vec2, Vec3};

/// A torus SDF lying in the XZ plane, centered at the origin
#[derive(Debug, Clone)]
pub struct TorusSdf {
	/// Distance from the center of the torus to the center of the tube
	pub major_radius: f32,
	/// Radius of the tube
	pub minor_radius: f32,
}

impl TorusSdf {
	pub fn new(major_radius: f32, minor_radius: f32) -> Self {
		Self { major_radius, minor_radius }
	}
}

impl Sdf for TorusSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let q = Vec2::new(Vec2::new(p.x, p.z).length() - self.major_radius, p.y);
		q.length() - self.minor_radius
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_on_tube_center() {
		let torus = TorusSdf::new(0.6, 0.25);
		// The circle of tube centers is the deepest interior
		assert!((torus.distance(Vec3::new(0.6, 0.0, 0.0)) + 0.25).abs() < 1e-5);
	}

	#[test]
	fn test_center_hole() {
		let torus = TorusSdf::new(0.6, 0.25);
		assert!((torus.distance(Vec3::ZERO) - 0.35).abs() < 1e-5);
	}
}
