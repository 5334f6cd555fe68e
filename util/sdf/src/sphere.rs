use crate::Sdf;
use glam::Vec3;

/// A sphere SDF
#[derive(Debug, Clone)]
pub struct SphereSdf {
	pub center: Vec3,
	pub radius: f32,
}

impl SphereSdf {
	pub fn new(center: Vec3, radius: f32) -> Self {
		Self { center, radius }
	}

	/// The unit sphere at the origin
	pub fn unit() -> Self {
		Self::new(Vec3::ZERO, 1.0)
	}
}

impl Sdf for SphereSdf {
	fn distance(&self, p: Vec3) -> f32 {
		(p - self.center).length() - self.radius
	}
}
