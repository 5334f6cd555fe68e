use crate::Sdf;
use glam::Vec3;

/// A half-space SDF whose surface is the plane `dot(normal, p) = offset`
#[derive(Debug, Clone)]
pub struct PlaneSdf {
	pub normal: Vec3,
	pub offset: f32,
}

impl PlaneSdf {
	/// `normal` is normalized on construction so the field stays a true
	/// Euclidean distance.
	pub fn new(normal: Vec3, offset: f32) -> Self {
		Self { normal: normal.normalize(), offset }
	}
}

impl Sdf for PlaneSdf {
	fn distance(&self, p: Vec3) -> f32 {
		p.dot(self.normal) - self.offset
	}
}
