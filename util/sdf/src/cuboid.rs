use crate::Sdf;
use glam::Vec3;

/// An axis-aligned box SDF centered at the origin
#[derive(Debug, Clone)]
pub struct CuboidSdf {
	pub half_extents: Vec3,
}

impl CuboidSdf {
	pub fn new(half_extents: Vec3) -> Self {
		Self { half_extents }
	}
}

impl Sdf for CuboidSdf {
	fn distance(&self, p: Vec3) -> f32 {
		// Exact box distance: the outside term handles face, edge and corner
		// regions, the inside term is the largest axis penetration
		let q = p.abs() - self.half_extents;
		q.max(Vec3::ZERO).length() + q.max_element().min(0.0)
	}
}
