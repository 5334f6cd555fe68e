pub mod capsule;
pub mod combinators;
pub mod cuboid;
pub mod ellipsoid;
pub mod field;
pub mod fractal;
pub mod plane;
pub mod procedural;
pub mod registry;
pub mod rng;
pub mod sphere;
pub mod torus;
pub mod transform;

pub use capsule::CapsuleSdf;
pub use combinators::CombineOp;
pub use cuboid::CuboidSdf;
pub use ellipsoid::EllipsoidSdf;
pub use field::{Field, Primitive};
pub use fractal::{Fractal, JuliaSdf, MandelbulbSdf};
pub use plane::PlaneSdf;
pub use procedural::Procedural;
pub use registry::{Registry, SdfError, DEFAULT_SEED};
pub use rng::ParamRng;
pub use sphere::SphereSdf;
pub use torus::TorusSdf;
pub use transform::Transform;

use glam::Vec3;

/// Trait for Signed Distance Fields
/// Returns the signed distance from a point to the surface:
/// - Negative: inside/below the surface
/// - Zero: on the surface
/// - Positive: outside/above the surface
pub trait Sdf: Send + Sync {
	fn distance(&self, p: Vec3) -> f32;

	/// Estimates the surface normal at `p` from the distance gradient
	/// using central differences.
	fn normal(&self, p: Vec3) -> Vec3 {
		let epsilon = 0.0005;
		let dx = self.distance(Vec3::new(p.x + epsilon, p.y, p.z))
			- self.distance(Vec3::new(p.x - epsilon, p.y, p.z));
		let dy = self.distance(Vec3::new(p.x, p.y + epsilon, p.z))
			- self.distance(Vec3::new(p.x, p.y - epsilon, p.z));
		let dz = self.distance(Vec3::new(p.x, p.y, p.z + epsilon))
			- self.distance(Vec3::new(p.x, p.y, p.z - epsilon));

		let grad = Vec3::new(dx, dy, dz);
		let len = grad.length();
		if len > 0.0001 {
			grad / len
		} else {
			Vec3::Y
		}
	}
}
