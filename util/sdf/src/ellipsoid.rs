use crate::Sdf;
use glam::Vec3;

/// An ellipsoid SDF with arbitrary radii along each axis
///
/// The scaled-sphere form used here is a lower bound on the true distance,
/// not the exact distance; the error grows with the radii ratio.
#[derive(Debug, Clone)]
pub struct EllipsoidSdf {
	pub center: Vec3,
	pub radii: Vec3,
}

impl EllipsoidSdf {
	pub fn new(center: Vec3, radii: Vec3) -> Self {
		Self { center, radii }
	}
}

impl Sdf for EllipsoidSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let local = (p - self.center) / self.radii;
		let d = local.length();
		if d > 0.0 {
			(d - 1.0) * self.radii.min_element()
		} else {
			-self.radii.min_element()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sign_on_axes() {
		let ellipsoid = EllipsoidSdf::new(Vec3::ZERO, Vec3::new(0.8, 0.5, 0.6));
		assert!(ellipsoid.distance(Vec3::ZERO) < 0.0);
		assert!(ellipsoid.distance(Vec3::new(1.0, 0.0, 0.0)) > 0.0);
		assert!(ellipsoid.distance(Vec3::new(0.8, 0.0, 0.0)).abs() < 1e-5);
	}

	#[test]
	fn test_spherical_case_is_exact() {
		let ellipsoid = EllipsoidSdf::new(Vec3::ZERO, Vec3::splat(0.5));
		assert!((ellipsoid.distance(Vec3::new(1.5, 0.0, 0.0)) - 1.0).abs() < 1e-5);
	}
}
