use crate::field::Field;
use crate::Sdf;
use glam::Vec3;
use noise::{NoiseFn, Perlin};

/// Spatial remapping applied to a query point before the child field is
/// evaluated, with the returned distance corrected where the mapping
/// changes lengths. Rigid variants (translate, rotate) pass the child's
/// distance through unchanged.
#[derive(Debug, Clone)]
pub enum Transform {
	/// Translate the child by an offset
	Translate(Vec3),
	/// Rotate the child around the Y axis (radians)
	RotateY(f32),
	/// Scale the child uniformly; the child sees `p / s` and the distance is
	/// scaled back by `s`
	Scale(f32),
	/// Scale the child per axis. Correcting by the smallest factor keeps a
	/// conservative lower bound, not a true distance.
	ScaleXyz(Vec3),
	/// Round the edges of the child outward by a radius
	Round(f32),
	/// Elongate the child along each axis by clamping the query point
	Elongate(Vec3),
	/// Perturb the child's surface with seeded Perlin noise. The result is a
	/// displaced bound, not a true distance.
	Displace { noise: Perlin, frequency: f32, amplitude: f32 },
}

impl Transform {
	pub fn displace(seed: u32, frequency: f32, amplitude: f32) -> Self {
		Transform::Displace { noise: Perlin::new(seed), frequency, amplitude }
	}

	pub(crate) fn apply(&self, child: &Field, p: Vec3) -> f32 {
		match self {
			Transform::Translate(offset) => child.distance(p - *offset),
			Transform::RotateY(angle) => {
				let cos_a = angle.cos();
				let sin_a = angle.sin();

				// Rotate point around Y axis
				let x = p.x * cos_a - p.z * sin_a;
				let z = p.x * sin_a + p.z * cos_a;

				child.distance(Vec3::new(x, p.y, z))
			}
			Transform::Scale(s) => child.distance(p / *s) * *s,
			Transform::ScaleXyz(s) => child.distance(p / *s) * s.min_element(),
			Transform::Round(radius) => child.distance(p) - radius,
			Transform::Elongate(e) => {
				let q = Vec3::new(
					p.x - p.x.clamp(-e.x, e.x),
					p.y - p.y.clamp(-e.y, e.y),
					p.z - p.z.clamp(-e.z, e.z),
				);
				child.distance(q)
			}
			Transform::Displace { noise, frequency, amplitude } => {
				let s = noise.get([
					(p.x * frequency) as f64,
					(p.y * frequency) as f64,
					(p.z * frequency) as f64,
				]) as f32;
				child.distance(p) + s * amplitude
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_translate_moves_surface() {
		let moved = Field::sphere(Vec3::ZERO, 1.0).translated(Vec3::new(2.0, 0.0, 0.0));
		assert!(moved.distance(Vec3::new(2.0, 0.0, 0.0)) < 0.0);
		assert!((moved.distance(Vec3::new(4.0, 0.0, 0.0)) - 1.0).abs() < 1e-5);
	}

	#[test]
	fn test_uniform_scale_matches_scaled_sphere() {
		let scaled = Field::sphere(Vec3::ZERO, 1.0).scaled(2.0);
		let big = Field::sphere(Vec3::ZERO, 2.0);
		for x in [0.0f32, 1.0, 2.0, 3.5] {
			let p = Vec3::new(x, 0.0, 0.0);
			assert!((scaled.distance(p) - big.distance(p)).abs() < 1e-5);
		}
	}

	#[test]
	fn test_rotation_preserves_distance() {
		let torus = Field::torus(0.6, 0.25);
		let rotated = torus.clone().rotated_y(1.3);
		// A torus is a surface of revolution around Y, so the field is
		// unchanged by the rotation
		let p = Vec3::new(0.4, 0.2, 0.1);
		assert!((torus.distance(p) - rotated.distance(p)).abs() < 1e-5);
	}

	#[test]
	fn test_round_grows_sphere() {
		let rounded = Field::sphere(Vec3::ZERO, 1.0).rounded(0.25);
		assert!((rounded.distance(Vec3::new(2.0, 0.0, 0.0)) - 0.75).abs() < 1e-5);
	}

	#[test]
	fn test_non_uniform_scale_is_lower_bound() {
		let squashed = Field::sphere(Vec3::ZERO, 1.0)
			.transformed(Transform::ScaleXyz(Vec3::new(2.0, 1.0, 1.0)));
		// On the squashed axis the bound underestimates but keeps the sign
		assert!(squashed.distance(Vec3::new(3.0, 0.0, 0.0)) > 0.0);
		assert!(squashed.distance(Vec3::ZERO) < 0.0);
	}

	#[test]
	fn test_displace_is_seed_deterministic() {
		let a = Field::sphere(Vec3::ZERO, 1.0).transformed(Transform::displace(7, 3.0, 0.1));
		let b = Field::sphere(Vec3::ZERO, 1.0).transformed(Transform::displace(7, 3.0, 0.1));
		let p = Vec3::new(0.3, 0.7, -0.2);
		assert_eq!(a.distance(p), b.distance(p));
	}
}
