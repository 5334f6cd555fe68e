use crate::field::Field;
use crate::fractal::{Fractal, JuliaSdf, MandelbulbSdf};
use crate::procedural::Procedural;
use crate::Sdf;
use glam::Vec3;
use rayon::prelude::*;
use thiserror::Error;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u32 = 12345;

/// Errors surfaced by the evaluation engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdfError {
	#[error("unknown sdf '{0}'")]
	UnknownName(String),
}

/// Catalog of named distance fields.
///
/// Built once, then only read; there is no ambient global registry. Callers
/// construct a catalog (usually [`Registry::standard`]) and pass it by
/// reference, so tests and tools can carry independent catalogs in one
/// process.
pub struct Registry {
	entries: Vec<(String, Field)>,
}

impl Registry {
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// The built-in catalog. Registration order is the listing order.
	pub fn standard() -> Self {
		let mut registry = Self::new();
		registry.register("Sphere", Field::sphere(Vec3::ZERO, 1.0));
		registry.register("Box", Field::cuboid(Vec3::new(0.6, 0.4, 0.5)));
		registry.register("RoundedBox", Field::cuboid(Vec3::new(0.5, 0.3, 0.4)).rounded(0.1));
		registry.register("Torus", Field::torus(0.6, 0.25));
		registry.register("Plane", Field::plane(Vec3::Y, 0.0));
		registry.register(
			"Capsule",
			Field::capsule(Vec3::new(0.0, -0.4, 0.0), Vec3::new(0.0, 0.4, 0.0), 0.3),
		);
		registry.register("Ellipsoid", Field::ellipsoid(Vec3::ZERO, Vec3::new(0.8, 0.5, 0.6)));
		registry.register("Snowman", snowman());
		registry.register("Lens", lens());
		registry.register("Crater", crater());
		registry
			.register("Mandelbulb", Field::Fractal(Fractal::Mandelbulb(MandelbulbSdf::default())));
		registry.register("Julia", Field::Fractal(Fractal::Julia(JuliaSdf::default())));
		registry.register("Blob", Field::Procedural(Procedural::Blob));
		registry.register("Creature", Field::Procedural(Procedural::Creature));
		registry.register("Fish", Field::Procedural(Procedural::Fish));
		registry
	}

	/// Registers a field under a name. Re-registering replaces the field but
	/// keeps the name's original listing position.
	pub fn register(&mut self, name: impl Into<String>, field: Field) {
		let name = name.into();
		if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			entry.1 = field;
		} else {
			self.entries.push((name, field));
		}
	}

	/// Names in registration order, stable across calls.
	pub fn names(&self) -> Vec<&str> {
		self.entries.iter().map(|(name, _)| name.as_str()).collect()
	}

	pub fn get(&self, name: &str) -> Option<&Field> {
		self.entries.iter().find(|(existing, _)| existing == name).map(|(_, field)| field)
	}

	/// Evaluates the named field at every point for one (time, seed) pair.
	///
	/// Procedural leaves are resolved once, so the whole batch sees the same
	/// derived shape. Points are independent pure computations; the batch is
	/// fanned out across the rayon pool and collected position-aligned with
	/// the input.
	pub fn evaluate(
		&self,
		name: &str,
		points: &[Vec3],
		time: f32,
		seed: u32,
	) -> Result<Vec<f32>, SdfError> {
		let field = self.get(name).ok_or_else(|| SdfError::UnknownName(name.to_string()))?;
		let resolved = field.resolve(time, seed);

		log::debug!(
			"evaluating '{}' at {} points (time {}, seed {})",
			name,
			points.len(),
			time,
			seed
		);

		Ok(points.par_iter().map(|p| resolved.distance(*p)).collect())
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

fn snowman() -> Field {
	Field::smooth_union(
		0.1,
		vec![
			Field::sphere(Vec3::new(0.0, -0.45, 0.0), 0.5),
			Field::sphere(Vec3::new(0.0, 0.25, 0.0), 0.35),
			Field::sphere(Vec3::new(0.0, 0.75, 0.0), 0.22),
		],
	)
}

fn lens() -> Field {
	Field::intersection(vec![
		Field::sphere(Vec3::new(-0.25, 0.0, 0.0), 0.6),
		Field::sphere(Vec3::new(0.25, 0.0, 0.0), 0.6),
	])
}

fn crater() -> Field {
	Field::subtraction(
		Field::sphere(Vec3::ZERO, 0.7),
		Field::sphere(Vec3::new(0.0, 0.55, 0.0), 0.4),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_names_are_stable() {
		let registry = Registry::standard();
		assert_eq!(registry.names(), registry.names());
		assert_eq!(registry.names().first(), Some(&"Sphere"));
		assert!(registry.names().contains(&"Mandelbulb"));
		assert!(registry.names().contains(&"Fish"));
	}

	#[test]
	fn test_unknown_name_fails() {
		let registry = Registry::standard();
		let result = registry.evaluate("NoSuchShape", &[Vec3::ZERO], 0.0, DEFAULT_SEED);
		assert_eq!(result, Err(SdfError::UnknownName("NoSuchShape".to_string())));
	}

	#[test]
	fn test_empty_batch_yields_empty_result() {
		let registry = Registry::standard();
		let values = registry.evaluate("Sphere", &[], 0.0, DEFAULT_SEED).unwrap();
		assert!(values.is_empty());
	}

	#[test]
	fn test_sphere_exactness_through_the_engine() {
		let registry = Registry::standard();
		let points: Vec<Vec3> =
			[0.0f32, 0.5, 1.0, 1.5, 2.0].iter().map(|&d| Vec3::new(0.0, 0.0, d)).collect();
		let values = registry.evaluate("Sphere", &points, 0.0, DEFAULT_SEED).unwrap();
		for (point, value) in points.iter().zip(&values) {
			assert!((value - (point.length() - 1.0)).abs() < 1e-5);
		}
	}

	#[test]
	fn test_results_are_position_aligned() {
		let registry = Registry::standard();
		let points =
			vec![Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(0.0, 0.5, 0.0)];
		let values = registry.evaluate("Sphere", &points, 0.0, DEFAULT_SEED).unwrap();
		assert_eq!(values.len(), points.len());

		// Permuting the input permutes the output identically
		let permuted = vec![points[2], points[0], points[1]];
		let permuted_values =
			registry.evaluate("Sphere", &permuted, 0.0, DEFAULT_SEED).unwrap();
		assert_eq!(permuted_values, vec![values[2], values[0], values[1]]);
	}

	#[test]
	fn test_evaluation_is_deterministic() {
		let registry = Registry::standard();
		let points: Vec<Vec3> = (0..50)
			.map(|i| Vec3::new(i as f32 * 0.04 - 1.0, (i % 7) as f32 * 0.1, 0.3))
			.collect();
		for name in ["Sphere", "Mandelbulb", "Creature", "Fish", "Blob"] {
			let a = registry.evaluate(name, &points, 1.5, 77).unwrap();
			let b = registry.evaluate(name, &points, 1.5, 77).unwrap();
			let a_bits: Vec<u32> = a.iter().map(|v| v.to_bits()).collect();
			let b_bits: Vec<u32> = b.iter().map(|v| v.to_bits()).collect();
			assert_eq!(a_bits, b_bits, "{} drifted between runs", name);
		}
	}

	#[test]
	fn test_seed_selects_the_creature() {
		let registry = Registry::standard();
		let points = vec![Vec3::new(0.5, 0.2, -0.3), Vec3::new(-0.4, 0.6, 0.1)];
		let a = registry.evaluate("Creature", &points, 0.0, 1).unwrap();
		let b = registry.evaluate("Creature", &points, 0.0, 2).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn test_custom_catalog_is_independent() {
		let mut registry = Registry::new();
		registry.register("OnlyShape", Field::sphere(Vec3::ZERO, 0.5));
		assert_eq!(registry.names(), vec!["OnlyShape"]);
		assert!(registry.get("Sphere").is_none());
	}

	#[test]
	fn test_reregistering_replaces_in_place() {
		let mut registry = Registry::new();
		registry.register("A", Field::sphere(Vec3::ZERO, 1.0));
		registry.register("B", Field::sphere(Vec3::ZERO, 1.0));
		registry.register("A", Field::sphere(Vec3::ZERO, 2.0));
		assert_eq!(registry.names(), vec!["A", "B"]);
		let values = registry.evaluate("A", &[Vec3::ZERO], 0.0, DEFAULT_SEED).unwrap();
		assert!((values[0] + 2.0).abs() < 1e-5);
	}
}
