use crate::combinators::CombineOp;
use crate::fractal::Fractal;
use crate::procedural::Procedural;
use crate::registry::DEFAULT_SEED;
use crate::transform::Transform;
use crate::{CapsuleSdf, CuboidSdf, EllipsoidSdf, PlaneSdf, Sdf, SphereSdf, TorusSdf};
use glam::Vec3;

/// Closed-form distance primitives usable as [`Field`] leaves.
#[derive(Debug, Clone)]
pub enum Primitive {
	Sphere(SphereSdf),
	Cuboid(CuboidSdf),
	Torus(TorusSdf),
	Plane(PlaneSdf),
	Capsule(CapsuleSdf),
	Ellipsoid(EllipsoidSdf),
}

impl Sdf for Primitive {
	fn distance(&self, p: Vec3) -> f32 {
		match self {
			Primitive::Sphere(s) => s.distance(p),
			Primitive::Cuboid(c) => c.distance(p),
			Primitive::Torus(t) => t.distance(p),
			Primitive::Plane(pl) => pl.distance(p),
			Primitive::Capsule(c) => c.distance(p),
			Primitive::Ellipsoid(e) => e.distance(p),
		}
	}
}

/// A composable distance field description.
///
/// A `Field` is an immutable tree built at registration time; evaluating it
/// never mutates it. Procedural leaves are expanded by [`Field::resolve`]
/// before a batch is evaluated, so every point in the batch sees the same
/// derived shape.
#[derive(Debug, Clone)]
pub enum Field {
	Primitive(Primitive),
	Transformed { transform: Transform, child: Box<Field> },
	Combined { op: CombineOp, children: Vec<Field> },
	Fractal(Fractal),
	Procedural(Procedural),
}

impl Field {
	pub fn sphere(center: Vec3, radius: f32) -> Self {
		Field::Primitive(Primitive::Sphere(SphereSdf::new(center, radius)))
	}

	pub fn cuboid(half_extents: Vec3) -> Self {
		Field::Primitive(Primitive::Cuboid(CuboidSdf::new(half_extents)))
	}

	pub fn torus(major_radius: f32, minor_radius: f32) -> Self {
		Field::Primitive(Primitive::Torus(TorusSdf::new(major_radius, minor_radius)))
	}

	pub fn plane(normal: Vec3, offset: f32) -> Self {
		Field::Primitive(Primitive::Plane(PlaneSdf::new(normal, offset)))
	}

	pub fn capsule(start: Vec3, end: Vec3, radius: f32) -> Self {
		Field::Primitive(Primitive::Capsule(CapsuleSdf::new(start, end, radius)))
	}

	pub fn ellipsoid(center: Vec3, radii: Vec3) -> Self {
		Field::Primitive(Primitive::Ellipsoid(EllipsoidSdf::new(center, radii)))
	}

	pub fn transformed(self, transform: Transform) -> Self {
		Field::Transformed { transform, child: Box::new(self) }
	}

	pub fn translated(self, offset: Vec3) -> Self {
		self.transformed(Transform::Translate(offset))
	}

	pub fn rotated_y(self, angle: f32) -> Self {
		self.transformed(Transform::RotateY(angle))
	}

	pub fn scaled(self, scale: f32) -> Self {
		self.transformed(Transform::Scale(scale))
	}

	pub fn rounded(self, radius: f32) -> Self {
		self.transformed(Transform::Round(radius))
	}

	pub fn union(children: Vec<Field>) -> Self {
		Field::Combined { op: CombineOp::Union, children }
	}

	pub fn smooth_union(k: f32, children: Vec<Field>) -> Self {
		Field::Combined { op: CombineOp::SmoothUnion { k }, children }
	}

	pub fn intersection(children: Vec<Field>) -> Self {
		Field::Combined { op: CombineOp::Intersection, children }
	}

	pub fn subtraction(base: Field, cut: Field) -> Self {
		Field::Combined { op: CombineOp::Subtraction, children: vec![base, cut] }
	}

	/// Expands procedural leaves into concrete subtrees for one
	/// (time, seed) pair. Everything else is copied as-is.
	pub fn resolve(&self, time: f32, seed: u32) -> Field {
		match self {
			Field::Procedural(shape) => shape.build(time, seed),
			Field::Transformed { transform, child } => Field::Transformed {
				transform: transform.clone(),
				child: Box::new(child.resolve(time, seed)),
			},
			Field::Combined { op, children } => Field::Combined {
				op: op.clone(),
				children: children.iter().map(|c| c.resolve(time, seed)).collect(),
			},
			other => other.clone(),
		}
	}
}

impl Sdf for Field {
	fn distance(&self, p: Vec3) -> f32 {
		match self {
			Field::Primitive(primitive) => primitive.distance(p),
			Field::Transformed { transform, child } => transform.apply(child, p),
			Field::Combined { op, children } => op.combine(children, p),
			Field::Fractal(fractal) => fractal.distance(p),
			// An unresolved procedural leaf evaluates at its rest pose
			// (time 0, default seed); the registry resolves before batches.
			Field::Procedural(shape) => shape.build(0.0, DEFAULT_SEED).distance(p),
		}
	}
}
