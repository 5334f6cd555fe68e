use crate::field::Field;
use crate::rng::ParamRng;
use crate::transform::Transform;
use glam::Vec3;
use std::f32::consts::TAU;

/// Shapes whose construction depends on the evaluation-time seed and/or
/// time parameter.
///
/// [`Procedural::build`] derives every internal parameter from those two
/// inputs alone, so one (time, seed) pair always produces the same tree and
/// a whole batch is evaluated against a single consistent shape. Time only
/// enters through continuous terms (sine phases, radius pulses), keeping
/// the field continuous in time.
#[derive(Debug, Clone)]
pub enum Procedural {
	/// Animated swimmer: ellipsoid body, sine-swept tail, dorsal fin
	Fish,
	/// Seeded organism: torso, head and limbs with seed-derived placement,
	/// Perlin skin
	Creature,
	/// Seeded sphere with Perlin skin and a time pulse
	Blob,
}

impl Procedural {
	pub fn build(&self, time: f32, seed: u32) -> Field {
		match self {
			Procedural::Fish => build_fish(time),
			Procedural::Creature => build_creature(seed),
			Procedural::Blob => build_blob(time, seed),
		}
	}
}

fn build_fish(time: f32) -> Field {
	// Tail sway phase advances continuously with time
	let sway = (time * 3.0).sin();

	let body = Field::ellipsoid(Vec3::ZERO, Vec3::new(0.55, 0.22, 0.16));

	// Tail fin: a flattened ellipsoid hinged behind the body, swung around Y
	let tail = Field::ellipsoid(Vec3::new(-0.2, 0.0, 0.0), Vec3::new(0.24, 0.18, 0.04))
		.rotated_y(sway * 0.6)
		.translated(Vec3::new(-0.5, 0.0, 0.0));

	// Dorsal fin rides on top, counter-swaying slightly
	let fin = Field::ellipsoid(Vec3::ZERO, Vec3::new(0.2, 0.16, 0.03))
		.rotated_y(-sway * 0.2)
		.translated(Vec3::new(0.05, 0.3, 0.0));

	Field::smooth_union(0.08, vec![body, tail, fin])
}

fn build_creature(seed: u32) -> Field {
	let mut rng = ParamRng::new(seed);

	let torso_radius = rng.range(0.35, 0.5);
	let mut parts = vec![Field::sphere(Vec3::ZERO, torso_radius)];

	// Head sits along a seed-chosen upward bearing
	let head_bearing =
		Vec3::new(rng.range(-0.4, 0.4), 1.0, rng.range(-0.4, 0.4)).normalize();
	let head_radius = rng.range(0.15, 0.25);
	parts.push(Field::sphere(head_bearing * (torso_radius + head_radius * 0.6), head_radius));

	let limb_count = rng.int_range(3, 6);
	for _ in 0..limb_count {
		let direction = rng.unit_vec3();
		let length = rng.range(0.3, 0.55);
		let radius = rng.range(0.05, 0.1);
		let start = direction * (torso_radius * 0.8);
		let end = direction * (torso_radius * 0.8 + length);
		parts.push(Field::capsule(start, end, radius));
	}

	// Low-amplitude skin over the blended body, seeded from the same stream
	Field::smooth_union(0.1, parts).transformed(Transform::displace(seed, 3.0, 0.03))
}

fn build_blob(time: f32, seed: u32) -> Field {
	let mut rng = ParamRng::new(seed);

	let base_radius = rng.range(0.5, 0.7);
	let phase = rng.range(0.0, TAU);
	let pulse = 1.0 + 0.08 * (time * 2.0 + phase).sin();

	let frequency = rng.range(2.0, 4.0);
	let amplitude = rng.range(0.05, 0.12);

	Field::sphere(Vec3::ZERO, base_radius * pulse)
		.transformed(Transform::displace(seed, frequency, amplitude))
}
