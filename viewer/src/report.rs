use grid::Lattice;
use std::fmt::Write;

/// Distance summary for an evaluated lattice: extremes, mean, and how the
/// nodes split across inside/surface/outside.
pub fn summary(name: &str, lattice: &Lattice, values: &[f32]) -> String {
	let near = surface_band(lattice);

	let mut min = f32::INFINITY;
	let mut max = f32::NEG_INFINITY;
	let mut sum = 0.0f64;
	let mut inside = 0usize;
	let mut surface = 0usize;
	for &value in values {
		min = min.min(value);
		max = max.max(value);
		sum += value as f64;
		if value.abs() <= near {
			surface += 1;
		} else if value < 0.0 {
			inside += 1;
		}
	}
	let outside = values.len() - inside - surface;
	let mean = if values.is_empty() { 0.0 } else { sum / values.len() as f64 };

	let mut out = String::new();
	let _ = writeln!(out, "{}: {} samples", name, values.len());
	let _ = writeln!(out, "  distance min {:.4}  max {:.4}  mean {:.4}", min, max, mean);
	let _ = writeln!(out, "  inside {}  near-surface {}  outside {}", inside, surface, outside);
	out
}

/// Text contour of the lattice's mid-Z plane: '#' inside, 'o' within half a
/// cell of the surface, '.' outside. Rows print top-down so +Y is up.
pub fn mid_slice(lattice: &Lattice, values: &[f32]) -> String {
	let near = surface_band(lattice);
	let res = lattice.resolution();
	let z = res / 2;

	let mut out = String::with_capacity(((res + 1) * res) as usize);
	for y in (0..res).rev() {
		for x in 0..res {
			let d = values[lattice.index(x, y, z)];
			out.push(if d.abs() <= near {
				'o'
			} else if d < 0.0 {
				'#'
			} else {
				'.'
			});
		}
		out.push('\n');
	}
	out
}

/// Half a cell diagonal: a node this close to the surface reads as "on" it
fn surface_band(lattice: &Lattice) -> f32 {
	lattice.step().length() * 0.5
}

#[cfg(test)]
mod tests {
	use super::*;
	use grid::GridBounds;
	use sdf::{Registry, DEFAULT_SEED};

	fn evaluated_sphere(resolution: u32) -> (Lattice, Vec<f32>) {
		let lattice = Lattice::new(GridBounds::symmetric(1.0), resolution).unwrap();
		let values = Registry::standard()
			.evaluate("Sphere", &lattice.points(), 0.0, DEFAULT_SEED)
			.unwrap();
		(lattice, values)
	}

	#[test]
	fn test_summary_counts_add_up() {
		let (lattice, values) = evaluated_sphere(8);
		let text = summary("Sphere", &lattice, &values);
		assert!(text.contains("Sphere: 512 samples"));
		assert!(text.contains("inside"));
	}

	#[test]
	fn test_mid_slice_shape() {
		let (lattice, values) = evaluated_sphere(8);
		let slice = mid_slice(&lattice, &values);
		let lines: Vec<&str> = slice.lines().collect();
		assert_eq!(lines.len(), 8);
		assert!(lines.iter().all(|line| line.len() == 8));
		// The unit sphere fills the [-1, 1] slab, so the center row has
		// interior marks and the corners stay outside
		assert!(slice.contains('#') || slice.contains('o'));
		assert_eq!(lines[0].chars().next(), Some('.'));
	}

	#[test]
	fn test_center_of_sphere_slice_is_inside() {
		let (lattice, values) = evaluated_sphere(9);
		let d = values[lattice.index(4, 4, 4)];
		assert!(d < 0.0);
	}
}
