use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
	#[error("lattice resolution must be at least 2, got {0}")]
	ResolutionTooSmall(u32),
}

/// Axis-aligned sample region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
	pub min: Vec3,
	pub max: Vec3,
}

impl GridBounds {
	pub fn new(min: Vec3, max: Vec3) -> Self {
		Self { min, max }
	}

	/// Cube spanning [-half, half] on every axis
	pub fn symmetric(half: f32) -> Self {
		Self { min: Vec3::splat(-half), max: Vec3::splat(half) }
	}
}

/// Regular lattice of sample points over a bounding box.
///
/// Nodes are ordered x fastest, then y, then z, so node (x, y, z) lands at
/// index `(z * resolution + y) * resolution + x`. Evaluator output arrays
/// are position-aligned with this ordering.
#[derive(Debug, Clone, Copy)]
pub struct Lattice {
	bounds: GridBounds,
	resolution: u32,
}

impl Lattice {
	/// `resolution` is the node count per axis; the step divides by
	/// `resolution - 1` so both faces of the box carry nodes.
	pub fn new(bounds: GridBounds, resolution: u32) -> Result<Self, GridError> {
		if resolution < 2 {
			return Err(GridError::ResolutionTooSmall(resolution));
		}
		Ok(Self { bounds, resolution })
	}

	pub fn bounds(&self) -> GridBounds {
		self.bounds
	}

	pub fn resolution(&self) -> u32 {
		self.resolution
	}

	/// Total node count (`resolution` cubed)
	pub fn len(&self) -> usize {
		(self.resolution as usize).pow(3)
	}

	pub fn is_empty(&self) -> bool {
		false
	}

	/// Step between neighboring nodes on each axis
	pub fn step(&self) -> Vec3 {
		(self.bounds.max - self.bounds.min) / (self.resolution - 1) as f32
	}

	/// Linear index of node (x, y, z); the positional contract consumers of
	/// the evaluator's output rely on
	pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
		let res = self.resolution as usize;
		(z as usize * res + y as usize) * res + x as usize
	}

	/// Generates all node positions in index order.
	pub fn points(&self) -> Vec<Vec3> {
		let step = self.step();
		let mut points = Vec::with_capacity(self.len());
		for z in 0..self.resolution {
			for y in 0..self.resolution {
				for x in 0..self.resolution {
					points.push(
						self.bounds.min
							+ Vec3::new(
								x as f32 * step.x,
								y as f32 * step.y,
								z as f32 * step.z,
							),
					);
				}
			}
		}
		log::debug!("generated {} lattice points at resolution {}", points.len(), self.resolution);
		points
	}
}
