use crate::Sdf;
use glam::{Vec3, Vec4};

/// Floor for escape-time distance estimates. Points at or inside the set
/// report this instead of collapsing to zero, negative values or NaN from
/// the logarithm.
const DE_EPSILON: f32 = 1e-4;

/// Escape-time fractal fields with distance estimation.
#[derive(Debug, Clone)]
pub enum Fractal {
	Mandelbulb(MandelbulbSdf),
	Julia(JuliaSdf),
}

impl Sdf for Fractal {
	fn distance(&self, p: Vec3) -> f32 {
		match self {
			Fractal::Mandelbulb(m) => m.distance(p),
			Fractal::Julia(j) => j.distance(p),
		}
	}
}

/// Power-n bulb fractal (escape-time distance estimator).
///
/// Iterates `z <- z^n + c` in spherical triplex form while accumulating the
/// running derivative `dr <- n * r^(n-1) * dr + 1`, stopping at the escape
/// radius or the iteration cap. The cap is a hard bound on per-point cost.
/// The estimate `0.5 * ln(r) * r / dr` is a lower bound on the true
/// distance outside the set.
#[derive(Debug, Clone)]
pub struct MandelbulbSdf {
	pub power: f32,
	pub max_iterations: u32,
	pub escape_radius: f32,
}

impl MandelbulbSdf {
	pub fn new(power: f32, max_iterations: u32, escape_radius: f32) -> Self {
		Self { power, max_iterations, escape_radius }
	}
}

impl Default for MandelbulbSdf {
	fn default() -> Self {
		Self { power: 8.0, max_iterations: 10, escape_radius: 2.0 }
	}
}

impl Sdf for MandelbulbSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let mut z = p;
		let mut dr = 1.0f32;
		let mut r = z.length();

		for _ in 0..self.max_iterations {
			r = z.length();
			if r > self.escape_radius {
				break;
			}
			// The origin is a fixed point of the power map; its orbit never
			// escapes and the spherical angles below would be undefined
			if r < DE_EPSILON {
				break;
			}

			// Convert to spherical coordinates
			let theta = (z.z / r).acos();
			let phi = z.y.atan2(z.x);
			dr = r.powf(self.power - 1.0) * self.power * dr + 1.0;

			// Scale and rotate
			let zr = r.powf(self.power);
			let theta = theta * self.power;
			let phi = phi * self.power;

			// Convert back to cartesian
			z = zr * Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());
			z += p;
		}

		(0.5 * r.ln() * r / dr).max(DE_EPSILON)
	}
}

/// Quaternion Julia set (escape-time distance estimator).
///
/// Iterates `z <- z^2 + c` over quaternions with the derivative magnitude
/// `dz <- 2 * |z| * dz`, under the same escape/cap regime as the bulb.
#[derive(Debug, Clone)]
pub struct JuliaSdf {
	/// Quaternion constant: x is the scalar part, (y, z, w) the vector part
	pub c: Vec4,
	pub max_iterations: u32,
	pub escape_radius: f32,
}

impl JuliaSdf {
	pub fn new(c: Vec4, max_iterations: u32, escape_radius: f32) -> Self {
		Self { c, max_iterations, escape_radius }
	}
}

impl Default for JuliaSdf {
	fn default() -> Self {
		Self { c: Vec4::new(-0.2, 0.6, 0.15, 0.2), max_iterations: 12, escape_radius: 2.0 }
	}
}

impl Sdf for JuliaSdf {
	fn distance(&self, p: Vec3) -> f32 {
		let mut z = Vec4::new(p.x, p.y, p.z, 0.0);
		let mut dz = 1.0f32;
		let mut r = z.length();

		for _ in 0..self.max_iterations {
			r = z.length();
			if r > self.escape_radius || r < DE_EPSILON {
				break;
			}

			dz = 2.0 * r * dz;

			// Quaternion square: scalar part x, vector part (y, z, w)
			z = Vec4::new(
				z.x * z.x - z.y * z.y - z.z * z.z - z.w * z.w,
				2.0 * z.x * z.y,
				2.0 * z.x * z.z,
				2.0 * z.x * z.w,
			) + self.c;
		}

		(0.5 * r.ln() * r / dz).max(DE_EPSILON)
	}
}
