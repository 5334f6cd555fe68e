use crate::field::Field;
use crate::Sdf;
use glam::Vec3;

/// Boolean and blend operators composing two or more child fields.
#[derive(Debug, Clone, PartialEq)]
pub enum CombineOp {
	/// Minimum over children: the outer surface of any child
	Union,
	/// Maximum over children: the region inside every child
	Intersection,
	/// First child with the rest carved out: `max(d0, -d1, -d2, ...)`
	Subtraction,
	/// Union through a polynomial smooth minimum with blend radius `k`
	SmoothUnion { k: f32 },
	/// Intersection through the matching smooth maximum
	SmoothIntersection { k: f32 },
	/// Subtraction through the matching smooth maximum
	SmoothSubtraction { k: f32 },
}

/// Polynomial smooth minimum function
/// Returns a smooth approximation of min(a, b). Falls back to the hard
/// minimum for `k <= 0`, and the clamp keeps it exact once the distances
/// differ by more than `k`.
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
	if k <= 0.0 {
		return a.min(b);
	}
	let h = (k - (a - b).abs()).max(0.0) / k;
	a.min(b) - h * h * h * k * (1.0 / 6.0)
}

/// Smooth max is the negative of smooth min of negatives
pub fn smooth_max(a: f32, b: f32, k: f32) -> f32 {
	-smooth_min(-a, -b, k)
}

impl CombineOp {
	/// Folds the children's distances at `p` under this operator.
	///
	/// When distances tie the fold keeps the earlier operand; the value is
	/// identical either way. An empty child list reads as empty space.
	pub(crate) fn combine(&self, children: &[Field], p: Vec3) -> f32 {
		let Some((first, rest)) = children.split_first() else {
			return f32::MAX;
		};
		let d0 = first.distance(p);
		match self {
			CombineOp::Union => rest.iter().fold(d0, |acc, c| acc.min(c.distance(p))),
			CombineOp::Intersection => rest.iter().fold(d0, |acc, c| acc.max(c.distance(p))),
			CombineOp::Subtraction => rest.iter().fold(d0, |acc, c| acc.max(-c.distance(p))),
			CombineOp::SmoothUnion { k } => {
				rest.iter().fold(d0, |acc, c| smooth_min(acc, c.distance(p), *k))
			}
			CombineOp::SmoothIntersection { k } => {
				rest.iter().fold(d0, |acc, c| smooth_max(acc, c.distance(p), *k))
			}
			CombineOp::SmoothSubtraction { k } => {
				rest.iter().fold(d0, |acc, c| smooth_max(acc, -c.distance(p), *k))
			}
		}
	}
}
