//! Ring geometry for NxN turns.
//!
//! A ring is the ordered, cyclic list of sticker coordinates that travel
//! together under one clockwise quarter turn. Edge rings walk one strip on
//! each of the four faces around the turned face; face rings walk the
//! concentric squares of the turned face's own surface. The strip order and
//! traversal directions encode the cube's 3-D adjacency, so that a quarter
//! turn is exactly a cyclic shift of the ring by a quarter of its length.

use crate::cube::turn::SliceKind;
use crate::cube::{Coord, Face};

/// The ring of side stickers moved by turning `layer` of `face` clockwise.
/// `layer` counts from the face surface (0) inward. Consecutive entries are
/// adjacent along the turn cycle; the ring always has length 4N.
/// Layers beyond the cube are not a ring at all, the result is empty.
pub fn edge_ring(face: Face, n: usize, layer: usize) -> Vec<Coord> {
	use Face::*;

	if layer >= n {
		return vec![];
	}

	let m = n - 1;
	let k = layer;
	let mut ring = Vec::with_capacity(4 * n);

	match face {
		Up => {
			for c in 0..n {
				ring.push(Coord::new(Front, k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Left, k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Back, k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Right, k, c));
			}
		}
		Down => {
			for c in 0..n {
				ring.push(Coord::new(Front, m - k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Right, m - k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Back, m - k, c));
			}
			for c in 0..n {
				ring.push(Coord::new(Left, m - k, c));
			}
		}
		Right => {
			for r in 0..n {
				ring.push(Coord::new(Up, r, m - k));
			}
			for r in (0..n).rev() {
				ring.push(Coord::new(Back, r, k));
			}
			for r in 0..n {
				ring.push(Coord::new(Down, r, m - k));
			}
			for r in 0..n {
				ring.push(Coord::new(Front, r, m - k));
			}
		}
		Left => {
			for r in 0..n {
				ring.push(Coord::new(Up, r, k));
			}
			for r in 0..n {
				ring.push(Coord::new(Front, r, k));
			}
			for r in 0..n {
				ring.push(Coord::new(Down, r, k));
			}
			for r in (0..n).rev() {
				ring.push(Coord::new(Back, r, m - k));
			}
		}
		Front => {
			for c in 0..n {
				ring.push(Coord::new(Up, m - k, c));
			}
			for r in 0..n {
				ring.push(Coord::new(Right, r, k));
			}
			for c in (0..n).rev() {
				ring.push(Coord::new(Down, k, c));
			}
			for r in (0..n).rev() {
				ring.push(Coord::new(Left, r, m - k));
			}
		}
		Back => {
			for c in (0..n).rev() {
				ring.push(Coord::new(Up, k, c));
			}
			for r in 0..n {
				ring.push(Coord::new(Left, r, k));
			}
			for c in 0..n {
				ring.push(Coord::new(Down, m - k, c));
			}
			for r in (0..n).rev() {
				ring.push(Coord::new(Right, r, m - k));
			}
		}
	}

	ring
}

/// The ring of the middle slice. Only odd cubes have one;
/// for even N there is no middle layer and the ring is empty.
pub fn slice_ring(slice: SliceKind, n: usize) -> Vec<Coord> {
	if n % 2 == 0 {
		return vec![];
	}

	edge_ring(slice.parent_face(), n, n / 2)
}

/// The clockwise perimeter of the square at `depth` on a face's own surface.
/// Starts at the top-left corner of the square.
pub fn face_ring(face: Face, n: usize, depth: usize) -> Vec<Coord> {
	let lo = depth;
	let hi = n - 1 - depth;
	let mut ring = Vec::with_capacity(4 * (hi - lo));

	for c in lo..=hi {
		ring.push(Coord::new(face, lo, c));
	}
	for r in lo + 1..=hi {
		ring.push(Coord::new(face, r, hi));
	}
	for c in (lo..hi).rev() {
		ring.push(Coord::new(face, hi, c));
	}
	for r in (lo + 1..hi).rev() {
		ring.push(Coord::new(face, r, lo));
	}

	ring
}

/// All concentric rings of a face's surface, outermost first.
/// Together they cover the whole face, except the fixed center of odd N.
pub fn face_rings(face: Face, n: usize) -> Vec<Vec<Coord>> {
	(0..n / 2).map(|depth| face_ring(face, n, depth)).collect()
}
