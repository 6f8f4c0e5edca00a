//! Sticker permutations and their cache.
//!
//! Every turn is a permutation of the flat sticker array. Face and slice
//! turns are built by tracing the rings from [`crate::cube::ring`] and
//! cyclically shifting them by a quarter of their length per quarter turn.
//! Whole-cube rotations copy faces wholesale instead. Built permutations
//! are memoized for the process lifetime: they are pure functions of their
//! key and the key space is small.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rayon::prelude::*;
use strum::IntoEnumIterator;

use crate::cube::ring::{edge_ring, face_rings, slice_ring};
use crate::cube::turn::{RotationKind, SliceKind};
use crate::cube::{facelet_index, Coord, Face, NUM_FACES};

/// A permutation of the 6N² sticker indices, destination-indexed:
/// the sticker at index i moves to index perm[i]. Always a bijection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Permutation(Vec<u32>);

impl Permutation {
	pub fn identity(len: usize) -> Self {
		Self((0..len as u32).collect())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Destination index of the sticker at `i`.
	pub fn destination(&self, i: usize) -> usize {
		self.0[i] as usize
	}

	pub fn is_identity(&self) -> bool {
		self.0.iter().enumerate().all(|(i, &dst)| i as u32 == dst)
	}

	/// Whether every index appears exactly once as a destination.
	pub fn is_bijection(&self) -> bool {
		let mut seen = vec![false; self.0.len()];

		for &dst in &self.0 {
			let dst = dst as usize;
			if dst >= seen.len() || seen[dst] {
				return false;
			}
			seen[dst] = true;
		}

		true
	}

	/// The permutation performing `self`, then `after`.
	pub fn then(&self, after: &Permutation) -> Permutation {
		Permutation(self.0.iter().map(|&dst| after.0[dst as usize]).collect())
	}

	/// Move every element of `data` to its destination, in place.
	pub fn apply_to<T: Copy>(&self, data: &mut [T]) {
		debug_assert_eq!(data.len(), self.0.len());

		let old = data.to_vec();
		for (i, &dst) in self.0.iter().enumerate() {
			data[dst as usize] = old[i];
		}
	}

	/// Write the cyclic shift `ring[i] -> ring[i + quarters * len/4]`
	/// into the permutation. Ring members must not have been written yet.
	fn trace_ring(&mut self, ring: &[Coord], quarters: usize, n: usize) {
		if ring.is_empty() {
			return;
		}

		let shift = quarters * (ring.len() / 4);
		for (i, coord) in ring.iter().enumerate() {
			let dst = ring[(i + shift) % ring.len()];
			self.0[coord.index(n)] = dst.index(n) as u32;
		}
	}
}

/// The target of one cached permutation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
	Face(Face),
	Slice(SliceKind),
	Rotation(RotationKind),
}

/// A permutation is a pure function of this tuple, which makes memoizing
/// by it sound. `layer` is meaningful for face turns only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PermKey {
	pub size: usize,
	pub kind: MoveKind,
	pub layer: usize,
	pub quarters: usize,
}

/// Build the permutation for a key from scratch.
///
/// Face turns trace the edge ring of their layer; the outer layer also
/// carries the face's own surface along via its concentric rings. Slice
/// turns trace the middle ring, which is empty on even cubes, so the
/// result degenerates to the identity there.
pub fn build_permutation(key: PermKey) -> Permutation {
	let n = key.size;

	match key.kind {
		MoveKind::Face(face) => {
			let mut perm = Permutation::identity(NUM_FACES * n * n);
			perm.trace_ring(&edge_ring(face, n, key.layer), key.quarters, n);
			if key.layer == 0 {
				for ring in face_rings(face, n) {
					perm.trace_ring(&ring, key.quarters, n);
				}
			}
			perm
		}
		MoveKind::Slice(slice) => {
			let mut perm = Permutation::identity(NUM_FACES * n * n);
			perm.trace_ring(&slice_ring(slice, n), key.quarters, n);
			perm
		}
		MoveKind::Rotation(rotation) => build_rotation(n, rotation, key.quarters),
	}
}

/// How a face's grid is reindexed while it is copied onto its destination
/// (or spun in place) by a whole-cube rotation.
#[derive(Clone, Copy)]
enum GridSpin {
	Keep,
	Clockwise,
	Half,
	CounterClockwise,
}

impl GridSpin {
	fn apply(self, n: usize, row: usize, col: usize) -> (usize, usize) {
		let m = n - 1;
		match self {
			GridSpin::Keep => (row, col),
			GridSpin::Clockwise => (col, m - row),
			GridSpin::Half => (m - row, m - col),
			GridSpin::CounterClockwise => (m - col, row),
		}
	}
}

/// (source, destination, reindexing) for every face under a quarter rotation.
fn rotation_face_maps(rotation: RotationKind) -> [(Face, Face, GridSpin); NUM_FACES] {
	use Face::*;
	use GridSpin::*;

	// Four faces cycle around the axis, the two axis faces spin in place.
	match rotation {
		RotationKind::X => [
			(Front, Up, Keep),
			(Up, Back, Half),
			(Back, Down, Half),
			(Down, Front, Keep),
			(Right, Right, Clockwise),
			(Left, Left, CounterClockwise),
		],
		RotationKind::Y => [
			(Front, Left, Keep),
			(Left, Back, Keep),
			(Back, Right, Keep),
			(Right, Front, Keep),
			(Up, Up, Clockwise),
			(Down, Down, CounterClockwise),
		],
		RotationKind::Z => [
			(Up, Right, Clockwise),
			(Right, Down, Clockwise),
			(Down, Left, Clockwise),
			(Left, Up, Clockwise),
			(Front, Front, Clockwise),
			(Back, Back, CounterClockwise),
		],
	}
}

/// Whole-cube rotations copy faces wholesale instead of tracing rings.
pub fn build_rotation(n: usize, rotation: RotationKind, quarters: usize) -> Permutation {
	let len = NUM_FACES * n * n;

	let quarter = {
		let mut perm = Permutation::identity(len);
		for (src, dst, spin) in rotation_face_maps(rotation) {
			for row in 0..n {
				for col in 0..n {
					let (r, c) = spin.apply(n, row, col);
					perm.0[facelet_index(n, src, row, col)] = facelet_index(n, dst, r, c) as u32;
				}
			}
		}
		perm
	};

	let mut perm = Permutation::identity(len);
	for _ in 0..quarters {
		perm = perm.then(&quarter);
	}
	perm
}

/// Every key a size-N cube can request through its turn dispatcher.
fn all_keys(n: usize) -> Vec<PermKey> {
	let mut keys = vec![];

	for quarters in 1..=3 {
		for face in Face::iter() {
			for layer in 0..n {
				keys.push(PermKey { size: n, kind: MoveKind::Face(face), layer, quarters });
			}
		}
		if n % 2 == 1 {
			for slice in SliceKind::iter() {
				keys.push(PermKey { size: n, kind: MoveKind::Slice(slice), layer: n / 2, quarters });
			}
		}
		for rotation in RotationKind::iter() {
			keys.push(PermKey { size: n, kind: MoveKind::Rotation(rotation), layer: 0, quarters });
		}
	}

	keys
}

/// Memo table for built permutations.
///
/// Cached keys are served under the read lock, so concurrent lookups never
/// block each other. A miss builds without holding any lock and inserts
/// under the write lock; two callers racing on the same key build the same
/// permutation twice and the first insert wins, which costs work but never
/// correctness.
#[derive(Default, Debug)]
pub struct PermutationCache {
	table: RwLock<HashMap<PermKey, Arc<Permutation>>>,
}

impl PermutationCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// The permutation for `key`, built on the first request.
	pub fn get(&self, key: PermKey) -> Arc<Permutation> {
		if let Some(perm) = self.table.read().unwrap().get(&key) {
			return perm.clone();
		}

		let perm = Arc::new(build_permutation(key));
		let mut table = self.table.write().unwrap();
		table.entry(key).or_insert(perm).clone()
	}

	/// Number of cached permutations.
	pub fn len(&self) -> usize {
		self.table.read().unwrap().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Build every permutation a cube of this size can ask for, in parallel,
	/// so that later turns only ever take the read lock.
	pub fn precompute(&self, n: usize) {
		let built: Vec<(PermKey, Permutation)> = all_keys(n)
			.into_par_iter()
			.map(|key| (key, build_permutation(key)))
			.collect();

		let mut table = self.table.write().unwrap();
		for (key, perm) in built {
			table.entry(key).or_insert_with(|| Arc::new(perm));
		}
	}
}
