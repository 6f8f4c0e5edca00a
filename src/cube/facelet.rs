use std::hash::{Hash, Hasher};
use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::cube::perm::{MoveKind, PermKey, Permutation, PermutationCache};
use crate::cube::turn::{Turn, TurnKind};
use crate::cube::{facelet_index, get_ansii_color, Color, Face, MIN_CUBE_DIM};

/// An NxN cube as a flat array of sticker colors, face-major and row-major.
/// A freshly built cube is solved.
///
/// Turns go through the cube's [`PermutationCache`]; clones share it. The
/// cube itself carries no synchronization, concurrent mutation needs
/// external coordination.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Cube {
	size: usize,
	data: Vec<Color>,
	#[serde(skip)]
	cache: Arc<PermutationCache>,
}

impl Default for Cube {
	/// Creates a *solved* 3x3 cube!
	fn default() -> Self {
		Self::new(3)
	}
}

impl PartialEq for Cube {
	fn eq(&self, other: &Self) -> bool {
		self.size == other.size && self.data == other.data
	}
}

impl Eq for Cube {}

impl Hash for Cube {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.size.hash(state);
		self.data.hash(state);
	}
}

impl Cube {
	/// A solved cube of the given dimension, with its own permutation cache.
	/// Dimensions below 2 are clamped to 2.
	pub fn new(size: usize) -> Self {
		Self::with_cache(size, Arc::new(PermutationCache::new()))
	}

	/// A solved cube that runs its turns through a shared permutation cache.
	pub fn with_cache(size: usize, cache: Arc<PermutationCache>) -> Self {
		let size = size.max(MIN_CUBE_DIM);
		let data = Face::iter()
			.flat_map(|face| std::iter::repeat(face.solved_color()).take(size * size))
			.collect();

		Self { size, data, cache }
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn cache(&self) -> &Arc<PermutationCache> {
		&self.cache
	}

	/// The sticker color at (face, row, col).
	pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
		self.data[facelet_index(self.size, face, row, col)]
	}

	/// Whether every face shows a single color.
	/// The faces need not show the color they were built with, so a rotated
	/// solved cube still counts as solved.
	pub fn is_solved(&self) -> bool {
		self.data
			.chunks_exact(self.size * self.size)
			.all(|grid| grid.iter().all(|&color| color == grid[0]))
	}

	/// Send every sticker to its destination under the permutation.
	pub fn apply_permutation(&mut self, perm: &Permutation) {
		perm.apply_to(&mut self.data);
	}

	fn apply_key(&mut self, kind: MoveKind, layer: usize, quarters: usize) {
		let key = PermKey { size: self.size, kind, layer, quarters };
		let perm = self.cache.get(key);
		self.apply_permutation(&perm);
	}

	/// Apply a single turn.
	///
	/// Slice turns on even cubes and layers beyond the last are no-ops,
	/// since the layer they name does not exist.
	pub fn apply_turn(&mut self, turn: Turn) {
		let quarters = turn.wise.quarter_turns();

		match turn.kind {
			TurnKind::Face { face, layer, wide } => {
				let size = self.size;
				let layer = layer as usize;
				let layers = if wide { 0..=layer } else { layer..=layer };
				// Layers move disjoint sticker sets, their order is irrelevant
				for layer in layers.filter(|&layer| layer < size) {
					self.apply_key(MoveKind::Face(face), layer, quarters);
				}
			}
			TurnKind::Slice(slice) => {
				if self.size % 2 == 1 {
					self.apply_key(MoveKind::Slice(slice), self.size / 2, quarters);
				}
			}
			TurnKind::Rotation(rotation) => {
				self.apply_key(MoveKind::Rotation(rotation), 0, quarters);
			}
		}
	}

	/// Apply the given sequence of turns.
	pub fn apply_turns(&mut self, turns: &[Turn]) {
		for &turn in turns {
			self.apply_turn(turn);
		}
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		let n = self.size;
		// Generate a space depending on the cube dimension
		let space: String = " ".repeat(2 * n + 1);

		for row in 0..n {
			print!("{}", space);
			for col in 0..n {
				print!("{}▀ ", get_ansii_color(self.get(Face::Up, row, col)));
			}
			println!();
		}

		const SIDES: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];
		for row in 0..n {
			for face in SIDES {
				for col in 0..n {
					print!("{}▄ ", get_ansii_color(self.get(face, row, col)));
				}
				print!(" ");
			}
			println!();
		}
		println!();

		for row in 0..n {
			print!("{}", space);
			for col in 0..n {
				print!("{}▀ ", get_ansii_color(self.get(Face::Down, row, col)));
			}
			println!();
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}
