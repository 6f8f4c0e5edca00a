pub mod facelet;
pub mod perm;
pub mod ring;
pub mod turn;

/// The number of sides of a cube
pub const NUM_FACES: usize = 6;

/// The smallest cube dimension that still has something to turn
pub const MIN_CUBE_DIM: usize = 2;

/// One side of the cube.
/// The discriminant doubles as the block index into the flat sticker array.
#[derive(
	Eq,
	PartialEq,
	Copy,
	Clone,
	Hash,
	Debug,
	strum::EnumCount,
	strum::EnumIter,
	strum::FromRepr,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum Face {
	Up,
	Down,
	Back,
	Front,
	Left,
	Right,
}

impl Face {
	/// The letter used for this face in turn notation.
	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Down => 'D',
			Face::Back => 'B',
			Face::Front => 'F',
			Face::Left => 'L',
			Face::Right => 'R',
		}
	}

	/// The color this face carries on a freshly built cube.
	pub const fn solved_color(self) -> Color {
		match self {
			Face::Up => Color::White,
			Face::Down => Color::Yellow,
			Face::Back => Color::Green,
			Face::Front => Color::Blue,
			Face::Left => Color::Red,
			Face::Right => Color::Orange,
		}
	}
}

/// A sticker color.
/// `Any` is a wildcard reserved for pattern matching on partial cube states;
/// the engine itself never produces it.
#[derive(
	Eq,
	PartialEq,
	Copy,
	Clone,
	Hash,
	Debug,
	strum::EnumCount,
	strum::EnumIter,
	strum::FromRepr,
	strum::Display,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum Color {
	White,
	Yellow,
	Green,
	Blue,
	Red,
	Orange,
	Any,
}

/// Returns the ANSI-colorcode for the given sticker color.
pub fn get_ansii_color(color: Color) -> &'static str {
	match color {
		Color::White => "\x1b[00m",
		Color::Yellow => "\x1b[93m",
		Color::Green => "\x1b[32m",
		Color::Blue => "\x1b[34m",
		Color::Red => "\x1b[31m",
		Color::Orange => "\x1b[33m",
		Color::Any => "\x1b[35m",
	}
}

/// Index of the sticker (face, row, col) in the flat sticker array
/// of an NxN cube. Face-major, row-major.
pub const fn facelet_index(n: usize, face: Face, row: usize, col: usize) -> usize {
	face as usize * n * n + row * n + col
}

/// One sticker position on an NxN cube.
/// Row 0 is the top row of a face as drawn on the standard unfolded net,
/// col 0 its left column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
	pub face: Face,
	pub row: usize,
	pub col: usize,
}

impl Coord {
	pub const fn new(face: Face, row: usize, col: usize) -> Self {
		Self { face, row, col }
	}

	/// Flat sticker index of this coordinate on an NxN cube.
	pub const fn index(self, n: usize) -> usize {
		facelet_index(n, self.face, self.row, self.col)
	}
}

#[cfg(test)]
mod tests {
	use super::{facelet::*, turn::*};
	use std::{error::Error, str::FromStr};

	#[test]
	/// Check that the slice turns match their face/rotation buildups
	fn check_slice_turns() -> Result<(), Box<dyn Error>> {
		let buildup = vec![
			("M", "R L' x'"),
			("E", "U D' y'"),
			("S", "B z F'"),
			("M'", "x L R'"),
			("E'", "y D U'"),
			("S'", "F z' B'"),
			("M2", "R2 L2 x2"),
		];

		for n in [3, 5, 7] {
			for (slice, combo) in buildup.iter() {
				let mut cube = Cube::new(n);
				let mut cube2 = Cube::new(n);

				cube.apply_turn(Turn::from_str(slice)?);
				cube2.apply_turns(&parse_turns(combo)?);

				if cube != cube2 {
					panic!("Turn {} on a {}-cube is not equal to {}", slice, n, combo);
				}
			}
		}

		Ok(())
	}

	#[test]
	/// A numbered turn of the middle layer is the inverted slice turn
	fn check_numbered_turns() -> Result<(), Box<dyn Error>> {
		let buildup = vec![("2R", "M'"), ("2U", "E'"), ("2F", "S"), ("2R2", "M2")];

		for (numbered, slice) in buildup.iter() {
			let mut cube = Cube::new(3);
			let mut cube2 = Cube::new(3);

			cube.apply_turn(Turn::from_str(numbered)?);
			cube2.apply_turn(Turn::from_str(slice)?);

			assert_eq!(cube, cube2, "{} is not equal to {}", numbered, slice);
		}

		Ok(())
	}

	#[test]
	/// A whole-cube rotation equals turning every layer about its axis
	fn check_rotation_buildup() -> Result<(), Box<dyn Error>> {
		let buildup = vec![("x", "R M' L'"), ("y", "U E' D'"), ("z", "F S B'")];

		for (rotation, combo) in buildup.iter() {
			let mut cube = Cube::new(3);
			let mut cube2 = Cube::new(3);

			cube.apply_turn(Turn::from_str(rotation)?);
			cube2.apply_turns(&parse_turns(combo)?);

			assert_eq!(cube, cube2, "{} is not equal to {}", rotation, combo);
		}

		Ok(())
	}

	#[test]
	/// A wide turn equals the outer turn followed by the numbered inner turns
	fn check_wide_turns() -> Result<(), Box<dyn Error>> {
		for n in [3, 4, 5] {
			let mut cube = Cube::new(n);
			let mut cube2 = Cube::new(n);

			cube.apply_turn(Turn::from_str("Rw")?);
			cube2.apply_turns(&parse_turns("R 2R")?);
			assert_eq!(cube, cube2);

			let mut cube = Cube::new(n);
			let mut cube2 = Cube::new(n);

			cube.apply_turn(Turn::from_str("3Fw'")?);
			cube2.apply_turns(&parse_turns("F' 2F' 3F'")?);
			assert_eq!(cube, cube2);
		}

		Ok(())
	}

	#[test]
	/// The sexy move has order six, independent of the cube size
	fn check_sexy_move() -> Result<(), Box<dyn Error>> {
		for n in 2..=5 {
			let mut cube = Cube::new(n);
			let turns = parse_turns("R U R' U'")?;

			for _ in 0..6 {
				cube.apply_turns(&turns);
			}

			assert!(cube.is_solved(), "(R U R' U')^6 broke a {}-cube", n);
		}

		Ok(())
	}

	#[test]
	/// This half-turn sequence returns to the solved cube
	fn check_half_turn_identity() -> Result<(), Box<dyn Error>> {
		let mut cube = Cube::new(3);

		cube.apply_turns(&parse_turns("U2 D2 B2 F2 L2 R2 B2 F2 L2 R2 U2 D2")?);

		assert!(cube.is_solved());
		Ok(())
	}
}
