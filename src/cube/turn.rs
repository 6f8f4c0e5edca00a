use std::{fmt, str::FromStr};

use strum::EnumCount;

use crate::cube::Face;

/// The middle slices of an odd-sized cube.
/// On an even cube there is no middle layer, so slice turns do nothing there.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum SliceKind {
	/// Between Left and Right, turns in the Left direction
	Middle,
	/// Between Up and Down, turns in the Down direction
	Equator,
	/// Between Front and Back, turns in the Front direction
	Standing,
}

impl SliceKind {
	/// The face whose turn direction (and middle layer) this slice shares.
	pub const fn parent_face(self) -> Face {
		match self {
			SliceKind::Middle => Face::Left,
			SliceKind::Equator => Face::Down,
			SliceKind::Standing => Face::Front,
		}
	}

	pub const fn letter(self) -> char {
		match self {
			SliceKind::Middle => 'M',
			SliceKind::Equator => 'E',
			SliceKind::Standing => 'S',
		}
	}
}

/// The whole-cube rotations. Lowercase in notation.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum RotationKind {
	/// About the Right axis, in the Right turn direction
	X,
	/// About the Up axis, in the Up turn direction
	Y,
	/// About the Front axis, in the Front turn direction
	Z,
}

impl RotationKind {
	pub const fn letter(self) -> char {
		match self {
			RotationKind::X => 'x',
			RotationKind::Y => 'y',
			RotationKind::Z => 'z',
		}
	}
}

/// You can either turn in (Counter-)Clockwise and Half turns
/// This is the enum for that
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	strum::FromRepr,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl TurnWise {
	/// The number of clockwise quarter turns this wise stands for.
	pub const fn quarter_turns(self) -> usize {
		match self {
			TurnWise::Clockwise => 1,
			TurnWise::Double => 2,
			TurnWise::CounterClockwise => 3,
		}
	}

	/// The wise for a quarter-turn count, reduced mod 4.
	/// A count of 0 has no turn left, so it yields None.
	pub const fn from_quarter_turns(quarters: usize) -> Option<Self> {
		match quarters % 4 {
			1 => Some(TurnWise::Clockwise),
			2 => Some(TurnWise::Double),
			3 => Some(TurnWise::CounterClockwise),
			_ => None,
		}
	}

	pub const fn inverted(self) -> Self {
		match self {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::Double => TurnWise::Double,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		}
	}
}

impl fmt::Display for TurnWise {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// What a turn moves: a face layer, a middle slice or the whole cube.
///
/// For face turns, `layer` counts 0-based from the turned face inward.
/// `wide` drags every layer from the surface down to `layer` along,
/// so plain `Rw` is `layer: 1, wide: true`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub enum TurnKind {
	Face { face: Face, layer: u8, wide: bool },
	Slice(SliceKind),
	Rotation(RotationKind),
}

/// An entire turn: what is turned, and which way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct Turn {
	pub kind: TurnKind,
	pub wise: TurnWise,
}

impl Turn {
	pub const fn new(kind: TurnKind, wise: TurnWise) -> Self {
		Self { kind, wise }
	}

	/// Turn itself to the turn which negates itself.
	pub fn invert(&mut self) {
		self.wise = self.wise.inverted();
	}

	pub fn inverted(mut self) -> Self {
		self.invert();
		self
	}
}

/// The ways a turn string can be rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("empty turn string")]
	Empty,
	#[error("unrecognized move character '{0}'")]
	UnknownMove(char),
	#[error("expected a face letter after the layer number")]
	MissingFace,
	#[error("unexpected trailing characters \"{0}\"")]
	Trailing(String),
}

impl FromStr for Turn {
	type Err = ParseError;

	/// Parses `[layer digit 2-9] (face letter | slice letter | rotation letter)
	/// [w] ['|2]`. Rotation letters are lowercase, everything else uppercase.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.trim().chars().peekable();

		let layer = match chars.peek() {
			Some(&c) if ('2'..='9').contains(&c) => {
				chars.next();
				Some(c as u8 - b'1')
			}
			_ => None,
		};

		let c = match chars.next() {
			Some(c) => c,
			None if layer.is_some() => return Err(ParseError::MissingFace),
			None => return Err(ParseError::Empty),
		};

		let face = match c {
			'U' => Some(Face::Up),
			'D' => Some(Face::Down),
			'B' => Some(Face::Back),
			'F' => Some(Face::Front),
			'L' => Some(Face::Left),
			'R' => Some(Face::Right),
			_ => None,
		};

		let kind = match face {
			Some(face) => {
				let wide = chars.peek() == Some(&'w');
				if wide {
					chars.next();
				}
				match layer {
					Some(layer) => TurnKind::Face { face, layer, wide },
					None if wide => TurnKind::Face { face, layer: 1, wide },
					None => TurnKind::Face { face, layer: 0, wide },
				}
			}
			None => {
				// Slice and rotation letters take no layer prefix
				if layer.is_some() {
					return Err(ParseError::MissingFace);
				}
				match c {
					'M' => TurnKind::Slice(SliceKind::Middle),
					'E' => TurnKind::Slice(SliceKind::Equator),
					'S' => TurnKind::Slice(SliceKind::Standing),
					'x' => TurnKind::Rotation(RotationKind::X),
					'y' => TurnKind::Rotation(RotationKind::Y),
					'z' => TurnKind::Rotation(RotationKind::Z),
					c => return Err(ParseError::UnknownMove(c)),
				}
			}
		};

		let wise = match chars.peek() {
			Some(&'\'') => {
				chars.next();
				TurnWise::CounterClockwise
			}
			Some(&'2') => {
				chars.next();
				TurnWise::Double
			}
			_ => TurnWise::Clockwise,
		};

		let rest: String = chars.collect();
		if !rest.is_empty() {
			return Err(ParseError::Trailing(rest));
		}

		Ok(Turn { kind, wise })
	}
}

impl fmt::Display for TurnKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			TurnKind::Face { face, layer, wide } => {
				// A wide turn down to layer 1 is the default depth and
				// needs no number; layer 0 is a plain outer turn.
				if layer > 1 || (layer == 1 && !wide) {
					write!(f, "{}", layer + 1)?;
				}
				write!(f, "{}", face.letter())?;
				if wide {
					write!(f, "w")?;
				}
				Ok(())
			}
			TurnKind::Slice(slice) => write!(f, "{}", slice.letter()),
			TurnKind::Rotation(rotation) => write!(f, "{}", rotation.letter()),
		}
	}
}

impl fmt::Display for Turn {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.kind.fmt(f)?;
		self.wise.fmt(f)
	}
}

/// Parse a whitespace-separated sequence of turns.
/// Fails on the first invalid token; an empty string is an empty sequence.
pub fn parse_turns<T: AsRef<str>>(string: T) -> Result<Vec<Turn>, ParseError> {
	string.as_ref().split_whitespace().map(Turn::from_str).collect()
}

/// The sequence undoing the given one: reversed order, every turn inverted.
pub fn invert_turns(turns: &[Turn]) -> Vec<Turn> {
	turns.iter().rev().map(|turn| turn.inverted()).collect()
}

/// Merge runs of turns with the same target by summing their quarter turns
/// mod 4, dropping turns that cancel completely. Turns are never reordered;
/// when a run cancels, the neighbours it exposes are merged as well.
pub fn optimize_turns(turns: &[Turn]) -> Vec<Turn> {
	let mut out: Vec<Turn> = Vec::with_capacity(turns.len());

	for &turn in turns {
		match out.last() {
			Some(last) if last.kind == turn.kind => {
				let quarters = last.wise.quarter_turns() + turn.wise.quarter_turns();
				out.pop();
				if let Some(wise) = TurnWise::from_quarter_turns(quarters) {
					out.push(Turn::new(turn.kind, wise));
				}
			}
			_ => out.push(turn),
		}
	}

	out
}

/// Parse a scramble, optimize it and write it back out.
/// A fully cancelling scramble comes back as the empty string.
pub fn optimize_scramble<T: AsRef<str>>(string: T) -> Result<String, ParseError> {
	let turns = optimize_turns(&parse_turns(string)?);
	let strings: Vec<String> = turns.iter().map(Turn::to_string).collect();
	Ok(strings.join(" "))
}

/// Generate a random sequence of outer face turns.
/// Only outer turns are used, so the sequence is valid on every cube size.
pub fn random_sequence(length: usize) -> Vec<Turn> {
	use rand::Rng;

	let mut rng = rand::thread_rng();

	(0..length)
		.map(|_| {
			let face = Face::from_repr(rng.gen_range(0..Face::COUNT as u8)).unwrap();
			let wise = TurnWise::from_repr(rng.gen_range(0..TurnWise::COUNT as u8)).unwrap();
			Turn::new(TurnKind::Face { face, layer: 0, wide: false }, wise)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	/// Every constructible turn survives a stringify/parse round trip
	fn turn_string_roundtrip() {
		let mut turns = vec![];

		for face in Face::iter() {
			for layer in 0..8 {
				turns.push(TurnKind::Face { face, layer, wide: false });
				if layer > 0 {
					turns.push(TurnKind::Face { face, layer, wide: true });
				}
			}
		}
		for slice in SliceKind::iter() {
			turns.push(TurnKind::Slice(slice));
		}
		for rotation in RotationKind::iter() {
			turns.push(TurnKind::Rotation(rotation));
		}

		for kind in turns {
			for wise in TurnWise::iter() {
				let turn = Turn::new(kind, wise);
				let parsed: Turn = turn.to_string().parse().unwrap();
				assert_eq!(parsed, turn, "\"{}\" did not round-trip", turn);
			}
		}
	}

	#[test]
	/// Check a handful of spellings against their parsed form
	fn parse_examples() {
		let cases = [
			("R", TurnKind::Face { face: Face::Right, layer: 0, wide: false }, TurnWise::Clockwise),
			("F'", TurnKind::Face { face: Face::Front, layer: 0, wide: false }, TurnWise::CounterClockwise),
			("U2", TurnKind::Face { face: Face::Up, layer: 0, wide: false }, TurnWise::Double),
			("Rw", TurnKind::Face { face: Face::Right, layer: 1, wide: true }, TurnWise::Clockwise),
			("3Lw'", TurnKind::Face { face: Face::Left, layer: 2, wide: true }, TurnWise::CounterClockwise),
			("4D2", TurnKind::Face { face: Face::Down, layer: 3, wide: false }, TurnWise::Double),
			("M'", TurnKind::Slice(SliceKind::Middle), TurnWise::CounterClockwise),
			("E", TurnKind::Slice(SliceKind::Equator), TurnWise::Clockwise),
			("S2", TurnKind::Slice(SliceKind::Standing), TurnWise::Double),
			("x", TurnKind::Rotation(RotationKind::X), TurnWise::Clockwise),
			("y'", TurnKind::Rotation(RotationKind::Y), TurnWise::CounterClockwise),
			("z2", TurnKind::Rotation(RotationKind::Z), TurnWise::Double),
		];

		for (string, kind, wise) in cases {
			assert_eq!(string.parse::<Turn>(), Ok(Turn::new(kind, wise)));
		}
	}

	#[test]
	/// The redundant depth-2 wide spelling normalizes to the plain one
	fn parse_normalizes_wide_depth() {
		let turn: Turn = "2Rw".parse().unwrap();
		assert_eq!(turn.to_string(), "Rw");
	}

	#[test]
	/// Check that each kind of invalid input gets its error
	fn parse_errors() {
		assert_eq!("".parse::<Turn>(), Err(ParseError::Empty));
		assert_eq!("  ".parse::<Turn>(), Err(ParseError::Empty));
		assert_eq!("Q".parse::<Turn>(), Err(ParseError::UnknownMove('Q')));
		assert_eq!("r".parse::<Turn>(), Err(ParseError::UnknownMove('r')));
		// Rotation letters are lowercase only
		assert_eq!("X".parse::<Turn>(), Err(ParseError::UnknownMove('X')));
		assert_eq!("1R".parse::<Turn>(), Err(ParseError::UnknownMove('1')));
		assert_eq!("3".parse::<Turn>(), Err(ParseError::MissingFace));
		assert_eq!("3M".parse::<Turn>(), Err(ParseError::MissingFace));
		assert_eq!("2x".parse::<Turn>(), Err(ParseError::MissingFace));
		assert_eq!("R2'".parse::<Turn>(), Err(ParseError::Trailing("'".into())));
		assert_eq!("Rww".parse::<Turn>(), Err(ParseError::Trailing("w".into())));
		assert_eq!("Mw".parse::<Turn>(), Err(ParseError::Trailing("w".into())));
		assert_eq!("xw'".parse::<Turn>(), Err(ParseError::Trailing("w'".into())));
	}

	#[test]
	/// Sequence parsing fails fast and accepts the empty sequence
	fn parse_sequences() {
		assert_eq!(parse_turns("").unwrap(), vec![]);
		assert_eq!(parse_turns("   ").unwrap(), vec![]);
		assert_eq!(parse_turns("R U R' U'").unwrap().len(), 4);
		assert_eq!(parse_turns("R Q U"), Err(ParseError::UnknownMove('Q')));
	}

	#[test]
	/// Check the optimizer merge table
	fn optimize_merges_runs() {
		let cases = [
			("R R", "R2"),
			("R R'", ""),
			("R' R", ""),
			("R R R", "R'"),
			("R2 R2", ""),
			("R2 R", "R'"),
			("R U R' U'", "R U R' U'"),
			("M M M", "M'"),
			("x x2", "x'"),
			("Rw Rw", "Rw2"),
			// A wide turn never merges with the plain turn of the same face
			("R Rw", "R Rw"),
			("2R 2R", "2R2"),
		];

		for (input, expected) in cases {
			assert_eq!(optimize_scramble(input).unwrap(), expected, "input \"{}\"", input);
		}
	}

	#[test]
	/// Cancelling a run exposes its neighbours for further merging
	fn optimize_cascades() {
		assert_eq!(optimize_scramble("R L L' R").unwrap(), "R2");
		assert_eq!(optimize_scramble("R U U' R' F").unwrap(), "F");
		assert_eq!(optimize_scramble("R U U2 U R'").unwrap(), "");
	}

	#[test]
	/// Inverting a sequence reverses it and flips every wise
	fn invert_sequences() {
		let turns = parse_turns("R U2 F'").unwrap();
		let inverted = invert_turns(&turns);

		let strings: Vec<String> = inverted.iter().map(Turn::to_string).collect();
		assert_eq!(strings.join(" "), "F U2 R'");
	}

	#[test]
	/// Random sequences have the requested length and only outer turns
	fn random_sequences() {
		let turns = random_sequence(40);
		assert_eq!(turns.len(), 40);

		for turn in turns {
			assert!(matches!(turn.kind, TurnKind::Face { layer: 0, wide: false, .. }));
		}
	}
}
