//! A move-algebra engine for NxN Rubik's-style cubes.
//!
//! Turns are written in standard cubing notation and applied as cached
//! sticker permutations, for any cube dimension N >= 2.
//!
//! ```
//! use nxcube::prelude::*;
//!
//! let mut cube = Cube::new(4);
//!
//! let turns = parse_turns("Rw U2 3L' x").unwrap();
//! cube.apply_turns(&turns);
//! cube.apply_turns(&invert_turns(&turns));
//!
//! assert!(cube.is_solved());
//! ```
//!
//! M, E and S turn the middle slice of odd cubes and leave even cubes
//! untouched. x, y and z rotate the whole cube.

pub mod cube;

pub mod prelude {
	pub use crate::cube::{facelet::*, perm::*, ring::*, turn::*, *};
}
