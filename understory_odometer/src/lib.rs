// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_odometer --heading-base-level=0

//! Understory Odometer: digit diffing and scroll sequencing for animated number labels.
//!
//! This crate holds the renderer-agnostic core of an "odometer" label: a label
//! that shows a formatted number and, when the number changes, scrolls each
//! digit position through a short stack of glyphs before settling on the new
//! value. It does **not** format numbers, measure text, or drive animations;
//! host layers (such as `understory_odometer_label`) do that and consult this
//! crate for two decisions:
//!
//! - [`classify`]: given the previous and the new formatted strings, decide per
//!   character position whether it stays still ([`PositionClass::Unanimated`]),
//!   rolls to a new digit ([`PositionClass::Changed`]), or plays a cosmetic
//!   full-cycle spin while keeping its digit ([`PositionClass::DecorativeScroll`]).
//! - [`build_sequence`]: for a moving position, produce the [`ScrollSequence`]
//!   of glyphs to stack vertically and scroll through.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_odometer::{PositionClass, build_sequence, classify};
//!
//! let classes = classify("801,000", "800,000", false);
//! assert_eq!(
//!     classes.as_slice(),
//!     &[
//!         PositionClass::Unanimated,
//!         PositionClass::Unanimated,
//!         PositionClass::Changed,
//!         PositionClass::Unanimated,
//!         PositionClass::DecorativeScroll,
//!         PositionClass::DecorativeScroll,
//!         PositionClass::DecorativeScroll,
//!     ]
//! );
//!
//! // The changed thousands digit rolls up and rests on `1`.
//! let seq = build_sequence(PositionClass::Changed, '1').unwrap();
//! assert_eq!(seq.resting(), '1');
//! assert_eq!(seq.frames().len(), 11);
//! ```
//!
//! Positions are counted in `char`s, most significant first. Any character
//! that is not an ASCII digit (grouping and decimal separators, a minus sign,
//! literal text emitted by a formatter) is static; see [`is_static_glyph`].
//!
//! This crate is `no_std` and uses `alloc`. Classifications are stored inline
//! for typical label lengths and only spill to the heap for unusually long
//! strings.

#![no_std]

extern crate alloc;

mod classify;
mod sequence;

pub use classify::{Classification, PositionClass, classify, classify_chars, is_static_glyph};
pub use sequence::{SEQUENCE_LEN, ScrollSequence, build_sequence};
