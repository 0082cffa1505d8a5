// File:    lib.rs
//
// Description: The main library crate for rotkey-core, providing the rotating-key cipher and its bounded text buffer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.

//! # Rotkey Core Library
//!
//! This library implements a small self-modifying stream cipher: a single-byte
//! key is scrambled before every character, and the scrambled key drives a
//! bit-rotation of that character. The scrambled key then becomes the key for
//! the next character, so identical plaintext bytes encrypt differently.
//!
//! No cryptographic security is claimed; the keyspace is a 5-bit rotation and
//! trivially breakable. The cipher exists as an exercise in stateful byte
//! transforms.

/// Capacity-bounded text buffer shared by the cipher and its callers.
pub mod buffer;
/// The key scrambler, per-byte transforms and the buffer-level driver.
pub mod crypto;
/// Error types surfaced at the library boundary.
pub mod error;
