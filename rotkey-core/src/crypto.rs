// File:    crypto.rs
//
// Description: Handles the core cryptographic operations: key scrambling, per-byte rotation transforms and the buffer-level driver.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.

//! This module contains the core cipher operations.
//!
//! The cipher is self-modifying: before every character the key is scrambled
//! and the scrambled value both drives that character's rotation and becomes
//! the key for the next character. The key stream therefore depends only on
//! the initial key and the length, never on the plaintext.

use crate::buffer::TextBuffer;
use log::trace;

/// Which way the buffer-level driver transforms its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// Derives the next key from the current one.
///
/// Left-rotates the key by 5 bits (the reference performs five single-bit
/// rotations) and ORs the result with `0x04`, so a scrambled key is never
/// zero. `scramble_key(0x01) == 0x24`.
#[must_use]
pub const fn scramble_key(key: u8) -> u8 {
    key.rotate_left(5) | 0x04
}

/// Encrypts one byte by left-rotating it `key` bit positions.
///
/// Rotation of an 8-bit value is periodic in 8, so only `key mod 8` matters.
/// `key` must be the post-scramble value; see [`transform`].
#[must_use]
pub const fn encrypt_byte(plain: u8, key: u8) -> u8 {
    plain.rotate_left(key as u32)
}

/// Decrypts one byte by right-rotating it `key` bit positions.
///
/// Exact inverse of [`encrypt_byte`] under the same key.
#[must_use]
pub const fn decrypt_byte(cipher: u8, key: u8) -> u8 {
    cipher.rotate_right(key as u32)
}

/// The sequence of scrambled keys produced from `initial_key` over `length`
/// characters.
///
/// Position `i` holds the key the driver applies to character `i`.
#[must_use]
pub fn keystream(initial_key: u8, length: usize) -> Vec<u8> {
    let mut key = initial_key;
    (0..length)
        .map(|_| {
            key = scramble_key(key);
            key
        })
        .collect()
}

/// Runs the cipher over a whole buffer in the given direction.
///
/// For each valid byte the key is scrambled first, the scrambled key drives
/// the per-byte rotation, and the scrambled key carries into the next
/// iteration. The input is left untouched; a fresh buffer of the same length
/// is returned. Key state never persists across calls.
#[must_use]
pub fn transform(input: &TextBuffer, initial_key: u8, direction: Direction) -> TextBuffer {
    trace!(
        "{direction:?}: {} bytes, initial key {initial_key:#04x}",
        input.len()
    );
    let mut key = initial_key;
    input.map(|byte| {
        key = scramble_key(key);
        match direction {
            Direction::Encrypt => encrypt_byte(byte, key),
            Direction::Decrypt => decrypt_byte(byte, key),
        }
    })
}

/// Encrypts `input` with `initial_key`.
#[must_use]
pub fn encrypt(input: &TextBuffer, initial_key: u8) -> TextBuffer {
    transform(input, initial_key, Direction::Encrypt)
}

/// Decrypts `input` with `initial_key`.
///
/// Round-trips with [`encrypt`] for any key: the same initial key replays
/// the same key stream, and the right-rotation undoes the left-rotation.
#[must_use]
pub fn decrypt(input: &TextBuffer, initial_key: u8) -> TextBuffer {
    transform(input, initial_key, Direction::Decrypt)
}
