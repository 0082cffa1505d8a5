use crate::error::CipherError;

/// Maximum number of characters a [`TextBuffer`] can hold.
pub const MAX_CHARS: usize = 6;

/// A fixed-capacity ordered sequence of bytes with an explicit length.
///
/// Replaces the raw fixed-size character arrays of the reference design with
/// a container that enforces `len <= MAX_CHARS` at the API boundary. Bytes
/// beyond `len` are never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBuffer {
    bytes: [u8; MAX_CHARS],
    len: usize,
}

impl TextBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_CHARS],
            len: 0,
        }
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidLength`] if `bytes` is longer than
    /// [`MAX_CHARS`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        if bytes.len() > MAX_CHARS {
            return Err(CipherError::InvalidLength {
                length: bytes.len(),
                capacity: MAX_CHARS,
            });
        }
        let mut buffer = Self::new();
        for &byte in bytes {
            buffer.bytes[buffer.len] = byte;
            buffer.len += 1;
        }
        Ok(buffer)
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidLength`] if the buffer is already full.
    pub fn push(&mut self, byte: u8) -> Result<(), CipherError> {
        if self.len == MAX_CHARS {
            return Err(CipherError::InvalidLength {
                length: self.len + 1,
                capacity: MAX_CHARS,
            });
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// The number of valid bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == MAX_CHARS
    }

    /// The valid bytes, in order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.bytes.split_at(self.len).0
    }

    /// Returns a new buffer of the same length with `f` applied to each
    /// valid byte, in order.
    #[must_use]
    pub fn map<F: FnMut(u8) -> u8>(&self, mut f: F) -> Self {
        let mut out = Self::new();
        for &byte in self.as_bytes() {
            out.bytes[out.len] = f(byte);
            out.len += 1;
        }
        out
    }
}
