use anyhow::Result;
use rotkey_core::buffer::TextBuffer;
use std::io::Read;

/// Entering this character ends the string early.
const STRING_TERMINATOR: u8 = b'$';

/// Reads the string to encrypt from `reader`, one byte at a time.
///
/// Reading stops at the terminator character, at a line break, at end of
/// input, or once the buffer is full, whichever comes first. The terminator
/// itself is never stored.
pub(crate) fn read_original<R: Read>(reader: &mut R) -> Result<TextBuffer> {
    let mut buffer = TextBuffer::new();
    let mut byte = [0u8; 1];
    while !buffer.is_full() {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        match byte[0] {
            STRING_TERMINATOR | b'\n' | b'\r' => break,
            other => buffer.push(other)?,
        }
    }
    Ok(buffer)
}
