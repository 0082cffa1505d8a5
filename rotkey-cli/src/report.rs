use chrono::Local;
use rotkey_core::buffer::{MAX_CHARS, TextBuffer};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const ENTRY_SEPARATOR: &str = "-------------------------------------------------------------";

/// One completed cipher session, ready to be formatted.
pub(crate) struct Session<'a> {
    /// The key character the session ran with.
    pub(crate) key: char,
    /// The text as entered.
    pub(crate) original: &'a TextBuffer,
    /// The text after encryption.
    pub(crate) encrypted: &'a TextBuffer,
    /// The ciphertext after decryption; should match the original.
    pub(crate) decrypted: &'a TextBuffer,
}

impl Session<'_> {
    /// Renders the report stamped with the current local date and time.
    pub(crate) fn render(&self) -> String {
        let now = Local::now();
        self.render_at(
            &now.format("%d/%m/%Y").to_string(),
            &now.format("%H:%M:%S").to_string(),
        )
    }

    fn render_at(&self, date: &str, time: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("Date: {date} Time: {time}\n"));
        out.push_str("Cipher:         rotating-key\n");
        out.push_str(&format!(
            "Encryption Key: '{}' ({:#04x})\n\n",
            self.key,
            u32::from(self.key)
        ));
        out.push_str(&buffer_line("Original string ", self.original));
        out.push('\n');
        out.push_str(&buffer_line("Encrypted string", self.encrypted));
        out.push('\n');
        out.push_str(&buffer_line("Decrypted string", self.decrypted));
        out.push('\n');
        out
    }
}

/// Writes `entry` to the console and appends it, followed by a separator,
/// to the log file at `log_path`. The log file is created if missing and
/// only ever appended to.
pub(crate) fn emit<W: Write>(console: &mut W, log_path: &Path, entry: &str) -> io::Result<()> {
    console.write_all(entry.as_bytes())?;

    let mut log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    log_file.write_all(entry.as_bytes())?;
    writeln!(log_file, "{ENTRY_SEPARATOR}")?;
    writeln!(log_file)?;
    Ok(())
}

fn buffer_line(label: &str, buffer: &TextBuffer) -> String {
    format!(
        "{label} = {text:>width$} Hex = {hex}\n",
        text = printable(buffer),
        width = MAX_CHARS,
        hex = hex_dump(buffer),
    )
}

/// Renders the valid bytes for display, substituting `.` for anything that
/// is not printable ASCII, hexdump style.
fn printable(buffer: &TextBuffer) -> String {
    buffer
        .as_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                char::from(b)
            } else {
                '.'
            }
        })
        .collect()
}

fn hex_dump(buffer: &TextBuffer) -> String {
    buffer
        .as_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
