//! Bounded line reading for ICGEM files
//!
//! Lines are read with a hard length limit: a line that does not fit is
//! reported as [`Error::LineTooLong`] instead of being split or truncated.
//! Bytes that are not UTF-8 (Latin-1 names in header comments, say) are
//! replaced rather than rejected; they only matter if they land in a
//! numeric field, where conversion then fails.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::config::ReaderConfig;
use crate::{Error, Result};

/// One line of text with its 1-based number, counted from where reading started
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub number: usize,
    pub text: String,
}

/// Iterator over the length-checked lines of a reader
///
/// Stops after the first error. The file handle (if any) is released when the
/// iterator is dropped.
#[derive(Debug)]
pub struct BoundedLines<R> {
    reader: R,
    file: String,
    max_content: usize,
    line_number: usize,
    position: u64,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> BoundedLines<R> {
    /// Wrap a reader already positioned at `position`
    pub fn new(reader: R, file: impl Into<String>, position: u64, config: &ReaderConfig) -> Self {
        Self {
            reader,
            file: file.into(),
            max_content: config.max_line_content(),
            line_number: 0,
            position,
            buf: Vec::with_capacity(config.max_line_length + 1),
            finished: false,
        }
    }

    /// Byte position just after the last line returned
    pub fn position(&self) -> u64 {
        self.position
    }

    fn read_line(&mut self) -> Result<Option<TextLine>> {
        self.buf.clear();

        // room for the longest accepted content plus a "\r\n" terminator
        let cap = (self.max_content + 2) as u64;
        let read = (&mut self.reader)
            .take(cap)
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| Error::io(format!("Failed reading icgem file {}", self.file), e))?;

        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        self.position += read as u64;

        let mut content = &self.buf[..];
        if let Some(stripped) = content.strip_suffix(b"\n") {
            content = stripped.strip_suffix(b"\r").unwrap_or(stripped);
        }

        if content.len() > self.max_content {
            return Err(Error::LineTooLong {
                file: self.file.clone(),
                line_number: self.line_number,
                limit: self.max_content + 1,
            });
        }

        Ok(Some(TextLine {
            number: self.line_number,
            text: String::from_utf8_lossy(content).into_owned(),
        }))
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = Result<TextLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a file and position a line iterator at `offset`
///
/// Fails with [`Error::Configuration`] before touching the file when `config`
/// is invalid.
pub fn open_at(
    path: &Path,
    offset: u64,
    config: &ReaderConfig,
) -> Result<BoundedLines<BufReader<File>>> {
    config.validate()?;
    let file_name = path.display().to_string();

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed opening icgem file {}", file_name), e))?;
    let mut reader = BufReader::new(file);
    reader.seek(SeekFrom::Start(offset)).map_err(|e| {
        Error::io(
            format!("Failed seeking to offset {} in icgem file {}", offset, file_name),
            e,
        )
    })?;

    Ok(BoundedLines::new(reader, file_name, offset, config))
}
