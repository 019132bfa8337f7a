//! Streams numbered lines out of a sequence of files.

use crate::declaration::FileLine;
use crate::error::{IoOperation, Result, WhatProvidesError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// An item of the path stream: a discovered file, or the error that stopped
/// discovery.
pub trait SourcePath {
    fn into_source_path(self) -> Result<PathBuf>;
}

impl SourcePath for PathBuf {
    fn into_source_path(self) -> Result<PathBuf> {
        Ok(self)
    }
}

impl SourcePath for Result<PathBuf> {
    fn into_source_path(self) -> Result<PathBuf> {
        self
    }
}

/// The file currently being streamed.
struct OpenFile {
    path: Arc<Path>,
    reader: BufReader<File>,
    line_number: usize,
}

/// Lazy iterator over the lines of several files.
///
/// Only one file is open at a time. The first error, whether it comes from
/// discovery or from reading, ends the iteration.
pub struct FileLines<I> {
    paths: I,
    current: Option<OpenFile>,
    buf: Vec<u8>,
    failed: bool,
}

impl<I> FileLines<I>
where
    I: Iterator,
    I::Item: SourcePath,
{
    pub fn new(paths: I) -> Self {
        Self {
            paths,
            current: None,
            buf: Vec::new(),
            failed: false,
        }
    }

    fn open(path: PathBuf) -> Result<OpenFile> {
        debug!(file = %path.display(), "Reading file");
        let file = File::open(&path)
            .map_err(|e| WhatProvidesError::io(path.clone(), IoOperation::Open, e))?;
        Ok(OpenFile {
            path: path.into(),
            reader: BufReader::new(file),
            line_number: 0,
        })
    }

    fn fail(&mut self, err: WhatProvidesError) -> Option<Result<FileLine>> {
        self.failed = true;
        self.current = None;
        Some(Err(err))
    }
}

impl<I> Iterator for FileLines<I>
where
    I: Iterator,
    I::Item: SourcePath,
{
    type Item = Result<FileLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let Some(file) = self.current.as_mut() else {
                let opened = self.paths.next()?.into_source_path().and_then(Self::open);
                match opened {
                    Ok(file) => self.current = Some(file),
                    Err(e) => return self.fail(e),
                }
                continue;
            };

            self.buf.clear();
            match read_line(&mut file.reader, &mut self.buf) {
                Ok(0) => {
                    // Exhausted: drop the handle before opening the next file.
                    self.current = None;
                }
                Ok(_) => {
                    let line = FileLine::new(
                        file.path.clone(),
                        file.line_number,
                        String::from_utf8_lossy(&self.buf),
                    );
                    file.line_number += 1;
                    return Some(Ok(line));
                }
                Err(e) => {
                    let err = WhatProvidesError::io(file.path.to_path_buf(), IoOperation::Read, e);
                    return self.fail(err);
                }
            }
        }
    }
}

/// Appends one line to `buf`, terminator included.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Returns 0 at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let start = buf.len();
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(buf.len() - start);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                buf.extend_from_slice(&available[..=end]);
                reader.consume(end + 1);
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    buf.push(b'\n');
                    reader.consume(1);
                }
                return Ok(buf.len() - start);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

/// Lazily reads every line of every file in `paths`, in order.
pub fn read_lines<I>(paths: I) -> FileLines<I::IntoIter>
where
    I: IntoIterator,
    I::Item: SourcePath,
{
    FileLines::new(paths.into_iter())
}
