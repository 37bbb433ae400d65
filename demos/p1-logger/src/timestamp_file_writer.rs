use std::fmt::Write as FmtWrite;
use std::fs::{self, File, OpenOptions};
use std::io::{Error, ErrorKind, Result, Write};
use std::path::{Path, PathBuf};

use dsmr_p1::chrono::{DateTime, Utc};
use log::info;

/// Appends to the file in `output_dir` whose name results from formatting the current
/// timestamp with a `strftime` layout. The file is only reopened when that name changes.
pub struct TimestampFileWriter {
    output_dir: PathBuf,
    layout: String,
    current_filename: Option<PathBuf>,
    current_file: Option<File>,
}

impl TimestampFileWriter {
    pub fn new(output_dir: PathBuf, layout: String) -> TimestampFileWriter {
        TimestampFileWriter {
            output_dir,
            layout,
            current_filename: None,
            current_file: None,
        }
    }

    fn filename_from_timestamp(&self, timestamp: DateTime<Utc>) -> Result<PathBuf> {
        let mut name = String::new();
        write!(name, "{}", timestamp.format(&self.layout)).map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("invalid filename layout {:?}", self.layout),
            )
        })?;
        Ok(self.output_dir.join(name))
    }

    /// Returns whether a different file was opened.
    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> Result<bool> {
        let filename = self.filename_from_timestamp(timestamp)?;
        if self.current_filename.as_ref() == Some(&filename) {
            return Ok(false);
        }

        if let Some(mut file) = self.current_file.take() {
            file.flush()?;
        }

        if let Some(dir) = filename.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&filename)?;

        info!("Logging to {}", filename.display());

        self.current_filename = Some(filename);
        self.current_file = Some(file);

        Ok(true)
    }

    pub fn filename(&self) -> Option<&Path> {
        self.current_filename.as_deref()
    }
}

impl Write for TimestampFileWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self.current_file {
            Some(ref mut file) => file.write(buf),
            None => Err(Error::new(ErrorKind::Other, "No file opened!")),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.current_file {
            Some(ref mut file) => file.flush(),
            None => Ok(()),
        }
    }
}
