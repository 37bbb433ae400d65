#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]

use std::{
    fs::File,
    io::{self, Read, Write},
};

use dsmr_p1::{frame_decoder::telegram_from_bytes, FrameReader};
use log::{error, trace, warn};

mod app_error;
mod config;
mod timestamp_file_writer;

use crate::{
    app_error::Result,
    config::{command, Config},
    timestamp_file_writer::TimestampFileWriter,
};

#[derive(Debug, Default, PartialEq)]
struct Stats {
    written: usize,
    skipped: usize,
}

fn log_frames<R: Read>(reader: R, writer: &mut TimestampFileWriter) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut fr = FrameReader::new(reader);

    while let Some(frame) = fr.read_frame()? {
        let payload = String::from_utf8_lossy(frame);

        let tgram = match telegram_from_bytes(frame) {
            Ok(tgram) => tgram,
            Err(err) => {
                warn!("parse error: {}, payload: {:?}", err, payload);
                stats.skipped += 1;
                continue;
            }
        };

        let timestamp = match tgram.timestamp() {
            Some(Ok(timestamp)) => timestamp,
            Some(Err(err)) => {
                warn!("invalid date: {}, payload: {:?}", err, payload);
                stats.skipped += 1;
                continue;
            }
            None => {
                warn!("no date field in payload {:?}", payload);
                stats.skipped += 1;
                continue;
            }
        };

        writer.set_timestamp(timestamp)?;
        writer.write_all(frame)?;
        stats.written += 1;
    }

    writer.flush()?;

    Ok(stats)
}

fn run() -> Result<()> {
    env_logger::init();

    let matches = command().get_matches();
    let config = Config::from_matches(&matches);

    let mut writer = TimestampFileWriter::new(config.output_dir.clone(), config.layout.clone());

    let stats = match config.input_filename {
        Some(ref filename) => {
            let file = File::open(filename).map_err(|err| {
                format!("error opening {} for reading: {}", filename.display(), err)
            })?;
            log_frames(file, &mut writer)?
        }
        None => log_frames(io::stdin().lock(), &mut writer)?,
    };

    trace!("stats: {:?}", stats);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("p1-logger: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const TELEGRAM_ABC: &[u8] = b"/XXX5ABC\r\n\r\n0-0:1.0.0(210101120000S)\r\n!337B\r\n";

    const TELEGRAM_NO_DATE: &[u8] = b"/XXX5\r\n\r\n!4B22\r\n";

    #[test]
    fn test_log_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = TimestampFileWriter::new(dir.path().to_owned(), "%Y-%m-%d.log".to_owned());

        let mut input = b"noise".to_vec();
        input.extend_from_slice(TELEGRAM_ABC);
        input.extend_from_slice(TELEGRAM_NO_DATE);
        input.extend_from_slice(TELEGRAM_ABC);
        input.extend_from_slice(b"/XXX5\r\n");

        let stats = log_frames(&input[..], &mut writer).unwrap();

        assert_eq!(
            Stats {
                written: 2,
                skipped: 3,
            },
            stats
        );

        let content = fs::read(dir.path().join("2021-01-01.log")).unwrap();

        assert_eq!([TELEGRAM_ABC, TELEGRAM_ABC].concat(), content);
    }
}
