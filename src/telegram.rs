use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{error::DecodeResult, timestamp::timestamp_from_tst};

/// The field code of the date-time stamp every telegram carries.
pub const TIMESTAMP_FIELD_CODE: &str = "0-0:1.0.0";

/// The `Telegram` type stores the information decoded from one P1 frame.
///
/// A `Telegram` consists of the identification line sent by the meter and the
/// data lines, mapped from their field codes (e.g. `1-0:1.8.1`) to the raw value
/// text including its parentheses (e.g. `(123456.789*kWh)`). Values are kept as
/// sent; lines with multiple values (like the power failure log) are not split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Telegram {
    manufacturer: String,
    identifier: String,
    fields: BTreeMap<String, String>,
}

impl Telegram {
    /// Constructs a `Telegram`.
    ///
    /// If `fields` contains the same code more than once, the last value wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsmr_p1::Telegram;
    ///
    /// let tgram = Telegram::new("ISk", "\\2MT382-1000", vec![
    ///     ("1-0:1.8.1", "(123456.789*kWh)"),
    ///     ("1-0:1.8.1", "(123456.790*kWh)"),
    /// ]);
    ///
    /// assert_eq!(1, tgram.len());
    /// assert_eq!(Some("(123456.790*kWh)"), tgram.get("1-0:1.8.1"));
    /// ```
    pub fn new<M, I, F, K, V>(manufacturer: M, identifier: I, fields: F) -> Telegram
    where
        M: Into<String>,
        I: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Telegram {
            manufacturer: manufacturer.into(),
            identifier: identifier.into(),
            fields: fields
                .into_iter()
                .map(|(code, value)| (code.into(), value.into()))
                .collect(),
        }
    }

    /// The three character manufacturer flag following the start marker.
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// The identification text following the protocol version character.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// All data lines, keyed by field code.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// The raw value of the given field code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.fields.get(code).map(String::as_str)
    }

    /// Number of data lines.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the telegram has no data lines.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes the date-time stamp of this `Telegram`.
    ///
    /// Returns `None` if the telegram does not contain a `0-0:1.0.0` line.
    pub fn timestamp(&self) -> Option<DecodeResult<DateTime<Utc>>> {
        self.get(TIMESTAMP_FIELD_CODE).map(timestamp_from_tst)
    }
}
