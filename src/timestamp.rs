//! Decoding of the TST value type used for date-time stamps in P1 telegrams.
//!
//! A TST value has the form `YYMMDDhhmmssX`, where `X` is `S` while daylight saving time
//! is active (UTC+2) and `W` otherwise (UTC+1). The flag sent by the meter is trusted, no
//! DST rules are applied.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::error::{DecodeError, DecodeResult};

const SUMMER_OFFSET: FixedOffset = match FixedOffset::east_opt(2 * 3600) {
    Some(offset) => offset,
    None => panic!("summer offset out of range"),
};

const WINTER_OFFSET: FixedOffset = match FixedOffset::east_opt(3600) {
    Some(offset) => offset,
    None => panic!("winter offset out of range"),
};

/// Number of digits in front of the DST flag.
const DIGIT_COUNT: usize = 12;

/// Returns the UTC offset belonging to a DST flag.
pub fn offset_from_dst_flag(flag: char) -> DecodeResult<FixedOffset> {
    match flag {
        'S' => Ok(SUMMER_OFFSET),
        'W' => Ok(WINTER_OFFSET),
        found => Err(DecodeError::UnknownDstFlag { found }),
    }
}

/// Converts a TST value into a `DateTime<Utc>`.
///
/// The value may still be enclosed in the parentheses it is stored with in a
/// [`Telegram`](../struct.Telegram.html).
///
/// # Examples
///
/// ```rust
/// use dsmr_p1::timestamp::timestamp_from_tst;
///
/// let timestamp = timestamp_from_tst("210630235959S").unwrap();
/// assert_eq!("2021-06-30T21:59:59+00:00", timestamp.to_rfc3339());
///
/// let timestamp = timestamp_from_tst("(211231235959W)").unwrap();
/// assert_eq!("2021-12-31T22:59:59+00:00", timestamp.to_rfc3339());
/// ```
pub fn timestamp_from_tst(value: &str) -> DecodeResult<DateTime<Utc>> {
    let invalid = || DecodeError::InvalidTimestamp {
        value: value.to_owned(),
    };

    let tst = value
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(value);

    let flag = tst.chars().last().ok_or_else(invalid)?;
    let offset = offset_from_dst_flag(flag)?;

    let digits = &tst.as_bytes()[..tst.len() - flag.len_utf8()];
    if digits.len() != DIGIT_COUNT || !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let mut parts = digits
        .chunks(2)
        .map(|pair| u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0'));
    let mut next = || parts.next().ok_or_else(invalid);
    let (year, month, day) = (next()?, next()?, next()?);
    let (hour, minute, second) = (next()?, next()?, next()?);

    let local = NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(invalid)?;

    let timestamp = offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(invalid)?;

    Ok(timestamp.with_timezone(&Utc))
}
