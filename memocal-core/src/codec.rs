//! Flat string codec for the persisted memo collection.
//!
//! Records are joined by `;`, each record is `date|time|content`:
//! date as `YYYY-MM-DD`, time as `HH:MM` (decode also accepts `HH:MM:SS`)
//! or the literal `null` when the memo has no reminder time, content raw.
//! There is no escaping; content is validated against the separators
//! before it enters a store.
//!
//! Decoding is tolerant: any record with the wrong field count or an
//! unparseable date/time token is skipped, so one corrupted record never
//! loses the rest of the collection.

use chrono::{NaiveDate, NaiveTime};

use crate::memo::Memo;

pub const RECORD_SEPARATOR: char = ';';
pub const FIELD_SEPARATOR: char = '|';
pub const NULL_TIME: &str = "null";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Encode a memo collection into the flat persisted string.
pub fn encode(memos: &[Memo]) -> String {
    memos
        .iter()
        .map(encode_record)
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

fn encode_record(memo: &Memo) -> String {
    let time = match memo.time {
        Some(t) => t.format(TIME_FORMAT).to_string(),
        None => NULL_TIME.to_string(),
    };
    format!(
        "{}{sep}{}{sep}{}",
        memo.date.format(DATE_FORMAT),
        time,
        memo.content,
        sep = FIELD_SEPARATOR
    )
}

/// Decode the flat persisted string, skipping malformed records.
pub fn decode(input: &str) -> Vec<Memo> {
    input
        .split(RECORD_SEPARATOR)
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            let memo = decode_record(record);
            if memo.is_none() {
                log::warn!("skipping malformed memo record: {:?}", record);
            }
            memo
        })
        .collect()
}

fn decode_record(record: &str) -> Option<Memo> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return None;
    }
    let date = NaiveDate::parse_from_str(fields[0], DATE_FORMAT).ok()?;
    let time = match fields[1] {
        NULL_TIME => None,
        token => Some(parse_time(token)?),
    };
    Some(Memo::new(date, time, fields[2]))
}

/// Parse `HH:MM` or `HH:MM:SS`.
fn parse_time(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(token, TIME_FORMAT))
        .ok()
}
