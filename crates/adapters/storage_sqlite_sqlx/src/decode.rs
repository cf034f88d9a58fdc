//! Column decoding helpers shared by the row wrappers.
//!
//! Ids, timestamps and dates live in TEXT columns; a value that fails to
//! parse surfaces as [`sqlx::Error::Decode`].

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;

use opsdash_domain::time::Timestamp;

pub(crate) fn parse<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn parse_opt<T>(value: Option<String>) -> Result<Option<T>, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.as_deref().map(parse).transpose()
}

pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn date(value: Option<String>) -> Result<Option<NaiveDate>, sqlx::Error> {
    parse_opt(value)
}

pub(crate) fn json<T: DeserializeOwned>(value: &str) -> Result<T, sqlx::Error> {
    serde_json::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
