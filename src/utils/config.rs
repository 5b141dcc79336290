/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Environment lookups used by `ClientConfig::from_env`
//!
//! Values are never logged, only variable names: several `AHREFS_*`
//! variables carry credentials.

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// `None` when unset (or not unicode), otherwise the parse outcome
fn lookup<T: FromStr>(name: &str) -> Option<Result<T, T::Err>> {
    env::var(name).ok().map(|raw| raw.parse::<T>())
}

/// Parsed value of `name`, or `default` when unset or unparsable
///
/// Set values are taken verbatim, surrounding whitespace included, so a
/// prefix such as `"Bearer "` survives.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match lookup::<T>(name) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("Failed to parse {}: {:?}, using default", name, e);
            default
        }
        None => default,
    }
}

/// Parsed value of `name`, `None` when unset or invalid
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    lookup::<T>(name).and_then(Result::ok)
}

/// Truthiness of a flag value: only `1` and `true` (any case) are true
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}

/// Boolean flag from `name`, `None` when unset
///
/// Every set value other than `1` or `true` reads as `false`.
pub fn get_env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|raw| parse_flag(&raw))
}
