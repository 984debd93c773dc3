//! CLI surface for TaskMaster.
//!
//! Thin handlers over the pure core and the file store. Dates, views and
//! context codes are parsed here, once, at the boundary; the core never
//! re-validates them.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, Time};

use crate::config;
use crate::core::{Context, View, WallClock};
use crate::store::FileStore;
use crate::{Error, Result};

mod commands;
mod render;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "tm",
    version,
    about = "TaskMaster personal kanban",
    infer_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Machine-readable JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Task store file (default: config `store_path`, then the XDG data
    /// dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(args)
}

pub fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_or_init();
    config::apply_env_overrides(&mut cfg);

    let store_path = cli
        .file
        .or_else(|| cfg.store_path.clone())
        .unwrap_or_else(crate::paths::default_store_path);
    tracing::debug!(path = %store_path.display(), "opening task store");
    let store = FileStore::open(store_path, cfg.lookup_ttl_ms)?;

    let mut ctx = Ctx {
        store,
        json: cli.json,
        now: WallClock::now(),
        default_view: cfg.default_view,
        default_context: cfg.default_context,
    };
    commands::dispatch(&mut ctx, cli.command)
}

/// Everything a handler needs.
pub(crate) struct Ctx {
    pub(crate) store: FileStore,
    pub(crate) json: bool,
    pub(crate) now: WallClock,
    pub(crate) default_view: View,
    pub(crate) default_context: Option<Context>,
}

impl Ctx {
    pub(crate) fn print<T: Serialize>(&self, value: &T, human: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", to_json(value)?);
        } else {
            println!("{}", human());
        }
        Ok(())
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| invalid("output", e.to_string()))
}

pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Error {
    Error::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn parse_view_opt(raw: Option<&str>, fallback: View) -> Result<View> {
    match raw {
        None => Ok(fallback),
        Some(s) => Ok(s.trim().parse::<View>()?),
    }
}

pub(crate) fn parse_context_opt(raw: Option<&str>) -> Result<Option<Context>> {
    match raw {
        None => Ok(None),
        Some(s) => Ok(Some(s.trim().parse::<Context>()?)),
    }
}

pub(crate) fn parse_clock_opt(field: &str, raw: Option<&str>) -> Result<Option<WallClock>> {
    let Some(raw) = raw else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_clock(raw)
        .map(Some)
        .map_err(|reason| invalid(field, reason))
}

fn parse_clock(s: &str) -> std::result::Result<WallClock, String> {
    // RFC3339
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(WallClock((dt.unix_timestamp_nanos() / 1_000_000) as u64));
    }

    // YYYY-MM-DD (midnight UTC)
    let fmt_date =
        time::format_description::parse("[year]-[month]-[day]").map_err(|e| e.to_string())?;
    if let Ok(date) = Date::parse(s, &fmt_date) {
        let dt = date.with_time(Time::MIDNIGHT).assume_utc();
        return Ok(WallClock((dt.unix_timestamp_nanos() / 1_000_000) as u64));
    }

    // YYYY-MM-DD HH:MM (UTC)
    let fmt_dt = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]")
        .map_err(|e| e.to_string())?;
    if let Ok(dt) = time::PrimitiveDateTime::parse(s, &fmt_dt) {
        let dt = dt.assume_utc();
        return Ok(WallClock((dt.unix_timestamp_nanos() / 1_000_000) as u64));
    }

    Err(format!(
        "unsupported date format: {s:?} (use YYYY-MM-DD or RFC3339)"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_as_midnight_utc() {
        let clock = parse_clock("2026-03-01").unwrap();
        assert_eq!(clock.as_ms() % 86_400_000, 0);
    }

    #[test]
    fn parses_rfc3339() {
        let clock = parse_clock("1970-01-01T00:00:01Z").unwrap();
        assert_eq!(clock, WallClock(1_000));
    }

    #[test]
    fn rejects_junk_dates() {
        assert!(parse_clock("next tuesday").is_err());
    }

    #[test]
    fn view_fallback_applies_only_when_absent() {
        assert_eq!(parse_view_opt(None, View::Open).unwrap(), View::Open);
        assert_eq!(
            parse_view_opt(Some("paper"), View::Open).unwrap(),
            View::Paper
        );
        assert!(parse_view_opt(Some("nope"), View::Open).is_err());
    }
}
