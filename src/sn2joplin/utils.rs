use std::io::stdout;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use crossterm::{
    style::{Attribute, SetAttribute},
    execute,
    tty::IsTty,
};
use log::warn;
use regex::Regex;

// sn2joplin imports
use crate::{specific_fail, specific_fail_str};
use crate::errors::{Error, ErrorKind, Result};

/// input format of Simplenote timestamps (the fraction and zone follow)
pub static DATEFMT_IN: &str = "%Y-%m-%d";
pub static TIMEFMT_IN: &str = "%H:%M:%S";

/// longest file stem we emit, leaving room for ".md" in a 255 byte name
pub const MAX_STEM_BYTES: usize = 255 - 3;

const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

pub fn stdout_is_tty() -> bool {
    stdout().is_tty()
}

/// Derive a display title from the first line of a note.
///
/// `"# Shopping\nmilk"` and `"Shopping\nmilk"` both give `"Shopping"`.
/// A heading marker run (`##`) counts as one marker; the title ends at the
/// next `#` on the line.
pub fn extract_title(content: &str) -> Result<String> {
    let first_line = match content.lines().next() {
        Some(l) => l,
        None => return specific_fail_str!(ErrorKind::MalformedRecord, "note has no content"),
    };
    let title = match first_line.split_once('#') {
        Some((prefix, rest)) if prefix.trim().is_empty() => {
            rest.trim_start_matches('#').split('#').next().unwrap_or_default()
        }
        Some((prefix, _)) => prefix,
        None => first_line,
    };
    Ok(title.trim().to_string())
}

/// `2022-08-24T18:32:58.089Z` -> `2022-08-24 18:32:58Z`
///
/// The zone marker is always written as `Z`; stamps carrying anything else
/// are converted anyway and logged.
pub fn normalize_timestamp(stamp: &str) -> Result<String> {
    let (date, rest) = match stamp.split_once('T') {
        Some(parts) => parts,
        None => return malformed_timestamp(stamp, "missing date/time separator"),
    };
    let (time, fraction) = match rest.split_once('.') {
        Some(parts) => parts,
        None => return malformed_timestamp(stamp, "missing fractional seconds"),
    };
    NaiveDate::parse_from_str(date, DATEFMT_IN).map_err(|e| Error::from(e).with_detail(stamp))?;
    NaiveTime::parse_from_str(time, TIMEFMT_IN).map_err(|e| Error::from(e).with_detail(stamp))?;
    if !fraction.ends_with('Z') {
        warn!("timestamp {} is not UTC, it will still be labelled Z", stamp);
    }
    Ok(format!("{} {}Z", date, time))
}

fn malformed_timestamp(stamp: &str, why: &str) -> Result<String> {
    Err(Error::new(ErrorKind::MalformedTimestamp, format!("bad timestamp '{}'", stamp))
        .with_detail(why))
}

fn illegal_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[\x00-\x1f\x7f/\\:*?"<>|]"#).expect("static pattern compiles")
    })
}

/// Make `name` usable as a file name on Linux, macOS and Windows.
///
/// Illegal characters are dropped, not replaced. May return an empty string.
pub fn sanitize_filename(name: &str) -> String {
    let stripped = illegal_chars().replace_all(name, "");
    let mut clean = stripped.trim().trim_end_matches(['.', ' ']).to_string();

    // Windows looks only at the part before the first dot: CON.txt is CON
    let device_len = clean.find('.').unwrap_or(clean.len());
    if RESERVED_NAMES.contains(&clean[..device_len].to_uppercase().as_str()) {
        clean.insert(device_len, '_');
    }

    if clean.len() > MAX_STEM_BYTES {
        let mut cut = MAX_STEM_BYTES;
        while !clean.is_char_boundary(cut) {
            cut -= 1;
        }
        clean.truncate(cut);
        clean = clean.trim_end_matches(['.', ' ']).to_string();
    }
    clean
}

/// `Wheeler's Delay` -> `Wheeler''s Delay`, for single-quoted YAML scalars
pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

pub fn pretty_line(bold: &str, plain: &str, tty: bool) -> Result<()> {
    let mut stdout = stdout();
    if tty {
        execute!(stdout, SetAttribute(Attribute::Bold))?;
    }
    print!("{}", bold);
    if tty {
         execute!(stdout, SetAttribute(Attribute::Reset))?;
    }
    print!("{}", plain);
    Ok(())
}
