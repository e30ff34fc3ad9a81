//! Conventional date patterns
//!
//! Callers describe formats with the familiar letter tokens (`yyyy-MM-dd HH:mm:ss`).
//! This module compiles them into chrono strftime strings once, so formatting
//! and parsing can delegate to chrono.
//!
//! | Token          | Meaning                         | chrono   |
//! |----------------|---------------------------------|----------|
//! | `yyyy` / `yy`  | year / two-digit year           | `%Y` / `%y` |
//! | `MMMM` / `MMM` | full / abbreviated month name   | `%B` / `%b` |
//! | `MM` / `M`     | month, padded / unpadded        | `%m` / `%-m` |
//! | `dd` / `d`     | day of month                    | `%d` / `%-d` |
//! | `HH` / `H`     | hour of day, 0-23               | `%H` / `%-H` |
//! | `hh` / `h`     | hour of half-day, 1-12          | `%I` / `%-I` |
//! | `mm` / `m`     | minute                          | `%M` / `%-M` |
//! | `ss` / `s`     | second                          | `%S` / `%-S` |
//! | `SSS`          | milliseconds                    | `%3f`    |
//! | `a`            | AM/PM marker                    | `%p`     |
//! | `EEEE` / `EEE` | full / abbreviated weekday      | `%A` / `%a` |
//! | `Z` / `XXX`    | offset `+0800` / `+08:00`       | `%z` / `%:z` |
//!
//! Text between single quotes is copied literally and `''` stands for a quote.

use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};

use crate::error::{DateError, Result};

/// A pattern compiled to its chrono strftime equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    strftime: String,
    has_date: bool,
    has_time: bool,
    has_offset: bool,
}

impl Pattern {
    /// Compile a conventional pattern such as `yyyy-MM-dd HH:mm:ss`.
    pub fn compile(pattern: &str) -> Result<Self> {
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut has_date = false;
        let mut has_time = false;
        let mut has_offset = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        strftime.push('\'');
                        continue;
                    }
                    let mut closed = false;
                    while let Some(q) = chars.next() {
                        if q == '\'' {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                strftime.push('\'');
                                continue;
                            }
                            closed = true;
                            break;
                        }
                        push_literal(&mut strftime, q);
                    }
                    if !closed {
                        return Err(invalid(pattern, "unterminated quoted text"));
                    }
                }
                c if c.is_ascii_alphabetic() => {
                    let mut count = 1;
                    while chars.peek() == Some(&c) {
                        chars.next();
                        count += 1;
                    }
                    let directive = token(c, count)
                        .ok_or_else(|| invalid(pattern, &format!("unsupported pattern letter '{}'", c)))?;
                    match c {
                        'y' | 'M' | 'd' | 'E' => has_date = true,
                        'H' | 'h' | 'm' | 's' | 'S' | 'a' => has_time = true,
                        'Z' | 'X' => has_offset = true,
                        _ => {}
                    }
                    strftime.push_str(directive);
                }
                other => push_literal(&mut strftime, other),
            }
        }

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(invalid(pattern, "pattern does not translate to a valid format"));
        }

        Ok(Self {
            source: pattern.to_string(),
            strftime,
            has_date,
            has_time,
            has_offset,
        })
    }

    /// The pattern as written by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The chrono strftime string this pattern compiles to.
    pub fn as_strftime(&self) -> &str {
        &self.strftime
    }

    /// Whether the pattern carries any calendar date field.
    pub fn has_date(&self) -> bool {
        self.has_date
    }

    /// Whether the pattern carries any time-of-day field.
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// Whether the pattern carries a UTC offset (`Z` or `XXX`)
    pub fn has_offset(&self) -> bool {
        self.has_offset
    }
}

impl FromStr for Pattern {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn token(letter: char, count: usize) -> Option<&'static str> {
    let directive = match (letter, count) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('S', _) => "%3f",
        ('a', _) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('Z', _) => "%z",
        ('X', 1 | 2) => "%z",
        ('X', _) => "%:z",
        _ => return None,
    };
    Some(directive)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn invalid(pattern: &str, reason: &str) -> DateError {
    DateError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
