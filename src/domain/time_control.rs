//! Time control tags in the style of PGN `TimeControl`.
//!
//! A tag is one or more colon-separated periods played in order:
//!
//! ```text
//! tag    := field (':' field)*
//! field  := '-' | [moves '/'] initial ['+' increment]
//! ```
//!
//! `-` is an untimed game. `moves` is the number of moves required before the next period
//! starts; without it the period governs the rest of the game. All amounts are seconds.
//!
//! `moves` and `increment` are read leniently (a missing or unreadable value is 0), while
//! `initial` must be a plain non-negative integer.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Starting time on the clock for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialTime {
    Seconds(u64),
    Unlimited,
}

impl InitialTime {
    pub fn seconds(&self) -> Option<u64> {
        match self {
            InitialTime::Seconds(s) => Some(*s),
            InitialTime::Unlimited => None,
        }
    }
}

/// One period of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePeriod {
    pub initial: InitialTime,
    /// Seconds added after each move.
    pub increment: u64,
    /// Moves to complete within the period; 0 means no cutoff.
    pub moves_required: u64,
}

impl TimePeriod {
    pub fn new(initial: u64, increment: u64, moves_required: u64) -> Self {
        Self {
            initial: InitialTime::Seconds(initial),
            increment,
            moves_required,
        }
    }

    pub fn untimed() -> Self {
        Self {
            initial: InitialTime::Unlimited,
            increment: 0,
            moves_required: 0,
        }
    }

    pub fn is_untimed(&self) -> bool {
        self.initial == InitialTime::Unlimited
    }

    /// Period that lasts until the end of the game.
    pub fn is_sudden_death(&self) -> bool {
        self.moves_required == 0
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let initial = match self.initial {
            InitialTime::Unlimited => return write!(f, "-"),
            InitialTime::Seconds(s) => s,
        };
        if self.moves_required > 0 {
            write!(f, "{}/", self.moves_required)?;
        }
        write!(f, "{}", initial)?;
        if self.increment > 0 {
            write!(f, "+{}", self.increment)?;
        }
        Ok(())
    }
}

/// Ordered periods of a parsed tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeControl(Vec<TimePeriod>);

impl TimeControl {
    pub fn periods(&self) -> &[TimePeriod] {
        &self.0
    }

    pub fn into_periods(self) -> Vec<TimePeriod> {
        self.0
    }

    pub fn is_untimed(&self) -> bool {
        self.0.iter().all(TimePeriod::is_untimed)
    }
}

impl FromStr for TimeControl {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(TimeControl)
    }
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(":"))
    }
}

/// Parse a time control tag into its periods, in order of play.
#[instrument(level = "debug")]
pub fn parse(tag: &str) -> DomainResult<Vec<TimePeriod>> {
    tag.split(':').map(parse_field).collect()
}

fn parse_field(field: &str) -> DomainResult<TimePeriod> {
    if field == "-" {
        return Ok(TimePeriod::untimed());
    }

    let segments: Vec<&str> = field.split('/').collect();
    let last = segments[segments.len() - 1];
    let mut clock = last.split('+');
    let initial = parse_initial(field, clock.next().unwrap_or_default())?;
    let increment = clock.next().map_or(0, lenient_int);
    let moves_required = segments
        .len()
        .checked_sub(2)
        .map_or(0, |i| lenient_int(segments[i]));

    let period = TimePeriod::new(initial, increment, moves_required);
    trace!(%field, ?period, "parsed field");
    Ok(period)
}

fn parse_initial(field: &str, s: &str) -> DomainResult<u64> {
    let s = s.trim();
    let malformed = |reason: &str| DomainError::MalformedTimeField {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if s.is_empty() {
        return Err(malformed("missing initial time"));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("initial time is not an integer"));
    }
    s.parse().map_err(|_| malformed("initial time out of range"))
}

/// Leading decimal digits of `s` after optional whitespace and `+` sign.
///
/// No digits (including a negative sign) reads as 0; too many digits saturate.
fn lenient_int(s: &str) -> u64 {
    let s = s.trim_start();
    let digits: String = s
        .strip_prefix('+')
        .unwrap_or(s)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
