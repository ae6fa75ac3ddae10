use thiserror::Error;
use time::{Date, Duration, PrimitiveDateTime, Weekday};

/// Display hints supplied by the host and copied onto every generated
/// entry.  The generator never varies them across a timeline.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntryFlags {
    /// Show the day-of-month numeral in the decorative display face.
    pub fun_font: bool,
}

/// One dated unit of a forward timeline, rendered by the host at the
/// instant it becomes current.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Entry {
    date: PrimitiveDateTime,
    flags: EntryFlags,
}

impl Entry {
    /// Construct a standalone entry, e.g. for the host's gallery snapshot
    /// or placeholder, which show a single entry without a timeline.
    pub fn new(date: PrimitiveDateTime, flags: EntryFlags) -> Entry {
        Entry { date, flags }
    }

    pub fn date(&self) -> PrimitiveDateTime {
        self.date
    }

    pub fn flags(&self) -> EntryFlags {
        self.flags
    }

    /// Civil weekday of the entry, for the weekday label.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Civil day-of-month of the entry, for the large numeral.
    pub fn day(&self) -> u8 {
        self.date.day()
    }
}

/// Unit by which successive timeline entries advance.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Granularity {
    /// One civil day per entry, each truncated to local midnight.
    Day,
    /// One whole hour per entry, keeping the reference time-of-day.
    Hour,
}

/// When the host should throw away the current timeline and request a new
/// one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RefreshPolicy {
    /// Regenerate once the final entry's date has passed.
    AtEnd,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TimelineError {
    /// The caller asked for a timeline with no entries.
    #[error("timeline must contain at least one entry")]
    EmptyHorizon,
    /// Advancing the reference date left the representable calendar range.
    #[error("reached the end of time")]
    OutOfTime,
}

/// An ordered batch of future entries plus the policy telling the host
/// when the batch goes stale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Timeline {
    entries: Vec<Entry>,
    policy: RefreshPolicy,
}

impl Timeline {
    /// Generate `horizon` entries starting at `now`, each advanced from
    /// the last by one unit of `granularity` under civil-calendar rules.
    ///
    /// Day-granularity entries land on consecutive civil dates and are
    /// truncated to midnight; hour-granularity entries keep `now`'s
    /// minutes and seconds.  Every entry carries `flags` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::EmptyHorizon`] if `horizon` is zero and
    /// [`TimelineError::OutOfTime`] if advancement walks outside the
    /// supported calendar range; the date is never clamped or wrapped.
    pub fn generate(
        now: PrimitiveDateTime,
        horizon: usize,
        granularity: Granularity,
        flags: EntryFlags,
    ) -> Result<Timeline, TimelineError> {
        if horizon == 0 {
            return Err(TimelineError::EmptyHorizon);
        }
        let mut entries = Vec::with_capacity(horizon);
        for step in 0..horizon {
            let step = i64::try_from(step).map_err(|_| TimelineError::OutOfTime)?;
            let date = advance(now, granularity, step).ok_or(TimelineError::OutOfTime)?;
            entries.push(Entry { date, flags });
        }
        debug_assert!(
            entries.windows(2).all(|w| w[0].date <= w[1].date),
            "entries should be generated in date order"
        );
        log::debug!("generated {horizon} {granularity:?}-granularity entries from {now}");
        Ok(Timeline {
            entries,
            policy: RefreshPolicy::AtEnd,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Instant at which [`RefreshPolicy::AtEnd`] falls due, i.e. the final
    /// entry's date.
    pub fn stale_after(&self) -> PrimitiveDateTime {
        self.entries
            .last()
            .map(Entry::date)
            .expect("Timeline should contain at least one entry")
    }
}

impl IntoIterator for Timeline {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn advance(
    start: PrimitiveDateTime,
    granularity: Granularity,
    steps: i64,
) -> Option<PrimitiveDateTime> {
    match granularity {
        Granularity::Day => start
            .date()
            .checked_add(Duration::days(steps))
            .map(Date::midnight),
        Granularity::Hour => start.checked_add(Duration::hours(steps)),
    }
}
