//! Core logic for a home-screen widget that shows the current weekday and
//! day-of-month, styled per calendar month.
//!
//! The host widget runtime asks [`Timeline::generate`] for a fresh batch
//! of dated entries whenever the previous batch goes stale, then resolves
//! each entry's month style through a [`DateStyler`] immediately before
//! drawing.  Rendering, refresh scheduling, and persistence of the user's
//! [`EntryFlags`] all stay with the host.

mod style;
mod timeline;
pub use crate::style::{DateStyler, MonthStyle, MonthStyler};
pub use crate::timeline::{
    Entry, EntryFlags, Granularity, RefreshPolicy, Timeline, TimelineError,
};
