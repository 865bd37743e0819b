use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::types::{
    AttendanceStatus, RosterEntry, RosterFilter, RosterRow, RosterSource, RosterStats,
    SessionPhase,
};
use crate::api::{AttendanceLogEntry, ProfileSimple};
use crate::utils::time::format_clock;

pub const PLACEHOLDER: &str = "...";

/// `None` when the session has not been loaded. The start instant itself
/// already counts as past.
pub fn classify_phase(
    scheduled_start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<SessionPhase> {
    let start = scheduled_start?;
    if now < start {
        Some(SessionPhase::Upcoming)
    } else {
        Some(SessionPhase::Past)
    }
}

/// Recorded check-ins first, then enrollees without a record, each in
/// backend order. No sorting and no deduplication.
pub fn reconcile_roster<'a>(
    attendees: &'a [AttendanceLogEntry],
    absentees: &'a [ProfileSimple],
    phase: SessionPhase,
) -> Vec<RosterEntry<'a>> {
    attendees
        .iter()
        .map(RosterSource::Recorded)
        .chain(absentees.iter().map(RosterSource::Unrecorded))
        .map(|source| source.resolve(phase))
        .collect()
}

pub fn roster_stats(roster: &[RosterEntry<'_>]) -> RosterStats {
    roster
        .iter()
        .fold(RosterStats::default(), |mut stats, entry| {
            match entry.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::Absent | AttendanceStatus::Upcoming => {
                    stats.not_checked_in += 1
                }
            }
            stats.total += 1;
            stats
        })
}

/// Case-insensitive substring match on name or student id. Only
/// lower-casing is applied: no trimming, no diacritic folding.
pub fn matches_query(entry: &RosterEntry<'_>, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let hit = |field: Option<&str>| field.is_some_and(|value| value.to_lowercase().contains(&needle));
    hit(entry.name()) || hit(entry.student_id())
}

/// A view over `roster`: entries passing both the facet and the query, in
/// roster order.
pub fn filter_roster<'r, 'a>(
    roster: &'r [RosterEntry<'a>],
    filter: &RosterFilter,
) -> Vec<&'r RosterEntry<'a>> {
    roster
        .iter()
        .filter(|entry| filter.facet.matches(entry.status))
        .filter(|entry| matches_query(entry, &filter.query))
        .collect()
}

pub fn build_rows(filtered: &[&RosterEntry<'_>]) -> Vec<RosterRow> {
    filtered
        .iter()
        .enumerate()
        .map(|(index, entry)| entry.to_row(index + 1))
        .collect()
}

pub fn initials(name: Option<&str>) -> String {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return PLACEHOLDER.to_string();
    };
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

pub fn display_or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

pub fn format_check_in_time(time: Option<DateTime<Utc>>, tz: Tz) -> String {
    time.map(|t| format_clock(t, tz))
        .unwrap_or_else(|| "-".to_string())
}
