use chrono::{DateTime, Utc};

use crate::api::{AttendanceLogEntry, CheckInStatus, ProfileSimple};

/// Coarse timing state of a session. An unloaded session has no phase
/// (`Option<SessionPhase>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Upcoming,
    /// At or after the scheduled start, whether or not the session ended.
    Past,
}

impl SessionPhase {
    /// Status given to enrollees with no check-in record.
    pub fn unrecorded_status(self) -> AttendanceStatus {
        match self {
            SessionPhase::Upcoming => AttendanceStatus::Upcoming,
            SessionPhase::Past => AttendanceStatus::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Upcoming,
}

impl From<CheckInStatus> for AttendanceStatus {
    fn from(status: CheckInStatus) -> Self {
        match status {
            CheckInStatus::Present => AttendanceStatus::Present,
            CheckInStatus::Late => AttendanceStatus::Late,
        }
    }
}

impl AttendanceStatus {
    pub fn is_checked_in(self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Có mặt",
            AttendanceStatus::Late => "Đi muộn",
            AttendanceStatus::Absent => "Vắng mặt",
            AttendanceStatus::Upcoming => "Chưa bắt đầu",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "bg-green-100 text-green-800",
            AttendanceStatus::Late => "bg-amber-100 text-amber-800",
            AttendanceStatus::Absent => "bg-red-100 text-red-800",
            AttendanceStatus::Upcoming => "bg-slate-100 text-slate-700",
        }
    }
}

/// One side of the merge before it is normalised into a [`RosterEntry`].
#[derive(Debug, Clone, Copy)]
pub enum RosterSource<'a> {
    Recorded(&'a AttendanceLogEntry),
    Unrecorded(&'a ProfileSimple),
}

impl<'a> RosterSource<'a> {
    pub fn resolve(self, phase: SessionPhase) -> RosterEntry<'a> {
        match self {
            RosterSource::Recorded(log) => RosterEntry {
                status: log.status.into(),
                check_in_time: log.check_in_time,
                profile: log.profile.as_ref(),
            },
            RosterSource::Unrecorded(profile) => RosterEntry {
                status: phase.unrecorded_status(),
                check_in_time: None,
                profile: Some(profile),
            },
        }
    }
}

/// A reconciled roster line. Borrows the profile from the fetched
/// snapshot; rebuilt on every recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub status: AttendanceStatus,
    pub check_in_time: Option<DateTime<Utc>>,
    pub profile: Option<&'a ProfileSimple>,
}

impl<'a> RosterEntry<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.profile.and_then(|p| p.name.as_deref())
    }

    pub fn student_id(&self) -> Option<&'a str> {
        self.profile.and_then(|p| p.student_id.as_deref())
    }

    pub fn to_row(&self, ordinal: usize) -> RosterRow {
        RosterRow {
            ordinal,
            name: self.name().map(str::to_string),
            student_id: self.student_id().map(str::to_string),
            check_in_time: self.check_in_time,
            status: self.status,
        }
    }
}

/// Owned, render-ready copy of a filtered roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    /// 1-based position within the filtered list.
    pub ordinal: usize,
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub check_in_time: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
}

impl RosterRow {
    pub fn key(&self) -> String {
        match &self.student_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("#{}", self.ordinal),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub present: usize,
    pub late: usize,
    /// Absent and upcoming entries together.
    pub not_checked_in: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFacet {
    #[default]
    All,
    Present,
    Late,
    /// Matches both `Absent` and `Upcoming`.
    Absent,
}

impl StatusFacet {
    pub const ALL: [StatusFacet; 4] = [
        StatusFacet::All,
        StatusFacet::Present,
        StatusFacet::Late,
        StatusFacet::Absent,
    ];

    pub fn matches(self, status: AttendanceStatus) -> bool {
        match self {
            StatusFacet::All => true,
            StatusFacet::Present => status == AttendanceStatus::Present,
            StatusFacet::Late => status == AttendanceStatus::Late,
            StatusFacet::Absent => {
                matches!(status, AttendanceStatus::Absent | AttendanceStatus::Upcoming)
            }
        }
    }

    pub fn label(self, phase: Option<SessionPhase>) -> &'static str {
        match self {
            StatusFacet::All => "Tất cả",
            StatusFacet::Present => "Có mặt",
            StatusFacet::Late => "Đi muộn",
            StatusFacet::Absent if phase == Some(SessionPhase::Upcoming) => "Chưa đến",
            StatusFacet::Absent => "Vắng mặt",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub facet: StatusFacet,
    pub query: String,
}
