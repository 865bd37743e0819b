use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::use_params_map;
use std::rc::Rc;

use super::{
    repository::SessionDetailRepository,
    types::{RosterFilter, RosterRow, RosterStats, SessionPhase, StatusFacet},
    utils::{build_rows, classify_phase, filter_roster, reconcile_roster, roster_stats},
};
use crate::api::{ApiClient, ApiError, SessionDetailResponse};

/// Period of the clock that re-derives the phase while the page is open.
pub const PHASE_TICK_MS: u32 = 30_000;

pub type SessionResource = Resource<(Option<i64>, u32), Result<SessionDetailResponse, ApiError>>;

#[derive(Clone, Copy)]
pub struct SessionDetailViewModel {
    pub reload: RwSignal<u32>,
    pub session_resource: SessionResource,
    pub detail: Memo<Option<SessionDetailResponse>>,
    pub now: RwSignal<DateTime<Utc>>,
    pub facet: RwSignal<StatusFacet>,
    pub query: RwSignal<String>,
    pub phase: Memo<Option<SessionPhase>>,
    pub stats: Memo<RosterStats>,
    pub rows: Memo<Vec<RosterRow>>,
}

impl SessionDetailViewModel {
    pub fn trigger_reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn parse_session_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

pub fn use_session_detail_view_model() -> SessionDetailViewModel {
    let params = use_params_map();
    let session_id = Signal::derive(move || {
        params.with(|map| parse_session_id(map.get("session_id").map(String::as_str)))
    });
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let view_model = build_session_detail_view_model(session_id, Rc::new(api), Utc::now());

    create_effect(move |_| {
        let ticker = Interval::new(PHASE_TICK_MS, move || view_model.now.set(Utc::now()));
        on_cleanup(move || {
            ticker.cancel();
        });
    });

    view_model
}

pub fn build_session_detail_view_model(
    session_id: Signal<Option<i64>>,
    client: Rc<ApiClient>,
    now: DateTime<Utc>,
) -> SessionDetailViewModel {
    let repository = SessionDetailRepository::new_with_client(client);
    let reload = create_rw_signal(0u32);
    let now = create_rw_signal(now);
    let facet = create_rw_signal(StatusFacet::default());
    let query = create_rw_signal(String::new());

    let session_resource = create_resource(
        move || (session_id.get(), reload.get()),
        move |(id, _reload)| {
            let repo = repository.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_session(id).await,
                    None => Err(ApiError::validation("Mã buổi học không hợp lệ")),
                }
            }
        },
    );

    let detail = create_memo(move |_| session_resource.get().and_then(Result::ok));
    let phase = create_memo(move |_| {
        let start = detail.with(|detail| detail.as_ref().map(|d| d.schedule.start_time));
        classify_phase(start, now.get())
    });

    let stats = create_memo(move |_| {
        let Some(phase) = phase.get() else {
            return RosterStats::default();
        };
        detail.with(|detail| {
            detail
                .as_ref()
                .map(|d| roster_stats(&reconcile_roster(&d.attendees, &d.absentees, phase)))
                .unwrap_or_default()
        })
    });

    let rows = create_memo(move |_| {
        let Some(phase) = phase.get() else {
            return Vec::new();
        };
        let filter = RosterFilter {
            facet: facet.get(),
            query: query.get(),
        };
        detail.with(|detail| {
            detail
                .as_ref()
                .map(|d| {
                    let roster = reconcile_roster(&d.attendees, &d.absentees, phase);
                    build_rows(&filter_roster(&roster, &filter))
                })
                .unwrap_or_default()
        })
    });

    SessionDetailViewModel {
        reload,
        session_resource,
        detail,
        now,
        facet,
        query,
        phase,
        stats,
        rows,
    }
}
