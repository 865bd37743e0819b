use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Ho_Chi_Minh;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub search_debounce_ms: Option<u32>,
}

impl RuntimeConfig {
    /// Fills unset fields from `other`; values already present win.
    pub fn merge(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            time_zone: self.time_zone.or(other.time_zone),
            search_debounce_ms: self.search_debounce_ms.or(other.search_debounce_ms),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some() && self.search_debounce_ms.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static SEARCH_DEBOUNCE_MS: OnceLock<u32> = OnceLock::new();
static TIME_ZONE: RwLock<Option<Tz>> = RwLock::new(None);

pub fn parse_time_zone(raw: &str) -> Result<Tz, ConfigError> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimeZone(raw.to_string()))
}

pub fn current_time_zone() -> Tz {
    TIME_ZONE
        .read()
        .ok()
        .and_then(|guard| *guard)
        .unwrap_or(DEFAULT_TIME_ZONE)
}

fn store_time_zone(tz: Tz) {
    if let Ok(mut guard) = TIME_ZONE.write() {
        *guard = Some(tz);
    }
}

pub fn search_debounce_ms() -> u32 {
    SEARCH_DEBOUNCE_MS
        .get()
        .copied()
        .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn read_global(name: &str, upper_first: bool) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let lookup = |key: &str| {
        let upper = key.to_ascii_uppercase();
        let candidates = if upper_first {
            [upper.as_str(), key]
        } else {
            [key, upper.as_str()]
        };
        let found = candidates.into_iter().find_map(|candidate| {
            js_sys::Reflect::get(&obj, &candidate.into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        });
        found
    };
    Some(RuntimeConfig {
        api_base_url: lookup("api_base_url").and_then(|v| v.as_string()),
        time_zone: lookup("time_zone").and_then(|v| v.as_string()),
        search_debounce_ms: lookup("search_debounce_ms")
            .and_then(|v| v.as_f64())
            .filter(|ms| *ms >= 0.0)
            .map(|ms| ms as u32),
    })
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__ROLLCALL_ENV (env.js) wins over window.__ROLLCALL_CONFIG.
    let env = read_global("__ROLLCALL_ENV", true).unwrap_or_default();
    let cfg = read_global("__ROLLCALL_CONFIG", false).unwrap_or_default();
    env.merge(cfg)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get(config_json_url()?).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

/// Caches the resolved values; later calls keep the first resolution.
pub fn apply(cfg: &RuntimeConfig) {
    let base = cfg
        .api_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(base.trim_end_matches('/').to_string());
    let _ = SEARCH_DEBOUNCE_MS.set(
        cfg.search_debounce_ms
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
    );
    match cfg.time_zone.as_deref().map(parse_time_zone) {
        Some(Ok(tz)) => store_time_zone(tz),
        Some(Err(err)) => {
            warn!("{}; falling back to {}", err, DEFAULT_TIME_ZONE);
            store_time_zone(DEFAULT_TIME_ZONE);
        }
        None => store_time_zone(DEFAULT_TIME_ZONE),
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    init().await;
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    if API_BASE_URL.get().is_some() {
        return;
    }
    let mut cfg = snapshot_from_globals();
    if !cfg.is_complete() {
        match fetch_runtime_config().await {
            Some(file_cfg) => cfg = cfg.merge(file_cfg),
            None => warn!("config.json unavailable; using defaults for missing settings"),
        }
    }
    apply(&cfg);
}
