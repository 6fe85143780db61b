use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::browser;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset values from `other`; values already present win.
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            time_zone: self.time_zone.or(other.time_zone),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }
}

/// Reference time zone for "today", future-date gating and timestamp display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTimeZone(Tz);

impl AppTimeZone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| ConfigError::UnknownTimeZone(name.to_string()))
    }

    pub fn tz(&self) -> Tz {
        self.0
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for AppTimeZone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kolkata)
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<AppTimeZone> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub fn resolve_time_zone(name: Option<&str>) -> AppTimeZone {
    match name {
        None => AppTimeZone::default(),
        Some(raw) => AppTimeZone::parse(raw).unwrap_or_else(|err| {
            warn!("{}; falling back to {}", err, DEFAULT_TIME_ZONE);
            AppTimeZone::default()
        }),
    }
}

fn read_global(name: &str, keys: &[&str]) -> Option<String> {
    let window = browser::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn get_from_env_js() -> RuntimeConfig {
    // window.__HRMS_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    RuntimeConfig {
        api_base_url: read_global("__HRMS_ENV", &["API_BASE_URL", "api_base_url"]),
        time_zone: read_global("__HRMS_ENV", &["TIME_ZONE", "time_zone"]),
    }
}

fn get_from_window_config() -> RuntimeConfig {
    // window.__HRMS_CONFIG = { api_base_url: "...", time_zone: "..." }
    RuntimeConfig {
        api_base_url: read_global("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"]),
        time_zone: read_global("__HRMS_CONFIG", &["time_zone", "TIME_ZONE"]),
    }
}

fn snapshot_from_globals() -> RuntimeConfig {
    get_from_env_js().or(get_from_window_config())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = browser::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

async fn load_runtime_config() -> RuntimeConfig {
    let globals = snapshot_from_globals();
    if globals.is_complete() {
        return globals;
    }
    match fetch_runtime_config().await {
        Some(file) => globals.or(file),
        None => globals,
    }
}

/// Base URL and zone a config resolves to; absent fields take the defaults.
pub fn resolve(config: &RuntimeConfig) -> (String, AppTimeZone) {
    (
        normalize_base_url(
            config
                .api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL),
        ),
        resolve_time_zone(config.time_zone.as_deref()),
    )
}

fn cache(config: &RuntimeConfig) -> (String, AppTimeZone) {
    let (base, tz) = resolve(config);
    let base = API_BASE_URL.get_or_init(|| base).clone();
    let tz = *TIME_ZONE.get_or_init(|| tz);
    (base, tz)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let config = load_runtime_config().await;
    cache(&config).0
}

/// Synchronous view of the configured zone. Before `init` completes this
/// reads only the window globals.
pub fn current_time_zone() -> AppTimeZone {
    if let Some(tz) = TIME_ZONE.get() {
        return *tz;
    }
    resolve_time_zone(snapshot_from_globals().time_zone.as_deref())
}

/// Resolves every config source, caches the result, and returns the zone the
/// app is mounted with.
pub async fn init() -> AppTimeZone {
    let config = load_runtime_config().await;
    let (base, tz) = cache(&config);
    info!("API base URL: {}, time zone: {}", base, tz.name());
    tz
}
