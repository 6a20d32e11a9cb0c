//! API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base URL is baked in at build time from `AUTOPOST_API_URL` and can be
//! overridden at runtime through `window.AUTOPOST_CONFIG.api_base_url`, so a
//! static deployment can point at another backend without rebuilding.
//! Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Public backend used when no build-time or runtime value is supplied.
pub const DEFAULT_API_BASE_URL: &str = "https://social-media-autoposting.onrender.com";

/// Frontend configuration resolved once per page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads the build-time value, then applies any runtime override.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(option_env!("AUTOPOST_API_URL"));
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    fn from_build_env(api_base_url: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .and_then(normalize_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()),
        }
    }

    /// Joins `path` onto the configured base URL with exactly one slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim().trim_start_matches('/')
        )
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTOPOST_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;

    Some(RuntimeConfig {
        api_base_url: normalize_value(&value),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
