#[cfg(feature = "ssr")]
use std::{env, fmt::Display, str::FromStr};

#[cfg(feature = "ssr")]
use leptos::logging::{log, warn};

/// Process configuration for the review server, read once at startup.
/// `PLACE_ID` and `GOOGLE_API_KEY` identify the business and authenticate
/// against the places API; `PORT` is where the site and `/api/reviews`
/// listen.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    pub place_id: String,
    pub api_key: String,
    pub port: u16,
}

#[cfg(feature = "ssr")]
impl Config {
    pub fn from_env() -> Self {
        Self {
            // Empty credentials are allowed to keep the server bootable; the
            // upstream rejects such requests and the adapter surfaces that
            // as a 500 with details.
            place_id: try_load("PLACE_ID", ""),
            api_key: try_load("GOOGLE_API_KEY", ""),
            port: try_load("PORT", "4000"),
        }
    }
}

#[cfg(feature = "ssr")]
fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

#[cfg(feature = "ssr")]
fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            log!("{key} not set, using default: {default:?}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
