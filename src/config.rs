use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Status code used when a requested user does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// 200 with a descriptive body.
    #[default]
    Lenient,
    /// 404 with a descriptive body.
    Strict,
}

impl FromStr for NotFoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" | "200" => Ok(NotFoundPolicy::Lenient),
            "strict" | "404" => Ok(NotFoundPolicy::Strict),
            other => Err(format!("unknown not-found policy `{}`", other)),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub not_found: NotFoundPolicy,
    pub request_timeout_secs: u64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from a variable lookup, applying defaults for anything
    /// missing or unparsable.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST")
                .and_then(|v| v.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            not_found: match var("NOT_FOUND_STATUS") {
                Some(v) => v.parse().unwrap_or_else(|e| {
                    // The subscriber is not up yet when CONFIG is first read.
                    eprintln!("{}, falling back to lenient", e);
                    NotFoundPolicy::default()
                }),
                None => NotFoundPolicy::default(),
            },
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
