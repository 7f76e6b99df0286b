use crate::config::{Config, NotFoundPolicy};
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn test_not_found_policy_parsing() {
    assert_eq!("lenient".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Lenient));
    assert_eq!(" Strict ".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Strict));
    assert_eq!("404".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Strict));
    assert_eq!("200".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Lenient));
    assert!("teapot".parse::<NotFoundPolicy>().is_err());
    assert_eq!(NotFoundPolicy::default(), NotFoundPolicy::Lenient);
}

#[test]
fn test_config_defaults_listen_on_all_interfaces() {
    let config = Config::from_vars(|_| None);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.not_found, NotFoundPolicy::Lenient);
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_config_reads_variables() {
    let config = Config::from_vars(|key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "PORT" => Some("8080".to_string()),
        "NOT_FOUND_STATUS" => Some("strict".to_string()),
        "REQUEST_TIMEOUT_SECS" => Some("not-a-number".to_string()),
        _ => None,
    });
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8080);
    assert_eq!(config.not_found, NotFoundPolicy::Strict);
    assert_eq!(config.request_timeout_secs, 30);
}
