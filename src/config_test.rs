use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_polls_every_minute_on_same_origin() {
    let config = ClientConfig::default();
    assert_eq!(config.poll_interval, Duration::from_secs(60));
    assert_eq!(config.api_base, "");
}

#[test]
fn missing_values_match_default() {
    assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
}

// =============================================================
// Poll interval
// =============================================================

#[test]
fn poll_secs_parses_trimmed_number() {
    let config = ClientConfig::from_values(Some(" 15 "), None);
    assert_eq!(config.poll_interval, Duration::from_secs(15));
}

#[test]
fn poll_secs_zero_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("0"), None);
    assert_eq!(config.poll_interval, Duration::from_secs(DEFAULT_POLL_SECS));
}

#[test]
fn poll_secs_garbage_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("soon"), None);
    assert_eq!(config.poll_interval, Duration::from_secs(DEFAULT_POLL_SECS));
}

// =============================================================
// API base
// =============================================================

#[test]
fn api_base_strips_trailing_slashes() {
    let config = ClientConfig::from_values(None, Some("https://gym.example.com//"));
    assert_eq!(config.api_base, "https://gym.example.com");
}

#[test]
fn api_client_uses_configured_base() {
    let config = ClientConfig::from_values(None, Some("http://localhost:8080/"));
    assert_eq!(config.api().url("/api/user/me"), "http://localhost:8080/api/user/me");
}
