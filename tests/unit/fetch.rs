use super::*;

#[test]
fn blank_input_is_missing() {
    assert_eq!(validate_url(""), Err(FetchError::MissingInput));
    assert_eq!(validate_url("   \t"), Err(FetchError::MissingInput));
}

#[test]
fn relative_or_garbage_urls_are_invalid() {
    assert_eq!(validate_url("cat.gif"), Err(FetchError::InvalidUrl));
    assert_eq!(validate_url("/images/cat.gif"), Err(FetchError::InvalidUrl));
    assert_eq!(validate_url("http://"), Err(FetchError::InvalidUrl));
}

#[test]
fn only_http_schemes_pass() {
    let url = validate_url("  https://example.com/a.gif ").unwrap();
    assert_eq!(url.host_str(), Some("example.com"));
    assert!(validate_url("http://example.com/a.gif").is_ok());

    for (raw, scheme) in [
        ("file:///etc/passwd", "file"),
        ("ftp://example.com/a.gif", "ftp"),
        ("data:image/gif;base64,R0lGODlh", "data"),
        ("gopher://example.com/", "gopher"),
    ] {
        assert_eq!(
            validate_url(raw),
            Err(FetchError::DisallowedScheme(scheme.to_string())),
            "{raw}"
        );
    }
}

#[test]
fn disallowed_scheme_is_rejected_before_any_request() {
    let fetcher = Fetcher::default();
    assert_eq!(
        fetcher.fetch("file:///etc/passwd"),
        Err(FetchError::DisallowedScheme("file".to_string()))
    );
    assert_eq!(
        fetcher.fetch("ftp://127.0.0.1:1/a.gif"),
        Err(FetchError::DisallowedScheme("ftp".to_string()))
    );
}

#[test]
fn body_cap_is_ten_mebibytes() {
    assert_eq!(MAX_GIF_BYTES, 10_485_760);
    assert!(check_body_len(MAX_GIF_BYTES).is_ok());
    assert_eq!(check_body_len(MAX_GIF_BYTES + 1), Err(FetchError::TooLarge));
}

#[test]
fn config_defaults_and_partial_json() {
    let cfg = FetchConfig::default();
    assert!(cfg.user_agent.starts_with("gifspan/"));
    assert_eq!(cfg.timeout_secs, None);

    let cfg: FetchConfig = serde_json::from_str(r#"{ "timeout_secs": 5 }"#).unwrap();
    assert_eq!(cfg.timeout_secs, Some(5));
    assert!(cfg.user_agent.starts_with("gifspan/"));

    let fetcher = Fetcher::new(cfg.clone());
    assert_eq!(fetcher.config(), &cfg);
}
