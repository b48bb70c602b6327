use super::*;

#[test]
fn defaults_match_page_behavior() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.cart_notice_ms, 3_000);
    assert_eq!(cfg.success_banner_ms, 5_000);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn from_json_overrides_subset() {
    let cfg = PageConfig::from_json(r#"{"success_banner_ms": 8000}"#).unwrap();
    assert_eq!(cfg.success_banner_ms, 8_000);
    assert_eq!(cfg.cart_notice_ms, DEFAULT_CART_NOTICE_MS);
    assert_eq!(cfg.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
}

#[test]
fn from_json_overrides_everything() {
    let cfg = PageConfig::from_json(
        r#"{"theme_storage_key": "storefront-theme", "cart_notice_ms": 1500, "success_banner_ms": 2500}"#,
    )
    .unwrap();
    assert_eq!(
        cfg,
        PageConfig { theme_storage_key: "storefront-theme".into(), cart_notice_ms: 1_500, success_banner_ms: 2_500 }
    );
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = PageConfig::from_json(r#"{"cart_notice": 10}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn from_json_rejects_negative_delay() {
    assert!(PageConfig::from_json(r#"{"cart_notice_ms": -1}"#).is_err());
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = PageConfig::from_json(r#"{"theme_storage_key": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyStorageKey));
}

#[test]
fn from_inline_falls_back_to_defaults() {
    assert_eq!(PageConfig::from_inline(None), PageConfig::default());
    assert_eq!(PageConfig::from_inline(Some("   \n ")), PageConfig::default());
    assert_eq!(PageConfig::from_inline(Some("[1, 2]")), PageConfig::default());
}

#[test]
fn from_inline_uses_valid_override() {
    let cfg = PageConfig::from_inline(Some(" {\"cart_notice_ms\": 100} "));
    assert_eq!(cfg.cart_notice_ms, 100);
}

#[test]
fn load_without_browser_is_default() {
    assert_eq!(PageConfig::load(), PageConfig::default());
}
