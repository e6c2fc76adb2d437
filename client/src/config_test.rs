use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn parse_defaults_to_local_backend() {
    let cfg = ApiConfig::parse(None, None, None);
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.primary, DEFAULT_API_BASE);
    assert!(!cfg.locked);
}

#[test]
fn parse_trims_bases_and_splits_fallbacks() {
    let cfg = ApiConfig::parse(
        Some(" https://api.example.test/ "),
        Some("https://b.test/, ,http://localhost:8000"),
        Some("TRUE"),
    );
    assert_eq!(cfg.primary, "https://api.example.test");
    assert_eq!(cfg.fallbacks, vec!["https://b.test".to_owned(), "http://localhost:8000".to_owned()]);
    assert!(cfg.locked);
}

#[test]
fn parse_blank_primary_falls_back_to_default() {
    let cfg = ApiConfig::parse(Some("  "), None, Some("0"));
    assert_eq!(cfg.primary, DEFAULT_API_BASE);
    assert!(!cfg.locked);
}

#[test]
fn candidates_lead_with_remembered_base_without_duplicates() {
    let cfg = ApiConfig::parse(Some("https://a.test"), Some("https://b.test,https://a.test"), None);
    assert_eq!(cfg.candidates(None), vec!["https://a.test".to_owned(), "https://b.test".to_owned()]);
    assert_eq!(
        cfg.candidates(Some("https://b.test/")),
        vec!["https://b.test".to_owned(), "https://a.test".to_owned()]
    );
}

#[test]
fn locked_config_only_offers_primary() {
    let cfg = ApiConfig::parse(Some("https://a.test"), Some("https://b.test"), Some("yes"));
    assert_eq!(cfg.candidates(Some("https://c.test")), vec!["https://a.test".to_owned()]);
    assert!(cfg.is_api_base_locked());
}

#[test]
fn stored_config_reads_remembered_base_from_store() {
    let store = MemoryStore::new();
    store.set(API_BASE_KEY, "https://b.test").unwrap();
    let cfg = StoredApiConfig::new(ApiConfig::parse(Some("https://a.test"), None, None), &store);
    assert_eq!(cfg.api_base_candidates(), vec!["https://b.test".to_owned(), "https://a.test".to_owned()]);
    assert!(!cfg.is_api_base_locked());
}
