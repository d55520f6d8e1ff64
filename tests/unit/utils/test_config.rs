use voat_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};

// Each test uses its own variable, tests run in parallel

fn set(name: &str, value: &str) {
    unsafe { std::env::set_var(name, value) };
}

#[test]
fn test_get_env_or_default_parses_and_trims() {
    set("VOAT_TEST_TIMEOUT_VALID", " 45 ");
    assert_eq!(get_env_or_default("VOAT_TEST_TIMEOUT_VALID", 30u64), 45);
}

#[test]
fn test_get_env_or_default_falls_back() {
    set("VOAT_TEST_TIMEOUT_INVALID", "soon");
    assert_eq!(get_env_or_default("VOAT_TEST_TIMEOUT_INVALID", 30u64), 30);
    assert_eq!(get_env_or_default("VOAT_TEST_TIMEOUT_UNSET", 30u64), 30);
}

#[test]
fn test_get_env_or_none() {
    set("VOAT_TEST_USER_SET", "bot");
    set("VOAT_TEST_USER_EMPTY", "  ");
    assert_eq!(
        get_env_or_none::<String>("VOAT_TEST_USER_SET"),
        Some("bot".to_string())
    );
    assert_eq!(get_env_or_none::<String>("VOAT_TEST_USER_EMPTY"), None);
    assert_eq!(get_env_or_none::<String>("VOAT_TEST_USER_UNSET"), None);
}

#[test]
fn test_get_env_flag() {
    set("VOAT_TEST_FLAG_YES", "Yes");
    set("VOAT_TEST_FLAG_ZERO", "0");
    set("VOAT_TEST_FLAG_GARBAGE", "maybe");
    assert!(get_env_flag("VOAT_TEST_FLAG_YES", false));
    assert!(!get_env_flag("VOAT_TEST_FLAG_ZERO", true));
    assert!(get_env_flag("VOAT_TEST_FLAG_GARBAGE", true));
    assert!(!get_env_flag("VOAT_TEST_FLAG_UNSET", false));
}
