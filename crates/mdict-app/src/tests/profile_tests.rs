use mdict_config::Config;

use crate::profile::Profile;

#[test]
fn test_partial_profile_keeps_defaults() {
    let raw = r#"{
        "name": "work",
        "value": {
            "network": { "base_url": "http://dict.lan:5248" },
            "cache": { "lookup_ms": 1000 }
        }
    }"#;

    let profile: Profile = serde_json::from_str(raw).unwrap();
    let defaults = Config::new();

    assert_eq!(profile.name, "work");
    assert_eq!(profile.value.network.base_url, "http://dict.lan:5248");
    assert_eq!(profile.value.network.suggest_limit, 20);
    assert_eq!(profile.value.ui.suggest_debounce_ms, 300);
    assert_eq!(profile.value.delta_time, defaults.delta_time);
}

#[test]
fn test_profile_round_trips() {
    let profile = Profile {
        name: "main".into(),
        value: Config::new(),
    };

    let json = serde_json::to_string_pretty(&profile).unwrap();
    let back: Profile = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, "main");
    assert_eq!(back.value.network.base_url, profile.value.network.base_url);
    assert_eq!(back.value.storage_path, profile.value.storage_path);
}
