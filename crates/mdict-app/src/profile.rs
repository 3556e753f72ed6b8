use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use mdict_config::Config;
use serde::{Deserialize, Serialize};

fn profiles_dir() -> PathBuf {
    env::var("MDICT_PROFILE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load a profile by name, falling back to environment defaults if it does not exist
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(&profile_file)
            .with_context(|| format!("reading {}", profile_file.display()))?;
        let profile: Profile = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", profile_file.display()))?;
        tracing::info!("Loaded profile {}", profile.name);
        Ok(profile.value)
    } else {
        tracing::info!("Profile {name} not found, using environment defaults");
        Ok(Config::new())
    }
}

/// Write the current defaults as a new named profile
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(profiles_dir())?;

    let profile = Profile {
        name: new_name.into(),
        value: Config::new(),
    };
    let file = profiles_dir().join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}
