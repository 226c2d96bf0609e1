pub const BRANCH_ID_ENV: &str = "LMS_BRANCH_ID";
pub const LOG_LEVEL_ENV: &str = "LMS_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "LMS_LOG_JSON";

const DEFAULT_BRANCH_ID: &str = "main";
const DEFAULT_LOG_LEVEL: &str = "info";

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> &str;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for a library branch
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unset or blank values fall back to the defaults of `Configuration::new`.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let read = |key: &str| lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let mut config = Configuration::new(
            read(BRANCH_ID_ENV).as_deref().unwrap_or(DEFAULT_BRANCH_ID));
        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(json) = read(LOG_JSON_ENV) {
            config.json_logs = matches!(json.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}
