//! Configuration loading functionality.
//!
//! Settings come from the process environment. The optional property schema
//! comes from a YAML file named by `PAYROLL_SCHEMA_PATH`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{SyncError, SyncResult};

use super::types::{
    DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT, PropertySchema, Settings,
};

/// Environment variable holding the integration token.
pub const ENV_API_KEY: &str = "NOTION_API_KEY";
/// Environment variable holding the shifts database id.
pub const ENV_SHIFTS_DATABASE: &str = "DATABASE_ID_SHIFTS";
/// Environment variable holding the payroll database id.
pub const ENV_PAYROLL_DATABASE: &str = "DATABASE_ID_PAYROLL";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "NOTION_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "NOTION_TIMEOUT_SECS";
/// Environment variable naming the property schema file.
pub const ENV_SCHEMA_PATH: &str = "PAYROLL_SCHEMA_PATH";

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_payroll::config::Settings;
    ///
    /// let settings = Settings::from_env()?;
    /// println!("Shifts database: {}", settings.shifts_database_id);
    /// # Ok::<(), shift_payroll::error::SyncError>(())
    /// ```
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use shift_payroll::config::Settings;
    ///
    /// let vars = HashMap::from([
    ///     ("NOTION_API_KEY", "secret_abc"),
    ///     ("DATABASE_ID_SHIFTS", "shifts"),
    ///     ("DATABASE_ID_PAYROLL", "payroll"),
    /// ]);
    /// let settings = Settings::from_lookup(|name| vars.get(name).map(|v| v.to_string()))?;
    /// assert_eq!(settings.api_url, "https://api.notion.com/v1");
    /// # Ok::<(), shift_payroll::error::SyncError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| SyncError::MissingEnv {
                name: name.to_string(),
            })
        };

        let api_key = require(ENV_API_KEY)?;
        let shifts_database_id = require(ENV_SHIFTS_DATABASE)?;
        let payroll_database_id = require(ENV_PAYROLL_DATABASE)?;

        let api_url = get(ENV_API_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let schema = match get(ENV_SCHEMA_PATH) {
            Some(path) => PropertySchema::load(path)?,
            None => PropertySchema::default(),
        };

        Ok(Self {
            api_key,
            shifts_database_id,
            payroll_database_id,
            api_url,
            timeout,
            schema,
        })
    }
}

impl PropertySchema {
    /// Loads a property schema from a YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not a valid schema document.
    pub fn load<P: AsRef<Path>>(path: P) -> SyncResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SyncError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SyncError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

fn parse_timeout(raw: &str) -> SyncResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| SyncError::InvalidEnv {
            name: ENV_TIMEOUT_SECS.to_string(),
            message: format!("expected a whole number of seconds, got '{}'", raw),
        })
}

/// Returns the log filter named by `LOG_LEVEL`, or the default.
///
/// Read separately from [`Settings`] so logging can be set up before the
/// rest of the configuration is validated.
pub fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_LOG_LEVEL)
        .filter(|level| !level.trim().is_empty())
        .map(|level| normalize_log_level(&level))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Maps conventional level names and numeric levels onto tracing filter
/// directives.
///
/// Anything unrecognized is passed through so full `EnvFilter` directives
/// such as `debug,hyper=warn` keep working.
pub fn normalize_log_level(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "warning" | "30" => "warn".to_string(),
        "critical" | "fatal" | "40" | "50" => "error".to_string(),
        "10" => "debug".to_string(),
        "20" => "info".to_string(),
        "notset" | "0" => "trace".to_string(),
        "trace" | "debug" | "info" | "warn" | "error" | "off" => trimmed.to_ascii_lowercase(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_API_KEY, "secret_token"),
            (ENV_SHIFTS_DATABASE, "db_shifts"),
            (ENV_PAYROLL_DATABASE, "db_payroll"),
        ]
    }

    #[test]
    fn test_required_variables_only() {
        let settings = Settings::from_lookup(lookup_from(&required())).unwrap();
        assert_eq!(settings.api_key, "secret_token");
        assert_eq!(settings.shifts_database_id, "db_shifts");
        assert_eq!(settings.payroll_database_id, "db_payroll");
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.schema, PropertySchema::default());
    }

    #[test]
    fn test_missing_api_key_is_reported_by_name() {
        let vars = [(ENV_SHIFTS_DATABASE, "a"), (ENV_PAYROLL_DATABASE, "b")];
        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, SyncError::MissingEnv { ref name } if name == ENV_API_KEY));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = required();
        vars[2] = (ENV_PAYROLL_DATABASE, "  ");
        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, SyncError::MissingEnv { ref name } if name == ENV_PAYROLL_DATABASE));
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = required();
        vars.push((ENV_API_URL, "http://127.0.0.1:9000/v1/"));
        vars.push((ENV_TIMEOUT_SECS, "5"));
        let settings = Settings::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(settings.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_is_invalid_env() {
        let mut vars = required();
        vars.push((ENV_TIMEOUT_SECS, "soon"));
        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, SyncError::InvalidEnv { ref name, .. } if name == ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_missing_schema_file_is_config_not_found() {
        let mut vars = required();
        vars.push((ENV_SCHEMA_PATH, "/nonexistent/schema.yaml"));
        let err = Settings::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, SyncError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_schema_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("schema-{}.yaml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "employee:\n  rate: \"Day rate\"").unwrap();

        let schema = PropertySchema::load(&path).unwrap();
        assert_eq!(schema.employee.rate, "Day rate");
        assert_eq!(schema.employee.name, "Name");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_schema_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("schema-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, "shift: [unclosed").unwrap();

        let err = PropertySchema::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::ConfigParseError { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(lookup_from(&[])), "info");
        assert_eq!(log_filter(lookup_from(&[(ENV_LOG_LEVEL, "")])), "info");
        assert_eq!(log_filter(lookup_from(&[(ENV_LOG_LEVEL, "DEBUG")])), "debug");
    }

    #[test]
    fn test_normalize_log_level() {
        assert_eq!(normalize_log_level("INFO"), "info");
        assert_eq!(normalize_log_level("WARNING"), "warn");
        assert_eq!(normalize_log_level("CRITICAL"), "error");
        assert_eq!(normalize_log_level("10"), "debug");
        assert_eq!(normalize_log_level("debug,hyper=warn"), "debug,hyper=warn");
    }
}
