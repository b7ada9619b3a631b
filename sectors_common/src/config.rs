//! Environment-based configuration with legacy variable-name fallbacks.
//!
//! Values are resolved once at startup. Each setting has a chain of variable
//! names; the first non-empty one wins. Dotenv files are loaded beforehand via
//! [`load_env_files`] and never override variables already set in the process.
use std::path::Path;

use log::{info, warn};

use crate::error::SectorsError;

/// Lookup chain for the market-data API key.
pub const FMP_API_KEY_VARS: [&str; 2] = ["FMP_API_KEY", "NEXT_PUBLIC_FMP_API_KEY"];
/// Lookup chain for the destination base URL.
pub const SUPABASE_URL_VARS: [&str; 2] = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
/// Lookup chain for the destination service credential.
pub const SUPABASE_KEY_VARS: [&str; 2] = ["SUPABASE_SERVICE_ROLE_KEY", "SUPABASE_SERVICE_KEY"];

/// Project-level dotenv file, tried first.
pub const PARENT_ENV_FILE: &str = "../.env.local";
/// Dotenv file in the working directory, tried when the project-level one is missing.
pub const LOCAL_ENV_FILE: &str = ".env";

/// Secrets and URLs needed by the job.
#[derive(Clone)]
pub struct Config {
    /// Financial Modeling Prep API key.
    pub fmp_api_key: String,
    /// Supabase project URL, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Supabase service-role key.
    pub supabase_key: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("fmp_api_key", &"<redacted>")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, SectorsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    ///
    /// Logs which settings were found when any is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SectorsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fmp_api_key = first_set(&lookup, &FMP_API_KEY_VARS);
        let supabase_url = first_set(&lookup, &SUPABASE_URL_VARS);
        let supabase_key = first_set(&lookup, &SUPABASE_KEY_VARS);

        match (fmp_api_key, supabase_url, supabase_key) {
            (Some(fmp_api_key), Some(supabase_url), Some(supabase_key)) => Ok(Self {
                fmp_api_key,
                supabase_url,
                supabase_key,
            }),
            (fmp_api_key, supabase_url, supabase_key) => {
                let checks = [
                    (FMP_API_KEY_VARS[0], fmp_api_key.is_some()),
                    (SUPABASE_URL_VARS[0], supabase_url.is_some()),
                    (SUPABASE_KEY_VARS[0], supabase_key.is_some()),
                ];
                warn!("Missing environment variables:");
                for (name, found) in checks {
                    warn!("  {} found: {}", name, found);
                }
                let missing: Vec<&str> = checks
                    .iter()
                    .filter(|(_, found)| !found)
                    .map(|(name, _)| *name)
                    .collect();
                Err(SectorsError::MissingConfig(missing.join(", ")))
            }
        }
    }
}

fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Load dotenv files: `../.env.local` first, then `.env` in the working
/// directory. Missing files are not an error.
pub fn load_env_files() {
    load_env_files_from(Path::new(PARENT_ENV_FILE), Path::new(LOCAL_ENV_FILE));
}

/// Load `primary`, or `fallback` if `primary` cannot be read.
///
/// Variables already present in the process environment are left untouched.
fn load_env_files_from(primary: &Path, fallback: &Path) {
    match dotenvy::from_path(primary) {
        Ok(()) => info!("Loaded {} from parent directory", primary.display()),
        Err(e) => {
            info!("Could not load {}: {}", primary.display(), e);
            match dotenvy::from_path(fallback) {
                Ok(()) => info!("Loaded {} from current directory", fallback.display()),
                Err(_) => info!("No .env or .env.local file found. Using system environment variables."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn primary_names_win() {
        let config = Config::from_lookup(lookup_from(&[
            ("FMP_API_KEY", "fmp"),
            ("NEXT_PUBLIC_FMP_API_KEY", "public-fmp"),
            ("SUPABASE_URL", "https://db.example"),
            ("SUPABASE_SERVICE_ROLE_KEY", "role"),
        ]))
        .unwrap();
        assert_eq!(config.fmp_api_key, "fmp");
        assert_eq!(config.supabase_url, "https://db.example");
        assert_eq!(config.supabase_key, "role");
    }

    #[test]
    fn legacy_names_are_fallbacks() {
        let config = Config::from_lookup(lookup_from(&[
            ("FMP_API_KEY", ""),
            ("NEXT_PUBLIC_FMP_API_KEY", "public-fmp"),
            ("NEXT_PUBLIC_SUPABASE_URL", "https://public.example"),
            ("SUPABASE_SERVICE_KEY", "service"),
        ]))
        .unwrap();
        assert_eq!(config.fmp_api_key, "public-fmp");
        assert_eq!(config.supabase_url, "https://public.example");
        assert_eq!(config.supabase_key, "service");
    }

    #[test]
    fn reports_every_missing_setting() {
        let err = Config::from_lookup(lookup_from(&[("SUPABASE_URL", "https://db.example")]))
            .unwrap_err();
        match err {
            SectorsError::MissingConfig(missing) => {
                assert_eq!(missing, "FMP_API_KEY, SUPABASE_SERVICE_ROLE_KEY")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = Config {
            fmp_api_key: "secret-fmp".into(),
            supabase_url: "https://db.example".into(),
            supabase_key: "secret-role".into(),
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("https://db.example"));
    }

    #[test]
    fn primary_env_file_wins_and_keeps_existing_variables() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join(".env.local");
        let fallback = dir.path().join(".env");
        fs::write(
            &primary,
            "SECTORS_TEST_PRIMARY_ONLY=from-primary\nSECTORS_TEST_PRESET=from-file\n",
        )
        .unwrap();
        fs::write(&fallback, "SECTORS_TEST_FALLBACK_SKIPPED=from-fallback\n").unwrap();
        // Names are unique to this test; no other test reads or writes them.
        unsafe { std::env::set_var("SECTORS_TEST_PRESET", "from-process") };

        load_env_files_from(&primary, &fallback);

        assert_eq!(std::env::var("SECTORS_TEST_PRIMARY_ONLY").unwrap(), "from-primary");
        assert_eq!(std::env::var("SECTORS_TEST_PRESET").unwrap(), "from-process");
        assert!(std::env::var("SECTORS_TEST_FALLBACK_SKIPPED").is_err());
    }

    #[test]
    fn falls_back_to_local_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join(".env");
        fs::write(&fallback, "SECTORS_TEST_FROM_FALLBACK=local\n").unwrap();

        load_env_files_from(&dir.path().join(".env.local"), &fallback);

        assert_eq!(std::env::var("SECTORS_TEST_FROM_FALLBACK").unwrap(), "local");
    }

    #[test]
    fn missing_env_files_are_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        load_env_files_from(&dir.path().join(".env.local"), &dir.path().join(".env"));
        assert!(std::env::var("SECTORS_TEST_NEVER_DEFINED").is_err());
    }
}
