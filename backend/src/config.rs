//! Server configuration read from the environment.

use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "CATALOGUE_DATA_DIR";
pub const ANONYMOUS_ACCESS_VAR: &str = "CATALOGUE_ANONYMOUS_ACCESS";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueConfig {
    /// Directory holding one JSON file per dataset.
    pub data_dir: PathBuf,
    /// When false, sessions are reported as unauthenticated.
    pub anonymous_access: bool,
}

impl CatalogueConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_VAR).unwrap_or("data".to_string());
        let anonymous_access = match lookup(ANONYMOUS_ACCESS_VAR) {
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                tracing::warn!("{ANONYMOUS_ACCESS_VAR}: unrecognised value {value:?}, denying anonymous access");
                false
            }),
            None => true,
        };
        Self { data_dir: PathBuf::from(data_dir), anonymous_access }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> CatalogueConfig {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        CatalogueConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.anonymous_access);
    }

    #[test]
    fn overrides() {
        let config = config(&[(DATA_DIR_VAR, "/srv/catalogue"), (ANONYMOUS_ACCESS_VAR, "off")]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/catalogue"));
        assert!(!config.anonymous_access);
    }

    #[test]
    fn garbage_flag_denies_access() {
        assert!(!config(&[(ANONYMOUS_ACCESS_VAR, "maybe")]).anonymous_access);
    }
}
