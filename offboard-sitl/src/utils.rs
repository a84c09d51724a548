use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

const OFFBOARD_SITL_CONFIG_ENV_NAME: &str = "OFFBOARD_SITL_CONFIG_PATH";

/// Get config path from input or env OFFBOARD_SITL_CONFIG_PATH
pub fn get_config_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
    if config_path.is_some() {
        config_path
    } else {
        std::env::var(OFFBOARD_SITL_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_get_config_path() {
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        //
        std::env::set_var(OFFBOARD_SITL_CONFIG_ENV_NAME, "b.toml");
        let path = get_config_path(Some(PathBuf::from("a.toml")));
        assert_eq!(path.unwrap(), PathBuf::from("a.toml"));
        let path = get_config_path(None);
        assert_eq!(path.unwrap(), PathBuf::from("b.toml"));
        std::env::remove_var(OFFBOARD_SITL_CONFIG_ENV_NAME);

        let path = get_config_path(None);
        assert!(path.is_none());
    }
}
