use common::auth::AuthStatus;

use crate::config::CatalogueConfig;

/// No identity provider is wired in yet, so the answer comes from
/// configuration: anonymous sessions are either let in or sent to sign-in.
pub async fn session_auth_status() -> anyhow::Result<AuthStatus> {
    let status = auth_status_for(&CatalogueConfig::from_env());
    tracing::info!("session auth status: {:?}", status);
    Ok(status)
}

pub fn auth_status_for(config: &CatalogueConfig) -> AuthStatus {
    if config.anonymous_access {
        AuthStatus::Authenticated
    } else {
        AuthStatus::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn follows_anonymous_access_flag() {
        let mut config = CatalogueConfig { data_dir: PathBuf::from("data"), anonymous_access: true };
        assert_eq!(auth_status_for(&config), AuthStatus::Authenticated);
        config.anonymous_access = false;
        assert_eq!(auth_status_for(&config), AuthStatus::Unauthenticated);
    }
}
