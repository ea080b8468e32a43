//! Authentication status reported by the identity provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AuthStatus {
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// What the catalogue view does for a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueGate {
    ShowLoading,
    Render,
    /// Hand control back to the identity provider; render nothing.
    Redirect,
}

impl AuthStatus {
    pub fn gate(&self) -> CatalogueGate {
        match self {
            AuthStatus::Pending => CatalogueGate::ShowLoading,
            AuthStatus::Authenticated => CatalogueGate::Render,
            AuthStatus::Unauthenticated => CatalogueGate::Redirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_authenticated_renders() {
        assert_eq!(AuthStatus::default().gate(), CatalogueGate::ShowLoading);
        assert_eq!(AuthStatus::Authenticated.gate(), CatalogueGate::Render);
        assert_eq!(AuthStatus::Unauthenticated.gate(), CatalogueGate::Redirect);
    }
}
