//! Session store: the active role drives which route table is visible.

use crate::kv::KvStore;
use pegasus_core::Role;
use std::sync::Arc;

pub const ROLE_KEY: &str = "pegasus_role";

/// Holds the authenticated role for the lifetime of the session.
/// An absent role means logged out.
pub struct SessionStore {
    kv: Arc<dyn KvStore>,
    role: Option<Role>,
}

impl SessionStore {
    /// Restore the session from persisted state. An unknown persisted value
    /// is treated as logged out.
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        let role = kv
            .get(ROLE_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!("role snapshot unavailable: {}", e);
                None
            })
            .and_then(|raw| Role::parse(&raw));
        Self { kv, role }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn login(&mut self, role: Role) {
        self.role = Some(role);
        if let Err(e) = self.kv.set(ROLE_KEY, role.as_str()) {
            tracing::warn!("failed to persist role: {}", e);
        }
        tracing::info!("session started as {}", role.as_str());
    }

    pub fn logout(&mut self) {
        self.role = None;
        if let Err(e) = self.kv.remove(ROLE_KEY) {
            tracing::warn!("failed to clear persisted role: {}", e);
        }
        tracing::info!("session ended");
    }
}
