//! Session-scoped banner of high-visibility alerts for admins.

use pegasus_core::GlobalAlert;

pub struct AlertBanner {
    alerts: Vec<GlobalAlert>,
}

impl AlertBanner {
    /// Seeded with the standing critical alert every admin session opens with
    pub fn new() -> Self {
        Self {
            alerts: vec![GlobalAlert {
                id: "AL-102".to_string(),
                message: "CRITICAL: High-Impact Collision Detected - Expressway Zone".to_string(),
                node: "CAM-002".to_string(),
            }],
        }
    }

    pub fn alerts(&self) -> &[GlobalAlert] {
        &self.alerts
    }

    pub fn raise(&mut self, alert: GlobalAlert) {
        tracing::info!(alert = %alert.id, node = %alert.node, "global alert raised");
        self.alerts.push(alert);
    }

    /// Dismissal is session-local and permanent; unknown ids are ignored
    pub fn dismiss(&mut self, id: &str) {
        self.alerts.retain(|a| a.id != id);
    }
}

impl Default for AlertBanner {
    fn default() -> Self {
        Self::new()
    }
}
