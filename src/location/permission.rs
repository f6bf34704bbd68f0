//! Location permission model.
//!
//! Mirrors the platform behaviour the flow was designed around: the first
//! refusal can still be reconsidered (a rationale should be shown), a second
//! refusal is permanent and further requests are denied without a prompt.

/// Current permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    #[default]
    NotDetermined,
    Granted,
    /// Refused once; asking again is allowed.
    Denied,
    /// Refused for good; only the user can change it outside the app.
    DeniedPermanently,
}

/// User-facing message after a refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAdvisory {
    RationaleRequired,
    EnableInSettings,
}

impl PermissionAdvisory {
    pub fn message(&self) -> &'static str {
        match self {
            PermissionAdvisory::RationaleRequired => {
                "Location Permission Required for this feature"
            }
            PermissionAdvisory::EnableInSettings => {
                "Location Permission Required. Enable in Settings"
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PermissionTracker {
    status: PermissionStatus,
}

impl PermissionTracker {
    pub fn new(status: PermissionStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    pub fn has_permission(&self) -> bool {
        self.status == PermissionStatus::Granted
    }

    /// True after a single refusal.
    pub fn should_show_rationale(&self) -> bool {
        self.status == PermissionStatus::Denied
    }

    /// Whether a request should show the prompt. Permanently denied requests
    /// resolve immediately.
    pub fn needs_prompt(&self) -> bool {
        matches!(
            self.status,
            PermissionStatus::NotDetermined | PermissionStatus::Denied
        )
    }

    /// Record the user's answer to the prompt. Returns the advisory to show
    /// on refusal.
    pub fn record_decision(&mut self, granted: bool) -> Option<PermissionAdvisory> {
        if granted {
            self.status = PermissionStatus::Granted;
            tracing::info!("location permission granted");
            return None;
        }

        self.status = match self.status {
            PermissionStatus::NotDetermined => PermissionStatus::Denied,
            _ => PermissionStatus::DeniedPermanently,
        };
        tracing::info!(status = ?self.status, "location permission refused");
        Some(self.advisory())
    }

    /// Advisory for the current (refused) state.
    pub fn advisory(&self) -> PermissionAdvisory {
        if self.should_show_rationale() {
            PermissionAdvisory::RationaleRequired
        } else {
            PermissionAdvisory::EnableInSettings
        }
    }
}
