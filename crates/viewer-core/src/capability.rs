//! Immersive-capability snapshot and the secure-context gate.
//!
//! The snapshot is computed once per viewer mount by the platform probe
//! and never mutated afterwards; a new mount produces a new snapshot.

use serde::{Deserialize, Serialize};

/// Advisory headset hints derived from the user-agent string. These never
/// gate anything; they exist for host chrome and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadsetHints {
    pub likely_quest: bool,
    pub likely_pico: bool,
    pub likely_wolvic: bool,
    pub likely_steamvr: bool,
    pub likely_windows_mr: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySnapshot {
    pub has_immersive_api: bool,
    pub immersive_vr_supported: bool,
    pub immersive_ar_supported: bool,
    #[serde(default)]
    pub hints: HeadsetHints,
}

impl CapabilitySnapshot {
    /// Snapshot for contexts with no immersive API at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn allows_immersive(&self) -> bool {
        self.immersive_vr_supported
    }

    /// Apply the secure-context gate: when the page is not served over a
    /// secure transport or loopback, immersive VR is reported unsupported
    /// regardless of what the platform answered.
    pub fn gated(mut self, secure_context: bool) -> Self {
        if !secure_context {
            self.immersive_vr_supported = false;
        }
        self
    }
}

/// Immersive session creation is only attempted over https or from a
/// loopback host.
pub fn secure_context_allows_immersive(protocol: &str, hostname: &str) -> bool {
    protocol == "https:" || matches!(hostname, "localhost" | "127.0.0.1" | "::1" | "[::1]")
}

pub fn hints_from_user_agent(ua: &str) -> HeadsetHints {
    let lower = ua.to_ascii_lowercase();
    let has = |needle: &str| lower.contains(needle);
    HeadsetHints {
        likely_quest: has("oculusbrowser") || has("quest"),
        likely_pico: has("picobrowser") || has("picovr"),
        likely_wolvic: has("wolvic"),
        likely_steamvr: has("steamvr"),
        likely_windows_mr: has("windows mixed reality"),
    }
}
