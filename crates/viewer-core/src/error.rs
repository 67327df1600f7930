use crate::model::HotspotKind;
use thiserror::Error;

/// Non-fatal errors surfaced to the host through the error channel.
/// None of these abort rendering.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ViewerError {
    #[error("panorama texture failed to load from {url}: {reason}")]
    TextureLoad { url: String, reason: String },
    #[error("tour {0} not found")]
    TourNotFound(String),
    #[error("tour {0} has no scenes")]
    NoScenes(String),
}

/// Load-time hotspot validation diagnostics. Offending hotspots are
/// dropped from the scene rather than crashing on click later.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HotspotIssue {
    #[error("hotspot {id}: kind {kind:?} requires mediaUrl")]
    MissingMediaUrl { id: String, kind: HotspotKind },
    #[error("hotspot {id}: navigation requires targetSceneId")]
    MissingTarget { id: String },
    #[error("hotspot {id}: target scene {target} is not part of this tour")]
    UnresolvedTarget { id: String, target: String },
}
