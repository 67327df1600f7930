//! Scene, hotspot, and tour records: the contract with the data collaborator.
//!
//! Field names mirror the mock db's JSON shape (camelCase, positions as
//! three-element arrays). All records are immutable during a viewing session.

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotKind {
    Text,
    Image,
    Video,
    Link,
    Navigation,
}

impl HotspotKind {
    /// Kinds that carry external media and therefore require `mediaUrl`.
    pub fn requires_media_url(self) -> bool {
        matches!(self, HotspotKind::Image | HotspotKind::Video | HotspotKind::Link)
    }
}

/// Icon variant rendered for a marker. Everything that is not image or
/// video falls back to the text icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    Text,
    Image,
    Video,
}

impl MarkerIcon {
    /// Stable index used by the marker shader.
    pub fn index(self) -> u32 {
        match self {
            MarkerIcon::Text => 0,
            MarkerIcon::Image => 1,
            MarkerIcon::Video => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    /// Position in the panoramic sphere's local coordinate frame.
    pub position: Vec3,
    pub kind: HotspotKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub target_scene_id: Option<String>,
}

impl Hotspot {
    pub fn icon(&self) -> MarkerIcon {
        match self.kind {
            HotspotKind::Image => MarkerIcon::Image,
            HotspotKind::Video => MarkerIcon::Video,
            _ => MarkerIcon::Text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourMode {
    Web,
    Vr,
    Both,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub project_id: String,
    pub mode: TourMode,
}
