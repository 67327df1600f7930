//! Read-only mock data store: the contract with the external data
//! collaborator.
//!
//! Kind-specific hotspot validation happens here, at load time. Offending
//! hotspots are dropped with a diagnostic instead of crashing on click.

use crate::constants::MAX_MARKERS;
use crate::error::{HotspotIssue, ViewerError};
use crate::model::{Scene, Tour};
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};

/// Scene row as stored: a scene plus the tour it belongs to.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    pub tour_id: String,
    #[serde(flatten)]
    pub scene: Scene,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MockDb {
    #[serde(default)]
    pub tours: Vec<Tour>,
    #[serde(default)]
    pub scenes: Vec<SceneRecord>,
}

impl MockDb {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get_tour(&self, tour_id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == tour_id)
    }

    /// Scenes for a tour, in stored order, without validation.
    pub fn list_scenes_for_tour(&self, tour_id: &str) -> Vec<Scene> {
        self.scenes
            .iter()
            .filter(|r| r.tour_id == tour_id)
            .map(|r| r.scene.clone())
            .collect()
    }

    /// Resolves a tour and its validated scene list. An unknown tour is an
    /// explicit error; a tour with zero scenes is not, the host renders
    /// the empty state instead.
    pub fn load_tour(&self, tour_id: &str) -> Result<(Tour, Vec<Scene>, Vec<HotspotIssue>), ViewerError> {
        let tour = self
            .get_tour(tour_id)
            .cloned()
            .ok_or_else(|| ViewerError::TourNotFound(tour_id.to_string()))?;
        let mut scenes = self.list_scenes_for_tour(tour_id);
        let issues = validate_scenes(&mut scenes);
        for issue in &issues {
            log::warn!("[store] dropped invalid hotspot: {issue}");
        }
        for scene in &scenes {
            if scene.hotspots.len() > MAX_MARKERS {
                log::warn!(
                    "[store] scene {} has {} hotspots; only the first {} are shown",
                    scene.id,
                    scene.hotspots.len(),
                    MAX_MARKERS
                );
            }
        }
        Ok((tour, scenes, issues))
    }
}

/// Drops hotspots that violate kind-specific requirements, returning a
/// diagnostic per dropped hotspot. Valid hotspots in the same scene are
/// kept.
pub fn validate_scenes(scenes: &mut [Scene]) -> Vec<HotspotIssue> {
    let scene_ids: FnvHashSet<String> = scenes.iter().map(|s| s.id.clone()).collect();
    let mut issues = Vec::new();
    for scene in scenes.iter_mut() {
        scene.hotspots.retain(|h| match check_hotspot(h, &scene_ids) {
            Ok(()) => true,
            Err(issue) => {
                issues.push(issue);
                false
            }
        });
    }
    issues
}

fn check_hotspot(h: &crate::model::Hotspot, scene_ids: &FnvHashSet<String>) -> Result<(), HotspotIssue> {
    use crate::model::HotspotKind;
    if h.kind.requires_media_url() && h.media_url.as_deref().unwrap_or("").is_empty() {
        return Err(HotspotIssue::MissingMediaUrl { id: h.id.clone(), kind: h.kind });
    }
    if h.kind == HotspotKind::Navigation {
        match h.target_scene_id.as_deref() {
            None | Some("") => {
                return Err(HotspotIssue::MissingTarget { id: h.id.clone() });
            }
            Some(target) if !scene_ids.contains(target) => {
                return Err(HotspotIssue::UnresolvedTarget {
                    id: h.id.clone(),
                    target: target.to_string(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
