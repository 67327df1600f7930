//! Ordered scene list with cyclic navigation.

use crate::model::Scene;
use fnv::FnvHashMap;

pub struct SceneNavigator {
    scenes: Vec<Scene>,
    current: usize,
    index_by_id: FnvHashMap<String, usize>,
}

impl SceneNavigator {
    /// Builds the navigator for a tour's ordered scene list. When
    /// `initial_scene_id` resolves it becomes the starting scene, else
    /// index 0.
    pub fn new(scenes: Vec<Scene>, initial_scene_id: Option<&str>) -> Self {
        let index_by_id = scenes
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect::<FnvHashMap<_, _>>();
        let current = initial_scene_id
            .and_then(|id| index_by_id.get(id).copied())
            .unwrap_or(0);
        Self { scenes, current, index_by_id }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// `None` when the tour has no scenes; the host renders an explicit
    /// empty state.
    pub fn current(&self) -> Option<&Scene> {
        self.scenes.get(self.current)
    }

    pub fn next(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.scenes.len();
    }

    pub fn prev(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        let n = self.scenes.len();
        self.current = (self.current + n - 1) % n;
    }

    /// Direct selection; rejects out-of-range indices.
    pub fn select_by_index(&mut self, index: usize) -> bool {
        if index < self.scenes.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn index_of(&self, scene_id: &str) -> Option<usize> {
        self.index_by_id.get(scene_id).copied()
    }
}
