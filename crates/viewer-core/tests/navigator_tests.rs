// Cyclic scene navigation.

use viewer_core::{Scene, SceneNavigator};

fn scene(id: &str) -> Scene {
    Scene {
        id: id.to_string(),
        name: format!("Scene {id}"),
        image_url: format!("/panoramas/{id}.jpg"),
        thumbnail_url: None,
        hotspots: Vec::new(),
    }
}

fn scenes(ids: &[&str]) -> Vec<Scene> {
    ids.iter().map(|id| scene(id)).collect()
}

#[test]
fn next_wraps_after_n_steps() {
    for n in 1..=5 {
        let ids: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut nav = SceneNavigator::new(scenes(&id_refs), None);
        for _ in 0..n {
            nav.next();
        }
        assert_eq!(nav.current_index(), 0, "next() x{n} should return to start");
        for _ in 0..n {
            nav.prev();
        }
        assert_eq!(nav.current_index(), 0, "prev() x{n} should return to start");
    }
}

#[test]
fn walks_a_b_c_and_wraps() {
    let mut nav = SceneNavigator::new(scenes(&["A", "B", "C"]), None);
    assert_eq!(nav.current_index(), 0);
    nav.next();
    assert_eq!(nav.current_index(), 1);
    nav.next();
    assert_eq!(nav.current_index(), 2);
    nav.next();
    assert_eq!(nav.current_index(), 0);
    nav.prev();
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn empty_list_is_a_noop_not_a_panic() {
    let mut nav = SceneNavigator::new(Vec::new(), None);
    assert!(nav.is_empty());
    assert!(nav.current().is_none());
    nav.next();
    nav.prev();
    assert_eq!(nav.current_index(), 0);
    assert!(nav.current().is_none());
    assert!(!nav.select_by_index(0));
}

#[test]
fn select_by_index_rejects_out_of_range() {
    let mut nav = SceneNavigator::new(scenes(&["A", "B"]), None);
    assert!(nav.select_by_index(1));
    assert_eq!(nav.current_index(), 1);
    assert!(!nav.select_by_index(2));
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn initial_scene_id_resolves_or_falls_back() {
    let nav = SceneNavigator::new(scenes(&["A", "B", "C"]), Some("B"));
    assert_eq!(nav.current_index(), 1);
    let nav = SceneNavigator::new(scenes(&["A", "B", "C"]), Some("missing"));
    assert_eq!(nav.current_index(), 0);
    let nav = SceneNavigator::new(scenes(&["A", "B", "C"]), None);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn index_of_finds_scenes() {
    let nav = SceneNavigator::new(scenes(&["A", "B", "C"]), None);
    assert_eq!(nav.index_of("C"), Some(2));
    assert_eq!(nav.index_of("Z"), None);
}
