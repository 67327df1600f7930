// Mock db parsing and load-time hotspot validation.

use viewer_core::{HotspotIssue, HotspotKind, MockDb, TourMode, ViewerError};

const DB_JSON: &str = r#"{
  "tours": [
    { "id": "t1", "projectId": "p1", "mode": "both" },
    { "id": "t2", "projectId": "p1", "mode": "web" }
  ],
  "scenes": [
    {
      "tourId": "t1",
      "id": "A",
      "name": "Lobby",
      "imageUrl": "/panoramas/lobby.jpg",
      "thumbnailUrl": "/thumbs/lobby.jpg",
      "hotspots": [
        {
          "id": "h1",
          "position": [12.0, 1.5, -30.0],
          "kind": "text",
          "title": "Reception",
          "description": "Front desk"
        },
        {
          "id": "h2",
          "position": [-20.0, 0.0, 10.0],
          "kind": "navigation",
          "targetSceneId": "B"
        },
        {
          "id": "h3",
          "position": [0.0, 5.0, 20.0],
          "kind": "image"
        },
        {
          "id": "h4",
          "position": [5.0, 0.0, 5.0],
          "kind": "navigation",
          "targetSceneId": "Z"
        }
      ]
    },
    {
      "tourId": "t1",
      "id": "B",
      "name": "Hall",
      "imageUrl": "/panoramas/hall.jpg"
    },
    {
      "tourId": "t2",
      "id": "C",
      "name": "Other",
      "imageUrl": "/panoramas/other.jpg"
    }
  ]
}"#;

#[test]
fn parses_the_mock_db_shape() {
    let db = MockDb::from_json(DB_JSON).expect("db should parse");
    assert_eq!(db.tours.len(), 2);
    assert_eq!(db.get_tour("t1").unwrap().mode, TourMode::Both);
    assert!(db.get_tour("nope").is_none());

    let scenes = db.list_scenes_for_tour("t1");
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].id, "A");
    assert_eq!(scenes[0].hotspots.len(), 4);
    assert_eq!(scenes[0].hotspots[0].kind, HotspotKind::Text);
    assert_eq!(scenes[0].hotspots[0].position.y, 1.5);
}

#[test]
fn load_tour_drops_invalid_hotspots_with_diagnostics() {
    let db = MockDb::from_json(DB_JSON).unwrap();
    let (tour, scenes, issues) = db.load_tour("t1").unwrap();
    assert_eq!(tour.id, "t1");

    // h3 (image without mediaUrl) and h4 (unresolved target) are dropped;
    // h1 and h2 survive.
    let ids: Vec<&str> = scenes[0].hotspots.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, ["h1", "h2"]);
    assert_eq!(issues.len(), 2);
    assert!(issues.contains(&HotspotIssue::MissingMediaUrl {
        id: "h3".to_string(),
        kind: HotspotKind::Image,
    }));
    assert!(issues.contains(&HotspotIssue::UnresolvedTarget {
        id: "h4".to_string(),
        target: "Z".to_string(),
    }));
}

#[test]
fn navigation_targets_must_be_in_the_same_tour() {
    // Scene C belongs to tour t2, so a t1 hotspot may not target it.
    let json = DB_JSON.replace(r#""targetSceneId": "Z""#, r#""targetSceneId": "C""#);
    let db = MockDb::from_json(&json).unwrap();
    let (_, scenes, issues) = db.load_tour("t1").unwrap();
    assert_eq!(scenes[0].hotspots.len(), 2);
    assert!(matches!(&issues[..], [_, HotspotIssue::UnresolvedTarget { target, .. }] if target == "C"));
}

#[test]
fn unknown_tour_is_an_explicit_error() {
    let db = MockDb::from_json(DB_JSON).unwrap();
    assert_eq!(
        db.load_tour("t9"),
        Err(ViewerError::TourNotFound("t9".to_string()))
    );
}

#[test]
fn tour_with_zero_scenes_loads_as_empty_not_error() {
    let db = MockDb::from_json(r#"{ "tours": [{ "id": "t", "projectId": "p", "mode": "vr" }] }"#)
        .unwrap();
    let (_, scenes, issues) = db.load_tour("t").unwrap();
    assert!(scenes.is_empty());
    assert!(issues.is_empty());
}

#[test]
fn unknown_hotspot_kind_is_rejected_at_parse() {
    let json = DB_JSON.replace(r#""kind": "text""#, r#""kind": "portal""#);
    assert!(MockDb::from_json(&json).is_err());
}
