use wipeit_core::{ConfigError, GameConfig, DIRT_SIZE_PX, RAG_ANCHOR};

#[test]
fn empty_object_is_default() {
    let cfg = GameConfig::from_json_str("{}").expect("valid");
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn reads_camel_case_fields() {
    let cfg = GameConfig::from_json_str(
        r#"{
            "levels": [
                {"score": 2, "speed": 500, "maxDirt": 1},
                {"score": 4, "speed": 250, "max_dirt": 2}
            ],
            "gesture": {"extensionRatio": 1.3},
            "ragScale": 1.5,
            "render": {"debugOverlay": false, "landmarkLabels": true},
            "seed": 99
        }"#,
    )
    .expect("valid");
    assert_eq!(cfg.levels.len(), 2);
    assert_eq!(cfg.levels.get(1).max_dirt, 2);
    assert_eq!(cfg.rag_scale, 1.5);
    assert_eq!(cfg.gesture.extension_ratio, 1.3);
    assert_eq!(
        cfg.gesture.parallel_min_cos,
        GameConfig::default().gesture.parallel_min_cos
    );
    assert!(!cfg.render.debug_overlay);
    assert!(cfg.render.landmark_labels);
    assert_eq!(cfg.seed, Some(99));
}

#[test]
fn invalid_level_table_is_rejected() {
    let err = GameConfig::from_json_str(
        r#"{"levels": [{"score": 9, "speed": 500, "maxDirt": 1}, {"score": 3, "speed": 250, "maxDirt": 2}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn out_of_range_values_fall_back() {
    let cfg = GameConfig::from_json_str(
        r#"{"wipeVolume": 3.0, "musicVolume": -1.0, "ragAnchor": 40, "ragScale": 0.0, "dirtSize": -5.0}"#,
    )
    .expect("valid");
    assert_eq!(cfg.wipe_volume, 1.0);
    assert_eq!(cfg.music_volume, 0.0);
    assert_eq!(cfg.rag_anchor, RAG_ANCHOR);
    assert_eq!(cfg.rag_scale, GameConfig::default().rag_scale);
    assert_eq!(cfg.dirt_size, DIRT_SIZE_PX);
}

#[test]
fn garbage_is_an_error() {
    assert!(GameConfig::from_json_str("not json").is_err());
}
