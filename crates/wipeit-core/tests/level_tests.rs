use std::time::Duration;
use wipeit_core::{ConfigError, LevelConfig, LevelTable};

fn lc(score: u32, speed: u64, max_dirt: usize) -> LevelConfig {
    LevelConfig {
        score,
        speed,
        max_dirt,
    }
}

fn two_levels() -> LevelTable {
    LevelTable::new(vec![lc(5, 1000, 3), lc(15, 700, 5)]).expect("valid table")
}

#[test]
fn threshold_must_be_exceeded() {
    let levels = two_levels();
    assert_eq!(levels.level_for_score(0), 0);
    assert_eq!(levels.level_for_score(5), 0);
    assert_eq!(levels.level_for_score(6), 1);
}

#[test]
fn level_is_clamped_to_last_entry() {
    let levels = two_levels();
    assert_eq!(levels.level_for_score(15), 1);
    assert_eq!(levels.level_for_score(16), 1);
    assert_eq!(levels.level_for_score(u32::MAX), 1);
}

#[test]
fn level_is_monotonic_in_score() {
    let levels = LevelTable::default();
    let mut prev = 0;
    for score in 0..200 {
        let level = levels.level_for_score(score);
        assert!(level >= prev, "level dropped at score {score}");
        assert!(level <= levels.max_level());
        prev = level;
    }
    assert_eq!(prev, levels.max_level());
}

#[test]
fn get_clamps_out_of_range() {
    let levels = two_levels();
    assert_eq!(levels.get(7).speed, 700);
    assert_eq!(levels.get(0).spawn_interval(), Duration::from_millis(1000));
}

#[test]
fn rejects_empty_table() {
    assert!(matches!(LevelTable::new(vec![]), Err(ConfigError::NoLevels)));
}

#[test]
fn rejects_non_increasing_thresholds() {
    let err = LevelTable::new(vec![lc(5, 1000, 3), lc(5, 700, 5)]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnorderedThreshold {
            index: 1,
            threshold: 5,
            previous: 5
        }
    ));
}

#[test]
fn rejects_zero_interval() {
    let err = LevelTable::new(vec![lc(5, 0, 3)]).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroInterval { index: 0 }));
}

#[test]
fn default_table_is_valid() {
    let levels = LevelTable::default();
    let rebuilt = LevelTable::new(levels.iter().copied().collect()).expect("valid");
    assert_eq!(rebuilt, levels);
    assert!(!levels.is_empty());
}
