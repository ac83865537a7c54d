//! The read-only snapshot handed to presentation.

use grid_crawler::{GameSession, GenerationConfig, Tile, WorldSnapshot, balance};
use pretty_assertions::assert_eq;

#[test]
fn test_snapshot_mirrors_the_session() {
    let session = GameSession::generate(&GenerationConfig::default(), 88).unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.grid, *session.grid());
    assert_eq!(snapshot.hero.x, session.hero().x);
    assert_eq!(snapshot.hero.y, session.hero().y);
    assert_eq!(snapshot.enemies.len(), session.enemies().len());
    assert_eq!(snapshot.outcome, session.outcome());
    assert_eq!(
        snapshot.grid.get(snapshot.hero.x, snapshot.hero.y),
        Tile::Hero
    );
}

#[test]
fn test_snapshot_carries_max_hp_for_health_bars() {
    let session = GameSession::generate(&GenerationConfig::default(), 88).unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.hero.max_hp, balance::HERO_MAX_HP);
    for enemy in &snapshot.enemies {
        assert_eq!(enemy.max_hp, balance::ENEMY_MAX_HP);
        assert!(enemy.hp <= enemy.max_hp);
    }
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let session = GameSession::generate(&GenerationConfig::default(), 88).unwrap();
    let snapshot = session.snapshot();

    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let restored: WorldSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
    assert_eq!(restored, snapshot);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outcome"], "Active");
    assert_eq!(value["hero"]["hp"], session.hero().hp);
}
