// Host-side tests for particle bookkeeping on the effect surface.

mod common;

use action_items_core::*;
use common::surface_at;
use glam::Vec2;
use std::collections::HashSet;

fn sparkle() -> ParticleSpec {
    ParticleSpec::sparkle(Vec2::new(1.0, 2.0), Vec2::new(12.5, -3.0))
}

fn heart() -> ParticleSpec {
    ParticleSpec::heart(Vec2::ZERO, Vec2::new(0.0, -100.0), 45.0, 10.0)
}

#[test]
fn ids_follow_spawn_order() {
    let (mut surface, _clock) = surface_at(0.0);
    let a = surface.spawn(sparkle()).unwrap();
    let b = surface.spawn(heart()).unwrap();
    let c = surface.spawn(sparkle()).unwrap();
    assert!(a < b && b < c);
    let appended: Vec<_> = surface.sink().appended.iter().map(|p| p.id).collect();
    assert_eq!(appended, vec![a, b, c]);
}

#[test]
fn deadline_is_spawn_time_plus_lifetime() {
    let (mut surface, _clock) = surface_at(250.0);
    surface.spawn(sparkle());
    surface.spawn(heart());
    let appended = &surface.sink().appended;
    assert_eq!(appended[0].spawned_at_ms, 250.0);
    assert_eq!(appended[0].deadline_ms, 1_050.0);
    assert_eq!(appended[1].deadline_ms, 1_450.0);
    assert_eq!(surface.next_deadline_ms(), Some(1_050.0));
}

#[test]
fn each_particle_is_removed_once() {
    let (mut surface, clock) = surface_at(0.0);
    for _ in 0..10 {
        surface.spawn(sparkle());
    }
    clock.set(5_000.0);
    assert_eq!(surface.tick(), 10);
    assert_eq!(surface.tick(), 0);
    clock.advance(10_000.0);
    assert_eq!(surface.tick(), 0);

    let removed: Vec<_> = surface.sink().removed.iter().map(|(id, _)| *id).collect();
    let unique: HashSet<_> = removed.iter().collect();
    assert_eq!(removed.len(), 10);
    assert_eq!(unique.len(), 10);
}

#[test]
fn removal_follows_deadlines_not_spawn_order() {
    let (mut surface, clock) = surface_at(0.0);
    let h = surface.spawn(heart()).unwrap(); // due 1200
    clock.set(500.0);
    let s = surface.spawn(sparkle()).unwrap(); // due 1300

    clock.set(1_250.0);
    assert_eq!(surface.tick(), 1);
    clock.set(1_300.0);
    assert_eq!(surface.tick(), 1);

    let order: Vec<_> = surface.sink().removed.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![h, s]);
}

#[test]
fn late_tick_removes_everything_overdue() {
    let (mut surface, clock) = surface_at(0.0);
    surface.spawn(sparkle());
    clock.set(100.0);
    surface.spawn(heart());
    clock.set(200.0);
    surface.spawn(sparkle());

    clock.set(60_000.0);
    assert_eq!(surface.tick(), 3);
    assert_eq!(surface.pending(), 0);
    assert_eq!(surface.next_deadline_ms(), None);
}

#[test]
fn failed_append_is_not_scheduled() {
    let (mut surface, clock) = surface_at(0.0);
    surface.sink_mut().fail_appends = true;

    assert_eq!(surface.spawn(sparkle()), None);
    assert_eq!(surface.pending(), 0);

    clock.set(1_000.0);
    assert_eq!(surface.tick(), 0);
    assert!(surface.sink().removed.is_empty());
}

#[test]
fn failed_remove_is_dropped_not_retried() {
    let (mut surface, clock) = surface_at(0.0);
    surface.spawn(sparkle());
    surface.sink_mut().fail_removes = true;

    clock.set(800.0);
    assert_eq!(surface.tick(), 1);
    assert_eq!(surface.pending(), 0);
    clock.set(2_000.0);
    assert_eq!(surface.tick(), 0);
    assert_eq!(surface.sink().removed.len(), 1);
}

#[test]
fn sparkle_style_only_carries_motion() {
    let p = Particle::new(ParticleId(3), sparkle(), 0.0);
    assert_eq!(
        p.style_vars(),
        vec![("--dx", "12.5px".to_string()), ("--dy", "-3px".to_string())]
    );
    assert_eq!(p.left_px(), "1px");
    assert_eq!(p.top_px(), "2px");
    assert_eq!(p.kind().class_name(), "sparkle");
    assert_eq!(p.kind().tag_name(), "span");
}

#[test]
fn sink_errors_describe_the_particle() {
    let e = SinkError::Unknown(ParticleId(7));
    assert_eq!(e.to_string(), "unknown particle ParticleId(7)");
    let e = SinkError::Append(ParticleId(1), "no body".into());
    assert_eq!(e.to_string(), "could not append particle ParticleId(1): no body");
}
