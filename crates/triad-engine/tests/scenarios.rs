//! Scenario tests: hand-placed populations with known outcomes.
//!
//! Agents with speed 0 are pinned so the interaction pass can be checked
//! in isolation from movement.

use triad_core::{AgentId, Kind, Position};
use triad_engine::{PassSchedule, SpriteSheet};
use triad_test_utils::{snapshot, RecordingCanvas, WorldBuilder};

// ── Extinction ──────────────────────────────────────────────────

#[test]
fn missing_prey_yields_no_target() {
    // Rock hunts scissors; there are none.
    let world = WorldBuilder::new(800.0, 600.0)
        .agent(Kind::Rock, 100.0, 100.0)
        .agent(Kind::Rock, 300.0, 300.0)
        .agent(Kind::Paper, 600.0, 500.0)
        .build();
    for agent in world.agents().iter().filter(|a| a.kind() == Kind::Rock) {
        assert!(agent.select_target(world.agents()).is_none());
        assert!(agent.select_avoider(world.agents()).is_some());
    }
}

#[test]
fn extinct_kind_runs_to_dominance() {
    let mut world = WorldBuilder::new(400.0, 300.0)
        .agent(Kind::Rock, 10.0, 10.0)
        .agent(Kind::Rock, 300.0, 200.0)
        .agent(Kind::Paper, 150.0, 120.0)
        .build();

    for _ in 0..5_000 {
        world.step();
        assert_eq!(world.agents().len(), 3);
        if world.dominant().is_some() {
            break;
        }
    }
    assert_eq!(world.dominant(), Some(Kind::Paper));
}

#[test]
fn single_kind_world_never_moves() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .agent(Kind::Scissors, 100.0, 100.0)
        .agent(Kind::Scissors, 110.0, 100.0)
        .build();
    let before = snapshot(&world);
    for _ in 0..10 {
        let m = world.step();
        assert_eq!(m.conversions, 0);
    }
    assert_eq!(snapshot(&world), before);
}

// ── Boundary ────────────────────────────────────────────────────

#[test]
fn flee_at_left_wall_halts() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .agent(Kind::Rock, 0.0, 300.0)
        .agent(Kind::Paper, 100.0, 300.0)
        .build();
    world.step();
    let rock = world.agent(AgentId(0)).unwrap();
    assert_eq!(rock.x(), 0.0);
    assert_eq!(rock.y(), 300.0);
    // The paper kept chasing.
    assert_eq!(world.agent(AgentId(1)).unwrap().x(), 98.0);
}

#[test]
fn cornered_prey_is_caught() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .agent(Kind::Rock, 0.0, 0.0)
        .agent(Kind::Paper, 100.0, 100.0)
        .build();
    let mut frames = 0;
    while world.agent(AgentId(0)).unwrap().kind() == Kind::Rock {
        world.step();
        frames += 1;
        assert!(frames < 100, "paper never reached the cornered rock");
        let rock = world.agent(AgentId(0)).unwrap();
        assert_eq!(rock.position(), Position::new(0.0, 0.0));
    }
}

// ── Contact ─────────────────────────────────────────────────────

#[test]
fn collision_radius_is_the_actors_own() {
    // Big paper touches the small rock; the small rock does not touch
    // the paper. Only the paper's row reports a collision.
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .sized(Kind::Paper, 100.0, 100.0, 40.0)
        .sized(Kind::Rock, 120.0, 100.0, 10.0)
        .build();
    let m = world.step().clone();
    assert_eq!(m.collisions, 1);
    assert_eq!(m.conversions, 1);
    assert_eq!(world.agent(AgentId(1)).unwrap().kind(), Kind::Paper);
}

#[test]
fn small_predator_cannot_reach() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .sized(Kind::Paper, 100.0, 100.0, 10.0)
        .sized(Kind::Rock, 120.0, 100.0, 40.0)
        .build();
    let m = world.step().clone();
    assert_eq!(m.collisions, 1);
    assert_eq!(m.conversions, 0);
    assert_eq!(world.agent(AgentId(1)).unwrap().kind(), Kind::Rock);
}

#[test]
fn conversions_chain_within_one_frame() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .agent(Kind::Paper, 0.0, 100.0)
        .agent(Kind::Rock, 30.0, 100.0)
        .agent(Kind::Rock, 60.0, 100.0)
        .build();
    let m = world.step().clone();
    assert_eq!(m.conversions, 2);
    assert_eq!(world.dominant(), Some(Kind::Paper));
}

#[test]
fn chain_depends_on_iteration_order() {
    // Same geometry, reversed order: the far rock is checked before the
    // middle rock has been converted.
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .agent(Kind::Rock, 60.0, 100.0)
        .agent(Kind::Rock, 30.0, 100.0)
        .agent(Kind::Paper, 0.0, 100.0)
        .build();
    let m = world.step().clone();
    assert_eq!(m.conversions, 1);
    assert_eq!(world.agent(AgentId(0)).unwrap().kind(), Kind::Rock);
    assert_eq!(world.agent(AgentId(1)).unwrap().kind(), Kind::Paper);
}

#[test]
fn conversion_keeps_identity_and_position() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .agent(Kind::Scissors, 200.0, 200.0)
        .agent(Kind::Paper, 210.0, 205.0)
        .build();
    world.step();
    let converted = world.agent(AgentId(1)).unwrap();
    assert_eq!(converted.id(), AgentId(1));
    assert_eq!(converted.kind(), Kind::Scissors);
    assert_eq!(converted.position(), Position::new(210.0, 205.0));
}

// ── Schedules ───────────────────────────────────────────────────

#[test]
fn interleaved_converts_before_later_agents_move() {
    let build = |schedule| {
        WorldBuilder::new(800.0, 600.0)
            .schedule(schedule)
            .agent(Kind::Paper, 100.0, 100.0)
            .agent(Kind::Rock, 141.0, 100.0)
            .build()
    };

    // Phased: paper moves to 102, rock flees to 143, gap 41 -> no contact.
    let mut phased = build(PassSchedule::Phased);
    phased.step();
    assert_eq!(phased.agent(AgentId(1)).unwrap().kind(), Kind::Rock);

    // Interleaved: paper moves to 102 and checks contact (gap 39) before
    // the rock gets to move.
    let mut interleaved = build(PassSchedule::Interleaved);
    interleaved.step();
    assert_eq!(interleaved.agent(AgentId(1)).unwrap().kind(), Kind::Paper);
    assert_eq!(interleaved.last_metrics().movement_us, 0);
}

// ── Rendering ───────────────────────────────────────────────────

#[test]
fn render_reflects_conversions() {
    let mut world = WorldBuilder::new(800.0, 600.0)
        .speed(0.0)
        .agent(Kind::Rock, 0.0, 0.0)
        .agent(Kind::Scissors, 20.0, 0.0)
        .build();
    let sheet = SpriteSheet::new(Kind::Rock, Kind::Paper, Kind::Scissors);
    let mut canvas = RecordingCanvas::new();

    world.render(&mut canvas, &sheet);
    assert_eq!(canvas.blits[1].0, Kind::Scissors);

    world.step();
    world.render(&mut canvas, &sheet);
    assert_eq!(canvas.clears, 2);
    assert_eq!(canvas.blits.len(), 2);
    assert_eq!(canvas.blits[1], (Kind::Rock, Position::new(20.0, 0.0), 40.0));
}
