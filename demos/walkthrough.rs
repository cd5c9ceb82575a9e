use glam::Vec2;
use tilebonk::*;

/// Scripted run: settle, run right over the coins, climb the ladder, then walk
/// into the spikes. Set `RUST_LOG=debug` to see compile and pickup logs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let level = Level::from_json_str(include_str!("level.json"))?;
    let mut game = GameState::new(&level, Vec2::new(720.0, 360.0), PhysicsConfig {
        enable_timing: true,
        ..Default::default()
    })?;

    let s = game.debug_stats();
    println!(
        "compiled: ground={} ladders={} death={} map={:?}",
        s.ground_rects, s.ladder_rects, s.death_rects, game.map_extent()
    );

    let idle = InputState::default();
    let right = InputState { right: true, ..Default::default() };
    let climb = InputState { up: true, ..Default::default() };
    let script: [(InputState, u32); 4] = [(idle, 60), (right, 80), (climb, 20), (right, 120)];

    let mut tick = 0u32;
    for (input, frames) in script {
        for _ in 0..frames {
            game.step(&input);
            tick += 1;
            for ev in game.drain_events() {
                match ev {
                    GameEvent::PickupCollected { position, score } => println!(
                        "[{tick:4}] coin at ({:.0},{:.0}) score={score}",
                        position.x, position.y
                    ),
                    GameEvent::Died { position } => println!(
                        "[{tick:4}] died at ({:.1},{:.1})",
                        position.x, position.y
                    ),
                }
            }
        }
        let a = game.actor();
        println!(
            "after {tick} ticks: pos=({:.1},{:.1}) vel=({:.2},{:.2}) state={:?} camera={:?}",
            a.position.x, a.position.y, a.velocity.x, a.velocity.y, a.state, game.camera().position
        );
    }

    if let Some(t) = game.timing() {
        println!(
            "last tick: {:.4}ms (motion={:.4}ms pickups={:.4}ms camera={:.4}ms)",
            t.step_ms, t.motion_ms, t.pickups_ms, t.camera_ms
        );
    }
    println!("final score: {}", game.score());
    Ok(())
}
