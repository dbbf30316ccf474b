//! Per-frame simulation step
//!
//! Core game loop that advances a `World` by one clamped delta.

use super::collision;
use super::effects::Effect;
use super::input::{InputEvent, InputSource};
use super::state::{GamePhase, World};

/// Advance the world by one frame.
///
/// Order: input → cosmetic timers → (Playing only) physics, obstacles,
/// scoring, collision. `dt` must already be clamped by the clock.
pub fn tick(world: &mut World, inputs: &[InputEvent], dt: f32) {
    debug_assert!(dt >= 0.0, "negative tick delta");
    let dt = dt.max(0.0);

    world.effects.clear();
    world.input_locked = false;

    for &event in inputs {
        handle_input(world, event);
    }

    advance_cosmetics(world, dt);

    if world.phase != GamePhase::Playing {
        return;
    }

    let config = &world.config;
    world.player.integrate(dt, config.gravity);

    let passed = world
        .field
        .advance(dt, config, world.player.pos.x, &mut world.rng);
    for _ in 0..passed {
        let milestone = world.score.on_obstacle_passed(
            config.milestone_period,
            config.capabilities.spin_milestone,
            &mut world.effects,
        );
        if milestone {
            world.player.start_spin(config.spin_duration);
        }
    }

    if collision::check(&world.player, &world.field.obstacles, config.ground_y()) {
        on_collision(world);
    }
}

/// Apply one input event to the state machine.
///
/// Presses in GameOver restart, in Start begin a run with an immediate flap,
/// in Playing flap (keyboard presses only once per key-down when edge
/// triggering is on).
pub fn handle_input(world: &mut World, event: InputEvent) {
    let source = match event {
        InputEvent::Release(InputSource::Keyboard) => {
            world.key_held = false;
            return;
        }
        InputEvent::Release(InputSource::Pointer) => return,
        InputEvent::Press(source) => source,
    };

    if world.input_locked {
        log::trace!("Input locked, ignoring {:?}", source);
        return;
    }

    let lock = world.config.capabilities.input_lock;
    match world.phase {
        GamePhase::Start => {
            world.set_phase(GamePhase::Playing);
            flap(world);
            world.input_locked = lock;
        }
        GamePhase::GameOver => {
            world.reset();
            world.input_locked = lock;
        }
        GamePhase::Playing => {
            if source == InputSource::Keyboard
                && world.config.capabilities.keyboard_edge_trigger
            {
                if world.key_held {
                    return;
                }
                world.key_held = true;
            }
            flap(world);
        }
    }
}

fn flap(world: &mut World) {
    log::trace!("Flap at y = {:.1}", world.player.pos.y);
    world.player.flap(world.config.flap_impulse);
    world.effects.emit(Effect::Flap);
}

/// Timers that keep running outside Playing
fn advance_cosmetics(world: &mut World, dt: f32) {
    world.shake.advance(dt);
    world.player.advance_spin(dt);

    let config = &world.config;
    if config.capabilities.ground_scroll && world.phase != GamePhase::GameOver {
        let travelled =
            (config.ground_speed * dt - world.ground_offset).rem_euclid(config.canvas_width);
        // rem_euclid can round up to the modulus itself
        world.ground_offset = if travelled < config.canvas_width {
            -travelled
        } else {
            0.0
        };
    }
}

fn on_collision(world: &mut World) {
    log::debug!(
        "Collision at y = {:.1} with {} obstacles on screen",
        world.player.pos.y,
        world.field.len()
    );
    world.set_phase(GamePhase::GameOver);
    world.effects.emit(Effect::Hit);
    let duration = world.config.effective_shake_duration();
    if duration > 0.0 {
        world.shake.start(duration);
    }
}
