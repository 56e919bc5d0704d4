//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` plus the `GameConfig` and returns a brand-new `GameState`
//! (or a fresh value).  Nothing here has side effects.

use crate::config::GameConfig;
use crate::entities::{Alien, Bullet, GameState, GameStatus, Player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the pre-wave state: player at its start position, bullet parked,
/// no aliens yet.  Pair with `spawn_wave` for a playable state.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        player: Player {
            x: config.player.start_x,
            y: config.player.start_y,
            width: config.player.width,
            height: config.player.height,
        },
        bullet: Bullet {
            x: 0,
            y: 0,
            width: config.bullet.width,
            height: config.bullet.height,
            active: false,
        },
        aliens: Vec::new(),
        velocity: config.wave.alien_speed,
        score: 0,
        columns: config.wave.initial_columns,
        rows: config.wave.initial_rows,
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// Lay out a `columns × rows` grid, row-major, starting at the wave origin.
pub fn generate_wave(config: &GameConfig, columns: u32, rows: u32) -> Vec<Alien> {
    let w = &config.wave;
    let step_x = w.alien_width + w.spacing;
    let step_y = w.alien_height + w.spacing;

    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |col| Alien {
                x: w.origin_x + col as i32 * step_x,
                y: w.origin_y + row as i32 * step_y,
                width: w.alien_width,
                height: w.alien_height,
            })
        })
        .collect()
}

/// Append a wave sized by the state's current `columns × rows`.
pub fn spawn_wave(state: &GameState, config: &GameConfig) -> GameState {
    let mut aliens = state.aliens.clone();
    aliens.extend(generate_wave(config, state.columns, state.rows));
    GameState {
        aliens,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Keep a ship x inside `[0, field width - ship width]`.
fn clamp_player_x(x: i32, config: &GameConfig) -> i32 {
    x.min(config.player_max_x()).max(0)
}

pub fn move_player_left(state: &GameState, config: &GameConfig, step: i32) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let new_x = clamp_player_x(state.player.x - step, config);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState, config: &GameConfig, step: i32) -> GameState {
    if state.is_over() {
        return state.clone();
    }
    let new_x = clamp_player_x(state.player.x + step, config);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Spawn the bullet centred on the ship.  Single-shot: a no-op while the
/// previous bullet is still in flight.
pub fn fire(state: &GameState) -> GameState {
    if state.is_over() || state.bullet.active {
        return state.clone();
    }
    let p = &state.player;
    let bullet = Bullet {
        x: p.x + p.width / 2 - state.bullet.width / 2,
        y: p.y,
        active: true,
        ..state.bullet.clone()
    };
    GameState {
        bullet,
        ..state.clone()
    }
}

// ── Per-frame pieces ─────────────────────────────────────────────────────────

/// Bounce check then horizontal shift.  A bounce flips the velocity and drops
/// the whole formation once, and the new direction applies this same frame.
pub fn move_formation(aliens: &[Alien], velocity: i32, config: &GameConfig) -> (Vec<Alien>, i32) {
    let hit_edge = aliens
        .iter()
        .any(|a| a.x + a.width >= config.field.width || a.x <= 0);

    let (velocity, drop) = if hit_edge {
        (-velocity, config.wave.drop_step)
    } else {
        (velocity, 0)
    };

    let aliens = aliens
        .iter()
        .map(|a| Alien {
            x: a.x + velocity,
            y: a.y + drop,
            ..a.clone()
        })
        .collect();
    (aliens, velocity)
}

/// Move an active bullet upward; retire it once it is fully above the field.
pub fn advance_bullet(bullet: &Bullet, config: &GameConfig) -> Bullet {
    if !bullet.active {
        return bullet.clone();
    }
    let y = bullet.y - config.bullet.speed;
    Bullet {
        y,
        active: y + bullet.height >= 0,
        ..bullet.clone()
    }
}

/// Index of the first alien, in iteration order, the bullet overlaps.
/// Only one alien can be hit per frame even when several overlap.
pub fn resolve_collision(bullet: &Bullet, aliens: &[Alien]) -> Option<usize> {
    if !bullet.active {
        return None;
    }
    let b = bullet.rect();
    aliens.iter().position(|a| b.overlaps(&a.rect()))
}

/// True once any alien's bottom edge reaches the player's row.
pub fn reached_player(aliens: &[Alien], player: &Player) -> bool {
    aliens.iter().any(|a| a.y + a.height >= player.y)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  A finished game is returned as-is.
pub fn tick(state: &GameState, config: &GameConfig) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    // ── 1. Formation ─────────────────────────────────────────────────────────
    let (mut aliens, velocity) = move_formation(&state.aliens, state.velocity, config);

    // ── 2. Bullet ────────────────────────────────────────────────────────────
    let mut bullet = advance_bullet(&state.bullet, config);

    // ── 3. Collision: bullet ↔ aliens ────────────────────────────────────────
    let mut score = state.score;
    if let Some(hit) = resolve_collision(&bullet, &aliens) {
        aliens.remove(hit);
        bullet.active = false;
        score += config.wave.points_per_kill;
    }

    // ── 4. Wave cleared ──────────────────────────────────────────────────────
    let mut columns = state.columns;
    if aliens.is_empty() {
        columns += 1;
        aliens = generate_wave(config, columns, state.rows);
    }

    // ── 5. Game over ─────────────────────────────────────────────────────────
    let status = if reached_player(&aliens, &state.player) {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    GameState {
        bullet,
        aliens,
        velocity,
        score,
        columns,
        status,
        frame: state.frame + 1,
        ..state.clone()
    }
}
