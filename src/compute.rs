/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current value
/// (and, where needed, the scenery or an RNG handle) and returns a brand-new
/// value.  The only exception is `advance_boss`, which also pushes fresh
/// projectiles into the caller's collections.

use rand::Rng;

use crate::assets::Scenery;
use crate::config::{
    BEAM_INTERVAL, BLINK_TICKS, BOSS_BOB_AMPLITUDE, BOSS_BOB_SPEED, BOSS_HOVER_RISE,
    BOSS_SCORE_THRESHOLD, GRAVITY, HEIGHT, JUMP_VELOCITY, MAX_JUMPS, METEOR_INTERVAL,
    METEOR_MAX_SIZE, METEOR_MIN_SIZE, PLAYER_SPEED, STAGE2_TICK, WIDTH,
};
use crate::entities::{
    Background, Beam, Boss, Enemy, Facing, GameState, GameStatus, Meteor, Player, TickInput,
};
use crate::geometry::{Hitbox, Rect};
use crate::stage::{stage_params, Stage};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh background for `stage` and look up its ground line.
pub fn install_background(stage: Stage, scenery: &impl Scenery) -> (Background, i32) {
    let background = Background::new(stage);
    let ground_y = scenery.ground_line(stage);
    log::info!("stage {} backdrop installed, ground line at y={}", stage.number(), ground_y);
    (background, ground_y)
}

/// Build the initial game state.  `player_size` comes from the player sprite.
pub fn init_state(player_size: (i32, i32), scenery: &impl Scenery) -> GameState {
    let (background, ground_y) = install_background(Stage::One, scenery);
    let (w, h) = player_size;
    GameState {
        stage: Stage::One,
        background,
        ground_y,
        player: Player::new(w, h, ground_y),
        enemies: Vec::new(),
        boss: None,
        beams: Vec::new(),
        meteors: Vec::new(),
        score: 0,
        frame: 0,
        status: GameStatus::Running,
    }
}

// ── Background ───────────────────────────────────────────────────────────────

/// Scroll both tiles left.  A tile that has slid a full width off screen is
/// re-attached behind the other one.
pub fn scroll_background(bg: &Background) -> Background {
    let mut x1 = bg.x1 - bg.speed;
    let mut x2 = bg.x2 - bg.speed;
    if x1 <= -bg.width {
        x1 = x2 + bg.width;
    }
    if x2 <= -bg.width {
        x2 = x1 + bg.width;
    }
    Background { x1, x2, ..bg.clone() }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Launch (or re-launch in mid-air) if jumps remain; otherwise unchanged.
pub fn try_jump(player: &Player) -> Player {
    if player.jump_count >= MAX_JUMPS {
        return player.clone();
    }
    Player {
        vy: JUMP_VELOCITY,
        jump_count: player.jump_count + 1,
        ..player.clone()
    }
}

/// Start (or restart) the damage blink.
pub fn set_damaged(player: &Player) -> Player {
    Player {
        damage_timer: BLINK_TICKS,
        ..player.clone()
    }
}

/// Apply input, gravity and the blink countdown for one tick.
pub fn advance_player(player: &Player, input: &TickInput, ground_y: i32) -> Player {
    let mut p = player.clone();

    // Right is checked last, so it wins when both are held.
    p.vx = 0;
    if input.left {
        p.vx = -PLAYER_SPEED;
        p.facing = Facing::Left;
    }
    if input.right {
        p.vx = PLAYER_SPEED;
        p.facing = Facing::Right;
    }
    p.rect.x = (p.rect.x + p.vx).min(WIDTH - p.rect.w).max(0);

    p.vy += GRAVITY;
    p.rect.y += p.vy as i32;
    if p.rect.bottom() >= ground_y {
        p.rect.set_bottom(ground_y);
        p.vy = 0.0;
        p.jump_count = 0;
    }

    // Hidden for two ticks out of every four while blinking.
    p.visible = if p.damage_timer > 0 {
        p.damage_timer -= 1;
        let elapsed = BLINK_TICKS.saturating_sub(p.damage_timer);
        !matches!(elapsed % 4, 2 | 3)
    } else {
        true
    };

    p
}

// ── Enemies & projectiles ────────────────────────────────────────────────────
//
// Each returns `None` once the entity has fully left the screen, so callers
// can sweep a collection with `filter_map`.

pub fn advance_enemy(enemy: &Enemy, ground_y: i32) -> Option<Enemy> {
    let mut rect = enemy.rect;
    rect.x -= enemy.speed;
    rect.set_bottom(ground_y);
    (rect.right() > 0).then(|| Enemy { rect, ..enemy.clone() })
}

pub fn advance_beam(beam: &Beam) -> Option<Beam> {
    let mut rect = beam.rect;
    rect.x -= beam.speed;
    (rect.right() > 0).then(|| Beam { rect, ..beam.clone() })
}

pub fn advance_meteor(meteor: &Meteor) -> Option<Meteor> {
    let mut rect = meteor.rect;
    rect.y += meteor.speed;
    (rect.top() < HEIGHT).then(|| Meteor { rect, ..meteor.clone() })
}

/// A meteor of random size aimed at `target_x`.
pub fn spawn_meteor(target_x: i32, rng: &mut impl Rng) -> Meteor {
    Meteor::new(target_x, rng.gen_range(METEOR_MIN_SIZE..=METEOR_MAX_SIZE))
}

// ── Boss ─────────────────────────────────────────────────────────────────────

/// Bob around the hover anchor and fire on the beam / meteor cadences.
/// Beams leave from the boss centre; meteors drop over `target`'s centre.
pub fn advance_boss(
    boss: &Boss,
    target: &Rect,
    ground_y: i32,
    beams: &mut Vec<Beam>,
    meteors: &mut Vec<Meteor>,
    rng: &mut impl Rng,
) -> Boss {
    let timer = boss.timer + 1;
    let anchor_y = ground_y - BOSS_HOVER_RISE;
    let bob = (timer as f64 * BOSS_BOB_SPEED).sin() * BOSS_BOB_AMPLITUDE;

    let mut rect = boss.rect;
    rect.set_center_y((anchor_y as f64 + bob) as i32);

    if timer % BEAM_INTERVAL == 0 {
        beams.push(Beam::new(rect.center()));
    }
    if timer % METEOR_INTERVAL == 0 {
        meteors.push(spawn_meteor(target.center_x(), rng));
    }

    Boss {
        rect,
        timer,
        anchor_y,
        ..boss.clone()
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Remove every projectile overlapping `target`.  Returns the survivors and
/// whether anything hit.
pub fn resolve_hits<T: Hitbox>(projectiles: Vec<T>, target: &impl Hitbox) -> (Vec<T>, bool) {
    let target = target.hitbox();
    let before = projectiles.len();
    let survivors: Vec<T> = projectiles
        .into_iter()
        .filter(|p| !p.hitbox().intersects(&target))
        .collect();
    let hit = survivors.len() != before;
    (survivors, hit)
}

// ── Per-frame tick (scenery and RNG are injected) ───────────────────────────

/// Advance the simulation by one tick.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    scenery: &impl Scenery,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::Quit {
        return state.clone();
    }

    // ── 1. Input edges ───────────────────────────────────────────────────────
    if input.quit {
        log::info!("session ended at tick {} (score {})", state.frame, state.score);
        return GameState {
            status: GameStatus::Quit,
            ..state.clone()
        };
    }
    let mut player = if input.jump {
        try_jump(&state.player)
    } else {
        state.player.clone()
    };

    // ── 2. Stage transition ──────────────────────────────────────────────────
    let (stage, background, ground_y) =
        if state.stage == Stage::One && state.frame >= STAGE2_TICK {
            log::info!("stage 2 begins at tick {}", state.frame);
            let (background, ground_y) = install_background(Stage::Two, scenery);
            player.rect.set_bottom(ground_y);
            (Stage::Two, background, ground_y)
        } else {
            (state.stage, state.background.clone(), state.ground_y)
        };
    let params = stage_params(stage);

    // ── 3. Score until the boss shows up ─────────────────────────────────────
    let mut score = state.score;
    let mut boss = state.boss.clone();
    if boss.is_none() {
        score += 1;
        if score > BOSS_SCORE_THRESHOLD {
            log::info!("boss appears at tick {} (score {})", state.frame, score);
            boss = Some(Boss::new(ground_y));
        }
    }

    // ── 4. Enemy spawns (only while there is no boss) ────────────────────────
    let mut enemies = state.enemies.clone();
    if boss.is_none() && state.frame % params.spawn_interval == 0 {
        enemies.push(Enemy::new(params.enemy_speed, ground_y));
    }

    // ── 5. Movement ──────────────────────────────────────────────────────────
    let background = scroll_background(&background);
    let player = advance_player(&player, input, ground_y);
    let enemies: Vec<Enemy> = enemies
        .iter()
        .filter_map(|e| advance_enemy(e, ground_y))
        .collect();

    let mut beams = state.beams.clone();
    let mut meteors = state.meteors.clone();
    let boss = boss.map(|b| {
        let b = advance_boss(&b, &player.rect, ground_y, &mut beams, &mut meteors, rng);
        beams = beams.iter().filter_map(advance_beam).collect();
        meteors = meteors.iter().filter_map(advance_meteor).collect();
        b
    });

    // ── 6. Projectiles ↔ player ──────────────────────────────────────────────
    let (beams, beam_hit) = resolve_hits(beams, &player);
    let (meteors, meteor_hit) = resolve_hits(meteors, &player);
    if beam_hit {
        log::debug!("beam hit the player at tick {}", state.frame);
    }
    if meteor_hit {
        log::debug!("meteor hit the player at tick {}", state.frame);
    }
    let player = if beam_hit || meteor_hit {
        set_damaged(&player)
    } else {
        player
    };

    GameState {
        stage,
        background,
        ground_y,
        player,
        enemies,
        boss,
        beams,
        meteors,
        score,
        frame: state.frame + 1,
        status: GameStatus::Running,
    }
}
