/// Game entity types.  Pure data, no per-frame logic.

use crate::config::{
    BEAM_HEIGHT, BEAM_SPEED, BEAM_WIDTH, BOSS_HP, BOSS_INSET_X, BOSS_SIZE, BOSS_SPAWN_RISE,
    ENEMY_SIZE, ENEMY_SPAWN_OFFSET, METEOR_SPAWN_Y, METEOR_SPEED, PLAYER_SPAWN_X, WIDTH,
};
use crate::geometry::{Hitbox, Rect};
use crate::stage::{stage_params, Stage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Window closed or escape pressed.  Terminal.
    Quit,
}

/// One tick's worth of input.  `left`/`right` are held levels; `jump` and
/// `quit` are edges and fire at most once per key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub quit: bool,
}

// ── Scenery ───────────────────────────────────────────────────────────────────

/// Two copies of the stage backdrop laid side by side.  The offsets are
/// always exactly `width` apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub stage: Stage,
    pub x1: i32,
    pub x2: i32,
    pub speed: i32,
    pub width: i32,
}

impl Background {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            x1: 0,
            x2: WIDTH,
            speed: stage_params(stage).bg_speed,
            width: WIDTH,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal velocity: `±PLAYER_SPEED` or 0.
    pub vx: i32,
    /// Vertical velocity; positive is downward.
    pub vy: f32,
    pub jump_count: u32,
    pub facing: Facing,
    /// Blink ticks remaining; 0 when not blinking.
    pub damage_timer: u32,
    /// Whether the player is drawn this tick (false during a blink "off" phase).
    pub visible: bool,
}

impl Player {
    /// Stand a `w`×`h` player on the ground, centred at the spawn column.
    pub fn new(w: i32, h: i32, ground_y: i32) -> Self {
        let mut rect = Rect::from_center(PLAYER_SPAWN_X, ground_y, w, h);
        rect.set_bottom(ground_y);
        Self {
            rect,
            vx: 0,
            vy: 0.0,
            jump_count: 0,
            facing: Facing::Right,
            damage_timer: 0,
            visible: true,
        }
    }
}

// ── Hazards ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: i32,
}

impl Enemy {
    /// Enters just past the right edge, standing on the ground.
    pub fn new(speed: i32, ground_y: i32) -> Self {
        let mut rect = Rect::new(WIDTH + ENEMY_SPAWN_OFFSET, 0, ENEMY_SIZE, ENEMY_SIZE);
        rect.set_bottom(ground_y);
        Self { rect, speed }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boss {
    pub rect: Rect,
    /// Ticks since the boss appeared.  Never reset.
    pub timer: u64,
    /// Tracked for future use; nothing deals damage yet.
    pub hp: u32,
    /// Vertical centre the bob oscillates around.
    pub anchor_y: i32,
}

impl Boss {
    pub fn new(ground_y: i32) -> Self {
        let anchor_y = ground_y - BOSS_SPAWN_RISE;
        Self {
            rect: Rect::from_center(WIDTH - BOSS_INSET_X, anchor_y, BOSS_SIZE, BOSS_SIZE),
            timer: 0,
            hp: BOSS_HP,
            anchor_y,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Beam {
    pub rect: Rect,
    pub speed: i32,
}

impl Beam {
    pub fn new((cx, cy): (i32, i32)) -> Self {
        Self {
            rect: Rect::from_center(cx, cy, BEAM_WIDTH, BEAM_HEIGHT),
            speed: BEAM_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meteor {
    pub rect: Rect,
    pub speed: i32,
}

impl Meteor {
    /// A `size`×`size` rock centred on `target_x`, above the screen.
    pub fn new(target_x: i32, size: i32) -> Self {
        Self {
            rect: Rect::from_center(target_x, METEOR_SPAWN_Y, size, size),
            speed: METEOR_SPEED,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.  Holds no pixels: images live in
/// `Assets`, and the ground line is the only value derived from them.
#[derive(Clone, Debug)]
pub struct GameState {
    pub stage: Stage,
    pub background: Background,
    /// Walkable surface of the installed backdrop.  Every entity reads it.
    pub ground_y: i32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// `Some` once the boss has appeared; it never leaves.
    pub boss: Option<Boss>,
    pub beams: Vec<Beam>,
    pub meteors: Vec<Meteor>,
    /// Survival ticks counted until the boss appears.
    pub score: u32,
    /// Elapsed ticks.
    pub frame: u64,
    pub status: GameStatus,
}

// ── Hitboxes ──────────────────────────────────────────────────────────────────

impl Hitbox for Player {
    fn hitbox(&self) -> Rect {
        self.rect
    }
}

impl Hitbox for Beam {
    fn hitbox(&self) -> Rect {
        self.rect
    }
}

impl Hitbox for Meteor {
    fn hitbox(&self) -> Rect {
        self.rect
    }
}
