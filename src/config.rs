/// Compile-time tuning.  Nothing here is read from disk or the command line.

// ── Screen & timing ──────────────────────────────────────────────────────────

pub const WIDTH: i32 = 1100;
pub const HEIGHT: i32 = 650;
pub const FPS: u32 = 60;

/// Draw a horizontal line at the detected ground coordinate.
pub const DEBUG_DRAW_GROUND_LINE: bool = cfg!(feature = "ground-line-overlay");

// ── Progression ──────────────────────────────────────────────────────────────

/// Elapsed ticks after which stage 1 hands over to stage 2.
pub const STAGE2_TICK: u64 = 1500;

/// The boss appears on the tick the score first exceeds this value.
pub const BOSS_SCORE_THRESHOLD: u32 = 500;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN_X: i32 = 200;
pub const PLAYER_SCALE: f32 = 0.9;
pub const PLAYER_SPEED: i32 = 8;
pub const GRAVITY: f32 = 0.85;
pub const JUMP_VELOCITY: f32 = -15.0;
pub const MAX_JUMPS: u32 = 2;
/// Ticks of flicker after a hit.
pub const BLINK_TICKS: u32 = 30;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: i32 = 50;
/// Enemies enter this far past the right edge.
pub const ENEMY_SPAWN_OFFSET: i32 = 100;

// ── Boss & projectiles ───────────────────────────────────────────────────────

pub const BOSS_SIZE: i32 = 300;
pub const BOSS_HP: u32 = 100;
/// Horizontal centre, measured from the right edge.
pub const BOSS_INSET_X: i32 = 150;
/// Height above the ground line at which the boss first appears.
pub const BOSS_SPAWN_RISE: i32 = 200;
/// Height above the ground line around which the boss bobs.
pub const BOSS_HOVER_RISE: i32 = 250;
pub const BOSS_BOB_AMPLITUDE: f64 = 100.0;
/// Radians per tick.
pub const BOSS_BOB_SPEED: f64 = 0.05;
pub const BEAM_INTERVAL: u64 = 90;
pub const METEOR_INTERVAL: u64 = 120;

pub const BEAM_WIDTH: i32 = 200;
pub const BEAM_HEIGHT: i32 = 80;
pub const BEAM_SPEED: i32 = 15;

pub const METEOR_MIN_SIZE: i32 = 50;
pub const METEOR_MAX_SIZE: i32 = 150;
/// Vertical centre of a freshly spawned meteor (above the screen).
pub const METEOR_SPAWN_Y: i32 = -50;
pub const METEOR_SPEED: i32 = 6;

// ── Assets ───────────────────────────────────────────────────────────────────

/// Searched in order; the first readable file wins.
pub const ASSET_ROOTS: &[&str] = &["fig", "."];

pub const PLAYER_SPRITE: &str = "3.png";
pub const BEAM_SPRITE: &str = "Beam.png";
pub const METEOR_SPRITE: &str = "Meteor.png";
pub const BOSS_SPRITE: &str = "Ramieru.png";

pub const PLACEHOLDER_SIZE: u32 = 50;
pub const PLACEHOLDER_COLOR: [u8; 3] = [255, 0, 255];
pub const ENEMY_COLOR: [u8; 3] = [230, 70, 70];
