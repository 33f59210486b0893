use side_scroller::config::*;
use side_scroller::entities::*;
use side_scroller::geometry::{Hitbox, Rect};
use side_scroller::stage::{stage_params, Stage};

const GROUND: i32 = 590;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));
    assert_eq!(r.center(), (25, 40));
}

#[test]
fn rect_from_center_round_trips_even_and_odd() {
    for (w, h) in [(50, 50), (51, 37), (1, 1)] {
        let r = Rect::from_center(100, -50, w, h);
        assert_eq!(r.center(), (100, -50), "size {w}x{h}");
        assert_eq!((r.w, r.h), (w, h));
    }
}

#[test]
fn rect_set_bottom_keeps_height() {
    let mut r = Rect::new(0, 0, 10, 25);
    r.set_bottom(100);
    assert_eq!(r.bottom(), 100);
    assert_eq!(r.top(), 75);
    assert_eq!(r.h, 25);
}

#[test]
fn rect_intersection_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(a.intersects(&Rect::new(2, 2, 2, 2))); // contained
    assert!(!a.intersects(&Rect::new(5, 5, 0, 3))); // empty
}

#[test]
fn rect_intersection_symmetric() {
    let a = Rect::new(3, 4, 20, 5);
    let b = Rect::new(10, -2, 4, 8);
    assert_eq!(a.intersects(&b), b.intersects(&a));
}

// ── Stage table ───────────────────────────────────────────────────────────────

#[test]
fn stage_table_values() {
    let one = stage_params(Stage::One);
    assert_eq!(one.bg_file, "bg_1.jpg");
    assert_eq!((one.bg_speed, one.enemy_speed, one.spawn_interval), (4, 7, 60));

    let two = stage_params(Stage::Two);
    assert_eq!(two.bg_file, "bg_2.jpg");
    assert_eq!((two.bg_speed, two.enemy_speed, two.spawn_interval), (6, 9, 45));
}

#[test]
fn stage_numbers() {
    assert_eq!(Stage::One.number(), 1);
    assert_eq!(Stage::Two.number(), 2);
}

// ── Constructors ──────────────────────────────────────────────────────────────

#[test]
fn background_starts_tiled() {
    let bg = Background::new(Stage::Two);
    assert_eq!(bg.x1, 0);
    assert_eq!(bg.x2, bg.x1 + bg.width);
    assert_eq!(bg.speed, 6);
    assert_eq!(bg.width, WIDTH);
}

#[test]
fn player_starts_idle_on_ground() {
    let p = Player::new(45, 45, 400);
    assert_eq!(p.rect.bottom(), 400);
    assert_eq!(p.rect.center_x(), PLAYER_SPAWN_X);
    assert_eq!((p.vx, p.vy, p.jump_count, p.damage_timer), (0, 0.0, 0, 0));
    assert_eq!(p.facing, Facing::Right);
    assert!(p.visible);
}

#[test]
fn enemy_enters_past_right_edge() {
    let e = Enemy::new(9, 480);
    assert_eq!(e.rect.left(), WIDTH + ENEMY_SPAWN_OFFSET);
    assert_eq!(e.rect.bottom(), 480);
    assert_eq!((e.rect.w, e.rect.h), (ENEMY_SIZE, ENEMY_SIZE));
    assert_eq!(e.speed, 9);
}

#[test]
fn boss_appears_near_right_edge() {
    let b = Boss::new(590);
    assert_eq!(b.rect.center(), (WIDTH - BOSS_INSET_X, 590 - BOSS_SPAWN_RISE));
    assert_eq!((b.rect.w, b.rect.h), (BOSS_SIZE, BOSS_SIZE));
    assert_eq!(b.timer, 0);
    assert_eq!(b.hp(), BOSS_HP);
}

#[test]
fn beam_centred_on_origin() {
    let b = Beam::new((700, 300));
    assert_eq!(b.rect.center(), (700, 300));
    assert_eq!((b.rect.w, b.rect.h), (BEAM_WIDTH, BEAM_HEIGHT));
    assert_eq!(b.speed, BEAM_SPEED);
}

#[test]
fn meteor_starts_above_screen() {
    let m = Meteor::new(250, 120);
    assert_eq!(m.rect.center(), (250, METEOR_SPAWN_Y));
    assert!(m.rect.top() < 0);
    assert_eq!(m.speed, METEOR_SPEED);
}

#[test]
fn hitbox_is_entity_rect() {
    let p = Player::new(40, 60, 300);
    let b = Beam::new((500, 200));
    let m = Meteor::new(10, 60);
    assert_eq!(p.hitbox(), p.rect);
    assert_eq!(b.hitbox(), b.rect);
    assert_eq!(m.hitbox(), m.rect);
    assert_eq!(m.rect.hitbox(), m.rect);
}

#[test]
fn tick_input_default_is_idle() {
    let i = TickInput::default();
    assert!(!i.left && !i.right && !i.jump && !i.quit);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        stage: Stage::One,
        background: Background::new(Stage::One),
        ground_y: GROUND,
        player: Player::new(40, 60, GROUND),
        enemies: Vec::new(),
        boss: None,
        beams: Vec::new(),
        meteors: Vec::new(),
        score: 0,
        frame: 0,
        status: GameStatus::Running,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(7, GROUND));
    cloned.boss = Some(Boss::new(GROUND));

    assert_ne!(original.player.rect.x, 99);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert!(original.boss.is_none());
}
