mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style, terminal, ExecutableCommand,
};
use rand::thread_rng;

use side_scroller::assets::{AssetLoader, Assets};
use side_scroller::canvas::Canvas;
use side_scroller::compute::{init_state, tick};
use side_scroller::config::FPS;
use side_scroller::entities::{GameState, GameStatus, TickInput};
use side_scroller::render::render_frame;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

const LEFT_KEYS: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Drain pending terminal events into this frame's input.  Jump and quit
/// fire on the initial press only; auto-repeat merely keeps a key held.
fn poll_input(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> TickInput {
    let mut input = TickInput::default();

    while let Ok(ev) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        match kind {
            KeyEventKind::Press => {
                // Without release reporting, auto-repeat also arrives as
                // Press; only a key that was not already held is an edge.
                let edge = !is_held(key_frame, &code, frame);
                key_frame.insert(code, frame);
                if !edge {
                    continue;
                }
                match code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => input.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        input.quit = true;
                    }
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
                        input.jump = true;
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }

    input.left = any_held(key_frame, LEFT_KEYS, frame);
    input.right = any_held(key_frame, RIGHT_KEYS, frame);
    input
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One simulation tick per frame, throttled to
/// `FPS`.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    assets: &Assets,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_budget = Duration::from_secs_f64(1.0 / FPS as f64);
    let mut rng = thread_rng();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut canvas = Canvas::new(0, 0);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let input = poll_input(rx, &mut key_frame, frame);
        *state = tick(state, &input, assets, &mut rng);
        if state.status == GameStatus::Quit {
            return Ok(());
        }

        // Follow terminal resizes.
        let (cols, rows) = terminal::size()?;
        let (cw, ch) = display::canvas_size(cols, rows);
        if (canvas.width(), canvas.height()) != (cw, ch) {
            canvas = Canvas::new(cw, ch);
            out.execute(terminal::Clear(terminal::ClearType::All))?;
        }

        render_frame(state, assets, &mut canvas);
        display::present(out, &canvas, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Load before switching screens so asset warnings stay readable.
    let loader = AssetLoader::beside_executable();
    log::debug!("asset roots: {:?}", loader.roots());
    let assets = Assets::load(&loader);
    let mut state = init_state(assets.player_size(), &assets);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &assets, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("final score {} after {} ticks", state.score, state.frame);
    result
}
