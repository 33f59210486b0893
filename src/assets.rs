/// Asset loading with a placeholder fallback, plus the bundle of sprites and
/// backdrops the renderer and the simulation read from.
///
/// A missing or undecodable file is never fatal: `AssetLoader::load` logs a
/// warning and hands back a magenta square instead.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::config::{
    ASSET_ROOTS, BEAM_HEIGHT, BEAM_SPRITE, BEAM_WIDTH, BOSS_SIZE, BOSS_SPRITE, ENEMY_COLOR,
    ENEMY_SIZE, HEIGHT, METEOR_SPRITE, PLACEHOLDER_COLOR, PLACEHOLDER_SIZE, PLAYER_SCALE,
    PLAYER_SPRITE, WIDTH,
};
use crate::entities::Facing;
use crate::ground::detect_ground_y;
use crate::stage::{stage_params, Stage};

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("asset '{name}' not found (tried {tried:?})")]
    NotFound { name: String, tried: Vec<PathBuf> },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct AssetLoader {
    roots: Vec<PathBuf>,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::with_roots(ASSET_ROOTS)
    }
}

impl AssetLoader {
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            roots: roots.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
        }
    }

    /// The usual roots resolved under `dir`, then the same roots relative to
    /// the working directory.
    pub fn anchored_at(dir: &Path) -> Self {
        let mut roots: Vec<PathBuf> = ASSET_ROOTS.iter().map(|r| dir.join(r)).collect();
        for root in ASSET_ROOTS.iter().map(PathBuf::from) {
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        Self { roots }
    }

    /// Search next to the running binary first, so the game finds its art
    /// whatever directory it is started from.
    pub fn beside_executable() -> Self {
        match std::env::current_exe() {
            Ok(exe) => match exe.parent() {
                Some(dir) => Self::anchored_at(dir),
                None => Self::default(),
            },
            Err(e) => {
                log::warn!("cannot locate the executable ({e}); searching the working directory only");
                Self::default()
            }
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Try every root in order.  A file that exists but fails to decode does
    /// not stop the search; it is only reported if no later root succeeds.
    pub fn try_load(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let mut tried = Vec::with_capacity(self.roots.len());
        let mut decode_err = None;

        for root in &self.roots {
            let path = root.join(name);
            if !path.is_file() {
                tried.push(path);
                continue;
            }
            match image::open(&path) {
                Ok(img) => return Ok(img.to_rgba8()),
                Err(source) => decode_err = Some(AssetError::Decode { path, source }),
            }
        }

        Err(decode_err.unwrap_or_else(|| AssetError::NotFound {
            name: name.to_string(),
            tried,
        }))
    }

    /// Like `try_load`, but substitutes the placeholder on any failure.
    pub fn load(&self, name: &str) -> RgbaImage {
        self.try_load(name).unwrap_or_else(|e| {
            log::warn!("{e}; using placeholder");
            placeholder()
        })
    }
}

/// The fixed-size, fixed-colour stand-in for a missing image.
pub fn placeholder() -> RgbaImage {
    solid(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_COLOR)
}

fn solid(w: u32, h: u32, [r, g, b]: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([r, g, b, 255]))
}

fn scale(img: &RgbaImage, w: u32, h: u32) -> RgbaImage {
    imageops::resize(img, w.max(1), h.max(1), FilterType::Triangle)
}

// ── Backdrops ─────────────────────────────────────────────────────────────────

/// A stage backdrop scaled to the screen, with the ground line measured on the
/// scaled pixels.
#[derive(Clone, Debug)]
pub struct Backdrop {
    pub image: RgbaImage,
    pub ground_y: i32,
}

impl Backdrop {
    pub fn from_raw(raw: &RgbaImage) -> Self {
        let image = scale(raw, WIDTH as u32, HEIGHT as u32);
        let ground_y = detect_ground_y(&image);
        Self { image, ground_y }
    }
}

/// Where the walkable surface lies for each stage.  The simulation only needs
/// this one number per backdrop, so it depends on the trait rather than on
/// the pixels.
pub trait Scenery {
    fn ground_line(&self, stage: Stage) -> i32;
}

// ── Bundle ────────────────────────────────────────────────────────────────────

pub struct Assets {
    stage_one: Backdrop,
    stage_two: Backdrop,
    /// Indexed by `Facing`; both orientations are baked once here.
    player_right: RgbaImage,
    player_left: RgbaImage,
    enemy: RgbaImage,
    boss: RgbaImage,
    beam: RgbaImage,
    meteor: RgbaImage,
}

impl Assets {
    pub fn load(loader: &AssetLoader) -> Self {
        let stage_one = Backdrop::from_raw(&loader.load(stage_params(Stage::One).bg_file));
        let stage_two = Backdrop::from_raw(&loader.load(stage_params(Stage::Two).bg_file));

        // The sprite file is drawn facing left; mirror it for the right.
        let raw = loader.load(PLAYER_SPRITE);
        let pw = (raw.width() as f32 * PLAYER_SCALE).round() as u32;
        let ph = (raw.height() as f32 * PLAYER_SCALE).round() as u32;
        let player_left = scale(&raw, pw, ph);
        let player_right = imageops::flip_horizontal(&player_left);

        Self {
            stage_one,
            stage_two,
            player_right,
            player_left,
            enemy: solid(ENEMY_SIZE as u32, ENEMY_SIZE as u32, ENEMY_COLOR),
            boss: scale(&loader.load(BOSS_SPRITE), BOSS_SIZE as u32, BOSS_SIZE as u32),
            beam: scale(&loader.load(BEAM_SPRITE), BEAM_WIDTH as u32, BEAM_HEIGHT as u32),
            meteor: loader.load(METEOR_SPRITE),
        }
    }

    pub fn backdrop(&self, stage: Stage) -> &Backdrop {
        match stage {
            Stage::One => &self.stage_one,
            Stage::Two => &self.stage_two,
        }
    }

    pub fn player_sprite(&self, facing: Facing) -> &RgbaImage {
        match facing {
            Facing::Right => &self.player_right,
            Facing::Left => &self.player_left,
        }
    }

    pub fn player_size(&self) -> (i32, i32) {
        let (w, h) = self.player_right.dimensions();
        (w as i32, h as i32)
    }

    pub fn enemy(&self) -> &RgbaImage {
        &self.enemy
    }

    pub fn boss(&self) -> &RgbaImage {
        &self.boss
    }

    pub fn beam(&self) -> &RgbaImage {
        &self.beam
    }

    pub fn meteor(&self) -> &RgbaImage {
        &self.meteor
    }
}

impl Scenery for Assets {
    fn ground_line(&self, stage: Stage) -> i32 {
        self.backdrop(stage).ground_y
    }
}
