/// Draw the game state onto a `Canvas`.
///
/// Every on-screen thing implements `Render`; `render_frame` stacks them in
/// painter's order.

use crate::assets::Assets;
use crate::canvas::{Canvas, Rgb};
use crate::config::{DEBUG_DRAW_GROUND_LINE, HEIGHT};
use crate::entities::{Background, Beam, Boss, Enemy, GameState, Meteor, Player};
use crate::geometry::Rect;

const C_VOID: Rgb = [0, 0, 0];
const C_GROUND_LINE: Rgb = [0, 0, 0];
const GROUND_LINE_THICKNESS: i32 = 2;

pub trait Render {
    fn render(&self, canvas: &mut Canvas, assets: &Assets);
}

impl Render for Background {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        let image = &assets.backdrop(self.stage).image;
        canvas.blit(image, Rect::new(self.x1, 0, self.width, HEIGHT));
        canvas.blit(image, Rect::new(self.x2, 0, self.width, HEIGHT));
    }
}

/// Debug overlay marking the detected ground.
pub struct GroundLine(pub i32);

impl Render for GroundLine {
    fn render(&self, canvas: &mut Canvas, _assets: &Assets) {
        canvas.hline(self.0, GROUND_LINE_THICKNESS, C_GROUND_LINE);
    }
}

impl Render for Player {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        if self.visible {
            canvas.blit(assets.player_sprite(self.facing), self.rect);
        }
    }
}

impl Render for Enemy {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        canvas.blit(assets.enemy(), self.rect);
    }
}

impl Render for Boss {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        canvas.blit(assets.boss(), self.rect);
    }
}

impl Render for Beam {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        canvas.blit(assets.beam(), self.rect);
    }
}

impl Render for Meteor {
    fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        canvas.blit(assets.meteor(), self.rect);
    }
}

/// Compose one complete frame.
pub fn render_frame(state: &GameState, assets: &Assets, canvas: &mut Canvas) {
    canvas.clear(C_VOID);

    let ground = GroundLine(state.ground_y);
    let mut layers: Vec<&dyn Render> = vec![&state.background];
    if DEBUG_DRAW_GROUND_LINE {
        layers.push(&ground);
    }
    layers.push(&state.player);
    layers.extend(state.enemies.iter().map(|e| e as &dyn Render));
    if let Some(boss) = &state.boss {
        layers.extend(state.beams.iter().map(|b| b as &dyn Render));
        layers.extend(state.meteors.iter().map(|m| m as &dyn Render));
        layers.push(boss);
    }

    for layer in layers {
        layer.render(canvas, assets);
    }
}
