//! Rendering module
//!
//! Draws the board through a `Surface`: sprites blitted at their top-left
//! corner, then HUD text on top. The browser build implements `Surface`
//! for a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod hud;

use glam::Vec2;

use crate::sim::{Entity, EntityKind, GameState, Player};

/// Output sink for one frame
pub trait Surface {
    /// Opaque image handle supplied by the resource provider
    type Image;

    fn draw_image(&mut self, image: &Self::Image, x: f32, y: f32);
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Logical sprite names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Player,
    Enemy,
    Friend,
    Boss,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Background,
        Sprite::Player,
        Sprite::Enemy,
        Sprite::Friend,
        Sprite::Boss,
    ];
}

/// One loaded image handle per sprite
#[derive(Debug, Clone)]
pub struct SpriteSheet<I> {
    pub background: I,
    pub player: I,
    pub enemy: I,
    pub friend: I,
    pub boss: I,
}

impl<I> SpriteSheet<I> {
    /// Build a sheet by asking `load` for each sprite
    pub fn load(mut load: impl FnMut(Sprite) -> I) -> Self {
        Self {
            background: load(Sprite::Background),
            player: load(Sprite::Player),
            enemy: load(Sprite::Enemy),
            friend: load(Sprite::Friend),
            boss: load(Sprite::Boss),
        }
    }

    pub fn get(&self, sprite: Sprite) -> &I {
        match sprite {
            Sprite::Background => &self.background,
            Sprite::Player => &self.player,
            Sprite::Enemy => &self.enemy,
            Sprite::Friend => &self.friend,
            Sprite::Boss => &self.boss,
        }
    }
}

/// Anything drawn as a single sprite at a position
pub trait Render {
    fn sprite(&self) -> Sprite;
    fn origin(&self) -> Vec2;

    /// Draw the sprite at the origin. Purely visual.
    fn render<S: Surface>(&self, surface: &mut S, sheet: &SpriteSheet<S::Image>) {
        let origin = self.origin();
        surface.draw_image(sheet.get(self.sprite()), origin.x, origin.y);
    }
}

impl Render for Entity {
    fn sprite(&self) -> Sprite {
        match self.kind {
            EntityKind::Enemy => Sprite::Enemy,
            EntityKind::Friend => Sprite::Friend,
            EntityKind::Boss => Sprite::Boss,
        }
    }

    fn origin(&self) -> Vec2 {
        self.pos
    }
}

impl Render for Player {
    fn sprite(&self) -> Sprite {
        Sprite::Player
    }

    fn origin(&self) -> Vec2 {
        self.pos
    }
}

/// Draw a full frame: background, falling entities, player, HUD
pub fn draw_frame<S: Surface>(surface: &mut S, sheet: &SpriteSheet<S::Image>, state: &GameState) {
    surface.draw_image(&sheet.background, 0.0, 0.0);
    for kind in EntityKind::ALL {
        for entity in state.slots(kind).iter() {
            entity.render(surface, sheet);
        }
    }
    state.player.render(surface, sheet);
    hud::draw_hud(surface, state);
}
