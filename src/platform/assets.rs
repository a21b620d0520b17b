//! Resource provider
//!
//! Logical sprite and song names resolve to asset paths served next to the
//! page. The browser build loads them into image and audio elements.

use crate::renderer::Sprite;
use crate::sim::Song;

pub fn sprite_path(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::Background => "images/desert.png",
        Sprite::Player => "images/cactus.png",
        Sprite::Enemy => "images/drop.png",
        Sprite::Friend => "images/sun.png",
        Sprite::Boss => "images/storm.png",
    }
}

pub fn song_path(song: Song) -> &'static str {
    match song {
        Song::Main => "music/desert-theme.mp3",
        Song::Boss => "music/storm-theme.mp3",
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsValue;
    use web_sys::HtmlImageElement;

    use super::sprite_path;
    use crate::renderer::{Sprite, SpriteSheet};

    fn load_image(sprite: Sprite) -> Result<HtmlImageElement, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_src(sprite_path(sprite));
        Ok(img)
    }

    /// Start loading every sprite. Images draw once the browser has them.
    pub fn load_sprites() -> Result<SpriteSheet<HtmlImageElement>, JsValue> {
        Ok(SpriteSheet {
            background: load_image(Sprite::Background)?,
            player: load_image(Sprite::Player)?,
            enemy: load_image(Sprite::Enemy)?,
            friend: load_image(Sprite::Friend)?,
            boss: load_image(Sprite::Boss)?,
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::load_sprites;
