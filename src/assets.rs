use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bites_model::SpriteId;
use ggez::{
    audio::{self, SoundSource},
    graphics::{self, Font, Image},
    Context,
};
use tracing::{debug, info};

use crate::error::AssetLoadError;

const FONT_PATH: &str = "/fonts/PressStart2P.ttf";
const MUSIC_PATH: &str = "/sfx/backgroundmusic_1.wav";

/// The resources folder next to the manifest when run through cargo, otherwise next to the
/// working directory.
pub fn resource_dir() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        PathBuf::from("./resources")
    }
}

/// Reads a text resource before there is a ggez context (the window size depends on the map).
/// A missing file is not an error, it just means the built in default is used.
pub fn read_text(dir: &Path, name: &str) -> Result<Option<String>, AssetLoadError> {
    match std::fs::read_to_string(dir.join(name)) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AssetLoadError::Read {
            name: name.to_string(),
            source,
        }),
    }
}

/// Like [`read_text`] but the file has to be there.
pub fn require_text(dir: &Path, name: &str) -> Result<String, AssetLoadError> {
    std::fs::read_to_string(dir.join(name)).map_err(|source| AssetLoadError::Read {
        name: name.to_string(),
        source,
    })
}

pub fn load_image(ctx: &mut Context, name: &str) -> Result<Image, AssetLoadError> {
    let path = format!("/sprites/{}.png", name);
    let image = Image::new(ctx, &path).map_err(|e| AssetLoadError::from_ggez(&path, e))?;
    debug!(
        "Loaded {} ({}x{})",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

pub fn play_sound(
    ctx: &mut Context,
    path: &str,
    looped: bool,
) -> Result<audio::Source, AssetLoadError> {
    let mut source = audio::Source::new(ctx, path).map_err(|e| AssetLoadError::from_ggez(path, e))?;
    source.set_repeat(looped);
    source
        .play()
        .map_err(|e| AssetLoadError::from_ggez(path, e))?;
    Ok(source)
}

/// Every image and the font, loaded up front so drawing can't fail halfway through a game.
pub struct Assets {
    sheets: HashMap<SpriteId, Image>,
    pub floor: Image,
    pub wall: Image,
    pub font: Font,
}

impl Assets {
    pub fn load(ctx: &mut Context) -> Result<Assets, AssetLoadError> {
        let mut sheets = HashMap::new();
        sheets.insert(
            SpriteId::Player,
            load_image(ctx, SpriteId::Player.asset_name())?,
        );
        for id in SpriteId::ENEMIES.iter().chain(SpriteId::BITES.iter()) {
            sheets.insert(*id, load_image(ctx, id.asset_name())?);
        }

        let font = Font::new(ctx, FONT_PATH).map_err(|e| AssetLoadError::from_ggez(FONT_PATH, e))?;

        let assets = Assets {
            sheets,
            floor: load_image(ctx, "world/floor")?,
            wall: load_image(ctx, "world/wall")?,
            font,
        };
        info!("Loaded {} sprite sheets", assets.sheets.len());

        Ok(assets)
    }

    /// Every id gets a sheet in [`Assets::load`].
    pub fn sheet(&self, id: SpriteId) -> &Image {
        &self.sheets[&id]
    }

    pub fn start_music(ctx: &mut Context) -> Result<audio::Source, AssetLoadError> {
        play_sound(ctx, MUSIC_PATH, true)
    }
}

/// The part of a sheet to draw, in the 0..1 coordinates ggez wants.
pub fn frame_rect(image: &Image, (x, y): (i32, i32), width: i32, height: i32) -> graphics::Rect {
    let sheet_width = f32::from(image.width());
    let sheet_height = f32::from(image.height());

    graphics::Rect::new(
        x as f32 / sheet_width,
        y as f32 / sheet_height,
        width as f32 / sheet_width,
        height as f32 / sheet_height,
    )
}
