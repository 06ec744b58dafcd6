/*
 * Assets Module
 *
 * This module owns the two image overlays. Each slot starts empty and is
 * filled at most once; a failed load leaves the slot empty for the life of
 * the program, and the renderer simply skips that layer.
 */

use log::{info, warn};
use nannou::prelude::*;

pub const LOGO_FILE: &str = "logo.png";
pub const MAP_FILE: &str = "map.png";

pub struct Textures {
    pub logo: Option<wgpu::Texture>,
    pub map: Option<wgpu::Texture>,
}

impl Textures {
    // Load both overlays from the assets directory next to the manifest.
    pub fn load(app: &App) -> Self {
        Self {
            logo: load_texture(app, LOGO_FILE),
            map: load_texture(app, MAP_FILE),
        }
    }
}

fn load_texture(app: &App, name: &str) -> Option<wgpu::Texture> {
    let path = match app.assets_path() {
        Ok(dir) => dir.join(name),
        Err(err) => {
            warn!("no assets directory, skipping {}: {:?}", name, err);
            return None;
        }
    };
    match wgpu::Texture::from_path(app, &path) {
        Ok(texture) => {
            info!("loaded {}", path.display());
            Some(texture)
        }
        Err(err) => {
            warn!("could not load {}, layer stays empty: {:?}", path.display(), err);
            None
        }
    }
}
