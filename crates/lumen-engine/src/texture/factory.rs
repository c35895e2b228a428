use std::rc::Rc;

use crate::error::Result;
use crate::gl::GlService;
use crate::notify::Reactable;
use crate::text::GlyphAtlas;

use super::{ImageData, Texture};

/// Creates textures wired to one GL service and notification hub.
#[derive(Clone)]
pub struct TextureFactory {
    service: Rc<GlService>,
    hub: Rc<dyn Reactable>,
}

impl TextureFactory {
    pub fn new(service: Rc<GlService>, hub: Rc<dyn Reactable>) -> Self {
        Self { service, hub }
    }

    pub fn create(&self, name: &str, file_path: &str, image: &ImageData) -> Result<Texture> {
        Texture::new(self.service.clone(), self.hub.as_ref(), name, file_path, image)
    }

    /// Uploads the atlas image; the texture is named after the atlas source and size.
    pub fn create_glyph_atlas(&self, atlas: &GlyphAtlas) -> Result<Texture> {
        let name = format!("{} {}px Atlas", atlas.source(), atlas.font_size());
        self.create(&name, atlas.source(), atlas.image())
    }
}
