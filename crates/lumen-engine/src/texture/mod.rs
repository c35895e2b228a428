//! Images and their GPU textures.

mod factory;
mod image;
#[allow(clippy::module_inception)]
mod texture;

pub use factory::TextureFactory;
pub use image::{Argb, ImageData};
pub use texture::Texture;
