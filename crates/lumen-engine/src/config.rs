use crate::gl::GlCapabilities;
use crate::render::DEFAULT_BATCH_SIZE;

/// Program handles used by each batch kind.
///
/// Shader compilation belongs to the application; `0` means "draw with
/// whatever program is current".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ShaderPrograms {
    pub rect: u32,
    pub line: u32,
    pub texture: u32,
    pub glyph: u32,
}

/// Construction parameters for [`Renderer`](crate::render::Renderer).
///
/// Keep this small. Add a field only when a backend or platform needs it.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Items per buffer before a flush is forced.
    pub batch_size: u32,

    /// Debug groups and object labels.
    pub capabilities: GlCapabilities,

    pub programs: ShaderPrograms,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            capabilities: GlCapabilities::default(),
            programs: ShaderPrograms::default(),
        }
    }
}

impl RendererConfig {
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_debug_output(mut self, enabled: bool) -> Self {
        self.capabilities.debug_output = enabled;
        self
    }
}
