use std::fmt;

/// Identifies a notification stream on a [`Reactable`](super::Reactable).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ChannelId(u32);

impl ChannelId {
    /// The native GL context is current; fires once.
    pub const CONTEXT_INITIALIZED: ChannelId = ChannelId(1);
    /// The viewport changed size; carries [`Payload::ViewportSize`].
    pub const VIEWPORT_SIZE_CHANGED: ChannelId = ChannelId(2);
    /// The system is shutting down; fires once.
    pub const SYSTEM_SHUTTING_DOWN: ChannelId = ChannelId(3);
    /// A texture should release its GPU object; carries [`Payload::DisposeTexture`].
    pub const DISPOSE_TEXTURE: ChannelId = ChannelId(4);

    /// Custom channels should start above the built-in range.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::CONTEXT_INITIALIZED => Some("context-initialized"),
            Self::VIEWPORT_SIZE_CHANGED => Some("viewport-size-changed"),
            Self::SYSTEM_SHUTTING_DOWN => Some("system-shutting-down"),
            Self::DISPOSE_TEXTURE => Some("dispose-texture"),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "channel#{}", self.0),
        }
    }
}

/// New viewport size in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ViewportSizeData {
    pub width: u32,
    pub height: u32,
}

/// Texture that should release its GPU object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisposeTextureData {
    pub texture_id: u32,
}

/// Data pushed along with a notification.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    ViewportSize(ViewportSizeData),
    DisposeTexture(DisposeTextureData),
}

impl Payload {
    #[inline]
    pub fn viewport_size(self) -> Option<ViewportSizeData> {
        match self {
            Payload::ViewportSize(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn dispose_texture(self) -> Option<DisposeTextureData> {
        match self {
            Payload::DisposeTexture(data) => Some(data),
            _ => None,
        }
    }
}
