use std::fmt;

use crate::notify::ChannelId;

/// Errors raised by buffers, textures, the notification hub and the atlas builder.
///
/// Every variant except `Gl` and `Busy` indicates caller misuse. Only `Busy`
/// may succeed when the same notification is pushed again.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A constructor argument was empty or otherwise unusable.
    InvalidArgument { name: &'static str, reason: String },

    /// An index or selector fell outside its accepted range.
    OutOfRange { name: &'static str, value: u64, limit: u64 },

    /// `upload_data` was called before the context-initialized notification
    /// or after shutdown.
    NotInitialized { buffer: String },

    /// A notification arrived without the payload its channel requires.
    BadPushNotification { source: String, channel: ChannelId },

    /// A notification reached a buffer that was already borrowed, for example
    /// from inside its own `with_shape` callback. Nothing was applied.
    Busy { buffer: String, channel: ChannelId },

    /// The graphics backend refused to create an object.
    Gl(String),

    /// No room left in the glyph atlas.
    AtlasFull { width: u32, height: u32 },

    /// A font could not be parsed.
    FontLoad(String),
}

impl RenderError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        RenderError::InvalidArgument { name, reason: reason.into() }
    }

    pub(crate) fn out_of_range(name: &'static str, value: u64, limit: u64) -> Self {
        RenderError::OutOfRange { name, value, limit }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{name}`: {reason}")
            }
            RenderError::OutOfRange { name, value, limit } => {
                write!(f, "`{name}` value {value} is out of range (limit {limit})")
            }
            RenderError::NotInitialized { buffer } => {
                write!(f, "{buffer} buffer used before the GL context was initialized")
            }
            RenderError::BadPushNotification { source, channel } => {
                write!(f, "bad push notification for {source}: channel {channel} delivered no usable payload")
            }
            RenderError::Busy { buffer, channel } => {
                write!(f, "{buffer} buffer is busy; notification on channel {channel} was not applied")
            }
            RenderError::Gl(msg) => write!(f, "gl error: {msg}"),
            RenderError::AtlasFull { width, height } => {
                write!(f, "glyph atlas {width}x{height} is full")
            }
            RenderError::FontLoad(msg) => write!(f, "font load error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RenderError>;
