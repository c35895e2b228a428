//! Lifecycle notifications.
//!
//! Buffers and textures do not know who owns the window or the GL context.
//! They subscribe to channels on a [`Reactable`] and react when the platform
//! layer pushes context-ready, resize, shutdown or texture-dispose events.

mod channel;
mod hub;
mod subscription;

pub use channel::{ChannelId, DisposeTextureData, Payload, ViewportSizeData};
pub use hub::PushHub;
pub use subscription::{Reactable, Reactor, Subscription};
