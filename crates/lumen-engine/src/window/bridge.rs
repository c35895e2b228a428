use winit::event::WindowEvent;

use crate::error::Result;
use crate::notify::{ChannelId, Payload, PushHub, ViewportSizeData};

/// Turns platform window events into lifecycle notifications.
///
/// The window/runtime layer owns one bridge and forwards every `WindowEvent`
/// to it; buffers and textures only ever see the hub.
pub struct WindowBridge {
    hub: PushHub,
    context_ready: bool,
    shut_down: bool,
    last_size: Option<ViewportSizeData>,
}

impl WindowBridge {
    pub fn new(hub: PushHub) -> Self {
        Self { hub, context_ready: false, shut_down: false, last_size: None }
    }

    pub fn hub(&self) -> &PushHub {
        &self.hub
    }

    /// Announces that the GL context is current, then ends that stream.
    ///
    /// Later calls do nothing.
    pub fn context_ready(&mut self) -> Result<()> {
        if self.context_ready || self.shut_down {
            return Ok(());
        }
        self.context_ready = true;

        let result = self.hub.push_empty(ChannelId::CONTEXT_INITIALIZED);
        self.hub.complete(ChannelId::CONTEXT_INITIALIZED);
        log::debug!("context initialized");
        result
    }

    /// Forwards a new framebuffer size.
    ///
    /// Zero sizes (minimized windows) and repeats of the last size are dropped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.shut_down || width == 0 || height == 0 {
            return Ok(());
        }
        let size = ViewportSizeData { width, height };
        if self.last_size == Some(size) {
            return Ok(());
        }
        self.last_size = Some(size);

        log::debug!("viewport resized to {width}x{height}");
        self.hub.push(ChannelId::VIEWPORT_SIZE_CHANGED, Payload::ViewportSize(size))
    }

    /// Broadcasts shutdown once and closes the remaining lifecycle streams.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;

        let result = self.hub.push_empty(ChannelId::SYSTEM_SHUTTING_DOWN);
        self.hub.complete(ChannelId::VIEWPORT_SIZE_CHANGED);
        self.hub.complete(ChannelId::SYSTEM_SHUTTING_DOWN);
        log::debug!("shutdown broadcast");
        result
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<()> {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.shutdown(),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use winit::dpi::PhysicalSize;

    use super::*;
    use crate::notify::{Reactable, Reactor};

    fn record(hub: &PushHub, channel: ChannelId) -> (Rc<RefCell<Vec<Payload>>>, crate::notify::Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = hub.subscribe(
            channel,
            Reactor::new().on_receive(move |p| {
                sink.borrow_mut().push(*p);
                Ok(())
            }),
        );
        (seen, sub)
    }

    #[test]
    fn context_ready_pushes_once_and_completes() {
        let hub = PushHub::new();
        let (seen, _sub) = record(&hub, ChannelId::CONTEXT_INITIALIZED);
        let mut bridge = WindowBridge::new(hub.clone());

        bridge.context_ready().unwrap();
        bridge.context_ready().unwrap();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(hub.subscriber_count(ChannelId::CONTEXT_INITIALIZED), 0);
    }

    #[test]
    fn resize_forwards_physical_size() {
        let hub = PushHub::new();
        let (seen, _sub) = record(&hub, ChannelId::VIEWPORT_SIZE_CHANGED);
        let mut bridge = WindowBridge::new(hub);

        bridge
            .handle_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 600)))
            .unwrap();
        bridge
            .handle_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 600)))
            .unwrap();
        bridge
            .handle_window_event(&WindowEvent::Resized(PhysicalSize::new(0, 0)))
            .unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![Payload::ViewportSize(ViewportSizeData { width: 800, height: 600 })]
        );
    }

    #[test]
    fn close_and_destroy_shut_down_once() {
        let hub = PushHub::new();
        let (seen, _sub) = record(&hub, ChannelId::SYSTEM_SHUTTING_DOWN);
        let mut bridge = WindowBridge::new(hub.clone());

        bridge.handle_window_event(&WindowEvent::CloseRequested).unwrap();
        bridge.handle_window_event(&WindowEvent::Destroyed).unwrap();

        assert_eq!(seen.borrow().len(), 1);
        assert!(bridge.is_shut_down());
        assert_eq!(hub.subscriber_count(ChannelId::SYSTEM_SHUTTING_DOWN), 0);
    }

    #[test]
    fn resize_after_shutdown_is_dropped() {
        let hub = PushHub::new();
        let (seen, _sub) = record(&hub, ChannelId::VIEWPORT_SIZE_CHANGED);
        let mut bridge = WindowBridge::new(hub);

        bridge.shutdown().unwrap();
        bridge.resize(10, 10).unwrap();

        assert!(seen.borrow().is_empty());
    }
}
