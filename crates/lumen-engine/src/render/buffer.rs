use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::{RenderError, Result};
use crate::gl::{BufferTarget, BufferUsage, GlService};
use crate::notify::{ChannelId, Payload, Reactable, Reactor, Subscription, ViewportSizeData};

/// Batch capacity used when the caller does not pick one.
pub const DEFAULT_BATCH_SIZE: u32 = 100;

/// Shape-specific half of a [`GpuBuffer`].
///
/// The buffer owns the lifecycle (when GL objects exist, which are bound, in
/// which order things happen). The shape decides what goes into them.
pub trait BufferShape {
    /// Domain item uploaded into one batch slot.
    type Item;

    /// Human-readable name used for debug groups and object labels.
    fn name(&self) -> &str;

    /// Initial vertex buffer contents for `capacity` slots.
    fn generate_vertex_data(&self, capacity: u32) -> Vec<u8>;

    /// Index buffer contents for `capacity` slots.
    fn generate_index_data(&self, capacity: u32) -> Vec<u32>;

    /// Describes one vertex record to the bound VAO. VAO and VBO are bound.
    fn setup_vao(&self, svc: &GlService);

    /// Side effects needed before the item's vertices are written.
    fn prepare_for_upload(&mut self, svc: &GlService, item: &Self::Item) {
        let _ = (svc, item);
    }

    /// Writes the item into slot `batch_index` of the bound VBO.
    fn update_vertex_data(&mut self, svc: &GlService, item: &Self::Item, batch_index: u32);

    fn viewport_changed(&mut self, size: ViewportSizeData) {
        let _ = size;
    }

    /// Items with different keys cannot share a draw call.
    fn batch_key(&self, item: &Self::Item) -> Option<u32> {
        let _ = item;
        None
    }
}

/// GL names owned by an initialized buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BufferHandles {
    pub vao: u32,
    pub vbo: u32,
    pub ebo: u32,
}

/// Lifecycle of a [`GpuBuffer`]. Transitions only move forward.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferState {
    /// Constructed; waiting for the GL context.
    Uninitialized,
    Initialized(BufferHandles),
    /// GL objects released; terminal.
    Disposed,
}

struct BufferCore<S> {
    service: Rc<GlService>,
    shape: S,
    capacity: u32,
    state: BufferState,

    init_sub: Subscription,
    viewport_sub: Subscription,
    shutdown_sub: Subscription,
}

/// Fixed-capacity vertex/index buffer pair for one kind of quad.
///
/// Construction only subscribes to lifecycle notifications; no GL call is made
/// until the context-initialized notification arrives. From then on items can
/// be written into slots `0..capacity` with [`upload_data`](Self::upload_data).
/// The shutdown notification deletes the GL objects once.
pub struct GpuBuffer<S: BufferShape + 'static> {
    core: Rc<RefCell<BufferCore<S>>>,
}

impl<S: BufferShape + 'static> GpuBuffer<S> {
    pub fn new(
        service: Rc<GlService>,
        hub: &dyn Reactable,
        shape: S,
        capacity: u32,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(RenderError::invalid_argument("capacity", "batch capacity must be at least 1"));
        }

        let name: Rc<str> = shape.name().into();
        let core = Rc::new(RefCell::new(BufferCore {
            service,
            shape,
            capacity,
            state: BufferState::Uninitialized,
            init_sub: Subscription::empty(),
            viewport_sub: Subscription::empty(),
            shutdown_sub: Subscription::empty(),
        }));
        let weak = Rc::downgrade(&core);

        let init_sub = hub.subscribe(
            ChannelId::CONTEXT_INITIALIZED,
            Reactor::new()
                .on_receive({
                    let weak = weak.clone();
                    let name = name.clone();
                    move |_| {
                        with_core(&weak, &name, ChannelId::CONTEXT_INITIALIZED, |c| {
                            c.on_context_initialized()
                        })
                    }
                })
                .on_complete({
                    let weak = weak.clone();
                    move || release(&weak, |c| &mut c.init_sub)
                }),
        );

        let viewport_sub = hub.subscribe(
            ChannelId::VIEWPORT_SIZE_CHANGED,
            Reactor::new()
                .on_receive({
                    let weak = weak.clone();
                    let name = name.clone();
                    move |payload| {
                        with_core(&weak, &name, ChannelId::VIEWPORT_SIZE_CHANGED, |c| {
                            c.on_viewport_size_changed(payload)
                        })
                    }
                })
                .on_complete({
                    let weak = weak.clone();
                    move || release(&weak, |c| &mut c.viewport_sub)
                }),
        );

        let shutdown_sub = hub.subscribe(
            ChannelId::SYSTEM_SHUTTING_DOWN,
            Reactor::new().on_receive(move |_| {
                with_core(&weak, &name, ChannelId::SYSTEM_SHUTTING_DOWN, |c| {
                    c.on_shutdown();
                    Ok(())
                })
            }),
        );

        {
            let mut c = core.borrow_mut();
            c.init_sub = init_sub;
            c.viewport_sub = viewport_sub;
            c.shutdown_sub = shutdown_sub;
            log::debug!("{} buffer armed (capacity {capacity})", c.shape.name());
        }

        Ok(Self { core })
    }

    /// Writes `item` into slot `batch_index`.
    ///
    /// Only a partial sub-update of that slot is issued. Fails when the index
    /// is outside `0..capacity` or the buffer is not initialized.
    pub fn upload_data(&self, item: &S::Item, batch_index: u32) -> Result<()> {
        self.core.borrow_mut().upload(item, batch_index)
    }

    /// Draws the first `item_count` slots with `program` (`0` keeps the current one).
    pub fn draw(&self, item_count: u32, program: u32) -> Result<()> {
        let core = self.core.borrow();
        let BufferState::Initialized(handles) = core.state else {
            return Err(core.not_initialized());
        };
        if item_count > core.capacity {
            return Err(RenderError::out_of_range("item_count", item_count as u64, core.capacity as u64 + 1));
        }
        if item_count == 0 {
            return Ok(());
        }

        let svc = &core.service;
        if program != 0 {
            svc.gl().use_program(program);
        }
        svc.bind_vao(handles.vao);
        svc.bind_ebo(handles.ebo);
        svc.gl().draw_elements(item_count * INDICES_PER_ITEM);
        svc.unbind_vao();
        svc.unbind_ebo();
        Ok(())
    }

    pub fn batch_key(&self, item: &S::Item) -> Option<u32> {
        self.core.borrow().shape.batch_key(item)
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.core.borrow().capacity
    }

    #[inline]
    pub fn state(&self) -> BufferState {
        self.core.borrow().state
    }

    pub fn handles(&self) -> Option<BufferHandles> {
        match self.state() {
            BufferState::Initialized(h) => Some(h),
            _ => None,
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state(), BufferState::Initialized(_))
    }

    pub fn name(&self) -> String {
        self.core.borrow().shape.name().to_string()
    }

    /// Runs `f` with the shape borrowed.
    ///
    /// Notifications pushed from inside `f` fail with [`RenderError::Busy`].
    pub fn with_shape<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.core.borrow().shape)
    }
}

/// Indices per quad: two triangles.
pub(crate) const INDICES_PER_ITEM: u32 = 6;

fn with_core<S: BufferShape>(
    weak: &Weak<RefCell<BufferCore<S>>>,
    name: &str,
    channel: ChannelId,
    f: impl FnOnce(&mut BufferCore<S>) -> Result<()>,
) -> Result<()> {
    let Some(core) = weak.upgrade() else { return Ok(()) };
    let Ok(mut core) = core.try_borrow_mut() else {
        log::error!("{name} buffer is busy; notification on channel {channel} not applied");
        return Err(RenderError::Busy { buffer: name.to_string(), channel });
    };
    f(&mut *core)
}

fn release<S: BufferShape>(
    weak: &Weak<RefCell<BufferCore<S>>>,
    field: impl FnOnce(&mut BufferCore<S>) -> &mut Subscription,
) {
    let Some(core) = weak.upgrade() else { return };
    let Ok(mut core) = core.try_borrow_mut() else {
        log::warn!("stream completed while buffer was busy; token is released on drop");
        return;
    };
    field(&mut *core).dispose();
}

impl<S: BufferShape> BufferCore<S> {
    fn not_initialized(&self) -> RenderError {
        RenderError::NotInitialized { buffer: self.shape.name().to_string() }
    }

    fn on_context_initialized(&mut self) -> Result<()> {
        if self.state != BufferState::Uninitialized {
            log::debug!("{} buffer: duplicate context notification ignored", self.shape.name());
            return Ok(());
        }

        let depth = self.service.group_depth();
        let mut handles = BufferHandles::default();

        match self.create_objects(&mut handles) {
            Ok(()) => {
                self.state = BufferState::Initialized(handles);
                log::debug!(
                    "{} buffer initialized (vao {}, vbo {}, ebo {}, capacity {})",
                    self.shape.name(),
                    handles.vao,
                    handles.vbo,
                    handles.ebo,
                    self.capacity
                );
                Ok(())
            }
            Err(err) => {
                let svc = &self.service;
                svc.unbind_vbo();
                svc.unbind_vao();
                svc.unbind_ebo();
                while svc.group_depth() > depth {
                    svc.end_group();
                }
                if handles.vao != 0 {
                    svc.gl().delete_vertex_array(handles.vao);
                }
                for buffer in [handles.vbo, handles.ebo] {
                    if buffer != 0 {
                        svc.gl().delete_buffer(buffer);
                    }
                }
                log::error!("{} buffer initialization failed: {err}", self.shape.name());
                Err(err)
            }
        }
    }

    /// VAO → VBO → EBO, each created, bound, filled and labelled in turn.
    fn create_objects(&mut self, handles: &mut BufferHandles) -> Result<()> {
        let svc = &self.service;
        let gl = svc.gl();
        let name = self.shape.name().to_string();

        svc.begin_group(&format!("Setup {name} Data"));

        handles.vao = gl.create_vertex_array()?;
        svc.bind_vao(handles.vao);
        svc.label_vertex_array(handles.vao, &name);

        svc.begin_group(&format!("Upload {name} Vertex Data"));
        handles.vbo = gl.create_buffer()?;
        svc.bind_vbo(handles.vbo);
        let vertices = self.shape.generate_vertex_data(self.capacity);
        gl.buffer_data(BufferTarget::Array, &vertices, BufferUsage::DynamicDraw);
        svc.label_buffer(handles.vbo, &format!("{name} VBO"));
        svc.end_group();

        svc.begin_group(&format!("Upload {name} Indices Data"));
        handles.ebo = gl.create_buffer()?;
        svc.bind_ebo(handles.ebo);
        let indices = self.shape.generate_index_data(self.capacity);
        gl.buffer_data(
            BufferTarget::ElementArray,
            bytemuck::cast_slice(&indices),
            BufferUsage::StaticDraw,
        );
        svc.label_buffer(handles.ebo, &format!("{name} EBO"));
        svc.end_group();

        self.shape.setup_vao(svc);

        // The VAO records the element binding, so it is released before the EBO.
        svc.unbind_vbo();
        svc.unbind_vao();
        svc.unbind_ebo();

        svc.end_group();
        Ok(())
    }

    fn upload(&mut self, item: &S::Item, batch_index: u32) -> Result<()> {
        if batch_index >= self.capacity {
            return Err(RenderError::out_of_range("batch_index", batch_index as u64, self.capacity as u64));
        }
        let BufferState::Initialized(handles) = self.state else {
            return Err(self.not_initialized());
        };

        self.shape.prepare_for_upload(&self.service, item);
        self.service.bind_vbo(handles.vbo);
        self.shape.update_vertex_data(&self.service, item, batch_index);
        self.service.unbind_vbo();
        Ok(())
    }

    fn on_viewport_size_changed(&mut self, payload: &Payload) -> Result<()> {
        let Some(size) = payload.viewport_size() else {
            return Err(RenderError::BadPushNotification {
                source: format!("{} buffer", self.shape.name()),
                channel: ChannelId::VIEWPORT_SIZE_CHANGED,
            });
        };
        self.shape.viewport_changed(size);
        Ok(())
    }

    fn on_shutdown(&mut self) {
        if self.state == BufferState::Disposed {
            return;
        }

        if let BufferState::Initialized(h) = self.state {
            let gl = self.service.gl();
            gl.delete_vertex_array(h.vao);
            gl.delete_buffer(h.vbo);
            gl.delete_buffer(h.ebo);
        }
        self.state = BufferState::Disposed;

        self.shutdown_sub.dispose();
        self.init_sub.dispose();
        self.viewport_sub.dispose();

        log::debug!("{} buffer disposed", self.shape.name());
    }
}
