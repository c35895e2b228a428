use std::rc::Rc;

use crate::config::RendererConfig;
use crate::error::Result;
use crate::gl::GlService;
use crate::notify::Reactable;

use super::buffer::{BufferShape, GpuBuffer, INDICES_PER_ITEM};
use super::shapes::{LineItem, LineShape, RectItem, RectShape, TextureItem, TextureShape};

/// Queues items of one shape and draws them in as few calls as possible.
///
/// A batch is flushed when it reaches the buffer capacity, when the next
/// item's batch key differs from the queued ones, or on [`end_batch`](Self::end_batch).
pub struct BatchRenderer<S: BufferShape + 'static> {
    buffer: GpuBuffer<S>,
    program: u32,

    pending: Vec<S::Item>,
    pending_key: Option<u32>,

    draw_calls: u32,
}

impl<S: BufferShape + 'static> BatchRenderer<S> {
    pub fn new(
        service: Rc<GlService>,
        hub: &dyn Reactable,
        shape: S,
        capacity: u32,
        program: u32,
    ) -> Result<Self> {
        let buffer = GpuBuffer::new(service, hub, shape, capacity)?;
        Ok(Self {
            buffer,
            program,
            pending: Vec::with_capacity(capacity as usize),
            pending_key: None,
            draw_calls: 0,
        })
    }

    pub fn render(&mut self, item: S::Item) -> Result<()> {
        let key = self.buffer.batch_key(&item);
        if !self.pending.is_empty() && key != self.pending_key {
            self.end_batch()?;
        }

        self.pending_key = key;
        self.pending.push(item);

        if self.pending.len() as u32 >= self.buffer.capacity() {
            self.end_batch()?;
        }
        Ok(())
    }

    /// Uploads every queued item to its slot and issues a single draw.
    ///
    /// The queue is emptied even when the upload fails.
    pub fn end_batch(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let items = std::mem::take(&mut self.pending);
        self.pending_key = None;

        for (slot, item) in items.iter().enumerate() {
            self.buffer.upload_data(item, slot as u32)?;
        }
        self.buffer.draw(items.len() as u32, self.program)?;
        self.draw_calls += 1;

        log::trace!(
            "{} batch flushed: {} items, {} indices",
            self.buffer.name(),
            items.len(),
            items.len() as u32 * INDICES_PER_ITEM
        );

        self.pending = items;
        self.pending.clear();
        Ok(())
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn draw_calls(&self) -> u32 {
        self.draw_calls
    }

    pub fn reset_stats(&mut self) {
        self.draw_calls = 0;
    }

    pub fn buffer(&self) -> &GpuBuffer<S> {
        &self.buffer
    }
}

/// One batch renderer per primitive kind, flushed together at frame end.
///
/// Flush order is rectangles, lines, textures, glyphs, so text lands on top.
pub struct Renderer {
    rects: BatchRenderer<RectShape>,
    lines: BatchRenderer<LineShape>,
    textures: BatchRenderer<TextureShape>,
    glyphs: BatchRenderer<TextureShape>,
}

impl Renderer {
    pub fn new(service: Rc<GlService>, hub: &dyn Reactable, config: &RendererConfig) -> Result<Self> {
        let n = config.batch_size;
        let p = config.programs;

        let rects = BatchRenderer::new(service.clone(), hub, RectShape::new(), n, p.rect)?;
        let lines = BatchRenderer::new(service.clone(), hub, LineShape::new(), n, p.line)?;
        let textures = BatchRenderer::new(service.clone(), hub, TextureShape::new(), n, p.texture)?;
        let glyphs = BatchRenderer::new(service, hub, TextureShape::glyphs(), n, p.glyph)?;

        log::debug!("renderer created (batch size {n})");
        Ok(Self { rects, lines, textures, glyphs })
    }

    /// Starts a frame; clears per-frame counters.
    pub fn begin(&mut self) {
        self.rects.reset_stats();
        self.lines.reset_stats();
        self.textures.reset_stats();
        self.glyphs.reset_stats();
    }

    pub fn draw_rect(&mut self, item: RectItem) -> Result<()> {
        self.rects.render(item)
    }

    pub fn draw_line(&mut self, item: LineItem) -> Result<()> {
        self.lines.render(item)
    }

    pub fn draw_texture(&mut self, item: TextureItem) -> Result<()> {
        self.textures.render(item)
    }

    pub fn draw_glyphs(&mut self, items: impl IntoIterator<Item = TextureItem>) -> Result<()> {
        for item in items {
            self.glyphs.render(item)?;
        }
        Ok(())
    }

    /// Flushes everything still queued.
    pub fn end(&mut self) -> Result<()> {
        self.rects.end_batch()?;
        self.lines.end_batch()?;
        self.textures.end_batch()?;
        self.glyphs.end_batch()
    }

    /// Draw calls issued since [`begin`](Self::begin).
    pub fn draw_calls(&self) -> u32 {
        self.rects.draw_calls()
            + self.lines.draw_calls()
            + self.textures.draw_calls()
            + self.glyphs.draw_calls()
    }
}
