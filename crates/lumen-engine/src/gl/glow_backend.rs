use std::num::NonZeroU32;

use anyhow::Result as AnyResult;
use glow::{HasContext, PixelUnpackData};

use crate::error::{RenderError, Result};

use super::{
    BufferTarget, BufferUsage, Gl, ObjectKind, TextureFilter, TextureParam, TextureWrap,
    VertexAttrib,
};

/// GL internal format for RGBA8 textures, pre-cast to the `i32` `tex_image_2d` expects.
const RGBA8_INTERNAL_FORMAT: i32 = glow::RGBA8 as i32;

/// [`Gl`] implementation backed by a native `glow` context.
///
/// Every call assumes the context is current on the calling thread.
pub struct GlowGl {
    gl: glow::Context,
}

impl GlowGl {
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Loads GL entry points through `loader` (e.g. `glutin`'s `get_proc_address`).
    ///
    /// # Safety
    ///
    /// `loader` must return valid function pointers for the context that will
    /// be current whenever this backend is used.
    pub unsafe fn from_loader<F>(loader: F) -> AnyResult<Self>
    where
        F: FnMut(&std::ffi::CStr) -> *const std::ffi::c_void,
    {
        let gl = unsafe { glow::Context::from_loader_function_cstr(loader) };
        let version = gl.version();
        anyhow::ensure!(
            version.major >= 3,
            "OpenGL 3.0+ required, context reports {}.{}",
            version.major,
            version.minor
        );
        let renderer = unsafe { gl.get_parameter_string(glow::RENDERER) };
        log::info!("gl context: {}.{} ({renderer})", version.major, version.minor);
        Ok(Self::new(gl))
    }

    #[inline]
    pub fn context(&self) -> &glow::Context {
        &self.gl
    }
}

fn name(handle: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(handle)
}

fn target(t: BufferTarget) -> u32 {
    match t {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

fn usage(u: BufferUsage) -> u32 {
    match u {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
    }
}

fn filter(f: TextureFilter) -> i32 {
    match f {
        TextureFilter::Nearest => glow::NEAREST as i32,
        TextureFilter::Linear => glow::LINEAR as i32,
    }
}

fn wrap(w: TextureWrap) -> i32 {
    match w {
        TextureWrap::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
        TextureWrap::Repeat => glow::REPEAT as i32,
    }
}

/// Converts a size or offset to the `i32` GL expects.
fn gl_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl Gl for GlowGl {
    fn create_vertex_array(&self) -> Result<u32> {
        let vao = unsafe { self.gl.create_vertex_array() }.map_err(RenderError::Gl)?;
        Ok(vao.0.get())
    }

    fn create_buffer(&self) -> Result<u32> {
        let buffer = unsafe { self.gl.create_buffer() }.map_err(RenderError::Gl)?;
        Ok(buffer.0.get())
    }

    fn create_texture(&self) -> Result<u32> {
        let texture = unsafe { self.gl.create_texture() }.map_err(RenderError::Gl)?;
        Ok(texture.0.get())
    }

    fn bind_vertex_array(&self, vao: u32) {
        unsafe { self.gl.bind_vertex_array(name(vao).map(glow::NativeVertexArray)) };
    }

    fn bind_buffer(&self, t: BufferTarget, buffer: u32) {
        unsafe { self.gl.bind_buffer(target(t), name(buffer).map(glow::NativeBuffer)) };
    }

    fn bind_texture(&self, texture: u32) {
        unsafe {
            self.gl
                .bind_texture(glow::TEXTURE_2D, name(texture).map(glow::NativeTexture))
        };
    }

    fn active_texture(&self, unit: u32) {
        unsafe { self.gl.active_texture(glow::TEXTURE0 + unit) };
    }

    fn delete_vertex_array(&self, vao: u32) {
        if let Some(n) = name(vao) {
            unsafe { self.gl.delete_vertex_array(glow::NativeVertexArray(n)) };
        }
    }

    fn delete_buffer(&self, buffer: u32) {
        if let Some(n) = name(buffer) {
            unsafe { self.gl.delete_buffer(glow::NativeBuffer(n)) };
        }
    }

    fn delete_texture(&self, texture: u32) {
        if let Some(n) = name(texture) {
            unsafe { self.gl.delete_texture(glow::NativeTexture(n)) };
        }
    }

    fn buffer_data(&self, t: BufferTarget, data: &[u8], u: BufferUsage) {
        unsafe { self.gl.buffer_data_u8_slice(target(t), data, usage(u)) };
    }

    fn buffer_sub_data(&self, t: BufferTarget, offset: usize, data: &[u8]) {
        unsafe { self.gl.buffer_sub_data_u8_slice(target(t), gl_i32(offset), data) };
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) };
    }

    fn vertex_attrib_pointer(&self, a: VertexAttrib) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(a.index, a.components, glow::FLOAT, false, a.stride, a.offset)
        };
    }

    fn tex_parameter(&self, param: TextureParam) {
        let (pname, value) = match param {
            TextureParam::MinFilter(f) => (glow::TEXTURE_MIN_FILTER, filter(f)),
            TextureParam::MagFilter(f) => (glow::TEXTURE_MAG_FILTER, filter(f)),
            TextureParam::WrapS(w) => (glow::TEXTURE_WRAP_S, wrap(w)),
            TextureParam::WrapT(w) => (glow::TEXTURE_WRAP_T, wrap(w)),
        };
        unsafe { self.gl.tex_parameter_i32(glow::TEXTURE_2D, pname, value) };
    }

    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: &[u8]) {
        unsafe {
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                RGBA8_INTERNAL_FORMAT,
                gl_i32(width as usize),
                gl_i32(height as usize),
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(pixels)),
            );
        }
    }

    fn use_program(&self, program: u32) {
        unsafe { self.gl.use_program(name(program).map(glow::NativeProgram)) };
    }

    fn draw_elements(&self, index_count: u32) {
        unsafe {
            self.gl
                .draw_elements(glow::TRIANGLES, gl_i32(index_count as usize), glow::UNSIGNED_INT, 0)
        };
    }

    fn push_debug_group(&self, message: &str) {
        unsafe {
            self.gl
                .push_debug_group(glow::DEBUG_SOURCE_APPLICATION, 0, message)
        };
    }

    fn pop_debug_group(&self) {
        unsafe { self.gl.pop_debug_group() };
    }

    fn object_label(&self, kind: ObjectKind, handle: u32, label: &str) {
        let identifier = match kind {
            ObjectKind::VertexArray => glow::VERTEX_ARRAY,
            ObjectKind::Buffer => glow::BUFFER,
            ObjectKind::Texture => glow::TEXTURE,
        };
        unsafe { self.gl.object_label(identifier, handle, Some(label)) };
    }
}
