use crate::error::Result;

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// Vertex attributes (`GL_ARRAY_BUFFER`).
    Array,
    /// Indices (`GL_ELEMENT_ARRAY_BUFFER`).
    ElementArray,
}

/// Usage hint passed with a full buffer upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times.
    StaticDraw,
    /// Rewritten every frame.
    DynamicDraw,
}

/// Object namespace used for debug labels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ObjectKind {
    VertexArray,
    Buffer,
    Texture,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextureWrap {
    ClampToEdge,
    Repeat,
}

/// Parameter applied to the currently bound 2D texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TextureParam {
    MinFilter(TextureFilter),
    MagFilter(TextureFilter),
    WrapS(TextureWrap),
    WrapT(TextureWrap),
}

/// Float vertex attribute description (`glVertexAttribPointer`, not normalized).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttrib {
    pub index: u32,
    /// Number of `f32` components (1–4).
    pub components: i32,
    /// Byte size of one vertex record.
    pub stride: i32,
    /// Byte offset of this attribute inside the record.
    pub offset: i32,
}

/// OpenGL call surface used by buffers and textures.
///
/// Handles are raw GL names; `0` means "none" and unbinds when passed to a
/// `bind_*` call. Implementations assume a current context on the calling thread.
pub trait Gl {
    fn create_vertex_array(&self) -> Result<u32>;
    fn create_buffer(&self) -> Result<u32>;
    fn create_texture(&self) -> Result<u32>;

    fn bind_vertex_array(&self, vao: u32);
    fn bind_buffer(&self, target: BufferTarget, buffer: u32);
    fn bind_texture(&self, texture: u32);
    /// Selects texture unit `GL_TEXTURE0 + unit`.
    fn active_texture(&self, unit: u32);

    fn delete_vertex_array(&self, vao: u32);
    fn delete_buffer(&self, buffer: u32);
    fn delete_texture(&self, texture: u32);

    /// Replaces the whole store of the buffer bound to `target`.
    fn buffer_data(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    /// Overwrites `data.len()` bytes starting at `offset`.
    fn buffer_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]);

    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(&self, attrib: VertexAttrib);

    fn tex_parameter(&self, param: TextureParam);
    /// Uploads tightly packed RGBA8 pixels to the bound 2D texture (mip level 0).
    fn tex_image_2d_rgba(&self, width: u32, height: u32, pixels: &[u8]);

    fn use_program(&self, program: u32);
    /// Draws `index_count` `u32` indices as triangles from the bound element buffer.
    fn draw_elements(&self, index_count: u32);

    fn push_debug_group(&self, message: &str);
    fn pop_debug_group(&self);
    fn object_label(&self, kind: ObjectKind, handle: u32, label: &str);
}
