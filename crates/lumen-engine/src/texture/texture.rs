use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::{RenderError, Result};
use crate::gl::{GlService, TextureFilter, TextureParam, TextureWrap};
use crate::notify::{ChannelId, Payload, Reactable, Reactor, Subscription};

use super::ImageData;

struct TextureCore {
    service: Rc<GlService>,
    id: u32,
    deleted: bool,
    dispose_sub: Subscription,
}

/// GPU copy of an image.
///
/// The texture object lives until a dispose-texture notification carrying its
/// id arrives. Dropping the handle only stops listening.
pub struct Texture {
    name: String,
    file_path: String,
    width: u32,
    height: u32,
    core: Rc<RefCell<TextureCore>>,
}

impl Texture {
    pub fn new(
        service: Rc<GlService>,
        hub: &dyn Reactable,
        name: &str,
        file_path: &str,
        image: &ImageData,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(RenderError::invalid_argument("name", "texture name is empty"));
        }
        if file_path.is_empty() {
            return Err(RenderError::invalid_argument("file_path", "texture path is empty"));
        }

        let id = upload(&service, name, image)?;
        log::debug!("texture `{name}` uploaded (id {id}, {}x{})", image.width(), image.height());

        let core = Rc::new(RefCell::new(TextureCore {
            service,
            id,
            deleted: false,
            dispose_sub: Subscription::empty(),
        }));

        let weak = Rc::downgrade(&core);
        let source = format!("texture `{name}`");
        let sub = hub.subscribe(
            ChannelId::DISPOSE_TEXTURE,
            Reactor::new().on_receive(move |payload| on_dispose(&weak, &source, payload)),
        );
        core.borrow_mut().dispose_sub = sub;

        Ok(Self {
            name: name.to_string(),
            file_path: file_path.to_string(),
            width: image.width(),
            height: image.height(),
            core,
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.core.borrow().id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True once the GPU object has been deleted.
    pub fn is_deleted(&self) -> bool {
        self.core.borrow().deleted
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("name", &self.name)
            .field("id", &self.id())
            .field("size", &(self.width, self.height))
            .field("deleted", &self.is_deleted())
            .finish()
    }
}

/// create → bind → parameters → image → label → unbind.
fn upload(svc: &GlService, name: &str, image: &ImageData) -> Result<u32> {
    let gl = svc.gl();
    let id = gl.create_texture()?;

    svc.bind_texture_2d(id);
    gl.tex_parameter(TextureParam::MinFilter(TextureFilter::Linear));
    gl.tex_parameter(TextureParam::MagFilter(TextureFilter::Linear));
    gl.tex_parameter(TextureParam::WrapS(TextureWrap::ClampToEdge));
    gl.tex_parameter(TextureParam::WrapT(TextureWrap::ClampToEdge));
    gl.tex_image_2d_rgba(image.width(), image.height(), &image.to_rgba_bytes());
    svc.label_texture(id, name);
    svc.unbind_texture_2d();

    Ok(id)
}

fn on_dispose(weak: &Weak<RefCell<TextureCore>>, source: &str, payload: &Payload) -> Result<()> {
    let Some(data) = payload.dispose_texture() else {
        return Err(RenderError::BadPushNotification {
            source: source.to_string(),
            channel: ChannelId::DISPOSE_TEXTURE,
        });
    };
    let Some(core) = weak.upgrade() else { return Ok(()) };
    let mut core = core.borrow_mut();

    if data.texture_id != core.id || core.deleted {
        return Ok(());
    }

    core.service.gl().delete_texture(core.id);
    core.deleted = true;
    core.dispose_sub.dispose();
    log::debug!("{source} deleted (id {})", core.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{GlCall, GlCapabilities, ObjectKind, RecordingGl};
    use crate::notify::{DisposeTextureData, PushHub};
    use crate::texture::Argb;

    fn env() -> (Rc<RecordingGl>, Rc<GlService>, PushHub) {
        let gl = Rc::new(RecordingGl::new());
        let svc = Rc::new(GlService::new(gl.clone(), GlCapabilities::default()));
        (gl, svc, PushHub::new())
    }

    fn image_2x3() -> ImageData {
        let pixels = vec![
            Argb::from_u32(0xFF_FF_00_00),
            Argb::from_u32(0xFF_00_FF_00),
            Argb::from_u32(0x80_00_00_FF),
            Argb::from_u32(0x00_FF_FF_FF),
            Argb::from_u32(0x10_20_30_40),
            Argb::from_u32(0xFE_01_02_03),
        ];
        ImageData::new(2, 3, pixels).unwrap()
    }

    fn dispose(hub: &PushHub, texture_id: u32) {
        hub.push(ChannelId::DISPOSE_TEXTURE, Payload::DisposeTexture(DisposeTextureData { texture_id }))
            .unwrap();
    }

    // ── upload ────────────────────────────────────────────────────────────

    #[test]
    fn upload_sequence_and_rgba_bytes() {
        let (gl, svc, hub) = env();
        let tex = Texture::new(svc, &hub, "Checker", "assets/checker.png", &image_2x3()).unwrap();

        let expected_pixels = vec![
            0xFF, 0x00, 0x00, 0xFF, //
            0x00, 0xFF, 0x00, 0xFF, //
            0x00, 0x00, 0xFF, 0x80, //
            0xFF, 0xFF, 0xFF, 0x00, //
            0x20, 0x30, 0x40, 0x10, //
            0x01, 0x02, 0x03, 0xFE,
        ];
        assert_eq!(
            gl.calls(),
            vec![
                GlCall::CreateTexture(1),
                GlCall::BindTexture(1),
                GlCall::TexParameter(TextureParam::MinFilter(TextureFilter::Linear)),
                GlCall::TexParameter(TextureParam::MagFilter(TextureFilter::Linear)),
                GlCall::TexParameter(TextureParam::WrapS(TextureWrap::ClampToEdge)),
                GlCall::TexParameter(TextureParam::WrapT(TextureWrap::ClampToEdge)),
                GlCall::TexImage2d { width: 2, height: 3, pixels: expected_pixels },
                GlCall::ObjectLabel(ObjectKind::Texture, 1, "Checker".into()),
                GlCall::BindTexture(0),
            ]
        );
        assert_eq!(tex.id(), 1);
        assert_eq!((tex.width(), tex.height()), (2, 3));
    }

    #[test]
    fn empty_name_or_path_is_rejected() {
        let (gl, svc, hub) = env();
        let img = image_2x3();

        let err = Texture::new(svc.clone(), &hub, "", "a.png", &img).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument { name: "name", .. }));
        let err = Texture::new(svc, &hub, "A", "", &img).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument { name: "file_path", .. }));
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn creation_failure_propagates() {
        let (gl, svc, hub) = env();
        gl.fail_object_creation(true);
        let err = Texture::new(svc, &hub, "A", "a.png", &image_2x3()).unwrap_err();
        assert!(matches!(err, RenderError::Gl(_)));
        assert_eq!(hub.subscriber_count(ChannelId::DISPOSE_TEXTURE), 0);
    }

    // ── dispose ───────────────────────────────────────────────────────────

    #[test]
    fn non_matching_id_is_ignored() {
        let (gl, svc, hub) = env();
        let tex = Texture::new(svc, &hub, "A", "a.png", &image_2x3()).unwrap();

        dispose(&hub, tex.id() + 1);

        assert!(!tex.is_deleted());
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteTexture(_))), 0);
        assert_eq!(hub.subscriber_count(ChannelId::DISPOSE_TEXTURE), 1);
    }

    #[test]
    fn matching_id_deletes_once_even_if_resent() {
        let (gl, svc, hub) = env();
        let tex = Texture::new(svc, &hub, "A", "a.png", &image_2x3()).unwrap();

        dispose(&hub, tex.id());
        dispose(&hub, tex.id());

        assert!(tex.is_deleted());
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteTexture(_))), 1);
        assert_eq!(hub.subscriber_count(ChannelId::DISPOSE_TEXTURE), 0);
    }

    #[test]
    fn dispose_without_payload_is_bad_notification() {
        let (_gl, svc, hub) = env();
        let _tex = Texture::new(svc, &hub, "A", "a.png", &image_2x3()).unwrap();
        let err = hub.push_empty(ChannelId::DISPOSE_TEXTURE).unwrap_err();
        assert!(matches!(err, RenderError::BadPushNotification { channel: ChannelId::DISPOSE_TEXTURE, .. }));
    }

    #[test]
    fn dropping_handle_unsubscribes() {
        let (_gl, svc, hub) = env();
        let tex = Texture::new(svc, &hub, "A", "a.png", &image_2x3()).unwrap();
        drop(tex);
        assert_eq!(hub.subscriber_count(ChannelId::DISPOSE_TEXTURE), 0);
    }
}
