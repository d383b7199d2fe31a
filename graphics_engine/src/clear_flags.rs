use bitflags::bitflags;
use gl::types::GLbitfield;

use crate::gl_types::ClearBit;

bitflags! {
    /// Set of framebuffer buffers to clear with a single `glClear` call.
    #[derive(Default)]
    pub struct ClearFlags: GLbitfield {
        const COLOR = gl::COLOR_BUFFER_BIT;
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

impl From<ClearBit> for ClearFlags {
    fn from(bit: ClearBit) -> Self {
        match bit {
            ClearBit::Color => ClearFlags::COLOR,
            ClearBit::Depth => ClearFlags::DEPTH,
            ClearBit::Stencil => ClearFlags::STENCIL,
        }
    }
}

impl ClearFlags {
    pub fn new() -> Self {
        Self::empty()
    }

    pub fn color() -> Self {
        Self::COLOR
    }

    pub fn set_bit(&mut self, bit: ClearBit) -> &mut Self {
        self.insert(bit.into());
        self
    }

    pub fn reset_bit(&mut self, bit: ClearBit) -> &mut Self {
        self.remove(bit.into());
        self
    }

    pub fn test_bit(&self, bit: ClearBit) -> bool {
        self.contains(bit.into())
    }

    pub fn to_gl_bitfield(&self) -> GLbitfield {
        self.bits()
    }
}

impl FromIterator<ClearBit> for ClearFlags {
    fn from_iter<T: IntoIterator<Item = ClearBit>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |flags, bit| flags | Self::from(bit))
    }
}
