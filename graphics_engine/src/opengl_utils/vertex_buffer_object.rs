use std::mem::size_of;

use gl::types::{GLint, GLuint};

use crate::error::{ErrorCode, Result};
use crate::gl_types::{BufferTarget, DataType, DataUsagePattern};
use crate::gl_wrappers;

fn check_element_layout(
    size_of_element: usize,
    data_type: DataType,
    component_count: GLint,
) -> Result<()> {
    let layout_size = usize::try_from(component_count)
        .ok()
        .filter(|component_count| (1..=4).contains(component_count))
        .map(|component_count| component_count * data_type.size_in_bytes());

    if layout_size == Some(size_of_element) {
        Ok(())
    } else {
        log::error!(
            "vertex element does not match its layout, size_of_element = {size_of_element}, data_type = {data_type:?}, component_count = {component_count}"
        );
        Err(ErrorCode::GlInvalidValue)
    }
}

/// A buffer object holding one attribute stream, deleted when dropped.
pub struct VertexBufferObject {
    pub(super) buffer_id: GLuint,
    pub(super) size_of_element: usize,
    pub(super) data_type: DataType,
    pub(super) component_count: GLint,
    number_of_elements: usize,
}

impl VertexBufferObject {
    /// Uploads `data` into a new buffer.
    ///
    /// Each element of `data` is described to the GL as `component_count`
    /// values of `data_type`, e.g. a `Vec3<f32>` is 3 × [`DataType::Float`].
    /// A layout that does not add up to the element size is rejected with
    /// [`ErrorCode::GlInvalidValue`] before anything is uploaded.
    pub fn new<ElementType>(
        data: &[ElementType],
        data_type: DataType,
        component_count: GLint,
        usage: DataUsagePattern,
    ) -> Result<Self>
    where
        ElementType: Copy,
    {
        check_element_layout(size_of::<ElementType>(), data_type, component_count)?;

        let buffer_id = gl_wrappers::gen_buffer()?;

        let vbo = Self {
            buffer_id,
            size_of_element: size_of::<ElementType>(),
            data_type,
            component_count,
            number_of_elements: data.len(),
        };

        gl_wrappers::bind_buffer(BufferTarget::Array, buffer_id)?;
        gl_wrappers::buffer_data(BufferTarget::Array, data, usage)?;
        gl_wrappers::bind_buffer(BufferTarget::Array, 0)?;

        log::trace!(
            "created vertex buffer, buffer_id = {buffer_id}, number_of_elements = {}",
            data.len()
        );

        Ok(vbo)
    }

    pub fn buffer_id(&self) -> GLuint {
        self.buffer_id
    }

    pub fn number_of_elements(&self) -> usize {
        self.number_of_elements
    }
}

impl Drop for VertexBufferObject {
    fn drop(&mut self) {
        if let Err(e) = gl_wrappers::delete_buffers(&[self.buffer_id]) {
            log::error!(
                "could not delete vertex buffer, buffer_id = {}, msg = {e}",
                self.buffer_id
            );
        }
    }
}
