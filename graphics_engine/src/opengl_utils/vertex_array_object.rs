use std::marker::PhantomData;

use gl::types::{GLsizei, GLuint};

use super::vertex_buffer_object::VertexBufferObject;
use crate::error::{ErrorCode, Result};
use crate::gl_types::BufferTarget;
use crate::gl_wrappers;

/// Handed to the set-up closure of [`VertexArrayObject::new`] while the new
/// vertex array is bound.
pub struct VertexArrayObjectInterface {
    _phantom: PhantomData<()>,
}

impl VertexArrayObjectInterface {
    pub fn bind_vbo_to_attrib(&self, vbo: &VertexBufferObject, attrib_location: GLuint) -> Result<()> {
        let stride = GLsizei::try_from(vbo.size_of_element).map_err(|_| ErrorCode::GlInvalidValue)?;

        gl_wrappers::bind_buffer(BufferTarget::Array, vbo.buffer_id)?;
        gl_wrappers::vertex_attrib_pointer(
            attrib_location,
            vbo.component_count,
            vbo.data_type,
            false,
            stride,
            0,
        )?;
        gl_wrappers::enable_vertex_attrib_array(attrib_location)
    }
}

pub struct VertexArrayObject {
    vao_id: GLuint,
}

impl VertexArrayObject {
    pub fn new(setup_fn: impl FnOnce(&VertexArrayObjectInterface) -> Result<()>) -> Result<Self> {
        let vao = Self {
            vao_id: gl_wrappers::gen_vertex_array()?,
        };

        gl_wrappers::bind_vertex_array(vao.vao_id)?;

        setup_fn(&VertexArrayObjectInterface {
            _phantom: PhantomData,
        })?;

        gl_wrappers::bind_vertex_array(0)?;

        Ok(vao)
    }

    pub fn vao_id(&self) -> GLuint {
        self.vao_id
    }

    pub fn use_vao(&self) -> Result<()> {
        gl_wrappers::bind_vertex_array(self.vao_id)
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        if let Err(e) = gl_wrappers::delete_vertex_arrays(&[self.vao_id]) {
            log::error!(
                "could not delete vertex array, vao_id = {}, msg = {e}",
                self.vao_id
            );
        }
    }
}
