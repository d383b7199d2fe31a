use std::collections::BTreeMap;

use gl::types::GLuint;

use crate::error::{ErrorCode, Result};
use crate::gl_types::ShaderType;
use crate::gl_wrappers;

pub type ShaderSourceMap = BTreeMap<ShaderType, String>;

/// Uploads `source_code` into `shader_id` and compiles it.
///
/// Compilation failures are logged together with the shader info log. Every
/// failure, including failures of the underlying GL calls, is reported as
/// [`ErrorCode::ShaderError`].
pub fn compile_shader(shader_id: GLuint, source_code: &str) -> Result<()> {
    gl_wrappers::shader_source(shader_id, &[source_code]).map_err(|e| {
        log::error!("ShaderSource failed with error code {}: {e}", e.value());
        ErrorCode::ShaderError
    })?;

    gl_wrappers::compile_shader(shader_id).map_err(|_| ErrorCode::ShaderError)?;

    let compile_status = gl_wrappers::get_shader_iv(shader_id, gl::COMPILE_STATUS)
        .map_err(|_| ErrorCode::ShaderError)?;

    if compile_status == gl::FALSE as i32 {
        let info_log =
            gl_wrappers::get_shader_info_log(shader_id).map_err(|_| ErrorCode::ShaderError)?;
        log::error!("Shader compilation failed: {info_log}");

        return Err(ErrorCode::ShaderError);
    }

    Ok(())
}

/// Compiles `source_code` into `shader_id` like [`compile_shader`], but deletes
/// the shader object if the compilation fails.
pub fn compile_shader_or_delete(shader_id: GLuint, source_code: &str) -> Result<()> {
    let result = compile_shader(shader_id, source_code);

    if result.is_err() {
        if let Err(e) = gl_wrappers::delete_shader(shader_id) {
            log::error!("could not delete failed shader, shader_id = {shader_id}, msg = {e}");
        }
    }

    result
}

/// Creates a shader object of `shader_type` and compiles `source_code` into
/// it. The shader object is deleted again if the compilation fails.
pub fn create_and_compile_shader(shader_type: ShaderType, source_code: &str) -> Result<GLuint> {
    let shader_id =
        gl_wrappers::create_shader(shader_type).map_err(|_| ErrorCode::ShaderError)?;

    compile_shader_or_delete(shader_id, source_code)?;

    log::debug!("compiled {shader_type:?} shader, shader_id = {shader_id}");

    Ok(shader_id)
}

pub fn create_program() -> Result<GLuint> {
    gl_wrappers::create_program()
}

/// Attaches every shader of `shader_ids` to a new program object and links
/// it.
///
/// On failure the program object is deleted and [`ErrorCode::ShaderError`] is
/// returned; the shaders are left to the caller.
pub fn create_and_link_shader_program(shader_ids: &[GLuint]) -> Result<GLuint> {
    let program_id = create_program()?;

    link_shader_program_or_delete(program_id, shader_ids)?;

    Ok(program_id)
}

/// Attaches `shader_ids` to `program_id` and links it, deleting the program
/// object if any step fails.
pub fn link_shader_program_or_delete(program_id: GLuint, shader_ids: &[GLuint]) -> Result<()> {
    let result = attach_and_link(program_id, shader_ids);

    if result.is_err() {
        if let Err(e) = gl_wrappers::delete_program(program_id) {
            log::error!(
                "could not delete failed shader program, program_id = {program_id}, msg = {e}"
            );
        }
    }

    result
}

fn attach_and_link(program_id: GLuint, shader_ids: &[GLuint]) -> Result<()> {
    for shader_id in shader_ids {
        gl_wrappers::attach_shader(program_id, *shader_id).map_err(|e| {
            log::error!("AttachShader failed with error code {}: {e}", e.value());
            ErrorCode::ShaderError
        })?;
    }

    gl_wrappers::link_program(program_id).map_err(|_| ErrorCode::ShaderError)?;

    let link_status = gl_wrappers::get_program_iv(program_id, gl::LINK_STATUS)
        .map_err(|_| ErrorCode::ShaderError)?;

    if link_status == gl::FALSE as i32 {
        let info_log =
            gl_wrappers::get_program_info_log(program_id).map_err(|_| ErrorCode::ShaderError)?;
        log::error!("Shader program linking failed: {info_log}");

        return Err(ErrorCode::ShaderError);
    }

    Ok(())
}

pub fn delete_shader(shader_id: GLuint) -> Result<()> {
    gl_wrappers::delete_shader(shader_id)
}

/// A compiled shader object, deleted when dropped.
pub struct Shader {
    shader_id: GLuint,
    shader_type: ShaderType,
}

impl Shader {
    pub fn new(shader_type: ShaderType, source_code: &str) -> Result<Self> {
        let shader_id = create_and_compile_shader(shader_type, source_code)?;

        Ok(Self {
            shader_id,
            shader_type,
        })
    }

    pub fn shader_id(&self) -> GLuint {
        self.shader_id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        if let Err(e) = delete_shader(self.shader_id) {
            log::error!(
                "could not delete {:?} shader, shader_id = {}, msg = {e}",
                self.shader_type,
                self.shader_id
            );
        }
    }
}

/// A linked shader program, deleted when dropped.
pub struct ShaderProgram {
    program_id: GLuint,
}

impl ShaderProgram {
    /// Compiles every source of `sources` and links them into one program.
    ///
    /// The intermediate shader objects are released once the program is
    /// linked (or failed to link).
    pub fn new(sources: &ShaderSourceMap) -> Result<Self> {
        let shaders = sources
            .iter()
            .map(|(shader_type, source_code)| Shader::new(*shader_type, source_code))
            .collect::<Result<Vec<_>>>()?;

        let shader_ids = shaders.iter().map(Shader::shader_id).collect::<Vec<_>>();
        let program_id = create_and_link_shader_program(&shader_ids)?;

        Ok(Self { program_id })
    }

    pub fn program_id(&self) -> GLuint {
        self.program_id
    }

    pub fn use_program(&self) -> Result<()> {
        gl_wrappers::use_program(self.program_id)
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        if let Err(e) = gl_wrappers::delete_program(self.program_id) {
            log::error!(
                "could not delete shader program, program_id = {}, msg = {e}",
                self.program_id
            );
        }
    }
}
