//! Thin wrappers over the OpenGL entry points used by the engine.
//!
//! Every function issues exactly one GL call (plus the queries needed to size
//! its output), reads the error flag right after it and reports failures as
//! [`ErrorCode`]s. The `expected` lists mirror the errors the GL 3.3 core reference
//! pages document for the entry point.

use std::ffi::{c_void, CStr};
use std::ptr::null;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLsizeiptr, GLuint};
use vek::Rgba;

use crate::clear_flags::ClearFlags;
use crate::error::{
    check_gl_error, ErrorCode,
    ErrorCode::{
        GlInvalidEnum, GlInvalidFramebufferOperation, GlInvalidOperation, GlInvalidValue,
        GlOutOfMemory,
    },
    Result,
};
use crate::gl_types::{BufferTarget, DataType, DataUsagePattern, DrawMode, ShaderType};

fn to_gl_sizei(function: &str, value: usize) -> Result<GLsizei> {
    GLsizei::try_from(value).map_err(|_| {
        log::error!("{function} called with a count that does not fit into GLsizei, count = {value}");
        GlInvalidValue
    })
}

pub fn attach_shader(program: GLuint, shader: GLuint) -> Result<()> {
    unsafe { gl::AttachShader(program, shader) };
    check_gl_error("glAttachShader", &[GlInvalidValue, GlInvalidOperation])
}

/// Binds `buffer` to `target`, zero unbinds the buffer currently bound there.
pub fn bind_buffer(target: BufferTarget, buffer: GLuint) -> Result<()> {
    unsafe { gl::BindBuffer(target.to_gl(), buffer) };
    check_gl_error(
        "glBindBuffer",
        &[GlInvalidEnum, GlInvalidValue, GlInvalidOperation],
    )
}

pub fn bind_vertex_array(array: GLuint) -> Result<()> {
    unsafe { gl::BindVertexArray(array) };
    check_gl_error("glBindVertexArray", &[GlInvalidOperation])
}

/// Creates and initializes the data store of the buffer bound to `target`.
pub fn buffer_data<T: Copy>(target: BufferTarget, data: &[T], usage: DataUsagePattern) -> Result<()> {
    let size = GLsizeiptr::try_from(std::mem::size_of_val(data)).map_err(|_| GlOutOfMemory)?;

    unsafe {
        gl::BufferData(
            target.to_gl(),
            size,
            data.as_ptr() as *const c_void,
            usage.to_gl(),
        )
    };
    check_gl_error(
        "glBufferData",
        &[GlInvalidEnum, GlInvalidValue, GlInvalidOperation, GlOutOfMemory],
    )
}

pub fn clear(flags: ClearFlags) -> Result<()> {
    unsafe { gl::Clear(flags.to_gl_bitfield()) };
    check_gl_error("glClear", &[GlInvalidValue, GlInvalidFramebufferOperation])
}

pub fn clear_color(color: Rgba<f32>) -> Result<()> {
    unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    check_gl_error("glClearColor", &[])
}

pub fn compile_shader(shader: GLuint) -> Result<()> {
    unsafe { gl::CompileShader(shader) };
    check_gl_error("glCompileShader", &[GlInvalidValue, GlInvalidOperation])
}

/// Creates an empty program object.
///
/// The GL reports a failed creation by returning zero, which is turned into
/// [`ErrorCode::ShaderError`].
pub fn create_program() -> Result<GLuint> {
    let program = unsafe { gl::CreateProgram() };
    check_gl_error("glCreateProgram", &[])?;

    if program == 0 {
        log::error!("glCreateProgram returned 0");
        Err(ErrorCode::ShaderError)
    } else {
        Ok(program)
    }
}

pub fn create_shader(shader_type: ShaderType) -> Result<GLuint> {
    let shader = unsafe { gl::CreateShader(shader_type.to_gl()) };
    check_gl_error("glCreateShader", &[GlInvalidEnum])?;

    if shader == 0 {
        log::error!("glCreateShader returned 0, shader_type = {shader_type:?}");
        Err(ErrorCode::ShaderError)
    } else {
        Ok(shader)
    }
}

pub fn delete_buffers(buffers: &[GLuint]) -> Result<()> {
    let count = to_gl_sizei("glDeleteBuffers", buffers.len())?;
    unsafe { gl::DeleteBuffers(count, buffers.as_ptr()) };
    check_gl_error("glDeleteBuffers", &[GlInvalidValue])
}

pub fn delete_program(program: GLuint) -> Result<()> {
    unsafe { gl::DeleteProgram(program) };
    check_gl_error("glDeleteProgram", &[GlInvalidValue])
}

pub fn delete_shader(shader: GLuint) -> Result<()> {
    unsafe { gl::DeleteShader(shader) };
    check_gl_error("glDeleteShader", &[GlInvalidValue])
}

pub fn delete_vertex_arrays(arrays: &[GLuint]) -> Result<()> {
    let count = to_gl_sizei("glDeleteVertexArrays", arrays.len())?;
    unsafe { gl::DeleteVertexArrays(count, arrays.as_ptr()) };
    check_gl_error("glDeleteVertexArrays", &[GlInvalidValue])
}

pub fn draw_arrays(mode: DrawMode, first: GLint, count: GLsizei) -> Result<()> {
    unsafe { gl::DrawArrays(mode.to_gl(), first, count) };
    check_gl_error(
        "glDrawArrays",
        &[
            GlInvalidEnum,
            GlInvalidValue,
            GlInvalidOperation,
            GlInvalidFramebufferOperation,
        ],
    )
}

pub fn enable_vertex_attrib_array(index: GLuint) -> Result<()> {
    unsafe { gl::EnableVertexAttribArray(index) };
    check_gl_error(
        "glEnableVertexAttribArray",
        &[GlInvalidValue, GlInvalidOperation],
    )
}

/// Generates `count` buffer object names.
pub fn gen_buffers(count: usize) -> Result<Vec<GLuint>> {
    let mut buffers = vec![0; count];
    let gl_count = to_gl_sizei("glGenBuffers", count)?;

    unsafe { gl::GenBuffers(gl_count, buffers.as_mut_ptr()) };
    check_gl_error("glGenBuffers", &[GlInvalidValue])?;

    Ok(buffers)
}

pub fn gen_buffer() -> Result<GLuint> {
    gen_buffers(1).map(|buffers| buffers[0])
}

/// Generates `count` vertex array object names.
pub fn gen_vertex_arrays(count: usize) -> Result<Vec<GLuint>> {
    let mut arrays = vec![0; count];
    let gl_count = to_gl_sizei("glGenVertexArrays", count)?;

    unsafe { gl::GenVertexArrays(gl_count, arrays.as_mut_ptr()) };
    check_gl_error("glGenVertexArrays", &[GlInvalidValue])?;

    Ok(arrays)
}

pub fn gen_vertex_array() -> Result<GLuint> {
    gen_vertex_arrays(1).map(|arrays| arrays[0])
}

pub fn get_program_iv(program: GLuint, parameter_name: GLenum) -> Result<GLint> {
    let mut value = 0;
    unsafe { gl::GetProgramiv(program, parameter_name, &mut value) };
    check_gl_error(
        "glGetProgramiv",
        &[GlInvalidEnum, GlInvalidValue, GlInvalidOperation],
    )?;

    Ok(value)
}

pub fn get_program_info_log(program: GLuint) -> Result<String> {
    let info_log_length = get_program_iv(program, gl::INFO_LOG_LENGTH)?;
    if info_log_length <= 0 {
        return Ok(String::new());
    }

    let mut info_log = vec![0u8; info_log_length as usize];
    let mut actual_info_log_length: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(
            program,
            info_log_length,
            &mut actual_info_log_length,
            info_log.as_mut_ptr() as *mut GLchar,
        )
    };
    check_gl_error(
        "glGetProgramInfoLog",
        &[GlInvalidValue, GlInvalidOperation],
    )?;

    info_log.truncate(actual_info_log_length.max(0) as usize);
    Ok(String::from_utf8_lossy(&info_log).into_owned())
}

pub fn get_shader_iv(shader: GLuint, parameter_name: GLenum) -> Result<GLint> {
    let mut value = 0;
    unsafe { gl::GetShaderiv(shader, parameter_name, &mut value) };
    check_gl_error(
        "glGetShaderiv",
        &[GlInvalidEnum, GlInvalidValue, GlInvalidOperation],
    )?;

    Ok(value)
}

pub fn get_shader_info_log(shader: GLuint) -> Result<String> {
    let info_log_length = get_shader_iv(shader, gl::INFO_LOG_LENGTH)?;
    if info_log_length <= 0 {
        return Ok(String::new());
    }

    let mut info_log = vec![0u8; info_log_length as usize];
    let mut actual_info_log_length: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(
            shader,
            info_log_length,
            &mut actual_info_log_length,
            info_log.as_mut_ptr() as *mut GLchar,
        )
    };
    check_gl_error("glGetShaderInfoLog", &[GlInvalidValue, GlInvalidOperation])?;

    info_log.truncate(actual_info_log_length.max(0) as usize);
    Ok(String::from_utf8_lossy(&info_log).into_owned())
}

/// Returns `None` when the GL hands back a null string, which happens when no
/// context is current.
pub fn get_string(name: GLenum) -> Result<Option<String>> {
    let value = unsafe { gl::GetString(name) };
    check_gl_error("glGetString", &[GlInvalidEnum])?;

    if value.is_null() {
        Ok(None)
    } else {
        let value = unsafe { CStr::from_ptr(value as *const GLchar) };
        Ok(Some(value.to_string_lossy().into_owned()))
    }
}

/// Returns the current viewport as `[x, y, width, height]`.
pub fn get_viewport() -> Result<[GLint; 4]> {
    let mut viewport = [0; 4];
    unsafe { gl::GetIntegerv(gl::VIEWPORT, viewport.as_mut_ptr()) };
    check_gl_error("glGetIntegerv", &[GlInvalidEnum, GlInvalidValue])?;

    Ok(viewport)
}

pub fn is_program(program: GLuint) -> Result<bool> {
    let value = unsafe { gl::IsProgram(program) };
    check_gl_error("glIsProgram", &[])?;

    Ok(value == gl::TRUE)
}

pub fn is_shader(shader: GLuint) -> Result<bool> {
    let value = unsafe { gl::IsShader(shader) };
    check_gl_error("glIsShader", &[])?;

    Ok(value == gl::TRUE)
}

pub fn link_program(program: GLuint) -> Result<()> {
    unsafe { gl::LinkProgram(program) };
    check_gl_error("glLinkProgram", &[GlInvalidValue, GlInvalidOperation])
}

pub fn pixel_store_pack_alignment(alignment: GLint) -> Result<()> {
    unsafe { gl::PixelStorei(gl::PACK_ALIGNMENT, alignment) };
    check_gl_error("glPixelStorei", &[GlInvalidEnum, GlInvalidValue])
}

/// Reads a block of RGBA8 pixels from the current read framebuffer.
///
/// Rows are returned bottom-up, the way the GL stores them. The pack
/// alignment has to be 1 or 4 for the returned buffer to be tightly packed.
pub fn read_pixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> Result<Vec<u8>> {
    if width < 0 || height < 0 {
        log::error!("glReadPixels called with negative dimensions, width = {width}, height = {height}");
        return Err(GlInvalidValue);
    }

    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    unsafe {
        gl::ReadPixels(
            x,
            y,
            width,
            height,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_mut_ptr() as *mut c_void,
        )
    };
    check_gl_error(
        "glReadPixels",
        &[
            GlInvalidEnum,
            GlInvalidValue,
            GlInvalidOperation,
            GlInvalidFramebufferOperation,
        ],
    )?;

    Ok(pixels)
}

/// Replaces the source code of `shader` with the concatenation of `sources`.
pub fn shader_source(shader: GLuint, sources: &[&str]) -> Result<()> {
    let count = to_gl_sizei("glShaderSource", sources.len())?;
    let pointers = sources
        .iter()
        .map(|source| source.as_ptr() as *const GLchar)
        .collect::<Vec<_>>();
    let lengths = sources
        .iter()
        .map(|source| GLint::try_from(source.len()).map_err(|_| GlInvalidValue))
        .collect::<Result<Vec<_>>>()?;

    unsafe { gl::ShaderSource(shader, count, pointers.as_ptr(), lengths.as_ptr()) };
    check_gl_error("glShaderSource", &[GlInvalidValue, GlInvalidOperation])
}

pub fn use_program(program: GLuint) -> Result<()> {
    unsafe { gl::UseProgram(program) };
    check_gl_error("glUseProgram", &[GlInvalidValue, GlInvalidOperation])
}

/// Describes attribute `index` of the bound vertex array as `size`
/// components of `data_type`, read from the buffer bound to
/// [`BufferTarget::Array`] starting at byte `offset`.
pub fn vertex_attrib_pointer(
    index: GLuint,
    size: GLint,
    data_type: DataType,
    normalized: bool,
    stride: GLsizei,
    offset: usize,
) -> Result<()> {
    let pointer = if offset == 0 {
        null()
    } else {
        offset as *const c_void
    };
    let normalized = if normalized { gl::TRUE } else { gl::FALSE };

    unsafe {
        gl::VertexAttribPointer(index, size, data_type.to_gl(), normalized, stride, pointer)
    };
    check_gl_error(
        "glVertexAttribPointer",
        &[GlInvalidEnum, GlInvalidValue, GlInvalidOperation],
    )
}

pub fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) -> Result<()> {
    unsafe { gl::Viewport(x, y, width, height) };
    check_gl_error("glViewport", &[GlInvalidValue])
}
