mod common;

use graphics_engine::error::ErrorCode;
use graphics_engine::gl_types::ShaderType;
use graphics_engine::gl_wrappers::{
    attach_shader, create_shader, is_program, is_shader, shader_source,
};
use graphics_engine::shader::{
    compile_shader, compile_shader_or_delete, create_and_compile_shader,
    create_and_link_shader_program, create_program, link_shader_program_or_delete, ShaderProgram,
    ShaderSourceMap,
};

use common::{
    with_gl_context, BASIC_FS_SRC, BASIC_FS_SRC_UNWRITTEN_INPUT, BASIC_VS_SRC,
    BASIC_VS_SRC_SPELLING_ERR,
};

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn compile_shader_works_with_good_vertex_shader_source_code() {
    with_gl_context(|_, _| {
        let vertex_shader_id = create_shader(ShaderType::Vertex).unwrap();
        assert_eq!(compile_shader(vertex_shader_id, BASIC_VS_SRC), Ok(()));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn compile_shader_fails_with_bad_vertex_shader_source_code() {
    with_gl_context(|_, _| {
        let vertex_shader_id = create_shader(ShaderType::Vertex).unwrap();
        assert_eq!(
            compile_shader(vertex_shader_id, BASIC_VS_SRC_SPELLING_ERR),
            Err(ErrorCode::ShaderError)
        );
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn compile_shader_fails_with_invalid_opengl_id() {
    with_gl_context(|_, _| {
        assert_eq!(compile_shader(0, BASIC_VS_SRC), Err(ErrorCode::ShaderError));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_shader_works_with_every_shader_type() {
    with_gl_context(|_, _| {
        for shader_type in ShaderType::ALL {
            let shader_id = create_shader(*shader_type);
            assert!(matches!(shader_id, Ok(id) if id != 0), "{shader_type:?}");
        }
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_and_compile_shader_works_with_good_data() {
    with_gl_context(|_, _| {
        assert!(create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC).is_ok());
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_and_compile_shader_fails_with_bad_source_code() {
    with_gl_context(|_, _| {
        let error =
            create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC_SPELLING_ERR).unwrap_err();
        assert_eq!(error.to_string(), "Shader Error.");
        assert_eq!(error.value(), ErrorCode::ShaderError as u8);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn failed_compilation_deletes_the_shader_object() {
    with_gl_context(|_, _| {
        let shader_id = create_shader(ShaderType::Vertex).unwrap();
        assert_eq!(is_shader(shader_id), Ok(true));

        assert_eq!(
            compile_shader_or_delete(shader_id, BASIC_VS_SRC_SPELLING_ERR),
            Err(ErrorCode::ShaderError)
        );
        assert_eq!(is_shader(shader_id), Ok(false));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn successful_compilation_keeps_the_shader_object() {
    with_gl_context(|_, _| {
        let shader_id = create_shader(ShaderType::Vertex).unwrap();

        assert_eq!(compile_shader_or_delete(shader_id, BASIC_VS_SRC), Ok(()));
        assert_eq!(is_shader(shader_id), Ok(true));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_and_link_shader_program_works_with_good_data() {
    with_gl_context(|_, _| {
        let vs_id = create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC).unwrap();
        let fs_id = create_and_compile_shader(ShaderType::Fragment, BASIC_FS_SRC).unwrap();

        let program_id = create_and_link_shader_program(&[vs_id, fs_id]);
        assert!(matches!(program_id, Ok(id) if id != 0));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_and_link_shader_program_fails_with_invalid_data() {
    with_gl_context(|_, _| {
        let error = create_and_link_shader_program(&[0]).unwrap_err();
        assert_eq!(error.to_string(), "Shader Error.");
        assert_eq!(error, ErrorCode::ShaderError);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn create_and_link_shader_program_fails_when_stages_do_not_match() {
    with_gl_context(|_, _| {
        let vs_id = create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC).unwrap();
        let fs_id =
            create_and_compile_shader(ShaderType::Fragment, BASIC_FS_SRC_UNWRITTEN_INPUT).unwrap();

        assert_eq!(
            create_and_link_shader_program(&[vs_id, fs_id]),
            Err(ErrorCode::ShaderError)
        );
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn failed_link_deletes_the_program_object() {
    with_gl_context(|_, _| {
        let vs_id = create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC).unwrap();
        let fs_id =
            create_and_compile_shader(ShaderType::Fragment, BASIC_FS_SRC_UNWRITTEN_INPUT).unwrap();
        let program_id = create_program().unwrap();
        assert_eq!(is_program(program_id), Ok(true));

        assert_eq!(
            link_shader_program_or_delete(program_id, &[vs_id, fs_id]),
            Err(ErrorCode::ShaderError)
        );
        assert_eq!(is_program(program_id), Ok(false));

        // the shaders stay with the caller
        assert_eq!(is_shader(vs_id), Ok(true));
        assert_eq!(is_shader(fs_id), Ok(true));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn failed_attach_deletes_the_program_object() {
    with_gl_context(|_, _| {
        let program_id = create_program().unwrap();

        assert_eq!(
            link_shader_program_or_delete(program_id, &[0]),
            Err(ErrorCode::ShaderError)
        );
        assert_eq!(is_program(program_id), Ok(false));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn attach_shader_works_with_good_data() {
    with_gl_context(|_, _| {
        let vs_id = create_and_compile_shader(ShaderType::Vertex, BASIC_VS_SRC).unwrap();
        let fs_id = create_and_compile_shader(ShaderType::Fragment, BASIC_FS_SRC).unwrap();
        let program_id = create_program().unwrap();

        assert_eq!(attach_shader(program_id, vs_id), Ok(()));
        assert_eq!(attach_shader(program_id, fs_id), Ok(()));
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn attach_shader_fails_with_invalid_data() {
    with_gl_context(|_, _| {
        let program_id = create_program().unwrap();

        let error = attach_shader(program_id, 0).unwrap_err();
        assert_eq!(error.to_string(), "OpenGL Error: Invalid Value.");
        assert_eq!(error, ErrorCode::GlInvalidValue);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn attach_shader_fails_to_attach_program() {
    with_gl_context(|_, _| {
        let program_id = create_program().unwrap();

        let error = attach_shader(program_id, program_id).unwrap_err();
        assert_eq!(error.to_string(), "OpenGL Error: Invalid Operation.");
        assert_eq!(error, ErrorCode::GlInvalidOperation);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn shader_source_fails_to_source_program() {
    with_gl_context(|_, _| {
        let program_id = create_program().unwrap();

        let error = shader_source(program_id, &[BASIC_FS_SRC]).unwrap_err();
        assert_eq!(error.to_string(), "OpenGL Error: Invalid Operation.");
        assert_eq!(error, ErrorCode::GlInvalidOperation);
    });
}

#[test]
#[ignore = "needs a display with OpenGL 3.3 support"]
fn shader_program_links_a_source_map() {
    with_gl_context(|_, _| {
        let sources = ShaderSourceMap::from([
            (ShaderType::Vertex, BASIC_VS_SRC.to_string()),
            (ShaderType::Fragment, BASIC_FS_SRC.to_string()),
        ]);

        let program = ShaderProgram::new(&sources).unwrap();
        assert_ne!(program.program_id(), 0);
        assert_eq!(program.use_program(), Ok(()));

        let broken_sources = ShaderSourceMap::from([(
            ShaderType::Vertex,
            BASIC_VS_SRC_SPELLING_ERR.to_string(),
        )]);
        assert_eq!(
            ShaderProgram::new(&broken_sources).err(),
            Some(ErrorCode::ShaderError)
        );
    });
}
