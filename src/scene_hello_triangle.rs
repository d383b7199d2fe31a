use graphics_engine::error::{ErrorCode, Result};
use graphics_engine::gl_types::{DataType, DataUsagePattern, DrawMode, ShaderType};
use graphics_engine::gl_wrappers;
use graphics_engine::opengl_utils::vertex_array_object::VertexArrayObject;
use graphics_engine::opengl_utils::vertex_buffer_object::VertexBufferObject;
use graphics_engine::scene::Scene;
use graphics_engine::shader::{ShaderProgram, ShaderSourceMap};
use vek::Vec3;

const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
  gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}"#;

const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
  FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}"#;

const POSITION_ATTRIB_LOCATION: u32 = 0;

pub const TRIANGLE_COLOR: [u8; 4] = [255, 128, 51, 255];

pub const VERTICES: [Vec3<f32>; 3] = [
    Vec3 { x: -0.5, y: -0.5, z: 0.0 }, // left
    Vec3 { x: 0.5, y: -0.5, z: 0.0 },  // right
    Vec3 { x: 0.0, y: 0.5, z: 0.0 },   // top
];

/// A single orange triangle in the middle of the viewport.
pub struct HelloTriangle {
    shader_program: ShaderProgram,
    vao: VertexArrayObject,
    vbo: VertexBufferObject,
}

impl HelloTriangle {
    /// Compiles the shaders and uploads the vertices, any failure is
    /// reported as [`ErrorCode::SceneInitFailure`].
    pub fn new() -> Result<Self> {
        Self::initialize().map_err(|e| {
            log::error!("HelloTriangle initialization failed, msg = {e}");
            ErrorCode::SceneInitFailure
        })
    }

    fn initialize() -> Result<Self> {
        let sources = ShaderSourceMap::from([
            (ShaderType::Vertex, VERTEX_SHADER_SOURCE.to_string()),
            (ShaderType::Fragment, FRAGMENT_SHADER_SOURCE.to_string()),
        ]);
        let shader_program = ShaderProgram::new(&sources)?;

        let vbo = VertexBufferObject::new(&VERTICES, DataType::Float, 3, DataUsagePattern::StaticDraw)?;
        let vao = VertexArrayObject::new(|vao| vao.bind_vbo_to_attrib(&vbo, POSITION_ATTRIB_LOCATION))?;

        Ok(Self {
            shader_program,
            vao,
            vbo,
        })
    }
}

impl Scene for HelloTriangle {
    fn render(&self) -> Result<()> {
        self.shader_program.use_program()?;
        self.vao.use_vao()?;
        let vertex_count =
            i32::try_from(self.vbo.number_of_elements()).map_err(|_| ErrorCode::GlInvalidValue)?;

        gl_wrappers::draw_arrays(DrawMode::Triangles, 0, vertex_count)
    }
}
