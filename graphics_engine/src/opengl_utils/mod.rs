pub mod vertex_array_object;
pub mod vertex_buffer_object;
