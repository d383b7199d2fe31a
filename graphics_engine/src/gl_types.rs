use gl::types::GLenum;

use crate::error::ErrorCode;

macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident, invalid = $invalid:path {
            $($variant:ident => $gl_value:path,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn to_gl(self) -> GLenum {
                match self {
                    $($name::$variant => $gl_value,)*
                }
            }
        }

        impl From<$name> for GLenum {
            fn from(value: $name) -> GLenum {
                value.to_gl()
            }
        }

        impl TryFrom<GLenum> for $name {
            type Error = ErrorCode;

            fn try_from(value: GLenum) -> std::result::Result<Self, Self::Error> {
                match value {
                    $($gl_value => Ok($name::$variant),)*
                    _ => Err($invalid),
                }
            }
        }
    };
}

gl_enum! {
    pub enum BufferTarget, invalid = ErrorCode::GlInvalidEnum {
        Array => gl::ARRAY_BUFFER,
        CopyRead => gl::COPY_READ_BUFFER,
        CopyWrite => gl::COPY_WRITE_BUFFER,
        ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        PixelPack => gl::PIXEL_PACK_BUFFER,
        PixelUnpack => gl::PIXEL_UNPACK_BUFFER,
        Texture => gl::TEXTURE_BUFFER,
        TransformFeedback => gl::TRANSFORM_FEEDBACK_BUFFER,
        Uniform => gl::UNIFORM_BUFFER,
    }
}

gl_enum! {
    /// A single buffer of the default framebuffer, see [`crate::clear_flags::ClearFlags`].
    pub enum ClearBit, invalid = ErrorCode::GlInvalidEnum {
        Color => gl::COLOR_BUFFER_BIT,
        Depth => gl::DEPTH_BUFFER_BIT,
        Stencil => gl::STENCIL_BUFFER_BIT,
    }
}

gl_enum! {
    pub enum DataType, invalid = ErrorCode::GlInvalidEnum {
        Byte => gl::BYTE,
        UnsignedByte => gl::UNSIGNED_BYTE,
        Short => gl::SHORT,
        UnsignedShort => gl::UNSIGNED_SHORT,
        Int => gl::INT,
        UnsignedInt => gl::UNSIGNED_INT,
        HalfFloat => gl::HALF_FLOAT,
        Float => gl::FLOAT,
        Double => gl::DOUBLE,
        Int2101010Rev => gl::INT_2_10_10_10_REV,
        UnsignedInt2101010Rev => gl::UNSIGNED_INT_2_10_10_10_REV,
    }
}

gl_enum! {
    pub enum DataUsagePattern, invalid = ErrorCode::GlInvalidEnum {
        StreamDraw => gl::STREAM_DRAW,
        StreamRead => gl::STREAM_READ,
        StreamCopy => gl::STREAM_COPY,
        StaticDraw => gl::STATIC_DRAW,
        StaticRead => gl::STATIC_READ,
        StaticCopy => gl::STATIC_COPY,
        DynamicDraw => gl::DYNAMIC_DRAW,
        DynamicRead => gl::DYNAMIC_READ,
        DynamicCopy => gl::DYNAMIC_COPY,
    }
}

gl_enum! {
    pub enum DrawMode, invalid = ErrorCode::GlInvalidEnum {
        Points => gl::POINTS,
        LineStrip => gl::LINE_STRIP,
        LineLoop => gl::LINE_LOOP,
        Lines => gl::LINES,
        LineStripAdjacency => gl::LINE_STRIP_ADJACENCY,
        LinesAdjacency => gl::LINES_ADJACENCY,
        TriangleStrip => gl::TRIANGLE_STRIP,
        TriangleFan => gl::TRIANGLE_FAN,
        Triangles => gl::TRIANGLES,
        TriangleStripAdjacency => gl::TRIANGLE_STRIP_ADJACENCY,
        TrianglesAdjacency => gl::TRIANGLES_ADJACENCY,
    }
}

gl_enum! {
    pub enum ShaderType, invalid = ErrorCode::InvalidShaderType {
        Fragment => gl::FRAGMENT_SHADER,
        Geometry => gl::GEOMETRY_SHADER,
        Vertex => gl::VERTEX_SHADER,
    }
}

impl DataType {
    /// Size of one component, packed types count as a whole 32 bit word.
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::Byte | DataType::UnsignedByte => 1,
            DataType::Short | DataType::UnsignedShort | DataType::HalfFloat => 2,
            DataType::Int
            | DataType::UnsignedInt
            | DataType::Float
            | DataType::Int2101010Rev
            | DataType::UnsignedInt2101010Rev => 4,
            DataType::Double => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trips<T>(all: &[T])
    where
        T: Copy + std::fmt::Debug + PartialEq + Into<GLenum> + TryFrom<GLenum, Error = ErrorCode>,
    {
        for value in all {
            let gl_value: GLenum = (*value).into();
            assert_eq!(T::try_from(gl_value), Ok(*value));
        }
    }

    #[test]
    fn every_variant_round_trips_through_its_native_value() {
        assert_round_trips(BufferTarget::ALL);
        assert_round_trips(ClearBit::ALL);
        assert_round_trips(DataType::ALL);
        assert_round_trips(DataUsagePattern::ALL);
        assert_round_trips(DrawMode::ALL);
        assert_round_trips(ShaderType::ALL);
    }

    #[test]
    fn variants_map_to_native_constants() {
        assert_eq!(BufferTarget::Array.to_gl(), gl::ARRAY_BUFFER);
        assert_eq!(DataType::Float.to_gl(), gl::FLOAT);
        assert_eq!(DataUsagePattern::StaticDraw.to_gl(), gl::STATIC_DRAW);
        assert_eq!(DrawMode::Triangles.to_gl(), gl::TRIANGLES);
        assert_eq!(ShaderType::Geometry.to_gl(), gl::GEOMETRY_SHADER);
        assert_eq!(ClearBit::Stencil.to_gl(), gl::STENCIL_BUFFER_BIT);
    }

    #[test]
    fn unknown_native_values_are_rejected() {
        assert_eq!(BufferTarget::try_from(42), Err(ErrorCode::GlInvalidEnum));
        assert_eq!(DrawMode::try_from(gl::FLOAT), Err(ErrorCode::GlInvalidEnum));
        assert_eq!(ClearBit::try_from(42), Err(ErrorCode::GlInvalidEnum));
        assert_eq!(
            ClearBit::try_from(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT),
            Err(ErrorCode::GlInvalidEnum)
        );
        assert_eq!(
            ShaderType::try_from(42),
            Err(ErrorCode::InvalidShaderType)
        );
    }

    #[test]
    fn data_type_sizes() {
        assert_eq!(DataType::UnsignedByte.size_in_bytes(), 1);
        assert_eq!(DataType::HalfFloat.size_in_bytes(), 2);
        assert_eq!(DataType::Float.size_in_bytes(), 4);
        assert_eq!(DataType::UnsignedInt2101010Rev.size_in_bytes(), 4);
        assert_eq!(DataType::Double.size_in_bytes(), 8);
    }
}
