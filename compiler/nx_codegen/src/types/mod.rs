//! Type Mapping: managed types → C++ types
//!
//! Two renderings exist for every type:
//!
//! - **Display** types appear in the public header. Primitives use the fixed
//!   width `<cstdint>`/`<stdfloat>` spellings and everything else names the
//!   generated C++ class, e.g. `::Demo::Shapes::Circle`.
//! - **Bridge** types cross the managed boundary. Reference types collapse to
//!   an opaque `::std::intptr_t` handle; value types keep their display type.

use nx_model::{PrimitiveKind, TypeRef};

/// Native spelling of the opaque object handle.
pub const HANDLE_TYPE: &str = "::std::intptr_t";

/// Type mapper for converting managed type references to C++ types.
pub struct CppTypeMapper;

impl CppTypeMapper {
    /// Map a type as it appears in the public header.
    pub fn display_type(ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => Self::map_primitive(*kind).to_string(),
            TypeRef::Pointer(pointee) => format!("{}*", Self::display_type(pointee)),
            TypeRef::Reference(_) | TypeRef::Value(_) => format!("::{}", ty.qualified_name("::")),
        }
    }

    /// Map a type as it crosses the managed boundary.
    pub fn bridge_type(ty: &TypeRef) -> String {
        if ty.is_reference() {
            HANDLE_TYPE.to_string()
        } else {
            Self::display_type(ty)
        }
    }

    fn map_primitive(kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Void => "void",
            PrimitiveKind::SByte => "::std::int8_t",
            PrimitiveKind::Int16 => "::std::int16_t",
            PrimitiveKind::Int32 => "::std::int32_t",
            PrimitiveKind::Int64 => "::std::int64_t",
            PrimitiveKind::Byte => "::std::uint8_t",
            PrimitiveKind::UInt16 => "::std::uint16_t",
            PrimitiveKind::UInt32 => "::std::uint32_t",
            PrimitiveKind::UInt64 => "::std::uint64_t",
            PrimitiveKind::Half => "::std::float16_t",
            PrimitiveKind::Single => "::std::float32_t",
            PrimitiveKind::Double => "::std::float64_t",
            PrimitiveKind::IntPtr => HANDLE_TYPE,
            PrimitiveKind::UIntPtr => "::std::uintptr_t",
        }
    }
}
