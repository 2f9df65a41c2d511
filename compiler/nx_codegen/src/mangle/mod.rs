//! Symbol mangling for managed entry points.
//!
//! Every exported method is registered on the managed side under a mangled
//! name that the generated C++ passes to the host resolver.
//!
//! # Mangling Scheme
//!
//! ```text
//! _N<name>E[t]<param-codes>
//! ```
//!
//! - `<name>` is the method name; constructors use the declaring type's name
//! - `t` marks an instance method (constructors included)
//! - one code per parameter, in declaration order
//!
//! | Parameter type | Code |
//! |----------------|------|
//! | any reference type | `p` |
//! | `SByte` / `Int16` / `Int32` / `Int64` | `c` / `s` / `i` / `l` |
//! | `Byte` / `UInt16` / `UInt32` / `UInt64` | `b` / `w` / `u` / `q` |
//! | `Half` / `Single` / `Double` | `h` / `f` / `d` |
//! | anything else | first character of the short name |
//!
//! Return types and parameter names never participate, so overloads that
//! differ only in those collide. [`ExportPlan::validate`] rejects such
//! collisions before anything is emitted.
//!
//! # Examples
//!
//! | Method | Mangled Name |
//! |--------|--------------|
//! | `Foo(int, object)` constructor of `Foo` | `_NFooEtip` |
//! | `static void Bar()` | `_NBarE` |
//! | `long Sum(long* values, int count)` | `_NSumEtIi` |
//!
//! [`ExportPlan::validate`]: crate::ExportPlan::validate

use nx_model::{Method, PrimitiveKind, SymbolModel, TypeRef};

/// The prefix for all mangled entry points.
pub const MANGLE_PREFIX: &str = "_N";

/// Terminates the name.
const NAME_END: char = 'E';

/// Marks a method that receives the object handle or produces it.
const INSTANCE_MARKER: char = 't';

/// Symbol mangler for managed entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mangler;

impl Mangler {
    /// Create a new mangler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Mangle a method declared in `model`.
    #[must_use]
    pub fn mangle_method(&self, model: &SymbolModel, method: &Method) -> String {
        let name = if method.is_constructor {
            model.type_decl(method.declaring_type).name.as_str()
        } else {
            method.name.as_str()
        };
        self.mangle(name, method.is_static, method.parameters.iter().map(|p| &p.ty))
    }

    /// Mangle from the parts that participate in the symbol.
    #[must_use]
    pub fn mangle<'t>(
        &self,
        name: &str,
        is_static: bool,
        parameters: impl IntoIterator<Item = &'t TypeRef>,
    ) -> String {
        let mut result = String::with_capacity(name.len() + 8);
        result.push_str(MANGLE_PREFIX);
        result.push_str(name);
        result.push(NAME_END);

        if !is_static {
            result.push(INSTANCE_MARKER);
        }

        result.extend(parameters.into_iter().filter_map(|ty| self.type_code(ty)));
        result
    }

    /// The one-character code for a parameter type. `None` only for a value
    /// type with an empty name, which the model never produces.
    pub fn type_code(&self, ty: &TypeRef) -> Option<char> {
        let code = match ty {
            TypeRef::Reference(_) => 'p',
            TypeRef::Primitive(kind) => match kind {
                PrimitiveKind::SByte => 'c',
                PrimitiveKind::Int16 => 's',
                PrimitiveKind::Int32 => 'i',
                PrimitiveKind::Int64 => 'l',
                PrimitiveKind::Byte => 'b',
                PrimitiveKind::UInt16 => 'w',
                PrimitiveKind::UInt32 => 'u',
                PrimitiveKind::UInt64 => 'q',
                PrimitiveKind::Half => 'h',
                PrimitiveKind::Single => 'f',
                PrimitiveKind::Double => 'd',
                PrimitiveKind::Void | PrimitiveKind::IntPtr | PrimitiveKind::UIntPtr => {
                    return ty.short_name().chars().next();
                }
            },
            TypeRef::Pointer(_) | TypeRef::Value(_) => return ty.short_name().chars().next(),
        };
        Some(code)
    }
}
