//! C++ emission.
//!
//! The header declares one non-copyable class per exported type holding the
//! managed object handle. The source defines every declared member as a
//! lazy binding: on first use per thread, the managed entry point is looked
//! up through the host resolver and cached in a `thread_local` function
//! pointer.

mod header;
mod source;

pub use header::HeaderEmitter;
pub use source::SourceEmitter;

use nx_model::{Method, SymbolModel};

use crate::context::CodegenContext;
use crate::CppTypeMapper;

/// Write `[ret ]<scope><name>(<type> <param>, ...)` using display types.
///
/// Constructors are spelled with the declaring type's name and no return type.
fn write_signature(ctx: &mut CodegenContext<'_>, method: &Method, scope: &str) {
    let model: &SymbolModel = ctx.model;
    if method.is_constructor {
        let name = &model.type_decl(method.declaring_type).name;
        ctx.write(&format!("{scope}{name}("));
    } else {
        let ret = CppTypeMapper::display_type(&method.return_type);
        ctx.write(&format!("{ret} {scope}{}(", method.name));
    }
    ctx.write_list(
        method
            .parameters
            .iter()
            .map(|p| format!("{} {}", CppTypeMapper::display_type(&p.ty), p.name)),
    );
    ctx.write(")");
}
