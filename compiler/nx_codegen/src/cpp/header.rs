//! `lib.h` generation.

use nx_model::{Symbol, SymbolModel, TypeDeclId};

use super::write_signature;
use crate::context::CodegenContext;
use crate::names::qualified_name;
use crate::runtime::HEADER_TEMPLATE;
use crate::select::{exported_methods, exported_types};
use crate::types::HANDLE_TYPE;

/// Renders the public header.
pub struct HeaderEmitter;

impl HeaderEmitter {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit(model: &SymbolModel) -> String {
        let mut ctx = CodegenContext::new(model);
        ctx.writeln(HEADER_TEMPLATE);
        for ty in exported_types(model) {
            Self::emit_class(&mut ctx, ty);
        }
        ctx.take_output()
    }

    fn emit_class(ctx: &mut CodegenContext<'_>, ty: TypeDeclId) {
        let model = ctx.model;
        let decl = model.type_decl(ty);
        let name = decl.name.as_str();
        tracing::debug!(ty = %name, "declaring class");

        let ns = model.namespace_of(ty);
        let scoped = !ns.is_root();
        if scoped {
            let path = qualified_name(model, Symbol::Namespace(ns), "::");
            ctx.writeln(&format!("namespace {path} {{"));
            ctx.indent();
        }

        ctx.writeln(&format!("class {name} {{"));
        ctx.indent();
        ctx.writeln(&format!("{HANDLE_TYPE} _handle;"));
        ctx.dedent();
        ctx.newline();
        ctx.writeln("public:");
        ctx.indent();
        ctx.writeln(&format!("{name}(const {name}&) = delete;"));
        ctx.writeln(&format!("{name} &operator =(const {name}&) = delete;"));
        ctx.writeln(&format!("~{name}();"));

        for id in exported_methods(model, ty) {
            let method = model.method(id);
            ctx.write("CLR_CALL ");
            if method.is_static {
                ctx.write("static ");
            }
            write_signature(ctx, method, "");
            ctx.writeln(";");
        }

        ctx.dedent();
        ctx.writeln("};");

        if scoped {
            ctx.dedent();
            ctx.writeln("}");
        }
        ctx.newline();
    }
}
