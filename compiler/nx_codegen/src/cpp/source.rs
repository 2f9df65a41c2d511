//! `lib.cxx` generation.
//!
//! Every body follows the same protocol:
//!
//! ```text
//! thread_local RET (MANAGED_CALL *_fp)(PARAMS);
//! if (!_fp) {
//!   int r = ::clr::get_function_pointer(CLR_STR("TYPE"), CLR_STR("MEMBER"), ...);
//!   ::clr::assert_status_code(static_cast<::clr::StatusCode>(r));
//! }
//! [return | _handle =] _fp(ARGS);
//! ```

use nx_model::{Method, Symbol, TypeDeclId};

use super::write_signature;
use crate::context::CodegenContext;
use crate::mangle::Mangler;
use crate::names::{assembly_qualified_name, qualified_name, type_ref};
use crate::runtime::SOURCE_TEMPLATE;
use crate::select::{exported_methods, exported_types};
use crate::types::HANDLE_TYPE;
use crate::{CppTypeMapper, ExportPlan};

/// What a body does with the managed call's result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ResultUse {
    Return,
    StoreHandle,
    Discard,
}

/// One lazily bound managed call.
struct Binding<'m> {
    method: &'m Method,
    /// Assembly-qualified name of the declaring type.
    type_key: String,
    /// Member name passed to the resolver.
    member: String,
    arguments: Vec<String>,
    result: ResultUse,
}

/// Renders the implementation file.
pub struct SourceEmitter;

impl SourceEmitter {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit(plan: &ExportPlan<'_>) -> String {
        let model = plan.model;
        let mut ctx = CodegenContext::new(model);
        ctx.writeln(SOURCE_TEMPLATE);

        let hook = model.method(plan.deallocation_hook);
        let release = Binding {
            method: hook,
            type_key: assembly_qualified_name(model, Some(Symbol::Type(hook.declaring_type))),
            member: hook.name.clone(),
            arguments: vec!["_handle".to_string()],
            result: ResultUse::Discard,
        };

        for ty in exported_types(model) {
            Self::emit_type(&mut ctx, ty, &release);
        }
        ctx.take_output()
    }

    fn emit_type(ctx: &mut CodegenContext<'_>, ty: TypeDeclId, release: &Binding<'_>) {
        let model = ctx.model;
        let name = &model.type_decl(ty).name;
        let scope = format!("{}::", qualified_name(model, Symbol::Type(ty), "::"));
        let type_key = assembly_qualified_name(model, Some(Symbol::Type(ty)));
        let mangler = Mangler::new();

        ctx.writeln(&format!("{scope}~{name}() {{"));
        ctx.indent();
        Self::emit_binding(ctx, release);
        ctx.dedent();
        ctx.writeln("}");

        for id in exported_methods(model, ty) {
            let method = model.method(id);
            let mut arguments = Vec::with_capacity(method.parameters.len() + 1);
            if method.takes_handle() {
                arguments.push("_handle".to_string());
            }
            arguments.extend(method.parameters.iter().map(|p| p.name.clone()));

            let result = if method.is_constructor {
                ResultUse::StoreHandle
            } else if method.return_type.is_void() {
                ResultUse::Discard
            } else {
                ResultUse::Return
            };

            let binding = Binding {
                method,
                type_key: type_key.clone(),
                member: mangler.mangle_method(model, method),
                arguments,
                result,
            };
            tracing::debug!(ty = %name, symbol = %binding.member, "binding method");

            ctx.newline();
            write_signature(ctx, method, &scope);
            ctx.writeln(" {");
            ctx.indent();
            Self::emit_binding(ctx, &binding);
            ctx.dedent();
            ctx.writeln("}");
        }
        ctx.newline();
    }

    fn emit_binding(ctx: &mut CodegenContext<'_>, binding: &Binding<'_>) {
        let method = binding.method;
        let ret = if method.is_constructor {
            CppTypeMapper::bridge_type(&type_ref(ctx.model, method.declaring_type))
        } else {
            CppTypeMapper::bridge_type(&method.return_type)
        };

        ctx.write(&format!("thread_local {ret} (MANAGED_CALL *_fp)("));
        let handle = method.takes_handle().then(|| HANDLE_TYPE.to_string());
        let params = method
            .parameters
            .iter()
            .map(|p| CppTypeMapper::bridge_type(&p.ty));
        ctx.write_list(handle.into_iter().chain(params));
        ctx.writeln(");");

        ctx.writeln("if (!_fp) {");
        ctx.indent();
        ctx.writeln(&format!(
            "int r = ::clr::get_function_pointer(CLR_STR(\"{}\"), CLR_STR(\"{}\"), \
             UNMANAGEDCALLERSONLY_METHOD, nullptr, nullptr, reinterpret_cast<void**>(&_fp));",
            escape(&binding.type_key),
            escape(&binding.member),
        ));
        ctx.writeln("::clr::assert_status_code(static_cast<::clr::StatusCode>(r));");
        ctx.dedent();
        ctx.writeln("}");

        match binding.result {
            ResultUse::Return => ctx.write("return "),
            ResultUse::StoreHandle => ctx.write("_handle = "),
            ResultUse::Discard => {}
        }
        ctx.write("_fp(");
        ctx.write_list(&binding.arguments);
        ctx.writeln(");");
    }
}

/// Escape text for a C++ narrow string literal.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
