//! Export surface validation.
//!
//! Runs before any artifact is rendered. A model passes when:
//! - exactly one `NativeExposer.Internal.Free` exists and takes a single handle
//! - no two exported methods of one type share a mangled name

use rustc_hash::FxHashMap;

use nx_model::{
    Method, MethodId, PrimitiveKind, Symbol, SymbolModel, TypeRef, FREE_METHOD, INTERNAL_TYPE,
};

use crate::names::qualified_name;
use crate::select::{all_types, exported_methods, exported_types};
use crate::{CodegenError, Mangler};

/// A model whose export surface has been checked.
#[derive(Clone, Copy, Debug)]
pub struct ExportPlan<'a> {
    pub model: &'a SymbolModel,
    /// The method that releases a managed object handle.
    pub deallocation_hook: MethodId,
}

impl<'a> ExportPlan<'a> {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate(model: &'a SymbolModel) -> Result<Self, CodegenError> {
        let deallocation_hook = find_deallocation_hook(model)?;
        for ty in exported_types(model) {
            check_collisions(model, exported_methods(model, ty))?;
        }
        Ok(ExportPlan {
            model,
            deallocation_hook,
        })
    }
}

fn find_deallocation_hook(model: &SymbolModel) -> Result<MethodId, CodegenError> {
    let candidates: Vec<MethodId> = all_types(model, model.root())
        .filter(|&ty| qualified_name(model, Symbol::Type(ty), ".") == INTERNAL_TYPE)
        .flat_map(|ty| model.type_decl(ty).methods.iter().copied())
        .filter(|&m| model.method(m).name == FREE_METHOD)
        .collect();

    let hook = match candidates.as_slice() {
        [] => {
            return Err(CodegenError::MissingDeallocationHook {
                type_name: INTERNAL_TYPE,
                method: FREE_METHOD,
            })
        }
        [hook] => *hook,
        _ => {
            return Err(CodegenError::AmbiguousDeallocationHook {
                type_name: INTERNAL_TYPE,
                method: FREE_METHOD,
                count: candidates.len(),
            })
        }
    };

    let method = model.method(hook);
    let handle_arguments = usize::from(method.takes_handle()) + method.parameters.len();
    let handle_sized = method
        .parameters
        .iter()
        .all(|p| p.ty.is_reference() || p.ty == TypeRef::primitive(PrimitiveKind::IntPtr));
    if handle_arguments != 1 || !handle_sized {
        return Err(CodegenError::InvalidDeallocationHook {
            signature: signature(model, method),
        });
    }

    tracing::debug!(hook = %signature(model, method), "found deallocation hook");
    Ok(hook)
}

fn check_collisions(
    model: &SymbolModel,
    methods: impl Iterator<Item = MethodId>,
) -> Result<(), CodegenError> {
    let mangler = Mangler::new();
    let mut seen: FxHashMap<String, MethodId> = FxHashMap::default();

    for id in methods {
        let method = model.method(id);
        let symbol = mangler.mangle_method(model, method);
        if let Some(&previous) = seen.get(&symbol) {
            return Err(CodegenError::ManglingCollision {
                type_name: qualified_name(model, Symbol::Type(method.declaring_type), "."),
                symbol,
                first: signature(model, model.method(previous)),
                second: signature(model, method),
            });
        }
        seen.insert(symbol, id);
    }
    Ok(())
}

/// Human-readable signature, e.g. `Scale(System.Single, class Demo.Circle)`.
fn signature(model: &SymbolModel, method: &Method) -> String {
    let name = if method.is_constructor {
        &model.type_decl(method.declaring_type).name
    } else {
        &method.name
    };
    let params: Vec<String> = method.parameters.iter().map(|p| p.ty.to_string()).collect();
    let prefix = if method.is_static { "static " } else { "" };
    format!("{prefix}{name}({})", params.join(", "))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
