//! `CMakeLists.txt` generation.
//!
//! The build descriptor is a template with two substitution points. Lines
//! starting with `##` are template comments and never reach the output.

use nx_model::SymbolModel;

use crate::context::CodegenContext;
use crate::runtime::BUILD_TEMPLATE;

/// Replaced with the sanitized assembly name.
pub const LIBRARY_PLACEHOLDER: &str = "@LIBRARY@";

/// Replaced with the three-component runtime version.
pub const RUNTIME_VERSION_PLACEHOLDER: &str = "@DOTNET_RUNTIME_VERSION@";

const TEMPLATE_COMMENT: &str = "##";

/// Make `name` usable as a build target: every character that is not a
/// letter or digit becomes `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Renders the build descriptor.
pub struct BuildDescriptorEmitter;

impl BuildDescriptorEmitter {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit(model: &SymbolModel) -> String {
        Self::render(model, BUILD_TEMPLATE)
    }

    /// Render an arbitrary template against `model`.
    pub fn render(model: &SymbolModel, template: &str) -> String {
        let library = sanitize(&model.assembly().name);
        let version = model.runtime_version().to_string();
        tracing::debug!(%library, %version, "rendering build descriptor");

        let text = template
            .replace(LIBRARY_PLACEHOLDER, &library)
            .replace(RUNTIME_VERSION_PLACEHOLDER, &version);

        let mut ctx = CodegenContext::new(model);
        for line in text.lines() {
            if line.starts_with(TEMPLATE_COMMENT) {
                continue;
            }
            ctx.writeln(line);
        }
        ctx.take_output()
    }
}
