//! Boilerplate that opens each generated artifact.
//!
//! The header template declares the `clr` support namespace (status codes,
//! `assert_status_code`, host initialization) and the `CLR_CALL`/`CLR_STR`
//! macros used by generated declarations. The source template implements it
//! on top of the host resolver and defines `MANAGED_CALL`.

pub const HEADER_TEMPLATE: &str = include_str!("../templates/lib.h");

pub const SOURCE_TEMPLATE: &str = include_str!("../templates/lib.cxx");

/// Build descriptor with `@LIBRARY@` and `@DOTNET_RUNTIME_VERSION@` placeholders.
pub const BUILD_TEMPLATE: &str = include_str!("../templates/CMakeLists.txt");
