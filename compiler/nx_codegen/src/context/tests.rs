use nx_model::{AssemblyIdentity, ModelBuilder, SymbolModel, Version};
use pretty_assertions::assert_eq;

use super::CodegenContext;

fn empty_model() -> SymbolModel {
    ModelBuilder::new(AssemblyIdentity::new("Demo", Version::new(1, 0, 0))).finish()
}

#[test]
fn test_two_spaces_per_level() {
    let model = empty_model();
    let mut ctx = CodegenContext::new(&model);
    ctx.writeln("a {");
    ctx.indent();
    ctx.writeln("b {");
    ctx.indent();
    ctx.writeln("c;");
    ctx.dedent();
    ctx.writeln("}");
    ctx.dedent();
    ctx.writeln("}");

    assert_eq!(ctx.take_output(), "a {\n  b {\n    c;\n  }\n}\n");
}

#[test]
fn test_indent_applied_per_line_of_fragment() {
    let model = empty_model();
    let mut ctx = CodegenContext::new(&model);
    ctx.indent();
    ctx.writeln("first\nsecond\n\nfourth");

    assert_eq!(ctx.take_output(), "  first\n  second\n\n  fourth\n");
}

#[test]
fn test_indent_is_lazy() {
    let model = empty_model();
    let mut ctx = CodegenContext::new(&model);
    ctx.write("x(");
    // Changing the level mid-line has no effect until the next line starts.
    ctx.indent();
    ctx.write("y");
    ctx.writeln(")");
    ctx.write("z");

    assert_eq!(ctx.take_output(), "x(y)\n  z");
}

#[test]
fn test_write_list() {
    let model = empty_model();
    let mut ctx = CodegenContext::new(&model);
    ctx.write_list(Vec::<String>::new());
    ctx.write("(");
    ctx.write_list(["a", "b", "c"]);
    ctx.write(")");

    assert_eq!(ctx.take_output(), "(a, b, c)");
}
