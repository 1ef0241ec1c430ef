#[test]
fn interop_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/interop_error_pass.rs");
    t.pass("tests/ui/interop_error_extra_fields.rs");
    t.compile_fail("tests/ui/interop_error_no_context.rs");
    t.compile_fail("tests/ui/interop_error_bad_context_type.rs");
    t.compile_fail("tests/ui/interop_error_tuple_variant.rs");
}
