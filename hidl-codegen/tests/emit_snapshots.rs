//! Snapshot tests for section output.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use hidlgen_ast::Unit;
use hidlgen_codegen::{Diagnostics, EmitStatus, Emitter};
use hidlgen_snippets::SnippetTable;

/// Emit the light fixture for `section`, asserting a clean pass.
fn emit_fixture(section: &str) -> String {
    let unit: Unit =
        serde_json::from_str(include_str!("fixtures/light.json")).expect("Failed to parse fixture");
    let table: SnippetTable = include_str!("fixtures/snippets.toml")
        .parse()
        .expect("Failed to parse snippets");

    let diagnostics = Diagnostics::new();
    let mut out = String::new();
    let status = Emitter::new(&table, section, &diagnostics)
        .emit(&unit, &mut out)
        .expect("string sink never fails");
    assert_eq!(status, EmitStatus::Written);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics.snapshot());
    out
}

#[test]
fn test_vts_section() {
    let vts = emit_fixture("vts");
    insta::assert_snapshot!("vts_section", vts);
}
