//! Test utilities for generation passes.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use hidlgen_ast::{
    Annotation, Annotations, ConstDecl, Declaration, EnumDecl, EnumType, Field, Fields, Function,
    Interface, Literal, Scalar, StructDecl, Type, Unit, Version,
};
use hidlgen_snippets::SnippetTable;

use crate::{Diagnostic, Diagnostics, EmitStatus, Emitter};

/// A snippet table with a C++-style `header` section and a test-harness
/// `vts` section, covering the sample unit.
pub const SAMPLE_SNIPPETS: &str = include_str!("../tests/fixtures/snippets.toml");

/// Parse [`SAMPLE_SNIPPETS`].
pub fn sample_table() -> SnippetTable {
    SAMPLE_SNIPPETS
        .parse()
        .expect("sample snippets should parse")
}

/// A small lights interface exercising every declaration kind the sample
/// table has hooks for.
pub fn sample_unit() -> Unit {
    let status = Type::named(
        "Status",
        Type::enumeration(
            Scalar::Int32.into(),
            Fields::from(vec![
                Field::enumerator("SUCCESS", Some(Literal::number("0"))),
                Field::enumerator("UNSUPPORTED", None),
                Field::enumerator("UNKNOWN", None),
            ]),
        ),
    );
    let light_state_fields = Fields::from(vec![
        Field::new("color", Scalar::UInt32),
        Field::new("flashOnMs", Scalar::Int32),
        Field::new("enabled", Scalar::Bool),
    ]);
    let light_state = Type::named("LightState", Type::Struct(light_state_fields.clone()));

    let set_light = Function::new("setLight")
        .with_params(Fields::from(vec![
            Field::new("id", Scalar::Int32).with_annotation(
                Annotation::new("range").at_line(30).entry(
                    "normal",
                    vec![Literal::number("1").into(), Literal::number("2").into()],
                ),
            ),
            Field::new("state", light_state),
        ]))
        .with_generates(Fields::from(vec![Field::new("status", status)]))
        .with_annotations(Annotations::from(vec![
            Annotation::new("entry").at_line(28),
            Annotation::new("next_calls")
                .at_line(29)
                .value(Literal::string("getSupportedTypes")),
        ]));

    let get_supported_types = Function::new("getSupportedTypes")
        .with_generates(Fields::from(vec![Field::new(
            "types",
            Type::vec(Scalar::Int32.into()),
        )]))
        .with_annotations(Annotations::from(vec![
            Annotation::new("prev_calls")
                .at_line(33)
                .value(Literal::string("setLight")),
            Annotation::new("exit").at_line(34),
        ]));

    let mut unit = Unit::new("android.hardware.light", Version::new(2, 0));
    unit.namespace = ["android", "hardware", "light", "V2_0"]
        .into_iter()
        .map(String::from)
        .collect();
    unit.imports = vec![
        ["android", "hardware", "light", "V2_0", "types"]
            .into_iter()
            .map(String::from)
            .collect(),
    ];
    unit.interface = Some(Interface {
        name: "ILight".into(),
        annotations: Annotations::from(vec![
            Annotation::new("hal_type")
                .at_line(20)
                .value(Literal::string("light")),
        ]),
        line: 21,
    });
    unit.declarations = vec![
        Declaration::Const(ConstDecl {
            name: "MAX_LIGHTS".into(),
            value: Literal::number("8"),
        }),
        Declaration::Enum(EnumDecl {
            name: "Status".into(),
            body: EnumType {
                storage: Box::new(Scalar::Int32.into()),
                fields: Fields::from(vec![
                    Field::enumerator("SUCCESS", Some(Literal::number("0"))),
                    Field::enumerator("UNSUPPORTED", None),
                    Field::enumerator("UNKNOWN", None),
                ]),
            },
        }),
        Declaration::Struct(StructDecl {
            name: "LightState".into(),
            fields: light_state_fields,
        }),
        Declaration::Function(set_light),
        Declaration::Function(get_supported_types),
    ];
    unit
}

/// Run one pass into a string, returning the output, status and every
/// diagnostic reported.
pub fn render(
    unit: &Unit,
    table: &SnippetTable,
    section: &str,
) -> (String, EmitStatus, Vec<Diagnostic>) {
    let diagnostics = Diagnostics::new();
    let mut out = String::new();
    let status = Emitter::new(table, section, &diagnostics)
        .emit(unit, &mut out)
        .expect("string sink never fails");
    (out, status, diagnostics.take())
}

/// Assert rendered output matches, pointing at the first differing line.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }
    let first = expected
        .lines()
        .zip(actual.lines())
        .position(|(e, a)| e != a);
    let detail = match first {
        Some(i) => format!(
            "line {}:\n  expected: {:?}\n  actual:   {:?}",
            i + 1,
            expected.lines().nth(i).unwrap_or_default(),
            actual.lines().nth(i).unwrap_or_default()
        ),
        None => format!(
            "{} expected lines, {} actual (trailing text or newlines differ)",
            expected.lines().count(),
            actual.lines().count()
        ),
    };
    panic!("rendered output differs at {}\n--- actual ---\n{}", detail, actual);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fixture_matches_sample_unit() {
        let unit: Unit = serde_json::from_str(include_str!("../tests/fixtures/light.json"))
            .expect("fixture should deserialize");
        assert_eq!(unit, sample_unit());
    }

    #[test]
    fn test_sample_table_sections() {
        let table = sample_table();
        let names: Vec<&str> = table.section_names().collect();
        assert_eq!(names, ["header", "vts"]);
    }

    #[test]
    #[should_panic(expected = "line 2")]
    fn test_assert_content_eq_names_first_difference() {
        assert_content_eq("a\nb\nc\n", "a\nB\nc\n");
    }
}
