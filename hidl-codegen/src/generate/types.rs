use hidlgen_ast::Type;

use super::{FieldList, Generate};
use crate::{RenderContext, Substitutions};

impl Generate for Type {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        match self {
            Type::Scalar(scalar) => scalar.as_str().to_string(),
            Type::Vec(base) => format!("hidl_vec<{}>", base.generate(cx)),
            Type::Array { base, dimension } => format!("{}[{}]", base.generate(cx), dimension),
            Type::Enum(body) => format!("enum {{{}}}", body.fields.comma_list(cx, false)),
            Type::Union(fields) => format!("union {{\n{}}}", fields.semi_block(cx)),
            Type::Struct(fields) => format!("struct {{\n{}}}", fields.semi_block(cx)),
            Type::Named { name, .. } => name.clone(),
            Type::Ref(base) => format!("hidl_ref<{}>", base.generate(cx)),
            Type::Opaque => "opaque".to_string(),
            Type::String => "hidl_string".to_string(),
            Type::Handle => "native_handle".to_string(),
        }
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        match self {
            Type::Scalar(scalar) => Substitutions::new()
                .with("field_type_vts", scalar.vts_tag())
                .with("base_type_name", scalar.as_str()),
            Type::Vec(base) => Substitutions::new()
                .with("vec_name", "myVecName")
                .with("base_type_name", base.generate(cx)),
            Type::Array { base, dimension } => Substitutions::new()
                .with("array_name", "myArrayName")
                .with("array_size", dimension.as_str())
                .with("base_type_name", base.generate(cx)),
            Type::Enum(body) => {
                Substitutions::new().with("enum_base_type", body.storage.generate(cx))
            }
            Type::Named { name, base } => {
                let mut subs = Substitutions::new().with("named_type_name", name.as_str());
                subs.extend(base.subs(cx));
                subs
            }
            Type::Ref(base) => Substitutions::new().with("base_type_name", base.generate(cx)),
            Type::Union(_) | Type::Struct(_) | Type::Opaque | Type::String | Type::Handle => {
                Substitutions::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hidlgen_ast::{Field, Fields, Literal, Scalar};
    use hidlgen_snippets::SnippetTable;

    use super::*;
    use crate::Diagnostics;

    fn render(ty: &Type) -> (String, Substitutions) {
        let table = SnippetTable::new().with("header", "file", "");
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);
        (ty.generate(&cx), ty.subs(&cx))
    }

    #[test]
    fn test_leaf_spellings() {
        assert_eq!(render(&Scalar::UInt8.into()).0, "uint8_t");
        assert_eq!(render(&Type::String).0, "hidl_string");
        assert_eq!(render(&Type::Handle).0, "native_handle");
        assert_eq!(render(&Type::Opaque).0, "opaque");
    }

    #[test]
    fn test_derived_spellings() {
        let ty = Type::vec(Type::array(Scalar::Int32.into(), "4"));
        assert_eq!(render(&ty).0, "hidl_vec<int32_t[4]>");

        let ty = Type::reference(Type::named("Buffer", Type::Struct(Fields::new())));
        assert_eq!(render(&ty).0, "hidl_ref<Buffer>");
    }

    #[test]
    fn test_inline_struct_and_enum() {
        let st = Type::Struct(Fields::from(vec![
            Field::new("x", Scalar::Int32),
            Field::new("y", Scalar::Int32),
        ]));
        assert_eq!(render(&st).0, "struct {\nint32_t x;\nint32_t y;\n}");

        let en = Type::enumeration(
            Scalar::UInt8.into(),
            Fields::from(vec![
                Field::enumerator("OFF", None),
                Field::enumerator("ON", Some(Literal::number("1"))),
            ]),
        );
        assert_eq!(render(&en).0, "enum {OFF, ON = 1}");
    }

    #[test]
    fn test_scalar_and_array_facts() {
        let (_, subs) = render(&Scalar::Bool.into());
        assert_eq!(subs.get("field_type_vts"), Some("bool_t"));
        assert_eq!(subs.get("base_type_name"), Some("bool"));

        let (_, subs) = render(&Type::array(Scalar::Float.into(), "MAX"));
        assert_eq!(subs.get("array_name"), Some("myArrayName"));
        assert_eq!(subs.get("array_size"), Some("MAX"));
        assert_eq!(subs.get("base_type_name"), Some("float"));
    }

    #[test]
    fn test_alias_records_name_then_base_facts() {
        let (_, subs) = render(&Type::named("Celsius", Scalar::Float.into()));
        let keys: Vec<&str> = subs.keys().collect();
        assert_eq!(keys, ["named_type_name", "field_type_vts", "base_type_name"]);
        assert_eq!(subs.get("named_type_name"), Some("Celsius"));
    }

    #[test]
    fn test_reference_records_pointee() {
        let (_, subs) = render(&Type::reference(Type::vec(Type::String)));
        assert_eq!(subs.get("base_type_name"), Some("hidl_vec<hidl_string>"));
    }
}
