use hidlgen_ast::{
    ConstDecl, Declaration, EnumDecl, ImportDecl, StructDecl, TypedefDecl, UnionDecl,
};

use super::{FieldList, Generate, function_subs, params_and_callback};
use crate::{RenderContext, Substitutions};

impl Generate for Declaration {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        match self {
            Declaration::Const(d) => d.generate(cx),
            Declaration::Typedef(d) => d.generate(cx),
            Declaration::Struct(d) => d.generate(cx),
            Declaration::Enum(d) => d.generate(cx),
            Declaration::Union(d) => d.generate(cx),
            Declaration::Import(d) => d.generate(cx),
            Declaration::Function(f) => format!("{}({})", f.name, params_and_callback(f, cx)),
        }
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        match self {
            Declaration::Const(d) => d.subs(cx),
            Declaration::Typedef(d) => d.subs(cx),
            Declaration::Struct(d) => d.subs(cx),
            Declaration::Enum(d) => d.subs(cx),
            Declaration::Union(d) => d.subs(cx),
            Declaration::Import(d) => d.subs(cx),
            Declaration::Function(f) => function_subs(f, cx),
        }
    }
}

impl Generate for ConstDecl {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        let subs = Substitutions::new()
            .with("NAME", self.name.as_str())
            .with("VAL", self.value.text());
        cx.snip("const", &subs)
    }

    fn subs(&self, _cx: &RenderContext<'_>) -> Substitutions {
        let vts_type = if self.value.is_string() {
            "bytes"
        } else {
            "int32_t"
        };
        Substitutions::new()
            .with("const_name", self.name.as_str())
            .with("const_value", self.value.text())
            .with("const_vts_type", vts_type)
    }
}

impl Generate for TypedefDecl {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        format!("typedef {} {};\n", self.base.generate(cx), self.name)
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        let mut subs = Substitutions::new().with("typedef_name", self.name.as_str());
        subs.extend(self.base.subs(cx));
        subs
    }
}

impl Generate for StructDecl {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        format!("struct {} {{\n{}}};\n", self.name, self.fields.semi_block(cx))
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        Substitutions::new()
            .with("struct_fields", self.fields.semi_block(cx))
            .with("struct_name", self.name.as_str())
            .with("struct_gen_fields", self.fields.by_type(cx, "struct_field_"))
    }
}

impl Generate for EnumDecl {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        format!(
            "enum {} : {} {{{}}};\n",
            self.name,
            self.body.storage.generate(cx),
            self.body.fields.comma_list(cx, false)
        )
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        Substitutions::new()
            .with("enum_fields", self.body.fields.comma_list(cx, false))
            .with("enum_name", self.name.as_str())
            .with("enum_base_type", self.body.storage.generate(cx))
            .with(
                "quoted_fields_of_enum",
                self.body.fields.name_list(cx, Some("enum_quoted_name")),
            )
    }
}

impl Generate for UnionDecl {
    fn generate(&self, cx: &RenderContext<'_>) -> String {
        format!("union {} {{\n{}}};\n", self.name, self.fields.semi_block(cx))
    }

    fn subs(&self, cx: &RenderContext<'_>) -> Substitutions {
        Substitutions::new()
            .with("union_fields", self.fields.semi_block(cx))
            .with("union_name", self.name.as_str())
            .with("union_gen_fields", self.fields.by_type(cx, "union_field_"))
    }
}

impl Generate for ImportDecl {
    fn generate(&self, _cx: &RenderContext<'_>) -> String {
        format!("import {};\n", self.name)
    }

    fn subs(&self, _cx: &RenderContext<'_>) -> Substitutions {
        Substitutions::new().with("import_name", self.name.as_str())
    }
}
