use hidlgen_ast::{Field, Fields, Type};

use super::Generate;
use crate::annotations::normal_values;
use crate::naming::make_inline;
use crate::{Diagnostic, RenderContext, Substitutions};

/// Facts of one field: `param_name`, `package_name`, `init_value`, then the
/// facts of its type.
pub fn field_subs(field: &Field, cx: &RenderContext<'_>) -> Substitutions {
    let mut subs = Substitutions::new()
        .with("param_name", field.name.as_str())
        .with("package_name", cx.package())
        .with(
            "init_value",
            field.value.as_ref().map(|v| v.text()).unwrap_or_default(),
        );
    if let Some(ty) = &field.ty {
        subs.extend(ty.subs(cx));
    }
    subs
}

/// List combinators over an ordered field sequence.
///
/// Every combinator visits fields in declaration order.
pub trait FieldList {
    /// Comma-separated parameter list, e.g. `int32_t a, hidl_string b`.
    fn comma_list(&self, cx: &RenderContext<'_>, omit_names: bool) -> String;

    /// Comma-separated names, optionally each rendered through `snippet`.
    fn name_list(&self, cx: &RenderContext<'_>, snippet: Option<&str>) -> String;

    /// One declaration per field, each terminated by `;\n`.
    fn semi_block(&self, cx: &RenderContext<'_>) -> String;

    /// `<prefix><kind>` snippet per typed field.
    fn by_type(&self, cx: &RenderContext<'_>, prefix: &str) -> String;

    /// `<prefix><suffix(true)>` then `<prefix><suffix(false)>` per typed field.
    fn by_suffix(&self, cx: &RenderContext<'_>, prefix: &str) -> String;

    /// Test-harness argument descriptions, one `vts_args` snippet per field.
    fn vts_args(&self, cx: &RenderContext<'_>, label: &str) -> String;
}

impl FieldList for Fields {
    fn comma_list(&self, cx: &RenderContext<'_>, omit_names: bool) -> String {
        self.iter()
            .map(|field| {
                let special = match &field.ty {
                    Some(ty) => {
                        let subs = field_subs(field, cx);
                        let mut names: Vec<String> = Vec::with_capacity(3);
                        for name in [
                            format!("param_decl_{}", ty.suffix(true)),
                            format!("param_decl_{}", ty.suffix(false)),
                            format!("param_decl_{}", ty.kind_name()),
                        ] {
                            // A subtype-less suffix equals the kind name.
                            if !names.contains(&name) {
                                names.push(name);
                            }
                        }
                        names
                            .iter()
                            .map(|name| cx.snip(name, &subs))
                            .collect::<String>()
                    }
                    None => String::new(),
                };
                if special.is_empty() {
                    plain_decl(field, cx, omit_names)
                } else if cx.keeps_multiline_params() {
                    special
                } else {
                    make_inline(&special)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn name_list(&self, cx: &RenderContext<'_>, snippet: Option<&str>) -> String {
        self.iter()
            .map(|field| match snippet {
                Some(snippet) => {
                    let subs = Substitutions::new().with("param_name", field.name.as_str());
                    make_inline(&cx.snip(snippet, &subs))
                }
                None => field.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn semi_block(&self, cx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        for field in self {
            let special = match &field.ty {
                Some(ty) => {
                    let subs = field_subs(field, cx);
                    cx.snip(&format!("field_decl_{}", ty.suffix(true)), &subs)
                        + &cx.snip(&format!("field_decl_{}", ty.suffix(false)), &subs)
                }
                None => String::new(),
            };
            if special.is_empty() {
                out.push_str(&plain_decl(field, cx, false));
            } else {
                out.push_str(&make_inline(&special));
            }
            out.push_str(";\n");
        }
        out
    }

    fn by_type(&self, cx: &RenderContext<'_>, prefix: &str) -> String {
        typed(self)
            .map(|(field, ty)| {
                cx.snip(
                    &format!("{}{}", prefix, ty.kind_name()),
                    &field_subs(field, cx),
                )
            })
            .collect()
    }

    fn by_suffix(&self, cx: &RenderContext<'_>, prefix: &str) -> String {
        let mut out = String::new();
        for (field, ty) in typed(self) {
            let subs = field_subs(field, cx);
            out.push_str(&cx.snip(&format!("{}{}", prefix, ty.suffix(true)), &subs));
            out.push_str(&cx.snip(&format!("{}{}", prefix, ty.suffix(false)), &subs));
        }
        out
    }

    fn vts_args(&self, cx: &RenderContext<'_>, label: &str) -> String {
        typed(self)
            .map(|(field, ty)| {
                let vts_type_type = if ty.is_primitive() {
                    "primitive_type"
                } else {
                    "aggregate_type"
                };
                let subs = Substitutions::new()
                    .with("arg_or_ret_type", label)
                    .with("type_name", ty.generate(cx))
                    .with("vts_type_type", vts_type_type)
                    .with("vts_values", vts_values(field, ty, cx));
                cx.snip("vts_args", &subs)
            })
            .collect()
    }
}

fn typed(fields: &Fields) -> impl Iterator<Item = (&Field, &Type)> {
    fields
        .iter()
        .filter_map(|field| field.ty.as_ref().map(|ty| (field, ty)))
}

/// `<type> <name>[ = <value>]`, the form used when no snippet applies.
fn plain_decl(field: &Field, cx: &RenderContext<'_>, omit_name: bool) -> String {
    let mut out = String::new();
    if let Some(ty) = &field.ty {
        out.push_str(&ty.generate(cx));
        if !omit_name {
            out.push(' ');
        }
    }
    if !omit_name {
        out.push_str(&field.name);
    }
    out.push_str(&field.init_text());
    out
}

/// Sample values from the field's `normal` annotation entry.
fn vts_values(field: &Field, ty: &Type, cx: &RenderContext<'_>) -> String {
    let Some(annotation) = &field.annotation else {
        return String::new();
    };
    let mut out = String::new();
    for value in normal_values(annotation) {
        match value {
            Ok(literal) => {
                let subs = Substitutions::new()
                    .with("type_name", ty.vts_type())
                    .with("the_value", literal.text());
                out.push_str(&cx.snip("vts_values", &subs));
            }
            Err(e) => cx.report(Diagnostic::from(e)),
        }
    }
    out
}
