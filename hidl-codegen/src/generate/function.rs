use hidlgen_ast::Function;

use super::FieldList;
use crate::annotations::{CallFlow, CallFlowFacts, parse_call_flow};
use crate::naming::{make_inline, to_dispatch_token};
use crate::{Diagnostic, RenderContext, Substitutions};

/// Join a parameter list with the callback parameter.
///
/// Returns `params, callback` when both are non-empty, otherwise whichever
/// one is non-empty.
pub fn join_params(params: &str, callback: &str) -> String {
    match (params.is_empty(), callback.is_empty()) {
        (false, false) => format!("{}, {}", params, callback),
        _ => format!("{}{}", params, callback),
    }
}

/// `params_and_callback` of one method. Reports nothing.
pub fn params_and_callback(function: &Function, cx: &RenderContext<'_>) -> String {
    join_params(
        &function.params.comma_list(cx, false),
        &callback_param(function, cx),
    )
}

fn callback_param(function: &Function, cx: &RenderContext<'_>) -> String {
    if !function.has_callback() {
        return String::new();
    }
    let subs = Substitutions::new()
        .with("function_name", function.name.as_str())
        .with("package_name", cx.package());
    make_inline(&cx.snip("callback_param", &subs))
}

/// Every fact of one interface method.
///
/// Call-graph annotation problems are reported through the context, so call
/// this once per function per pass.
pub fn function_subs(function: &Function, cx: &RenderContext<'_>) -> Substitutions {
    let call_param_list = function.params.comma_list(cx, false);
    let params_and_callback = join_params(&call_param_list, &callback_param(function, cx));

    let callback_invocation = if function.has_callback() {
        let subs = Substitutions::new().with(
            "return_param_names",
            function.generates.name_list(cx, None),
        );
        cx.snip("callback_invocation", &subs)
    } else {
        String::new()
    };

    let vts_args = function.generates.vts_args(cx, "return_type_hidl")
        + &function.params.vts_args(cx, "arg");

    let call_flow = parse_call_flow(&function.annotations);
    for error in &call_flow.errors {
        cx.report(Diagnostic::from(error.clone()));
    }

    Substitutions::new()
        .with("function_name", function.name.as_str())
        .with("package_name", cx.interface())
        .with("params_and_callback", params_and_callback)
        .with("call_param_list", call_param_list)
        .with("return_param_list", function.generates.comma_list(cx, false))
        .with("function_params_stubs", function.params.name_list(cx, None))
        .with(
            "return_params_stubs",
            function.generates.name_list(cx, Some("return_param_decl")),
        )
        .with(
            "param_write_ret_snips",
            function.generates.by_suffix(cx, "param_write_"),
        )
        .with(
            "param_read_ret_snips",
            function.generates.by_suffix(cx, "param_read_"),
        )
        .with("param_write_snips", function.params.by_suffix(cx, "param_write_"))
        .with("param_read_snips", function.params.by_suffix(cx, "param_read_"))
        .with("func_name_as_enum", to_dispatch_token(&function.name))
        .with("param_decls", function.params.semi_block(cx))
        .with("callback_invocation", callback_invocation)
        .with("generates_variables", function.generates.semi_block(cx))
        .with("vts_args", vts_args)
        .with("vts_callflow", render_call_flow(cx, &call_flow))
}

/// Render parsed call-graph facts.
///
/// Markers become `anno_entry` / `anno_exit`, every edge becomes one
/// `anno_calls`. The combined `vts_callflow` snippet is resolved only when
/// at least one part is non-empty. Errors in `facts` are not reported here.
pub fn render_call_flow(cx: &RenderContext<'_>, facts: &CallFlowFacts) -> String {
    let mut entry = String::new();
    let mut exit = String::new();
    let mut calls = String::new();

    for fact in &facts.facts {
        match fact {
            CallFlow::Entry => entry = cx.snip_plain("anno_entry"),
            CallFlow::Exit => exit = cx.snip_plain("anno_exit"),
            CallFlow::CallsNext(target) => calls.push_str(&edge(cx, "next", target)),
            CallFlow::CallsPrev(target) => calls.push_str(&edge(cx, "prev", target)),
        }
    }

    if entry.is_empty() && exit.is_empty() && calls.is_empty() {
        return String::new();
    }
    let subs = Substitutions::new()
        .with("anno_entry", entry)
        .with("anno_exit", exit)
        .with("anno_calls", calls);
    cx.snip("vts_callflow", &subs)
}

fn edge(cx: &RenderContext<'_>, label: &str, target: &str) -> String {
    let subs = Substitutions::new()
        .with("callflow_label", label)
        .with("callflow_func_name", target);
    cx.snip("anno_calls", &subs)
}

#[cfg(test)]
mod tests {
    use hidlgen_ast::{Annotation, Annotations, Field, Fields, Literal, Scalar, Type};
    use hidlgen_snippets::SnippetTable;

    use super::*;
    use crate::{DiagnosticKind, Diagnostics};

    fn table() -> SnippetTable {
        SnippetTable::new()
            .with("header", "callback_param", "function_name_cb\n_hidl_cb")
            .with("header", "callback_invocation", "_hidl_cb(return_param_names);")
            .with("header", "return_param_decl", "auto param_name")
            .with("vts", "anno_entry", "entry: true\n")
            .with("vts", "anno_exit", "exit: true\n")
            .with("vts", "anno_calls", "callflow_label: callflow_func_name\n")
            .with("vts", "vts_callflow", "callflow {\nanno_entryanno_exitanno_calls}\n")
    }

    #[test]
    fn test_join_params() {
        assert_eq!(join_params("int32_t a", "cb _hidl_cb"), "int32_t a, cb _hidl_cb");
        assert_eq!(join_params("int32_t a", ""), "int32_t a");
        assert_eq!(join_params("", "cb _hidl_cb"), "cb _hidl_cb");
        assert_eq!(join_params("", ""), "");
    }

    #[test]
    fn test_function_facts() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics)
            .with_package("android.hardware.light")
            .with_interface("ILight");

        let function = Function::new("setLight")
            .with_params(Fields::from(vec![
                Field::new("id", Scalar::Int32),
                Field::new("state", Type::String),
            ]))
            .with_generates(Fields::from(vec![
                Field::new("status", Scalar::UInt8),
                Field::new("brightness", Scalar::Float),
            ]));
        let subs = function_subs(&function, &cx);

        assert_eq!(subs.get("package_name"), Some("ILight"));
        assert_eq!(subs.get("call_param_list"), Some("int32_t id, hidl_string state"));
        assert_eq!(
            subs.get("params_and_callback"),
            Some("int32_t id, hidl_string state, setLight_cb _hidl_cb")
        );
        assert_eq!(subs.get("return_param_list"), Some("uint8_t status, float brightness"));
        assert_eq!(subs.get("function_params_stubs"), Some("id, state"));
        assert_eq!(
            subs.get("return_params_stubs"),
            Some("auto status, auto brightness")
        );
        assert_eq!(
            subs.get("callback_invocation"),
            Some("_hidl_cb(status, brightness);")
        );
        assert_eq!(subs.get("func_name_as_enum"), Some("SETLIGHT"));
        assert_eq!(subs.get("param_decls"), Some("int32_t id;\nhidl_string state;\n"));
        assert_eq!(
            subs.get("generates_variables"),
            Some("uint8_t status;\nfloat brightness;\n")
        );
        assert_eq!(subs.get("vts_callflow"), Some(""));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_no_generates_no_callback() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "header", &diagnostics);

        let function =
            Function::new("reset").with_params(Fields::from(vec![Field::new("hard", Scalar::Bool)]));
        let subs = function_subs(&function, &cx);
        assert_eq!(subs.get("params_and_callback"), Some("bool hard"));
        assert_eq!(subs.get("callback_invocation"), Some(""));

        let bare = function_subs(&Function::new("ping"), &cx);
        assert_eq!(bare.get("params_and_callback"), Some(""));

        let only_callback = Function::new("getId")
            .with_generates(Fields::from(vec![Field::new("id", Scalar::UInt64)]));
        let subs = function_subs(&only_callback, &cx);
        assert_eq!(subs.get("params_and_callback"), Some("getId_cb _hidl_cb"));
    }

    #[test]
    fn test_call_flow_entry_only() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "vts", &diagnostics);

        let facts = parse_call_flow(&Annotations::from(vec![Annotation::new("entry")]));
        assert_eq!(render_call_flow(&cx, &facts), "callflow {\nentry: true\n}\n");
    }

    #[test]
    fn test_call_flow_edges_next_before_prev() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "vts", &diagnostics);

        let annotations = Annotations::from(vec![
            Annotation::new("prev_calls").value(Literal::string("open")),
            Annotation::new("next_calls")
                .value(Literal::string("read"))
                .value(Literal::string("close")),
            Annotation::new("exit"),
        ]);
        let facts = parse_call_flow(&annotations);
        assert_eq!(
            render_call_flow(&cx, &facts),
            "callflow {\nexit: true\n\
             next: \"read\"\nnext: \"close\"\nprev: \"open\"\n}\n"
        );
    }

    #[test]
    fn test_call_flow_nothing_renders_nothing() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "vts", &diagnostics);

        assert_eq!(render_call_flow(&cx, &CallFlowFacts::default()), "");
    }

    #[test]
    fn test_empty_call_edge_reported_once() {
        let table = table();
        let diagnostics = Diagnostics::new();
        let cx = RenderContext::new(&table, "vts", &diagnostics);

        let function = Function::new("close").with_annotations(Annotations::from(vec![
            Annotation::new("next_calls").at_line(21),
        ]));
        let subs = function_subs(&function, &cx);
        assert_eq!(subs.get("vts_callflow"), Some(""));

        let reported = diagnostics.take();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].kind, DiagnosticKind::MalformedAnnotation);
        assert_eq!(reported[0].line, Some(21));
    }
}
