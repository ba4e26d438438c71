#[cfg(test)]
mod tests {
    use esm_complete::parsing::JavaScriptParser;
    use esm_complete::parsing::extract_exports;

    fn exports_of(code: &str) -> Vec<(String, String, String)> {
        let mut parser = JavaScriptParser::new().expect("Failed to create parser");
        let module = parser.parse(code).expect("Failed to parse");
        extract_exports(&module, "widgets.js")
            .into_iter()
            .map(|(name, entry)| {
                (
                    name,
                    entry.label().to_string(),
                    entry.insert_text().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_realistic_module() {
        let code = r#"
import { helper } from './helper.js';

const DEFAULT_SIZE = 12;
let counter = 0;

/** Builds a widget. */
export async function createWidget(name, { size } = {}, ...children) {
    function inner() {}
    return { name, size, children };
}

export function* ids(start) {
    while (true) yield start++;
}

export const destroyWidget = async (widget) => {};
export let version = "1.0";

const render = function (widget, target /* optional */) {};

export default function ignored(a) {}
export { render, DEFAULT_SIZE as size, counter };
export { helper as reexported } from './helper.js';
export * from './all.js';
"#;

        let exports = exports_of(code);
        let names: Vec<&str> = exports.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "createWidget",
                "ids",
                "destroyWidget",
                "version",
                "render",
                "size",
                "counter"
            ]
        );

        assert_eq!(exports[0].1, "createWidget(name)\twidgets.js");
        assert_eq!(exports[0].2, "createWidget(${1:name})");
        assert_eq!(exports[1].2, "ids(${1:start})");
        assert_eq!(exports[2].1, "destroyWidget(widget)\twidgets.js");
        assert_eq!(exports[3].1, "version\twidgets.js");
        assert_eq!(exports[3].2, "version");
        assert_eq!(exports[4].1, "render(widget, target)\twidgets.js");
        assert_eq!(exports[5].1, "size\twidgets.js");
        assert_eq!(exports[6].2, "counter");
    }

    #[test]
    fn test_nested_declarations_are_not_exported() {
        let code = r#"
export function outer() {
    const hidden = () => {};
    return hidden;
}
"#;
        let exports = exports_of(code);
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].0, "outer");
    }

    #[test]
    fn test_syntax_error_is_rejected() {
        let mut parser = JavaScriptParser::new().expect("Failed to create parser");
        let err = parser
            .parse("export function broken( {")
            .expect_err("Broken module should not parse");
        assert!(err.to_string().to_lowercase().contains("syntax"));
    }
}
