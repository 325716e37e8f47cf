//! Test suite for the c2js translator
//!
//! Whole-translation tests covering:
//! - Entry point and generic function signatures
//! - Declarations with and without initializer
//! - printf rewriting
//! - Brace depth and indentation
//! - Entry point invocation

use crate::{compile_c_to_js, compile_with_options, Options};

#[test]
fn test_hello_translation() {
    let input = r#"#include <stdio.h>

int main() {
    int a = 10;
    int b = 20;
    printf("Sum of %d and %d is %d\n", a, b, a + b);
    return 0;
}
"#;
    let expected = "function main() {
    let a = 10;
    let b = 20;
    console.log(`Sum of ${a} and ${b} is ${a + b}`);
    return 0;
}

main();
";
    assert_eq!(compile_c_to_js(input), expected);
}

#[test]
fn test_function_with_separate_brace() {
    let input = "int add(int a, int b)\n{\n    return a + b;\n}\n";
    let output = compile_c_to_js(input);
    assert!(output.starts_with("function add(a, b)\n{\n    return a + b;\n}\n"));
}

#[test]
fn test_function_with_inline_brace() {
    // Only a bare `{` line opens a block after a generic signature.
    let input = "int square(int x) {\n    return x * x;\n}\n";
    let output = compile_c_to_js(input);
    assert!(output.starts_with("function square(x) {\nreturn x * x;\n}\n"));
}

#[test]
fn test_entry_with_void_and_separate_brace() {
    // The entry point opens its block itself, so the brace line goes one deeper.
    let input = "int main(void)\n{\n    return 0;\n}\n";
    let output = compile_c_to_js(input);
    assert!(output.starts_with("function main() {\n    {\n        return 0;\n    }\n"));
}

#[test]
fn test_declaration_without_init() {
    let output = compile_c_to_js("int main() {\n    double total;\n    total = 1.5;\n}");
    assert!(output.contains("    let total;\n"));
    assert!(output.contains("    total = 1.5;\n"));
}

#[test]
fn test_unrecognized_types_pass_through() {
    let output = compile_c_to_js("long big = 1;\nunsigned u;");
    assert!(output.contains("long big = 1;\n"));
    assert!(output.contains("unsigned u;\n"));
}

#[test]
fn test_control_flow_lines_pass_through() {
    let input = "int main() {
    int n = 3;
    if (n > 0) {
        printf(\"positive\\n\");
    } else {
        printf(\"other\\n\");
    }
    return 0;
}";
    let output = compile_c_to_js(input);
    assert!(output.contains("    if (n > 0) {\n"));
    assert!(output.contains("} else {\n"));
    assert!(output.contains("console.log(`positive`);"));
    assert!(output.contains("console.log(`other`);"));
}

#[test]
fn test_counting_loop_header() {
    let input = "int main() {\n    for (int i = 0; i < 5; i++) {\n        printf(\"i = %d\\n\", i);\n    }\n}";
    let output = compile_c_to_js(input);
    assert!(output.contains("    for (let i = 0; i < 5; i++) {\n"));
    assert!(output.contains("    console.log(`i = ${i}`);\n"));
}

#[test]
fn test_comments_preserved() {
    let input = "// leading comment\nint main() {\n    /* block */\n    return 0;\n}";
    let output = compile_c_to_js(input);
    assert!(output.starts_with("// leading comment\nfunction main() {\n    /* block */\n"));
}

#[test]
fn test_includes_and_blank_lines_dropped() {
    let output = compile_c_to_js("#include <stdio.h>\n#include \"local.h\"\n\n\nint main() {\n}\n");
    assert_eq!(output, "function main() {\n}\n\nmain();\n");
}

#[test]
fn test_existing_invocation_not_duplicated() {
    let output = compile_c_to_js("int main() {\n}\nmain();\n");
    assert_eq!(output.matches("main();").count(), 1);
    assert!(output.ends_with("}\nmain();\n"));
}

#[test]
fn test_invocation_added_without_entry_point() {
    let output = compile_c_to_js("int x = 1;");
    assert_eq!(output, "let x = 1;\n\nmain();\n");
}

#[test]
fn test_empty_input() {
    assert_eq!(compile_c_to_js(""), "\nmain();\n");
}

#[test]
fn test_unbalanced_close_never_negative() {
    let output = compile_c_to_js("}\n}\nint a = 1;");
    assert_eq!(output, "}\n}\nlet a = 1;\n\nmain();\n");
}

#[test]
fn test_nested_blocks_indentation() {
    let input = "int main() {\n{\n{\nint deep = 1;\n}\n}\n}";
    let expected = "function main() {
    {
        {
            let deep = 1;
        }
    }
}

main();
";
    assert_eq!(compile_c_to_js(input), expected);
}

#[test]
fn test_indent_width_option() {
    let output = compile_with_options("int main() {\nint a = 1;\n}", &Options { indent_width: 2 });
    assert!(output.contains("\n  let a = 1;\n"));
}

#[test]
fn test_crlf_input() {
    let output = compile_c_to_js("int main() {\r\n    int a = 1;\r\n}\r\n");
    assert_eq!(output, "function main() {\n    let a = 1;\n}\n\nmain();\n");
}

#[test]
fn test_deterministic() {
    let input = "int main() {\n    printf(\"%d\\n\", 1);\n}";
    assert_eq!(compile_c_to_js(input), compile_c_to_js(input));
}

#[test]
fn test_output_line_count_bound() {
    let input = "int main() {\nint a = 1;\nint b;\nprintf(\"%d\\n\", a);\n}";
    let output = compile_c_to_js(input);
    let input_lines = input.lines().count();
    // One extra line for the invocation plus its blank separator.
    assert!(output.lines().count() <= input_lines + 2);
}
