// Scope resolution and implicit conversion cases

use rstest::rstest;
use scopetree::semantic::{Analyzer, Severity};

#[rstest]
#[case::float_to_int("int v = 3.7;", Some("implicit conversion from 'float' to 'int'"), "3")]
#[case::char_to_float("float v = 'a';", Some("implicit conversion from 'char' to 'float'"), "97.000000")]
#[case::float_to_char("char v = 66.9;", Some("implicit conversion from 'float' to 'char'"), "B")]
#[case::int_to_float("float v = 2;", None, "2.000000")]
#[case::char_to_int("int v = 'A';", None, "65")]
#[case::same_type("char v = 'z';", None, "z")]
#[case::byte_past_ascii("char v = 200;", None, "\\xc8")]
fn test_initializer_narrowing(
    #[case] source: &str,
    #[case] warning: Option<&str>,
    #[case] stored: &str,
) {
    let analysis = Analyzer::analyze(source);

    let warnings: Vec<_> = analysis
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(warnings, warning.into_iter().collect::<Vec<_>>());
    assert_eq!(analysis.error_count(), 0);
    assert_eq!(analysis.report.find("v").map(|r| r.value.as_str()), Some(stored));
}

#[rstest]
#[case::plain("int i; void f() { i = 2.5; }", "i", "2")]
#[case::compound("int i = 3; void f() { i += 0.5; }", "i", "3")]
#[case::through_variable("float g = 65.5; char c; void f() { c = g; }", "c", "A")]
fn test_assignment_narrowing(#[case] source: &str, #[case] name: &str, #[case] stored: &str) {
    let analysis = Analyzer::analyze(source);
    assert_eq!(analysis.warning_count(), 1);
    assert_eq!(analysis.report.find(name).map(|r| r.value.as_str()), Some(stored));
}

#[rstest]
#[case::same_scope("void f() { int a; int a; }", 1)]
#[case::parameter_and_local("void f(int a) { int a; }", 1)]
#[case::parameters("void f(int a, char a) { }", 1)]
#[case::variable_then_function("int g; void g() { }", 1)]
#[case::nested_block_shadows("void f() { int a; { int a; } }", 0)]
#[case::sibling_functions("void f(int a) { } void g(int a) { }", 0)]
fn test_redefinitions(#[case] source: &str, #[case] expected: usize) {
    let analysis = Analyzer::analyze(source);
    let count = analysis.find_diagnostics("redefinition of 'a'").count()
        + analysis.find_diagnostics("redefinition of 'g'").count();
    assert_eq!(count, expected);
}

#[test]
fn test_outer_name_visible_in_nested_blocks() {
    let source = r#"
        int depth = 1;
        void f() {
            {
                {
                    depth = depth + 1;
                }
            }
        }
    "#;
    let analysis = Analyzer::analyze(source);
    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.report.find("depth").map(|r| r.value.as_str()), Some("2"));
}

#[test]
fn test_closed_block_symbol_is_gone() {
    let analysis = Analyzer::analyze("void f() {\n  { int t = 1; }\n  t = 2;\n}\n");

    let errors: Vec<_> = analysis.diagnostics.iter().filter(|d| d.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 3);
    assert_eq!(errors[0].message, "use of undeclared identifier 't'");
}

#[test]
fn test_parameters_are_reported_one_scope_in() {
    let analysis = Analyzer::analyze("int add(int a, float b) { return a + b; }");
    assert!(analysis.diagnostics.is_empty());

    let rows: Vec<_> = analysis
        .report
        .rows()
        .iter()
        .map(|r| (r.symbol, r.name.as_str(), r.ty, r.scope))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("function", "add", "int", 0),
            ("param", "a", "int", 1),
            ("param", "b", "float", 1),
        ]
    );
    assert_eq!(
        analysis.preorder().as_deref(),
        Some("( add ( return ( + a b ) ) )")
    );
}

#[test]
fn test_first_type_wins_after_redefinition() {
    let analysis = Analyzer::analyze("int a = 1;\nfloat a = 2.5;\n");
    assert_eq!(analysis.error_count(), 1);

    let row = analysis.report.find("a").unwrap();
    assert_eq!(row.ty, "int");
    assert_eq!(row.value, "1");
}

#[test]
fn test_modulo_operands() {
    let ok = Analyzer::analyze("int r = 7 % 3;");
    assert_eq!(ok.report.find("r").map(|r| r.value.as_str()), Some("1"));

    let bad = Analyzer::analyze("float r = 7.0 % 2.0;");
    assert_eq!(
        bad.diagnostics[0].message,
        "invalid operands to binary expression ('float' and 'float')"
    );
    assert_eq!(bad.preorder().as_deref(), Some("( = r 7.000000 )"));
}
