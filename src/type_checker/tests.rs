use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    parser::parser::parse,
    source::source::SourceUnit,
};

use super::{
    type_checker::TypeChecker,
    types::{BasicType, FunctionType, Type},
};

fn parse_ok(text: &str) -> Program {
    let mut source = SourceUnit::new(text, "test.mc");
    parse(&mut source).unwrap()
}

fn check(text: &str) -> Result<(), Error> {
    TypeChecker::new().check(&parse_ok(text))
}

fn check_err(text: &str) -> Error {
    check(text).unwrap_err()
}

#[test]
fn test_empty_program() {
    assert!(check("").is_ok());
}

#[test]
fn test_declaration_without_initializer() {
    assert!(check("int x;").is_ok());
}

#[test]
fn test_matching_initializer() {
    assert!(check("bool b = true;").is_ok());
    assert!(check("double d = 1.5;").is_ok());
    assert!(check("string s = \"text\";").is_ok());
}

#[test]
fn test_mismatched_initializer() {
    let error = check_err("double b = true;");

    assert_eq!(error.get_message(), "type missmatch 'double' vs 'bool'");
    assert_eq!(error.to_string(), "test.mc: 1,12: type missmatch 'double' vs 'bool'");
}

#[test]
fn test_self_reference_in_initializer() {
    let error = check_err("int i = i;");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "i".to_string()
        }
    );
    assert_eq!(error.get_message(), "undeclared variable in assignment 'i'");
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_void_variable() {
    let error = check_err("void v;");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VoidVariable {
            variable: "v".to_string()
        }
    );
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_unknown_type_keyword() {
    let error = check_err("while w;");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnknownType {
            type_: "while".to_string()
        }
    );
}

#[test]
fn test_global_redefinition() {
    let error = check_err("int a;\nbool a;");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::IdentifierRedefined {
            identifier: "a".to_string()
        }
    );
    assert_eq!(error.get_position().row, 2);
    assert_eq!(error.get_position().column, 6);
}

#[test]
fn test_function_without_return() {
    let error = check_err("void main() {}");

    assert_eq!(
        error.get_message(),
        "function block must end with a return statement"
    );
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_function_with_return() {
    assert!(check("void main() { return; }").is_ok());
}

#[test]
fn test_return_must_be_last() {
    let error = check_err("int f() { return 1; int a; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::MissingReturn { .. }
    ));
}

#[test]
fn test_return_inside_if_does_not_count() {
    let error = check_err("int f() { if true { return 1; }; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::MissingReturn { .. }
    ));
}

#[test]
fn test_return_type_mismatch() {
    let error = check_err("int f() { return true; }");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'bool'");

    let error = check_err("int f() { return; }");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'void'");

    let error = check_err("void f() { return 1; }");
    assert_eq!(error.get_message(), "type missmatch 'void' vs 'int'");
}

#[test]
fn test_parameters_are_in_scope() {
    assert!(check("int add(int a, int b) { return a + b; }").is_ok());
}

#[test]
fn test_duplicate_parameter() {
    let error = check_err("int f(int a, bool a) { return 1; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::IdentifierRedefined { .. }
    ));
}

#[test]
fn test_parameter_clashes_with_body_variable() {
    let error = check_err("int f(int a) { int a = 1; return a; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::IdentifierRedefined { .. }
    ));
}

#[test]
fn test_locals_may_shadow_globals() {
    assert!(check("bool a;\nint f() { int a = 1; return a; }").is_ok());
}

#[test]
fn test_void_parameter() {
    let error = check_err("int f(void a) { return 1; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::VoidVariable { .. }
    ));
}

#[test]
fn test_assignment() {
    assert!(check("int a;\nvoid f() { a = 2; return; }").is_ok());

    let error = check_err("int a;\nvoid f() { a = \"s\"; return; }");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'string'");
    assert_eq!(error.get_position().column, 16);
}

#[test]
fn test_assignment_to_undeclared() {
    let error = check_err("void f() { b = 2; return; }");
    assert_eq!(error.get_message(), "undeclared variable in assignment 'b'");
}

#[test]
fn test_conditions_must_be_bool() {
    assert!(check("void f() { if 1 < 2 { return; }; while false { return; }; return; }").is_ok());

    let error = check_err("void f() { if 1 { return; }; return; }");
    assert_eq!(error.get_message(), "type missmatch 'bool' vs 'int'");

    let error = check_err("void f() { while \"yes\" { return; }; return; }");
    assert_eq!(error.get_message(), "type missmatch 'bool' vs 'string'");
}

#[test]
fn test_block_bodies_open_their_own_scope() {
    let error = check_err("void f() { if true { int a = 1; }; a = 2; return; }");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "a".to_string()
        }
    );

    assert!(check(
        "void f() { if true { int a = 1; } else { int a = 2; }; while false { int a = 3; }; return; }"
    )
    .is_ok());
}

#[test]
fn test_block_bodies_see_enclosing_scope() {
    assert!(check("void f(int n) { while n > 0 { n = n - 1; }; return; }").is_ok());
}

#[test]
fn test_boolean_addition() {
    let error = check_err("bool b = true + false;");

    assert_eq!(
        error.get_message(),
        "arithmetic operators not compatible with boolean operands"
    );
}

#[test]
fn test_string_concatenation() {
    assert!(check("string s = \"a\" + \"b\";").is_ok());
}

#[test]
fn test_string_arithmetic() {
    let error = check_err("string s = \"a\" - \"b\";");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::IncompatibleOperands {
            operator: "-".to_string(),
            type_: "string".to_string()
        }
    );
}

#[test]
fn test_boolean_arithmetic() {
    let error = check_err("bool b = true * false;");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::IncompatibleOperands { .. }
    ));
}

#[test]
fn test_operands_must_match() {
    let error = check_err("int a = 1 + 2.0;");

    assert_eq!(error.get_message(), "type missmatch 'int' vs 'double'");
    assert_eq!(error.get_position().column, 13);
}

#[test]
fn test_comparisons_yield_bool() {
    assert!(check("bool b = 1 < 2;").is_ok());
    assert!(check("bool b = 1.0 == 2.0;").is_ok());
    assert!(check("bool b = true && false;").is_ok());

    let error = check_err("int a = 1 > 2;");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'bool'");
}

#[test]
fn test_flat_precedence_is_typed_as_parsed() {
    // Parsed as 1 < (2 && true), so the operands differ
    let error = check_err("bool b = 1 < 2 && true;");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'bool'");

    assert!(check("bool b = (1 < 2) && true;").is_ok());
}

#[test]
fn test_unary_operators() {
    assert!(check("int a = -1;").is_ok());
    assert!(check("double d = -1.5;").is_ok());
    assert!(check("bool b = !false;").is_ok());

    let error = check_err("bool b = !1;");
    assert_eq!(error.get_message(), "type missmatch 'bool' vs 'int'");
}

#[test]
fn test_parenthesized() {
    assert!(check("int i = (2);").is_ok());
}

#[test]
fn test_calls() {
    assert!(check("int add(int a, int b) { return a + b; }\nint c = add(1, 2);").is_ok());
    assert!(check("int add(int a, int b) { return a + b; }\nvoid main() { add(1, 2); return; }").is_ok());
}

#[test]
fn test_call_argument_count() {
    let error = check_err("int add(int a, int b) { return a + b; }\nint c = add(1);");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ArgumentCount {
            function: "add".to_string(),
            expected: 2,
            received: 1
        }
    );
    assert_eq!(error.get_position().row, 2);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_call_argument_type() {
    let error = check_err("int add(int a, int b) { return a + b; }\nint c = add(1, true);");

    assert_eq!(error.get_message(), "type missmatch 'int' vs 'bool'");
    assert_eq!(error.get_position().column, 16);
}

#[test]
fn test_call_result_type() {
    let error = check_err("void f() { return; }\nint a = f();");
    assert_eq!(error.get_message(), "type missmatch 'int' vs 'void'");
}

#[test]
fn test_unknown_function() {
    let error = check_err("int a = missing();");
    assert_eq!(error.get_message(), "function 'missing' not found");
}

#[test]
fn test_calling_a_variable() {
    let error = check_err("int a;\nint b = a();");
    assert_eq!(error.get_message(), "'a' is not function");
}

#[test]
fn test_function_used_as_value() {
    let error = check_err("int f() { return 1; }\nint a = f;");

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::FunctionAsValue {
            function: "f".to_string()
        }
    );
}

#[test]
fn test_recursion() {
    assert!(check("int fact(int n) { if n < 2 { return 1; }; return n * fact(n - 1); }").is_ok());
}

#[test]
fn test_functions_are_visible_only_after_declaration() {
    let error = check_err("void main() { helper(); return; }\nvoid helper() { return; }");
    assert_eq!(error.get_message(), "function 'helper' not found");
}

#[test]
fn test_builtin_print() {
    assert!(check("void main() { print(\"hello\"); return; }").is_ok());

    let error = check_err("void main() { print(1); return; }");
    assert_eq!(error.get_message(), "type missmatch 'string' vs 'int'");
}

#[test]
fn test_builtin_accepts_extra_arguments() {
    assert!(check("void main() { print(\"a\", 1, true); return; }").is_ok());
}

#[test]
fn test_builtin_requires_declared_arguments() {
    let error = check_err("void main() { print(); return; }");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ArgumentCount {
            function: "print".to_string(),
            expected: 1,
            received: 0
        }
    );
    assert_eq!(error.get_message(), "'print' expected 1 arguments, got 0");
}

#[test]
fn test_builtins_cannot_be_redeclared_globally() {
    let error = check_err("void print(string s) { return; }");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::IdentifierRedefined { .. }
    ));
}

#[test]
fn test_fresh_checker_gives_same_result() {
    let program = parse_ok("int a = 1;\nint f(int x) { return x + a; }");

    assert!(TypeChecker::new().check(&program).is_ok());
    assert!(TypeChecker::new().check(&program).is_ok());
}

#[test]
fn test_rechecking_with_same_checker_fails() {
    let program = parse_ok("int a = 1;");
    let mut type_checker = TypeChecker::new();

    assert!(type_checker.check(&program).is_ok());
    let error = type_checker.check(&program).unwrap_err();
    assert_eq!(error.get_message(), "identifier redefined 'a'");
}

#[test]
fn test_environments_are_closed_after_errors() {
    let mut type_checker = TypeChecker::new();
    let failing = parse_ok("void f() { if true { x = 1; }; return; }");

    assert!(type_checker.check(&failing).is_err());
    assert_eq!(type_checker.depth(), 1);
}

#[test]
fn test_fetch_type_walks_outward() {
    let mut type_checker = TypeChecker::new();

    assert_eq!(
        type_checker.fetch_type("print"),
        Some(&Type::Function(FunctionType::built_in(
            BasicType::Void,
            vec![BasicType::String]
        )))
    );

    type_checker
        .with_environment(|type_checker| {
            assert!(type_checker.fetch_type("print").is_some());
            assert_eq!(type_checker.depth(), 2);
            Ok(())
        })
        .unwrap();
    assert_eq!(type_checker.depth(), 1);
}

#[test]
fn test_type_display() {
    assert_eq!(BasicType::Double.to_string(), "double");
    assert_eq!(
        Type::Function(FunctionType::new(
            BasicType::Int,
            vec![BasicType::Int, BasicType::Bool]
        ))
        .to_string(),
        "int(int, bool)"
    );
}

#[test]
fn test_long_operator_chain() {
    let operands = vec!["1"; 10_000].join("+");
    assert!(check(&format!("int a = {};", operands)).is_ok());

    let mixed = format!("int a = {}+true;", operands);
    assert_eq!(check_err(&mixed).get_message(), "type missmatch 'int' vs 'bool'");
}

#[test]
fn test_long_chain_reports_leftmost_operand_error_first() {
    let operands = vec!["1"; 5_000].join("+");
    let text = format!("int a = 1+x+{}+y;", operands);
    assert_eq!(
        check_err(&text).get_message(),
        "undeclared variable in assignment 'x'"
    );
}
