//! End-to-end tests for the lispel interpreter
//!
//! Each test pushes source text through the whole pipeline — scanner,
//! parser, tree reader, evaluator — and checks either the structural result
//! or its rendered form.

use lispel::{Environment, Evaluator, Parser, Scanner, Value};

/// Run source text through the full pipeline against a fresh environment
fn eval_source(source: &str) -> Value {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens().expect("scan failed");
    let mut parser = Parser::new(tokens);
    let tree = parser.parse().expect("parse failed");
    let mut evaluator = Evaluator::new();
    evaluator.run(&tree)
}

/// Like `eval_source`, but returns the rendered single-line output
fn render(source: &str) -> String {
    eval_source(source).to_string()
}

// ============================================================================
// SECTION 1: ARITHMETIC
// ============================================================================

#[test]
fn test_addition_folds() {
    assert_eq!(render("(+ 1 2 3)"), "6");
}

#[test]
fn test_unary_negation() {
    assert_eq!(render("(- 5)"), "-5");
}

#[test]
fn test_subtraction_chain() {
    assert_eq!(render("(- 5 2 1)"), "2");
}

#[test]
fn test_nested_arithmetic() {
    assert_eq!(render("(+ 1 (* 2 3) (- 10 5))"), "12");
    assert_eq!(render("(* (+ 1 2) (+ 3 4))"), "21");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(render("(/ 10 0)"), "Error: Division by zero!");
}

#[test]
fn test_non_number_operand() {
    assert_eq!(render("(+ 1 {2})"), "Error: Cannot operate on non-number");
}

// ============================================================================
// SECTION 2: LIST PRIMITIVES
// ============================================================================

#[test]
fn test_list_builds_qexpr() {
    assert_eq!(render("(list 1 2 3)"), "{1 2 3}");
}

#[test]
fn test_list_evaluates_its_arguments_first() {
    assert_eq!(render("(list (+ 1 1) (+ 2 2))"), "{2 4}");
}

#[test]
fn test_head() {
    assert_eq!(render("(head {1 2 3})"), "{1}");
}

#[test]
fn test_head_of_empty() {
    assert_eq!(render("(head {})"), "Error: Function 'head' passed {}!");
}

#[test]
fn test_head_arity_and_type_errors() {
    assert_eq!(
        render("(head {1} {2})"),
        "Error: Function 'head' passed too many arguments!"
    );
    assert_eq!(render("(head 1)"), "Error: Function 'head' passed incorrect type!");
}

#[test]
fn test_tail() {
    assert_eq!(render("(tail {1 2 3})"), "{2 3}");
    assert_eq!(render("(tail {1})"), "{}");
}

#[test]
fn test_eval_of_quoted_code() {
    assert_eq!(render("(eval {+ 1 2})"), "3");
}

#[test]
fn test_eval_composes_with_list_ops() {
    assert_eq!(render("(eval (head {+ - * /}))"), "<function +>");
    assert_eq!(render("((eval (head {+ - * /})) 10 20)"), "30");
}

#[test]
fn test_join() {
    assert_eq!(render("(join {1 2} {3 4})"), "{1 2 3 4}");
    assert_eq!(render("(join {1} {} {2 3})"), "{1 2 3}");
}

#[test]
fn test_join_type_error() {
    assert_eq!(render("(join {1} 2)"), "Error: Function 'join' passed incorrect type!");
}

// ============================================================================
// SECTION 3: EVALUATION RULES
// ============================================================================

#[test]
fn test_bare_number_self_evaluates() {
    assert_eq!(eval_source("42"), Value::Num(42));
}

#[test]
fn test_qexpr_contents_stay_literal() {
    assert_eq!(render("{+ 1 2}"), "{+ 1 2}");
    assert_eq!(render("{head (list 1 2)}"), "{head (list 1 2)}");
}

#[test]
fn test_empty_sexpr_is_a_value() {
    assert_eq!(render("()"), "()");
}

#[test]
fn test_singleton_collapses() {
    assert_eq!(render("(5)"), "5");
}

#[test]
fn test_symbol_resolves_to_function_value() {
    assert_eq!(render("+"), "<function +>");
}

#[test]
fn test_non_function_application() {
    assert_eq!(render("(1 2 3)"), "Error: First element is not a function!");
}

#[test]
fn test_unbound_symbol() {
    assert_eq!(render("ghost"), "Error: Unbound Symbol!");
}

#[test]
fn test_out_of_range_literal() {
    assert_eq!(render("99999999999999999999999"), "Error: Invalid Number");
}

// ============================================================================
// SECTION 4: ERROR PROPAGATION
// ============================================================================

#[test]
fn test_first_error_wins_over_later_errors() {
    // Both the second and third argument error; the leftmost one is reported
    // even though the later children were still (eagerly) evaluated.
    assert_eq!(render("(list 1 (/ 1 0) (head {}))"), "Error: Division by zero!");
}

#[test]
fn test_error_propagates_through_nesting() {
    assert_eq!(render("(+ 1 (* 2 (/ 3 0)))"), "Error: Division by zero!");
}

#[test]
fn test_arguments_evaluate_before_arity_check() {
    // The inner unbound symbol errors during child evaluation, so the error
    // scan fires before head ever sees its arguments.
    assert_eq!(render("(head ghost)"), "Error: Unbound Symbol!");
}

// ============================================================================
// SECTION 5: PROPERTIES
// ============================================================================

#[test]
fn test_determinism() {
    let first = eval_source("(join (list 1 2) (tail {3 4 5}))");
    let second = eval_source("(join (list 1 2) (tail {3 4 5}))");
    assert_eq!(first, second);
}

#[test]
fn test_environment_isolation() {
    let mut env = Environment::new();
    let mut original = Value::Qexpr(vec![Value::Num(1)]);
    env.put("xs", &original);

    if let Value::Qexpr(cells) = &mut original {
        cells.push(Value::Num(2));
    }

    // The stored binding is a deep copy; so is what get returns
    assert_eq!(env.get("xs"), Value::Qexpr(vec![Value::Num(1)]));
}

#[test]
fn test_render_reread_round_trip() {
    let rendered = render("(list 1 -2 {3 {4}} 5)");
    assert_eq!(rendered, "{1 -2 {3 {4}} 5}");

    // Re-reading the rendered text reproduces the same value tree
    let reread = eval_source(&rendered);
    assert_eq!(reread, eval_source("(list 1 -2 {3 {4}} 5)"));
}
