use mmm::interpret;
use mmm::interpreter::lexer::Lexer;
use mmm::interpreter::parser::Parser;
use mmm::interpreter::value::core::Value;
use mmm::interpreter::value::env::Env;

fn run(src: &str) -> Option<Value> {
    interpret(src, &Env::new())
        .unwrap_or_else(|errors| panic!("Script failed to parse: {src:?}\nErrors: {errors:?}"))
}

fn assert_inspect(src: &str, want: &str) {
    match run(src) {
        Some(value) => assert_eq!(value.inspect(), want, "in script {src:?}"),
        None => panic!("Script produced no value: {src:?}"),
    }
}

fn assert_no_value(src: &str) {
    if let Some(value) = run(src) {
        panic!("Script produced {value:?} but was expected to produce nothing: {src:?}");
    }
}

fn canonical(src: &str) -> String {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "Script failed to parse: {src:?}\nErrors: {:?}",
        parser.errors(),
    );
    program.to_string()
}

#[test]
fn bindings_and_arithmetic() {
    assert_inspect("let a=5; let b=a; let c=a+b+5; c;", "15");
    assert_inspect("5 * (5 + 5) - 55 / 5", "39");
    assert_inspect("let x = 10 / 2; x", "5");
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_inspect(
        "let newAdder = fn(x) { return fn(y) { return x + y; }; }; \
         let addTwo = newAdder(2); addTwo(2);",
        "4",
    );
}

#[test]
fn functions_observe_their_captured_frame_at_call_time() {
    assert_inspect("let f = fn() { x }; let x = 41; f() + 1", "42");
    assert_inspect("let f = fn() { x }; f()", "ERROR: identifier not found: x");
}

#[test]
fn nested_returns_unwind_to_the_program() {
    assert_inspect("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn type_mismatches_are_reported_in_band() {
    assert_inspect("5 + true;", "ERROR: type mismatch: Int + Bool");
    assert_inspect("5 + true; 5;", "ERROR: type mismatch: Int + Bool");
}

#[test]
fn builtin_len() {
    assert_inspect("len(\"Hey Yung Wurld!\")", "15");
    assert_inspect("len(\"\")", "0");
    assert_inspect("len([])", "0");
    assert_inspect("len([1, 2, 3])", "3");
}

#[test]
fn slice_indexing() {
    assert_inspect("[1,2,3][1+0]", "2");
    assert_inspect("[1,2,3][-1]", "null");
    assert_inspect("[1,2,3][3]", "null");
    assert_inspect("[[1, 2], [3]][0]", "[1, 2]");
}

#[test]
fn string_concatenation() {
    assert_inspect("\"Hey\" + \" Young Wurld!\"", "Hey Young Wurld!");
}

#[test]
fn operator_priority_round_trips() {
    let src = "5 * 3 + 2 > 1 == 1 < 2 * 3 + 5";
    let want = "((((5 * 3) + 2) > 1) == (1 < ((2 * 3) + 5)))";
    assert_eq!(canonical(src), want);
    assert_eq!(canonical(want), want);
}

#[test]
fn double_bang_is_idempotent() {
    for src in ["0", "\"\"", "true", "false", "5", "[1]", "fn() { 1 }"] {
        let once = run(&format!("!!{src}")).expect("no value");
        let twice = run(&format!("!!!!{src}")).expect("no value");
        assert_eq!(once, twice, "in operand {src:?}");
    }
    assert_inspect("!!0", "true");
    assert_inspect("!![1]", "true");
}

#[test]
fn truthiness_of_if_conditions() {
    assert_inspect("if (0) { 1 } else { 2 }", "1");
    assert_inspect("if (\"\") { 1 } else { 2 }", "1");
    assert_inspect("if (false) { 1 }", "null");
}

#[test]
fn a_trailing_let_produces_nothing() {
    assert_no_value("let a = 5;");
    assert_no_value("1 + 1; let b = 2;");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_inspect("5 / 0", "ERROR: division by zero");
}

#[test]
fn arithmetic_wraps_in_64_bits() {
    assert_inspect("9223372036854775807 + 1", "-9223372036854775808");
}

#[test]
fn evaluation_is_deterministic() {
    let src = "let apply = fn(f, x) { return f(x); }; \
               apply(fn(n) { return n * 2; }, 21);";
    assert_eq!(run(src), run(src));
    assert_inspect(src, "42");
}

#[test]
fn a_session_environment_persists_between_runs() {
    let env = Env::new();
    assert_eq!(interpret("let x = 1;", &env).unwrap(), None);
    let value = interpret("let bump = fn() { x + 1 }; bump();", &env).unwrap();
    assert_eq!(value.expect("no value").inspect(), "2");
}

#[test]
fn parse_errors_block_evaluation() {
    let env = Env::new();
    let errors = interpret("let = 5;", &env).unwrap_err();
    assert!(!errors.is_empty());
    let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
    assert!(
        messages.contains(&"expected next token to be Ident, got Assign".to_string()),
        "got {messages:?}",
    );
}

#[test]
fn function_values_render_like_their_source() {
    assert_inspect("fn(x, y) { return x + y; }", "fn(x, y) return (x + y);");
    assert_inspect("len", "builtin function");
}
