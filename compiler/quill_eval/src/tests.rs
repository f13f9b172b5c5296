use pretty_assertions::assert_eq;
use quill_ir::{BinaryOp, ExprArena, Location, UnaryOp};
use quill_rt::{Access, Env, Value};

use crate::{execute, ExecError, Interpreter, Native};

const AT: Location = Location::DUMMY;

fn run(source: &str) -> Native {
    let mut env = Env::new();
    let mut nodes = ExprArena::new();
    execute(source, &mut env, &mut nodes).unwrap()
}

fn run_err(source: &str) -> ExecError {
    let mut env = Env::new();
    let mut nodes = ExprArena::new();
    execute(source, &mut env, &mut nodes).unwrap_err()
}

// Interpreter

#[test]
fn interprets_loose_equality() {
    let mut arena = ExprArena::new();
    let five = arena.int(5, AT);
    let five_str = arena.string("5", AT);
    let eq = arena.binary(BinaryOp::Eq, five, five_str, AT);
    let zero = arena.int(0, AT);
    let abc = arena.string("abc", AT);
    let eq2 = arena.binary(BinaryOp::Eq, zero, abc, AT);

    let mut env = Env::new();
    let mut interp = Interpreter::new(&arena, &mut env);
    assert!(interp.eval_boolean(eq));
    assert!(!interp.eval_boolean(eq2));
}

#[test]
fn interprets_assignment_before_read() {
    let mut arena = ExprArena::new();
    let one = arena.int(1, AT);
    let assign = arena.assign("x", one, AT);
    let read = arena.var("x", AT);
    let eq = arena.binary(BinaryOp::Eq, assign, read, AT);

    let mut env = Env::new();
    assert!(Interpreter::new(&arena, &mut env).eval_boolean(eq));
    assert_eq!(
        env.trace(),
        [Access::Write("x".to_string()), Access::Read("x".to_string())]
    );
}

#[test]
fn interprets_negation_overflow() {
    let mut arena = ExprArena::new();
    let min = arena.int(i64::MIN, AT);
    let negated = arena.unary(UnaryOp::Neg, min, AT);

    let mut env = Env::new();
    let mut interp = Interpreter::new(&arena, &mut env);
    assert_eq!(interp.eval_value(negated), Value::Double(9.223_372_036_854_775_808e18));
    assert_eq!(interp.eval_long(negated), i64::MIN);
}

#[test]
fn rebuild_is_structurally_equal() {
    let mut arena = ExprArena::new();
    let x = arena.var("x", AT);
    let s = arena.string("s", AT);
    let sub = arena.binary(BinaryOp::Sub, x, s, AT);
    let not = arena.unary(UnaryOp::Not, sub, AT);

    let mut env = Env::new();
    let mut out = ExprArena::new();
    let copy = Interpreter::new(&arena, &mut env).rebuild(not, &mut out);
    assert!(arena.structurally_eq(not, &out, copy));
    assert!(env.trace().is_empty());
}

// Target executor

#[test]
fn executes_boxed_literals() {
    assert_eq!(run("NullValue.NULL"), Native::Value(Value::Null));
    assert_eq!(run("BooleanValue.FALSE"), Native::Value(Value::Bool(false)));
    assert_eq!(run("LongValue.create((-5L))"), Native::Value(Value::Long(-5)));
    assert_eq!(run("LongValue.create(Long.MIN_VALUE)"), Native::Value(Value::Long(i64::MIN)));
    assert_eq!(run("new DoubleValue(3.5)"), Native::Value(Value::Double(3.5)));
    assert_eq!(run(r#"env.createString("a\nb")"#), Native::Value(Value::string("a\nb")));
}

#[test]
fn executes_value_methods() {
    assert_eq!(run(r#"LongValue.create(5L).eql(env.createString("5"))"#), Native::Bool(true));
    assert_eq!(run("LongValue.create(Long.MIN_VALUE).neg()"), Native::Value(Value::Double(9.223_372_036_854_775_808e18)));
    assert_eq!(run("LongValue.create(2L).sub(new DoubleValue(0.5))"), Native::Value(Value::Double(1.5)));
    assert_eq!(run(r#"env.createString("0").toBoolean()"#), Native::Bool(false));
    assert_eq!(run("new DoubleValue(2.9).toLong()"), Native::Long(2));
    assert_eq!(run("env.toValue((!true))"), Native::Value(Value::Bool(false)));
}

#[test]
fn native_arithmetic_follows_java() {
    assert_eq!(run("(-Long.MIN_VALUE)"), Native::Long(i64::MIN));
    assert_eq!(run("(Long.MAX_VALUE + 1L)"), Native::Long(i64::MIN));
    assert_eq!(run("(1L + 0.5)"), Native::Double(1.5));
    assert_eq!(run("((double) 5L)"), Native::Double(5.0));
    assert_eq!(run("((long) Double.NaN)"), Native::Long(0));
    assert_eq!(run("(-(-3.5))"), Native::Double(3.5));
}

#[test]
fn env_calls_are_traced_in_order() {
    let mut env = Env::new();
    env.define("y", Value::Long(2));
    let mut nodes = ExprArena::new();
    let result = execute(
        r#"env.setValue("x", env.getValue("y")).eql(env.getValue("x"))"#,
        &mut env,
        &mut nodes,
    )
    .unwrap();
    assert_eq!(result, Native::Bool(true));
    assert_eq!(
        env.take_trace(),
        vec![
            Access::Read("y".to_string()),
            Access::Write("x".to_string()),
            Access::Read("x".to_string()),
        ]
    );
}

#[test]
fn constructs_nodes() {
    let mut env = Env::new();
    let mut nodes = ExprArena::new();
    let built = execute(
        r#"new AssignExpr("x", new UnaryMinusExpr(new LiteralExpr(LongValue.create(2L))))"#,
        &mut env,
        &mut nodes,
    )
    .unwrap();
    let Native::Node(id) = built else {
        panic!("expected a node, got {built:?}");
    };
    assert_eq!(nodes.node(id).to_string(), "($x = (-2))");
}

#[test]
fn reports_type_mismatch() {
    assert_eq!(
        run_err("LongValue.create(3.5)"),
        ExecError::TypeMismatch {
            operation: "LongValue.create".to_string(),
            expected: "long",
            found: "double",
        }
    );
    assert_eq!(
        run_err("(!LongValue.create(1L))"),
        ExecError::TypeMismatch {
            operation: "!".to_string(),
            expected: "boolean",
            found: "Value",
        }
    );
}

#[test]
fn reports_unknown_names() {
    assert_eq!(run_err("Foo.BAR"), ExecError::UnknownName("Foo.BAR".to_string()));
    assert_eq!(run_err("new Foo()"), ExecError::UnknownClass("Foo".to_string()));
    assert_eq!(
        run_err("NullValue.NULL.frob()"),
        ExecError::UnknownMethod {
            receiver: "Value".to_string(),
            method: "frob".to_string(),
        }
    );
    assert_eq!(
        run_err("env.getValue()"),
        ExecError::Arity {
            operation: "env.getValue".to_string(),
            expected: 1,
            found: 0,
        }
    );
}
