use super::*;

use std::fmt::Write;


#[test]
fn display_leaves() {
    assert_eq!(Value::Integer(-3).to_string(), "-3");
    assert_eq!(Value::Float(3.0).to_string(), "3.000000");
    assert_eq!(format!("{:.2}", Value::Float(0.125)), "0.12");
    assert_eq!(Value::symbol("%").to_string(), "%");
    assert_eq!(
        Value::Error(LangErr::DivisionByZero).to_string(),
        "Error: Division by zero"
    );
}

#[test]
fn display_sexpr() {
    let v = Value::SExpr(vec![
        Value::symbol("+"),
        Value::Integer(1),
        Value::SExpr(vec![Value::symbol("*"), Value::Float(2.5)]),
    ]);
    assert_eq!(v.to_string(), "(+ 1 (* 2.500000))");
    assert_eq!(format!("{:.1}", v), "(+ 1 (* 2.5))");
    assert_eq!(Value::sexpr().to_string(), "()");
}

#[test]
fn write_list_depths() {
    let v = Value::SExpr(vec![
        Value::Integer(1),
        Value::SExpr(vec![Value::SExpr(vec![])]),
    ]);
    let mut out = String::new();
    v.write_list(
        &mut out,
        0,
        &mut |w, leaf, depth| write!(w, "{}@{}", leaf, depth),
        &mut |w, paren, depth| write!(w, "{}{}", paren, depth),
    )
    .unwrap();
    assert_eq!(out, "(01@1 (1(2)2)1)0");
}

#[test]
fn from_str_builds_program() {
    let v = "+ 1 (- 2.5)".parse::<Value>().unwrap();
    assert_eq!(
        v,
        Value::SExpr(vec![
            Value::symbol("+"),
            Value::Integer(1),
            Value::SExpr(vec![Value::symbol("-"), Value::Float(2.5)]),
        ])
    );
    assert!("(+ 1".parse::<Value>().is_err());
}
