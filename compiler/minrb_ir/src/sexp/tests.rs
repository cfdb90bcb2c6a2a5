use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_json_scalars_map_to_variants() {
    let sexp = Sexp::from_json(r#"["lit", 1, 2.5, "s", true, null]"#).unwrap();
    assert_eq!(
        sexp,
        Sexp::List(vec![
            Sexp::Str("lit".into()),
            Sexp::Int(1),
            Sexp::Float(2.5),
            Sexp::Str("s".into()),
            Sexp::Bool(true),
            Sexp::Nil,
        ])
    );
}

#[test]
fn test_integral_json_float_stays_float() {
    assert_eq!(Sexp::from_json("3.0").unwrap(), Sexp::Float(3.0));
    assert_eq!(Sexp::from_json("-3").unwrap(), Sexp::Int(-3));
}

#[test]
fn test_node_builder_matches_json() {
    let built = Sexp::node("func_call", ["p".into(), Sexp::node("lit", [Sexp::Int(1)])]);
    let parsed = Sexp::from_json(r#"["func_call", "p", ["lit", 1]]"#).unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(Sexp::from_json(r#"["stmts""#).is_err());
    assert!(Sexp::from_json(r#"{"tag": "lit"}"#).is_err());
}

#[test]
fn test_kind_name() {
    assert_eq!(Sexp::Nil.kind_name(), "null");
    assert_eq!(Sexp::node("stmts", []).kind_name(), "list");
}
