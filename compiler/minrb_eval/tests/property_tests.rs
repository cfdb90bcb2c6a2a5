//! Property-based tests for the evaluator.
//!
//! Programs are generated as `Sexp` trees, lowered and evaluated, then
//! checked against arithmetic laws and collection invariants.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use minrb_eval::{Environment, EvalErrorKind, EvalResult, Interpreter, Value};
use minrb_ir::{lower, Sexp, StringInterner};
use proptest::prelude::*;

// -- Tree Builders --

fn lit(n: i64) -> Sexp {
    Sexp::node("lit", [Sexp::Int(n)])
}

fn op(tag: &str, left: Sexp, right: Sexp) -> Sexp {
    Sexp::node(tag, [left, right])
}

fn var_ref(name: &str) -> Sexp {
    Sexp::node("var_ref", [Sexp::from(name)])
}

fn var_assign(name: &str, value: Sexp) -> Sexp {
    Sexp::node("var_assign", [Sexp::from(name), value])
}

/// Evaluate `sexp` in `env` with a fresh interpreter.
fn eval_in(sexp: &Sexp, interner: &StringInterner, env: &mut Environment) -> EvalResult {
    let root = lower(sexp, interner).unwrap();
    let mut interpreter = Interpreter::new(interner);
    interpreter.eval(&root, env)
}

fn eval(sexp: &Sexp) -> EvalResult {
    let interner = StringInterner::new();
    eval_in(sexp, &interner, &mut Environment::new())
}

// -- Strategies --

/// Small integer expressions over `x` and literals, without side effects.
fn pure_expr_strategy(depth: u32) -> BoxedStrategy<Sexp> {
    let leaf = prop_oneof![
        (-1000i64..1000).prop_map(lit),
        Just(var_ref("x")),
    ];
    leaf.prop_recursive(depth, 32, 2, |inner| {
        (
            prop::sample::select(vec!["+", "-", "*", "/", "%", "<", "==", "!="]),
            inner.clone(),
            inner,
        )
            .prop_map(|(tag, left, right)| op(tag, left, right))
    })
    .boxed()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// `(a / b) * b + a % b == a`, with the remainder taking the divisor's sign.
    #[test]
    fn prop_floored_division_law(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assume!(!(a == i64::MIN && b == -1));

        let q = eval(&op("/", lit(a), lit(b))).unwrap();
        let r = eval(&op("%", lit(a), lit(b))).unwrap();
        let (Value::Int(q), Value::Int(r)) = (q, r) else {
            return Err(TestCaseError::fail("non-integer result"));
        };

        prop_assert_eq!(i128::from(q) * i128::from(b) + i128::from(r), i128::from(a));
        prop_assert!(r == 0 || (r < 0) == (b < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    /// Division and modulo by integer zero always fail.
    #[test]
    fn prop_zero_divisor_fails(a in any::<i64>()) {
        for tag in ["/", "%"] {
            let err = eval(&op(tag, lit(a), lit(0))).unwrap_err();
            prop_assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
        }
    }

    /// A pure expression evaluated twice in the same environment agrees
    /// with itself, including on failure.
    #[test]
    fn prop_pure_expression_idempotent(expr in pure_expr_strategy(4), x in -50i64..50) {
        let interner = StringInterner::new();
        let mut env = Environment::new();
        env.assign(interner.intern("x"), Value::Int(x));

        let first = eval_in(&expr, &interner, &mut env);
        let second = eval_in(&expr, &interner, &mut env);
        prop_assert_eq!(first, second);
    }

    /// Writing past the end grows the array with `nil` up to the index.
    #[test]
    fn prop_array_growth(initial in 0usize..16, index in 0i64..256) {
        let items = (0..initial).map(|i| lit(i64::try_from(i).unwrap()));
        let program = Sexp::node("stmts", [
            var_assign("a", Sexp::node("ary_new", items)),
            Sexp::node("ary_assign", [var_ref("a"), lit(index), Sexp::node("lit", [Sexp::from("x")])]),
            var_ref("a"),
        ]);

        let array = eval(&program).unwrap().array_items().unwrap();
        let slot = usize::try_from(index).unwrap();
        prop_assert_eq!(array.len(), initial.max(slot + 1));
        prop_assert_eq!(&array[slot], &Value::string("x"));
        for (i, item) in array.iter().enumerate() {
            if i < initial && i != slot {
                prop_assert_eq!(item, &Value::Int(i64::try_from(i).unwrap()));
            } else if i != slot {
                prop_assert_eq!(item, &Value::Nil);
            }
        }
    }

    /// Duplicate keys in a hash literal keep one entry holding the last value.
    #[test]
    fn prop_hash_literal_last_write_wins(keys in prop::collection::vec(0i64..8, 0..24)) {
        let mut children = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            children.push(lit(*key));
            children.push(lit(i64::try_from(i).unwrap()));
        }
        let table = Sexp::node("hash_new", children);

        for key in 0i64..8 {
            let read = eval(&Sexp::node("ary_ref", [table.clone(), lit(key)])).unwrap();
            let expected = keys
                .iter()
                .rposition(|k| *k == key)
                .map_or(Value::Nil, |i| Value::Int(i64::try_from(i).unwrap()));
            prop_assert_eq!(read, expected);
        }
    }
}
