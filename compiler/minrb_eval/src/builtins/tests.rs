use super::*;
use pretty_assertions::assert_eq;

use crate::EvalErrorKind;

fn coerce(value: impl Into<Value>) -> Result<i64, EvalErrorKind> {
    match to_integer(&value.into()) {
        Ok(Value::Int(n)) => Ok(n),
        Ok(other) => panic!("Integer() returned {other}"),
        Err(err) => Err(err.kind().clone()),
    }
}

#[test]
fn test_builtin_names() {
    assert_eq!(Builtin::from_name("p"), Some(Builtin::P));
    assert_eq!(Builtin::from_name("Integer"), Some(Builtin::Integer));
    assert_eq!(Builtin::from_name("integer"), None);
    assert_eq!(Builtin::from_name("puts"), None);
}

#[test]
fn test_p_result_shapes() {
    assert_eq!(p_result(vec![]), Value::Nil);
    assert_eq!(p_result(vec![Value::Int(1)]), Value::Int(1));
    assert_eq!(
        p_result(vec![Value::Int(1), Value::Int(2)]),
        Value::array(vec![Value::Int(1), Value::Int(2)])
    );
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal() {
        assert_eq!(coerce("42"), Ok(42));
        assert_eq!(coerce("-17"), Ok(-17));
        assert_eq!(coerce("+8"), Ok(8));
        assert_eq!(coerce("  12\n"), Ok(12));
        assert_eq!(coerce("0"), Ok(0));
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(coerce("0x1f"), Ok(31));
        assert_eq!(coerce("0B101"), Ok(5));
        assert_eq!(coerce("0o17"), Ok(15));
        assert_eq!(coerce("017"), Ok(15));
        assert_eq!(coerce("0d19"), Ok(19));
        assert_eq!(coerce("-0x10"), Ok(-16));
    }

    #[test]
    fn test_underscores() {
        assert_eq!(coerce("1_000_000"), Ok(1_000_000));
        assert!(coerce("1__000").is_err());
        assert!(coerce("_1").is_err());
        assert!(coerce("1_").is_err());
    }

    #[test]
    fn test_underscore_after_octal_zero() {
        assert_eq!(coerce("0_7"), Ok(7));
        assert_eq!(coerce("0_17"), Ok(15));
        assert_eq!(coerce("-0_10"), Ok(-8));
        assert!(coerce("0_").is_err());
        assert!(coerce("0__7").is_err());
        assert!(coerce("0_8").is_err());
    }

    #[test]
    fn test_only_ascii_whitespace_is_stripped() {
        assert_eq!(coerce("\x0B5\x0C"), Ok(5));
        assert_eq!(coerce("\t\r\n-3 "), Ok(-3));
        assert!(coerce("\u{3000}1").is_err());
        assert!(coerce("1\u{a0}").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        for text in ["", "   ", "abc", "12abc", "1.5", "0x", "09", "- 1", "--1"] {
            assert_eq!(
                coerce(text),
                Err(EvalErrorKind::ConversionError {
                    value: Value::string(text).inspect()
                }),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_limits() {
        assert_eq!(coerce("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(coerce("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            coerce("9223372036854775808"),
            Err(EvalErrorKind::IntegerOverflow { operation: "Integer()" })
        );
    }
}

mod other_values {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_is_identity() {
        assert_eq!(coerce(7_i64), Ok(7));
    }

    #[test]
    fn test_float_truncates() {
        assert_eq!(coerce(3.9), Ok(3));
        assert_eq!(coerce(-3.9), Ok(-3));
        assert!(matches!(coerce(f64::NAN), Err(EvalErrorKind::ConversionError { .. })));
        assert!(matches!(
            coerce(f64::INFINITY),
            Err(EvalErrorKind::ConversionError { .. })
        ));
        assert_eq!(
            coerce(1e19),
            Err(EvalErrorKind::IntegerOverflow { operation: "Integer()" })
        );
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(
            coerce(Value::Nil),
            Err(EvalErrorKind::ConversionError { value: "nil".into() })
        );
        assert!(coerce(true).is_err());
        assert!(coerce(Value::array(vec![])).is_err());
    }
}
