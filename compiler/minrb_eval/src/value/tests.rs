use super::*;

use super::inspect::format_float;

fn array(items: Vec<Value>) -> Value {
    Value::array(items)
}

fn hash(pairs: Vec<(Value, Value)>) -> Value {
    let mut table = HashValue::new();
    for (key, value) in pairs {
        table.insert(key, value);
    }
    Value::hash(table)
}

mod truthiness {
    use super::*;

    #[test]
    fn only_false_and_nil_are_falsy() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Nil.is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Float(0.0).is_truthy());
        assert!(Value::string("").is_truthy());
        assert!(array(vec![]).is_truthy());
        assert!(hash(vec![]).is_truthy());
    }
}

mod equality {
    use super::*;

    #[test]
    fn scalars_compare_by_value() {
        assert!(Value::Int(3).equals(&Value::Int(3)));
        assert!(!Value::Int(3).equals(&Value::Int(4)));
        assert!(Value::string("a").equals(&Value::string("a")));
        assert!(Value::Nil.equals(&Value::Nil));
    }

    #[test]
    fn mismatched_variants_are_unequal() {
        assert!(!Value::Nil.equals(&Value::Bool(false)));
        assert!(!Value::string("1").equals(&Value::Int(1)));
        assert!(!array(vec![]).equals(&hash(vec![])));
    }

    #[test]
    fn integers_equal_floats_numerically() {
        assert!(Value::Int(1).equals(&Value::Float(1.0)));
        assert!(Value::Float(-3.0).equals(&Value::Int(-3)));
        assert!(!Value::Int(1).equals(&Value::Float(1.5)));
        assert!(array(vec![Value::Int(1)]).equals(&array(vec![Value::Float(1.0)])));
        let a = hash(vec![(Value::string("k"), Value::Int(2))]);
        let b = hash(vec![(Value::string("k"), Value::Float(2.0))]);
        assert!(a.equals(&b));
    }

    #[test]
    fn eql_keeps_integers_and_floats_apart() {
        assert!(!Value::Int(1).eql(&Value::Float(1.0)));
        assert!(!array(vec![Value::Int(1)]).eql(&array(vec![Value::Float(1.0)])));
        assert!(Value::Int(1).eql(&Value::Int(1)));
        assert!(Value::Float(0.0).eql(&Value::Float(-0.0)));
    }

    #[test]
    fn hash_keys_match_strictly() {
        let a = hash(vec![(Value::Int(1), Value::Nil)]);
        let b = hash(vec![(Value::Float(1.0), Value::Nil)]);
        assert!(!a.equals(&b));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert!(!Value::Float(f64::NAN).equals(&Value::Float(f64::NAN)));
    }

    #[test]
    fn arrays_compare_structurally() {
        let a = array(vec![Value::Int(1), array(vec![Value::string("x")])]);
        let b = array(vec![Value::Int(1), array(vec![Value::string("x")])]);
        let c = array(vec![Value::Int(1)]);
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
    }

    #[test]
    fn hashes_ignore_insertion_order() {
        let a = hash(vec![(Value::Int(1), Value::Nil), (Value::Int(2), Value::Bool(true))]);
        let b = hash(vec![(Value::Int(2), Value::Bool(true)), (Value::Int(1), Value::Nil)]);
        assert!(a.equals(&b));
    }

    #[test]
    fn self_referential_arrays_terminate() {
        let a = array(vec![]);
        let b = array(vec![]);
        if let (Value::Array(x), Value::Array(y)) = (&a, &b) {
            x.borrow_mut().push(a.clone());
            y.borrow_mut().push(b.clone());
        }
        assert!(a.equals(&a));
        assert!(a.equals(&b));
    }
}

mod aliasing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cloned_array_shares_storage() {
        let a = array(vec![Value::Int(1)]);
        let alias = a.clone();
        if let Value::Array(items) = &alias {
            items.borrow_mut().push(Value::Int(2));
        }
        assert_eq!(a.array_items(), Some(vec![Value::Int(1), Value::Int(2)]));
    }
}

mod hash_table {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_insert_overwrites_in_place() {
        let mut table = HashValue::new();
        assert_eq!(table.insert(Value::Int(1), Value::string("a")), None);
        table.insert(Value::Int(2), Value::string("b"));
        assert_eq!(
            table.insert(Value::Int(1), Value::string("c")),
            Some(Value::string("a"))
        );
        assert_eq!(table.len(), 2);
        let keys: Vec<_> = table.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(table.get(&Value::Int(1)), Some(&Value::string("c")));
    }

    #[test]
    fn structural_keys() {
        let mut table = HashValue::new();
        table.insert(array(vec![Value::Int(1), Value::Int(2)]), Value::Bool(true));
        assert_eq!(
            table.get(&array(vec![Value::Int(1), Value::Int(2)])),
            Some(&Value::Bool(true))
        );
        assert_eq!(table.get(&array(vec![Value::Int(2), Value::Int(1)])), None);
    }

    #[test]
    fn int_and_float_keys_are_distinct() {
        let mut table = HashValue::new();
        table.insert(Value::Int(1), Value::string("int"));
        table.insert(Value::Float(1.0), Value::string("float"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&Value::Int(1)), Some(&Value::string("int")));
    }

    #[test]
    fn negative_zero_finds_zero() {
        let mut table = HashValue::new();
        table.insert(Value::Float(0.0), Value::Nil);
        assert!(table.get(&Value::Float(-0.0)).is_some());
    }
}

mod inspect {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars() {
        assert_eq!(Value::Int(-12).inspect(), "-12");
        assert_eq!(Value::Bool(true).inspect(), "true");
        assert_eq!(Value::Nil.inspect(), "nil");
    }

    #[test]
    fn floats() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(1e20), "1.0e+20");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(Value::string("hi").inspect(), r#""hi""#);
        assert_eq!(Value::string("a\"b\\c").inspect(), r#""a\"b\\c""#);
        assert_eq!(Value::string("l1\nl2\t").inspect(), r#""l1\nl2\t""#);
        assert_eq!(Value::string("#{x} #y").inspect(), r##""\#{x} #y""##);
        assert_eq!(Value::string("\u{1}").inspect(), r#""\x01""#);
    }

    #[test]
    fn collections() {
        let value = array(vec![
            Value::Int(1),
            Value::string("two"),
            Value::Nil,
            hash(vec![(Value::Int(1), Value::string("b"))]),
        ]);
        assert_eq!(value.inspect(), r#"[1, "two", nil, {1=>"b"}]"#);
        assert_eq!(array(vec![]).inspect(), "[]");
        assert_eq!(hash(vec![]).inspect(), "{}");
    }

    #[test]
    fn recursive_array_is_elided() {
        let a = array(vec![Value::Int(1)]);
        if let Value::Array(items) = &a {
            items.borrow_mut().push(a.clone());
        }
        assert_eq!(a.inspect(), "[1, [...]]");
    }

    #[test]
    fn display_matches_inspect() {
        let value = array(vec![Value::Float(2.0)]);
        assert_eq!(value.to_string(), "[2.0]");
    }
}
