use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn arb_text() -> impl Strategy<Value = String> {
	"\\PC{0,16}".prop_filter("none sentinel", |s| s != crate::NONE_SENTINEL)
}

#[rstest]
#[case(WireValue::Int(42), 42)]
#[case(WireValue::from("17"), 17)]
#[case(WireValue::from(" 8 "), 8)]
#[case(WireValue::from("abc"), 0)]
#[case(WireValue::from("2.5"), 0)]
#[case(WireValue::Null, 0)]
#[case(WireValue::from("None"), 0)]
fn int_parses_leniently(#[case] input: WireValue, #[case] expected: i32) {
	assert_eq!(i32::from_wire(&input), expected);
}

#[rstest]
#[case(WireValue::Bool(true), true)]
#[case(WireValue::from("true"), true)]
#[case(WireValue::from("True"), true)]
#[case(WireValue::from("1"), true)]
#[case(WireValue::Int(1), true)]
#[case(WireValue::from("0"), false)]
#[case(WireValue::from("False"), false)]
#[case(WireValue::from("yes"), false)]
#[case(WireValue::Null, false)]
fn bool_parses_leniently(#[case] input: WireValue, #[case] expected: bool) {
	assert_eq!(bool::from_wire(&input), expected);
}

#[rstest]
#[case(WireValue::Float(1.25), 1.25)]
#[case(WireValue::Int(3), 3.0)]
#[case(WireValue::from("-0.5"), -0.5)]
#[case(WireValue::from("x"), 0.0)]
fn float_parses_leniently(#[case] input: WireValue, #[case] expected: f64) {
	assert_eq!(f64::from_wire(&input), expected);
}

#[test]
fn none_maps_to_empty_string_and_defaults() {
	assert_eq!(String::from_wire(&WireValue::Null), "");
	assert_eq!(String::from_wire(&WireValue::from("None")), "");
	assert_eq!(Vec::<i32>::from_wire(&WireValue::from("None")), Vec::<i32>::new());
	assert_eq!(Option::<i32>::from_wire(&WireValue::Null), None);
	assert_eq!(Option::<i32>::from_wire(&WireValue::from("5")), Some(5));
}

#[test]
fn non_string_values_render_for_string_targets() {
	assert_eq!(String::from_wire(&WireValue::Int(7)), "7");
	assert_eq!(String::from_wire(&WireValue::Bool(true)), "True");
}

#[test]
fn outbound_conventions() {
	assert_eq!(None::<String>.to_wire(), WireValue::from(""));
	assert_eq!(9_000_000_000i64.to_wire(), WireValue::from("9000000000"));
	assert_eq!(1.5f32.to_wire(), WireValue::from("1.5"));
	assert_eq!(vec!["a".to_string()].into_boxed_slice().to_wire(), WireValue::list(["a"]));
}

#[test]
fn map_keys_convert_through_text() {
	let map: BTreeMap<i32, bool> = [(1, true), (2, false)].into_iter().collect();
	let wire = map.to_wire();
	assert_eq!(wire, WireValue::map([("1", true), ("2", false)]));
	assert_eq!(BTreeMap::<i32, bool>::from_wire(&wire), map);
}

#[test]
fn nested_containers_convert_recursively() {
	let wire = WireValue::list([WireValue::map([("a", WireValue::list(["1", "2"]))]), WireValue::map([("b", WireValue::list([3]))])]);
	let host = Vec::<IndexMap<String, Vec<i32>>>::from_wire(&wire);
	assert_eq!(host.len(), 2);
	assert_eq!(host[0]["a"], [1, 2]);
	assert_eq!(host[1]["b"], [3]);
}

#[test]
fn type_descs_follow_host_types() {
	assert_eq!(<Vec<String>>::type_desc(), TypeDesc::list(TypeDesc::String));
	assert_eq!(<Box<[i32]>>::type_desc(), TypeDesc::array(TypeDesc::Int));
	assert_eq!(<HashMap<String, f64>>::type_desc(), TypeDesc::map(TypeDesc::String, TypeDesc::Float));
	assert_eq!(<Option<bool>>::type_desc(), TypeDesc::Bool);
	assert_eq!(u64::type_desc(), TypeDesc::Opaque("u64"));
}

proptest! {
	#[test]
	fn roundtrip_primitives(s in arb_text(), i in any::<i32>(), l in any::<i64>(), f in -1.0e12f64..1.0e12, b in any::<bool>()) {
		prop_assert_eq!(String::from_wire(&s.to_wire()), s);
		prop_assert_eq!(i32::from_wire(&i.to_wire()), i);
		prop_assert_eq!(i64::from_wire(&l.to_wire()), l);
		prop_assert_eq!(f64::from_wire(&f.to_wire()), f);
		prop_assert_eq!(bool::from_wire(&b.to_wire()), b);
	}

	#[test]
	fn roundtrip_lists(v in prop::collection::vec(any::<i32>(), 0..8), w in prop::collection::vec(arb_text(), 0..8)) {
		prop_assert_eq!(Vec::<i32>::from_wire(&v.to_wire()), v);
		let boxed = w.into_boxed_slice();
		prop_assert_eq!(Box::<[String]>::from_wire(&boxed.to_wire()), boxed);
	}

	#[test]
	fn roundtrip_nested(v in prop::collection::vec(prop::collection::hash_map(arb_text(), any::<bool>(), 0..4), 0..4)) {
		let host: Vec<HashMap<String, bool>> = v;
		prop_assert_eq!(Vec::<HashMap<String, bool>>::from_wire(&host.to_wire()), host);
	}

	#[test]
	fn roundtrip_map_of_lists(m in prop::collection::btree_map(arb_text(), prop::collection::vec(-1.0e6f64..1.0e6, 0..4), 0..4)) {
		prop_assert_eq!(BTreeMap::<String, Vec<f64>>::from_wire(&m.to_wire()), m);
	}
}
