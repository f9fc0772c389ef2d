use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::types::TypeDesc;

fn params() -> Vec<ParamSpec> {
	vec![
		ParamSpec::required("first", TypeDesc::String),
		ParamSpec::required("second", TypeDesc::Int),
		ParamSpec::optional("third", TypeDesc::Bool, WireValue::Bool(false)),
	]
}

fn named(entries: &[(&str, WireValue)]) -> WireMap {
	entries.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[rstest]
#[case::all_positional(vec!["a".into(), 1.into(), true.into()], vec![], vec!["a".into(), 1.into(), true.into()])]
#[case::default_applied(vec!["a".into(), 1.into()], vec![], vec!["a".into(), 1.into(), false.into()])]
#[case::named_only(vec![], vec![("second", 2.into()), ("first", "b".into())], vec!["b".into(), 2.into(), false.into()])]
#[case::mixed(vec!["a".into()], vec![("third", true.into()), ("second", 5.into())], vec!["a".into(), 5.into(), true.into()])]
#[case::named_overrides_positional(vec!["a".into(), 1.into()], vec![("first", "z".into())], vec!["z".into(), 1.into(), false.into()])]
#[case::excess_positional_ignored(vec!["a".into(), 1.into(), true.into(), "extra".into()], vec![], vec!["a".into(), 1.into(), true.into()])]
fn binds(#[case] positional: Vec<WireValue>, #[case] kwargs: Vec<(&str, WireValue)>, #[case] expected: Vec<WireValue>) {
	let kwargs = named(&kwargs);
	let frame = CallFrame::bind("KW", &params(), &positional, Some(&kwargs), false).unwrap();
	assert_eq!(frame.values(), expected.as_slice());
}

#[test]
fn default_is_not_marked_provided() {
	let frame = CallFrame::bind("KW", &params(), &[WireValue::from("a"), WireValue::Int(1)], None, false).unwrap();
	assert!(frame.is_provided(0));
	assert!(frame.is_provided(1));
	assert!(!frame.is_provided(2));
	assert_eq!(frame.arg(2), &WireValue::Bool(false));
}

#[test]
fn missing_required_names_first_unset_parameter() {
	let err = CallFrame::bind("My Keyword", &params(), &[WireValue::from("a")], None, false).unwrap_err();
	assert_eq!(
		err,
		BindError::MissingArgument {
			name: "second".into(),
			keyword: "My Keyword".into(),
		}
	);
	assert_eq!(err.to_string(), "Missing required argument 'second' for My Keyword.");
}

#[test]
fn unknown_named_argument_lists_expected_names() {
	let kwargs = named(&[("Second", WireValue::Int(1))]);
	let err = CallFrame::bind("My Keyword", &params(), &[WireValue::from("a")], Some(&kwargs), false).unwrap_err();
	assert_eq!(
		err.to_string(),
		"Unexpected named argument 'Second' for My Keyword. Expected one of: first, second, third"
	);
}

#[test]
fn explicit_null_leaves_required_slot_missing() {
	let err = CallFrame::bind("KW", &params(), &[WireValue::Null, 1.into()], None, false).unwrap_err();
	assert_eq!(
		err,
		BindError::MissingArgument {
			name: "first".into(),
			keyword: "KW".into(),
		}
	);

	let kwargs = named(&[("first", WireValue::Null)]);
	let err = CallFrame::bind("KW", &params(), &[], Some(&kwargs), false).unwrap_err();
	assert!(matches!(err, BindError::MissingArgument { name, .. } if name == "first"));
}

#[test]
fn explicit_null_is_kept_over_default() {
	let frame = CallFrame::bind("KW", &params(), &["a".into(), 1.into(), WireValue::Null], None, false).unwrap();
	assert_eq!(frame.arg(2), &WireValue::Null);
	assert!(frame.is_provided(2));
}

#[test]
fn strict_mode_rejects_excess_positional() {
	let args: Vec<WireValue> = vec!["a".into(), 1.into(), true.into(), "extra".into()];
	let err = CallFrame::bind("KW", &params(), &args, None, true).unwrap_err();
	assert_eq!(
		err,
		BindError::ExcessPositional {
			keyword: "KW".into(),
			expected: 3,
			given: 4,
		}
	);
	assert!(CallFrame::bind("KW", &params(), &args[..3], None, true).is_ok());
}

#[test]
fn empty_signature_binds_empty_frame() {
	let frame = CallFrame::bind("KW", &[], &[], None, false).unwrap();
	assert!(frame.is_empty());
	assert_eq!(frame.trace("Method", &[]), "Method()");
}

#[test]
fn trace_shows_resolved_values() {
	let frame = CallFrame::bind("KW", &params(), &[WireValue::from("hello"), WireValue::Int(2)], None, false).unwrap();
	assert_eq!(frame.trace("Do_Thing", &params()), "Do_Thing(first=hello, second=2, third=False)");
}
