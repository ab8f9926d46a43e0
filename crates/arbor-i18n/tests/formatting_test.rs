//! Tests for positional formatting and pluralization behavior

use arbor_i18n::{
    default_plural_rule, format_positional, localizer_args, FormatError, FormatValue,
    NullStringLocalizer, PluralArgument, StringLocalizer,
};

#[test]
fn test_positional_substitution() {
    let values = [FormatValue::from("World")];
    assert_eq!(
        format_positional("Hello, {0}!", &values).unwrap(),
        "Hello, World!"
    );
}

#[test]
fn test_repeated_and_reordered_placeholders() {
    let values = [FormatValue::from("a"), FormatValue::from("b")];
    assert_eq!(format_positional("{1}{0}{1}", &values).unwrap(), "bab");
}

#[test]
fn test_escaped_braces_are_literal() {
    let values = [FormatValue::from("x")];
    assert_eq!(
        format_positional("{{0}} and {0}", &values).unwrap(),
        "{0} and x"
    );
    assert_eq!(format_positional("}}{{", &[]).unwrap(), "}{");
}

#[test]
fn test_extra_arguments_are_allowed() {
    let values = [FormatValue::from("used"), FormatValue::from("spare")];
    assert_eq!(format_positional("{0}", &values).unwrap(), "used");
}

#[test]
fn test_value_renderings() {
    let values = [
        FormatValue::from(7),
        FormatValue::from(2.5),
        FormatValue::from(true),
    ];
    assert_eq!(
        format_positional("{0} {1} {2}", &values).unwrap(),
        "7 2.5 true"
    );
}

#[test]
fn test_missing_argument_is_an_error() {
    let values = [FormatValue::from("only one")];
    let err = format_positional("{0} and {1}", &values).unwrap_err();
    assert_eq!(
        err,
        FormatError::IndexOutOfRange {
            index: 1,
            supplied: 1
        }
    );
}

#[test]
fn test_unclosed_placeholder_is_an_error() {
    let err = format_positional("count: {0", &[FormatValue::from(1)]).unwrap_err();
    assert_eq!(err, FormatError::UnclosedPlaceholder { position: 7 });
}

#[test]
fn test_non_numeric_placeholder_is_an_error() {
    let err = format_positional("{name}", &[FormatValue::from("x")]).unwrap_err();
    assert!(matches!(err, FormatError::InvalidIndex { .. }));

    let err = format_positional("{}", &[FormatValue::from("x")]).unwrap_err();
    assert!(matches!(err, FormatError::InvalidIndex { .. }));
}

#[test]
fn test_stray_closing_brace_is_an_error() {
    let err = format_positional("100}", &[]).unwrap_err();
    assert_eq!(err, FormatError::UnmatchedBrace { position: 3 });
}

#[test]
fn test_default_rule_buckets() {
    assert_eq!(default_plural_rule(1), 0);
    assert_eq!(default_plural_rule(0), 1);
    assert_eq!(default_plural_rule(2), 1);
    assert_eq!(default_plural_rule(-1), 1);
    assert_eq!(default_plural_rule(100), 1);
}

#[test]
fn test_singular_count_selects_first_form() {
    let localizer = NullStringLocalizer::instance();

    let plural = PluralArgument::new(1, ["one item", "many items"]);
    let result = localizer
        .get_with_args("item-count", &localizer_args![plural])
        .unwrap();
    assert_eq!(result.value, "one item");
    assert_eq!(result.name, "item-count");
}

#[test]
fn test_other_counts_select_second_form() {
    let localizer = NullStringLocalizer::instance();

    for count in [0, 2, -1, 100] {
        let plural = PluralArgument::new(count, ["one item", "many items"]);
        let result = localizer
            .get_with_args("item-count", &localizer_args![plural])
            .unwrap();
        assert_eq!(result.value, "many items", "count {count}");
    }
}

#[test]
fn test_plural_count_occupies_position_zero() {
    let localizer = NullStringLocalizer::instance();

    let plural = PluralArgument::new(5, ["{0} item", "{0} items"]);
    let result = localizer
        .get_with_args("{0} items", &localizer_args![plural])
        .unwrap();
    assert_eq!(result.value, "5 items");
}

#[test]
fn test_plural_extra_arguments_follow_the_count() {
    let localizer = NullStringLocalizer::instance();

    let plural =
        PluralArgument::new(3, ["{0} file in {1}", "{0} files in {1}"]).add_argument("docs");
    let result = localizer
        .get_with_args("file-count", &localizer_args![plural])
        .unwrap();
    assert_eq!(result.value, "3 files in docs");
}

#[test]
fn test_missing_plural_form_is_an_error() {
    let localizer = NullStringLocalizer::instance();

    let plural = PluralArgument::new(2, ["only form"]);
    let err = localizer
        .get_with_args("item-count", &localizer_args![plural])
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingPluralForm {
            index: 1,
            available: 1
        }
    );
}

#[test]
fn test_plural_outside_single_argument_position_uses_its_count() {
    let localizer = NullStringLocalizer::instance();

    let plural = PluralArgument::new(4, ["{0} item", "{0} items"]);
    let result = localizer
        .get_with_args("{0} in {1}", &localizer_args![plural, "trash"])
        .unwrap();
    assert_eq!(result.value, "4 in trash");
}

#[test]
fn test_plural_select_form_directly() {
    let plural = PluralArgument::new(1, ["one", "many"]);
    assert_eq!(plural.select_form(default_plural_rule).unwrap(), "one");

    let plural = PluralArgument::new(7, ["one", "many"]);
    assert_eq!(plural.select_form(default_plural_rule).unwrap(), "many");
}
