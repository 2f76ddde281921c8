use docpath::GrammarError as G;
use docpath::parser::parse;
use rstest::rstest;

#[rstest]
#[case("w:p #id", G::IdNotAtStart)]
#[case("a #", G::IdNotAtStart)]
#[case("#", G::IdMissingName)]
#[case(">#id", G::DirectChildMissingName)]
#[case("#>id", G::IdMissingName)]
#[case("#[x]", G::IdMissingName)]
#[case("#[x=\"y\"]", G::IdMissingName)]
#[case("#(1)", G::IdMissingName)]
#[case(">", G::DirectChildMissingName)]
#[case("w:p >", G::DirectChildMissingName)]
fn anchor_errors(#[case] input: &str, #[case] expected: G) {
    assert_eq!(parse(input).unwrap_err(), expected);
}

#[rstest]
#[case("w:t|", G::AlternationMissingNames)]
#[case("|w:t", G::AlternationMissingNames)]
#[case("a||b", G::AlternationMissingNames)]
#[case("#id|rsid", G::AlternationWithId)]
#[case("[hidden]|[required]", G::AlternationReservedCharacter)]
#[case("w:p(1)|w:p(3)", G::AlternationReservedCharacter)]
fn alternation_errors(#[case] input: &str, #[case] expected: G) {
    assert_eq!(parse(input).unwrap_err(), expected);
}

#[rstest]
#[case("(40)")]
#[case("w:t(n)")]
#[case("w:t(-1)")]
#[case("w:t(99999999999999999999999999)")]
#[case("[hidden](0)")]
fn index_errors(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err(), G::InvalidIndex);
}

#[rstest]
#[case("[")]
#[case("]")]
#[case("=")]
#[case("\"")]
#[case("(")]
#[case(")")]
#[case("w:t()")]
#[case("w:p[hidden")]
fn reserved_characters_in_names(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err(), G::ReservedCharacterInName);
}

#[rstest]
#[case("[>]")]
#[case("[\"]")]
#[case("[]")]
#[case("[x=y]")]
#[case("[x=\"\"]")]
#[case("[x=\"a(b\"]")]
fn attribute_errors(#[case] input: &str) {
    assert_eq!(parse(input).unwrap_err(), G::AttributeReservedCharacter);
}

#[rstest]
fn messages_name_the_offending_construct() {
    assert_eq!(G::IdNotAtStart.to_string(), "'#' selectors must be at the start of a provided path");
    assert_eq!(
        G::InvalidIndex.to_string(),
        "'(n)' selectors require an integer with a preceding node name, e.g. w:t(0)"
    );
    assert_eq!(
        G::ReservedCharacterInName.to_string(),
        "A node name must not include any reserved characters '#>[]=\"()'"
    );
}

#[rstest]
fn later_segment_errors_reject_the_whole_path() {
    assert_eq!(parse("w:body w:p >").unwrap_err(), G::DirectChildMissingName);
}
