use docpath::parser::normalize::{normalize, tokens};
use docpath::parser::parse;
use rstest::rstest;

#[rstest]
#[case("w:r w:t")]
#[case("  #paragraph-6 >w:r (1)w:t[xml:space=\"preserve\"] ")]
#[case("w:ins | w:del >w:r> w:t|  w:delText")]
#[case("[ w14:paraId = \"707BD5C8\" ]")]
#[case("w:r (0)   w:t( 12 )")]
#[case("w:p(1)|w:p(3)")]
#[case("a(1)(2)")]
#[case("# id > b")]
fn normalization_is_idempotent(#[case] input: &str) {
    let once = normalize(input);
    assert_eq!(normalize(&once), once);
}

#[rstest]
#[case("#paragraph-6>w:r(1)", &["#paragraph-6", ">w:r(1)"])]
#[case("a>b", &["a", ">b"])]
#[case("a > > b", &["a", ">", ">b"])]
#[case("w:r (0)w:t", &["w:r(0)", "w:t"])]
#[case("a | b", &["a|b"])]
#[case("w:p [ hidden ]", &["w:p", "[hidden]"])]
fn markers_are_isolated(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(tokens(input), expected);
}

#[rstest]
fn ordinary_name_characters_are_untouched() {
    assert_eq!(normalize("w15:presenceInfo w:t.x-y_z"), "w15:presenceInfo w:t.x-y_z");
}

#[rstest]
#[case("a b")]
#[case("a  b")]
#[case(" a b ")]
#[case("\ta\nb")]
fn equivalent_whitespace_parses_identically(#[case] input: &str) {
    assert_eq!(parse(input).unwrap(), parse("a b").unwrap());
}
