//! Tokenization of the built-in grammars

use octofhir_fhirlex::{Token, TokenKind, fhirpath, filter, mapping};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn pairs<'a>(tokens: &[Token<'a>]) -> Vec<(&'a str, &'a str)> {
    tokens.iter().map(|t| (t.id(), t.value)).collect()
}

fn ids<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(|t| t.id()).collect()
}

#[test]
fn test_fhirpath_punctuation() {
    let tokens = fhirpath::tokenize("(  + ) /   ( *  ");
    assert_eq!(ids(&tokens), vec!["(", "+", ")", "/", "(", "*"]);
    assert!(tokens.iter().all(|t| t.id() == t.value));
}

#[test]
fn test_fhirpath_trailing_comment() {
    let tokens = fhirpath::tokenize("bc + dsf -  // comment");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("Symbol", "bc"),
            ("+", "+"),
            ("Symbol", "dsf"),
            ("-", "-"),
            ("Comment", "// comment"),
        ]
    );
}

#[test]
fn test_fhirpath_path() {
    let tokens = fhirpath::tokenize("Patient.name.given");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("Symbol", "Patient"),
            (".", "."),
            ("Symbol", "name"),
            (".", "."),
            ("Symbol", "given"),
        ]
    );
}

#[test]
fn test_fhirpath_where_string() {
    let tokens = fhirpath::tokenize("Patient.telecom.where(system='email')");
    let string = tokens
        .iter()
        .position(|t| t.is("String"))
        .expect("string token");
    assert_eq!(tokens[string].value, "email");
    assert_eq!(pairs(&tokens[string - 2..string]), vec![("Symbol", "system"), ("=", "=")]);
    assert_eq!(tokens[string].index, 29);
    assert_eq!(tokens[string].span(), 29..36);
}

#[rstest]
#[case("true", TokenKind::Keyword("true"))]
#[case("false", TokenKind::Keyword("false"))]
#[case("Patient.true", TokenKind::Category(octofhir_fhirlex::TokenCategory::Symbol))]
#[case("Patient.active = false", TokenKind::Keyword("false"))]
fn test_fhirpath_keyword_promotion(#[case] input: &str, #[case] last: TokenKind<'static>) {
    let tokens = fhirpath::tokenize(input);
    assert_eq!(tokens.last().map(|t| t.kind), Some(last));
}

#[test]
fn test_fhirpath_quantities() {
    assert_eq!(pairs(&fhirpath::tokenize("5 days")), vec![("Quantity", "5 days")]);
    assert_eq!(
        pairs(&fhirpath::tokenize("5 dyas")),
        vec![("Number", "5"), ("Symbol", "dyas")]
    );
    assert_eq!(
        pairs(&fhirpath::tokenize("today() + 1 year")),
        vec![
            ("Symbol", "today"),
            ("(", "("),
            (")", ")"),
            ("+", "+"),
            ("Quantity", "1 year"),
        ]
    );
}

#[test]
fn test_fhirpath_bare_date_is_arithmetic() {
    assert_eq!(
        ids(&fhirpath::tokenize("2021-01-01")),
        vec!["Number", "-", "Number", "-", "Number"]
    );
}

#[test]
fn test_fhirpath_special_variables_and_lambda_arrow() {
    let tokens = fhirpath::tokenize("$this.name.select($this -> given) {}");
    assert_eq!(
        ids(&tokens),
        vec![
            "Symbol", ".", "Symbol", ".", "Symbol", "(", "Symbol", "->", "Symbol", ")", "{}",
        ]
    );
    assert_eq!(tokens[0].value, "$this");
}

#[test]
fn test_fhirpath_external_constant() {
    assert_eq!(
        pairs(&fhirpath::tokenize("%resource.id")),
        vec![
            ("%", "%"),
            ("Symbol", "resource"),
            (".", "."),
            ("Symbol", "id"),
        ]
    );
}

const TUTORIAL_MAP: &str = r#"map "http://hl7.org/fhir/StructureMap/tutorial" = tutorial

uses "http://hl7.org/fhir/StructureDefinition/tutorial-left" as source
uses "http://hl7.org/fhir/StructureDefinition/tutorial-right" as target

group tutorial(source src : TLeft, target tgt : TRight) {
  src.a as a -> tgt.a = a "rule_a";
}
"#;

#[test]
fn test_mapping_document_token_count() {
    let tokens = mapping::tokenize(TUTORIAL_MAP);
    assert_eq!(tokens.len(), 40);
}

#[test]
fn test_mapping_document_shape() {
    let tokens = mapping::tokenize(TUTORIAL_MAP);
    assert_eq!(
        pairs(&tokens[..4]),
        vec![
            ("Symbol", "map"),
            ("String", "http://hl7.org/fhir/StructureMap/tutorial"),
            ("=", "="),
            ("Symbol", "tutorial"),
        ]
    );

    let group = tokens.iter().find(|t| t.value == "group").expect("group");
    assert_eq!((group.line, group.column), (6, 0));

    let rule: Vec<_> = tokens[26..39].iter().map(|t| t.value).collect();
    assert_eq!(
        rule,
        vec!["src", ".", "a", "as", "a", "->", "tgt", ".", "a", "=", "a", "rule_a", ";"]
    );
    assert_eq!(tokens[39].id(), "}");
    assert_eq!(tokens[39].line, 8);
}

#[test]
fn test_mapping_operators() {
    assert_eq!(
        ids(&mapping::tokenize("a == b << c >> d -> e != f")),
        vec![
            "Symbol", "==", "Symbol", "<<", "Symbol", ">>", "Symbol", "->", "Symbol", "!=", "Symbol",
        ]
    );
}

#[test]
fn test_mapping_comments_are_tokens() {
    let tokens = mapping::tokenize("/* header */\nmap // trailing\n");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("Comment", "/* header */"),
            ("Symbol", "map"),
            ("Comment", "// trailing"),
        ]
    );
    assert_eq!((tokens[1].line, tokens[1].column), (2, 0));
}

#[rstest]
#[case("2021-01-01", "2021-01-01")]
#[case("2021-01-01T10:00:00Z", "2021-01-01T10:00:00Z")]
#[case("2021-01-01T10:00:00.123-05:00", "2021-01-01T10:00:00.123-05:00")]
#[case("@2021-01-01", "@2021-01-01")]
fn test_filter_dates(#[case] input: &str, #[case] value: &str) {
    let tokens = filter::tokenize(input);
    assert_eq!(pairs(&tokens), vec![("DateTime", value)]);
}

#[test]
fn test_filter_expression() {
    let tokens = filter::tokenize(
        "(birthdate ge 2021-01-01 and name co 'pet') or code eq http://loinc.org|1234-5",
    );
    assert_eq!(
        pairs(&tokens),
        vec![
            ("(", "("),
            ("Symbol", "birthdate"),
            ("Symbol", "ge"),
            ("DateTime", "2021-01-01"),
            ("Symbol", "and"),
            ("Symbol", "name"),
            ("Symbol", "co"),
            ("String", "pet"),
            (")", ")"),
            ("Symbol", "or"),
            ("Symbol", "code"),
            ("Symbol", "eq"),
            ("Symbol", "http://loinc.org|1234-5"),
        ]
    );
}

#[test]
fn test_filter_symbols_stop_at_brackets() {
    let tokens = filter::tokenize("identifier[system=http://x]");
    assert_eq!(
        pairs(&tokens),
        vec![("Symbol", "identifier[system=http://x"), ("]", "]")]
    );
}

#[test]
fn test_filter_keywords() {
    assert_eq!(
        pairs(&filter::tokenize("active eq true")),
        vec![("Symbol", "active"), ("Symbol", "eq"), ("true", "true")]
    );
}
