use super::*;

#[test]
fn parse_language_names() {
    assert_eq!("python".parse::<Language>(), Ok(Language::Python));
    assert_eq!("PY".parse::<Language>(), Ok(Language::Python));
    assert_eq!("vbnet".parse::<Language>(), Ok(Language::VbNet));
    assert_eq!("VB.NET".parse::<Language>(), Ok(Language::VbNet));
    assert_eq!(" java ".parse::<Language>(), Ok(Language::Java));
    assert!("rust".parse::<Language>().is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for language in Language::ALL {
        assert_eq!(language.to_string().parse::<Language>(), Ok(language));
    }
}

#[test]
fn infer_from_extension() {
    assert_eq!(Language::from_extension("py"), Ok(Language::Python));
    assert_eq!(Language::from_extension("VB"), Ok(Language::VbNet));
    assert_eq!(Language::from_extension("java"), Ok(Language::Java));
    assert!(Language::from_extension("txt").is_err());
}

#[test]
fn serde_names_match_display() {
    let json = serde_json::to_string(&Language::ALL).unwrap();
    assert_eq!(json, r#"["python","vbnet","java"]"#);
    let parsed: Language = serde_json::from_str(r#""vbnet""#).unwrap();
    assert_eq!(parsed, Language::VbNet);
}

#[test]
fn operators_are_ordered_longest_first() {
    for language in Language::ALL {
        let lengths: Vec<usize> = language
            .definition()
            .operators
            .iter()
            .map(|op| op.chars().count())
            .collect();
        assert!(
            lengths.windows(2).all(|w| w[0] >= w[1]),
            "{} operators not sorted: {:?}",
            language,
            language.definition().operators
        );
    }
}

#[test]
fn power_operator_probed_before_star() {
    let ops = &Language::Python.definition().operators;
    let power = ops.iter().position(|op| *op == "**").unwrap();
    let star = ops.iter().position(|op| *op == "*").unwrap();
    assert!(power < star);
}

#[test]
fn comment_markers() {
    assert_eq!(Language::Python.definition().line_comment, "#");
    assert_eq!(Language::VbNet.definition().line_comment, "'");
    assert_eq!(Language::Java.definition().line_comment, "//");
    assert_eq!(Language::Java.definition().block_comment, Some(("/*", "*/")));
    assert_eq!(Language::Python.definition().block_comment, None);
}

#[test]
fn word_sets() {
    let python = Language::Python.definition();
    assert!(python.is_keyword("def"));
    assert!(python.is_builtin("print"));
    assert!(python.is_type("int"));
    assert!(!python.is_keyword("print"));

    let java = Language::Java.definition();
    assert!(java.is_type("String"));
    assert!(java.is_keyword("return"));

    let vb = Language::VbNet.definition();
    assert!(vb.is_keyword("Dim"));
    assert!(vb.is_type("Integer"));
}

#[test]
fn word_sets_do_not_overlap() {
    for language in Language::ALL {
        let def = language.definition();
        assert!(def.keywords.is_disjoint(&def.builtins), "{}", language);
        assert!(def.keywords.is_disjoint(&def.types), "{}", language);
        assert!(def.builtins.is_disjoint(&def.types), "{}", language);
    }
}
