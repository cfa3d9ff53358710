//! Strict mode and configuration across the pipeline and runtime.

use omnicore::foundation::ErrorKind;
use omnicore::language::analyze;
use omnicore::runtime::dump::to_json;
use omnicore::{InterpretConfig, interpret, interpret_strict, interpret_with};

#[test]
fn strict_matches_lenient_on_clean_input() {
    for input in ["#usr", "@sys^high", "!cmd(arg1)", "#topic.p", "<pov1>#usr", "@a;@b"] {
        assert_eq!(interpret_strict(input).unwrap(), interpret(input));
    }
}

#[test]
fn strict_reports_lexer_problems_first() {
    let err = interpret_strict("@a[b $").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::UnexpectedCharacter { character: '$', .. }
    ));
}

#[test]
fn strict_reports_dangling_result() {
    let err = interpret_strict("@a>").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn strict_reports_nesting_limit() {
    let config = InterpretConfig::strict().with_max_depth(2);
    assert!(interpret_with("@a>@b>@c", &config).is_ok());

    let err = interpret_with("@a>@b>@c>@d", &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NestingTooDeep { limit: 2, .. }));
}

#[test]
fn lenient_never_fails() {
    let config = InterpretConfig::default().with_max_depth(0);
    assert_eq!(interpret_with("@a>@b", &config).unwrap(), "a");
}

#[test]
fn visual_codes_with_strict() {
    let config = InterpretConfig::strict().with_visual_modifiers(true);
    assert_eq!(
        interpret_with("@sky.vast", &config).unwrap(),
        "sky (vast)"
    );
}

#[test]
fn analysis_dumps_as_json() {
    let analysis = analyze("!cmd(a b)", &InterpretConfig::default()).unwrap();
    let json = to_json(&analysis.document).unwrap();
    assert!(json.contains("\"type\": \"command\""));
    assert!(json.contains("\"parameters\""));
}
