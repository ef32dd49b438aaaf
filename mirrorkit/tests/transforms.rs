use mirrorkit::params::TextToolParams;
use mirrorkit::text::registry::USER_FUNCTION_KEY;
use mirrorkit::text::tool::DEFAULT_SUBJECT;
use mirrorkit::{TextTool, TransformError, TransformRegistry};

#[test]
fn retrieve_numbers_with_separator() {
    let reg = TransformRegistry::builtin();
    assert_eq!(reg.apply("getNumbers", "x=1.50, y=-2e3; z=.25", "").unwrap(), "1.5,-2000,0.25");
    assert_eq!(reg.apply("getNumbers", "1 2", " | ").unwrap(), "1 | 2");
}

#[test]
fn polygon_path_from_svg_points() {
    let reg = TransformRegistry::builtin();
    let out = reg.apply("getPolygonPath", r#"<polygon points="0,0 0.5,0 0.5,0.5 0,0.5"/>"#, "").unwrap();
    assert_eq!(out, r#"d="M0,0H.5V.5H0Z""#);
}

#[test]
fn char_swap_default_map() {
    let reg = TransformRegistry::builtin();
    assert_eq!(reg.apply("charSwap", "(7)", "").unwrap(), "<T>");
}

#[test]
fn webpage_with_default_map_escapes_markup() {
    let reg = TransformRegistry::builtin();
    let out = reg.apply("toWebpage", "<a href=\"#\">hi</a>", "").unwrap();
    assert_eq!(out, "https://6t.lt?h=(a+href=*%23*)hi(/a)");
}

#[test]
fn script_var_and_data_uri() {
    let reg = TransformRegistry::builtin();
    assert_eq!(reg.apply("toScriptVar", "one \"two\"", "").unwrap(), "let str = 'one \"two\"';");
    assert_eq!(reg.apply("toDataURI", "<b>#1</b>", "text/html").unwrap(), "data:text/html,%3Cb%3E%231%3C/b%3E");
}

#[test]
fn user_pipeline_is_registered_last() {
    let mut reg = TransformRegistry::builtin();
    let params = TextToolParams {
        function: Some("noIndentation | toWebpage:$arg".into()),
        function_name: None,
        default_arg: Some("ab".into()),
        arg_hint: None,
    };
    reg.register_user_function(&params).unwrap();
    let entry = reg.get(USER_FUNCTION_KEY).unwrap();
    assert_eq!(entry.label, "Custom Function");
    assert_eq!(entry.default_arg, "ab");
    assert_eq!(entry.arg_hint, "");
    assert_eq!(reg.initial_key(), Some(USER_FUNCTION_KEY));
    assert_eq!(reg.apply(USER_FUNCTION_KEY, "a\nb", "").unwrap(), "https://6t.lt?m=ab&h=ba");
}

#[test]
fn user_pipeline_cannot_reference_itself() {
    let mut reg = TransformRegistry::builtin();
    let params = TextToolParams { function: Some("userFunction".into()), ..Default::default() };
    assert!(matches!(reg.register_user_function(&params), Err(TransformError::InvalidPipeline { .. })));
    assert!(!reg.contains(USER_FUNCTION_KEY));
    assert_eq!(reg.len(), 8);
}

#[test]
fn text_tool_round() {
    let mut tool = TextTool::from_query("?f=toQueryValue%7CtoQueryValue&f-name=Twice");
    assert!(tool.load_error().is_none());
    assert_eq!(tool.initial_key(), Some(USER_FUNCTION_KEY));
    let key = tool.initial_key().unwrap().to_string();
    let out = tool.apply(&key, "").unwrap().to_string();
    assert_eq!(tool.input, DEFAULT_SUBJECT);
    assert!(out.starts_with("%253Cp%2Bstyle"));
    tool.move_output_to_input();
    assert_eq!(tool.input, out);
    assert!(matches!(tool.apply("missing", ""), Err(TransformError::UnknownTransform(_))));
}
