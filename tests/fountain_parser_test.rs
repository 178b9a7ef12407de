use screenplay_rust::models::rich_text::{bold, italic, plain, styled};
use screenplay_rust::models::{Conf, Element, Style, TransitionPolicy};
use screenplay_rust::parser::fountain_parser::FountainParser;
use screenplay_rust::parser::parse_emphasis;
use screenplay_rust::{parse, parse_lines};
use std::fs;
use std::path::Path;

fn kinds(elements: &[Element]) -> Vec<&'static str> {
    elements.iter().map(Element::kind).collect()
}

fn plain_lines(element: &Element) -> Vec<String> {
    element.lines().iter().map(|line| line.plain_text()).collect()
}

#[test]
fn test_brick_and_steel_script() {
    let script_path = Path::new("tests/test_data/brick_and_steel.fountain");
    let script = fs::read_to_string(script_path).expect("无法读取测试文件");

    let result = FountainParser::new().parse(&script);
    let screenplay = &result.screenplay;

    // 标题页
    assert_eq!(
        result.properties.title_keys,
        vec!["Title", "Credit", "Author", "Draft date"]
    );
    assert_eq!(
        screenplay.rich_attribute("Title"),
        vec![
            styled("BRICK & STEEL", &[Style::Bold, Style::Underline]),
            styled("FULL RETIRED", &[Style::Bold, Style::Underline]),
        ]
    );
    assert_eq!(screenplay.rich_attribute("Author"), vec![plain("Stu Maschwitz")]);
    assert!(screenplay.rich_attribute("Contact").is_empty());

    // 正文
    assert_eq!(
        kinds(&screenplay.elements),
        vec![
            "section",
            "slug",
            "action",
            "dual_dialog",
            "transition",
            "slug",
            "action",
            "page_break",
            "slug",
            "action",
            "transition",
        ]
    );

    match &screenplay.elements[0] {
        Element::Section(section) => {
            assert_eq!(section.level, 1);
            assert_eq!(section.text, plain("ACT I"));
            assert_eq!(section.synopsis.as_deref(), Some("Brick and Steel retire."));
        }
        other => panic!("应为章节: {:?}", other),
    }

    match &screenplay.elements[1] {
        Element::Slug(slug) => {
            assert_eq!(slug.line, plain("EXT. BRICK'S PATIO - DAY"));
            assert_eq!(slug.scene_number, Some(plain("1")));
        }
        other => panic!("应为场景标题: {:?}", other),
    }

    match &screenplay.elements[3] {
        Element::DualDialog(dual) => {
            assert_eq!(dual.left.character, plain("STEEL (O.S.)"));
            assert_eq!(
                dual.left.blocks,
                vec![
                    (true, plain("(starting the engine)")),
                    (false, plain("So much for retirement!")),
                ]
            );
            assert_eq!(dual.right.character, plain("BRICK"));
            assert_eq!(dual.right.blocks, vec![(false, italic("Retirement?"))]);
        }
        other => panic!("应为双对白: {:?}", other),
    }

    match &screenplay.elements[6] {
        Element::Action(action) => {
            assert!(action.centered);
            assert_eq!(action.lines, vec![plain("THE END")]);
        }
        other => panic!("应为居中动作: {:?}", other),
    }

    assert_eq!(plain_lines(&screenplay.elements[8]), vec!["SNIPER SCOPE POV"]);
    assert_eq!(
        plain_lines(&screenplay.elements[9]),
        vec!["Nothing here.", ">FADE OUT."]
    );
    // 文末的过渡保留
    assert_eq!(plain_lines(&screenplay.elements[10]), vec!["FADE TO BLACK."]);

    // 注释被去掉，不会出现在任何元素里
    let all_text: Vec<String> = screenplay.iter().flat_map(plain_lines).collect();
    assert!(all_text.iter().all(|line| !line.contains("出场")));

    assert_eq!(result.properties.scene_count(), 3);
    assert_eq!(result.properties.dual_dialogue_count, 1);
    assert_eq!(result.properties.transition_count, 2);
    assert_eq!(result.properties.section_count, 1);
}

#[test]
fn test_emphasis_examples() {
    assert_eq!(parse_emphasis("plain"), plain("plain"));
    assert_eq!(parse_emphasis("**Hello**"), bold("Hello"));
    assert_eq!(
        parse_emphasis("*Swedish **style** rules*"),
        italic("Swedish ") + styled("style", &[Style::Bold, Style::Italic]) + italic(" rules")
    );
    assert_eq!(parse_emphasis("\\*hello*"), plain("*hello*"));
}

#[test]
fn test_slug_then_action() {
    let screenplay = parse_lines(
        ["INT. SOMEWHERE - DAY", "", "THIS IS JUST ACTION"],
        &Conf::default(),
    );
    assert_eq!(kinds(&screenplay.elements), vec!["slug", "action"]);
}

#[test]
fn test_dual_dialogue() {
    let screenplay = parse_lines(
        ["BRICK", "Fuck retirement.", "", "STEEL ^", "Fuck retirement!"],
        &Conf::default(),
    );
    assert_eq!(screenplay.len(), 1);
    match &screenplay.elements[0] {
        Element::DualDialog(dual) => {
            assert_eq!(dual.left.character, plain("BRICK"));
            assert_eq!(dual.right.character, plain("STEEL"));
        }
        other => panic!("应为双对白: {:?}", other),
    }
}

#[test]
fn test_dual_dialogue_disabled() {
    let conf = Conf {
        use_dual_dialogue: false,
        ..Conf::default()
    };
    let screenplay = parse_lines(["BRICK", "Hi.", "", "STEEL ^", "Hey."], &conf);
    assert_eq!(kinds(&screenplay.elements), vec!["dialog", "dialog"]);
}

#[test]
fn test_transition_not_followed_by_slug() {
    let screenplay = parse_lines(
        ["Some action.", "", "CUT TO:", "", "More action."],
        &Conf::default(),
    );
    assert_eq!(kinds(&screenplay.elements), vec!["action", "action", "action"]);
    assert_eq!(plain_lines(&screenplay.elements[1]), vec!["CUT TO:"]);

    let keep = Conf {
        transition_policy: TransitionPolicy::Keep,
        ..Conf::default()
    };
    let screenplay = parse_lines(["Some action.", "", "CUT TO:", "", "More action."], &keep);
    assert_eq!(kinds(&screenplay.elements), vec!["action", "transition", "action"]);
}

#[test]
fn test_title_page() {
    let screenplay = parse_lines(["Title:", "    FOO", "Author: Bar"], &Conf::default());
    assert_eq!(screenplay.title_page.get("Title").unwrap(), ["FOO"]);
    assert_eq!(screenplay.title_page.get("Author").unwrap(), ["Bar"]);
    assert!(screenplay.is_empty());

    let json = serde_json::to_value(&screenplay.title_page).unwrap();
    assert_eq!(json, serde_json::json!({"Title": ["FOO"], "Author": ["Bar"]}));
}

#[test]
fn test_action_and_transition_reparse_to_same_element() {
    let screenplay = parse(
        "EXT. ROOF - NIGHT\n\nWind.  Rain.\n  Steel looks down.\n\nSMASH CUT TO:\n\nINT. STAIRWELL - NIGHT\n",
        &Conf::default(),
    )
    .screenplay;

    for element in screenplay.iter() {
        if !matches!(element, Element::Action(_) | Element::Transition(_)) {
            continue;
        }
        let source = plain_lines(element).join("\n");
        let reparsed = parse(&source, &Conf::default()).screenplay;
        assert_eq!(reparsed.len(), 1, "重新解析: {:?}", source);
        assert_eq!(reparsed.elements[0].kind(), element.kind());
        assert_eq!(plain_lines(&reparsed.elements[0]), plain_lines(element));
    }
}

#[test]
fn test_every_paragraph_is_classified() {
    let lines = [
        "",
        "!!!",
        "",
        "lower case cue",
        "with dialog",
        "",
        "   ",
        "#",
        "",
        "=",
        "",
        ">",
        "",
        "@",
        "",
        "（",
    ];
    let screenplay = parse_lines(lines, &Conf::default());
    // 前面有两个空行的单行段落 "#" 被当作场景标题，"=" 作为提要挂在它上面
    assert_eq!(
        kinds(&screenplay.elements),
        vec!["action", "action", "slug", "action", "action", "action"]
    );
}

#[test]
fn test_parse_output_serializes() {
    let result = parse("INT. HOUSE - DAY\n\nBRICK\nHi.", &Conf::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["screenplay"]["elements"][0]["type"], "slug");
    assert_eq!(json["screenplay"]["elements"][1]["type"], "dialog");
    assert_eq!(json["properties"]["characters"]["BRICK"], 1);
}
