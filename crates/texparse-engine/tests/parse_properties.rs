use pretty_assertions::assert_eq;
use rstest::rstest;
use texparse_engine::{
    Argument, ConstructKind, Element, IoError, Node, NodeKind, ParseError, ParseOptions, Parser,
    Text, parse, parse_file, parsing::snapshot,
};

fn kinds(nodes: &[Node]) -> Vec<NodeKind> {
    nodes.iter().map(Node::kind).collect()
}

#[rstest]
#[case::empty("")]
#[case::plain_text("just words\nacross lines")]
#[case::command("\\foo")]
#[case::command_with_args("\\foo[opt]{req}{more}")]
#[case::spaced_args("\\foo {a} [b] tail")]
#[case::trailing_space("\\foo bar")]
#[case::adjacent_commands("\\a\\b\\c")]
#[case::nested_commands("\\textbf{\\emph{x} y}")]
#[case::comment("%note\nrest")]
#[case::comment_inside_argument("\\foo{a%b\nc}")]
#[case::environment("\\begin{env}hello\\end{env}")]
#[case::nested_environments("\\begin{a}\\begin{b}x\\end{b}\\end{a}")]
#[case::environment_with_spaces("\\begin{a} x \\end{a} y")]
#[case::environment_extra_args("\\begin{tabular}{ll}a & b\\end{tabular}")]
#[case::mismatched_end("\\begin{a}\\end{b}\\end{a}")]
#[case::escaped_percent("100\\% sure")]
#[case::escaped_brace("\\{x\\}")]
#[case::double_backslash("a\\\\b")]
#[case::unicode("é \\emph{ü} ∑")]
#[case::stray_closer("x} y]")]
fn untouched_parse_round_trips(#[case] source: &str) {
    let root = parse(source).unwrap();
    snapshot::invariants(&root);
    assert_eq!(root.string(), source);
}

#[test]
fn command_argument_text_decomposition() {
    let root = parse("\\foo{bar}").unwrap();

    assert_eq!(kinds(root.children()), vec![NodeKind::Command]);
    let command = root.children()[0].as_command().unwrap();
    assert_eq!(command.name(), "foo");
    assert_eq!(command.arg_count(), 1);

    let arg = command.first_arg().unwrap();
    assert_eq!(kinds(arg.children()), vec![NodeKind::Text]);
    assert_eq!(arg.trailing_text(), Some("bar"));
}

#[test]
fn environment_holds_its_body() {
    let root = parse("\\begin{env}hello\\end{env}").unwrap();

    assert_eq!(kinds(root.children()), vec![NodeKind::Environment]);
    let env = root.children()[0].as_environment().unwrap();
    assert_eq!(env.name(), "env");
    assert_eq!(kinds(env.children()), vec![NodeKind::Text]);
    assert_eq!(env.children()[0].string(), "hello");
    assert_eq!(env.start_delimiter(), "\\begin{env}");
    assert_eq!(env.end_delimiter(), "\\end{env}");
}

#[test]
fn nested_environments() {
    let root = parse("\\begin{a}\\begin{b}x\\end{b}\\end{a}").unwrap();

    let outer = root.children()[0].as_environment().unwrap();
    assert_eq!(outer.name(), "a");
    assert_eq!(kinds(outer.children()), vec![NodeKind::Environment]);

    let inner = outer.children()[0].as_environment().unwrap();
    assert_eq!(inner.name(), "b");
    assert_eq!(inner.children()[0].string(), "x");
}

#[test]
fn environment_closes_only_on_matching_name() {
    let root = parse("\\begin{a}\\end{b}\\end{a}").unwrap();
    let env = root.find_env("a").unwrap();
    let stray = env.children()[0].as_command().unwrap();
    assert_eq!(stray.name(), "end");
    assert_eq!(env.end_delimiter(), "\\end{a}");
}

#[test]
fn text_after_environment_is_a_sibling() {
    let root = parse("\\begin{a}x\\end{a} after").unwrap();
    assert_eq!(
        kinds(root.children()),
        vec![NodeKind::Environment, NodeKind::Text]
    );
    assert_eq!(root.children()[1].string(), " after");
}

#[test]
fn leading_space_stays_in_environment_body() {
    let root = parse("\\begin{a} x\\end{a}").unwrap();
    let env = root.find_env("a").unwrap();
    assert_eq!(env.start_delimiter(), "\\begin{a}");
    assert_eq!(env.inner_string(), " x");
}

#[test]
fn comment_ends_at_line_break() {
    let root = parse("%note\nrest").unwrap();

    assert_eq!(
        kinds(root.children()),
        vec![NodeKind::Comment, NodeKind::Text]
    );
    let comment = root.children()[0].as_comment().unwrap();
    assert_eq!(comment.text(), "note");
    assert_eq!(comment.end_delimiter(), "\n");
    assert!(root.children()[1].string().starts_with("rest"));
}

#[test]
fn commands_inside_comments_are_kept_verbatim() {
    let root = parse("%\\foo{bar}\n").unwrap();
    let comment = root.children()[0].as_comment().unwrap();
    assert_eq!(comment.text(), "\\foo{bar}");
    assert!(root.find_command("foo").is_none());
}

#[test]
fn escaped_percent_is_not_a_comment() {
    let root = parse("\\%").unwrap();

    // An unnamed command followed by the escaped character as text.
    assert_eq!(
        kinds(root.children()),
        vec![NodeKind::Command, NodeKind::Text]
    );
    let command = root.children()[0].as_command().unwrap();
    assert_eq!(command.name(), "");
    assert_eq!(command.string(), "\\");
    assert_eq!(root.children()[1].as_text().map(Text::text), Some("%"));
    assert_eq!(root.string(), "\\%");
    insta::assert_snapshot!(root.repr(), @r"
    Root(
        Command(: ),
        t'%',
    )
    ");
}

#[test]
fn escape_check_looks_at_one_character_only() {
    // `\\` is a line break in TeX, but the following `%` still counts as
    // escaped.
    let root = parse("a\\\\%b\n").unwrap();
    assert!(
        root.children()
            .iter()
            .all(|n| n.kind() != NodeKind::Comment)
    );
}

#[test]
fn find_queries_stop_at_first_match() {
    let root = parse("\\x{\\x{y}} \\x").unwrap();

    let first = root.find_command("x").unwrap();
    assert_eq!(first.string(), "\\x{\\x{y}}");
    // The inner `\x` is inside a match and is not reported.
    assert_eq!(root.find_commands("x").len(), 2);
    assert_eq!(first.find_commands("x").len(), 1);
}

#[test]
fn find_commands_counts_nested_once() {
    let root = parse("\\x{\\x{y}}").unwrap();
    assert_eq!(root.find_commands("x").len(), 1);
}

#[test]
fn spans_use_byte_offsets_and_zero_based_lines() {
    let root = parse("é\n\\foo{b}\n").unwrap();
    let command = root.find_command("foo").unwrap();
    let span = command.span().unwrap();
    assert_eq!((span.start, span.end), (3, 10));
    assert_eq!((span.start_line, span.end_line), (1, 1));
    assert_eq!(root.length(), 11);
    assert_eq!(root.line_count(), 2);
}

#[test]
fn bare_argument_is_rejected() {
    let err = parse("{bare}").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedArgumentOpen {
            line: 0,
            position: 0
        }
    ));
}

#[test]
fn brace_inside_argument_is_rejected() {
    let err = parse("\\frac{a}{b{c}}").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedArgumentOpen { .. }));
}

#[rstest]
#[case::no_argument("\\begin x")]
#[case::empty_name("\\begin{}x")]
#[case::at_end_of_input("\\begin")]
fn malformed_environment_start(#[case] source: &str) {
    let err = parse(source).unwrap_err();
    assert!(matches!(err, ParseError::MalformedEnvironmentStart { .. }));
}

#[test]
fn unterminated_environment_is_reported() {
    let root = parse("\\begin{a} body").unwrap();
    assert!(root.children().is_empty());
    assert_eq!(root.diagnostics().len(), 1);
    assert_eq!(root.diagnostics()[0].kind, ConstructKind::Environment);
    insta::assert_snapshot!(
        root.diagnostics()[0].to_string(),
        @r"unterminated environment `\\begin{a}` opened on line 0 (byte 0)"
    );
}

#[test]
fn strict_mode_turns_leftovers_into_errors() {
    let parser = Parser::with_options(ParseOptions { strict_eof: true });
    let err = parser.parse("\\foo{unclosed").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnterminatedConstruct {
            kind: ConstructKind::Argument,
            position: 4,
            ..
        }
    ));
}

#[test]
fn replacing_a_parsed_argument() {
    let mut root = parse("\\foo{a} {b} tail").unwrap();
    let command = root.find_command_mut("foo").unwrap();
    assert_eq!(command.string(), "\\foo{a} {b}");

    command.replace_arg(1, Argument::braced(vec![Text::new("c").into()]));
    assert_eq!(command.string(), "\\foo{a}{c}");
    assert_eq!(command.inner_string(), "{a}{c}");
    // Repeated reads give the same answer.
    assert_eq!(command.string(), "\\foo{a}{c}");
    // Children agree with the serialization without another edit.
    assert_eq!(
        kinds(command.children()),
        vec![NodeKind::Argument, NodeKind::Argument]
    );
    let from_children: String = command.children().iter().map(Node::string).collect();
    assert_eq!(from_children, command.inner_string());

    assert_eq!(root.string(), "\\foo{a}{c} tail");
}

#[test]
fn editing_an_argument_in_place() {
    let mut root = parse("\\section{Old}").unwrap();
    let section = root.find_command_mut("section").unwrap();
    if let Some(arg) = section.arg_mut(0) {
        *arg.children_mut() = vec![Text::new("New").into()];
    }
    assert_eq!(root.string(), "\\section{New}");
}

#[test]
fn renaming_an_environment() {
    let mut root = parse("\\begin{itemize}\\item x\\end{itemize}").unwrap();
    root.find_env_mut("itemize").unwrap().set_name("enumerate");
    assert_eq!(
        root.string(),
        "\\begin{enumerate}\\item x\\end{enumerate}"
    );
}

#[test]
fn parse_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.tex");
    std::fs::write(&path, "\\chapter{One}\n").unwrap();

    let root = parse_file(&path).unwrap();
    assert_eq!(root.find_command("chapter").map(|c| c.name()), Some("chapter"));
    assert_eq!(root.string(), "\\chapter{One}\n");
}

#[test]
fn parse_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("missing.tex")).unwrap_err();
    assert!(matches!(err, ParseError::Io(IoError::NotFound(_))));
}
