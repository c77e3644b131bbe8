use super::*;

use Expectation::*;


fn parse(input: &str) -> Result<ParseTree, SyntaxError> {
    Parser::default().parse(input)
}

// (tag, contents) of the program's children, anchors excluded.
fn top_level(tree: &ParseTree) -> Vec<(Rule, String)> {
    tree.children()
        .iter()
        .filter(|child| !child.tag().is_structural())
        .map(|child| (*child.tag(), child.contents().clone()))
        .collect()
}

fn expected(err: &SyntaxError) -> Vec<Expectation> {
    match err.reason() {
        SyntaxErrorReason::Expected(expected) => expected.clone(),
        reason => panic!("unexpected reason {:?}", reason),
    }
}


#[test]
fn program_is_anchored() {
    let tree = parse("+ 1 2").unwrap();
    assert_eq!(*tree.tag(), Rule::Program);

    let children = tree.children();
    assert_eq!(*children[0].tag(), Rule::Anchor);
    assert_eq!(*children[children.len() - 1].tag(), Rule::Anchor);
    assert_eq!(*children[children.len() - 1].offset(), 5);
    assert_eq!(
        top_level(&tree),
        vec![
            (Rule::Symbol, "+".to_string()),
            (Rule::Integer, "1".to_string()),
            (Rule::Integer, "2".to_string()),
        ]
    );
}

#[test]
fn empty_input() {
    let tree = parse("").unwrap();
    assert_eq!(tree.children().len(), 2);

    let tree = parse(" \t ").unwrap();
    assert!(top_level(&tree).is_empty());
}

#[test]
fn literals() {
    let tree = parse("1 -4 2.5 -0.25 - % 33").unwrap();
    assert_eq!(
        top_level(&tree),
        vec![
            (Rule::Integer, "1".to_string()),
            (Rule::Integer, "-4".to_string()),
            (Rule::Float, "2.5".to_string()),
            (Rule::Float, "-0.25".to_string()),
            (Rule::Symbol, "-".to_string()),
            (Rule::Symbol, "%".to_string()),
            (Rule::Integer, "33".to_string()),
        ]
    );
}

#[test]
fn sexpr_structure() {
    let tree = parse("(+ 1 (* 2 3))").unwrap();
    let sexpr = &tree.children()[1];
    assert_eq!(*sexpr.tag(), Rule::SExpr);
    assert_eq!(*sexpr.offset(), 0);

    let tags: Vec<Rule> = sexpr.children().iter().map(|c| *c.tag()).collect();
    assert_eq!(
        tags,
        vec![
            Rule::Paren,
            Rule::Symbol,
            Rule::Integer,
            Rule::SExpr,
            Rule::Paren
        ]
    );
    assert_eq!(sexpr.children()[0].contents(), "(");
    assert_eq!(sexpr.children()[4].contents(), ")");
    assert_eq!(*sexpr.children()[3].offset(), 5);
}

#[test]
fn whitespace_is_insignificant() {
    let a = parse("(+ 1 2)").unwrap();
    let b = parse("  (  +\n1\t2 )  ").unwrap();
    let a_tags: Vec<Rule> = a.children()[1].children().iter().map(|c| *c.tag()).collect();
    let b_tags: Vec<Rule> = b.children()[1].children().iter().map(|c| *c.tag()).collect();
    assert_eq!(a_tags, b_tags);
}

#[test]
fn deep_nesting() {
    let input = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    let mut tree = parse(&input).unwrap();
    let mut depth = 0;
    loop {
        let mut children = tree.into_children();
        let next = children.drain(..).find(|c| *c.tag() == Rule::SExpr);
        match next {
            Some(next) => {
                tree = next;
                depth += 1;
            }
            None => break,
        }
    }
    assert_eq!(depth, 100);
}

#[test]
fn unbalanced_open() {
    let err = parse("(+ 1 2").unwrap_err();
    assert_eq!((*err.line(), *err.col()), (1, 7));
    assert_eq!(*err.found(), None);
    assert_eq!(expected(&err), vec![Float, Integer, Symbol, Open, Close]);
    assert_eq!(
        err.to_string(),
        "<stdin>:1:7: error: expected float, integer, symbol, '(' or ')' at end of input"
    );
}

#[test]
fn unbalanced_close() {
    let err = parse("(+ 1 2))").unwrap_err();
    assert_eq!(*err.offset(), 7);
    assert_eq!(*err.found(), Some(')'));
    assert_eq!(expected(&err), vec![Float, Integer, Symbol, Open, End]);
}

#[test]
fn unknown_operator() {
    let err = parse("(^ 1 2)").unwrap_err();
    assert_eq!(*err.offset(), 1);
    assert_eq!(*err.found(), Some('^'));
    assert_eq!(expected(&err), vec![Float, Integer, Symbol, Open, Close]);
    assert_eq!(
        err.to_string(),
        "<stdin>:1:2: error: expected float, integer, symbol, '(' or ')' at '^'"
    );
}

#[test]
fn incomplete_float() {
    // "5." is the integer 5 followed by a stray '.'.
    let err = parse("(+ 5. 1)").unwrap_err();
    assert_eq!(*err.offset(), 4);
    assert_eq!(*err.found(), Some('.'));
}

#[test]
fn position_tracks_lines() {
    let err = parse("(+ 1\n  x)").unwrap_err();
    assert_eq!((*err.line(), *err.col()), (2, 3));
    assert_eq!(*err.found(), Some('x'));
}

#[test]
fn depth_overflow() {
    let parser = Parser::new(4);
    assert!(parser.parse("((((1))))").is_ok());

    let err = parser.parse("(((((1)))))").unwrap_err();
    assert_eq!(*err.reason(), SyntaxErrorReason::DepthOverflow(4));
    assert_eq!(*err.offset(), 4);
    assert_eq!(
        err.to_string(),
        "<stdin>:1:5: error: nesting deeper than 4 levels"
    );
}

#[test]
fn parser_is_reusable() {
    let parser = Parser::default();
    assert!(parser.parse("(+").is_err());
    assert!(parser.parse("(+ 1 2)").is_ok());
    assert_eq!(*parser.max_depth(), MAX_DEPTH);
}

#[test]
fn display_outline() {
    let tree = parse("(- 5)").unwrap();
    assert_eq!(
        tree.to_string(),
        "program\n  anchor\n  sexpr\n    paren '('\n    symbol '-'\n    integer '5'\n    paren ')'\n  anchor\n"
    );
}
