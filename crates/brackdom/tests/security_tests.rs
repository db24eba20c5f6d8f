#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::indexing_slicing)]

use brackdom::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
use brackdom::{parse, parse_with_config, Config, ErrorKind, Result};

fn nested(depth: usize) -> String {
    format!("{}{}", "[n]".repeat(depth), "[/n]".repeat(depth))
}

#[test]
fn test_max_input_size() {
    let content = "x".repeat(DEFAULT_MAX_SIZE);
    let input = format!("[big]{content}[/big]");

    let result = parse(&input);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ErrorKind::MaxSizeExceeded { max: DEFAULT_MAX_SIZE })
    ));
}

#[test]
fn test_size_limit_ignores_surrounding_whitespace() -> Result<()> {
    let input = format!("{}[a][/a]{}", " ".repeat(64), "\n".repeat(64));
    let nodes = parse_with_config(&input, Config::new(0, 7))?;
    assert_eq!(nodes.len(), 1);
    Ok(())
}

#[test]
fn test_depth_at_limit_is_accepted() -> Result<()> {
    let depth = usize::from(DEFAULT_MAX_DEPTH);
    let nodes = parse(&nested(depth))?;
    assert_eq!(nodes.len(), 1);
    Ok(())
}

#[test]
fn test_depth_over_limit_is_rejected() {
    let depth = usize::from(DEFAULT_MAX_DEPTH) + 1;
    let err = parse(&nested(depth)).err();
    assert!(
        matches!(
            err.as_ref().map(|e| e.kind()),
            Some(ErrorKind::MaxDepthExceeded { .. })
        ),
        "Expected MaxDepthExceeded, got {err:?}"
    );
}

#[test]
fn test_depth_counts_open_tags_not_siblings() -> Result<()> {
    let input = format!("[a]{}[/a]", "[b][/b]".repeat(5000));
    let nodes = parse_with_config(&input, Config::new(2, 0))?;
    assert_eq!(nodes[0].children().len(), 5000);
    Ok(())
}

#[test]
fn test_unclosed_deep_document_fails_cleanly() {
    let input = "[n]".repeat(50_000);
    let err = parse_with_config(&input, Config::unlimited()).err();
    assert!(matches!(
        err.map(|e| e.kind().clone()),
        Some(ErrorKind::UnclosedTag { .. })
    ));
}
