use pic_relink::rewrite::rewrite_links;

fn mapping(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(o, t)| (o.to_string(), t.to_string()))
        .collect()
}

#[test]
fn empty_mapping_returns_text_unchanged() {
    let text = "a\nb\nc";
    assert_eq!(rewrite_links(text, &[]), "a\nb\nc");
}

#[test]
fn empty_mapping_preserves_trailing_newline() {
    let text = "a\nb\nc\n";
    assert_eq!(rewrite_links(text, &[]), "a\nb\nc\n");
}

#[test]
fn mapped_url_is_replaced_everywhere() {
    let text = "![](https://host/pic.png)\nsee https://host/pic.png again";
    let mapping = mapping(&[("https://host/pic.png", "https://img.example.com/blog/x.png")]);
    let rewritten = rewrite_links(text, &mapping);
    assert!(!rewritten.contains("https://host/pic.png"));
    assert_eq!(rewritten.matches("https://img.example.com/blog/x.png").count(), 2);
}

#[test]
fn unmapped_lines_are_left_untouched() {
    let text = "no links here\n![](https://host/a.png)\n";
    let mapping = mapping(&[("https://host/a.png", "https://img.example.com/blog/a.png")]);
    let rewritten = rewrite_links(text, &mapping);
    assert!(rewritten.starts_with("no links here\n"));
    assert!(rewritten.ends_with('\n'));
}

#[test]
fn identity_mapping_entry_changes_nothing() {
    // A fetch failure maps a link to itself; the document must come out
    // identical for that link.
    let text = "![](https://host/broken.gif)";
    let mapping = mapping(&[("https://host/broken.gif", "https://host/broken.gif")]);
    assert_eq!(rewrite_links(text, &mapping), text);
}

#[test]
fn multiple_mappings_apply_on_the_same_line() {
    let text = "![](https://host/a.png) ![](https://host/b.png)";
    let mapping = mapping(&[
        ("https://host/a.png", "https://img.example.com/blog/1.png"),
        ("https://host/b.png", "https://img.example.com/blog/2.png"),
    ]);
    assert_eq!(
        rewrite_links(text, &mapping),
        "![](https://img.example.com/blog/1.png) ![](https://img.example.com/blog/2.png)"
    );
}
