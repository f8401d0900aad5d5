use super::*;

#[test]
fn test_rewrite_replaces_double_quoted_value() {
    let decl = Declaration::new("__version__").unwrap();
    let content = "__version__ = \"0.9.0\"\nOTHER = 1\n";

    let rewrite = decl.rewrite(content, "2.3.4");

    assert_eq!(
        rewrite,
        Rewrite::Replaced {
            content: "__version__ = \"2.3.4\"\nOTHER = 1\n".to_owned(),
            previous: "0.9.0".to_owned(),
        },
    );
}

#[test]
fn test_rewrite_normalizes_single_quotes_to_double() {
    let decl = Declaration::new("__version__").unwrap();
    let content = "__version__ = '0.9.0'\n";

    let rewrite = decl.rewrite(content, "1.0.0");

    assert_eq!(
        rewrite,
        Rewrite::Replaced {
            content: "__version__ = \"1.0.0\"\n".to_owned(),
            previous: "0.9.0".to_owned(),
        },
    );
}

#[test]
fn test_rewrite_keeps_other_lines() {
    let decl = Declaration::new("version").unwrap();
    let content = "# header\nversion = \"1\"\ntrailer = \"x\"\n";

    match decl.rewrite(content, "2") {
        Rewrite::Replaced { content, .. } => {
            assert_eq!(content, "# header\nversion = \"2\"\ntrailer = \"x\"\n");
        }
        r => panic!("unexpected rewrite result: {:?}", r),
    }
}

#[test]
fn test_rewrite_replaces_first_line_only() {
    let decl = Declaration::new("version").unwrap();
    let content = "version = \"1\"\nversion = \"1\"\n";

    match decl.rewrite(content, "2") {
        Rewrite::Replaced { content, .. } => {
            assert_eq!(content, "version = \"2\"\nversion = \"1\"\n");
        }
        r => panic!("unexpected rewrite result: {:?}", r),
    }
}

#[test]
fn test_rewrite_returns_not_found_without_declaration() {
    let decl = Declaration::new("__version__").unwrap();
    let content = "OTHER = 1\n";

    assert_eq!(decl.rewrite(content, "2.3.4"), Rewrite::NotFound);
}

#[test]
fn test_rewrite_requires_line_anchored_declaration() {
    let decl = Declaration::new("__version__").unwrap();

    // 行頭以外から始まる行や、閉じ引用符の後に続きがある行は対象にしない。
    assert_eq!(
        decl.rewrite("x __version__ = \"1\"\n", "2"),
        Rewrite::NotFound,
    );
    assert_eq!(
        decl.rewrite("__version__ = \"1\" # note\n", "2"),
        Rewrite::NotFound,
    );
}

#[test]
fn test_rewrite_does_not_expand_version_text() {
    let decl = Declaration::new("version").unwrap();

    match decl.rewrite("version = \"1\"\n", "2$0") {
        Rewrite::Replaced { content, .. } => {
            assert_eq!(content, "version = \"2$0\"\n");
        }
        r => panic!("unexpected rewrite result: {:?}", r),
    }
}

#[test]
fn test_find_returns_first_declared_value() {
    let decl = Declaration::new("__version__").unwrap();

    assert_eq!(decl.find("__version__ = \"0.9.0\"\n"), Some("0.9.0"));
    assert_eq!(decl.find("__version__ = '0.9.0'\n"), Some("0.9.0"));
    assert_eq!(decl.find("OTHER = 1\n"), None);
}

#[test]
fn test_new_escapes_meta_characters_in_name() {
    let decl = Declaration::new("my.version").unwrap();

    // `.`は任意の一文字ではなく字句として扱われる。
    assert_eq!(decl.find("myxversion = \"1\"\n"), None);
    assert_eq!(decl.find("my.version = \"1\"\n"), Some("1"));
}

#[test]
fn test_new_fails_with_empty_name() {
    assert!(Declaration::new("").is_err());
}
