use treefs_core::{
    DEFAULT_MAX_DEPTH, EntryKind, MAX_DEPTH_LIMIT, Namespace, NamespaceConfig, NamespaceError,
    NodeId, NodeSnapshot, TreeStats,
};

fn nested_path(name: &str, depth: u32) -> String {
    (0..depth).map(|_| format!("/{name}")).collect()
}

#[test]
fn test_mkdir_then_path_exists() {
    let mut ns = Namespace::new();

    for path in ["/home/user/documents", "/a", "/x/y/z", "/deep/nested/structure/here"] {
        assert!(ns.mkdir(path), "mkdir({path}) failed");
        assert!(ns.path_exists(path), "{path} missing after mkdir");
    }

    // Intermediate directories are created as directories.
    assert!(ns.is_dir("/home"));
    assert!(ns.is_dir("/home/user"));
    assert!(ns.is_dir("/deep/nested/structure"));
}

#[test]
fn test_mkdir_existing_path_succeeds_without_duplicating() {
    let mut ns = Namespace::new();
    assert!(ns.mkdir("/a/b"));
    let before = ns.stats();

    assert!(ns.mkdir("/a/b"));
    assert!(ns.mkdir("/a"));
    assert!(ns.mkdir("/"));
    assert_eq!(ns.stats(), before);
}

#[test]
fn test_chdir_round_trips_through_current_path() {
    let mut ns = Namespace::new();
    ns.mkdir("/home/user/documents");

    assert!(ns.chdir("/home/user"));
    assert_eq!(ns.current_path(), "/home/user");

    assert!(ns.chdir("documents"));
    assert_eq!(ns.current_path(), "/home/user/documents");

    // Non-canonical spellings resolve to the canonical form.
    assert!(ns.chdir("//home/./user/../user//"));
    assert_eq!(ns.current_path(), "/home/user");
}

#[test]
fn test_empty_paths_fail() {
    let mut ns = Namespace::new();

    assert!(!ns.mkdir(""));
    assert!(!ns.create_file(""));
    assert!(!ns.chdir(""));
    assert!(!ns.path_exists(""));
    assert!(ns.get_files("").is_empty());

    assert_eq!(ns.try_mkdir(""), Err(NamespaceError::EmptyPath));
    assert_eq!(ns.try_create_file(""), Err(NamespaceError::EmptyPath));
    assert_eq!(ns.stats(), TreeStats::default());
}

#[test]
fn test_chdir_into_file_fails_and_keeps_current() {
    let mut ns = Namespace::new();
    ns.mkdir("/home/user");
    ns.chdir("/home/user");
    assert!(ns.create_file("test.txt"));

    assert!(!ns.chdir("test.txt"));
    assert!(!ns.chdir("/home/user/test.txt"));
    assert_eq!(ns.current_path(), "/home/user");

    assert_eq!(
        ns.try_chdir("test.txt"),
        Err(NamespaceError::not_a_directory("/home/user/test.txt"))
    );
}

#[test]
fn test_chdir_to_missing_path_fails() {
    let mut ns = Namespace::new();
    assert!(!ns.chdir("/nonexistent"));
    assert_eq!(ns.current_path(), "/");
    assert!(!ns.path_exists("/nonexistent"));
}

#[test]
fn test_wildcard_is_idempotent() {
    let mut ns = Namespace::new();
    for path in ["/ABC/test1/DC", "/ABC/test2/DC", "/ABC/direct/DC", "/ABC/another/DC"] {
        ns.mkdir(path);
    }

    let first = ns.get_files("/ABC/*/DC");
    let second = ns.get_files("/ABC/*/DC");
    assert_eq!(first, second);
    assert_eq!(
        first,
        ["/ABC/another/DC", "/ABC/direct/DC", "/ABC/test1/DC", "/ABC/test2/DC"]
    );
}

#[test]
fn test_wildcard_scenario() {
    let mut ns = Namespace::new();
    ns.mkdir("/a/b/DC");
    ns.mkdir("/a/c/DC");
    ns.mkdir("/a/d/DC");

    assert_eq!(ns.get_files("/a/*/DC"), ["/a/b/DC", "/a/c/DC", "/a/d/DC"]);
}

#[test]
fn test_wildcard_across_several_levels() {
    let mut ns = Namespace::new();
    ns.mkdir("/a/x/1");
    ns.mkdir("/a/x/2");
    ns.mkdir("/a/y/1");
    ns.mkdir("/a/z");

    assert_eq!(ns.get_files("/a/*/*"), ["/a/x/1", "/a/x/2", "/a/y/1"]);
    assert_eq!(ns.get_files("/*/*/1"), ["/a/x/1", "/a/y/1"]);
    assert_eq!(ns.get_files("/*"), ["/a"]);
}

#[test]
fn test_wildcard_excludes_files() {
    let mut ns = Namespace::new();
    ns.mkdir("/docs/guide");
    ns.create_file("/docs/readme.md");

    assert_eq!(ns.get_files("/docs/*"), ["/docs/guide"]);
    assert!(ns.get_files("/docs/readme.md").is_empty());
}

#[test]
fn test_wildcard_can_match_files_when_configured() {
    let config = NamespaceConfig::builder().match_files(true).build().unwrap();
    let mut ns = Namespace::with_config(config);
    ns.mkdir("/docs/guide");
    ns.create_file("/docs/readme.md");

    assert_eq!(ns.get_files("/docs/*"), ["/docs/guide", "/docs/readme.md"]);
    assert_eq!(ns.get_files("/docs/readme.md"), ["/docs/readme.md"]);
}

#[test]
fn test_relative_pattern_results_are_relative() {
    let mut ns = Namespace::new();
    ns.mkdir("/work/p1/src");
    ns.mkdir("/work/p2/src");
    ns.chdir("/work");

    assert_eq!(ns.get_files("*/src"), ["p1/src", "p2/src"]);
    assert_eq!(ns.get_files("./*"), ["p1", "p2"]);
}

#[test]
fn test_pattern_without_segments_matches_nothing() {
    let ns = Namespace::new();
    assert!(ns.get_files("/").is_empty());
    assert!(ns.get_files("///").is_empty());
}

#[test]
fn test_pattern_parent_at_root_stays_at_root() {
    let mut ns = Namespace::new();
    ns.mkdir("/a");
    assert_eq!(ns.get_files("/../a"), ["/a"]);
}

#[test]
fn test_relative_mkdir_and_parent_navigation() {
    let mut ns = Namespace::new();
    assert!(ns.mkdir("x/y"));
    assert!(ns.chdir("x/y"));
    assert!(ns.chdir(".."));
    assert_eq!(ns.current_path(), "/x");
}

#[test]
fn test_cannot_descend_into_file() {
    let mut ns = Namespace::new();
    assert!(ns.create_file("/f.txt"));
    assert!(!ns.mkdir("/f.txt/sub"));
    assert!(!ns.create_file("/f.txt/inner"));

    assert!(ns.is_file("/f.txt"));
    assert!(!ns.path_exists("/f.txt/sub"));
    assert_eq!(ns.stats().total_dirs, 0);
}

#[test]
fn test_dot_at_root() {
    let mut ns = Namespace::new();
    assert!(ns.chdir("/"));
    assert!(ns.chdir("."));
    assert_eq!(ns.current_path(), "/");
}

#[test]
fn test_parent_at_root() {
    let mut ns = Namespace::new();
    assert!(ns.chdir(".."));
    assert_eq!(ns.current_path(), "/");
    assert!(ns.chdir("../../.."));
    assert_eq!(ns.current_path(), "/");
}

#[test]
fn test_deep_navigation() {
    let mut ns = Namespace::new();
    ns.mkdir("/deep/nested/structure/here");

    assert!(ns.chdir("/deep/nested/structure/here"));
    assert!(ns.chdir("../.."));
    assert_eq!(ns.current_path(), "/deep/nested");
}

#[test]
fn test_create_file_rules() {
    let mut ns = Namespace::new();
    ns.mkdir("/home/user");
    ns.chdir("/home/user");

    assert!(ns.create_file("test.txt"));
    assert!(ns.create_file("readme.md"));
    assert_eq!(ns.list_current(), ["readme.md", "test.txt"]);

    // Same name twice, whether file or directory, collides.
    assert!(!ns.create_file("test.txt"));
    assert!(ns.mkdir("docs"));
    assert!(!ns.create_file("docs"));

    // Parents are never created for files.
    assert!(!ns.create_file("/missing/file.txt"));
    assert!(!ns.path_exists("/missing"));

    assert_eq!(
        ns.try_create_file("/home/user/test.txt"),
        Err(NamespaceError::AlreadyExists {
            path: "/home/user/test.txt".into()
        })
    );
}

#[test]
fn test_create_file_rejects_bad_leaf_names() {
    let mut ns = Namespace::new();
    ns.mkdir("/a");

    for path in ["/a/", "/", "/a/.", "/a/..", "/a/*"] {
        assert!(!ns.create_file(path), "create_file({path}) should fail");
    }
    assert_eq!(ns.list_current(), ["a"]);
}

#[test]
fn test_create_file_relative_to_current() {
    let mut ns = Namespace::new();
    ns.mkdir("/a/b");
    ns.chdir("/a");

    assert!(ns.create_file("b/one.txt"));
    assert!(ns.create_file("./two.txt"));
    assert!(ns.create_file("../three.txt"));
    assert!(ns.create_file("four.txt"));

    assert!(ns.is_file("/a/b/one.txt"));
    assert!(ns.is_file("/a/two.txt"));
    assert!(ns.is_file("/three.txt"));
    assert!(ns.is_file("/a/four.txt"));
    assert!(!ns.path_exists("/four.txt"));
}

#[test]
fn test_list_current_is_sorted() {
    let mut ns = Namespace::new();
    ns.mkdir("/home/user/documents");
    ns.mkdir("temp");
    ns.mkdir("projects/cpp");
    ns.mkdir("projects/python");

    assert_eq!(ns.list_current(), ["home", "projects", "temp"]);
}

#[test]
fn test_stats() {
    let mut ns = Namespace::new();
    ns.mkdir("/a/b/c");
    ns.create_file("/a/b/c/f.txt");
    ns.create_file("/g.txt");

    let stats = ns.stats();
    assert_eq!(stats.total_dirs, 3);
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.max_depth, 4);
}

#[test]
fn test_snapshot_serializes_tree() {
    let mut ns = Namespace::new();
    ns.mkdir("/b");
    ns.mkdir("/a");
    ns.create_file("/a/note.txt");

    let snapshot = ns.snapshot();
    assert_eq!(snapshot.name, "/");
    assert_eq!(snapshot.kind, EntryKind::Directory);
    let names: Vec<_> = snapshot.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"kind\":\"file\""));

    let restored: NodeSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_resolve_and_node_access() {
    let mut ns = Namespace::new();
    let created = ns.try_mkdir("/srv/data").unwrap();

    assert_eq!(ns.resolve("/srv/data"), Some(created));
    assert_eq!(ns.resolve("/srv/missing"), None);

    let node = ns.node(created).unwrap();
    assert_eq!(node.name, "data");
    assert!(node.is_dir());
    assert_eq!(ns.path_of(created).as_deref(), Some("/srv/data"));
    assert_eq!(ns.path_of(NodeId::new(9_999)), None);
    assert!(ns.node(NodeId::new(9_999)).is_none());
}

#[test]
fn test_long_dot_pattern_returns_root() {
    let ns = Namespace::new();
    let pattern = format!("/{}", vec!["."; 10_000].join("/"));
    assert_eq!(ns.get_files(&pattern), ["/"]);
}

#[test]
fn test_long_parent_path_resolves() {
    let mut ns = Namespace::new();
    ns.mkdir("/a");
    let path = format!("/a/{}/a", vec![".."; 10_000].join("/"));

    assert!(ns.path_exists(&path));
    assert!(ns.mkdir(&path));
    assert_eq!(ns.get_files(&path), ["/a/a"]);
}

#[test]
fn test_default_depth_limit_bounds_tree() {
    let mut ns = Namespace::new();
    let deepest = nested_path("d", DEFAULT_MAX_DEPTH);

    assert!(ns.mkdir(&deepest));
    assert_eq!(ns.stats().max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(
        ns.try_mkdir(&format!("{deepest}/d")),
        Err(NamespaceError::DepthExceeded {
            path: format!("{deepest}/d"),
            max_depth: DEFAULT_MAX_DEPTH,
        })
    );
    assert!(!ns.create_file(&format!("{deepest}/f.txt")));

    // A path far longer than the limit fails cleanly, keeping what fit.
    assert!(!ns.mkdir(&nested_path("e", 5_000)));
    assert!(ns.path_exists(&nested_path("e", DEFAULT_MAX_DEPTH)));
}

#[test]
fn test_snapshot_of_deepest_tree() {
    let config = NamespaceConfig::builder()
        .max_depth(MAX_DEPTH_LIMIT)
        .build()
        .unwrap();
    let mut ns = Namespace::with_config(config);
    assert!(ns.mkdir(&nested_path("d", MAX_DEPTH_LIMIT)));
    assert!(!ns.mkdir(&nested_path("d", MAX_DEPTH_LIMIT + 1)));

    let snapshot = ns.snapshot();
    let mut levels = 0;
    let mut node = &snapshot;
    while let Some(child) = node.children.first() {
        levels += 1;
        node = child;
    }
    assert_eq!(levels, MAX_DEPTH_LIMIT);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.starts_with(r#"{"name":"/""#));
}
