//! Edge case and error handling tests for lstree

#![cfg(unix)]


use harness::{TestTree, run_lstree, tree_lines};
use std::fs;
use std::os::unix::fs::PermissionsExt;

// ============================================================================
// Entry Types
// ============================================================================

#[test]
fn test_symlink_to_directory_not_descended() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.txt", "");
    tree.add_symlink("realdir", "linkdir");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["linkdir", "realdir", "\tfile.txt"]);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "");
    tree.add_symlink("..", "subdir/parent");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success, "lstree should not hang on parent symlink");
    assert_eq!(tree_lines(&stdout), vec!["subdir", "\tfile.txt", "\tparent"]);
}

#[test]
fn test_symlinks_are_cyan() {
    let tree = TestTree::new();
    tree.add_file("target.txt", "");
    tree.add_symlink("target.txt", "link.txt");
    tree.add_symlink("nonexistent", "broken");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("\x1b[36mlink.txt\n\x1b[0m"), "{:?}", stdout);
    assert!(stdout.contains("\x1b[36mbroken\n\x1b[0m"), "{:?}", stdout);
    assert!(stdout.contains("\x1b[32mtarget.txt\n\x1b[0m"), "{:?}", stdout);
}

#[test]
fn test_named_pipe_is_magenta() {
    let tree = TestTree::new();
    tree.add_fifo("pipe");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[]);
    assert!(success, "listing must not open the pipe");
    assert!(stdout.contains("\x1b[35mpipe\n\x1b[0m"), "{:?}", stdout);
}

#[test]
fn test_socket_is_white() {
    let tree = TestTree::new();
    let _listener = std::os::unix::net::UnixListener::bind(tree.path().join("sock")).unwrap();

    let (stdout, _stderr, success) = run_lstree(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("\x1b[37msock\n\x1b[0m"), "{:?}", stdout);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_hidden_files_are_listed_and_sorted_first() {
    let tree = TestTree::new();
    tree.add_file("visible.txt", "");
    tree.add_file(".hidden", "");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec![".hidden", "visible.txt"]);
}

#[test]
fn test_uppercase_sorts_before_lowercase() {
    let tree = TestTree::new();
    tree.add_file("apple", "");
    tree.add_file("Banana", "");
    tree.add_file("cherry", "");
    tree.add_file("Apple", "");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["Apple", "Banana", "apple", "cherry"]);
}

#[test]
fn test_numeric_names_sort_bytewise() {
    let tree = TestTree::new();
    for name in ["10", "9", "1", "100"] {
        tree.add_file(name, "");
    }

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["1", "10", "100", "9"]);
}

#[test]
fn test_names_with_spaces_and_unicode() {
    let tree = TestTree::new();
    tree.add_file("with space.txt", "");
    tree.add_file("日本語.txt", "");
    tree.add_file("émoji 🍎.txt", "");

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["with space.txt", "émoji 🍎.txt", "日本語.txt"]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unreadable_directory_keeps_siblings() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");
    let locked = tree.add_dir("b_locked");
    tree.add_file("b_locked/secret.txt", "");
    tree.add_file("c_open/visible.txt", "");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Privileged user, permissions are not enforced
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "unreadable subdirectories are not fatal");
    assert_eq!(
        tree_lines(&stdout),
        vec!["a.txt", "b_locked", "c_open", "\tvisible.txt"]
    );
    assert!(!stdout.contains("secret.txt"));
    assert!(stderr.contains("b_locked"), "stderr: {}", stderr);
}

#[test]
fn test_path_is_a_file() {
    let tree = TestTree::new();
    let file = tree.add_file("plain.txt", "content");

    let (stdout, stderr, success) = run_lstree(
        tree.path(),
        &["-p", file.to_str().unwrap(), "--color", "never"],
    );
    assert!(success);
    assert!(tree_lines(&stdout).is_empty());
    assert!(stderr.contains("cannot open directory"), "stderr: {}", stderr);
}

#[test]
fn test_empty_directory_prints_banner_only() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_lstree(tree.path(), &["--color", "never"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stderr.is_empty(), "stderr: {}", stderr);
}

#[test]
fn test_trailing_separator_in_path() {
    let tree = TestTree::new();
    tree.add_file("sub/inner.txt", "");
    let path = format!("{}/", tree.path().display());

    let (stdout, _stderr, success) = run_lstree(tree.path(), &["-p", &path, "--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["sub", "\tinner.txt"]);
}

#[test]
fn test_large_recursion_limit_on_shallow_tree() {
    let tree = TestTree::new();
    tree.add_file("a/b.txt", "");

    let (stdout, _stderr, success) =
        run_lstree(tree.path(), &["-m", "1000000", "--color", "never"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["a", "\tb.txt"]);
}
