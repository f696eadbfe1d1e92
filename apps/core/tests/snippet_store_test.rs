use snipkeep_core::model::Snippet;
use snipkeep_core::snippet_store::SnippetStore;

#[test]
fn persists_snippets_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippets.json");

    {
        let store = SnippetStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        store
            .replace_all(&[
                Snippet::new("1", "git status", &["git", "status"], ""),
                Snippet::new("2", "docker ps", &["docker"], "Running containers"),
            ])
            .unwrap();
    }

    let reopened = SnippetStore::new(&path).list();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened[1].description, "Running containers");
}

#[test]
fn reads_files_written_by_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippets.json");
    std::fs::write(
        &path,
        r#"[{"id":"1700000000000","command":"ls -la","keywords":["list","files"]}]"#,
    )
    .unwrap();

    let snippets = SnippetStore::new(&path).list();

    assert_eq!(snippets, vec![Snippet::new("1700000000000", "ls -la", &["list", "files"], "")]);
}

#[test]
fn wrong_json_shape_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snippets.json");
    std::fs::write(&path, r#"{"snippets": []}"#).unwrap();

    assert!(SnippetStore::new(&path).list().is_empty());
}

#[test]
fn replace_all_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnippetStore::new(dir.path().join("snippets.json"));
    store
        .replace_all(&[Snippet::new("1", "a", &["a"], "")])
        .unwrap();
    store.replace_all(&[]).unwrap();

    assert!(store.list().is_empty());
    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}
