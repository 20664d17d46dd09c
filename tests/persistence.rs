use std::fs;
use tempfile::TempDir;
use threadz::api::ThreadzApi;
use threadz::store::fs::{FileStore, COUNTERS_FILENAME, STARS_FILENAME, TREE_FILENAME};

fn open(dir: &TempDir) -> ThreadzApi<FileStore> {
    let root = dir.path().to_path_buf();
    ThreadzApi::new(FileStore::new(root.clone()), root)
}

#[test]
fn test_round_trip_preserves_tree() {
    let dir = TempDir::new().unwrap();
    let expected = {
        let mut api = open(&dir);
        api.post_comment("A").unwrap();
        api.post_comment("B").unwrap();
        api.post_reply("1", "A1").unwrap();
        api.post_reply("1", "A2").unwrap();
        api.post_reply("1.2", "A2a").unwrap();
        api.delete_comments(&["1.1"]).unwrap();
        api.board().tree.snapshot()
    };

    let api = open(&dir);
    assert_eq!(api.board().tree.snapshot(), expected);
    assert!(api.load_warnings().is_empty());
}

#[test]
fn test_blob_shapes_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.post_comment("A").unwrap();
    api.post_reply("1", "B").unwrap();
    api.toggle_stars(&["1"]).unwrap();

    let tree: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(TREE_FILENAME)).unwrap())
            .unwrap();
    let first = &tree[0];
    assert_eq!(first["id"], "1");
    assert_eq!(first["text"], "A");
    assert!(first["createdAt"].is_i64());
    assert_eq!(first["children"][0]["id"], "1.1");

    let stars: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(STARS_FILENAME)).unwrap())
            .unwrap();
    assert_eq!(stars, serde_json::json!({"1": true}));

    let counters: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(COUNTERS_FILENAME)).unwrap())
            .unwrap();
    assert_eq!(counters, serde_json::json!({"": 1, "1": 1}));
}

#[test]
fn test_counters_prevent_reuse_after_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.post_comment("A").unwrap();
        api.post_comment("B").unwrap();
        api.delete_comments(&["2"]).unwrap();
    }

    let mut api = open(&dir);
    let result = api.post_comment("C").unwrap();
    assert_eq!(result.affected_comments[0].id.to_string(), "3");
}

#[test]
fn test_loads_legacy_blobs() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(TREE_FILENAME),
        r#"[{"id": 2, "text": "new", "timestamp": 1700000000000, "isStarred": false, "replies": []},
            {"id": 1, "text": "old", "timestamp": 1690000000000, "isStarred": false,
             "replies": [{"id": "1.1", "text": "re", "timestamp": 1695000000000, "isStarred": false, "replies": []}]}]"#,
    )
    .unwrap();
    fs::write(dir.path().join(STARS_FILENAME), r#"{"1.1": true, "2": false}"#).unwrap();

    let mut api = open(&dir);
    assert_eq!(api.board().tree.len(), 3);
    assert!(api.is_starred("1.1").unwrap());
    assert!(!api.is_starred("2").unwrap());

    let reply = api.post_reply("1", "again").unwrap();
    assert_eq!(reply.affected_comments[0].id.to_string(), "1.2");
}

#[test]
fn test_star_reservation_survives_unstar_and_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.toggle_stars(&["2"]).unwrap();
        api.toggle_stars(&["2"]).unwrap();
    }

    let counters: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(COUNTERS_FILENAME)).unwrap())
            .unwrap();
    assert_eq!(counters, serde_json::json!({"": 2}));

    let mut api = open(&dir);
    let result = api.post_comment("A").unwrap();
    assert_eq!(result.affected_comments[0].id.to_string(), "3");
}
