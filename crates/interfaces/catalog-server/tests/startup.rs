use camino::Utf8PathBuf;
use catalog_persistence::RedbProductStore;
use catalog_server::{config::Config, state::AppState};

#[tokio::test]
async fn corrupt_store_is_set_aside_before_serving() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let db_path = RedbProductStore::path_for_root(&data_dir);
    std::fs::write(&db_path, b"not a redb file").unwrap();

    let state = AppState::open(&Config { port: 0, data_dir }).expect("state opens");

    assert!(!db_path.exists(), "corrupt file moved before serving");
    let listed = state
        .with_store(|store, root| store.find_all(root))
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[test]
fn newer_store_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let db = redb::Database::create(RedbProductStore::path_for_root(&data_dir).as_std_path()).unwrap();
    let write_tx = db.begin_write().unwrap();
    {
        let mut meta = write_tx
            .open_table(redb::TableDefinition::<&str, &str>::new("meta"))
            .unwrap();
        meta.insert("format", "catalog-redb").unwrap();
        meta.insert("schema_version", "999").unwrap();
    }
    write_tx.commit().unwrap();
    drop(db);

    let err = AppState::open(&Config { port: 0, data_dir })
        .err()
        .expect("newer schema refused");
    assert!(err.to_string().contains("999"));
}
