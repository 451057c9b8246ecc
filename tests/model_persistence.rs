//! Saved-model round-trips through the filesystem.

use qroute::cli::config::NetworkDocument;
use qroute::{SavedModel, TrainerConfig, train};
use tempfile::tempdir;

#[test]
fn model_file_roundtrip_preserves_routes() {
    let (network, goal) = NetworkDocument::demo().into_network().unwrap();
    let config = TrainerConfig::new(0.75, 0.9, 10_000)
        .unwrap()
        .with_seed(42);
    let (model, report) = train(&network, &goal, &config).unwrap();
    let expected = model.route("A").unwrap();

    let tmp = tempdir().unwrap();
    let path = tmp.path().join("model.bin");
    SavedModel::new(model, report).save_to_file(&path).unwrap();

    let restored = SavedModel::load_from_file(&path)
        .unwrap()
        .into_model()
        .unwrap();

    assert_eq!(restored.goal_label(), "G");
    assert_eq!(restored.route("A").unwrap(), expected);
}

#[test]
fn loading_missing_file_reports_path() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("does_not_exist.bin");
    let err = SavedModel::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.bin"));
}
