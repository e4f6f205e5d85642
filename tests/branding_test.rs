use std::fs;

use serde_json::json;
use stack_params::{
    BrandingLoader, ContextMap, FileBrandingLoader, OverrideTable, StackParamsError, resolve,
};

#[test]
fn file_loader_reads_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("branding.json");
    fs::write(&path, r#"{"logoPath": "logo.svg", "title": "GenU"}"#).unwrap();

    let loader = FileBrandingLoader::new(&path);
    assert_eq!(loader.path(), path.as_path());
    assert_eq!(
        loader.load().unwrap(),
        json!({"logoPath": "logo.svg", "title": "GenU"})
    );
}

#[test]
fn file_loader_missing_file_is_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FileBrandingLoader::new(dir.path().join("branding.json"));
    assert_eq!(loader.load().unwrap(), json!({}));
}

#[test]
fn file_loader_malformed_json_is_branding_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("branding.json");
    fs::write(&path, "{ not json").unwrap();

    let err = FileBrandingLoader::new(&path).load().unwrap_err();
    assert!(matches!(err, StackParamsError::Branding(_)));
}

#[test]
fn resolve_attaches_file_branding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("branding.json");
    fs::write(&path, r#"["opaque", 1]"#).unwrap();

    let params = resolve(
        &ContextMap::new(),
        &OverrideTable::new(),
        &FileBrandingLoader::new(&path),
    )
    .unwrap();
    assert_eq!(params.branding_config, json!(["opaque", 1]));
}

#[test]
fn trait_object_loader() {
    let loader: Box<dyn BrandingLoader> =
        Box::new(FileBrandingLoader::new("/nonexistent/branding.json"));
    let params = resolve(&ContextMap::new(), &OverrideTable::new(), loader.as_ref()).unwrap();
    assert_eq!(params.branding_config, json!({}));
}
