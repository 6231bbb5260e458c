use std::fs;

use diary_core::{DiaryError, FileKeyStore, KeyBundle, KeySession, KeyStore};
use tempfile::tempdir;

#[test]
fn test_generate_persists_and_restores() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("diary").join("keys.json");

    let fingerprint = {
        let mut session = KeySession::new(FileKeyStore::new(&path));
        let pair = session.generate().expect("generate should succeed");
        pair.public().fingerprint()
    };
    assert!(path.exists());

    let session = KeySession::open(FileKeyStore::new(&path)).expect("open should succeed");
    assert!(session.has_keys());
    assert_eq!(session.keys().unwrap().public().fingerprint(), fingerprint);

    let sealed = session.encrypt(b"remember this").unwrap();
    assert_eq!(session.decrypt(&sealed).unwrap(), b"remember this");
}

#[cfg(unix)]
#[test]
fn test_key_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.json");
    let mut session = KeySession::new(FileKeyStore::new(&path));
    session.generate().unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_export_import_moves_keys_between_stores() {
    let dir = tempdir().unwrap();
    let mut laptop = KeySession::new(FileKeyStore::new(dir.path().join("laptop.json")));
    laptop.generate().unwrap();
    let sealed = laptop.encrypt(b"written on the laptop").unwrap();

    let exported = laptop.export_bundle().unwrap().to_json().unwrap();
    let export_path = dir.path().join("diary-keys.json");
    fs::write(&export_path, exported.as_bytes()).unwrap();

    let bundle = KeyBundle::from_json(&fs::read_to_string(&export_path).unwrap()).unwrap();
    let mut desktop = KeySession::new(FileKeyStore::new(dir.path().join("desktop.json")));
    desktop.import_bundle(&bundle).unwrap();

    assert_eq!(desktop.decrypt(&sealed).unwrap(), b"written on the laptop");
    assert_eq!(desktop.export().unwrap().0, laptop.export().unwrap().0);
}

#[test]
fn test_failed_import_keeps_previous_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.json");
    let mut session = KeySession::new(FileKeyStore::new(&path));
    session.generate().unwrap();
    let (public, private) = session.export().unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let result = session.import_text(&public, "bm90IGEga2V5");
    assert!(matches!(result, Err(DiaryError::InvalidKeyFormat(_))));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(session.export().unwrap().0, public);
    assert_eq!(*session.export().unwrap().1, *private);
}

#[test]
fn test_logout_clears_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.json");
    let mut session = KeySession::new(FileKeyStore::new(&path));
    session.generate().unwrap();
    let sealed = session.encrypt(b"gone after logout").unwrap();

    session.logout().unwrap();

    assert!(!session.has_keys());
    assert!(!path.exists());
    assert!(session.store().load().unwrap().is_none());
    assert!(matches!(session.decrypt(&sealed), Err(DiaryError::NoKeyPair)));
}

#[test]
fn test_restore_reports_corrupt_key_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.json");
    fs::write(&path, r#"{"publicKey": "", "privateKey": ""}"#).unwrap();

    let result = KeySession::open(FileKeyStore::new(&path));
    assert!(matches!(result, Err(DiaryError::InvalidKeyFormat(_))));
}

#[test]
fn test_boxed_store_is_usable() {
    let dir = tempdir().unwrap();
    let store: Box<dyn KeyStore> = Box::new(FileKeyStore::new(dir.path().join("keys.json")));
    let mut session = KeySession::new(store);
    session.generate().unwrap();
    assert!(session.store().load().unwrap().is_some());
}
