use datavault_core::storage::{FieldKind, PersonalData, RecordStore, SqliteRecordStore};
use datavault_core::{RecordService, VaultError};
use tempfile::tempdir;

fn in_memory_service() -> RecordService<SqliteRecordStore> {
    RecordService::new(SqliteRecordStore::open_in_memory().expect("open should succeed"))
}

fn alice() -> PersonalData {
    PersonalData::new("Alice", "1234567890123456", "Jl. Merdeka", "0811111111")
}

#[test]
fn test_correct_passphrase_returns_original_fields() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "secret").expect("insert should succeed");

    let record = service.find(id).unwrap().expect("record should exist");
    let decrypted = service
        .decrypt_record(&record, "secret")
        .expect("decrypt should succeed");

    assert_eq!(decrypted, alice());
}

#[test]
fn test_wrong_passphrase_fails() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "secret").unwrap();
    let record = service.find(id).unwrap().unwrap();

    let result = service.decrypt_record(&record, "wrong");
    assert!(matches!(result, Err(VaultError::WrongKeyOrCorrupt { .. })));
}

#[test]
fn test_update_replaces_fields() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "secret").unwrap();

    let updated = PersonalData::new("Alice B.", "6543210987654321", "Jl. Thamrin", "0822222222");
    service.update(id, &updated, "secret").expect("update should succeed");

    let record = service.find(id).unwrap().unwrap();
    let decrypted = service.decrypt_record(&record, "secret").unwrap();
    assert_eq!(decrypted, updated);
    assert_ne!(decrypted, alice());
}

#[test]
fn test_truncated_field_fails_without_panic() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "secret").unwrap();

    let mut record = service.find(id).unwrap().unwrap();
    for cut in 1..=4 {
        let original = service.find(id).unwrap().unwrap().fields.name;
        record.fields.name = original[..original.len() - cut].to_string();

        let result = service.decrypt_record(&record, "secret");
        match result {
            Err(VaultError::WrongKeyOrCorrupt { field, .. }) => {
                assert_eq!(field, FieldKind::Name)
            }
            other => panic!("cut {}: expected WrongKeyOrCorrupt, got {:?}", cut, other),
        }
    }
}

#[test]
fn test_update_after_delete_not_found() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "secret").unwrap();
    service.delete(id).expect("delete should succeed");

    let result = service.update(id, &alice(), "secret");
    assert!(matches!(result, Err(VaultError::NotFound(missing)) if missing == id));

    let result = service.delete(id);
    assert!(matches!(result, Err(VaultError::NotFound(_))));
}

#[test]
fn test_round_trip_assorted_text() {
    let mut service = in_memory_service();
    let samples = [
        PersonalData::new("", "", "", ""),
        PersonalData::new("A", "0", "x", "+62"),
        PersonalData::new(
            "Nama Yang Sangat Panjang Sekali",
            "3171234567890001",
            "Jl. Jend. Sudirman Kav. 52-53\nJakarta Selatan 12190",
            "+62 811-1111-1111",
        ),
        PersonalData::new("Zoë Ångström", "\u{1F4B3}", "東京都", "sixteen-bytes!!!"),
    ];

    for (i, data) in samples.iter().enumerate() {
        let passphrase = format!("passphrase-{}", i);
        let id = service.insert(data, &passphrase).unwrap();
        let record = service.find(id).unwrap().unwrap();
        assert_eq!(&service.decrypt_record(&record, &passphrase).unwrap(), data);
    }
}

#[test]
fn test_wrong_passphrase_sample_all_fail() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "correct horse").unwrap();
    let record = service.find(id).unwrap().unwrap();

    for i in 0..50 {
        let wrong = format!("wrong-{}", i);
        let result = service.decrypt_record(&record, &wrong);
        assert!(
            result.as_ref().is_err_and(|e| e.is_wrong_key_or_corrupt()),
            "passphrase {} should not decrypt",
            wrong
        );
    }
}

#[test]
fn test_same_input_encrypts_differently() {
    let mut service = in_memory_service();
    let first = service.insert(&alice(), "secret").unwrap();
    let second = service.insert(&alice(), "secret").unwrap();

    let first = service.find(first).unwrap().unwrap();
    let second = service.find(second).unwrap().unwrap();
    for kind in FieldKind::ALL {
        assert_ne!(first.fields.get(kind), second.fields.get(kind));
    }
}

#[test]
fn test_passphrases_equal_in_first_16_bytes_are_interchangeable() {
    let mut service = in_memory_service();
    let id = service.insert(&alice(), "0123456789abcdef-one").unwrap();
    let record = service.find(id).unwrap().unwrap();

    let decrypted = service
        .decrypt_record(&record, "0123456789abcdef-two")
        .expect("only the first 16 bytes form the key");
    assert_eq!(decrypted, alice());
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("vault.db");

    let id = {
        let mut service = RecordService::new(SqliteRecordStore::open(&path).unwrap());
        service.insert(&alice(), "secret").unwrap()
    };

    let service = RecordService::new(SqliteRecordStore::open(&path).unwrap());
    let records = service.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(service.decrypt_record(&records[0], "secret").unwrap(), alice());

    let meta = service.store().metadata().unwrap();
    assert_eq!(meta.format_version, "1");
}

#[test]
fn test_read_all_is_fresh_snapshot() {
    let mut service = in_memory_service();
    service.insert(&alice(), "secret").unwrap();
    let before = service.read_all().unwrap();

    service.insert(&alice(), "secret").unwrap();
    let after = service.read_all().unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
}
