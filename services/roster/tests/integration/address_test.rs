use escola_domain::id::AddressId;
use escola_roster::domain::repository::{Delete, Repository};
use escola_testing::fixtures;

use crate::helpers::manager;

#[tokio::test]
async fn should_round_trip_address_by_id() {
    let mgr = manager().await;

    let added = fixtures::endereco();
    assert_eq!(added.city, "Rio de Janeiro");
    assert_eq!(added.postal_code, "21100412");

    mgr.addresses().add(added.clone());
    mgr.save().await.unwrap();

    let fetched = mgr.addresses().find_by_id(added.id, None).await.unwrap();
    assert_eq!(fetched, Some(added));
}

#[tokio::test]
async fn should_return_none_for_unknown_address_id() {
    let mgr = manager().await;
    mgr.addresses().add(fixtures::endereco());
    mgr.save().await.unwrap();

    let missing = mgr
        .addresses()
        .find_by_id(AddressId::new(), None)
        .await
        .unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn should_replace_full_record_on_update() {
    let mgr = manager().await;
    let mut address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    mgr.save().await.unwrap();

    address.city = "Niterói".into();
    address.complement = None;
    mgr.addresses().update(address.clone());
    mgr.save().await.unwrap();

    let fetched = mgr
        .addresses()
        .find_by_id(address.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.city, "Niterói");
    assert_eq!(fetched.complement, None);
}

#[tokio::test]
async fn should_surface_not_found_when_updating_missing_address() {
    let mgr = manager().await;
    mgr.addresses().update(fixtures::endereco());
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "NOT_FOUND");
}

#[tokio::test]
async fn should_delete_unreferenced_address() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    mgr.save().await.unwrap();

    mgr.addresses().delete(address.clone());
    mgr.save().await.unwrap();

    let gone = mgr.addresses().find_by_id(address.id, None).await.unwrap();
    assert_eq!(gone, None);
}

#[tokio::test]
async fn should_reject_deleting_address_referenced_by_member() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    mgr.students().add(fixtures::aluno(0, address.id));
    mgr.save().await.unwrap();

    mgr.addresses().delete(address.clone());
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");

    // The address must still be there.
    let kept = mgr.addresses().find_by_id(address.id, None).await.unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn should_reject_invalid_address_at_commit() {
    let mgr = manager().await;
    let mut bad = fixtures::endereco();
    bad.postal_code = "21100-412".into();
    mgr.addresses().add(bad.clone());

    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "VALIDATION");

    let absent = mgr.addresses().find_by_id(bad.id, None).await.unwrap();
    assert_eq!(absent, None);
}
