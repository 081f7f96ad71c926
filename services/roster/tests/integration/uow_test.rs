use escola_roster::domain::repository::Repository;
use escola_testing::fixtures;

use crate::helpers::{manager, manager_pair};

#[tokio::test]
async fn should_not_expose_staged_data_before_save() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());

    assert_eq!(mgr.pending_ops(), 1);
    assert_eq!(
        mgr.addresses().find_by_id(address.id, None).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn should_leave_store_untouched_when_a_batch_fails() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(0, address.id);
    let duplicate_cpf = fixtures::aluno(0, address.id);

    mgr.addresses().add(address.clone());
    mgr.students().add(student.clone());
    mgr.students().add(duplicate_cpf);
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");

    // Nothing from the failed batch is visible, the earlier ops included.
    assert_eq!(
        mgr.addresses().find_by_id(address.id, None).await.unwrap(),
        None
    );
    assert_eq!(
        mgr.students().find_by_id(student.id, None).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn should_apply_batch_in_staging_order() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(0, address.id);

    // The student insert only satisfies its FK because the address insert
    // runs first, inside the same transaction.
    mgr.addresses().add(address.clone());
    mgr.students().add(student.clone());
    mgr.save().await.unwrap();

    assert!(mgr
        .students()
        .find_by_id(student.id, None)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn should_roll_back_everything_saved_since_begin() {
    let mut mgr = manager().await;
    let before = fixtures::endereco();
    mgr.addresses().add(before.clone());
    mgr.save().await.unwrap();

    mgr.begin().await.unwrap();
    let inside = fixtures::endereco();
    mgr.addresses().add(inside.clone());
    mgr.save().await.unwrap();

    // Saved-but-uncommitted data is visible through this manager.
    assert!(mgr
        .addresses()
        .find_by_id(inside.id, None)
        .await
        .unwrap()
        .is_some());

    mgr.rollback().await.unwrap();

    assert_eq!(
        mgr.addresses().find_by_id(inside.id, None).await.unwrap(),
        None
    );
    // State from before the transaction is intact.
    assert!(mgr
        .addresses()
        .find_by_id(before.id, None)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn should_discard_staged_ops_on_rollback() {
    let mut mgr = manager().await;
    mgr.begin().await.unwrap();
    mgr.addresses().add(fixtures::endereco());
    assert_eq!(mgr.pending_ops(), 1);

    mgr.rollback().await.unwrap();
    assert_eq!(mgr.pending_ops(), 0);
}

#[tokio::test]
async fn should_commit_explicit_transaction_scope() {
    let mut mgr = manager().await;
    let address = fixtures::endereco();

    mgr.begin().await.unwrap();
    mgr.addresses().add(address.clone());
    mgr.save().await.unwrap();
    mgr.commit().await.unwrap();

    assert!(mgr
        .addresses()
        .find_by_id(address.id, None)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn should_reject_nested_begin_and_stray_commit() {
    let mut mgr = manager().await;
    assert!(mgr.commit().await.is_err());
    assert!(mgr.rollback().await.is_err());

    mgr.begin().await.unwrap();
    assert!(mgr.begin().await.is_err());
    mgr.rollback().await.unwrap();
}

#[tokio::test]
async fn should_isolate_staging_between_managers() {
    let (mgr_a, mgr_b) = manager_pair().await;
    let address = fixtures::endereco();

    mgr_a.addresses().add(address.clone());
    assert_eq!(mgr_a.pending_ops(), 1);
    assert_eq!(mgr_b.pending_ops(), 0);
    assert_eq!(
        mgr_b.addresses().find_by_id(address.id, None).await.unwrap(),
        None
    );

    // Only after the first manager commits does the second one see it.
    mgr_a.save().await.unwrap();
    assert!(mgr_b
        .addresses()
        .find_by_id(address.id, None)
        .await
        .unwrap()
        .is_some());
}
