use escola_domain::id::StudentId;
use escola_roster::domain::repository::Repository;
use escola_roster::infra::uow::RosterManager;
use escola_testing::fixtures;

use crate::helpers::manager;

/// Address + student + teacher + staff member, committed.
async fn members(mgr: &RosterManager) -> (StudentId, escola_domain::id::EmployeeId, escola_domain::id::EmployeeId) {
    let address = fixtures::endereco();
    let student = fixtures::aluno(0, address.id);
    let teacher = fixtures::professor(1, address.id);
    let staff = fixtures::funcionario(2, address.id);
    mgr.addresses().add(address);
    mgr.students().add(student.clone());
    mgr.teachers().add(teacher.clone());
    mgr.admin_staff().add(staff.clone());
    mgr.save().await.unwrap();
    (student.id, teacher.id, staff.id)
}

#[tokio::test]
async fn should_round_trip_every_account_type() {
    let mgr = manager().await;
    let (student_id, teacher_id, staff_id) = members(&mgr).await;

    let student_account = fixtures::conta_aluno(0, student_id);
    let teacher_account = fixtures::conta_professor(1, teacher_id);
    let staff_account = fixtures::conta_funcionario(2, staff_id);
    let admin_account = fixtures::conta_admin(3);
    mgr.student_accounts().add(student_account.clone());
    mgr.teacher_accounts().add(teacher_account.clone());
    mgr.admin_staff_accounts().add(staff_account.clone());
    mgr.admin_accounts().add(admin_account.clone());
    mgr.save().await.unwrap();

    assert_eq!(
        mgr.student_accounts()
            .find_by_id(student_account.account.id, None)
            .await
            .unwrap(),
        Some(student_account)
    );
    assert_eq!(
        mgr.teacher_accounts()
            .find_by_member(teacher_id)
            .await
            .unwrap(),
        Some(teacher_account)
    );
    assert_eq!(
        mgr.admin_staff_accounts()
            .find_by_email(&staff_account.account.email)
            .await
            .unwrap(),
        Some(staff_account)
    );
    assert_eq!(
        mgr.admin_accounts()
            .find_by_email(&admin_account.account.email)
            .await
            .unwrap(),
        Some(admin_account)
    );
}

#[tokio::test]
async fn should_reject_second_account_for_same_member() {
    let mgr = manager().await;
    let (student_id, _, _) = members(&mgr).await;

    mgr.student_accounts().add(fixtures::conta_aluno(0, student_id));
    mgr.save().await.unwrap();

    mgr.student_accounts().add(fixtures::conta_aluno(9, student_id));
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");
}

#[tokio::test]
async fn should_reject_duplicate_email_within_a_role() {
    let mgr = manager().await;
    mgr.admin_accounts().add(fixtures::conta_admin(0));
    mgr.save().await.unwrap();

    mgr.admin_accounts().add(fixtures::conta_admin(0));
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");
}

#[tokio::test]
async fn should_allow_same_email_across_roles() {
    let mgr = manager().await;
    let (student_id, teacher_id, _) = members(&mgr).await;

    let mut student_account = fixtures::conta_aluno(0, student_id);
    let mut teacher_account = fixtures::conta_professor(1, teacher_id);
    student_account.account.email = "mesma@escola.com.br".into();
    teacher_account.account.email = "mesma@escola.com.br".into();
    mgr.student_accounts().add(student_account);
    mgr.teacher_accounts().add(teacher_account);
    mgr.save().await.unwrap();
}

#[tokio::test]
async fn should_update_account_credentials() {
    let mgr = manager().await;
    let (student_id, _, _) = members(&mgr).await;

    let mut account = fixtures::conta_aluno(0, student_id);
    mgr.student_accounts().add(account.clone());
    mgr.save().await.unwrap();

    account.account.password_hash = "novohash".into();
    account.account.salt = "novosal".into();
    mgr.student_accounts().update(account.clone());
    mgr.save().await.unwrap();

    let fetched = mgr
        .student_accounts()
        .find_by_member(student_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.account.password_hash, "novohash");
    assert_eq!(fetched.account.salt, "novosal");
}

#[tokio::test]
async fn should_reject_account_for_missing_member() {
    let mgr = manager().await;
    members(&mgr).await;

    mgr.student_accounts()
        .add(fixtures::conta_aluno(7, StudentId::new()));
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");
}
