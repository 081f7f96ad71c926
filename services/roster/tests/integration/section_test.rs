use escola_domain::id::{EmployeeId, SectionId};
use escola_domain::options::GetOptions;
use escola_domain::section::ClassSection;
use escola_roster::domain::repository::{Delete, Repository};
use escola_roster::infra::uow::RosterManager;
use escola_testing::fixtures;

use crate::helpers::manager;

struct Classroom {
    section: ClassSection,
    student_id: escola_domain::id::StudentId,
    teacher_id: EmployeeId,
}

/// Address + teacher + student + one section, committed.
async fn classroom(mgr: &RosterManager) -> Classroom {
    let address = fixtures::endereco();
    let teacher = fixtures::professor(0, address.id);
    let student = fixtures::aluno(1, address.id);
    let section = fixtures::turma(teacher.id);
    mgr.addresses().add(address);
    mgr.teachers().add(teacher.clone());
    mgr.students().add(student.clone());
    mgr.sections().add(section.clone());
    mgr.save().await.unwrap();
    Classroom {
        section,
        student_id: student.id,
        teacher_id: teacher.id,
    }
}

#[tokio::test]
async fn should_round_trip_section_and_enrollment() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;

    let fetched = mgr
        .sections()
        .find_by_id(room.section.id, None)
        .await
        .unwrap();
    assert_eq!(fetched, Some(room.section.clone()));

    let enrollment = fixtures::matricula(room.student_id, room.section.id, 8.5);
    mgr.enrollments().add(enrollment.clone());
    mgr.save().await.unwrap();

    assert_eq!(
        mgr.enrollments()
            .find_by_id(enrollment.id, None)
            .await
            .unwrap(),
        Some(enrollment.clone())
    );
    assert_eq!(
        mgr.enrollments()
            .find_by_pair(room.student_id, room.section.id)
            .await
            .unwrap(),
        Some(enrollment)
    );
}

#[tokio::test]
async fn should_reject_second_enrollment_for_same_pair() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;

    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, room.section.id, 7.0));
    mgr.save().await.unwrap();

    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, room.section.id, 9.0));
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");
}

#[tokio::test]
async fn should_reject_section_without_existing_teacher() {
    let mgr = manager().await;
    mgr.sections().add(fixtures::turma(EmployeeId::new()));
    let err = mgr.save().await.unwrap_err();
    assert_eq!(err.kind(), "CONFLICT");
}

#[tokio::test]
async fn should_compute_average_grade_on_demand() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;

    // No enrollments yet: no average.
    assert_eq!(
        mgr.students().average_grade(room.student_id).await.unwrap(),
        None
    );

    let second_section = fixtures::turma(room.teacher_id);
    mgr.sections().add(second_section.clone());
    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, room.section.id, 8.0));
    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, second_section.id, 6.0));
    mgr.save().await.unwrap();

    assert_eq!(
        mgr.students().average_grade(room.student_id).await.unwrap(),
        Some(7.0)
    );
}

#[tokio::test]
async fn should_list_sections_by_teacher() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;

    let address = fixtures::endereco();
    let other_teacher = fixtures::professor(5, address.id);
    mgr.addresses().add(address);
    mgr.teachers().add(other_teacher.clone());
    mgr.sections().add(fixtures::turma(other_teacher.id));
    mgr.sections().add(fixtures::turma(room.teacher_id));
    mgr.save().await.unwrap();

    let own = mgr
        .sections()
        .list_by_teacher(room.teacher_id, &GetOptions::default())
        .await
        .unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|s| s.teacher_id == room.teacher_id));
}

#[tokio::test]
async fn should_list_enrollments_by_student_and_section() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;
    let second_section = fixtures::turma(room.teacher_id);
    mgr.sections().add(second_section.clone());
    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, room.section.id, 8.0));
    mgr.enrollments()
        .add(fixtures::matricula(room.student_id, second_section.id, 6.0));
    mgr.save().await.unwrap();

    let by_student = mgr
        .enrollments()
        .list_by_student(room.student_id, &GetOptions::default())
        .await
        .unwrap();
    assert_eq!(by_student.len(), 2);

    let by_section = mgr
        .enrollments()
        .list_by_section(room.section.id, &GetOptions::default())
        .await
        .unwrap();
    assert_eq!(by_section.len(), 1);
    assert_eq!(by_section[0].section_id, room.section.id);
}

#[tokio::test]
async fn should_cascade_enrollments_when_section_is_deleted() {
    let mgr = manager().await;
    let room = classroom(&mgr).await;
    let enrollment = fixtures::matricula(room.student_id, room.section.id, 8.0);
    mgr.enrollments().add(enrollment.clone());
    mgr.save().await.unwrap();

    mgr.sections().delete(room.section.clone());
    mgr.save().await.unwrap();

    assert_eq!(
        mgr.sections()
            .find_by_id(room.section.id, None)
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        mgr.enrollments()
            .find_by_id(enrollment.id, None)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn should_return_none_for_unknown_section_id() {
    let mgr = manager().await;
    classroom(&mgr).await;
    assert_eq!(
        mgr.sections().find_by_id(SectionId::new(), None).await.unwrap(),
        None
    );
}
