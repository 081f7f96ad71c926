use escola_domain::employee::EmploymentStatus;
use escola_domain::options::{GetEmployeeOptions, GetMemberOptions, GetOptions};
use escola_roster::domain::repository::Repository;
use escola_testing::fixtures;

use crate::helpers::manager;

#[tokio::test]
async fn should_round_trip_student() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(0, address.id);
    mgr.addresses().add(address);
    mgr.students().add(student.clone());
    mgr.save().await.unwrap();

    let fetched = mgr.students().find_by_id(student.id, None).await.unwrap();
    assert_eq!(fetched, Some(student));
}

#[tokio::test]
async fn should_eager_load_address_only_on_request() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(0, address.id);
    mgr.addresses().add(address.clone());
    mgr.students().add(student.clone());
    mgr.save().await.unwrap();

    let plain = mgr
        .students()
        .find_by_id(student.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(plain.member.address, None);

    let expanded = mgr
        .students()
        .find_by_id(student.id, Some(&GetMemberOptions::with_address()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(expanded.member.address, Some(address));
}

#[tokio::test]
async fn should_find_student_by_each_natural_key() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(3, address.id);
    mgr.addresses().add(address);
    mgr.students().add(student.clone());
    mgr.save().await.unwrap();

    let repo = mgr.students();
    let by_cpf = repo.find_by_cpf(&student.member.cpf, None).await.unwrap();
    let by_rg = repo.find_by_rg(&student.member.rg, None).await.unwrap();
    let by_email = repo
        .find_by_email(&student.member.email, None)
        .await
        .unwrap();
    let by_phone = repo
        .find_by_phone(&student.member.phone, None)
        .await
        .unwrap();
    assert_eq!(by_cpf.as_ref(), Some(&student));
    assert_eq!(by_rg.as_ref(), Some(&student));
    assert_eq!(by_email.as_ref(), Some(&student));
    assert_eq!(by_phone.as_ref(), Some(&student));

    assert_eq!(repo.find_by_cpf("00000000000", None).await.unwrap(), None);
}

#[tokio::test]
async fn should_match_natural_keys_case_sensitively() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let student = fixtures::aluno(3, address.id);
    mgr.addresses().add(address);
    mgr.students().add(student.clone());
    mgr.save().await.unwrap();

    let upper = student.member.email.to_uppercase();
    assert_ne!(upper, student.member.email);
    assert_eq!(
        mgr.students().find_by_email(&upper, None).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn should_treat_empty_keys_as_absent() {
    let mgr = manager().await;
    let repo = mgr.students();
    assert_eq!(repo.find_by_cpf("", None).await.unwrap(), None);
    assert_eq!(repo.find_by_rg("", None).await.unwrap(), None);
    assert_eq!(repo.find_by_email("", None).await.unwrap(), None);
    assert_eq!(repo.find_by_phone("", None).await.unwrap(), None);
}

#[tokio::test]
async fn should_cap_list_page_size_at_10() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    for n in 0..12 {
        mgr.students().add(fixtures::aluno(n, address.id));
    }
    mgr.save().await.unwrap();

    let mut opts = GetMemberOptions::default();
    opts.base.limit = 500;
    let page = mgr.students().list(&opts).await.unwrap();
    assert_eq!(page.len(), 10);
}

#[tokio::test]
async fn should_return_disjoint_consecutive_pages() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    for n in 0..12 {
        mgr.students().add(fixtures::aluno(n, address.id));
    }
    mgr.save().await.unwrap();

    let mut opts = GetMemberOptions::default();
    opts.base.limit = 5;
    let first = mgr.students().list(&opts).await.unwrap();
    opts.base.offset = first.len() as u64;
    let second = mgr.students().list(&opts).await.unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    for student in &second {
        assert!(first.iter().all(|other| other.id != student.id));
    }
}

#[tokio::test]
async fn should_filter_by_name_prefix_case_insensitively() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());

    let mut maria = fixtures::aluno(0, address.id);
    maria.member.full_name = "Maria Clara".into();
    let mut mariana = fixtures::aluno(1, address.id);
    mariana.member.full_name = "mariana souza".into();
    let mut pedro = fixtures::aluno(2, address.id);
    pedro.member.full_name = "Pedro Alves".into();
    mgr.students().add(maria);
    mgr.students().add(mariana);
    mgr.students().add(pedro);
    mgr.save().await.unwrap();

    let mut opts = GetMemberOptions::default();
    opts.name_prefix = Some("MAR".into());
    let matched = mgr.students().list(&opts).await.unwrap();
    assert_eq!(matched.len(), 2);

    opts.name_prefix = Some("aria".into());
    assert!(mgr.students().list(&opts).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_sort_by_requested_key_and_direction() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    for (n, name) in ["Ana", "Bruno", "Carla"].iter().enumerate() {
        let mut student = fixtures::aluno(n as u32, address.id);
        student.member.full_name = format!("{name} Exemplo");
        mgr.students().add(student);
    }
    mgr.save().await.unwrap();

    let mut opts = GetMemberOptions::default();
    opts.base.sort_key = Some("full_name".into());
    opts.base.ascending = false;
    let names: Vec<String> = mgr
        .students()
        .list(&opts)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.member.full_name)
        .collect();
    assert_eq!(names, ["Carla Exemplo", "Bruno Exemplo", "Ana Exemplo"]);
}

#[tokio::test]
async fn should_fall_back_to_default_order_for_unknown_sort_key() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    mgr.students().add(fixtures::aluno(0, address.id));
    mgr.students().add(fixtures::aluno(1, address.id));
    mgr.save().await.unwrap();

    let mut opts = GetMemberOptions::default();
    opts.base.sort_key = Some("no_such_field".into());
    let listed = mgr.students().list(&opts).await.unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn should_round_trip_teacher_and_staff() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    let teacher = fixtures::professor(0, address.id);
    let staff = fixtures::funcionario(1, address.id);
    mgr.addresses().add(address);
    mgr.teachers().add(teacher.clone());
    mgr.admin_staff().add(staff.clone());
    mgr.save().await.unwrap();

    assert_eq!(
        mgr.teachers().find_by_id(teacher.id, None).await.unwrap(),
        Some(teacher.clone())
    );
    assert_eq!(
        mgr.admin_staff().find_by_id(staff.id, None).await.unwrap(),
        Some(staff.clone())
    );
    assert_eq!(
        mgr.teachers()
            .find_by_cpf(&teacher.member.cpf, None)
            .await
            .unwrap(),
        Some(teacher)
    );
    assert_eq!(
        mgr.admin_staff()
            .find_by_email(&staff.member.email, None)
            .await
            .unwrap(),
        Some(staff)
    );
}

#[tokio::test]
async fn should_filter_employees_by_salary_range_inclusively() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    for (n, salary) in [3000.0, 4800.0, 9000.0].into_iter().enumerate() {
        let mut teacher = fixtures::professor(n as u32, address.id);
        teacher.employment.salary = salary;
        mgr.teachers().add(teacher);
    }
    mgr.save().await.unwrap();

    let mut opts = GetEmployeeOptions::default();
    opts.min_salary = 3000.0;
    opts.max_salary = 4800.0;
    let matched = mgr.teachers().list(&opts).await.unwrap();
    assert_eq!(matched.len(), 2);
    assert!(matched
        .iter()
        .all(|t| (3000.0..=4800.0).contains(&t.employment.salary)));
}

#[tokio::test]
async fn should_and_employee_filters_together() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());

    let mut active = fixtures::professor(0, address.id);
    active.employment.job_title = "Professor de Física".into();
    let mut terminated = fixtures::professor(1, address.id);
    terminated.employment.job_title = "Professor de Química".into();
    terminated.employment.status = EmploymentStatus::Terminated;
    terminated.employment.terminated_on = chrono::NaiveDate::from_ymd_opt(2025, 12, 1);
    let mut coordinator = fixtures::professor(2, address.id);
    coordinator.employment.job_title = "Coordenador".into();
    mgr.teachers().add(active.clone());
    mgr.teachers().add(terminated);
    mgr.teachers().add(coordinator);
    mgr.save().await.unwrap();

    let mut opts = GetEmployeeOptions::default();
    opts.job_title_prefix = Some("Professor".into());
    opts.status = Some(EmploymentStatus::Active);
    let matched = mgr.teachers().list(&opts).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, active.id);
}

#[tokio::test]
async fn should_eager_load_addresses_in_employee_lists() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    mgr.teachers().add(fixtures::professor(0, address.id));
    mgr.save().await.unwrap();

    let mut opts = GetEmployeeOptions::default();
    opts.member.include_address = true;
    let listed = mgr.teachers().list(&opts).await.unwrap();
    assert_eq!(listed[0].member.address, Some(address));

    let bare = mgr
        .teachers()
        .list(&GetEmployeeOptions::default())
        .await
        .unwrap();
    assert_eq!(bare[0].member.address, None);
}

#[tokio::test]
async fn should_apply_same_limit_cap_to_every_repository() {
    let mgr = manager().await;
    let address = fixtures::endereco();
    mgr.addresses().add(address.clone());
    for n in 0..12 {
        mgr.teachers().add(fixtures::professor(n, address.id));
    }
    mgr.save().await.unwrap();

    let mut teacher_opts = GetEmployeeOptions::default();
    teacher_opts.member.base.limit = 99;
    assert_eq!(mgr.teachers().list(&teacher_opts).await.unwrap().len(), 10);

    let mut address_opts = GetOptions::default();
    address_opts.limit = 99;
    assert_eq!(mgr.addresses().list(&address_opts).await.unwrap().len(), 1);
}
