//! Builders for valid domain entities.
//!
//! Natural keys (cpf, rg, email, phone) are derived from the caller's
//! index `n`, so two fixtures with different indexes never collide on a
//! unique column. Tests mutate the returned structs for case-specific
//! values.

use chrono::{NaiveDate, NaiveTime};

use escola_domain::account::{
    AccountFields, AdminAccount, AdminStaffAccount, StudentAccount, TeacherAccount,
};
use escola_domain::address::{Address, Uf};
use escola_domain::employee::{AdminStaff, EmploymentFields, EmploymentStatus, Teacher};
use escola_domain::id::{AccountId, AddressId, EmployeeId, EnrollmentId, SectionId, StudentId};
use escola_domain::member::{MemberFields, Sex};
use escola_domain::section::{ClassSection, Enrollment};
use escola_domain::student::{ClassShift, EnrollmentStatus, SchoolPeriod, Student};

pub fn endereco() -> Address {
    Address {
        id: AddressId::new(),
        city: "Rio de Janeiro".into(),
        state: Uf::Rj,
        postal_code: "21100412".into(),
        street: "Rua Sete de Setembro".into(),
        number: 10,
        complement: Some("Fundos casa 3".into()),
    }
}

fn member(n: u32, role: &str, address_id: AddressId) -> MemberFields {
    MemberFields {
        cpf: format!("529820258{n:02}"),
        rg: format!("1234567{n:02}"),
        full_name: format!("Pessoa Exemplo {n:02}"),
        email: format!("{role}{n:02}@escola.com.br"),
        phone: format!("219999900{n:02}"),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        joined_at: NaiveDate::from_ymd_opt(2022, 2, 1).unwrap(),
        sex: Sex::Female,
        address_id,
        address: None,
    }
}

fn employment() -> EmploymentFields {
    EmploymentFields {
        job_title: "Professor".into(),
        salary: 4800.0,
        bank_name: "Banco do Brasil".into(),
        bank_account: "12345-6".into(),
        status: EmploymentStatus::Active,
        terminated_on: None,
        work_starts_at: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        work_ends_at: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
    }
}

pub fn aluno(n: u32, address_id: AddressId) -> Student {
    Student {
        id: StudentId::new(),
        member: member(n, "aluno", address_id),
        period: SchoolPeriod::Medio1,
        status: EnrollmentStatus::Active,
        shift: ClassShift::Morning,
    }
}

pub fn professor(n: u32, address_id: AddressId) -> Teacher {
    Teacher {
        id: EmployeeId::new(),
        member: member(n, "professor", address_id),
        employment: employment(),
    }
}

pub fn funcionario(n: u32, address_id: AddressId) -> AdminStaff {
    let mut employment = employment();
    employment.job_title = "Secretaria Escolar".into();
    employment.salary = 3100.0;
    AdminStaff {
        id: EmployeeId::new(),
        member: member(n, "funcionario", address_id),
        employment,
    }
}

pub fn turma(teacher_id: EmployeeId) -> ClassSection {
    ClassSection {
        id: SectionId::new(),
        teacher_id,
        subject: "Matemática".into(),
        period: SchoolPeriod::Medio1,
        starts_on: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
        ends_on: NaiveDate::from_ymd_opt(2026, 12, 11).unwrap(),
        class_starts_at: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        class_ends_at: NaiveTime::from_hms_opt(9, 40, 0).unwrap(),
    }
}

pub fn matricula(student_id: StudentId, section_id: SectionId, grade: f64) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(),
        student_id,
        section_id,
        grade,
    }
}

fn conta(n: u32, role: &str) -> AccountFields {
    AccountFields {
        id: AccountId::new(),
        email: format!("{role}{n:02}@escola.com.br"),
        password_hash: "9f86d081884c7d659a2feaa0c55ad015".into(),
        salt: "c0ffee".into(),
    }
}

pub fn conta_aluno(n: u32, student_id: StudentId) -> StudentAccount {
    StudentAccount {
        account: conta(n, "aluno"),
        student_id,
    }
}

pub fn conta_professor(n: u32, teacher_id: EmployeeId) -> TeacherAccount {
    TeacherAccount {
        account: conta(n, "professor"),
        teacher_id,
    }
}

pub fn conta_funcionario(n: u32, staff_id: EmployeeId) -> AdminStaffAccount {
    AdminStaffAccount {
        account: conta(n, "funcionario"),
        staff_id,
    }
}

pub fn conta_admin(n: u32) -> AdminAccount {
    AdminAccount {
        account: conta(n, "admin"),
    }
}
