//! sea-orm repository implementations for the roster entities.
//!
//! Each handle borrows the owning [`RosterManager`]: staging operations
//! push onto the manager's journal, lookups run against the manager's
//! current connection (open transaction first, pooled connection
//! otherwise).

use anyhow::Context as _;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use escola_core::sea_ext::{SelectOptionsExt, prefix_expr};
use escola_domain::address::{Address, Uf};
use escola_domain::employee::{AdminStaff, EmploymentFields, EmploymentStatus, Teacher};
use escola_domain::id::{AddressId, EmployeeId, EnrollmentId, SectionId, StudentId};
use escola_domain::member::{MemberFields, Sex};
use escola_domain::options::{GetEmployeeOptions, GetMemberOptions, GetOptions};
use escola_domain::section::{self, ClassSection, Enrollment};
use escola_domain::student::{ClassShift, EnrollmentStatus, SchoolPeriod, Student};
use escola_roster_schema::{
    alunos, alunos_turma, enderecos, funcionarios_administrativos, professores, turmas,
};

use crate::domain::repository::{Delete, Repository};
use crate::error::RosterError;
use crate::infra::on_conn;
use crate::infra::uow::{Op, RosterManager, StagedOp};

fn invalid_enum(entity: &'static str, field: &'static str, value: i16) -> RosterError {
    RosterError::Storage(anyhow::anyhow!("invalid {field} value {value} on {entity} row"))
}

// ── Address repository ───────────────────────────────────────────────────────

pub struct AddressRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<Address> for AddressRepo<'_> {
    type Id = AddressId;
    type Options = GetOptions;

    fn add(&self, entity: Address) {
        self.mgr.stage(StagedOp::Address(Op::Add(entity)));
    }

    fn update(&self, entity: Address) {
        self.mgr.stage(StagedOp::Address(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: AddressId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<Address>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            enderecos::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find address by id")?;
        model.map(address_from_model).transpose()
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<Address>, RosterError> {
        let mut query = enderecos::Entity::find();
        if let Some(col) = address_sort_column(opts) {
            query = query.order_with(col, opts.ascending);
        }
        query = query.order_with(enderecos::Column::Id, true).page_with(opts);
        let models = on_conn!(self.mgr, conn => query.all(conn).await).context("list addresses")?;
        models.into_iter().map(address_from_model).collect()
    }
}

impl Delete<Address> for AddressRepo<'_> {
    fn delete(&self, entity: Address) {
        self.mgr.stage(StagedOp::Address(Op::Delete(entity)));
    }
}

fn address_sort_column(opts: &GetOptions) -> Option<enderecos::Column> {
    match opts.sort_key.as_deref()? {
        "city" => Some(enderecos::Column::City),
        "street" => Some(enderecos::Column::Street),
        "postal_code" => Some(enderecos::Column::PostalCode),
        _ => None,
    }
}

fn address_from_model(model: enderecos::Model) -> Result<Address, RosterError> {
    let state = Uf::from_code(&model.state).ok_or_else(|| {
        RosterError::Storage(anyhow::anyhow!(
            "unknown uf code {:?} on endereco {}",
            model.state,
            model.id
        ))
    })?;
    Ok(Address {
        id: AddressId(model.id),
        city: model.city,
        state,
        postal_code: model.postal_code,
        street: model.street,
        number: model.number,
        complement: model.complement,
    })
}

pub(crate) fn address_active_model(a: &Address) -> enderecos::ActiveModel {
    enderecos::ActiveModel {
        id: Set(a.id.0),
        city: Set(a.city.clone()),
        state: Set(a.state.as_code().to_owned()),
        postal_code: Set(a.postal_code.clone()),
        street: Set(a.street.clone()),
        number: Set(a.number),
        complement: Set(a.complement.clone()),
    }
}

// ── Student repository ───────────────────────────────────────────────────────

pub struct StudentRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<Student> for StudentRepo<'_> {
    type Id = StudentId;
    type Options = GetMemberOptions;

    fn add(&self, entity: Student) {
        self.mgr.stage(StagedOp::Student(Op::Add(entity)));
    }

    fn update(&self, entity: Student) {
        self.mgr.stage(StagedOp::Student(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: StudentId,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        self.find_by(alunos::Column::Id.eq(id.0), opts).await
    }

    async fn list(&self, opts: &GetMemberOptions) -> Result<Vec<Student>, RosterError> {
        let mut query = alunos::Entity::find();
        if let Some(prefix) = &opts.name_prefix {
            query = query.filter(prefix_expr(alunos::Column::FullName, prefix));
        }
        if let Some(col) = student_sort_column(&opts.base) {
            query = query.order_with(col, opts.base.ascending);
        }
        query = query
            .order_with(alunos::Column::Id, true)
            .page_with(&opts.base);

        if opts.include_address {
            let rows = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).all(conn).await
            })
            .context("list students with addresses")?;
            rows.into_iter()
                .map(|(model, address)| student_from_model(model, address))
                .collect()
        } else {
            let models =
                on_conn!(self.mgr, conn => query.all(conn).await).context("list students")?;
            models
                .into_iter()
                .map(|model| student_from_model(model, None))
                .collect()
        }
    }
}

impl Delete<Student> for StudentRepo<'_> {
    fn delete(&self, entity: Student) {
        self.mgr.stage(StagedOp::Student(Op::Delete(entity)));
    }
}

impl StudentRepo<'_> {
    async fn find_by(
        &self,
        cond: SimpleExpr,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        let query = alunos::Entity::find().filter(cond);
        if opts.is_some_and(|o| o.include_address) {
            let row = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).one(conn).await
            })
            .context("find student with address")?;
            row.map(|(model, address)| student_from_model(model, address))
                .transpose()
        } else {
            let model =
                on_conn!(self.mgr, conn => query.one(conn).await).context("find student")?;
            model.map(|m| student_from_model(m, None)).transpose()
        }
    }

    pub async fn find_by_cpf(
        &self,
        cpf: &str,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        if cpf.is_empty() {
            return Ok(None);
        }
        self.find_by(alunos::Column::Cpf.eq(cpf), opts).await
    }

    pub async fn find_by_rg(
        &self,
        rg: &str,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        if rg.is_empty() {
            return Ok(None);
        }
        self.find_by(alunos::Column::Rg.eq(rg), opts).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        self.find_by(alunos::Column::Email.eq(email), opts).await
    }

    pub async fn find_by_phone(
        &self,
        phone: &str,
        opts: Option<&GetMemberOptions>,
    ) -> Result<Option<Student>, RosterError> {
        if phone.is_empty() {
            return Ok(None);
        }
        self.find_by(alunos::Column::Phone.eq(phone), opts).await
    }

    /// Mean grade across the student's enrollments, computed on demand.
    /// `None` when the student has no enrollments.
    pub async fn average_grade(&self, id: StudentId) -> Result<Option<f64>, RosterError> {
        let models = on_conn!(self.mgr, conn => {
            alunos_turma::Entity::find()
                .filter(alunos_turma::Column::StudentId.eq(id.0))
                .all(conn)
                .await
        })
        .context("load enrollments for average grade")?;
        let enrollments: Vec<Enrollment> = models.into_iter().map(enrollment_from_model).collect();
        Ok(section::average_grade(&enrollments))
    }
}

fn student_sort_column(opts: &GetOptions) -> Option<alunos::Column> {
    match opts.sort_key.as_deref()? {
        "full_name" => Some(alunos::Column::FullName),
        "email" => Some(alunos::Column::Email),
        "birth_date" => Some(alunos::Column::BirthDate),
        "joined_at" => Some(alunos::Column::JoinedAt),
        _ => None,
    }
}

fn student_from_model(
    model: alunos::Model,
    address: Option<enderecos::Model>,
) -> Result<Student, RosterError> {
    let address = address.map(address_from_model).transpose()?;
    Ok(Student {
        id: StudentId(model.id),
        member: MemberFields {
            cpf: model.cpf,
            rg: model.rg,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            birth_date: model.birth_date,
            joined_at: model.joined_at,
            sex: Sex::from_u8(model.sex as u8).ok_or_else(|| invalid_enum("aluno", "sex", model.sex))?,
            address_id: AddressId(model.address_id),
            address,
        },
        period: SchoolPeriod::from_u8(model.period as u8)
            .ok_or_else(|| invalid_enum("aluno", "period", model.period))?,
        status: EnrollmentStatus::from_u8(model.status as u8)
            .ok_or_else(|| invalid_enum("aluno", "status", model.status))?,
        shift: ClassShift::from_u8(model.shift as u8)
            .ok_or_else(|| invalid_enum("aluno", "shift", model.shift))?,
    })
}

pub(crate) fn student_active_model(s: &Student) -> alunos::ActiveModel {
    alunos::ActiveModel {
        id: Set(s.id.0),
        cpf: Set(s.member.cpf.clone()),
        rg: Set(s.member.rg.clone()),
        full_name: Set(s.member.full_name.clone()),
        email: Set(s.member.email.clone()),
        phone: Set(s.member.phone.clone()),
        birth_date: Set(s.member.birth_date),
        joined_at: Set(s.member.joined_at),
        sex: Set(s.member.sex.as_u8() as i16),
        address_id: Set(s.member.address_id.0),
        period: Set(s.period.as_u8() as i16),
        status: Set(s.status.as_u8() as i16),
        shift: Set(s.shift.as_u8() as i16),
    }
}

// ── Teacher repository ───────────────────────────────────────────────────────

pub struct TeacherRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<Teacher> for TeacherRepo<'_> {
    type Id = EmployeeId;
    type Options = GetEmployeeOptions;

    fn add(&self, entity: Teacher) {
        self.mgr.stage(StagedOp::Teacher(Op::Add(entity)));
    }

    fn update(&self, entity: Teacher) {
        self.mgr.stage(StagedOp::Teacher(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        self.find_by(professores::Column::Id.eq(id.0), opts).await
    }

    async fn list(&self, opts: &GetEmployeeOptions) -> Result<Vec<Teacher>, RosterError> {
        let mut query = professores::Entity::find();
        if let Some(prefix) = &opts.member.name_prefix {
            query = query.filter(prefix_expr(professores::Column::FullName, prefix));
        }
        if let Some(prefix) = &opts.job_title_prefix {
            query = query.filter(prefix_expr(professores::Column::JobTitle, prefix));
        }
        if let Some(status) = opts.status {
            query = query.filter(professores::Column::Status.eq(status.as_u8() as i16));
        }
        query = query
            .filter(professores::Column::Salary.gte(opts.min_salary))
            .filter(professores::Column::Salary.lte(opts.max_salary));
        if let Some(col) = teacher_sort_column(&opts.member.base) {
            query = query.order_with(col, opts.member.base.ascending);
        }
        query = query
            .order_with(professores::Column::Id, true)
            .page_with(&opts.member.base);

        if opts.member.include_address {
            let rows = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).all(conn).await
            })
            .context("list teachers with addresses")?;
            rows.into_iter()
                .map(|(model, address)| teacher_from_model(model, address))
                .collect()
        } else {
            let models =
                on_conn!(self.mgr, conn => query.all(conn).await).context("list teachers")?;
            models
                .into_iter()
                .map(|model| teacher_from_model(model, None))
                .collect()
        }
    }
}

impl Delete<Teacher> for TeacherRepo<'_> {
    fn delete(&self, entity: Teacher) {
        self.mgr.stage(StagedOp::Teacher(Op::Delete(entity)));
    }
}

impl TeacherRepo<'_> {
    async fn find_by(
        &self,
        cond: SimpleExpr,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        let query = professores::Entity::find().filter(cond);
        if opts.is_some_and(|o| o.member.include_address) {
            let row = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).one(conn).await
            })
            .context("find teacher with address")?;
            row.map(|(model, address)| teacher_from_model(model, address))
                .transpose()
        } else {
            let model =
                on_conn!(self.mgr, conn => query.one(conn).await).context("find teacher")?;
            model.map(|m| teacher_from_model(m, None)).transpose()
        }
    }

    pub async fn find_by_cpf(
        &self,
        cpf: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        if cpf.is_empty() {
            return Ok(None);
        }
        self.find_by(professores::Column::Cpf.eq(cpf), opts).await
    }

    pub async fn find_by_rg(
        &self,
        rg: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        if rg.is_empty() {
            return Ok(None);
        }
        self.find_by(professores::Column::Rg.eq(rg), opts).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        self.find_by(professores::Column::Email.eq(email), opts)
            .await
    }

    pub async fn find_by_phone(
        &self,
        phone: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<Teacher>, RosterError> {
        if phone.is_empty() {
            return Ok(None);
        }
        self.find_by(professores::Column::Phone.eq(phone), opts)
            .await
    }
}

fn teacher_sort_column(opts: &GetOptions) -> Option<professores::Column> {
    match opts.sort_key.as_deref()? {
        "full_name" => Some(professores::Column::FullName),
        "email" => Some(professores::Column::Email),
        "birth_date" => Some(professores::Column::BirthDate),
        "joined_at" => Some(professores::Column::JoinedAt),
        "job_title" => Some(professores::Column::JobTitle),
        "salary" => Some(professores::Column::Salary),
        _ => None,
    }
}

fn teacher_from_model(
    model: professores::Model,
    address: Option<enderecos::Model>,
) -> Result<Teacher, RosterError> {
    let address = address.map(address_from_model).transpose()?;
    Ok(Teacher {
        id: EmployeeId(model.id),
        member: MemberFields {
            cpf: model.cpf,
            rg: model.rg,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            birth_date: model.birth_date,
            joined_at: model.joined_at,
            sex: Sex::from_u8(model.sex as u8)
                .ok_or_else(|| invalid_enum("professor", "sex", model.sex))?,
            address_id: AddressId(model.address_id),
            address,
        },
        employment: EmploymentFields {
            job_title: model.job_title,
            salary: model.salary,
            bank_name: model.bank_name,
            bank_account: model.bank_account,
            status: EmploymentStatus::from_u8(model.status as u8)
                .ok_or_else(|| invalid_enum("professor", "status", model.status))?,
            terminated_on: model.terminated_on,
            work_starts_at: model.work_starts_at,
            work_ends_at: model.work_ends_at,
        },
    })
}

pub(crate) fn teacher_active_model(t: &Teacher) -> professores::ActiveModel {
    professores::ActiveModel {
        id: Set(t.id.0),
        cpf: Set(t.member.cpf.clone()),
        rg: Set(t.member.rg.clone()),
        full_name: Set(t.member.full_name.clone()),
        email: Set(t.member.email.clone()),
        phone: Set(t.member.phone.clone()),
        birth_date: Set(t.member.birth_date),
        joined_at: Set(t.member.joined_at),
        sex: Set(t.member.sex.as_u8() as i16),
        address_id: Set(t.member.address_id.0),
        job_title: Set(t.employment.job_title.clone()),
        salary: Set(t.employment.salary),
        bank_name: Set(t.employment.bank_name.clone()),
        bank_account: Set(t.employment.bank_account.clone()),
        status: Set(t.employment.status.as_u8() as i16),
        terminated_on: Set(t.employment.terminated_on),
        work_starts_at: Set(t.employment.work_starts_at),
        work_ends_at: Set(t.employment.work_ends_at),
    }
}

// ── Administrative staff repository ──────────────────────────────────────────

pub struct AdminStaffRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<AdminStaff> for AdminStaffRepo<'_> {
    type Id = EmployeeId;
    type Options = GetEmployeeOptions;

    fn add(&self, entity: AdminStaff) {
        self.mgr.stage(StagedOp::AdminStaff(Op::Add(entity)));
    }

    fn update(&self, entity: AdminStaff) {
        self.mgr.stage(StagedOp::AdminStaff(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        self.find_by(funcionarios_administrativos::Column::Id.eq(id.0), opts)
            .await
    }

    async fn list(&self, opts: &GetEmployeeOptions) -> Result<Vec<AdminStaff>, RosterError> {
        let mut query = funcionarios_administrativos::Entity::find();
        if let Some(prefix) = &opts.member.name_prefix {
            query = query.filter(prefix_expr(
                funcionarios_administrativos::Column::FullName,
                prefix,
            ));
        }
        if let Some(prefix) = &opts.job_title_prefix {
            query = query.filter(prefix_expr(
                funcionarios_administrativos::Column::JobTitle,
                prefix,
            ));
        }
        if let Some(status) = opts.status {
            query = query.filter(
                funcionarios_administrativos::Column::Status.eq(status.as_u8() as i16),
            );
        }
        query = query
            .filter(funcionarios_administrativos::Column::Salary.gte(opts.min_salary))
            .filter(funcionarios_administrativos::Column::Salary.lte(opts.max_salary));
        if let Some(col) = staff_sort_column(&opts.member.base) {
            query = query.order_with(col, opts.member.base.ascending);
        }
        query = query
            .order_with(funcionarios_administrativos::Column::Id, true)
            .page_with(&opts.member.base);

        if opts.member.include_address {
            let rows = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).all(conn).await
            })
            .context("list administrative staff with addresses")?;
            rows.into_iter()
                .map(|(model, address)| admin_staff_from_model(model, address))
                .collect()
        } else {
            let models = on_conn!(self.mgr, conn => query.all(conn).await)
                .context("list administrative staff")?;
            models
                .into_iter()
                .map(|model| admin_staff_from_model(model, None))
                .collect()
        }
    }
}

impl Delete<AdminStaff> for AdminStaffRepo<'_> {
    fn delete(&self, entity: AdminStaff) {
        self.mgr.stage(StagedOp::AdminStaff(Op::Delete(entity)));
    }
}

impl AdminStaffRepo<'_> {
    async fn find_by(
        &self,
        cond: SimpleExpr,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        let query = funcionarios_administrativos::Entity::find().filter(cond);
        if opts.is_some_and(|o| o.member.include_address) {
            let row = on_conn!(self.mgr, conn => {
                query.find_also_related(enderecos::Entity).one(conn).await
            })
            .context("find administrative staff with address")?;
            row.map(|(model, address)| admin_staff_from_model(model, address))
                .transpose()
        } else {
            let model = on_conn!(self.mgr, conn => query.one(conn).await)
                .context("find administrative staff")?;
            model.map(|m| admin_staff_from_model(m, None)).transpose()
        }
    }

    pub async fn find_by_cpf(
        &self,
        cpf: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        if cpf.is_empty() {
            return Ok(None);
        }
        self.find_by(funcionarios_administrativos::Column::Cpf.eq(cpf), opts)
            .await
    }

    pub async fn find_by_rg(
        &self,
        rg: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        if rg.is_empty() {
            return Ok(None);
        }
        self.find_by(funcionarios_administrativos::Column::Rg.eq(rg), opts)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        self.find_by(funcionarios_administrativos::Column::Email.eq(email), opts)
            .await
    }

    pub async fn find_by_phone(
        &self,
        phone: &str,
        opts: Option<&GetEmployeeOptions>,
    ) -> Result<Option<AdminStaff>, RosterError> {
        if phone.is_empty() {
            return Ok(None);
        }
        self.find_by(funcionarios_administrativos::Column::Phone.eq(phone), opts)
            .await
    }
}

fn staff_sort_column(opts: &GetOptions) -> Option<funcionarios_administrativos::Column> {
    match opts.sort_key.as_deref()? {
        "full_name" => Some(funcionarios_administrativos::Column::FullName),
        "email" => Some(funcionarios_administrativos::Column::Email),
        "birth_date" => Some(funcionarios_administrativos::Column::BirthDate),
        "joined_at" => Some(funcionarios_administrativos::Column::JoinedAt),
        "job_title" => Some(funcionarios_administrativos::Column::JobTitle),
        "salary" => Some(funcionarios_administrativos::Column::Salary),
        _ => None,
    }
}

fn admin_staff_from_model(
    model: funcionarios_administrativos::Model,
    address: Option<enderecos::Model>,
) -> Result<AdminStaff, RosterError> {
    let address = address.map(address_from_model).transpose()?;
    Ok(AdminStaff {
        id: EmployeeId(model.id),
        member: MemberFields {
            cpf: model.cpf,
            rg: model.rg,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            birth_date: model.birth_date,
            joined_at: model.joined_at,
            sex: Sex::from_u8(model.sex as u8)
                .ok_or_else(|| invalid_enum("funcionario_administrativo", "sex", model.sex))?,
            address_id: AddressId(model.address_id),
            address,
        },
        employment: EmploymentFields {
            job_title: model.job_title,
            salary: model.salary,
            bank_name: model.bank_name,
            bank_account: model.bank_account,
            status: EmploymentStatus::from_u8(model.status as u8).ok_or_else(|| {
                invalid_enum("funcionario_administrativo", "status", model.status)
            })?,
            terminated_on: model.terminated_on,
            work_starts_at: model.work_starts_at,
            work_ends_at: model.work_ends_at,
        },
    })
}

pub(crate) fn admin_staff_active_model(
    s: &AdminStaff,
) -> funcionarios_administrativos::ActiveModel {
    funcionarios_administrativos::ActiveModel {
        id: Set(s.id.0),
        cpf: Set(s.member.cpf.clone()),
        rg: Set(s.member.rg.clone()),
        full_name: Set(s.member.full_name.clone()),
        email: Set(s.member.email.clone()),
        phone: Set(s.member.phone.clone()),
        birth_date: Set(s.member.birth_date),
        joined_at: Set(s.member.joined_at),
        sex: Set(s.member.sex.as_u8() as i16),
        address_id: Set(s.member.address_id.0),
        job_title: Set(s.employment.job_title.clone()),
        salary: Set(s.employment.salary),
        bank_name: Set(s.employment.bank_name.clone()),
        bank_account: Set(s.employment.bank_account.clone()),
        status: Set(s.employment.status.as_u8() as i16),
        terminated_on: Set(s.employment.terminated_on),
        work_starts_at: Set(s.employment.work_starts_at),
        work_ends_at: Set(s.employment.work_ends_at),
    }
}

// ── Class-section repository ─────────────────────────────────────────────────

pub struct SectionRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<ClassSection> for SectionRepo<'_> {
    type Id = SectionId;
    type Options = GetOptions;

    fn add(&self, entity: ClassSection) {
        self.mgr.stage(StagedOp::Section(Op::Add(entity)));
    }

    fn update(&self, entity: ClassSection) {
        self.mgr.stage(StagedOp::Section(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: SectionId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<ClassSection>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            turmas::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find class section by id")?;
        model.map(section_from_model).transpose()
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<ClassSection>, RosterError> {
        let query = self.base_query(None, opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list class sections")?;
        models.into_iter().map(section_from_model).collect()
    }
}

impl Delete<ClassSection> for SectionRepo<'_> {
    fn delete(&self, entity: ClassSection) {
        self.mgr.stage(StagedOp::Section(Op::Delete(entity)));
    }
}

impl SectionRepo<'_> {
    fn base_query(&self, teacher: Option<EmployeeId>, opts: &GetOptions) -> sea_orm::Select<turmas::Entity> {
        let mut query = turmas::Entity::find();
        if let Some(teacher_id) = teacher {
            query = query.filter(turmas::Column::TeacherId.eq(teacher_id.0));
        }
        if let Some(col) = section_sort_column(opts) {
            query = query.order_with(col, opts.ascending);
        }
        query.order_with(turmas::Column::Id, true).page_with(opts)
    }

    /// Sections taught by one teacher, same bounded-listing semantics.
    pub async fn list_by_teacher(
        &self,
        teacher_id: EmployeeId,
        opts: &GetOptions,
    ) -> Result<Vec<ClassSection>, RosterError> {
        let query = self.base_query(Some(teacher_id), opts);
        let models = on_conn!(self.mgr, conn => query.all(conn).await)
            .context("list class sections by teacher")?;
        models.into_iter().map(section_from_model).collect()
    }
}

fn section_sort_column(opts: &GetOptions) -> Option<turmas::Column> {
    match opts.sort_key.as_deref()? {
        "subject" => Some(turmas::Column::Subject),
        "period" => Some(turmas::Column::Period),
        "starts_on" => Some(turmas::Column::StartsOn),
        "ends_on" => Some(turmas::Column::EndsOn),
        _ => None,
    }
}

fn section_from_model(model: turmas::Model) -> Result<ClassSection, RosterError> {
    Ok(ClassSection {
        id: SectionId(model.id),
        teacher_id: EmployeeId(model.teacher_id),
        subject: model.subject,
        period: SchoolPeriod::from_u8(model.period as u8)
            .ok_or_else(|| invalid_enum("turma", "period", model.period))?,
        starts_on: model.starts_on,
        ends_on: model.ends_on,
        class_starts_at: model.class_starts_at,
        class_ends_at: model.class_ends_at,
    })
}

pub(crate) fn section_active_model(s: &ClassSection) -> turmas::ActiveModel {
    turmas::ActiveModel {
        id: Set(s.id.0),
        teacher_id: Set(s.teacher_id.0),
        subject: Set(s.subject.clone()),
        period: Set(s.period.as_u8() as i16),
        starts_on: Set(s.starts_on),
        ends_on: Set(s.ends_on),
        class_starts_at: Set(s.class_starts_at),
        class_ends_at: Set(s.class_ends_at),
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

pub struct EnrollmentRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<Enrollment> for EnrollmentRepo<'_> {
    type Id = EnrollmentId;
    type Options = GetOptions;

    fn add(&self, entity: Enrollment) {
        self.mgr.stage(StagedOp::Enrollment(Op::Add(entity)));
    }

    fn update(&self, entity: Enrollment) {
        self.mgr.stage(StagedOp::Enrollment(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: EnrollmentId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<Enrollment>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            alunos_turma::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find enrollment by id")?;
        Ok(model.map(enrollment_from_model))
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<Enrollment>, RosterError> {
        let query = self.base_query(None, opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list enrollments")?;
        Ok(models.into_iter().map(enrollment_from_model).collect())
    }
}

impl Delete<Enrollment> for EnrollmentRepo<'_> {
    fn delete(&self, entity: Enrollment) {
        self.mgr.stage(StagedOp::Enrollment(Op::Delete(entity)));
    }
}

impl EnrollmentRepo<'_> {
    fn base_query(
        &self,
        cond: Option<SimpleExpr>,
        opts: &GetOptions,
    ) -> sea_orm::Select<alunos_turma::Entity> {
        let mut query = alunos_turma::Entity::find();
        if let Some(cond) = cond {
            query = query.filter(cond);
        }
        if let Some(col) = enrollment_sort_column(opts) {
            query = query.order_with(col, opts.ascending);
        }
        query
            .order_with(alunos_turma::Column::Id, true)
            .page_with(opts)
    }

    pub async fn list_by_student(
        &self,
        student_id: StudentId,
        opts: &GetOptions,
    ) -> Result<Vec<Enrollment>, RosterError> {
        let query = self.base_query(
            Some(alunos_turma::Column::StudentId.eq(student_id.0)),
            opts,
        );
        let models = on_conn!(self.mgr, conn => query.all(conn).await)
            .context("list enrollments by student")?;
        Ok(models.into_iter().map(enrollment_from_model).collect())
    }

    pub async fn list_by_section(
        &self,
        section_id: SectionId,
        opts: &GetOptions,
    ) -> Result<Vec<Enrollment>, RosterError> {
        let query = self.base_query(
            Some(alunos_turma::Column::SectionId.eq(section_id.0)),
            opts,
        );
        let models = on_conn!(self.mgr, conn => query.all(conn).await)
            .context("list enrollments by section")?;
        Ok(models.into_iter().map(enrollment_from_model).collect())
    }

    /// The unique enrollment for a (student, section) pair, if any.
    pub async fn find_by_pair(
        &self,
        student_id: StudentId,
        section_id: SectionId,
    ) -> Result<Option<Enrollment>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            alunos_turma::Entity::find()
                .filter(alunos_turma::Column::StudentId.eq(student_id.0))
                .filter(alunos_turma::Column::SectionId.eq(section_id.0))
                .one(conn)
                .await
        })
        .context("find enrollment by (student, section) pair")?;
        Ok(model.map(enrollment_from_model))
    }
}

fn enrollment_sort_column(opts: &GetOptions) -> Option<alunos_turma::Column> {
    match opts.sort_key.as_deref()? {
        "grade" => Some(alunos_turma::Column::Grade),
        _ => None,
    }
}

fn enrollment_from_model(model: alunos_turma::Model) -> Enrollment {
    Enrollment {
        id: EnrollmentId(model.id),
        student_id: StudentId(model.student_id),
        section_id: SectionId(model.section_id),
        grade: model.grade,
    }
}

pub(crate) fn enrollment_active_model(e: &Enrollment) -> alunos_turma::ActiveModel {
    alunos_turma::ActiveModel {
        id: Set(e.id.0),
        student_id: Set(e.student_id.0),
        section_id: Set(e.section_id.0),
        grade: Set(e.grade),
    }
}
