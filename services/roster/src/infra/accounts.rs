//! sea-orm repositories for the login-account types.
//!
//! One repository per role; none implements [`Delete`] — accounts are
//! deactivated through updates, never removed.

use anyhow::Context as _;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use escola_core::sea_ext::SelectOptionsExt;
use escola_domain::account::{
    AccountFields, AdminAccount, AdminStaffAccount, StudentAccount, TeacherAccount,
};
use escola_domain::id::{AccountId, EmployeeId, StudentId};
use escola_domain::options::GetOptions;
use escola_roster_schema::{
    usuarios_administrativos, usuarios_admins, usuarios_alunos, usuarios_professores,
};

use crate::domain::repository::Repository;
use crate::error::RosterError;
use crate::infra::on_conn;
use crate::infra::uow::{Op, RosterManager, StagedOp};

fn wants_email_sort(opts: &GetOptions) -> bool {
    opts.sort_key.as_deref() == Some("email")
}

// ── Student accounts ─────────────────────────────────────────────────────────

pub struct StudentAccountRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<StudentAccount> for StudentAccountRepo<'_> {
    type Id = AccountId;
    type Options = GetOptions;

    fn add(&self, entity: StudentAccount) {
        self.mgr.stage(StagedOp::StudentAccount(Op::Add(entity)));
    }

    fn update(&self, entity: StudentAccount) {
        self.mgr.stage(StagedOp::StudentAccount(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: AccountId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<StudentAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_alunos::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find student account by id")?;
        Ok(model.map(student_account_from_model))
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<StudentAccount>, RosterError> {
        let mut query = usuarios_alunos::Entity::find();
        if wants_email_sort(opts) {
            query = query.order_with(usuarios_alunos::Column::Email, opts.ascending);
        }
        query = query
            .order_with(usuarios_alunos::Column::Id, true)
            .page_with(opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list student accounts")?;
        Ok(models.into_iter().map(student_account_from_model).collect())
    }
}

impl StudentAccountRepo<'_> {
    pub async fn find_by_email(&self, email: &str) -> Result<Option<StudentAccount>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        let model = on_conn!(self.mgr, conn => {
            usuarios_alunos::Entity::find()
                .filter(usuarios_alunos::Column::Email.eq(email))
                .one(conn)
                .await
        })
        .context("find student account by email")?;
        Ok(model.map(student_account_from_model))
    }

    pub async fn find_by_member(
        &self,
        student_id: StudentId,
    ) -> Result<Option<StudentAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_alunos::Entity::find()
                .filter(usuarios_alunos::Column::StudentId.eq(student_id.0))
                .one(conn)
                .await
        })
        .context("find student account by member")?;
        Ok(model.map(student_account_from_model))
    }
}

fn student_account_from_model(model: usuarios_alunos::Model) -> StudentAccount {
    StudentAccount {
        account: AccountFields {
            id: AccountId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            salt: model.salt,
        },
        student_id: StudentId(model.student_id),
    }
}

pub(crate) fn student_account_active_model(a: &StudentAccount) -> usuarios_alunos::ActiveModel {
    usuarios_alunos::ActiveModel {
        id: Set(a.account.id.0),
        email: Set(a.account.email.clone()),
        password_hash: Set(a.account.password_hash.clone()),
        salt: Set(a.account.salt.clone()),
        student_id: Set(a.student_id.0),
    }
}

// ── Teacher accounts ─────────────────────────────────────────────────────────

pub struct TeacherAccountRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<TeacherAccount> for TeacherAccountRepo<'_> {
    type Id = AccountId;
    type Options = GetOptions;

    fn add(&self, entity: TeacherAccount) {
        self.mgr.stage(StagedOp::TeacherAccount(Op::Add(entity)));
    }

    fn update(&self, entity: TeacherAccount) {
        self.mgr.stage(StagedOp::TeacherAccount(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: AccountId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<TeacherAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_professores::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find teacher account by id")?;
        Ok(model.map(teacher_account_from_model))
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<TeacherAccount>, RosterError> {
        let mut query = usuarios_professores::Entity::find();
        if wants_email_sort(opts) {
            query = query.order_with(usuarios_professores::Column::Email, opts.ascending);
        }
        query = query
            .order_with(usuarios_professores::Column::Id, true)
            .page_with(opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list teacher accounts")?;
        Ok(models.into_iter().map(teacher_account_from_model).collect())
    }
}

impl TeacherAccountRepo<'_> {
    pub async fn find_by_email(&self, email: &str) -> Result<Option<TeacherAccount>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        let model = on_conn!(self.mgr, conn => {
            usuarios_professores::Entity::find()
                .filter(usuarios_professores::Column::Email.eq(email))
                .one(conn)
                .await
        })
        .context("find teacher account by email")?;
        Ok(model.map(teacher_account_from_model))
    }

    pub async fn find_by_member(
        &self,
        teacher_id: EmployeeId,
    ) -> Result<Option<TeacherAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_professores::Entity::find()
                .filter(usuarios_professores::Column::TeacherId.eq(teacher_id.0))
                .one(conn)
                .await
        })
        .context("find teacher account by member")?;
        Ok(model.map(teacher_account_from_model))
    }
}

fn teacher_account_from_model(model: usuarios_professores::Model) -> TeacherAccount {
    TeacherAccount {
        account: AccountFields {
            id: AccountId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            salt: model.salt,
        },
        teacher_id: EmployeeId(model.teacher_id),
    }
}

pub(crate) fn teacher_account_active_model(
    a: &TeacherAccount,
) -> usuarios_professores::ActiveModel {
    usuarios_professores::ActiveModel {
        id: Set(a.account.id.0),
        email: Set(a.account.email.clone()),
        password_hash: Set(a.account.password_hash.clone()),
        salt: Set(a.account.salt.clone()),
        teacher_id: Set(a.teacher_id.0),
    }
}

// ── Administrative-staff accounts ────────────────────────────────────────────

pub struct AdminStaffAccountRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<AdminStaffAccount> for AdminStaffAccountRepo<'_> {
    type Id = AccountId;
    type Options = GetOptions;

    fn add(&self, entity: AdminStaffAccount) {
        self.mgr.stage(StagedOp::AdminStaffAccount(Op::Add(entity)));
    }

    fn update(&self, entity: AdminStaffAccount) {
        self.mgr
            .stage(StagedOp::AdminStaffAccount(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: AccountId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<AdminStaffAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_administrativos::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find staff account by id")?;
        Ok(model.map(admin_staff_account_from_model))
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<AdminStaffAccount>, RosterError> {
        let mut query = usuarios_administrativos::Entity::find();
        if wants_email_sort(opts) {
            query = query.order_with(usuarios_administrativos::Column::Email, opts.ascending);
        }
        query = query
            .order_with(usuarios_administrativos::Column::Id, true)
            .page_with(opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list staff accounts")?;
        Ok(models
            .into_iter()
            .map(admin_staff_account_from_model)
            .collect())
    }
}

impl AdminStaffAccountRepo<'_> {
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminStaffAccount>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        let model = on_conn!(self.mgr, conn => {
            usuarios_administrativos::Entity::find()
                .filter(usuarios_administrativos::Column::Email.eq(email))
                .one(conn)
                .await
        })
        .context("find staff account by email")?;
        Ok(model.map(admin_staff_account_from_model))
    }

    pub async fn find_by_member(
        &self,
        staff_id: EmployeeId,
    ) -> Result<Option<AdminStaffAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_administrativos::Entity::find()
                .filter(usuarios_administrativos::Column::StaffId.eq(staff_id.0))
                .one(conn)
                .await
        })
        .context("find staff account by member")?;
        Ok(model.map(admin_staff_account_from_model))
    }
}

fn admin_staff_account_from_model(model: usuarios_administrativos::Model) -> AdminStaffAccount {
    AdminStaffAccount {
        account: AccountFields {
            id: AccountId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            salt: model.salt,
        },
        staff_id: EmployeeId(model.staff_id),
    }
}

pub(crate) fn admin_staff_account_active_model(
    a: &AdminStaffAccount,
) -> usuarios_administrativos::ActiveModel {
    usuarios_administrativos::ActiveModel {
        id: Set(a.account.id.0),
        email: Set(a.account.email.clone()),
        password_hash: Set(a.account.password_hash.clone()),
        salt: Set(a.account.salt.clone()),
        staff_id: Set(a.staff_id.0),
    }
}

// ── System administrator accounts ────────────────────────────────────────────

pub struct AdminAccountRepo<'a> {
    pub(crate) mgr: &'a RosterManager,
}

impl Repository<AdminAccount> for AdminAccountRepo<'_> {
    type Id = AccountId;
    type Options = GetOptions;

    fn add(&self, entity: AdminAccount) {
        self.mgr.stage(StagedOp::AdminAccount(Op::Add(entity)));
    }

    fn update(&self, entity: AdminAccount) {
        self.mgr.stage(StagedOp::AdminAccount(Op::Update(entity)));
    }

    async fn find_by_id(
        &self,
        id: AccountId,
        _opts: Option<&GetOptions>,
    ) -> Result<Option<AdminAccount>, RosterError> {
        let model = on_conn!(self.mgr, conn => {
            usuarios_admins::Entity::find_by_id(id.0).one(conn).await
        })
        .context("find admin account by id")?;
        Ok(model.map(admin_account_from_model))
    }

    async fn list(&self, opts: &GetOptions) -> Result<Vec<AdminAccount>, RosterError> {
        let mut query = usuarios_admins::Entity::find();
        if wants_email_sort(opts) {
            query = query.order_with(usuarios_admins::Column::Email, opts.ascending);
        }
        query = query
            .order_with(usuarios_admins::Column::Id, true)
            .page_with(opts);
        let models =
            on_conn!(self.mgr, conn => query.all(conn).await).context("list admin accounts")?;
        Ok(models.into_iter().map(admin_account_from_model).collect())
    }
}

impl AdminAccountRepo<'_> {
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, RosterError> {
        if email.is_empty() {
            return Ok(None);
        }
        let model = on_conn!(self.mgr, conn => {
            usuarios_admins::Entity::find()
                .filter(usuarios_admins::Column::Email.eq(email))
                .one(conn)
                .await
        })
        .context("find admin account by email")?;
        Ok(model.map(admin_account_from_model))
    }
}

fn admin_account_from_model(model: usuarios_admins::Model) -> AdminAccount {
    AdminAccount {
        account: AccountFields {
            id: AccountId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            salt: model.salt,
        },
    }
}

pub(crate) fn admin_account_active_model(a: &AdminAccount) -> usuarios_admins::ActiveModel {
    usuarios_admins::ActiveModel {
        id: Set(a.account.id.0),
        email: Set(a.account.email.clone()),
        password_hash: Set(a.account.password_hash.clone()),
        salt: Set(a.account.salt.clone()),
    }
}
