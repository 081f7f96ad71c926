//! Unit-of-work manager.
//!
//! Mutations are staged as an explicit operation journal and applied
//! atomically on [`RosterManager::save`]. Repositories obtained from one
//! manager share one journal and one connection; two managers are fully
//! isolated from each other until each commits.

use std::sync::Mutex;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    EntityTrait, TransactionTrait,
};

use escola_domain::account::{AdminAccount, AdminStaffAccount, StudentAccount, TeacherAccount};
use escola_domain::address::Address;
use escola_domain::employee::{AdminStaff, Teacher};
use escola_domain::section::{ClassSection, Enrollment};
use escola_domain::student::Student;
use escola_roster_schema::{alunos, alunos_turma, enderecos, funcionarios_administrativos,
    professores, turmas};

use crate::config::RosterConfig;
use crate::error::RosterError;
use crate::infra::accounts::{
    self, AdminAccountRepo, AdminStaffAccountRepo, StudentAccountRepo, TeacherAccountRepo,
};
use crate::infra::db::{
    self, AddressRepo, AdminStaffRepo, EnrollmentRepo, SectionRepo, StudentRepo, TeacherRepo,
};

/// One staged mutation. `update` carries the full record (full-record
/// replace semantics); `delete` only needs the primary key but keeps the
/// entity for uniform handling.
pub(crate) enum Op<E> {
    Add(E),
    Update(E),
    Delete(E),
}

impl<E> Op<E> {
    /// The entity about to be written, if this op writes one.
    fn written(&self) -> Option<&E> {
        match self {
            Op::Add(e) | Op::Update(e) => Some(e),
            Op::Delete(_) => None,
        }
    }
}

/// Journal entry, one variant per entity type.
pub(crate) enum StagedOp {
    Address(Op<Address>),
    Student(Op<Student>),
    Teacher(Op<Teacher>),
    AdminStaff(Op<AdminStaff>),
    Section(Op<ClassSection>),
    Enrollment(Op<Enrollment>),
    StudentAccount(Op<StudentAccount>),
    TeacherAccount(Op<TeacherAccount>),
    AdminStaffAccount(Op<AdminStaffAccount>),
    AdminAccount(Op<AdminAccount>),
}

impl StagedOp {
    fn entity_name(&self) -> &'static str {
        match self {
            Self::Address(_) => "endereco",
            Self::Student(_) => "aluno",
            Self::Teacher(_) => "professor",
            Self::AdminStaff(_) => "funcionario_administrativo",
            Self::Section(_) => "turma",
            Self::Enrollment(_) => "aluno_turma",
            Self::StudentAccount(_) => "usuario_aluno",
            Self::TeacherAccount(_) => "usuario_professor",
            Self::AdminStaffAccount(_) => "usuario_administrativo",
            Self::AdminAccount(_) => "usuario_admin",
        }
    }

    fn validate(&self) -> Result<(), RosterError> {
        let result = match self {
            Self::Address(op) => op.written().map(|e| e.validate()),
            Self::Student(op) => op.written().map(|e| e.validate()),
            Self::Teacher(op) => op.written().map(|e| e.validate()),
            Self::AdminStaff(op) => op.written().map(|e| e.validate()),
            Self::Section(op) => op.written().map(|e| e.validate()),
            Self::Enrollment(op) => op.written().map(|e| e.validate()),
            Self::StudentAccount(op) => op.written().map(|e| e.validate()),
            Self::TeacherAccount(op) => op.written().map(|e| e.validate()),
            Self::AdminStaffAccount(op) => op.written().map(|e| e.validate()),
            Self::AdminAccount(op) => op.written().map(|e| e.validate()),
        };
        match result {
            Some(Err(err)) => Err(RosterError::validation(self.entity_name(), err)),
            _ => Ok(()),
        }
    }
}

/// Aggregates one repository handle per entity type over a shared staging
/// journal and connection.
///
/// One logical unit of work at a time: callers serialize access to a
/// manager, or use separate managers for concurrent work.
pub struct RosterManager {
    db: DatabaseConnection,
    txn: Option<DatabaseTransaction>,
    pending: Mutex<Vec<StagedOp>>,
}

impl RosterManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            txn: None,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Connect to the configured database and wrap the connection.
    pub async fn connect(config: &RosterConfig) -> Result<Self, RosterError> {
        let db = Database::connect(config.database_url.as_str())
            .await
            .context("connect to database")?;
        Ok(Self::new(db))
    }

    pub fn addresses(&self) -> AddressRepo<'_> {
        AddressRepo { mgr: self }
    }

    pub fn students(&self) -> StudentRepo<'_> {
        StudentRepo { mgr: self }
    }

    pub fn teachers(&self) -> TeacherRepo<'_> {
        TeacherRepo { mgr: self }
    }

    pub fn admin_staff(&self) -> AdminStaffRepo<'_> {
        AdminStaffRepo { mgr: self }
    }

    pub fn sections(&self) -> SectionRepo<'_> {
        SectionRepo { mgr: self }
    }

    pub fn enrollments(&self) -> EnrollmentRepo<'_> {
        EnrollmentRepo { mgr: self }
    }

    pub fn student_accounts(&self) -> StudentAccountRepo<'_> {
        StudentAccountRepo { mgr: self }
    }

    pub fn teacher_accounts(&self) -> TeacherAccountRepo<'_> {
        TeacherAccountRepo { mgr: self }
    }

    pub fn admin_staff_accounts(&self) -> AdminStaffAccountRepo<'_> {
        AdminStaffAccountRepo { mgr: self }
    }

    pub fn admin_accounts(&self) -> AdminAccountRepo<'_> {
        AdminAccountRepo { mgr: self }
    }

    pub(crate) fn stage(&self, op: StagedOp) {
        self.pending.lock().unwrap().push(op);
    }

    pub(crate) fn active_txn(&self) -> Option<&DatabaseTransaction> {
        self.txn.as_ref()
    }

    pub(crate) fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Number of staged, unsaved operations.
    pub fn pending_ops(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Open an explicit transaction scope. Until `commit` or `rollback`,
    /// every lookup and save on this manager runs inside it.
    pub async fn begin(&mut self) -> Result<(), RosterError> {
        if self.txn.is_some() {
            return Err(RosterError::Storage(anyhow::anyhow!(
                "transaction already open on this manager"
            )));
        }
        let txn = self.db.begin().await.context("begin transaction")?;
        self.txn = Some(txn);
        Ok(())
    }

    /// Commit the explicit transaction opened with [`Self::begin`].
    pub async fn commit(&mut self) -> Result<(), RosterError> {
        match self.txn.take() {
            Some(txn) => {
                txn.commit().await.context("commit transaction")?;
                Ok(())
            }
            None => Err(RosterError::Storage(anyhow::anyhow!(
                "no open transaction to commit"
            ))),
        }
    }

    /// Discard the journal and everything saved since [`Self::begin`].
    pub async fn rollback(&mut self) -> Result<(), RosterError> {
        self.pending.lock().unwrap().clear();
        match self.txn.take() {
            Some(txn) => {
                txn.rollback().await.context("roll back transaction")?;
                Ok(())
            }
            None => Err(RosterError::Storage(anyhow::anyhow!(
                "no open transaction to roll back"
            ))),
        }
    }

    /// Validate and apply every staged operation, in staging order, as one
    /// atomic batch.
    ///
    /// Inside an explicit transaction scope the batch is applied to that
    /// transaction and becomes durable on `commit`; otherwise a fresh
    /// transaction is committed before returning. The journal is drained
    /// whether `save` succeeds or fails; a failed batch leaves the store
    /// untouched and the caller re-stages.
    pub async fn save(&self) -> Result<(), RosterError> {
        let ops: Vec<StagedOp> = {
            let mut pending = self.pending.lock().unwrap();
            pending.drain(..).collect()
        };
        if ops.is_empty() {
            return Ok(());
        }
        for op in &ops {
            op.validate()?;
        }
        match self.active_txn() {
            Some(txn) => apply_all(txn, &ops).await?,
            None => {
                let txn = self
                    .db
                    .begin()
                    .await
                    .context("begin unit-of-work transaction")?;
                if let Err(err) = apply_all(&txn, &ops).await {
                    let _ = txn.rollback().await;
                    return Err(err);
                }
                txn.commit().await.context("commit unit of work")?;
            }
        }
        tracing::debug!(ops = ops.len(), "unit of work applied");
        Ok(())
    }
}

macro_rules! apply_variant {
    ($conn:expr, $name:literal, $op:expr, $build:expr, $delete:expr) => {
        match $op {
            Op::Add(e) => $build(e).insert($conn).await.map(drop),
            Op::Update(e) => $build(e).update($conn).await.map(drop),
            Op::Delete(e) => $delete(e).exec($conn).await.map(drop),
        }
        .map_err(|err| RosterError::from_db($name, err))
    };
}

async fn apply_all<C: ConnectionTrait>(conn: &C, ops: &[StagedOp]) -> Result<(), RosterError> {
    for op in ops {
        apply(conn, op).await?;
    }
    Ok(())
}

async fn apply<C: ConnectionTrait>(conn: &C, op: &StagedOp) -> Result<(), RosterError> {
    match op {
        StagedOp::Address(step) => apply_variant!(
            conn,
            "endereco",
            step,
            db::address_active_model,
            |e: &Address| enderecos::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::Student(step) => apply_variant!(
            conn,
            "aluno",
            step,
            db::student_active_model,
            |e: &Student| alunos::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::Teacher(step) => apply_variant!(
            conn,
            "professor",
            step,
            db::teacher_active_model,
            |e: &Teacher| professores::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::AdminStaff(step) => apply_variant!(
            conn,
            "funcionario_administrativo",
            step,
            db::admin_staff_active_model,
            |e: &AdminStaff| funcionarios_administrativos::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::Section(step) => apply_variant!(
            conn,
            "turma",
            step,
            db::section_active_model,
            |e: &ClassSection| turmas::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::Enrollment(step) => apply_variant!(
            conn,
            "aluno_turma",
            step,
            db::enrollment_active_model,
            |e: &Enrollment| alunos_turma::Entity::delete_by_id(e.id.0)
        ),
        StagedOp::StudentAccount(step) => match step {
            Op::Add(e) => accounts::student_account_active_model(e)
                .insert(conn)
                .await
                .map(drop),
            Op::Update(e) => accounts::student_account_active_model(e)
                .update(conn)
                .await
                .map(drop),
            Op::Delete(_) => unreachable!("account repositories expose no delete"),
        }
        .map_err(|err| RosterError::from_db("usuario_aluno", err)),
        StagedOp::TeacherAccount(step) => match step {
            Op::Add(e) => accounts::teacher_account_active_model(e)
                .insert(conn)
                .await
                .map(drop),
            Op::Update(e) => accounts::teacher_account_active_model(e)
                .update(conn)
                .await
                .map(drop),
            Op::Delete(_) => unreachable!("account repositories expose no delete"),
        }
        .map_err(|err| RosterError::from_db("usuario_professor", err)),
        StagedOp::AdminStaffAccount(step) => match step {
            Op::Add(e) => accounts::admin_staff_account_active_model(e)
                .insert(conn)
                .await
                .map(drop),
            Op::Update(e) => accounts::admin_staff_account_active_model(e)
                .update(conn)
                .await
                .map(drop),
            Op::Delete(_) => unreachable!("account repositories expose no delete"),
        }
        .map_err(|err| RosterError::from_db("usuario_administrativo", err)),
        StagedOp::AdminAccount(step) => match step {
            Op::Add(e) => accounts::admin_account_active_model(e)
                .insert(conn)
                .await
                .map(drop),
            Op::Update(e) => accounts::admin_account_active_model(e)
                .update(conn)
                .await
                .map(drop),
            Op::Delete(_) => unreachable!("account repositories expose no delete"),
        }
        .map_err(|err| RosterError::from_db("usuario_admin", err)),
    }
}
