use sea_orm::entity::prelude::*;

/// Class section: a subject taught by one teacher over a date window with
/// a fixed daily time slot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "turmas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub subject: String,
    pub period: i16,
    pub starts_on: chrono::NaiveDate,
    pub ends_on: chrono::NaiveDate,
    pub class_starts_at: chrono::NaiveTime,
    pub class_ends_at: chrono::NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professores::Entity",
        from = "Column::TeacherId",
        to = "super::professores::Column::Id"
    )]
    Professor,
    #[sea_orm(has_many = "super::alunos_turma::Entity")]
    AlunosTurma,
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::alunos_turma::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlunosTurma.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
