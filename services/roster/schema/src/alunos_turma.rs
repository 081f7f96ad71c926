use sea_orm::entity::prelude::*;

/// Enrollment link between a student and a class section, carrying the
/// grade. The (student_id, section_id) pair is unique (index created by
/// the migration).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alunos_turma")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub section_id: Uuid,
    pub grade: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alunos::Entity",
        from = "Column::StudentId",
        to = "super::alunos::Column::Id"
    )]
    Aluno,
    #[sea_orm(
        belongs_to = "super::turmas::Entity",
        from = "Column::SectionId",
        to = "super::turmas::Column::Id"
    )]
    Turma,
}

impl Related<super::alunos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turma.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
