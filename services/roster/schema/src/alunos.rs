use sea_orm::entity::prelude::*;

/// Student record. The primary key is the registration id; cpf, rg, email,
/// and phone are natural keys, unique among students.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alunos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub cpf: String,
    #[sea_orm(unique)]
    pub rg: String,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub birth_date: chrono::NaiveDate,
    pub joined_at: chrono::NaiveDate,
    pub sex: i16,
    pub address_id: Uuid,
    pub period: i16,
    pub status: i16,
    pub shift: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enderecos::Entity",
        from = "Column::AddressId",
        to = "super::enderecos::Column::Id"
    )]
    Endereco,
    #[sea_orm(has_many = "super::alunos_turma::Entity")]
    AlunosTurma,
}

impl Related<super::enderecos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Endereco.def()
    }
}

impl Related<super::alunos_turma::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlunosTurma.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
