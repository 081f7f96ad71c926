use sea_orm::entity::prelude::*;

/// Teacher record: member fields plus the employment contract columns.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professores")]
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
    pub job_title: String,
    pub salary: f64,
    pub bank_name: String,
    pub bank_account: String,
    pub status: i16,
    pub terminated_on: Option<chrono::NaiveDate>,
    pub work_starts_at: chrono::NaiveTime,
    pub work_ends_at: chrono::NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enderecos::Entity",
        from = "Column::AddressId",
        to = "super::enderecos::Column::Id"
    )]
    Endereco,
    #[sea_orm(has_many = "super::turmas::Entity")]
    Turmas,
}

impl Related<super::enderecos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Endereco.def()
    }
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turmas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
