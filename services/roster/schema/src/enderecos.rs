use sea_orm::entity::prelude::*;

/// Postal address record. Members reference addresses with a required FK;
/// the FK is RESTRICT, so a referenced address cannot be deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enderecos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub city: String,
    /// Two-letter federal-unit code, uppercase.
    pub state: String,
    pub postal_code: String,
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alunos::Entity")]
    Alunos,
    #[sea_orm(has_many = "super::professores::Entity")]
    Professores,
    #[sea_orm(has_many = "super::funcionarios_administrativos::Entity")]
    FuncionariosAdministrativos,
}

impl Related<super::alunos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alunos.def()
    }
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professores.def()
    }
}

impl Related<super::funcionarios_administrativos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuncionariosAdministrativos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
