use sea_orm::entity::prelude::*;

/// Administrative-staff login account, 1:1 with a staff record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios_administrativos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    #[sea_orm(unique)]
    pub staff_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::funcionarios_administrativos::Entity",
        from = "Column::StaffId",
        to = "super::funcionarios_administrativos::Column::Id"
    )]
    Funcionario,
}

impl Related<super::funcionarios_administrativos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Funcionario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
