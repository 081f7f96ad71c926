use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsuariosAdministrativos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsuariosAdministrativos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAdministrativos::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAdministrativos::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAdministrativos::Salt)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAdministrativos::StaffId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                UsuariosAdministrativos::Table,
                                UsuariosAdministrativos::StaffId,
                            )
                            .to(Funcionarios::Table, Funcionarios::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsuariosAdministrativos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsuariosAdministrativos {
    Table,
    Id,
    Email,
    PasswordHash,
    Salt,
    StaffId,
}

#[derive(Iden)]
enum Funcionarios {
    #[iden = "funcionarios_administrativos"]
    Table,
    Id,
}
