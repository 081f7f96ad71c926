use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsuariosProfessores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsuariosProfessores::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosProfessores::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosProfessores::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosProfessores::Salt)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosProfessores::TeacherId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UsuariosProfessores::Table, UsuariosProfessores::TeacherId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsuariosProfessores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsuariosProfessores {
    Table,
    Id,
    Email,
    PasswordHash,
    Salt,
    TeacherId,
}

#[derive(Iden)]
enum Professores {
    Table,
    Id,
}
