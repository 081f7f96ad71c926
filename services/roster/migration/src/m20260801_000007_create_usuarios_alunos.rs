use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsuariosAlunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsuariosAlunos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAlunos::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAlunos::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAlunos::Salt)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UsuariosAlunos::StudentId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UsuariosAlunos::Table, UsuariosAlunos::StudentId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsuariosAlunos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsuariosAlunos {
    Table,
    Id,
    Email,
    PasswordHash,
    Salt,
    StudentId,
}

#[derive(Iden)]
enum Alunos {
    Table,
    Id,
}
