use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alunos::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Alunos::Cpf)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Alunos::Rg)
                            .string_len(9)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alunos::FullName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Alunos::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Alunos::Phone)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alunos::BirthDate).date().not_null())
                    .col(ColumnDef::new(Alunos::JoinedAt).date().not_null())
                    .col(ColumnDef::new(Alunos::Sex).small_integer().not_null())
                    .col(ColumnDef::new(Alunos::AddressId).uuid().not_null())
                    .col(ColumnDef::new(Alunos::Period).small_integer().not_null())
                    .col(ColumnDef::new(Alunos::Status).small_integer().not_null())
                    .col(ColumnDef::new(Alunos::Shift).small_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::AddressId)
                            .to(Enderecos::Table, Enderecos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Alunos {
    Table,
    Id,
    Cpf,
    Rg,
    FullName,
    Email,
    Phone,
    BirthDate,
    JoinedAt,
    Sex,
    AddressId,
    Period,
    Status,
    Shift,
}

#[derive(Iden)]
enum Enderecos {
    Table,
    Id,
}
