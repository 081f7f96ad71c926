use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::Cpf)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::Rg)
                            .string_len(9)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::FullName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professores::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::Phone)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professores::BirthDate).date().not_null())
                    .col(ColumnDef::new(Professores::JoinedAt).date().not_null())
                    .col(ColumnDef::new(Professores::Sex).small_integer().not_null())
                    .col(ColumnDef::new(Professores::AddressId).uuid().not_null())
                    .col(
                        ColumnDef::new(Professores::JobTitle)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professores::Salary).double().not_null())
                    .col(
                        ColumnDef::new(Professores::BankName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professores::BankAccount)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professores::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professores::TerminatedOn).date())
                    .col(ColumnDef::new(Professores::WorkStartsAt).time().not_null())
                    .col(ColumnDef::new(Professores::WorkEndsAt).time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Professores::Table, Professores::AddressId)
                            .to(Enderecos::Table, Enderecos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Professores {
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
    JobTitle,
    Salary,
    BankName,
    BankAccount,
    Status,
    TerminatedOn,
    WorkStartsAt,
    WorkEndsAt,
}

#[derive(Iden)]
enum Enderecos {
    Table,
    Id,
}
