use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Funcionarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Funcionarios::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Cpf)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Rg)
                            .string_len(9)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::FullName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Phone)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Funcionarios::BirthDate).date().not_null())
                    .col(ColumnDef::new(Funcionarios::JoinedAt).date().not_null())
                    .col(ColumnDef::new(Funcionarios::Sex).small_integer().not_null())
                    .col(ColumnDef::new(Funcionarios::AddressId).uuid().not_null())
                    .col(
                        ColumnDef::new(Funcionarios::JobTitle)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Funcionarios::Salary).double().not_null())
                    .col(
                        ColumnDef::new(Funcionarios::BankName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::BankAccount)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Funcionarios::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Funcionarios::TerminatedOn).date())
                    .col(ColumnDef::new(Funcionarios::WorkStartsAt).time().not_null())
                    .col(ColumnDef::new(Funcionarios::WorkEndsAt).time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Funcionarios::Table, Funcionarios::AddressId)
                            .to(Enderecos::Table, Enderecos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Funcionarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Funcionarios {
    #[iden = "funcionarios_administrativos"]
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
