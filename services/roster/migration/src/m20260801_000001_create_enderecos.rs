use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enderecos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enderecos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Enderecos::City).string_len(100).not_null())
                    .col(ColumnDef::new(Enderecos::State).char_len(2).not_null())
                    .col(ColumnDef::new(Enderecos::PostalCode).char_len(8).not_null())
                    .col(ColumnDef::new(Enderecos::Street).string_len(300).not_null())
                    .col(ColumnDef::new(Enderecos::Number).integer().not_null())
                    .col(ColumnDef::new(Enderecos::Complement).string_len(50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enderecos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enderecos {
    Table,
    Id,
    City,
    State,
    PostalCode,
    Street,
    Number,
    Complement,
}
