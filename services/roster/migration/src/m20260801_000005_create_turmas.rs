use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Turmas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Turmas::TeacherId).uuid().not_null())
                    .col(ColumnDef::new(Turmas::Subject).string_len(50).not_null())
                    .col(ColumnDef::new(Turmas::Period).small_integer().not_null())
                    .col(ColumnDef::new(Turmas::StartsOn).date().not_null())
                    .col(ColumnDef::new(Turmas::EndsOn).date().not_null())
                    .col(ColumnDef::new(Turmas::ClassStartsAt).time().not_null())
                    .col(ColumnDef::new(Turmas::ClassEndsAt).time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Turmas::Table, Turmas::TeacherId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Turmas {
    Table,
    Id,
    TeacherId,
    Subject,
    Period,
    StartsOn,
    EndsOn,
    ClassStartsAt,
    ClassEndsAt,
}

#[derive(Iden)]
enum Professores {
    Table,
    Id,
}
