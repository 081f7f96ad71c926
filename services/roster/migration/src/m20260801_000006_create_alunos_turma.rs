use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AlunosTurma::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AlunosTurma::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AlunosTurma::StudentId).uuid().not_null())
                    .col(ColumnDef::new(AlunosTurma::SectionId).uuid().not_null())
                    .col(
                        ColumnDef::new(AlunosTurma::Grade)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AlunosTurma::Table, AlunosTurma::StudentId)
                            .to(Alunos::Table, Alunos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AlunosTurma::Table, AlunosTurma::SectionId)
                            .to(Turmas::Table, Turmas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One enrollment per (student, section) pair.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alunos_turma_student_section")
                    .table(AlunosTurma::Table)
                    .col(AlunosTurma::StudentId)
                    .col(AlunosTurma::SectionId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AlunosTurma::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AlunosTurma {
    Table,
    Id,
    StudentId,
    SectionId,
    Grade,
}

#[derive(Iden)]
enum Alunos {
    Table,
    Id,
}

#[derive(Iden)]
enum Turmas {
    Table,
    Id,
}
