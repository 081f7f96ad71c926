use sea_orm_migration::prelude::*;

mod m20260801_000001_create_enderecos;
mod m20260801_000002_create_alunos;
mod m20260801_000003_create_professores;
mod m20260801_000004_create_funcionarios_administrativos;
mod m20260801_000005_create_turmas;
mod m20260801_000006_create_alunos_turma;
mod m20260801_000007_create_usuarios_alunos;
mod m20260801_000008_create_usuarios_professores;
mod m20260801_000009_create_usuarios_administrativos;
mod m20260801_000010_create_usuarios_admins;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_enderecos::Migration),
            Box::new(m20260801_000002_create_alunos::Migration),
            Box::new(m20260801_000003_create_professores::Migration),
            Box::new(m20260801_000004_create_funcionarios_administrativos::Migration),
            Box::new(m20260801_000005_create_turmas::Migration),
            Box::new(m20260801_000006_create_alunos_turma::Migration),
            Box::new(m20260801_000007_create_usuarios_alunos::Migration),
            Box::new(m20260801_000008_create_usuarios_professores::Migration),
            Box::new(m20260801_000009_create_usuarios_administrativos::Migration),
            Box::new(m20260801_000010_create_usuarios_admins::Migration),
        ]
    }
}
