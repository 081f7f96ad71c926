//! sea-orm entities for the roster service.
//!
//! One table per concrete entity type. Table names keep the legacy
//! Portuguese identifiers so the schema stays compatible with existing
//! deployments; columns and Rust identifiers are English.

pub mod alunos;
pub mod alunos_turma;
pub mod enderecos;
pub mod funcionarios_administrativos;
pub mod professores;
pub mod turmas;
pub mod usuarios_administrativos;
pub mod usuarios_admins;
pub mod usuarios_alunos;
pub mod usuarios_professores;
