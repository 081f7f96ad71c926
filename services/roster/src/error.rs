use sea_orm::{DbErr, SqlErr};

use escola_domain::validate::ValidationError;

/// Roster service error taxonomy.
///
/// Lookups signal a missing record with `Ok(None)`; `NotFound` is for
/// callers that require presence. Storage failures propagate un-wrapped
/// (with entity context attached via anyhow) — nothing is swallowed here.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
    #[error("{entity} failed validation: {message}")]
    Validation {
        entity: &'static str,
        message: String,
    },
    #[error("{entity} conflicts with existing data: {message}")]
    Conflict {
        entity: &'static str,
        message: String,
    },
    #[error("storage error")]
    Storage(#[from] anyhow::Error),
}

impl RosterError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION",
            Self::Conflict { .. } => "CONFLICT",
            Self::Storage(_) => "STORAGE",
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn validation(entity: &'static str, err: ValidationError) -> Self {
        Self::Validation {
            entity,
            message: err.to_string(),
        }
    }

    /// Classify a failure from applying a staged operation: uniqueness and
    /// foreign-key violations become `Conflict`, a missed full-record
    /// update becomes `NotFound`, everything else stays a storage error.
    pub(crate) fn from_db(entity: &'static str, err: DbErr) -> Self {
        if matches!(err, DbErr::RecordNotUpdated) {
            return Self::NotFound {
                entity,
                key: "update target".into(),
            };
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::Conflict { entity, message },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Self::Conflict { entity, message }
            }
            _ => Self::Storage(
                anyhow::Error::new(err).context(format!("apply staged {entity} operation")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_stable_kind_codes() {
        assert_eq!(RosterError::not_found("aluno", "x").kind(), "NOT_FOUND");
        assert_eq!(
            RosterError::Validation {
                entity: "endereco",
                message: "street: too short".into()
            }
            .kind(),
            "VALIDATION"
        );
        assert_eq!(
            RosterError::Conflict {
                entity: "aluno_turma",
                message: "duplicate pair".into()
            }
            .kind(),
            "CONFLICT"
        );
        assert_eq!(
            RosterError::Storage(anyhow::anyhow!("db down")).kind(),
            "STORAGE"
        );
    }

    #[test]
    fn should_include_entity_and_key_in_not_found_message() {
        let err = RosterError::not_found("professor", "12345678901");
        assert_eq!(err.to_string(), "professor not found: 12345678901");
    }

    #[test]
    fn should_wrap_validation_error_with_entity() {
        let err = RosterError::validation(
            "endereco",
            ValidationError::new("number", "must be positive"),
        );
        assert_eq!(
            err.to_string(),
            "endereco failed validation: number: must be positive"
        );
    }

    #[test]
    fn should_classify_missed_update_as_not_found() {
        let err = RosterError::from_db("aluno", DbErr::RecordNotUpdated);
        assert_eq!(err.kind(), "NOT_FOUND");
    }

    #[test]
    fn should_keep_unclassified_db_errors_as_storage() {
        let err = RosterError::from_db("aluno", DbErr::Custom("boom".into()));
        assert_eq!(err.kind(), "STORAGE");
    }
}
