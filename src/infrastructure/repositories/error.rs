use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Translate a sqlx failure into the domain vocabulary. Constraint
/// violations become conflicts or not-found; everything else is persistence.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation if db_err.message().contains("articles.slug") => {
                DomainError::Conflict("slug already exists".into())
            }
            ErrorKind::UniqueViolation if db_err.message().contains("admins.email") => {
                DomainError::Conflict("admin email already exists".into())
            }
            ErrorKind::UniqueViolation => {
                DomainError::Conflict("unique constraint violated".into())
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn flag(value: bool) -> i64 {
    i64::from(value)
}
