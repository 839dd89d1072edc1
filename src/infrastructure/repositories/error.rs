use crate::domain::errors::DomainError;

pub(super) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }
            if db_err.is_unique_violation() {
                return DomainError::Conflict("unique constraint violated".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::error!(error = %err, "database failure");
            DomainError::Persistence(err.to_string())
        }
    }
}

/// Turn a free-text term into a `LIKE` pattern matched with `ESCAPE '\'`.
pub(super) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
