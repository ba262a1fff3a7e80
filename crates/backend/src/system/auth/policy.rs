use contracts::shared::store::Collection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
    Delete,
}

/// Уровень доступа, необходимый для операции над коллекцией
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Без токена можно только создать новый документ
    CreateOnly,
    /// Без токена можно читать только свои документы (`?user_id=`)
    OwnerOnly,
    Admin,
}

/// Каталог открыт на чтение, заявки принимаются от покупателей,
/// всё остальное только для администратора.
pub fn required_access(collection: Collection, op: Operation) -> Access {
    match (collection, op) {
        (Collection::Quotations, Operation::Read) => Access::OwnerOnly,
        (Collection::Quotations, Operation::Write) => Access::CreateOnly,
        (_, Operation::Read) => Access::Public,
        (_, Operation::Write) | (_, Operation::Delete) => Access::Admin,
    }
}

/// `configured = None` отключает проверку
pub fn is_admin(configured: Option<&str>, authorization: Option<&str>) -> bool {
    let Some(expected) = configured else {
        return true;
    };
    authorization
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim() == expected)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_access() {
        assert_eq!(
            required_access(Collection::Products, Operation::Read),
            Access::Public
        );
        assert_eq!(
            required_access(Collection::Config, Operation::Write),
            Access::Admin
        );
        assert_eq!(
            required_access(Collection::LandingPages, Operation::Delete),
            Access::Admin
        );
        assert_eq!(
            required_access(Collection::Quotations, Operation::Read),
            Access::OwnerOnly
        );
        assert_eq!(
            required_access(Collection::Quotations, Operation::Write),
            Access::CreateOnly
        );
        assert_eq!(
            required_access(Collection::Quotations, Operation::Delete),
            Access::Admin
        );
    }

    #[test]
    fn test_is_admin() {
        assert!(is_admin(None, None));
        assert!(is_admin(Some("s3cret"), Some("Bearer s3cret")));
        assert!(!is_admin(Some("s3cret"), Some("Bearer other")));
        assert!(!is_admin(Some("s3cret"), Some("s3cret")));
        assert!(!is_admin(Some("s3cret"), None));
    }
}
