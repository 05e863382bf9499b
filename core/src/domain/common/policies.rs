use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// A row that belongs, directly or through its parent, to a single user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// A bare user id, for operations addressed by user rather than by row.
pub struct OwnerId(pub Uuid);

impl Owned for OwnerId {
    fn owner_id(&self) -> Uuid {
        self.0
    }
}

/// The one ownership predicate: owners and superusers may act on a resource.
pub fn can_access<R: Owned + ?Sized>(identity: &Identity, resource: &R) -> bool {
    identity.is_superuser() || resource.owner_id() == identity.id()
}

pub fn ensure_owner<R: Owned + ?Sized>(identity: &Identity, resource: &R) -> Result<(), CoreError> {
    ensure_policy(can_access(identity, resource), CoreError::PermissionDenied)
}

pub fn ensure_superuser(identity: &Identity) -> Result<(), CoreError> {
    ensure_policy(
        identity.is_superuser(),
        CoreError::Forbidden("The user doesn't have enough privileges".to_string()),
    )
}

pub fn ensure_policy(allowed: bool, error: CoreError) -> Result<(), CoreError> {
    if allowed { Ok(()) } else { Err(error) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::User;

    struct Note {
        owner: Uuid,
    }

    impl Owned for Note {
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    fn identity(is_superuser: bool) -> Identity {
        Identity::new(User::new(
            "owner@example.com".to_string(),
            "hash".to_string(),
            None,
            is_superuser,
        ))
    }

    #[test]
    fn owner_can_access_own_resource() {
        let owner = identity(false);
        let note = Note { owner: owner.id() };
        assert!(ensure_owner(&owner, &note).is_ok());
    }

    #[test]
    fn stranger_is_denied() {
        let stranger = identity(false);
        let note = Note {
            owner: Uuid::new_v4(),
        };
        assert_eq!(
            ensure_owner(&stranger, &note),
            Err(CoreError::PermissionDenied)
        );
    }

    #[test]
    fn superuser_bypasses_ownership() {
        let admin = identity(true);
        let note = Note {
            owner: Uuid::new_v4(),
        };
        assert!(ensure_owner(&admin, &note).is_ok());
        assert!(ensure_superuser(&admin).is_ok());
        assert!(matches!(
            ensure_superuser(&identity(false)),
            Err(CoreError::Forbidden(_))
        ));
    }
}
