//! User role constants.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_FIELD_WORKER: &str = "field_worker";
pub const ROLE_CENRO: &str = "cenro";
pub const ROLE_NURSERY_STAFF: &str = "nursery_staff";

pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_FIELD_WORKER, ROLE_CENRO, ROLE_NURSERY_STAFF];

pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles() {
        assert!(is_valid_role(ROLE_FIELD_WORKER));
        assert!(is_valid_role(ROLE_CENRO));
        assert!(!is_valid_role("superuser"));
    }
}
