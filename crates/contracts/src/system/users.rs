use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Purchasing,
    Gudang,
    Approver,
    Staff,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub const SELECTABLE: [Role; 5] = [
        Role::Admin,
        Role::Purchasing,
        Role::Gudang,
        Role::Approver,
        Role::Staff,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Purchasing => "purchasing",
            Role::Gudang => "gudang",
            Role::Approver => "approver",
            Role::Staff => "staff",
            Role::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Purchasing => "Purchasing",
            Role::Gudang => "Gudang",
            Role::Approver => "Approver",
            Role::Staff => "Staff",
            Role::Unknown => "-",
        }
    }

    pub fn from_code(code: &str) -> Role {
        Role::SELECTABLE
            .iter()
            .copied()
            .find(|r| r.code() == code)
            .unwrap_or(Role::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(skip)]
    pub id: i64,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    #[serde(skip)]
    pub user_id: i64,
    pub old_password: Option<String>, // None when an admin resets someone else's password
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_role_does_not_break_decoding() {
        let user: User = serde_json::from_value(json!({
            "id": 3, "username": "rina", "email": null, "full_name": "Rina",
            "role": "auditor"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert!(user.is_active);
    }

    #[test]
    fn test_role_codes_round_trip() {
        for role in Role::SELECTABLE {
            assert_eq!(Role::from_code(role.code()), role);
        }
    }
}
