use contracts::system::users::{ChangePasswordDto, CreateUserDto, Role, UpdateUserDto, User};

use crate::shared::form_utils::non_empty;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Editable copy of a user. `id` is `None` while creating.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            password: String::new(),
            email: String::new(),
            full_name: String::new(),
            role: Role::Staff,
            is_active: true,
        }
    }
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            password: String::new(),
            email: user.email.clone().unwrap_or_default(),
            full_name: user.full_name.clone().unwrap_or_default(),
            role: user.role,
            is_active: user.is_active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.is_edit() {
            if self.username.trim().is_empty() {
                return Err("Username wajib diisi".to_string());
            }
            if self.password.len() < MIN_PASSWORD_LEN {
                return Err(format!("Password minimal {} karakter", MIN_PASSWORD_LEN));
            }
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Format email tidak valid".to_string());
        }
        if self.role == Role::Unknown {
            return Err("Role wajib dipilih".to_string());
        }
        Ok(())
    }

    pub fn to_create_dto(&self) -> CreateUserDto {
        CreateUserDto {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: non_empty(&self.email),
            full_name: non_empty(&self.full_name),
            role: self.role,
        }
    }

    pub fn to_update_dto(&self, id: i64) -> UpdateUserDto {
        UpdateUserDto {
            id,
            email: non_empty(&self.email),
            full_name: non_empty(&self.full_name),
            role: self.role,
            is_active: self.is_active,
        }
    }
}

/// Admin reset of someone's password: no old password, confirmation must match.
pub fn password_reset(user_id: i64, new_password: &str, confirm: &str) -> Result<ChangePasswordDto, String> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(format!("Password minimal {} karakter", MIN_PASSWORD_LEN));
    }
    if new_password != confirm {
        return Err("Konfirmasi password tidak cocok".to_string());
    }
    Ok(ChangePasswordDto {
        user_id,
        old_password: None,
        new_password: new_password.to_string(),
    })
}

/// Same user with `is_active` flipped, as an update body.
pub fn toggle_active(user: &User) -> UpdateUserDto {
    let mut form = UserForm::from_user(user);
    form.is_active = !user.is_active;
    form.to_update_dto(user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": 4, "username": "sari", "email": "sari@ksm.co.id", "full_name": "",
            "role": "gudang", "is_active": true
        }))
        .unwrap()
    }

    #[test]
    fn test_create_requires_username_and_password() {
        let mut form = UserForm::default();
        assert_eq!(form.validate(), Err("Username wajib diisi".to_string()));
        form.username = "budi".into();
        form.password = "123".into();
        assert!(form.validate().is_err());
        form.password = "rahasia".into();
        assert!(form.validate().is_ok());
        let dto = form.to_create_dto();
        assert_eq!(dto.email, None);
        assert_eq!(dto.role, Role::Staff);
    }

    #[test]
    fn test_edit_skips_password_and_blanks_become_none() {
        let form = UserForm::from_user(&user());
        assert!(form.is_edit());
        assert!(form.validate().is_ok());
        let dto = form.to_update_dto(4);
        assert_eq!(dto.full_name, None);
        assert_eq!(dto.email.as_deref(), Some("sari@ksm.co.id"));
    }

    #[test]
    fn test_toggle_active() {
        assert!(!toggle_active(&user()).is_active);
    }

    #[test]
    fn test_password_reset() {
        assert!(password_reset(4, "abcdef", "abcdeg").is_err());
        assert!(password_reset(4, "abc", "abc").is_err());
        let dto = password_reset(4, "abcdef", "abcdef").unwrap();
        assert_eq!(dto.old_password, None);
        assert_eq!(dto.user_id, 4);
    }
}
