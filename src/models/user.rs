use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    #[default]
    Teacher,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }

    pub fn can_create_exams(&self) -> bool {
        !matches!(self, UserRole::Student)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Standard,
    Plus,
    Full,
}

/// Signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub credits: u32,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
}
