use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const BANNER_NORMAL: &str = "normal";
pub const BANNER_CELULAR: &str = "celular";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub photo: String,
    pub is_active: bool,
    pub banner_type: String,
    pub created_at: Option<NaiveDateTime>,
}
