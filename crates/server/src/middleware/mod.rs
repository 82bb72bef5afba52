pub mod jwt;
pub mod validate;

pub use self::jwt::{admin_middleware, auth_middleware};
pub use self::validate::SimpleValidatedJson;
