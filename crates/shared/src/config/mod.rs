mod database;
mod jwt;
mod myconfig;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::jwt::{AuthenticatedUser, Claims, JwtConfig};
pub use self::myconfig::Config;
