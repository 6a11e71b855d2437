pub mod authenticator;
pub mod credentials;
pub mod password;

pub use authenticator::{AuthError, AuthFailure, Authenticator};
pub use credentials::{Credentials, parse_basic};
pub use password::{PasswordError, PasswordHasher};
