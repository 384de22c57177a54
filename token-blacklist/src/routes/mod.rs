pub mod login;
pub mod logout;
pub mod me;
pub mod verify_token;

pub use login::{login, LoginRequest};
pub use logout::logout;
pub use me::{me, MeResponse};
pub use verify_token::{verify_token, VerifyTokenResponse};
