use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;
use secrecy::Secret;

lazy_static! {
    pub static ref JWT_SECRET: Secret<String> = Secret::new(set_token());
}

fn set_token() -> String {
    dotenv().ok();
    let secret = std_env::var(env::JWT_SECRET_ENV_VAR).expect("JWT_SECRET must be set.");
    if secret.is_empty() {
        panic!("JWT_SECRET must not be empty.");
    }
    secret
}

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
}

pub const JWT_COOKIE_NAME: &str = "jwt";

// How long an issued auth token is valid for
pub const TOKEN_TTL_SECONDS: i64 = 600; // 10 minutes

// Clock skew tolerated past a token's `exp`
pub const TOKEN_LEEWAY_SECONDS: u64 = 60;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
