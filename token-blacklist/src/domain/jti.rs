use std::fmt;

/// Opaque JWT ID (`jti` claim). Any string is accepted, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jti(String);

impl Jti {
    pub fn new(id: impl Into<String>) -> Self {
        Jti(id.into())
    }
}

impl Default for Jti {
    // Generate a new random UUID when Default is called
    fn default() -> Self {
        Jti(uuid::Uuid::new_v4().to_string())
    }
}

impl From<&str> for Jti {
    fn from(id: &str) -> Self {
        Jti(id.to_owned())
    }
}

impl AsRef<str> for Jti {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Jti {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
