use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Symbolic token identifier, e.g. "tokenB". Cheap to clone; paths and pool
/// keys share the underlying symbol allocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Token {
    symbol: Arc<str>,
}

impl Token {
    pub fn new(symbol: impl Into<Arc<str>>) -> Token {
        Token { symbol: symbol.into() }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Token {}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(&other.symbol)
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl From<String> for Token {
    fn from(symbol: String) -> Self {
        Token::new(symbol)
    }
}

impl From<&str> for Token {
    fn from(symbol: &str) -> Self {
        Token::new(symbol)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.symbol.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_equality_and_ordering() {
        let a = Token::new("tokenA");
        let b = Token::new("tokenB");

        assert_eq!(a, Token::new("tokenA"));
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new("tokenE").to_string(), "tokenE");
    }

    #[test]
    fn test_serialize() {
        let token = Token::new("tokenB");

        let serialized = serde_json::to_string(&token).unwrap();
        assert_eq!(serialized, "\"tokenB\"");

        let deserialized: Token = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, token);
    }
}
