pub const GREETING: &str = "Hello, gqlgen!";
