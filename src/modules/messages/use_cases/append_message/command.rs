#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendMessage {
    pub text: String,
}
