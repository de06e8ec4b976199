pub mod chat;
pub mod stream;
pub mod token;

pub use chat::{AvatarColor, ChatMessage};
pub use stream::{Creator, Stream, TokenRef};
pub use token::Token;
