//! Storefront-side models: the cart and the chat widget state.

pub mod cart;
pub mod chat;

pub use cart::{Cart, CartLine};
pub use chat::{ChatError, ChatMessage, ChatSession};
