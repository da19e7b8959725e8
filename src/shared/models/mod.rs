//! Resource entities defined by the backend.
//!
//! Only the fields the admin views display are modelled; unknown fields are
//! ignored on deserialization.

pub mod conversation;
pub mod document;
pub mod widget;

pub use conversation::{Conversation, ConversationDraft, Message, MessageRole, NewMessage};
pub use document::{Document, DocumentUpdate, NewDocument, ProcessingState};
pub use widget::{WidgetConfiguration, WidgetDraft};
