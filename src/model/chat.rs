//! Chat state - conversations, prompt input and the simulated assistant
//!
//! Replies are canned: every prompt is answered with the same hero section
//! component after a configurable delay.

use serde::Serialize;

/// Identifies a chat within one session
pub type ChatId = u64;

/// Text of every simulated reply
pub const RESPONSE_TEXT: &str = "Here's a React hero section component based on your request:";

/// Code attached to every simulated reply
pub const HERO_SECTION_SNIPPET: &str = r#"import React from 'react';

export default function HeroSection() {
  return (
    <section className="relative w-full h-screen flex items-center justify-center text-center bg-gradient-to-r from-blue-500 to-purple-600 text-white p-8">
      <div className="max-w-2xl">
        <h1 className="text-5xl font-bold mb-4">Welcome to Our Website</h1>
        <p className="text-lg mb-6">
          Discover amazing features and elevate your experience with our cutting-edge solutions.
        </p>
        <div className="flex justify-center gap-4">
          <button className="bg-white text-blue-600 px-6 py-3 rounded-lg font-semibold shadow-lg hover:bg-gray-100 transition">
            Get Started
          </button>
          <button className="border border-white px-6 py-3 rounded-lg font-semibold shadow-lg hover:bg-white hover:text-blue-600 transition">
            Learn More
          </button>
        </div>
      </div>
    </section>
  );
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            code: None,
        }
    }

    /// The canned assistant reply
    pub fn canned_reply() -> Self {
        Self {
            role: Role::Assistant,
            content: RESPONSE_TEXT.to_string(),
            code: Some(HERO_SECTION_SNIPPET.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chat {
    pub id: ChatId,
    pub title: String,
    pub messages: Vec<Message>,
}

/// All conversations plus the prompt being typed
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub chats: Vec<Chat>,
    /// Chat whose messages are on screen
    pub active: Option<ChatId>,
    /// Prompt input buffer
    pub input: String,
    /// A reply is pending; submitting is blocked until it lands
    pub is_generating: bool,
    /// Code shown in the code / preview panel
    pub active_code: Option<String>,
    next_id: ChatId,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    fn chat_mut(&mut self, id: ChatId) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|c| c.id == id)
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active.and_then(|id| self.chat(id))
    }

    /// Messages of the active chat (empty when none is active)
    pub fn messages(&self) -> &[Message] {
        self.active_chat()
            .map(|c| c.messages.as_slice())
            .unwrap_or(&[])
    }

    /// Code of the most recent message in the active chat that carries some
    pub fn latest_code(&self) -> Option<&str> {
        self.messages().iter().rev().find_map(|m| m.code.as_deref())
    }

    /// Append a fresh "Chat N" and make it active, clearing the prompt
    pub fn new_chat(&mut self) -> ChatId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let title = format!("Chat {}", self.chats.len() + 1);
        tracing::debug!(target: "message", id, %title, "new chat");
        self.chats.push(Chat {
            id,
            title,
            messages: Vec::new(),
        });
        self.active = Some(id);
        self.input.clear();
        self.active_code = None;
        id
    }

    /// Post the prompt as a user message.
    ///
    /// Returns the chat that now awaits a reply, or None when the prompt is
    /// blank or a reply is still pending. Creates a chat when none is active.
    pub fn submit(&mut self) -> Option<ChatId> {
        if self.input.trim().is_empty() || self.is_generating {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        let id = match self.active.filter(|id| self.chat(*id).is_some()) {
            Some(id) => id,
            None => self.new_chat(),
        };
        if let Some(chat) = self.chat_mut(id) {
            chat.messages.push(Message::user(content));
        }
        self.is_generating = true;
        Some(id)
    }

    /// Store the canned reply on `chat`.
    ///
    /// The reply lands on the chat that asked even if another chat has been
    /// selected since; the code panel only picks it up when that chat is
    /// still on screen. Returns whether the chat still exists.
    pub fn receive_response(&mut self, chat: ChatId) -> bool {
        self.is_generating = false;
        let reply = Message::canned_reply();
        let code = reply.code.clone();
        let Some(target) = self.chat_mut(chat) else {
            tracing::warn!(target: "message", chat, "reply for unknown chat dropped");
            return false;
        };
        target.messages.push(reply);
        if self.active == Some(chat) {
            self.active_code = code;
        }
        true
    }

    /// Switch to `id`. Returns false (and changes nothing) for unknown ids.
    pub fn select_chat(&mut self, id: ChatId) -> bool {
        if self.chat(id).is_none() {
            tracing::debug!(target: "message", id, "select of unknown chat ignored");
            return false;
        }
        self.active = Some(id);
        self.active_code = None;
        true
    }
}
