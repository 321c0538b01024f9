//! Assistant State
//!
//! The chat transcript of the AI assistant. Submitting a question appends the
//! user message immediately and records the reply as outstanding; the view
//! delivers the canned reply after a delay. The transcript is append-only.

use std::collections::BTreeSet;

/// Message identifier, unique within one assistant view
pub type MessageId = u64;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Ai,
}

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    /// Lecture timestamp the answer refers to (`m:ss`), if any
    pub timestamp: Option<String>,
    /// Title of the referenced frame, if any
    pub frame_reference: Option<String>,
    /// Whether a frame thumbnail accompanies the answer
    pub has_frame: bool,
}

impl ChatMessage {
    fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: MessageRole::User,
            content: content.into(),
            timestamp: None,
            frame_reference: None,
            has_frame: false,
        }
    }

    fn ai(
        id: MessageId,
        content: impl Into<String>,
        timestamp: Option<&str>,
        frame_reference: Option<&str>,
    ) -> Self {
        Self {
            id,
            role: MessageRole::Ai,
            content: content.into(),
            timestamp: timestamp.map(str::to_string),
            frame_reference: frame_reference.map(str::to_string),
            has_frame: false,
        }
    }
}

/// Content of the simulated reply
pub const CANNED_REPLY: &str = "I understand your question. Let me analyze the video content and provide you with a detailed explanation...";
/// Timestamp label attached to the simulated reply
pub const CANNED_REPLY_TIMESTAMP: &str = "Current";
/// Frame reference attached to the simulated reply
pub const CANNED_REPLY_FRAME: &str = "AI Analysis";

/// Suggested prompts shown under the transcript
pub const QUICK_QUESTIONS: &[&str] = &[
    "Summarize this section",
    "Explain the code example",
    "What are the key takeaways?",
];

fn sample_messages() -> Vec<ChatMessage> {
    let mut explained = ChatMessage::ai(
        2,
        "At 3:20, the video discusses React Hooks, specifically the useState hook. This is a fundamental concept that allows functional components to have state. Here's what's covered:",
        Some("3:20"),
        Some("React Hooks Introduction"),
    );
    explained.has_frame = true;

    vec![
        ChatMessage::user(1, "Explain the topic at 3:20"),
        explained,
        ChatMessage::user(3, "Can you show me the code example?"),
        ChatMessage::ai(
            4,
            "Here's the useState example from the video at 5:30. The code demonstrates how to declare state variables and update them:",
            Some("5:30"),
            Some("useState Code Example"),
        ),
    ]
}

/// Chat transcript plus the set of questions still waiting for a reply
#[derive(Debug, Clone)]
pub struct AssistantState {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
    awaiting_reply: BTreeSet<MessageId>,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::with_messages(sample_messages())
    }
}

impl AssistantState {
    /// Transcript seeded with the sample conversation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        let next_id = messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            messages,
            next_id,
            awaiting_reply: BTreeSet::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether any reply is still outstanding ("AI is typing")
    pub fn is_typing(&self) -> bool {
        !self.awaiting_reply.is_empty()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append the user's question. Blank drafts are rejected with `None`.
    ///
    /// Returns the id of the new message; the caller schedules
    /// [`AssistantState::deliver_reply`] for it.
    pub fn submit(&mut self, draft: &str) -> Option<MessageId> {
        if draft.trim().is_empty() {
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, draft));
        self.awaiting_reply.insert(id);
        Some(id)
    }

    /// Append the canned reply for a submitted question.
    ///
    /// Returns `false` (and appends nothing) if the question is not awaiting
    /// a reply, e.g. because it was already answered.
    pub fn deliver_reply(&mut self, question: MessageId) -> bool {
        if !self.awaiting_reply.remove(&question) {
            return false;
        }

        let id = self.allocate_id();
        self.messages.push(ChatMessage::ai(
            id,
            CANNED_REPLY,
            Some(CANNED_REPLY_TIMESTAMP),
            Some(CANNED_REPLY_FRAME),
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_sample_conversation() {
        let state = AssistantState::new();
        assert_eq!(state.messages().len(), 4);
        assert_eq!(state.messages()[0].role, MessageRole::User);
        assert_eq!(state.messages()[1].timestamp.as_deref(), Some("3:20"));
        assert!(!state.is_typing());
    }

    #[test]
    fn submit_then_reply_appends_in_order() {
        let mut state = AssistantState::new();
        let before: Vec<_> = state.messages().to_vec();

        let id = state.submit("hello").expect("non-blank draft");
        let last = state.messages().last().expect("message appended");
        assert_eq!(last.role, MessageRole::User);
        assert_eq!(last.content, "hello");
        assert!(state.is_typing());

        assert!(state.deliver_reply(id));
        let last = state.messages().last().expect("reply appended");
        assert_eq!(last.role, MessageRole::Ai);
        assert_eq!(last.content, CANNED_REPLY);
        assert!(!state.is_typing());

        assert_eq!(&state.messages()[..before.len()], before.as_slice());
        assert_eq!(state.messages()[before.len()].content, "hello");
        assert_eq!(state.messages().len(), before.len() + 2);
    }

    #[test]
    fn blank_drafts_are_rejected() {
        let mut state = AssistantState::new();
        assert_eq!(state.submit("   \n"), None);
        assert_eq!(state.messages().len(), 4);
        assert!(!state.is_typing());
    }

    #[test]
    fn each_question_gets_exactly_one_reply() {
        let mut state = AssistantState::new();
        let first = state.submit("one").expect("submitted");
        let second = state.submit("two").expect("submitted");
        assert_ne!(first, second);

        assert!(state.deliver_reply(first));
        assert!(state.is_typing());
        assert!(!state.deliver_reply(first));
        assert!(state.deliver_reply(second));
        assert!(!state.is_typing());

        let ai_replies = state
            .messages()
            .iter()
            .skip(4)
            .filter(|m| m.role == MessageRole::Ai)
            .count();
        assert_eq!(ai_replies, 2);
    }

    #[test]
    fn unknown_questions_get_no_reply() {
        let mut state = AssistantState::new();
        state.submit("hello").expect("submitted");
        assert!(!state.deliver_reply(999));
        assert_eq!(
            state.messages().last().map(|m| m.content.as_str()),
            Some("hello")
        );
        assert!(state.is_typing());
    }

    #[test]
    fn ids_stay_unique_after_seeding() {
        let mut state = AssistantState::new();
        let id = state.submit("question").expect("submitted");
        assert!(state.messages()[..4].iter().all(|m| m.id != id));
    }
}
