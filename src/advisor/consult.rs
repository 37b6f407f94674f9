use std::path::Path;

use crate::advisor::{AdvisorError, ChatMessage, TextGenerator};

pub const GREETING: &str = "你好！我是你的专属升学顾问。关于升学政策和院校录取，你想知道什么？";

/// Used in place of the knowledge text when the file cannot be read.
pub const NO_KNOWLEDGE: &str = "暂无数据";

/// Read the knowledge file, degrading to [`NO_KNOWLEDGE`].
pub fn load_knowledge(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "knowledge file unavailable");
            NO_KNOWLEDGE.to_string()
        }
    }
}

/// A question-and-answer session grounded in a fixed knowledge text.
///
/// The history lives in this value and nowhere else; dropping it ends the
/// conversation.
#[derive(Debug, Clone)]
pub struct Consultation {
    knowledge: String,
    history: Vec<ChatMessage>,
}

impl Consultation {
    pub fn new(knowledge: impl Into<String>) -> Self {
        Self {
            knowledge: knowledge.into(),
            history: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn system_prompt(&self) -> String {
        format!(
            "你是一个升学顾问。请严格基于以下资料回答：\n=== 资料 ===\n{}\n============",
            self.knowledge
        )
    }

    /// System prompt followed by the whole history.
    pub fn outgoing(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(ChatMessage::system(self.system_prompt()));
        messages.extend(self.history.iter().cloned());
        messages
    }

    /// Record the question, ask, and record the reply. On failure the
    /// question stays in the history and no reply is added.
    pub fn ask(
        &mut self,
        generator: &dyn TextGenerator,
        question: &str,
        on_chunk: &mut dyn FnMut(&str),
    ) -> Result<String, AdvisorError> {
        self.history.push(ChatMessage::user(question));
        let reply = generator.generate(&self.outgoing(), on_chunk)?;
        self.history.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }
}
