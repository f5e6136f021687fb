//! Flavor text collaborators
//!
//! The simulation asks for two kinds of text: an identity backstory when a
//! person is created, and a reflection that sums up an actor's log. Both are
//! opaque strings to the core.

use tokio::runtime::Runtime;

use crate::core::error::{Result, RogueError};
use crate::entity::observation::ObservationLog;
use crate::llm::client::LlmClient;

/// How many log entries a reflection looks at
const REFLECTION_WINDOW: usize = 30;

pub trait TextGenerator {
    /// Backstory for `name`. May use `[male]` / `[female]` placeholders in
    /// place of the name; they decide the character's gender.
    fn identity(&mut self, name: &str) -> Result<String>;

    /// Short first-person summary of what `name` has observed
    fn reflection(&mut self, name: &str, log: &ObservationLog) -> Result<String>;
}

const CANNED_IDENTITIES: &[&str] = &[
    "[male] is a skilled blacksmith who found himself on the island unexpectedly. He's determined to use his abilities to contribute to the survival and prosperity of the community. [male] is known for his meticulous craftsmanship and never backs down from a challenge, even in this new and unfamiliar environment.",
    "[female] is a talented farmer who suddenly woke up on the island, leaving her old life behind. Despite her situation, she remains optimistic and has taken the initiative to cultivate crops and ensure a stable food supply. [female] is resourceful and adaptable, making the best of her circumstances to help those around her.",
    "[male] is an agile and cunning scout who uses his sharp senses to explore the island and gather valuable information. He's unattached and appreciates the freedom to roam and discover. [male] is known for his quick thinking and ability to find hidden resources, making him a valuable asset to the community.",
    "[female] is a fearless warrior who now finds herself stranded on the island. She is determined to protect her fellow islanders from any dangers they may face. [female] is a natural leader with an indomitable spirit, never shying away from a challenge or the opportunity to defend those in need.",
    "[male] is a skillful hunter who woke up on the island without any recollection of his past life. He uses his keen instincts to provide food for the community and is always on the lookout for potential threats. [male] is a solitary individual who finds solace in nature but is willing to work with others to ensure their collective survival.",
    "[female] is a gifted bard who seeks to bring joy and hope to the island's inhabitants with her enchanting music and stories. She is a beacon of light in these uncertain times, using her talents to lift the spirits of those around her. [female] is a kind and empathetic soul, always willing to lend a listening ear or offer comforting words to those in need.",
];

/// Offline generator: cycles through fixed backstories and reflects by
/// quoting the latest observations.
#[derive(Debug, Default)]
pub struct CannedText {
    next_identity: usize,
}

impl CannedText {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextGenerator for CannedText {
    fn identity(&mut self, _name: &str) -> Result<String> {
        let text = CANNED_IDENTITIES[self.next_identity % CANNED_IDENTITIES.len()];
        self.next_identity += 1;
        Ok(text.to_string())
    }

    fn reflection(&mut self, _name: &str, log: &ObservationLog) -> Result<String> {
        let recent: Vec<&str> = log.recent(3).map(|o| o.text.as_str()).collect();
        if recent.is_empty() {
            return Ok("Nothing has happened to me yet.".to_string());
        }
        Ok(format!("Lately: {}", recent.join(" ")))
    }
}

/// Generator backed by a chat completion API. Calls block on a private
/// runtime, so it must not be used from inside an async context.
pub struct LlmTextGenerator {
    client: LlmClient,
    runtime: Runtime,
}

impl LlmTextGenerator {
    pub fn new(client: LlmClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { client, runtime })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(LlmClient::from_env()?)
    }

    fn ask(&self, system: &str, prompt: &str) -> Result<String> {
        let reply = self.runtime.block_on(self.client.complete(Some(system), prompt))?;
        if reply.is_empty() {
            return Err(RogueError::TextGeneration("empty reply".into()));
        }
        Ok(reply)
    }
}

impl TextGenerator for LlmTextGenerator {
    fn identity(&mut self, name: &str) -> Result<String> {
        let system = "You write short character backstories for a survival game set on a remote island.";
        let prompt = format!(
            "Write three sentences about a person called {name} who just woke up on the island \
             with no memory of how they got there. Refer to the character only as [male] if the \
             character is a man or [female] if the character is a woman, never by name, and use \
             exactly one of the two tags. Examples:\n{}\n{}",
            CANNED_IDENTITIES[0], CANNED_IDENTITIES[1]
        );
        self.ask(system, &prompt)
    }

    fn reflection(&mut self, name: &str, log: &ObservationLog) -> Result<String> {
        let system = "You are the inner voice of a character in a survival game. Answer in the first person.";
        let observations: Vec<String> = log
            .recent(REFLECTION_WINDOW)
            .map(|o| format!("[{}] {}", o.timestamp, o.text))
            .collect();
        let prompt = format!(
            "I am {name}. These are my latest observations:\n{}\n\
             Summarise in two or three sentences what I have learned and what I should do next.",
            observations.join("\n")
        );
        self.ask(system, &prompt)
    }
}
