//! Caller-owned interview history and its transcript rendering.

use serde::Deserialize;

/// Who produced a free-form history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Ai,
    User,
}

/// One prior exchange, in either wire shape callers send:
/// a paired `{question, answer}` record or a single `{type, text}` message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatTurn {
    Exchange {
        question: String,
        answer: String,
    },
    Message {
        #[serde(rename = "type")]
        speaker: Speaker,
        text: String,
    },
}

/// Flattens the history into Interviewer:/Candidate: transcript lines for the
/// prompt. An empty history gets an explicit marker so the model knows this is
/// the opening turn.
pub fn render_transcript(history: &[ChatTurn]) -> String {
    if history.is_empty() {
        return "(no prior exchanges — this is the candidate's first answer)".to_string();
    }

    let mut lines = Vec::with_capacity(history.len() * 2);
    for turn in history {
        match turn {
            ChatTurn::Exchange { question, answer } => {
                lines.push(format!("Interviewer: {question}"));
                lines.push(format!("Candidate: {answer}"));
            }
            ChatTurn::Message { speaker, text } => {
                let who = match speaker {
                    Speaker::Ai => "Interviewer",
                    Speaker::User => "Candidate",
                };
                lines.push(format!("{who}: {text}"));
            }
        }
    }
    lines.join("\n")
}
