// Interview turn prompt. The whole interview policy — topic coverage order,
// personalization, termination, and the two output formats — is encoded as
// natural-language instruction. The service never parses the model's output:
// whether a turn continues or ends the interview is the model's judgment.

use crate::interview::history::{render_transcript, ChatTurn};

pub const INTERVIEW_TEMPLATE: &str = r#"You are an AI interviewer conducting a mock interview for placement preparation. You are interviewing the candidate described by the resume below.

Resume:
{resume_text}

Conversation so far:
{transcript}

Candidate's latest answer:
{user_answer}

Conduct the interview under these rules:
1. Ask exactly one question per turn, grounded in the resume and the candidate's answers.
2. Cover topics in this order: technical and project questions first, then behavioral and soft-skill questions, then general aptitude questions. Never repeat a topic already covered in the conversation above.
3. If the candidate's introduction reveals their name, address them by name in your feedback and questions.
4. Keep feedback brief, specific, and encouraging.

Choose exactly one of the two output formats below. Use Format 1 while topics remain uncovered. Once technical, behavioral, and aptitude topics have all been covered, use Format 2 and end the interview.

Format 1 (continue the interview):
Feedback: <one or two sentences on the candidate's latest answer>
Next Question: <the next interview question>

Format 2 (end the interview):
Final Report:
Final Interview Score: <overall score out of 100>
Technical: <score out of 10>
Behavioral: <score out of 10>
Non-Technical: <score out of 10>
Strengths: <bullet list>
Areas for Improvement: <bullet list>
Suggestions: <actionable preparation advice>

Return plain text only, in exactly one of the two formats."#;

/// Builds the prompt for one interview turn from the resume, the latest
/// answer, and the caller-resubmitted history.
pub fn build_interview_prompt(
    resume_text: &str,
    user_answer: &str,
    history: &[ChatTurn],
) -> String {
    INTERVIEW_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{transcript}", &render_transcript(history))
        .replace("{user_answer}", user_answer)
}
