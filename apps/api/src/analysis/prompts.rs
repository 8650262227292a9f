// Resume analysis prompt. Replace `{resume_text}` before sending.

pub const RESUME_ANALYSIS_TEMPLATE: &str = r#"You are a helpful and detailed resume analysis assistant. Analyze the resume below and produce a score, detailed feedback, and relevant interview questions.

Resume:
{resume_text}

Follow these instructions exactly:
1. **Resume Score:** Give a score from 1 to 100 for the resume's overall quality, clarity, and professionalism.
2. **Key Highlights:** List the top 3-5 key skills and 1-2 major projects or experiences.
3. **Detailed Feedback:** Give constructive feedback as bullet points, with suggestions for improving clarity, impact, and formatting.
4. **Interview Questions:** Generate 7 interview questions grounded in the resume content: 3 technical and 4 behavioral.

Format your response as a single, readable string."#;

/// Builds the one-shot resume analysis prompt.
pub fn build_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_TEMPLATE.replace("{resume_text}", resume_text)
}
