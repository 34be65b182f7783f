//! Per-mode instruction templates and chat-marker wrapping

use log::trace;

/// Opening chat marker expected by Mistral-Instruct models
pub const INST_OPEN: &str = "<s>[INST] ";

/// Closing chat marker; also the split token used when the
/// model echoes the instruction back (see parse.rs)
pub const INST_CLOSE: &str = "[/INST]";

/// Fixed layout skeleton for the quiz template: 3 MCQ blocks
/// with options a-d and a "Correct Answer:" line each, then
/// 2 true/false blocks with an "Answer:" line each.
const QUIZ_LAYOUT: &str = "\
Format your output strictly as follows:
1. <MCQ question>
   a) <option>
   b) <option>
   c) <option>
   d) <option>
   Correct Answer: <letter>

2. <MCQ question>
   a) <option>
   b) <option>
   c) <option>
   d) <option>
   Correct Answer: <letter>

3. <MCQ question>
   a) <option>
   b) <option>
   c) <option>
   d) <option>
   Correct Answer: <letter>

4. <True/False question>
   Answer: <True or False>

5. <True/False question>
   Answer: <True or False>";

/// Build the full prompt for a mode and validated input.
/// Deterministic: the user text is embedded verbatim into the
/// mode's fixed template, and the whole instruction is wrapped
/// in the chat markers. The result doubles as the cache key.
pub fn build(mode: &crate::Mode, input: &str) -> String
{   let instruction = match mode
    {   crate::Mode::Summarize => format!(
          "Summarize the following text concisely and \
           accurately, highlighting the main points:\n\n{}",
          input
        )
      , crate::Mode::ExplainConcept => format!(
          "Explain the following concept in simple, \
           easy-to-understand terms for a student:\
           \n\nConcept: {}",
          input
        )
      , crate::Mode::ModelQuestions => format!(
          "Generate 5 detailed model exam/essay questions \
           for the topic '{}'. Ensure the questions are \
           open-ended and require analytical answers. \
           Format them as a numbered list.",
          input
        )
      , crate::Mode::QuizQuestions => format!(
          "Create 3 multiple-choice questions (MCQs) with 4 \
           options each, and 2 true/false questions on the \
           topic '{}'.\nFor MCQs, clearly indicate the \
           correct option (A, B, C, or D).\nFor True/False \
           questions, clearly state 'True' or 'False'.\
           \n\n{}",
          input, QUIZ_LAYOUT
        )
    };

    let prompt = format!(
      "{}{} {}", INST_OPEN, instruction, INST_CLOSE
    );
    trace!("Built prompt of {} chars", prompt.len());
    prompt
}
