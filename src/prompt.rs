/// Wrap lecture text and a question in the instruction sent as the user turn.
pub fn course_prompt(text: &str, question: &str) -> String {
    format!(
        "Based on the following course material, please answer the question.\n\n\
         Course Material:\n{text}\n\n\
         Question: {question}\n\n\
         Provide a clear and concise answer."
    )
}
