use crate::{message::llm::ChatMessage, prompt::builder::build_compile_prompt};

pub fn generate_compile_message(step_results: &[Option<String>], query: &str) -> Vec<ChatMessage> {
    let system = ChatMessage::system(
        r#"
You are an AI assistant that compiles information from multiple processing steps
into a coherent, unified response. Your goal is to present the information clearly
and directly address the user's original query.
"#,
    );
    vec![
        system,
        ChatMessage::user(build_compile_prompt(step_results, query)),
    ]
}
