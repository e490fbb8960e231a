use crate::{message::llm::ChatMessage, prompt::builder::build_plan_prompt};

pub fn generate_planner_message(query: &str) -> Vec<ChatMessage> {
    vec![generate_system_message(), ChatMessage::user(build_plan_prompt(query))]
}

fn generate_system_message() -> ChatMessage {
    let content = r#"
You are an AI task planner. Your job is to break down a user's request
into a series of clear, discrete steps that can be executed sequentially.

Respond with a JSON array of steps, where each step has:
1. A "description" field describing what needs to be done
2. A "reasoning" field explaining why this step is necessary

Format your response as a valid JSON array without any additional text.
"#;
    ChatMessage::system(content)
}
