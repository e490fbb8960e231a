use crate::{
    agent::planning::Step, message::llm::ChatMessage, prompt::builder::build_step_prompt,
};

pub fn generate_step_message(step: &Step, context: &str) -> Vec<ChatMessage> {
    let system = ChatMessage::system(
        r#"
You are an AI assistant focusing on executing a specific task step.
Use the provided context and step description to complete this specific step only.
Your response should be detailed and directly address the step's requirements.
"#,
    );
    vec![system, ChatMessage::user(build_step_prompt(step, context))]
}
