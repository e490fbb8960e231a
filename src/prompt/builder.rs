use crate::agent::planning::Step;

pub fn build_plan_prompt(query: &str) -> String {
    format!("Break down this task into steps: {}", query)
}

pub fn build_step_prompt(step: &Step, context: &str) -> String {
    format!(
        "Context so far: {}\n\nExecute this step: {}\n\nReasoning: {}",
        context, step.description, step.reasoning
    )
}

/// Renders one numbered record per result, blank-line separated. Absent
/// results are rendered as `None`.
pub fn build_results_block(step_results: &[Option<String>]) -> String {
    step_results
        .iter()
        .enumerate()
        .map(|(i, res)| format!("Step {} result: {}", i + 1, render_result(res.as_deref())))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_compile_prompt(step_results: &[Option<String>], query: &str) -> String {
    format!(
        "Original query: {}\n\nResults from steps:\n{}\n\nPlease provide a comprehensive, unified response to the original query.",
        query,
        build_results_block(step_results)
    )
}

pub fn render_result(result: Option<&str>) -> &str {
    result.unwrap_or("None")
}
