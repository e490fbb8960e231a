use std::fmt;

use crate::prompt::builder::render_result;

/// Append-only record of step results fed to every later step.
///
/// After the k-th call to [`TaskContext::record`] the text ends with
/// `"\nStep k result: <result>"`. Nothing is ever removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskContext {
    text: String,
    records: usize,
}

impl TaskContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next step record. An absent result is rendered as `None`.
    pub fn record(&mut self, result: Option<&str>) {
        self.records += 1;
        self.text.push_str(&format!(
            "\nStep {} result: {}",
            self.records,
            render_result(result)
        ));
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of step records appended so far.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
