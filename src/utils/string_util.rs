pub trait StripCodeBlock {
    fn strip_code_block(&self) -> &str;
}

impl StripCodeBlock for str {
    /// Removes a surrounding markdown fence (```` ``` ```` or ```` ```json ````),
    /// returning the trimmed inner text. Unfenced input is only trimmed.
    fn strip_code_block(&self) -> &str {
        let trimmed = self.trim();
        if !trimmed.starts_with("```") {
            return trimmed;
        }
        let Some(newline) = trimmed.find('\n') else {
            return trimmed;
        };
        match trimmed[newline + 1..].trim_end().strip_suffix("```") {
            Some(inner) => inner.trim(),
            None => trimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StripCodeBlock;

    #[test]
    fn unfenced_text_is_trimmed() {
        assert_eq!("  [1, 2]\n".strip_code_block(), "[1, 2]");
    }

    #[test]
    fn language_tagged_fence_is_removed() {
        assert_eq!("```json\n[1]\n```".strip_code_block(), "[1]");
    }

    #[test]
    fn unterminated_fence_is_left_alone() {
        assert_eq!("```json\n[1]".strip_code_block(), "```json\n[1]");
    }
}
