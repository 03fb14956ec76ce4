/// Build the default review instructions for a repository.
///
/// Used as the system-role message unless the run supplies a verbatim
/// override.
///
/// # Examples
///
/// ```
/// use nitpick_review::prompt::review_instructions;
///
/// let prompt = review_instructions("acme", "widgets");
/// assert!(prompt.contains("acme/widgets"));
/// assert!(prompt.contains("- [ ] "));
/// ```
pub fn review_instructions(owner: &str, repo: &str) -> String {
    format!(
        "You are a professional programmer reviewing a {owner}/{repo} code patch diff. \
         First recall everything you know about {owner}/{repo} and apply it while reading the patch. \
         Focus on potential bugs, formatting errors, performance issues, and areas for improvement. \
         Patch lines starting with \"-\" are from the previous version and have been changed. \
         Patch lines starting with \"+\" have been newly updated or added. \
         Identify a minimum of 5 key feedback points and order them by priority. \
         Only output feedback that might necessitate code changes. \
         Begin each feedback point with \"- [ ] \"."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_name_the_repository() {
        let prompt = review_instructions("rust-lang", "cargo");
        assert!(prompt.contains("rust-lang/cargo"));
    }

    #[test]
    fn instructions_explain_patch_line_markers() {
        let prompt = review_instructions("acme", "widgets");
        assert!(prompt.contains("\"-\""));
        assert!(prompt.contains("\"+\""));
    }

    #[test]
    fn instructions_require_five_checkbox_items() {
        let prompt = review_instructions("acme", "widgets");
        assert!(prompt.contains("minimum of 5"));
        assert!(prompt.contains("priority"));
        assert!(prompt.contains("- [ ] "));
    }
}
