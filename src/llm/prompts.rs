/// Build the summary prompt for a transcript's extracted text.
///
/// The plain text is embedded verbatim; callers guarantee it is non-empty
/// before a request is made.
pub fn build_summary_prompt(plain_text: &str) -> String {
    format!("What is this content ({plain_text}) talking about? Tell me in an expanded way.")
}
