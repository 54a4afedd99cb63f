/// Text recognized from a call recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_holds_text() {
        let transcript = Transcript::new("hello thank you");
        assert_eq!(transcript.text(), "hello thank you");
    }

    #[test]
    fn test_transcript_accepts_owned_and_borrowed() {
        let from_str = Transcript::new("call");
        let from_string = Transcript::new(String::from("call"));
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_empty_transcript_is_valid() {
        let transcript = Transcript::new("");
        assert_eq!(transcript.text(), "");
    }
}
