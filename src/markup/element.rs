/// Something that displays text and may carry a title holding a raw timestamp.
pub trait DateElement {
    fn title(&self) -> Option<&str>;
    fn text(&self) -> &str;
    fn set_title(&mut self, title: String);
    fn set_text(&mut self, text: String);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextElement {
    pub text: String,
    pub title: Option<String>,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
        }
    }

    pub fn with_title(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: Some(title.into()),
        }
    }
}

impl DateElement for TextElement {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}
