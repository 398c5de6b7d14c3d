/// Which action produced the text currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Generated,
    Revised,
}

impl ResultKind {
    pub fn caption(self) -> &'static str {
        match self {
            ResultKind::Generated => "Generated text",
            ResultKind::Revised => "Revised text",
        }
    }
}

/// The single piece of text a session holds. Each successful call replaces
/// it wholesale; earlier drafts are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    text: String,
    kind: Option<ResultKind>,
}

impl GenerationResult {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<ResultKind> {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn replace(&mut self, text: String, kind: ResultKind) {
        self.text = text;
        self.kind = Some(kind);
    }
}
