/// Extraction branch selected for an attachment's declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
    Spreadsheet,
    WordProcessing,
}

/// Substring markers checked in order; the first hit wins. A MIME type such as
/// `text/spreadsheet` therefore resolves to `Text`.
const DISPATCH_PRIORITY: &[(&str, ContentType)] = &[
    ("pdf", ContentType::Pdf),
    ("text", ContentType::Text),
    ("spreadsheet", ContentType::Spreadsheet),
    ("excel", ContentType::Spreadsheet),
    ("wordprocessingml", ContentType::WordProcessing),
    ("msword", ContentType::WordProcessing),
];

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        DISPATCH_PRIORITY
            .iter()
            .find(|(marker, _)| mime.contains(marker))
            .map(|(_, content_type)| *content_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Spreadsheet => "spreadsheet",
            Self::WordProcessing => "wordprocessing",
        }
    }
}
