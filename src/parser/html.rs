//! HTML normalization: one lenient DOM parse shared by every criterion

use super::text::{self, BLOCK_MARK, PROTECTED_DOT};
use scraper::{ElementRef, Html, Node};

/// Elements whose start and end delimit a sentence
const BLOCK_TAGS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ul",
    "ol",
    "blockquote",
    "div",
    "section",
    "article",
    "header",
    "footer",
    "table",
    "tr",
    "td",
    "th",
    "pre",
    "figure",
    "figcaption",
];

/// Elements whose text never reaches the reader
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// A heading element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `<h1>` through 6 for `<h6>`
    pub level: u8,
    pub text: String,
}

/// An anchor element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    /// Lowercased `rel` attribute
    pub rel: String,
    pub text: String,
}

/// An image element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    /// `None` when the attribute is missing
    pub alt: Option<String>,
}

impl Image {
    /// Whether the alt attribute is present with non-blank text
    pub fn has_alt(&self) -> bool {
        self.alt.as_deref().is_some_and(|a| !a.trim().is_empty())
    }
}

/// A paragraph or heading element and the sentences it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub tag: String,
    pub text: String,
    pub sentence_count: usize,
}

/// Read-only projection of a document's content, computed once per analysis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedView {
    /// Tag-free text, one line per block
    pub text: String,
    /// `text` lowercased
    pub lowercase: String,
    /// Lowercased word tokens
    pub words: Vec<String>,
    pub sentences: Vec<String>,
    pub headings: Vec<Heading>,
    pub anchors: Vec<Anchor>,
    pub images: Vec<Image>,
    pub blocks: Vec<Block>,
}

impl NormalizedView {
    /// Normalize an HTML fragment. Malformed markup is tolerated; whatever
    /// the parser cannot place is dropped.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_fragment(html);
        let mut walker = Walker::default();
        walker.visit_children(document.root_element());

        let text = plain_text(&walker.marked);
        let lowercase = text.to_lowercase();
        let words = text::words(&text);
        let sentences = text::split_sentences(&walker.marked);

        tracing::debug!(
            words = words.len(),
            sentences = sentences.len(),
            headings = walker.headings.len(),
            anchors = walker.anchors.len(),
            images = walker.images.len(),
            "normalized content"
        );

        Self {
            text,
            lowercase,
            words,
            sentences,
            headings: walker.headings,
            anchors: walker.anchors,
            images: walker.images,
            blocks: walker.blocks,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Decode entities in a short plain-text string (e.g. a meta description).
/// `<` is escaped first so it stays literal text instead of opening a tag.
pub fn decode_text(raw: &str) -> String {
    let fragment = Html::parse_fragment(&raw.replace('<', "&lt;"));
    fragment.root_element().text().collect()
}

#[derive(Default)]
struct Walker {
    /// Flattened text with block marks and protected anchor periods
    marked: String,
    anchor_depth: usize,
    headings: Vec<Heading>,
    anchors: Vec<Anchor>,
    images: Vec<Image>,
    blocks: Vec<Block>,
}

impl Walker {
    fn visit_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(t) => self.push_text(t),
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.visit_element(el);
                    }
                }
                _ => {}
            }
        }
    }

    fn visit_element(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();
        if SKIPPED_TAGS.contains(&name) {
            return;
        }

        match name {
            "a" => {
                self.anchors.push(Anchor {
                    href: element.value().attr("href").unwrap_or("").trim().to_string(),
                    rel: element.value().attr("rel").unwrap_or("").to_lowercase(),
                    text: element_text(element),
                });
                self.anchor_depth += 1;
                self.visit_children(element);
                self.anchor_depth -= 1;
                return;
            }
            "img" => {
                self.images.push(Image {
                    src: element.value().attr("src").unwrap_or("").to_string(),
                    alt: element.value().attr("alt").map(str::to_string),
                });
                return;
            }
            "br" | "hr" => {
                self.marked.push(' ');
                return;
            }
            _ => {}
        }

        if let Some(level) = heading_level(name) {
            self.headings.push(Heading {
                level,
                text: element_text(element),
            });
        }

        if !BLOCK_TAGS.contains(&name) {
            self.visit_children(element);
            return;
        }

        self.marked.push(BLOCK_MARK);
        let start = self.marked.len();
        self.visit_children(element);
        let end = self.marked.len();
        self.marked.push(BLOCK_MARK);

        if name == "p" || heading_level(name).is_some() {
            let inner = &self.marked[start..end];
            self.blocks.push(Block {
                tag: name.to_string(),
                text: plain_text(inner),
                sentence_count: text::split_sentences(inner).len(),
            });
        }
    }

    fn push_text(&mut self, raw: &str) {
        if self.anchor_depth > 0 {
            self.marked.push_str(&raw.replace('.', &PROTECTED_DOT.to_string()));
        } else {
            self.marked.push_str(raw);
        }
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    text::collapse_whitespace(&element.text().collect::<String>())
}

/// Turn marked text into readable plain text: one line per block, whitespace collapsed
fn plain_text(marked: &str) -> String {
    marked
        .replace(PROTECTED_DOT, ".")
        .split(BLOCK_MARK)
        .map(text::collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_blocks_do_not_fuse() {
        let view = NormalizedView::from_html("<h2>Coffee guide</h2><p>Beans matter</p>");
        assert_eq!(view.sentences, vec!["Coffee guide", "Beans matter"]);
        assert_eq!(view.text, "Coffee guide\nBeans matter");
    }

    #[test]
    fn test_anchor_periods_do_not_split() {
        let view = NormalizedView::from_html(
            r#"<p>We love <a href="/x">Acme Inc. products</a> a lot. Really.</p>"#,
        );
        assert_eq!(
            view.sentences,
            vec!["We love Acme Inc. products a lot.", "Really."]
        );
    }

    #[test]
    fn test_structure_extraction() {
        let html = r#"
            <h1>Main</h1>
            <h2>Sub <em>one</em></h2>
            <p>Text <a href="https://other.com" rel="NoFollow">there</a></p>
            <img src="a.png" alt="A cat">
            <img src="b.png">
        "#;
        let view = NormalizedView::from_html(html);
        assert_eq!(view.headings.len(), 2);
        assert_eq!(view.headings[1].level, 2);
        assert_eq!(view.headings[1].text, "Sub one");
        assert_eq!(view.anchors.len(), 1);
        assert_eq!(view.anchors[0].href, "https://other.com");
        assert_eq!(view.anchors[0].rel, "nofollow");
        assert_eq!(view.anchors[0].text, "there");
        assert_eq!(view.images.len(), 2);
        assert!(view.images[0].has_alt());
        assert!(!view.images[1].has_alt());
    }

    #[test]
    fn test_blocks_count_sentences() {
        let view = NormalizedView::from_html("<p>One. Two. Three.</p><h2>Head</h2>");
        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[0].tag, "p");
        assert_eq!(view.blocks[0].sentence_count, 3);
        assert_eq!(view.blocks[1].sentence_count, 1);
    }

    #[test]
    fn test_scripts_are_dropped() {
        let view = NormalizedView::from_html("<p>Hi</p><script>var x = 1;</script>");
        assert_eq!(view.words, vec!["hi"]);
    }

    #[test]
    fn test_empty_document() {
        let view = NormalizedView::from_html("");
        assert_eq!(view.word_count(), 0);
        assert_eq!(view.sentence_count(), 0);
        assert!(view.headings.is_empty());
        assert!(view.text.is_empty());
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        let view = NormalizedView::from_html("<p>Open <b>bold <i>mixed</b> close</i><div><<p>x");
        assert!(view.word_count() >= 4);
    }

    #[test]
    fn test_plain_text_without_markup() {
        let view = NormalizedView::from_html("cat cat cat dog");
        assert_eq!(view.word_count(), 4);
        assert_eq!(view.lowercase, "cat cat cat dog");
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_text("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(decode_text("a<b and c<d"), "a<b and c<d");
        assert_eq!(decode_text("<b>bold</b> &lt;3"), "<b>bold</b> <3");
    }
}
