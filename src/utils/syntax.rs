//! Syntect-backed highlighting for fenced code blocks.
//!
//! Highlighting is strictly downstream of parsing: a `CodeBlock` node is
//! produced whether or not the language is known, and any highlighter
//! failure falls back to unstyled lines at the call site. Highlighted output
//! is cached behind a small FIFO since streaming re-renders the same closed
//! blocks over and over.

use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::ui::theme::Theme;

const CACHE_CAP: usize = 64;

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static SET: OnceLock<ThemeSet> = OnceLock::new();
    SET.get_or_init(ThemeSet::load_defaults)
}

struct FifoCache {
    map: HashMap<u64, Vec<Line<'static>>>,
    order: VecDeque<u64>,
}

impl FifoCache {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: u64) -> Option<Vec<Line<'static>>> {
        self.map.get(&key).cloned()
    }

    fn put(&mut self, key: u64, value: Vec<Line<'static>>) {
        if self.map.insert(key, value).is_none() {
            self.order.push_back(key);
        }
        while self.map.len() > CACHE_CAP {
            match self.order.pop_front() {
                Some(old) => {
                    self.map.remove(&old);
                }
                None => break,
            }
        }
    }
}

static HIGHLIGHT_CACHE: Mutex<Option<FifoCache>> = Mutex::new(None);

fn cache_key(lang: &str, code: &str, syntect_theme: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    lang.hash(&mut hasher);
    code.hash(&mut hasher);
    syntect_theme.hash(&mut hasher);
    hasher.finish()
}

/// Collapse common aliases onto tokens syntect recognizes.
pub(crate) fn normalize_lang_hint(hint: &str) -> String {
    let token = hint.trim().to_ascii_lowercase();
    match token.as_str() {
        "js" | "javascript" | "jsx" => "javascript".into(),
        "ts" | "tsx" | "typescript" => "typescript".into(),
        "py" | "python" => "python".into(),
        "sh" | "bash" | "zsh" | "shell" => "bash".into(),
        "rs" | "rust" => "rust".into(),
        "yml" | "yaml" => "yaml".into(),
        other => other.into(),
    }
}

/// Highlight a code block, or `None` when the language is unknown or the
/// highlighter fails — callers then render the code unstyled.
pub fn highlight_code_block(language: &str, code: &str, theme: &Theme) -> Option<Vec<Line<'static>>> {
    let lang = normalize_lang_hint(language);
    let syntax = syntax_set().find_syntax_by_token(&lang)?;
    let syntect_theme = theme_set().themes.get(theme.syntect_theme)?;

    let key = cache_key(&lang, code, theme.syntect_theme);
    {
        let guard = HIGHLIGHT_CACHE.lock().ok()?;
        if let Some(cached) = guard.as_ref().and_then(|c| c.get(key)) {
            return Some(cached);
        }
    }

    let mut highlighter = HighlightLines::new(syntax, syntect_theme);
    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = highlighter.highlight_line(line, syntax_set()).ok()?;
        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .map(|(style, text)| {
                let fg = style.foreground;
                Span::styled(
                    text.trim_end_matches('\n').to_string(),
                    Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if let Ok(mut guard) = HIGHLIGHT_CACHE.lock() {
        guard
            .get_or_insert_with(FifoCache::new)
            .put(key, lines.clone());
    }
    Some(lines)
}
