use std::collections::HashMap;

pub mod engine;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod sorter;

// Re-export the core types for convenient access
pub use engine::process_nested_matches;
pub use error::{SortwindError, SortwindResult};
pub use loader::{Settings, load_settings_from_file, load_settings_from_str};
pub use matcher::{LangConfig, Matcher, OneOrMany, build_matchers};
pub use sorter::{SortOptions, sort_class_string};

/// Language identifier whose configuration serves as the fallback when the
/// active language has no entry of its own.
pub const FALLBACK_LANG: &str = "html";

/// One replacement span in document byte coordinates: the text at
/// `start..end` is to be replaced with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// The class sorter: per-language matcher configuration plus the sorting
/// policy shared by all languages.
pub struct Sortwind {
    // Keyed by language identifier
    // e.g. lang_config["html"] = "class=\"([^\"]*)\""
    //      lang_config["javascript"] = ["className=\"([^\"]*)\"", ...]
    lang_config: HashMap<String, LangConfig>,
    sort_order: Vec<String>,
    custom_prefix: String,
    remove_duplicates: bool,
    prepend_custom_classes: bool,
}

impl Sortwind {
    pub fn new() -> Self {
        Sortwind {
            lang_config: HashMap::new(),
            sort_order: Vec::new(),
            custom_prefix: String::new(),
            remove_duplicates: true,
            prepend_custom_classes: false,
        }
    }

    pub fn with_lang_config(&mut self, lang_id: &str, config: LangConfig) -> &mut Self {
        self.lang_config.insert(lang_id.to_owned(), config);
        self
    }

    pub fn with_sort_order(&mut self, sort_order: Vec<String>) -> &mut Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_custom_prefix(&mut self, prefix: &str) -> &mut Self {
        self.custom_prefix = prefix.to_owned();
        self
    }

    pub fn with_remove_duplicates(&mut self, remove_duplicates: bool) -> &mut Self {
        self.remove_duplicates = remove_duplicates;
        self
    }

    pub fn with_prepend_custom_classes(&mut self, prepend: bool) -> &mut Self {
        self.prepend_custom_classes = prepend;
        self
    }

    /// The configuration entry for a language: its own if present,
    /// otherwise the markup fallback entry.
    pub fn resolve_lang_config(&self, lang_id: &str) -> Option<&LangConfig> {
        self.lang_config
            .get(lang_id)
            .or_else(|| self.lang_config.get(FALLBACK_LANG))
    }

    /// Compile the matchers for a language.
    ///
    /// # Errors
    /// Propagates pattern compilation failures so broken configuration is
    /// visible to the caller.
    pub fn matchers_for(&self, lang_id: &str) -> SortwindResult<Vec<Matcher>> {
        build_matchers(self.resolve_lang_config(lang_id))
    }

    fn options_for(&self, matcher: &Matcher) -> SortOptions {
        SortOptions {
            remove_duplicates: self.remove_duplicates,
            prepend_custom_classes: self.prepend_custom_classes,
            custom_prefix: self.custom_prefix.clone(),
            separator: matcher.separator.clone(),
            replacement: matcher.replacement.clone(),
        }
    }

    /// Find every class list in `text` for the given language and return
    /// the replacement spans that would put it into canonical order.
    ///
    /// Spans are byte offsets into `text`, reported in discovery order per
    /// matcher; a host editor applies each as "replace `start..end` with
    /// `replacement`".
    pub fn edits(&self, lang_id: &str, text: &str) -> SortwindResult<Vec<Edit>> {
        let matchers = self.matchers_for(lang_id)?;
        let mut edits = Vec::new();

        for matcher in &matchers {
            let options = self.options_for(matcher);
            process_nested_matches(&matcher.stages, text, 0, &mut |class_string, start| {
                let sorted = sort_class_string(class_string, &self.sort_order, &options);
                edits.push(Edit {
                    start,
                    end: start + class_string.len(),
                    replacement: sorted,
                });
            });
        }

        Ok(edits)
    }

    /// Rewrite every class list in `text` and return the resulting
    /// document.
    ///
    /// Edits are applied back to front so earlier spans stay valid; when
    /// spans from different matchers overlap, the first one applied wins
    /// and the rest are skipped.
    pub fn sort_text(&self, lang_id: &str, text: &str) -> SortwindResult<String> {
        let mut edits = self.edits(lang_id, text)?;
        edits.sort_by(|a, b| b.start.cmp(&a.start));

        let mut result = text.to_string();
        let mut lowest_applied = text.len();
        for edit in edits {
            if edit.end > lowest_applied {
                continue;
            }
            result.replace_range(edit.start..edit.end, &edit.replacement);
            lowest_applied = edit.start;
        }
        Ok(result)
    }
}

impl Default for Sortwind {
    fn default() -> Self {
        Sortwind::new()
    }
}

impl From<Settings> for Sortwind {
    fn from(settings: Settings) -> Self {
        Sortwind {
            lang_config: settings.class_regex,
            sort_order: settings.default_sort_order,
            custom_prefix: settings.custom_tailwind_prefix,
            remove_duplicates: settings.remove_duplicates,
            prepend_custom_classes: settings.prepend_custom_classes,
        }
    }
}
