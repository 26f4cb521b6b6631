use crate::error::SortwindResult;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// One per-language configuration entry, as written in settings JSON.
///
/// The shape mirrors the accepted `classRegex` values:
/// - a bare pattern string
/// - a list of pattern strings (independent top-level patterns)
/// - a descriptor with a nested pattern chain plus separator/replacement
/// - a list of any of the above
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LangConfig {
    Pattern(String),
    Patterns(Vec<String>),
    Descriptor {
        regex: Option<OneOrMany>,
        separator: Option<String>,
        replacement: Option<String>,
    },
    Many(Vec<LangConfig>),
}

/// A descriptor's `regex` field: a single pattern or a chain of patterns
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// A compiled matcher: an ordered chain of pattern stages plus the
/// separator/replacement overrides used when sorting its matches.
///
/// Stage order is significant: stage *i* searches only inside the text
/// captured by stage *i - 1*, and the last stage's capture is the class
/// list handed to the sorter.
#[derive(Debug, Clone)]
pub struct Matcher {
    pub stages: Vec<Regex>,
    pub separator: Option<Regex>,
    pub replacement: Option<String>,
}

// Content stages match case-insensitively, separators as written.
fn compile_stage(pattern: &str) -> SortwindResult<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn single_stage_matcher(pattern: &str) -> SortwindResult<Matcher> {
    Ok(Matcher {
        stages: vec![compile_stage(pattern)?],
        separator: None,
        replacement: None,
    })
}

/// Build one matcher from a descriptor's fields.
///
/// `replacement` falls back to the raw `separator` string when absent, so
/// that a config which splits on e.g. `", "` also rejoins with `", "`.
fn build_descriptor_matcher(
    regex: Option<&OneOrMany>,
    separator: Option<&str>,
    replacement: Option<&str>,
) -> SortwindResult<Matcher> {
    let stages = match regex {
        Some(OneOrMany::One(pattern)) => vec![compile_stage(pattern)?],
        Some(OneOrMany::Many(patterns)) => patterns
            .iter()
            .map(|pattern| compile_stage(pattern))
            .collect::<SortwindResult<Vec<_>>>()?,
        None => Vec::new(),
    };

    let compiled_separator = match separator {
        Some(pattern) => Some(Regex::new(pattern)?),
        None => None,
    };

    Ok(Matcher {
        stages,
        separator: compiled_separator,
        replacement: replacement.or(separator).map(str::to_owned),
    })
}

/// Resolve a language's configuration value into its list of matchers.
///
/// A missing value yields no matchers; a bare string yields one
/// single-stage matcher; a list of strings yields one *independent*
/// single-stage matcher per string; a descriptor yields one matcher whose
/// stages are chained in list order; a list of descriptors (or mixed
/// values) resolves each element and concatenates the results.
///
/// # Errors
/// A malformed pattern string fails the whole build with the compilation
/// error, so a broken configuration is reported instead of silently
/// matching nothing.
pub fn build_matchers(value: Option<&LangConfig>) -> SortwindResult<Vec<Matcher>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    match value {
        LangConfig::Pattern(pattern) => Ok(vec![single_stage_matcher(pattern)?]),
        LangConfig::Patterns(patterns) => patterns
            .iter()
            .map(|pattern| single_stage_matcher(pattern))
            .collect(),
        LangConfig::Descriptor {
            regex,
            separator,
            replacement,
        } => Ok(vec![build_descriptor_matcher(
            regex.as_ref(),
            separator.as_deref(),
            replacement.as_deref(),
        )?]),
        LangConfig::Many(values) => {
            let mut matchers = Vec::new();
            for value in values {
                matchers.extend(build_matchers(Some(value))?);
            }
            Ok(matchers)
        }
    }
}
