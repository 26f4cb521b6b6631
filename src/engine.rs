//! Nested match engine
//!
//! Runs an ordered chain of pattern stages over a text: every match of the
//! first stage has its captured payload searched by the second stage, and
//! so on, until the innermost payload (the class list itself) is reported
//! together with its absolute byte offset in the original text. This is
//! what lets a single configuration reach a class list wrapped inside, say,
//! a template literal inside an attribute inside a tag.

use regex::Regex;

/// Recursively match a chain of pattern stages against `text`, invoking
/// `callback(payload, absolute_offset)` once per innermost match.
///
/// Matches are reported in discovery order: left to right within each
/// level, and every nested match of an outer wrapper is reported before
/// the engine moves past that wrapper. `base_offset` translates payload
/// positions back into the coordinate space of the outermost text, so the
/// caller can replace `offset..offset + payload.len()` in the original
/// document. An empty stage list is a no-op.
///
/// The payload of a match is its first non-empty capture group, scanning
/// left to right; the payload offset is located with `rfind` of the payload
/// inside the whole match, which is wrong when the payload text also occurs
/// verbatim earlier in the wrapper (a known limitation of this scheme). A
/// stage that matches without any non-empty capture group reports an empty
/// payload at the end of its wrapper; that is a defect in the configured
/// pattern, not an engine error.
pub fn process_nested_matches<F>(stages: &[Regex], text: &str, base_offset: usize, callback: &mut F)
where
    F: FnMut(&str, usize),
{
    let Some((first, rest)) = stages.split_first() else {
        return;
    };

    // captures_iter advances past zero-length matches on its own, so a
    // pattern that can match the empty string cannot loop forever here.
    for caps in first.captures_iter(text) {
        let wrapper = caps.get(0).unwrap();
        let payload = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|group| group.as_str())
            .find(|group| !group.is_empty())
            .unwrap_or("");

        // rfind("") yields the wrapper length, matching lastIndexOf('').
        let position_in_wrapper = wrapper.as_str().rfind(payload).unwrap_or(0);
        let payload_offset = base_offset + wrapper.start() + position_in_wrapper;

        if rest.is_empty() {
            callback(payload, payload_offset);
        } else {
            process_nested_matches(rest, payload, payload_offset, callback);
        }
    }
}
