use std::sync::OnceLock;

use serde::Serialize;

use super::{
    args::{ArgKey, TemplateArgs},
    serialize::write_template,
};
use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    options::TemplateOrder,
    parsing::{
        kinds::{TemplateCall, WikiLink},
        scan::MarkerSet,
    },
};

/// A template invocation such as `{{en-noun|cats|head=cat}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    /// The invocation exactly as it appeared in the (escape-stripped) text.
    pub src: String,
    pub name: String,
    pub args: TemplateArgs,
}

impl Template {
    /// Builds an invocation from parts; `src` is its interleaved rendering.
    pub fn new(name: impl Into<String>, args: TemplateArgs) -> Self {
        let name = name.into();
        let src = write_template(&name, args.iter(), TemplateOrder::Interleaved);
        Self { src, name, args }
    }

    /// Writes the invocation back out, keeping argument order where possible.
    pub fn to_wikitext(&self) -> String {
        self.to_wikitext_with(TemplateOrder::Interleaved)
    }

    pub fn to_wikitext_with(&self, order: TemplateOrder) -> String {
        write_template(&self.name, self.args.iter(), order)
    }

    pub fn positional_args(&self) -> Vec<&str> {
        super::positional_args(&self.args)
    }
}

/// Parses a whole `{{...}}` span into its name and arguments.
///
/// Returns `None` unless the input both starts with `{{` and ends with `}}`.
/// A repeated key keeps its first position, takes the later value, and is
/// reported to `diagnostics`.
pub fn parse_template(src: &str, diagnostics: &mut Diagnostics) -> Option<Template> {
    let inner = src
        .strip_prefix(TemplateCall::OPEN)?
        .strip_suffix(TemplateCall::CLOSE)?;

    let mut chunks = split_arguments(inner).into_iter();
    let name = chunks
        .next()
        .map(|chunk| chunk.value.trim().to_string())
        .unwrap_or_default();

    let mut args = TemplateArgs::new();
    let mut unlabeled = 0usize;
    for chunk in chunks {
        let key = match chunk.key {
            Some(key) => ArgKey::named(key.trim()),
            None => {
                unlabeled += 1;
                ArgKey::Positional(unlabeled)
            }
        };
        let value = chunk.value.trim().to_string();
        if let Some(previous) = args.insert(key.clone(), value.clone()) {
            diagnostics.push(Diagnostic::DuplicateArgument {
                template: name.clone(),
                key,
                previous,
                replacement: value,
            });
        }
    }

    Some(Template {
        src: src.to_string(),
        name,
        args,
    })
}

/// One raw argument: the text before an eligible `=` (if any) and the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawArgument<'t> {
    key: Option<&'t str>,
    value: &'t str,
}

/// Scanner state while splitting a template's inner text.
#[derive(Debug, Default)]
struct SplitState<'t> {
    brace_depth: usize,
    link_depth: usize,
    pending_key: Option<&'t str>,
    saw_equals: bool,
}

impl SplitState<'_> {
    /// Which markers matter next: separators only count outside nested
    /// templates and links, and `=` only once per argument after the name.
    fn markers(&self, in_name: bool) -> &'static MarkerSet {
        if self.brace_depth > 0 || self.link_depth > 0 {
            nesting_markers()
        } else if in_name || self.saw_equals {
            pipe_markers()
        } else {
            all_markers()
        }
    }
}

/// Splits on top-level `|`; the first chunk is the template name.
fn split_arguments(inner: &str) -> Vec<RawArgument<'_>> {
    let mut state = SplitState::default();
    let mut chunks = Vec::new();
    let mut chunk_start = 0usize;
    let mut pos = 0usize;

    while let Some(m) = state.markers(chunks.is_empty()).find(inner, pos) {
        pos = m.end();
        match m.marker {
            TemplateCall::OPEN => state.brace_depth += 1,
            TemplateCall::CLOSE => state.brace_depth = state.brace_depth.saturating_sub(1),
            WikiLink::OPEN => state.link_depth += 1,
            WikiLink::CLOSE => state.link_depth = state.link_depth.saturating_sub(1),
            TemplateCall::SEPARATOR => {
                chunks.push(RawArgument {
                    key: state.pending_key.take(),
                    value: &inner[chunk_start..m.start],
                });
                chunk_start = pos;
                state.saw_equals = false;
            }
            TemplateCall::ASSIGN => {
                state.pending_key = Some(&inner[chunk_start..m.start]);
                chunk_start = pos;
                state.saw_equals = true;
            }
            _ => {}
        }
    }

    chunks.push(RawArgument {
        key: state.pending_key.take(),
        value: &inner[chunk_start..],
    });
    chunks
}

const NESTING: [&str; 4] = [
    TemplateCall::OPEN,
    TemplateCall::CLOSE,
    WikiLink::OPEN,
    WikiLink::CLOSE,
];

fn nesting_markers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| MarkerSet::new(&NESTING).expect("Invalid nesting markers"))
}

fn pipe_markers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| {
        let mut markers = NESTING.to_vec();
        markers.push(TemplateCall::SEPARATOR);
        MarkerSet::new(&markers).expect("Invalid separator markers")
    })
}

fn all_markers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| {
        let mut markers = NESTING.to_vec();
        markers.extend([TemplateCall::SEPARATOR, TemplateCall::ASSIGN]);
        MarkerSet::new(&markers).expect("Invalid argument markers")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(src: &str) -> Template {
        parse_template(src, &mut Diagnostics::silent()).unwrap()
    }

    fn raw(key: Option<&'static str>, value: &'static str) -> RawArgument<'static> {
        RawArgument { key, value }
    }

    #[test]
    fn splits_name_and_arguments() {
        assert_eq!(
            split_arguments("t|a|k=v|b"),
            vec![
                raw(None, "t"),
                raw(None, "a"),
                raw(Some("k"), "v"),
                raw(None, "b"),
            ]
        );
    }

    #[test]
    fn name_chunk_is_never_split_on_equals() {
        assert_eq!(
            split_arguments("a=b|c"),
            vec![raw(None, "a=b"), raw(None, "c")]
        );
    }

    #[test]
    fn second_equals_is_plain_text() {
        assert_eq!(
            split_arguments("t|k=v=w"),
            vec![raw(None, "t"), raw(Some("k"), "v=w")]
        );
    }

    #[test]
    fn nested_links_and_templates_hide_separators() {
        assert_eq!(
            split_arguments("t|[[a|b]]|{{u|x=y}}|k=[[c|d=e]]"),
            vec![
                raw(None, "t"),
                raw(None, "[[a|b]]"),
                raw(None, "{{u|x=y}}"),
                raw(Some("k"), "[[c|d=e]]"),
            ]
        );
    }

    #[test]
    fn stray_closers_do_not_underflow() {
        assert_eq!(
            split_arguments("t|a]]|b}}|c"),
            vec![
                raw(None, "t"),
                raw(None, "a]]"),
                raw(None, "b}}"),
                raw(None, "c")
            ]
        );
    }

    #[test]
    fn link_argument_is_one_positional() {
        let t = parse("{{t|[[a|b]]}}");
        assert_eq!(t.name, "t");
        assert_eq!(t.args.len(), 1);
        assert_eq!(t.args.positional(1), Some("[[a|b]]"));
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let t = parse("{{ en-noun | cats | head = cat }}");
        assert_eq!(t.name, "en-noun");
        assert_eq!(t.args.positional(1), Some("cats"));
        assert_eq!(t.args.named("head"), Some("cat"));
        assert_eq!(t.src, "{{ en-noun | cats | head = cat }}");
    }

    #[test]
    fn positional_numbering_ignores_explicit_numbers() {
        let t = parse("{{t|a|2=x|b}}");
        let keys: Vec<ArgKey> = t.args.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![ArgKey::Positional(1), ArgKey::named("2"), ArgKey::Positional(2)]
        );
        assert_eq!(t.args.positional(2), Some("b"));
        assert_eq!(t.args.named("2"), Some("x"));
    }

    #[test]
    fn duplicate_key_overwrites_and_reports_once() {
        let mut diags = Diagnostics::silent();
        let t = parse_template("{{t|x=1|y=0|x=2}}", &mut diags).unwrap();

        let keys: Vec<String> = t.args.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(t.args.named("x"), Some("2"));
        assert_eq!(
            diags.into_vec(),
            vec![Diagnostic::DuplicateArgument {
                template: "t".to_string(),
                key: ArgKey::named("x"),
                previous: "1".to_string(),
                replacement: "2".to_string(),
            }]
        );
    }

    #[test]
    fn empty_arguments_are_kept() {
        let t = parse("{{t||}}");
        assert_eq!(positional_values(&t), vec!["", ""]);
    }

    fn positional_values(t: &Template) -> Vec<&str> {
        t.positional_args()
    }

    #[rstest]
    #[case("{{t}}", "t")]
    #[case("{{}}", "")]
    #[case("{{ spaced name }}", "spaced name")]
    #[case("{{t|a}}", "t")]
    fn names(#[case] src: &str, #[case] name: &str) {
        assert_eq!(parse(src).name, name);
    }

    #[rstest]
    #[case("t|a")]
    #[case("{{t|a")]
    #[case("t|a}}")]
    #[case("[[t]]")]
    #[case("{{}")]
    fn rejects_non_templates(#[case] src: &str) {
        assert_eq!(parse_template(src, &mut Diagnostics::silent()), None);
    }

    #[test]
    fn new_renders_src() {
        let args: TemplateArgs = [(ArgKey::Positional(1), "a"), (ArgKey::named("k"), "v")]
            .into_iter()
            .collect();
        let t = Template::new("t", args);
        assert_eq!(t.src, "{{t|a|k=v}}");
        assert_eq!(parse(&t.src).args, t.args);
    }
}
