use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::Diagnostics,
    parsing::templates::{Template, find_templates},
};

/// How positional and named arguments are ordered when a template is written back out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateOrder {
    /// Keep the given order, renumbering positional arguments only when needed.
    #[default]
    Interleaved,
    /// All positional arguments first (ascending), then named arguments.
    NumberedFirst,
}

/// Caller-level knobs for a scanning session.
///
/// Usually built from the user's config file. The methods here are the
/// option-aware entry points; the free functions take their settings as
/// arguments instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub template_order: TemplateOrder,
    pub log_diagnostics: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            template_order: TemplateOrder::Interleaved,
            log_diagnostics: true,
        }
    }
}

impl ScanOptions {
    /// A fresh diagnostics collector honouring `log_diagnostics`.
    pub fn diagnostics(&self) -> Diagnostics {
        if self.log_diagnostics {
            Diagnostics::new()
        } else {
            Diagnostics::silent()
        }
    }

    /// Writes `template` back out in the configured argument order.
    pub fn write_template(&self, template: &Template) -> String {
        template.to_wikitext_with(self.template_order)
    }

    /// Every top-level template in `text`, with the diagnostics raised on the
    /// way collected per `log_diagnostics`.
    pub fn find_templates(&self, text: &str) -> (Vec<Template>, Diagnostics) {
        let mut diagnostics = self.diagnostics();
        let templates = find_templates(text, &mut diagnostics);
        (templates, diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::templates::parse_template;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(TemplateOrder::Interleaved, "{{t|k=v|a}}")]
    #[case(TemplateOrder::NumberedFirst, "{{t|a|k=v}}")]
    fn write_template_follows_configured_order(
        #[case] template_order: TemplateOrder,
        #[case] expected: &str,
    ) {
        let options = ScanOptions {
            template_order,
            ..ScanOptions::default()
        };
        let template = parse_template("{{t|k=v|a}}", &mut options.diagnostics()).unwrap();
        assert_eq!(options.write_template(&template), expected);
    }

    #[test]
    fn find_templates_collects_diagnostics() {
        let options = ScanOptions {
            log_diagnostics: false,
            ..ScanOptions::default()
        };
        let (templates, diagnostics) = options.find_templates("{{a|x=1|x=2}} {{b}}");
        assert_eq!(templates.len(), 2);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.template_order, TemplateOrder::Interleaved);
        assert!(options.log_diagnostics);
    }
}
