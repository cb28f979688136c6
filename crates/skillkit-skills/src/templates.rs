//! Fixed file templates written by `init-skill`.
//!
//! Templates use `{{skill_name}}` for the raw skill name and
//! `{{skill_title}}` for its title-cased form.

use skillkit_types::{ScriptKind, TemplateLocale};

const SKILL_NAME_MARKER: &str = "{{skill_name}}";
const SKILL_TITLE_MARKER: &str = "{{skill_title}}";

const SKILL_MANIFEST_EN: &str = include_str!("templates/skill_en.md");
const SKILL_MANIFEST_KO: &str = include_str!("templates/skill_ko.md");

const EXAMPLE_SCRIPT_SH: &str = include_str!("templates/example.sh");
const EXAMPLE_SCRIPT_PY: &str = include_str!("templates/example.py");
const EXAMPLE_SCRIPT_CS: &str = include_str!("templates/example.cs");

/// `references/api_reference.md`, rendered with the skill title.
pub const EXAMPLE_REFERENCE: &str = include_str!("templates/api_reference.md");

/// `assets/example_asset.txt`, written verbatim.
pub const EXAMPLE_ASSET: &str = include_str!("templates/example_asset.txt");

/// `SKILL.md` template for the given locale.
pub fn skill_manifest(locale: TemplateLocale) -> &'static str {
    match locale {
        TemplateLocale::En => SKILL_MANIFEST_EN,
        TemplateLocale::Ko => SKILL_MANIFEST_KO,
    }
}

/// Example script template for the given script kind.
pub fn example_script(kind: ScriptKind) -> &'static str {
    match kind {
        ScriptKind::Shell => EXAMPLE_SCRIPT_SH,
        ScriptKind::Python => EXAMPLE_SCRIPT_PY,
        ScriptKind::CSharp => EXAMPLE_SCRIPT_CS,
    }
}

/// Substitute the name and title markers in a template.
pub fn render(template: &str, skill_name: &str, skill_title: &str) -> String {
    template
        .replace(SKILL_TITLE_MARKER, skill_title)
        .replace(SKILL_NAME_MARKER, skill_name)
}

/// Title-case a hyphen-case skill name: `my-tool` becomes `My Tool`.
///
/// Only the first character of each word is changed. Empty words (from
/// leading, trailing, or doubled hyphens) stay empty.
pub fn title_case(skill_name: &str) -> String {
    skill_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
