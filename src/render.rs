use crate::error::TemplateError;
use crate::naming::NameForms;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitutes `{{PASCAL_CASE}}`, `{{CAMEL_CASE}}`, `{{LOWER_CASE}}` and
/// `{{KEBAB_CASE}}` in `template`. Anything else inside double braces is an
/// error; single braces pass through untouched.
pub fn render(template: &str, forms: &NameForms) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + template.len() / 4);
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let offset = consumed + start;
        let inner = &rest[start + OPEN.len()..];
        let end = inner
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated { offset })?;

        let name = inner[..end].trim();
        let value = lookup(forms, name).ok_or_else(|| TemplateError::UnknownPlaceholder {
            name: name.to_string(),
            offset,
        })?;
        out.push_str(value);

        let advance = start + OPEN.len() + end + CLOSE.len();
        rest = &rest[advance..];
        consumed += advance;
    }
    out.push_str(rest);

    Ok(out)
}

fn lookup<'a>(forms: &'a NameForms, name: &str) -> Option<&'a str> {
    match name {
        "PASCAL_CASE" => Some(&forms.pascal),
        "CAMEL_CASE" => Some(&forms.camel),
        "LOWER_CASE" => Some(&forms.lower),
        "KEBAB_CASE" => Some(&forms.kebab),
        _ => None,
    }
}
