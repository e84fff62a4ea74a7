use content_variation::EntityKey;

use crate::api::ContentError;

/// Turns a URL slug ("bathtub-refinishing") into the display name the engine hashes and the
/// templates print ("Bathtub Refinishing"). Names that are already capitalized pass through.
pub fn display_name(slug: &str, max_length: usize) -> Result<String, ContentError> {
    let slug = validate(slug, max_length)?;

    let words: Vec<String> = slug
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        return Err(ContentError::InvalidIdentifier(format!(
            "'{slug}' holds no words"
        )));
    }
    Ok(words.join(" "))
}

/// Rebuilds a key received as JSON with every name passed through [`display_name`], so a
/// batch key hashes exactly like the matching GET route.
pub fn canonical_key(key: &EntityKey, max_length: usize) -> Result<EntityKey, ContentError> {
    let city = display_name(key.city(), max_length)?;
    Ok(match key {
        EntityKey::Location { .. } => EntityKey::location(city),
        EntityKey::LocationService { service, .. } => {
            EntityKey::location_service(city, display_name(service, max_length)?)
        }
        EntityKey::Reviews { .. } => EntityKey::reviews(city),
    })
}

fn validate(value: &str, max_length: usize) -> Result<&str, ContentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContentError::InvalidIdentifier(
            "identifier is empty".to_string(),
        ));
    }
    if value.chars().count() > max_length {
        return Err(ContentError::InvalidIdentifier(format!(
            "identifier is longer than {max_length} characters"
        )));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '\'' | '.')))
    {
        return Err(ContentError::InvalidIdentifier(format!(
            "unexpected character {c:?}"
        )));
    }
    Ok(value)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
