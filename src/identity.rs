/// Both normalized forms of the user-supplied project name, derived once
/// at startup and used everywhere a placeholder needs a value.
pub struct ProjectIdentity {
    /// Identifier form: `"My CoolApp"` -> `"my-cool-app"`. Used for the
    /// target directory, package scope, container names and credentials.
    pub kebab: String,
    /// Display form: `"my-cool-app"` -> `"MyCoolApp"`. Used for the brand
    /// string in the template UI.
    pub pascal: String,
}

impl ProjectIdentity {
    pub fn derive(raw: &str) -> Self {
        Self {
            kebab: to_kebab_case(raw),
            pascal: to_pascal_case(raw),
        }
    }
}

/// Lowercase-hyphenated form: a hyphen is inserted at every lowercase ->
/// uppercase boundary, runs of whitespace and underscores collapse into a
/// single hyphen, and the whole result is lowercased.
pub fn to_kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    let mut in_separator = false;
    for ch in input.chars() {
        if ch.is_whitespace() || ch == '_' {
            if !in_separator {
                out.push('-');
            }
            in_separator = true;
            prev_lower = false;
            continue;
        }
        in_separator = false;
        if prev_lower && ch.is_uppercase() {
            out.push('-');
        }
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
        prev_lower = ch.is_lowercase();
    }
    out
}

/// Capitalized-concatenated form: the input is split on runs of hyphens,
/// underscores and whitespace; each word is capitalized and the words are
/// joined with no separator. Empty segments from consecutive separators
/// contribute nothing.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            let mut capitalized = String::with_capacity(word.len());
            if let Some(first) = chars.next() {
                capitalized.extend(first.to_uppercase());
                capitalized.extend(chars.flat_map(|c| c.to_lowercase()));
            }
            capitalized
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_boundaries() {
        assert_eq!(to_kebab_case("MyCoolApp"), "my-cool-app");
        assert_eq!(to_kebab_case("myCoolApp"), "my-cool-app");
        assert_eq!(to_kebab_case("my_cool app"), "my-cool-app");
        assert_eq!(to_kebab_case("my-cool-app"), "my-cool-app");
    }

    #[test]
    fn test_kebab_without_boundaries_is_just_lowercased() {
        assert_eq!(to_kebab_case("acme"), "acme");
        assert_eq!(to_kebab_case("ACME"), "acme");
    }

    #[test]
    fn test_kebab_collapses_separator_runs() {
        assert_eq!(to_kebab_case("my   cool__app"), "my-cool-app");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("my-cool-app"), "MyCoolApp");
        assert_eq!(to_pascal_case("my_cool app"), "MyCoolApp");
        assert_eq!(to_pascal_case("acme"), "Acme");
    }

    #[test]
    fn test_pascal_skips_empty_segments() {
        assert_eq!(to_pascal_case("my--cool__  app"), "MyCoolApp");
        assert_eq!(to_pascal_case("---"), "");
    }

    #[test]
    fn test_identity_round_trip() {
        let identity = ProjectIdentity::derive("My Cool App");
        assert_eq!(identity.kebab, "my-cool-app");
        assert_eq!(identity.pascal, "MyCoolApp");
        assert_eq!(to_pascal_case(&identity.kebab), identity.pascal);
    }
}
