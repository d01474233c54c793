//! Textual matching primitives. Nothing here looks at word boundaries:
//! `user` matches inside `superuser` and `users` alike.

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`.
///
/// ASCII folding keeps byte offsets identical between the folded and the
/// original haystack, so the offset can slice the original safely.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let folded = haystack.to_ascii_lowercase();
    folded.find(&needle.to_ascii_lowercase())
}

/// Replace the first case-insensitive occurrence of `needle` with `replacement`.
///
/// Text outside the matched span keeps its original casing. Returns `None`
/// when `needle` does not occur.
pub fn replace_first_case_insensitive(
    haystack: &str,
    needle: &str,
    replacement: &str,
) -> Option<String> {
    let start = find_case_insensitive(haystack, needle)?;
    let end = start + needle.len();
    Some(format!(
        "{}{}{}",
        &haystack[..start],
        replacement,
        &haystack[end..]
    ))
}

/// Replace every exact occurrence of `needle`, left to right.
///
/// Returns `None` when `needle` does not occur, so callers can tell
/// "substitution fired" apart from "content unchanged".
pub fn replace_all_literal(haystack: &str, needle: &str, replacement: &str) -> Option<String> {
    if needle.is_empty() || !haystack.contains(needle) {
        return None;
    }
    Some(haystack.replace(needle, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case() {
        assert_eq!(find_case_insensitive("UsersController.ts", "users"), Some(0));
        assert_eq!(find_case_insensitive("create-user.dto.ts", "user"), Some(7));
        assert_eq!(find_case_insensitive("app.module.ts", "user"), None);
    }

    #[test]
    fn find_rejects_empty_and_oversized_needles() {
        assert_eq!(find_case_insensitive("users", ""), None);
        assert_eq!(find_case_insensitive("user", "users"), None);
    }

    #[test]
    fn replace_first_preserves_surrounding_case() {
        assert_eq!(
            replace_first_case_insensitive("CreateUser.dto.ts", "user", "member").as_deref(),
            Some("Createmember.dto.ts")
        );
        assert_eq!(
            replace_first_case_insensitive("users.controller.ts", "users", "members").as_deref(),
            Some("members.controller.ts")
        );
    }

    #[test]
    fn replace_first_only_touches_first_occurrence() {
        assert_eq!(
            replace_first_case_insensitive("user-user.ts", "user", "member").as_deref(),
            Some("member-user.ts")
        );
    }

    #[test]
    fn replace_first_matches_inside_words() {
        assert_eq!(
            replace_first_case_insensitive("superuser.guard.ts", "user", "member").as_deref(),
            Some("supermember.guard.ts")
        );
    }

    #[test]
    fn replace_all_is_case_sensitive() {
        assert_eq!(
            replace_all_literal("User user User", "User", "Member").as_deref(),
            Some("Member user Member")
        );
        assert_eq!(replace_all_literal("class Users {}", "users", "members"), None);
    }

    #[test]
    fn replace_all_treats_needle_literally() {
        assert_eq!(replace_all_literal("a.b axb", "a.b", "c").as_deref(), Some("c axb"));
    }
}
