//! Title to filesystem-safe filename mapping.

/// Name used when an episode carries no usable title.
pub const FALLBACK_FILE_NAME: &str = "Unknown_Title.mp3";

/// Characters that never survive into a filename.
const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maps an episode title to the on-disk filename.
///
/// A missing or blank title yields [`FALLBACK_FILE_NAME`] with a warning.
/// Otherwise the title is HTML-entity decoded, the first `:` becomes ` -`,
/// the first `#` is removed, every remaining run of reserved characters
/// becomes a single `_`, surrounding whitespace is trimmed, and `.mp3` is
/// appended.
///
/// Pure and deterministic: the same title always maps to the same name.
#[must_use]
pub fn episode_file_name(title: Option<&str>) -> String {
    let Some(title) = title.filter(|t| !t.trim().is_empty()) else {
        log::warn!("episode has no title, saving as {FALLBACK_FILE_NAME}");
        return FALLBACK_FILE_NAME.to_string();
    };

    let decoded = html_escape::decode_html_entities(title);
    let substituted = decoded.replacen(':', " -", 1).replacen('#', "", 1);

    // Consecutive reserved characters collapse into one underscore
    let mut safe = String::with_capacity(substituted.len());
    let mut prev_reserved = false;
    for c in substituted.chars() {
        if RESERVED_CHARS.contains(&c) {
            if !prev_reserved {
                safe.push('_');
            }
            prev_reserved = true;
        } else {
            safe.push(c);
            prev_reserved = false;
        }
    }

    format!("{}.mp3", safe.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_title_uses_fallback() {
        assert_eq!(episode_file_name(None), "Unknown_Title.mp3");
    }

    #[test]
    fn blank_title_uses_fallback() {
        assert_eq!(episode_file_name(Some("")), "Unknown_Title.mp3");
        assert_eq!(episode_file_name(Some("   ")), "Unknown_Title.mp3");
    }

    #[test]
    fn plain_title_gets_extension() {
        assert_eq!(episode_file_name(Some("Stump the Chumps")), "Stump the Chumps.mp3");
    }

    #[test]
    fn substitution_order_matches_contract() {
        // First ':' -> ' -', first '#' removed, remaining reserved -> '_'
        assert_eq!(
            episode_file_name(Some("Car Talk: Episode #42 <Final>")),
            "Car Talk - Episode 42 _Final_.mp3"
        );
    }

    #[test]
    fn later_colons_and_hashes_become_underscores_or_stay() {
        assert_eq!(episode_file_name(Some("a:b:c")), "a -b_c.mp3");
        // Only the first '#' is removed; later ones are not reserved
        assert_eq!(episode_file_name(Some("#1 and #2")), "1 and #2.mp3");
    }

    #[test]
    fn html_entities_are_decoded_before_substitution() {
        assert_eq!(episode_file_name(Some("Tom &amp; Ray")), "Tom & Ray.mp3");
        // Decoded entities still go through the reserved-char map
        assert_eq!(episode_file_name(Some("A &lt;B&gt; C")), "A _B_ C.mp3");
    }

    #[test]
    fn reserved_character_runs_collapse_to_one_underscore() {
        assert_eq!(episode_file_name(Some("a<<b")), "a_b.mp3");
        assert_eq!(episode_file_name(Some("a<>?*b")), "a_b.mp3");
        // Non-adjacent reserved characters each get their own underscore
        assert_eq!(episode_file_name(Some("a<b>c")), "a_b_c.mp3");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(episode_file_name(Some("  Spaced Out  ")), "Spaced Out.mp3");
    }

    #[test]
    fn deterministic_for_the_same_input() {
        let title = Some("Car Talk: Episode #42 <Final>");
        assert_eq!(episode_file_name(title), episode_file_name(title));
    }

    proptest! {
        #[test]
        fn output_never_contains_reserved_characters(title in ".{0,64}") {
            let name = episode_file_name(Some(&title));
            prop_assert!(name.chars().all(|c| !RESERVED_CHARS.contains(&c)));
        }

        #[test]
        fn output_always_ends_in_mp3(title in ".{0,64}") {
            prop_assert!(episode_file_name(Some(&title)).ends_with(".mp3"));
        }
    }
}
