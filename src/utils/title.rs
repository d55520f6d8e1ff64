/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Title sanitizer
//!
//! Voat only accepts submission titles made of printable extended ASCII
//! (Latin-1) characters. [`clean_title`] approximates any Unicode title with
//! those characters:
//!
//! 1. zero width characters are removed
//! 2. runs of whitespace (including the typographic spaces and the
//!    information separators U+001C to U+001F) become one space
//! 3. the visible space symbol `␣` becomes `_`
//! 4. every character is NFKC normalized and reduced to its Latin-1 part,
//!    falling back to an ASCII transliteration when nothing is left
//! 5. unprintable characters are dropped and the result is trimmed
//! 6. titles longer than 200 characters are cut to 194 and get ` [...]`
//!
//! Transliteration of non latin scripts (cyrillic included) is a best effort.

use crate::constants::{MAX_TITLE_LENGTH, TITLE_ELLIPSIS, TITLE_TRUNCATE_AT};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static ZERO_WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{180e}\x{200b}\x{feff}]+").expect("valid zero width regex"));

static SPACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\x{1c}-\x{1f}\x{2000}-\x{200a}\x{202f}\x{205f}]+")
        .expect("valid whitespace regex")
});

const VISIBLE_SPACE: char = '\u{2423}';

/// Cleans a title so that the service accepts it
///
/// # Example
/// ```
/// use voat_client::utils::clean_title;
///
/// assert_eq!(clean_title("  ﬁne\u{200b}  tuning\t␣ "), "fine tuning _");
/// ```
#[must_use]
pub fn clean_title(title: &str) -> String {
    let title = ZERO_WIDTH.replace_all(title, "");
    let title = SPACES.replace_all(&title, " ");
    let title = title.replace(VISIBLE_SPACE, "_");

    let mut cleaned = String::with_capacity(title.len());
    for c in title.chars() {
        push_latin1_approximation(&mut cleaned, c);
    }

    let cleaned: String = cleaned.chars().filter(|c| is_printable_latin1(*c)).collect();
    let cleaned = cleaned.trim();

    if cleaned.chars().count() > MAX_TITLE_LENGTH {
        let mut truncated: String = cleaned.chars().take(TITLE_TRUNCATE_AT).collect();
        truncated.push_str(TITLE_ELLIPSIS);
        truncated
    } else {
        cleaned.to_string()
    }
}

/// Appends the Latin-1 approximation of `c` to `out`
fn push_latin1_approximation(out: &mut String, c: char) {
    let before = out.len();
    out.extend(
        std::iter::once(c)
            .nfkc()
            .filter(|n| u32::from(*n) <= 0xFF),
    );
    if out.len() == before {
        if let Some(ascii) = deunicode::deunicode_char(c) {
            out.push_str(ascii);
        }
    }
}

fn is_printable_latin1(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{80}'..='\u{ff}')
}
