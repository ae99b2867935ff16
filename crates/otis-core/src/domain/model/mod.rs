//! Read-only manuscript views.
//!
//! [`Work`], [`Folder`], [`Chapter`] and [`Scene`] are thin views built on
//! demand from a [`Node`](crate::domain::Node) plus its position in the tree.
//! None of them own data; they borrow the [`Manuscript`] they came from.

mod chapter;
mod folder;
mod manuscript;
mod scene;
mod work;

pub use chapter::Chapter;
pub use folder::Folder;
pub use manuscript::Manuscript;
pub use scene::Scene;
pub use work::Work;

use crate::error::OtisResult;

/// Round a word count to the nearest 500 for title-page display.
pub fn approximate_word_count(count: u64) -> u64 {
    (count + 250) / 500 * 500
}

fn total_words<'a>(scenes: impl IntoIterator<Item = Scene<'a>>) -> OtisResult<u64> {
    let mut total = 0;
    for scene in scenes {
        total += scene.word_count()?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_500() {
        assert_eq!(approximate_word_count(0), 0);
        assert_eq!(approximate_word_count(249), 0);
        assert_eq!(approximate_word_count(250), 500);
        assert_eq!(approximate_word_count(12_749), 12_500);
        assert_eq!(approximate_word_count(12_750), 13_000);
    }
}
