//! Random post generation.
//!
//! [`PostSource`] is the seam the store and archive pool draw posts from.
//! [`RandomPostGenerator`] is the production source: an endless stream of
//! hacker-jargon posts backed by a `rand` `StdRng`.
//!
//! # Determinism
//!
//! Nothing in the store depends on the generated content, so by default the
//! generator is seeded from OS entropy. [`RandomPostGenerator::seeded`]
//! gives a reproducible stream for tests and for the `seed` plugin option.
//!
//! # Example
//!
//! ```rust
//! use atomic_blog::generator::{PostSource, RandomPostGenerator};
//!
//! let mut a = RandomPostGenerator::seeded(7);
//! let mut b = RandomPostGenerator::seeded(7);
//! assert_eq!(a.generate_many(3), b.generate_many(3));
//! ```

pub mod words;

use crate::domain::Post;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of posts.
///
/// Implementations are infinite: `generate` always yields a post.
pub trait PostSource: std::fmt::Debug {
    /// Produces the next post.
    fn generate(&mut self) -> Post;

    /// Produces `count` posts in generation order.
    fn generate_many(&mut self, count: usize) -> Vec<Post> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// Pseudo-random hacker-jargon post generator.
#[derive(Debug, Clone)]
pub struct RandomPostGenerator {
    rng: StdRng,
}

impl RandomPostGenerator {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator whose output depends only on `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.gen_range(0..pool.len())]
    }

    fn title(&mut self) -> String {
        let adjective = self.pick(words::ADJECTIVES);
        let noun = self.pick(words::NOUNS);
        format!("{adjective} {noun}")
    }

    fn phrase(&mut self) -> String {
        let template = self.pick(words::PHRASES);
        let mut out = String::with_capacity(template.len() + 32);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let Some(close) = rest[open..].find('}') else {
                out.push_str(&rest[open..]);
                rest = "";
                break;
            };
            let placeholder = &rest[open + 1..open + close];
            let word = match placeholder {
                "abbreviation" => self.pick(words::ABBREVIATIONS),
                "adjective" => self.pick(words::ADJECTIVES),
                "noun" => self.pick(words::NOUNS),
                "verb" => self.pick(words::VERBS),
                "ingverb" => self.pick(words::INGVERBS),
                _ => "",
            };
            if out.is_empty() {
                out.push_str(&capitalize(word));
            } else {
                out.push_str(word);
            }
            rest = &rest[open + close + 1..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for RandomPostGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostSource for RandomPostGenerator {
    fn generate(&mut self) -> Post {
        let title = self.title();
        let body = self.phrase();
        Post { title, body }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Replays a fixed list of posts, cycling when exhausted.
///
/// Useful wherever a predictable stream matters more than variety.
#[derive(Debug, Clone)]
pub struct ScriptedPosts {
    posts: Vec<Post>,
    cursor: usize,
}

impl ScriptedPosts {
    /// Creates a scripted source. An empty script yields untitled, empty posts.
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts, cursor: 0 }
    }
}

impl PostSource for ScriptedPosts {
    fn generate(&mut self) -> Post {
        if self.posts.is_empty() {
            return Post::new("", "");
        }
        let post = self.posts[self.cursor % self.posts.len()].clone();
        self.cursor += 1;
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_adjective_then_noun() {
        let mut generator = RandomPostGenerator::seeded(1);
        for _ in 0..50 {
            let post = generator.generate();
            let adjective = words::ADJECTIVES
                .iter()
                .find(|a| post.title.starts_with(&format!("{a} ")))
                .expect("title starts with a known adjective");
            let noun = &post.title[adjective.len() + 1..];
            assert!(words::NOUNS.contains(&noun), "unexpected noun {noun:?}");
        }
    }

    #[test]
    fn body_has_no_unfilled_placeholders() {
        let mut generator = RandomPostGenerator::seeded(2);
        for post in generator.generate_many(100) {
            assert!(!post.body.is_empty());
            assert!(!post.body.contains('{'), "{}", post.body);
            assert!(!post.body.contains('}'), "{}", post.body);
        }
    }

    #[test]
    fn body_starts_capitalized() {
        let mut generator = RandomPostGenerator::seeded(3);
        for post in generator.generate_many(100) {
            let first = post.body.chars().next().expect("non-empty body");
            assert!(!first.is_lowercase(), "{}", post.body);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = RandomPostGenerator::seeded(42);
        let mut b = RandomPostGenerator::seeded(42);
        assert_eq!(a.generate_many(20), b.generate_many(20));
    }

    #[test]
    fn stream_keeps_going() {
        let mut generator = RandomPostGenerator::seeded(9);
        let first = generator.generate_many(10);
        let second = generator.generate_many(10);
        assert_ne!(first, second);
    }

    #[test]
    fn scripted_posts_cycle() {
        let mut source = ScriptedPosts::new(vec![Post::new("a", "1"), Post::new("b", "2")]);
        let titles: Vec<String> = source.generate_many(5).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, ["a", "b", "a", "b", "a"]);
    }

    #[test]
    fn capitalize_handles_empty_and_hyphenated() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("back-end"), "Back-end");
    }
}
