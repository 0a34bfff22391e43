//! Deterministic blog post synthesis.
//!
//! Every field of post `i` is a pure function of `i` (and of the comment
//! position `j` for comments). Nothing here reads a clock or a random source.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{BlogPost, Comment};
use crate::pools::{
    self, AUTHORS, CATEGORIES, COMMENT_AUTHORS, COMMENT_TEMPLATES, EXTRA_TAGS, IMAGE_PARAMS,
    IMAGES, INTROS, QUOTES, SECTIONS, TITLES,
};
use crate::template::{self, Quotation};

/// 2026-02-06T00:00:00Z.
const ANCHOR_EPOCH_SECS: i64 = 1_770_336_000;

const DATE_FORMAT: &str = "%b %d, %Y";
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const DATE_HASH_MULTIPLIER: i64 = 1337;

const SECTIONS_PER_POST: u32 = 4;
const MIN_COMMENTS: u32 = 10;
const COMMENT_SPREAD: u32 = 21;
const COMMENT_HOUR_SPREAD: u32 = 5;

const WORDS_PER_MINUTE: usize = 180;
const MIN_READ_MINUTES: usize = 5;

/// Parameters of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Posts are numbered `1..=post_count`.
    ///
    /// Post `i` is dated about `2 * i` days before `anchor`, so the count must
    /// keep `anchor - 2 * post_count` days inside chrono's supported range
    /// (a little under 48 million posts for the default anchor). Larger
    /// counts panic in [`FixtureGenerator::published_at`].
    pub post_count: u32,
    /// Post `i` is dated `2 * i` days (and a sub-day offset) before this.
    pub anchor: DateTime<Utc>,
}

impl Default for GenerationPlan {
    fn default() -> Self {
        Self {
            post_count: 50,
            anchor: DateTime::from_timestamp(ANCHOR_EPOCH_SECS, 0).unwrap_or_default(),
        }
    }
}

/// Builds the fixture collection from the compiled-in pools.
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    plan: GenerationPlan,
}

impl FixtureGenerator {
    pub fn new(plan: GenerationPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    /// Generate every post in the plan, newest first.
    pub fn generate(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = (1..=self.plan.post_count)
            .map(|index| self.post(index))
            .collect();

        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        tracing::debug!(
            post_count = posts.len(),
            comment_count = posts.iter().map(|p| p.comments.len()).sum::<usize>(),
            "Generated fixture collection"
        );

        posts
    }

    /// Build the post for a single index.
    pub fn post(&self, index: u32) -> BlogPost {
        let category = pools::pick(&CATEGORIES, index.into());
        let author = pools::pick(&AUTHORS, index.into());
        let published = self.published_at(index);
        let content = content(index, category);

        BlogPost {
            id: index.to_string(),
            title: title(index, category),
            excerpt: excerpt(category),
            read_time: format!("{} min read", read_minutes(&content)),
            content,
            author: author.name.to_string(),
            author_role: author.role.to_string(),
            date: format_date(&published),
            timestamp: published.timestamp_millis(),
            image: format!("{}{}", pools::pick(&IMAGES, index.into()), IMAGE_PARAMS),
            category: category.to_string(),
            tags: std::iter::once(category)
                .chain(EXTRA_TAGS)
                .map(str::to_string)
                .collect(),
            comments: comments(index, category, &published),
        }
    }

    /// Anchor minus `2 * i` days minus `(i * 1337) mod 86400` seconds.
    pub fn published_at(&self, index: u32) -> DateTime<Utc> {
        let offset_secs = i64::from(index) * DATE_HASH_MULTIPLIER % SECONDS_PER_DAY;
        self.plan.anchor - Duration::days(2 * i64::from(index)) - Duration::seconds(offset_secs)
    }
}

/// Number of comments attached to post `index`, always within 10..=30.
pub fn comment_count(index: u32) -> u32 {
    MIN_COMMENTS + index % COMMENT_SPREAD
}

fn comments(index: u32, category: &str, published: &DateTime<Utc>) -> Vec<Comment> {
    (0..comment_count(index))
        .map(|position| {
            let (i, j) = (u64::from(index), u64::from(position));
            let hours = (i + j) % u64::from(COMMENT_HOUR_SPREAD);
            let posted = *published + Duration::hours(hours as i64);

            Comment {
                id: Comment::id_for(index, position),
                author: pools::pick(&COMMENT_AUTHORS, i + j).to_string(),
                content: template::fill(pools::pick(&COMMENT_TEMPLATES, i * j), category),
                // Day precision only; the hour offset can still roll the date over.
                date: format_date(&posted),
            }
        })
        .collect()
}

fn title(index: u32, category: &str) -> String {
    let title = template::fill_title(pools::pick(&TITLES, index.into()), category);
    let templates = TITLES.len() as u32;

    if index > templates {
        format!("{title} (Exploration {})", index / templates + 1)
    } else {
        title
    }
}

fn excerpt(category: &str) -> String {
    format!(
        "An in-depth look at how {} is evolving in the modern digital landscape. \
         We explore techniques, tools, and the mental models required to succeed.",
        category.to_lowercase()
    )
}

fn content(index: u32, category: &str) -> String {
    let mut html = format!(
        "<p>{}</p>",
        template::fill(pools::pick(&INTROS, index.into()), category)
    );

    for offset in 0..SECTIONS_PER_POST {
        let section = pools::pick(&SECTIONS, u64::from(index + offset));
        html.push_str(&format!(
            "<h3>{}</h3><p>{}</p>",
            section.heading,
            template::fill(section.body, category)
        ));
    }

    html.push_str(&Quotation::parse(pools::pick(&QUOTES, index.into())).to_html());
    html.push_str(&format!(
        "<p>In conclusion, the journey through the world of {category} is an ongoing process \
         of discovery and refinement. By staying curious, embracing change, and focusing on \
         quality, we can build a future that is not only technologically advanced but also \
         deeply meaningful.</p>"
    ));

    html
}

fn read_minutes(content: &str) -> usize {
    (template::word_count(content) / WORDS_PER_MINUTE).max(MIN_READ_MINUTES)
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}
