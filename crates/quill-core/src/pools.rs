//! Compiled-in content pools.
//!
//! Every string here ends up in the fixture file, so downstream snapshots
//! depend on them byte for byte. Templates use `{cat}` (or `{}` for titles)
//! as the category placeholder.

use crate::error::DomainError;

/// Delimiter between quotation text and its attribution.
pub const QUOTE_DELIMITER: &str = " - ";

/// Query string appended to every image URL.
pub const IMAGE_PARAMS: &str = "?q=80&w=2670&auto=format&fit=crop";

/// Tags that follow the category on every post.
pub const EXTRA_TAGS: [&str; 3] = ["Insights", "2026", "Tech"];

/// A post author and the role shown beside the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub role: &'static str,
}

/// A heading with its body paragraph template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const CATEGORIES: [&str; 8] = [
    "Design",
    "Development",
    "UX",
    "Security",
    "Architecture",
    "AI",
    "Cloud",
    "Soft Skills",
];

pub const AUTHORS: [Author; 8] = [
    Author { name: "Alex Rivers", role: "Senior UI Designer" },
    Author { name: "Sarah Code", role: "Full Stack Developer" },
    Author { name: "Mike Creative", role: "UX Strategist" },
    Author { name: "David Architect", role: "System Architect" },
    Author { name: "Emma Style", role: "CSS Evangelist" },
    Author { name: "Liam Crypt", role: "Security Researcher" },
    Author { name: "Sophia Dev", role: "Frontend Engineer" },
    Author { name: "Noah Backend", role: "DevOps Engineer" },
];

pub const COMMENT_AUTHORS: [&str; 10] = [
    "Jamie Tech",
    "Dev Dan",
    "UX Luna",
    "Cloud Chris",
    "Archi Amy",
    "Security Sam",
    "Soft Skill Sue",
    "Frontend Frank",
    "Backend Barb",
    "Fullstack Fred",
];

pub const COMMENT_TEMPLATES: [&str; 10] = [
    "This is a fantastic deep dive! I've been looking for something this detailed about {cat}.",
    "Interesting perspective on {cat}. I hadn't considered the impact of human-centric design in this context.",
    "Great article! The point about modular architectures really resonated with me.",
    "Thanks for sharing these technical strategies. I'll definitely be trying some of these in my next project.",
    "The outlook for 2026 seems spot on. Agility is definitely going to be the key differentiator.",
    "I'm a bit skeptical about the AI integration part, but you make a compelling case for its necessity.",
    "Excellent summary. Do you have any additional resources you'd recommend for learning more about {cat}?",
    "Love the layout and the content. Very professional and insightful.",
    "As someone working in {cat}, I find your analysis very accurate and helpful.",
    "Keep up the great work! Your blogs are always a highlight of my week.",
];

pub const IMAGES: [&str; 10] = [
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe",
    "https://images.unsplash.com/photo-1555099962-4199c345e5dd",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c",
    "https://images.unsplash.com/photo-1507721999472-8ed4421c4af2",
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa",
    "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d",
    "https://images.unsplash.com/photo-1518770660439-4636190af475",
    "https://images.unsplash.com/photo-1461749280684-dccba630e2f6",
];

pub const TITLES: [&str; 10] = [
    "Exploring the Future of {} in 2026",
    "Mastering {} for Modern Apps",
    "The Hidden Secrets of {}",
    "Why {} is Changing Everything",
    "A Deep Dive into {}",
    "How {} Impacted the Web",
    "The Evolution of {}",
    "{} Best Practices for Teams",
    "{} vs. The World",
    "{} for Beginners and Experts",
];

pub const INTROS: [&str; 3] = [
    "In the rapidly evolving landscape of {cat}, staying ahead of the curve is no longer just an advantage—it's a necessity. As we look towards the horizon of 2026, the integration of innovative methodologies is redefining how we approach digital excellence.",
    "The world of {cat} is undergoing a fundamental transformation. From the way teams collaborate to the very tools we use, the boundaries of what's possible are being pushed further every day. In this deep dive, we explore the core drivers of this change.",
    "Understanding the intricacies of {cat} requires more than just a surface-level overview. It demands a rigorous analysis of current trends and a strategic outlook on future developments. Join us as we unpack the complexities of this vital industry pillar.",
];

pub const SECTIONS: [Section; 5] = [
    Section {
        heading: "The Current Landscape",
        body: "The current state of {cat} is marked by unprecedented growth and complexity. Industry leaders are increasingly turning to advanced solutions to manage the growing demands of modern consumers. This shift is characterized by a move towards more modular, scalable, and resilient systems that can adapt to changing market conditions in real-time.",
    },
    Section {
        heading: "Key Challenges and Opportunities",
        body: "Despite the progress, several challenges remain. Integration hurdles, security concerns, and the need for specialized talent continue to be significant roadblocks. However, these challenges also present unique opportunities for innovation. By leveraging emerging technologies and adopting a proactive mindset, organizations can turn these obstacles into competitive advantages.",
    },
    Section {
        heading: "Technical Implementation Strategies",
        body: "When it comes to the technical side of {cat}, a multi-layered approach is often the most effective. This involves not only choosing the right stack but also ensuring that the underlying architecture is robust enough to support long-term growth. Performance optimization, automated testing, and continuous deployment are no longer optional—they are core components of any successful strategy.",
    },
    Section {
        heading: "The Role of Human-Centric Design",
        body: "In our quest for technical efficiency, it's easy to lose sight of the end user. However, {cat} is ultimately about creating value for people. Human-centric design principles should be at the heart of every decision, ensuring that technology serves as an enabler rather than a barrier. This means prioritizing accessibility, inclusivity, and intuitive user experiences at every stage of development.",
    },
    Section {
        heading: "Strategic Outlook for 2026",
        body: "Looking ahead, the future of {cat} is bright. We anticipate a surge in the adoption of AI-driven tools, decentralized architectures, and more sustainable engineering practices. These trends will not only improve the quality of digital products but also create new avenues for creative expression and business growth. The key to success will be agility and a commitment to lifelong learning.",
    },
];

pub const QUOTES: [&str; 5] = [
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "The best way to predict the future is to create it. - Peter Drucker",
    "Design is not just what it looks like and feels like. Design is how it works. - Steve Jobs",
    "Technology is best when it brings people together. - Matt Mullenweg",
    "The only way to do great work is to love what you do. - Steve Jobs",
];

/// Select `pool[n % len]`. Stands in for a random draw so the same index
/// always yields the same element.
///
/// Callers must run [`validate`] first; an empty pool panics on the modulo.
pub fn pick<T: Copy>(pool: &[T], n: u64) -> T {
    pool[(n % pool.len() as u64) as usize]
}

/// Check the compiled-in pools before generating anything.
pub fn validate() -> Result<(), DomainError> {
    non_empty("categories", &CATEGORIES)?;
    non_empty("authors", &AUTHORS)?;
    non_empty("comment_authors", &COMMENT_AUTHORS)?;
    non_empty("comment_templates", &COMMENT_TEMPLATES)?;
    non_empty("images", &IMAGES)?;
    non_empty("titles", &TITLES)?;
    non_empty("intros", &INTROS)?;
    non_empty("sections", &SECTIONS)?;
    non_empty("quotes", &QUOTES)?;

    QUOTES.iter().try_for_each(|quote| validate_quotation(quote))
}

/// A quotation is valid when the delimiter appears exactly once.
pub fn validate_quotation(quote: &str) -> Result<(), DomainError> {
    if quote.matches(QUOTE_DELIMITER).count() == 1 {
        Ok(())
    } else {
        Err(DomainError::MalformedQuotation(quote.to_string()))
    }
}

fn non_empty<T>(pool: &'static str, items: &[T]) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::EmptyPool { pool });
    }
    Ok(())
}
