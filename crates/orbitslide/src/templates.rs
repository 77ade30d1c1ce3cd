//! Ready-made decks picked by topic keywords, used for the sample gallery
//! and for offline generation.

use crate::model::{Layout, Slide};

/// Sample topics offered on the home screen.
pub const SAMPLE_TOPICS: [&str; 50] = [
    "Future of AI",
    "Cybersecurity Basics",
    "Sustainable Energy",
    "Digital Marketing",
    "Space Exploration",
    "Mental Health",
    "Blockchain 101",
    "Renewable Power",
    "Negotiation Skills",
    "Modern Architecture",
    "Color Psychology",
    "Remote Work",
    "Quantum Computing",
    "Climate Change",
    "Social Media Trends",
    "E-commerce Growth",
    "Future of Education",
    "Robotics",
    "The Metaverse",
    "Personal Finance",
    "Leadership Skills",
    "Public Speaking",
    "Nutrition Basics",
    "Internet History",
    "Mobile App Dev",
    "Data Science",
    "Graphic Design",
    "Content Creation",
    "Agile Management",
    "Startup Pitch",
    "Crisis Management",
    "Employee Engagement",
    "Diversity & Inclusion",
    "Gig Economy",
    "Smart Homes",
    "Electric Vehicles",
    "Ocean Conservation",
    "Wildlife Photo",
    "Minimalism",
    "Yoga for Beginners",
    "Meditation",
    "Time Management",
    "Productivity Tools",
    "Cloud Computing",
    "IoT Basics",
    "5G Technology",
    "Augmented Reality",
    "Virtual Reality",
    "Game Design",
    "Machine Learning",
];

/// Quick-pick topics under the search box.
pub const SUGGESTIONS: [&str; 4] = [
    "Future of AI",
    "Sustainable Energy",
    "Space Exploration",
    "Digital Marketing",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Technology,
    Business,
    Wellness,
    Generic,
}

impl TemplateCategory {
    /// Lower-cased substrings that select this category, checked in
    /// declaration order.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Technology => &["ai", "future", "tech", "cyber", "robot"],
            Self::Business => &[
                "startup",
                "pitch",
                "marketing",
                "finance",
                "negotiation",
                "leadership",
            ],
            Self::Wellness => &[
                "health", "energy", "climate", "yoga", "nature", "food", "ocean",
            ],
            Self::Generic => &[],
        }
    }

    /// First category whose keywords occur in `topic`; plain substring
    /// matching, so "sustainable" counts as "ai".
    pub fn for_topic(topic: &str) -> Self {
        let lower = topic.to_lowercase();
        [Self::Technology, Self::Business, Self::Wellness]
            .into_iter()
            .find(|category| category.keywords().iter().any(|k| lower.contains(k)))
            .unwrap_or(Self::Generic)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Business => "business",
            Self::Wellness => "wellness",
            Self::Generic => "generic",
        }
    }
}

/// The template deck for `topic`. Never fails and never returns an empty deck.
pub fn template_for(topic: &str) -> (TemplateCategory, Vec<Slide>) {
    let category = TemplateCategory::for_topic(topic);
    let slides = match category {
        TemplateCategory::Technology => technology(topic),
        TemplateCategory::Business => business(topic),
        TemplateCategory::Wellness => wellness(topic),
        TemplateCategory::Generic => generic(topic),
    };
    (category, slides)
}

fn technology(topic: &str) -> Vec<Slide> {
    vec![
        Slide::new(
            topic,
            Layout::Title,
            &[
                "The State of Innovation",
                "Core Technologies",
                "Global Impact",
                "Future Horizon",
            ],
        )
        .with_subtitle("Navigating the Technological Frontier")
        .with_image_keyword("futuristic technology")
        .with_animation("animate__fadeIn")
        .with_speed("animate__slow"),
        Slide::new(
            "Technological Evolution",
            Layout::SectionHeader,
            &[
                "Phase 1: Foundation & Infrastructure",
                "Phase 2: Connectivity & The Web",
                "Phase 3: Mobile & Cloud Computing",
                "Phase 4: Artificial Intelligence & Automation",
            ],
        )
        .with_image_keyword("technology timeline"),
        Slide::new(
            "Market Growth",
            Layout::BigNumber,
            &[
                "300%",
                "Projected adoption rate by 2030",
                "Across all major industries",
            ],
        )
        .with_image_keyword("growth graph"),
        Slide::new(
            "Core Components",
            Layout::ThreeColumn,
            &[
                "Algorithms: The logic driving decisions",
                "Data: The fuel for machine learning",
                "Compute: The processing power required",
            ],
        )
        .with_image_keyword("chip circuit"),
        Slide::new(
            "Impact Analysis",
            Layout::TwoColumn,
            &[
                "Efficiency: Automating repetitive tasks",
                "Accuracy: Reducing human error",
                "Innovation: Solving complex problems faster",
                "Ethics: Privacy and bias concerns",
            ],
        )
        .with_image_keyword("smart city"),
        Slide::new(
            "The Road Ahead",
            Layout::BulletPoints,
            &[
                "Invest in continuous learning and adaptation.",
                "Prioritize ethical implementation.",
                "Foster collaboration between humans and machines.",
            ],
        )
        .with_subtitle("Strategic Considerations")
        .with_image_keyword("horizon future"),
    ]
}

fn business(topic: &str) -> Vec<Slide> {
    let landscape = format!("We are redefining the landscape of {topic}");
    vec![
        Slide::new(
            topic,
            Layout::Title,
            &[
                "Market Opportunity",
                "Our Solution",
                "Business Model",
                "Growth Strategy",
            ],
        )
        .with_subtitle("Strategic Blueprint for Success")
        .with_image_keyword("corporate meeting")
        .with_animation("animate__zoomIn"),
        Slide::new(
            "The Problem",
            Layout::BulletPoints,
            &[
                "Current solutions are inefficient and outdated.",
                "Users are frustrated with high costs.",
                "Lack of integration causes data silos.",
            ],
        )
        .with_image_keyword("frustrated office worker"),
        Slide::new(
            "Our Solution",
            Layout::ThreeColumn,
            &[
                "Seamless Integration: Connects with existing tools",
                "Cost Effective: 50% cheaper than competitors",
                "User Friendly: Zero learning curve designed",
            ],
        )
        .with_image_keyword("puzzle solution"),
        Slide::new(
            "Traction",
            Layout::BigNumber,
            &["10k+", "Active Users in Month 1", "Growing at 20% MoM"],
        )
        .with_image_keyword("rocket launch"),
        Slide::new(
            "Competitive Advantage",
            Layout::Comparison,
            &[
                "Competitors: Expensive, Slow, Complex",
                "Us: Affordable, Fast, Intuitive",
                "Moat: Proprietary algorithms and data",
            ],
        )
        .with_image_keyword("chess game"),
        Slide::new(
            "Join Our Journey",
            Layout::Quote,
            &[
                landscape.as_str(),
                "Partnership opportunities are open.",
                "Contact us to learn more.",
            ],
        )
        .with_image_keyword("handshake"),
    ]
}

fn wellness(topic: &str) -> Vec<Slide> {
    vec![
        Slide::new(
            topic,
            Layout::Title,
            &["Introduction", "The Science", "Benefits", "Daily Practices"],
        )
        .with_subtitle("Harmony, Health, and Sustainability")
        .with_image_keyword("nature landscape")
        .with_animation("animate__fadeIn"),
        Slide::new(
            "Core Principles",
            Layout::ThreeColumn,
            &[
                "Balance: Finding equilibrium in systems",
                "Sustainability: Resources for the future",
                "Wellness: Holistic approach to health",
            ],
        )
        .with_image_keyword("zen stones"),
        Slide::new(
            "Global Impact",
            Layout::BigNumber,
            &[
                "#1",
                "Priority for the next decade",
                "Essential for planetary survival",
            ],
        )
        .with_image_keyword("earth from space"),
        Slide::new(
            "Before vs After",
            Layout::Comparison,
            &[
                "Before: Stress, Waste, Depletion",
                "After: Vitality, Regeneration, Abundance",
                "Transition: Conscious choices every day",
            ],
        )
        .with_image_keyword("forest growth"),
        Slide::new(
            "Visual Journey",
            Layout::Gallery,
            &["Restoration", "Growth", "Vitality"],
        )
        .with_image_keyword("waterfall"),
        Slide::new(
            "Conclusion",
            Layout::SectionHeader,
            &[
                "Small changes lead to massive impact.",
                "The time to act is now.",
                "Join the movement for a better world.",
            ],
        )
        .with_image_keyword("sunrise"),
    ]
}

fn generic(topic: &str) -> Vec<Slide> {
    let welcome = format!("Welcome to our deep dive into {topic}.");
    let pillars = format!("Fundamental Pillars of {topic}");
    let quote = format!("\"The only way to predict the future of {topic} is to create it.\"");
    let summary = format!("In conclusion, {topic} presents significant opportunities.");
    vec![
        Slide::new(
            topic,
            Layout::Title,
            &["Introduction", "Key Concepts", "Analysis", "Conclusion"],
        )
        .with_subtitle("A Comprehensive Overview")
        .with_image_keyword("abstract geometric background")
        .with_animation("animate__fadeIn"),
        Slide::new(
            "Introduction",
            Layout::TwoColumn,
            &[
                welcome.as_str(),
                "We will explore the fundamental aspects, current trends, and future outlook.",
                "Understanding this topic is crucial for modern context.",
            ],
        )
        .with_image_keyword("office presentation"),
        Slide::new(
            "Key Pillars",
            Layout::BigNumber,
            &["3", pillars.as_str(), "Essential for success"],
        )
        .with_image_keyword("pillars architecture"),
        Slide::new(
            "Critical Analysis",
            Layout::ThreeColumn,
            &[
                "Strengths: Innovation, Scalability, Efficiency",
                "Weaknesses: Implementation costs, Complexity",
                "Opportunities: Market expansion, New demographics",
            ],
        )
        .with_image_keyword("analytics chart"),
        Slide::new(
            "Perspective",
            Layout::Quote,
            &[quote.as_str(), "\u{2014} Industry Leader"],
        )
        .with_image_keyword("inspirational mountain"),
        Slide::new(
            "Summary",
            Layout::SectionHeader,
            &[
                summary.as_str(),
                "Strategic implementation is key.",
                "Questions & Answers",
            ],
        )
        .with_image_keyword("conclusion success"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_selection() {
        assert_eq!(TemplateCategory::for_topic("AI safety"), TemplateCategory::Technology);
        assert_eq!(TemplateCategory::for_topic("Yoga basics"), TemplateCategory::Wellness);
        assert_eq!(TemplateCategory::for_topic("Startup Pitch"), TemplateCategory::Business);
        assert_eq!(TemplateCategory::for_topic("Medieval poetry"), TemplateCategory::Generic);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "sustainable" contains "ai", so technology wins over energy.
        assert_eq!(
            TemplateCategory::for_topic("Sustainable Energy"),
            TemplateCategory::Technology
        );
        assert_eq!(TemplateCategory::for_topic("Climate Change"), TemplateCategory::Wellness);
    }

    #[test]
    fn test_first_slide_carries_topic() {
        let (_, slides) = template_for("Yoga basics");
        assert_eq!(slides[0].title, "Yoga basics");
        assert_eq!(slides[0].layout, Layout::Title);
    }

    #[test]
    fn test_topic_is_interpolated() {
        let (category, slides) = template_for("Medieval poetry");
        assert_eq!(category, TemplateCategory::Generic);
        assert_eq!(
            slides[1].content[0],
            "Welcome to our deep dive into Medieval poetry."
        );
    }

    #[test]
    fn test_every_sample_topic_has_a_deck() {
        for topic in SAMPLE_TOPICS.iter().chain(SUGGESTIONS.iter()).chain([&""]) {
            let (_, slides) = template_for(topic);
            assert_eq!(slides.len(), 6, "{topic}");
            assert!(slides.iter().all(|s| !s.content.is_empty()));
        }
    }
}
