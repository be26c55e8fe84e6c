use std::fmt;

/// The subject a user message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    About,
    Skills,
    Education,
    Experience,
    Certifications,
    Contact,
    Languages,
    Projects,
    Unknown,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::About => "about",
            Topic::Skills => "skills",
            Topic::Education => "education",
            Topic::Experience => "experience",
            Topic::Certifications => "certifications",
            Topic::Contact => "contact",
            Topic::Languages => "languages",
            Topic::Projects => "projects",
            Topic::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword sets in priority order. The first set with any keyword contained in
/// the lowercased input wins, so "work" always resolves to Experience.
const KEYWORD_RULES: &[(Topic, &[&str])] = &[
    (Topic::Greeting, &["hello", "hi", "hey"]),
    (Topic::About, &["about", "who is", "tell me about"]),
    (Topic::Skills, &["skill", "programming", "technology"]),
    (Topic::Education, &["education", "university", "degree"]),
    (Topic::Experience, &["experience", "work", "job"]),
    (
        Topic::Certifications,
        &["certification", "course", "certificate"],
    ),
    (Topic::Contact, &["contact", "email", "phone", "reach"]),
    (Topic::Languages, &["language", "speak"]),
    (Topic::Projects, &["project", "work", "portfolio"]),
];

/// Classifies free text by case-insensitive substring match. Never fails;
/// anything unmatched, including empty input, is `Topic::Unknown`.
pub fn classify(text: &str) -> Topic {
    let lower_text = text.to_lowercase();
    let topic = KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower_text.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Unknown);
    log::debug!("Classified {:?} as {}", text, topic);
    topic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_keywords() {
        for input in ["Hello there", "HI", "hey!"] {
            assert_eq!(classify(input), Topic::Greeting, "{input}");
        }
    }

    #[test]
    fn greeting_outranks_skills() {
        assert_eq!(classify("hello, what skills do you have"), Topic::Greeting);
    }

    #[test]
    fn each_topic_reachable() {
        let cases = [
            ("Who is Maan?", Topic::About),
            ("What are your skills?", Topic::Skills),
            ("Where did you get your degree", Topic::Education),
            ("Any job experience?", Topic::Experience),
            ("List the courses", Topic::Certifications),
            ("Can I get your email", Topic::Contact),
            ("What languages do you speak", Topic::Languages),
            ("Show me a project", Topic::Projects),
        ];
        for (input, expected) in cases {
            assert_eq!(classify(input), expected, "{input}");
        }
    }

    #[test]
    fn work_resolves_to_experience() {
        assert_eq!(classify("portfolio work"), Topic::Experience);
        assert_eq!(classify("portfolio"), Topic::Projects);
    }

    #[test]
    fn substring_matching_is_literal() {
        // "this" contains "hi"
        assert_eq!(classify("this degree"), Topic::Greeting);
    }

    #[test]
    fn unmatched_and_blank_inputs_are_unknown() {
        assert_eq!(classify("xyz123"), Topic::Unknown);
        assert_eq!(classify(""), Topic::Unknown);
        assert_eq!(classify("   \t"), Topic::Unknown);
    }
}
