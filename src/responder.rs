use crate::intent::Topic;
use crate::profile::ProfileRecord;

const BULLET: &str = "• ";

/// How many certifications are listed before the remainder is summarised.
const LISTED_CERTIFICATIONS: usize = 4;

/// How many languages the assistant mentions.
const LISTED_LANGUAGES: usize = 2;

fn bullets<I, S>(header: String, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = vec![header];
    lines.extend(
        items
            .into_iter()
            .map(|item| format!("{BULLET}{}", item.as_ref())),
    );
    lines.join("\n")
}

/// Renders the answer for `topic`. Output depends only on the arguments.
pub fn respond(topic: Topic, profile: &ProfileRecord) -> String {
    let who = profile.first_name();
    match topic {
        Topic::Greeting => format!(
            "Hello! I'm {who}'s AI assistant. I can tell you about {who}'s skills, experience, education, and projects. What would you like to know?"
        ),
        Topic::About => format!(
            "{} is a {} at {}, expected to graduate in {}. {who} is passionate about {}. {who} has completed {} professional courses and has experience in both technical and operational roles.",
            profile.name(),
            profile.title(),
            profile.institution(),
            profile.graduation(),
            join_natural(profile.interests()),
            profile.certifications().len(),
        ),
        Topic::Skills => bullets(
            format!("{who}'s technical skills include:"),
            profile
                .skills()
                .categories()
                .into_iter()
                .map(|(label, skills)| format!("{label}: {}", skills.join(", "))),
        ),
        Topic::Education => {
            let education = profile.education();
            format!(
                "{who} is pursuing a {} at {} ({}). The coursework includes {}.",
                education.degree,
                profile.institution(),
                education.period,
                join_natural(&education.coursework),
            )
        }
        Topic::Experience => match profile.experience().first() {
            Some(role) => bullets(
                format!("{who}'s work experience includes:"),
                [
                    format!("{} at {} ({})", role.title, role.organization, role.period),
                    role.description.clone(),
                ],
            ),
            None => fallback(who),
        },
        Topic::Certifications => {
            let certifications = profile.certifications();
            let mut text = bullets(
                format!("{who} has completed these professional certifications:"),
                certifications.iter().take(LISTED_CERTIFICATIONS),
            );
            let remaining = certifications.len().saturating_sub(LISTED_CERTIFICATIONS);
            if remaining > 0 {
                text.push('\n');
                text.push_str(&format!("{BULLET}And {remaining} more courses!"));
            }
            text
        }
        Topic::Contact => {
            let mut channels = vec![
                format!("Email: {}", profile.email()),
                format!("Phone: {}", profile.phone()),
                format!("Location: {}", profile.location()),
            ];
            channels.extend(
                profile
                    .social()
                    .iter()
                    .map(|link| format!("{}: {}", link.label, link.url)),
            );
            bullets(format!("You can contact {who} through:"), channels)
        }
        Topic::Languages => bullets(
            format!("{who} speaks:"),
            profile.languages().iter().take(LISTED_LANGUAGES),
        ),
        Topic::Projects => {
            let link = profile
                .github()
                .map(|link| {
                    format!(
                        " You can check out the {} profile for more details: {}",
                        link.label, link.url
                    )
                })
                .unwrap_or_default();
            format!(
                "{who} is currently working on various projects alongside the {}. The focus areas include AI/ML applications, cloud computing solutions, and software development projects.{link}",
                profile.education().degree,
            )
        }
        Topic::Unknown => fallback(who),
    }
}

fn fallback(who: &str) -> String {
    format!(
        "I'm not sure I understand that question. I can help you learn about {who}'s skills, education, experience, certifications, or contact information. What would you like to know?"
    )
}

/// "a", "a and b", "a, b, and c".
fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::profile_with;
    use crate::profile::DEFAULT_PROFILE;

    #[test]
    fn unknown_is_fixed_fallback() {
        let text = respond(Topic::Unknown, &DEFAULT_PROFILE);
        assert!(text.starts_with("I'm not sure I understand that question."));
        assert!(text.contains("Maan's skills, education, experience, certifications, or contact"));
    }

    #[test]
    fn responses_are_deterministic() {
        for topic in [Topic::About, Topic::Skills, Topic::Certifications, Topic::Projects] {
            assert_eq!(
                respond(topic, &DEFAULT_PROFILE),
                respond(topic, &DEFAULT_PROFILE)
            );
        }
    }

    #[test]
    fn skills_lists_categories_in_order() {
        let text = respond(Topic::Skills, &DEFAULT_PROFILE);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "• Programming: Python, Java, JavaScript, SQL");
        assert!(lines[2].starts_with("• Frameworks: Hadoop"));
        assert!(lines[3].starts_with("• Tools: Jira"));
        assert!(lines[4].starts_with("• Technologies: AI & Machine Learning"));
    }

    #[test]
    fn certifications_summarise_remainder() {
        let text = respond(Topic::Certifications, &DEFAULT_PROFILE);
        assert_eq!(text.lines().count(), 6);
        assert!(text.ends_with("• And 4 more courses!"));
        assert!(!text.contains("Ethics, Technology"));
    }

    #[test]
    fn certifications_without_remainder_omit_summary() {
        let profile = profile_with(&["A", "B", "C", "D"], &["English"]);
        let text = respond(Topic::Certifications, &profile);
        assert!(!text.contains("more courses"));
        assert!(text.ends_with("• D"));

        let profile = profile_with(&["A"], &["English"]);
        let text = respond(Topic::Certifications, &profile);
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn languages_capped_at_two() {
        let two = profile_with(&["A"], &["Arabic", "English"]);
        assert_eq!(
            respond(Topic::Languages, &two),
            "Maan speaks:\n• Arabic\n• English"
        );

        let three = profile_with(&["A"], &["Arabic", "English", "French"]);
        let text = respond(Topic::Languages, &three);
        assert!(!text.contains("French"));

        let one = profile_with(&["A"], &["Arabic"]);
        assert_eq!(respond(Topic::Languages, &one), "Maan speaks:\n• Arabic");
    }

    #[test]
    fn experience_uses_first_entry() {
        let text = respond(Topic::Experience, &DEFAULT_PROFILE);
        assert!(text.contains(
            "Trainee | Operation Supervisor at Sela, Boulevard Operations (October 2022 - February 2023)"
        ));
        assert!(text.contains("Operated fountain system"));
    }

    #[test]
    fn contact_lists_every_channel() {
        let text = respond(Topic::Contact, &DEFAULT_PROFILE);
        for needle in [
            "Email: MaanAlbazei@gmail.com",
            "Phone: +966 55 522 3910",
            "Location: Riyadh, Saudi Arabia",
            "GitHub: https://github.com/MaanAlbazei",
            "LinkedIn: https://www.linkedin.com/in/maanalbazei",
            "WhatsApp: https://wa.me/966555223910",
        ] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn about_and_education_name_the_institution() {
        let about = respond(Topic::About, &DEFAULT_PROFILE);
        assert!(about.starts_with(
            "Maan Albazei is a Senior Computer Science Student at Prince Sultan University, expected to graduate in July 2026."
        ));
        assert!(about.contains("AI, Machine Learning, and Cloud Computing"));

        let education = respond(Topic::Education, &DEFAULT_PROFILE);
        assert!(education.contains("(January 2020 - July 2026)"));
        assert!(education.contains("Computer Networks, Security Governance, and Project Management."));
    }

    #[test]
    fn projects_point_to_github() {
        let text = respond(Topic::Projects, &DEFAULT_PROFILE);
        assert!(text.ends_with("https://github.com/MaanAlbazei"));
    }
}
