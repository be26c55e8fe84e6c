use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The built-in profile the assistant answers from when no profile file is configured.
pub static DEFAULT_PROFILE: Lazy<ProfileRecord> = Lazy::new(ProfileRecord::builtin);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Skills grouped by category. Field order is the order the assistant lists them in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    pub programming: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub technologies: Vec<String>,
}

impl SkillSet {
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Programming", self.programming.as_slice()),
            ("Frameworks", self.frameworks.as_slice()),
            ("Tools", self.tools.as_slice()),
            ("Technologies", self.technologies.as_slice()),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub period: String,
    pub coursework: Vec<String>,
}

/// Immutable biographical record. Construct through [`ProfileRecord::load_from_file`]
/// or [`ProfileRecord::from_json`], both of which validate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    name: String,
    title: String,
    institution: String,
    graduation: String,
    email: String,
    phone: String,
    location: String,
    social: Vec<SocialLink>,
    interests: Vec<String>,
    education: Education,
    skills: SkillSet,
    experience: Vec<Experience>,
    certifications: Vec<String>,
    languages: Vec<String>,
}

impl ProfileRecord {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let profile_json = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read profile at {:?}", path_ref))?;
        Self::from_json(&profile_json)
            .with_context(|| format!("Invalid profile in {:?}", path_ref))
    }

    pub fn from_json(profile_json: &str) -> Result<Self> {
        let profile: ProfileRecord = serde_json::from_str(profile_json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let profile_json = serde_json::to_string_pretty(&self)?;
        std::fs::write(path.as_ref(), profile_json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "profile name is empty");
        ensure!(!self.social.is_empty(), "profile has no social links");
        ensure!(!self.interests.is_empty(), "profile has no interests");
        ensure!(
            !self.education.coursework.is_empty(),
            "profile has no coursework"
        );
        for (category, skills) in self.skills.categories() {
            ensure!(!skills.is_empty(), "skill category {} is empty", category);
        }
        ensure!(!self.experience.is_empty(), "profile has no experience");
        ensure!(
            !self.certifications.is_empty(),
            "profile has no certifications"
        );
        ensure!(!self.languages.is_empty(), "profile has no languages");
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First word of the name, used where the assistant refers to the subject.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn graduation(&self) -> &str {
        &self.graduation
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    /// The link labelled GitHub, or the first social link.
    pub fn github(&self) -> Option<&SocialLink> {
        self.social
            .iter()
            .find(|link| link.label.eq_ignore_ascii_case("github"))
            .or_else(|| self.social.first())
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    pub fn education(&self) -> &Education {
        &self.education
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The greeting printed to the console when the host starts.
    pub fn welcome_banner(&self) -> String {
        let mut lines = vec![
            format!("Welcome to {}'s Portfolio!", self.name),
            format!("Contact: {}", self.email),
            format!("Phone: {}", self.phone),
        ];
        lines.extend(
            self.social
                .iter()
                .map(|link| format!("{}: {}", link.label, link.url)),
        );
        lines.join("\n")
    }

    fn builtin() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        ProfileRecord {
            name: "Maan Albazei".into(),
            title: "Senior Computer Science Student".into(),
            institution: "Prince Sultan University".into(),
            graduation: "July 2026".into(),
            email: "MaanAlbazei@gmail.com".into(),
            phone: "+966 55 522 3910".into(),
            location: "Riyadh, Saudi Arabia".into(),
            social: vec![
                SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/MaanAlbazei".into(),
                },
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "https://www.linkedin.com/in/maanalbazei".into(),
                },
                SocialLink {
                    label: "WhatsApp".into(),
                    url: "https://wa.me/966555223910".into(),
                },
            ],
            interests: strings(&["AI", "Machine Learning", "Cloud Computing"]),
            education: Education {
                degree: "Bachelor of Science in Computer Science".into(),
                period: "January 2020 - July 2026".into(),
                coursework: strings(&[
                    "Data Structures & Algorithms",
                    "Database Systems",
                    "Software Engineering",
                    "Machine Learning",
                    "Computer Networks",
                    "Security Governance",
                    "Project Management",
                ]),
            },
            skills: SkillSet {
                programming: strings(&["Python", "Java", "JavaScript", "SQL"]),
                frameworks: strings(&["Hadoop", "TensorFlow", "PyTorch", "Scikit-learn"]),
                tools: strings(&["Jira", "Linux", "UML Diagrams", "Project Management"]),
                technologies: strings(&[
                    "AI & Machine Learning",
                    "Cloud Computing",
                    "Security Governance",
                    "Digital Transformation",
                ]),
            },
            experience: vec![Experience {
                title: "Trainee | Operation Supervisor".into(),
                organization: "Sela, Boulevard Operations".into(),
                period: "October 2022 - February 2023".into(),
                description: "Operated fountain system achieving synchronized shows with technical teams. Supervised site operations and ensured smooth coordination across multiple service providers.".into(),
            }],
            certifications: strings(&[
                "Foundations of AI and Machine Learning (Microsoft)",
                "JavaScript 103 Advanced (Tuwaiq Academy)",
                "Fundamentals of Project Management (Coursera)",
                "Parallel Programming in Java (Coursera)",
                "Security Governance & Compliance (Coursera)",
                "Ethics, Technology and Engineering (Coursera)",
                "Introducing Security: Aligning Asset and Risk Management (Coursera)",
                "EC English Certificate (Los Angeles, USA)",
            ]),
            languages: strings(&["Arabic (Native)", "English (Fluent)"]),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a variant of the default profile for tests that need specific list lengths.
    pub(crate) fn profile_with(
        certifications: &[&str],
        languages: &[&str],
    ) -> ProfileRecord {
        let mut profile = DEFAULT_PROFILE.clone();
        profile.certifications = certifications.iter().map(|s| s.to_string()).collect();
        profile.languages = languages.iter().map(|s| s.to_string()).collect();
        profile
    }

    #[test]
    fn builtin_profile_is_valid() {
        DEFAULT_PROFILE.validate().unwrap();
        assert_eq!(DEFAULT_PROFILE.first_name(), "Maan");
        assert_eq!(DEFAULT_PROFILE.certifications().len(), 8);
    }

    #[test]
    fn github_prefers_labelled_link() {
        let mut profile = DEFAULT_PROFILE.clone();
        assert_eq!(
            profile.github().unwrap().url,
            "https://github.com/MaanAlbazei"
        );
        profile.social.retain(|link| link.label != "GitHub");
        assert_eq!(profile.github().unwrap().label, "LinkedIn");
    }

    #[test]
    fn empty_sequences_are_rejected() {
        let profile = profile_with(&[], &["English"]);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("certifications"));

        let mut profile = DEFAULT_PROFILE.clone();
        profile.skills.tools.clear();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("Tools"));
    }

    #[test]
    fn file_round_trip_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        DEFAULT_PROFILE.save_to_file(&path).unwrap();
        let loaded = ProfileRecord::load_from_file(&path).unwrap();
        assert_eq!(&loaded, &*DEFAULT_PROFILE);
    }

    #[test]
    fn missing_field_fails_to_load() {
        let mut value = serde_json::to_value(&*DEFAULT_PROFILE).unwrap();
        value.as_object_mut().unwrap().remove("email");
        assert!(ProfileRecord::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn welcome_banner_lists_contacts() {
        let banner = DEFAULT_PROFILE.welcome_banner();
        assert!(banner.starts_with("Welcome to Maan Albazei's Portfolio!"));
        assert!(banner.contains("Contact: MaanAlbazei@gmail.com"));
        assert!(banner.contains("Phone: +966 55 522 3910"));
        assert!(banner.contains("LinkedIn: https://www.linkedin.com/in/maanalbazei"));
    }
}
