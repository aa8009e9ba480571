//! Cover letter composer. Assembles a three-paragraph letter from the job
//! title, company, and any known technologies found in the candidate's
//! resume text.

use serde::{Deserialize, Serialize};

/// Form input for cover letter composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company: Option<String>,
    pub job_description: Option<String>,
    pub resume_text: Option<String>,
}

/// Technology keywords scanned for in the resume, in priority order. The
/// first few hits are woven into the body paragraph.
const TECH_KEYWORDS: &[&str] = &[
    "react", "python", "javascript", "typescript", "node", "sql", "aws", "docker", "git", "html",
    "css", "java", "c++", "php", "ruby", "go", "rust", "swift", "kotlin", "angular", "vue",
    "django", "flask", "express", "mongodb", "postgresql", "mysql", "redis", "kubernetes",
    "jenkins", "agile", "scrum",
];

/// How many matched technologies are named in the letter.
const MAX_HIGHLIGHTED_SKILLS: usize = 3;

/// Job description words that select the collaboration-flavored sentence.
const COLLABORATION_SIGNALS: &[&str] = &["team", "collaborate", "lead"];

/// Job description words that select the builder-flavored sentence.
const BUILDER_SIGNALS: &[&str] = &["innovate", "create", "build"];

/// Fallback company display when none is supplied.
const DEFAULT_COMPANY: &str = "the company";

/// Extracts up to `limit` known technologies from the resume text, in
/// keyword-list order rather than input order.
fn extract_skills(resume_text: &str, limit: usize) -> Vec<&'static str> {
    let lowered = resume_text.to_lowercase();
    TECH_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .take(limit)
        .collect()
}

/// Composes the letter: intro + body + closing, deterministic templating
/// with no separators beyond what each paragraph embeds.
pub fn compose_cover_letter(req: &CoverLetterRequest) -> String {
    let company = req
        .company
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COMPANY);
    let job_description = req.job_description.as_deref().filter(|d| !d.is_empty());

    let mut intro = String::from("Dear Hiring Manager,\n\n");
    intro.push_str(&format!(
        "I am writing to express my strong interest in the {} position at {company}. ",
        req.job_title
    ));
    if job_description.is_some() {
        intro.push_str(
            "After reviewing the job description, I am excited about the opportunity to \
             contribute to your team and believe my background aligns well with your \
             requirements.\n\n",
        );
    } else {
        intro.push_str(
            "I am excited about the opportunity to contribute to your team and believe my \
             background would be a great fit for this role.\n\n",
        );
    }

    let mut body = String::from("Throughout my career, I have demonstrated a strong ability to ");
    let skills = req
        .resume_text
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| extract_skills(t, MAX_HIGHLIGHTED_SKILLS))
        .unwrap_or_default();
    if !skills.is_empty() {
        body.push_str(&format!(
            "work with technologies such as {} and ",
            skills.join(", ")
        ));
    }
    body.push_str("deliver high-quality solutions that meet business objectives. ");

    match job_description {
        Some(jd) => {
            body.push_str(
                "I am particularly drawn to this role because it offers the opportunity to ",
            );
            let jd_lower = jd.to_lowercase();
            if COLLABORATION_SIGNALS.iter().any(|w| jd_lower.contains(w)) {
                body.push_str(
                    "work collaboratively with a talented team and potentially take on \
                     leadership responsibilities. ",
                );
            } else if BUILDER_SIGNALS.iter().any(|w| jd_lower.contains(w)) {
                body.push_str("innovate and build impactful solutions that drive business growth. ");
            } else {
                body.push_str("apply my technical skills while contributing to meaningful projects. ");
            }
        }
        None => body.push_str(
            "I am confident that my technical skills and professional experience would enable \
             me to make immediate contributions to your organization. ",
        ),
    }

    let closing = format!(
        "\nI am excited about the possibility of joining {company} and would welcome the \
         opportunity to discuss how my background, skills, and enthusiasm would make me a \
         valuable addition to your team. I am available for an interview at your convenience \
         and look forward to hearing from you.\n\nThank you for considering my \
         application.\n\nSincerely,\n[Your Name]"
    );

    format!("{intro}{body}{closing}")
}
