//! ATS scoring. Additive 0-100 heuristic over five independently-capped
//! subscores: section completeness, action verbs, quantified achievements,
//! job-description keyword overlap, and length/formatting. The total maps to
//! a letter grade and an assessment string.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Request / report types
// ────────────────────────────────────────────────────────────────────────────

/// Scoring input. `job_title` is accepted for API compatibility but does not
/// influence the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
}

/// Full scoring report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub max_score: u32,
    pub grade: String,
    pub assessment: String,
    /// One entry per subscore actually computed, in evaluation order.
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub bullet_points: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Constant lookup tables
// ────────────────────────────────────────────────────────────────────────────

/// Resume sections detected by keyword presence, 5 points each.
const SECTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("contact", &["email", "phone", "@", "+1", "linkedin"]),
    ("experience", &["experience", "work history", "employment"]),
    ("education", &["education", "degree", "university", "college"]),
    ("skills", &["skills", "technologies", "programming", "languages"]),
];

/// Action verbs worth 2 points each, capped at 15.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "created",
    "designed",
    "managed",
    "led",
    "increased",
    "improved",
    "reduced",
    "achieved",
    "delivered",
    "built",
    "maintained",
    "coordinated",
    "supervised",
    "trained",
    "analyzed",
];

/// Tokens that indicate a quantified achievement, besides bare digits.
const QUANTIFIER_TOKENS: &[&str] = &["%", "percent", "million", "thousand", "hundred", "dozen"];

/// Keywords cross-referenced between a job description and the resume.
const JOB_KEYWORDS: &[&str] = &[
    "react",
    "python",
    "javascript",
    "java",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "agile",
    "scrum",
    "git",
    "api",
    "rest",
    "html",
    "css",
    "node",
    "typescript",
    "angular",
    "vue",
    "django",
    "flask",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "jenkins",
    "ci/cd",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "testing",
    "devops",
    "cloud",
    "microservices",
    "leadership",
    "management",
];

/// Line prefixes counted as bullet points.
const BULLET_PREFIXES: &[char] = &['-', '•', '*', '→'];

/// A resume reading well at one to two pages, in whitespace-split words.
const WORD_COUNT_RANGE: std::ops::RangeInclusive<usize> = 300..=800;

const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Computes the full ATS report. Pure and deterministic; the five subscores
/// are individually capped so the sum never exceeds 100.
pub fn score_resume(req: &ScoreRequest) -> ScoreReport {
    let text = req.resume_text.to_lowercase();
    let mut score = 0;
    let mut feedback = Vec::new();
    let mut suggestions = Vec::new();

    // 1. Section completeness (max 20).
    let mut section_score = 0;
    for (section, keywords) in SECTION_KEYWORDS {
        if keywords.iter().any(|kw| text.contains(kw)) {
            section_score += 5;
        } else {
            suggestions.push(format!("Add a {section} section"));
        }
    }
    score += section_score;
    feedback.push(format!("Section completeness: {section_score}/20 points"));

    // 2. Action verbs (max 15).
    let verb_count = ACTION_VERBS.iter().filter(|v| text.contains(*v)).count();
    let verb_score = (verb_count as u32 * 2).min(15);
    score += verb_score;
    feedback.push(format!(
        "Action verbs: {verb_score}/15 points ({verb_count} found)"
    ));
    if verb_count < 5 {
        suggestions.push("Use more action verbs to describe your achievements".to_string());
    }

    // 3. Quantifiable achievements (max 20, all-or-nothing).
    let quantified = QUANTIFIER_TOKENS.iter().any(|t| text.contains(t))
        || text.chars().any(|c| c.is_ascii_digit());
    if quantified {
        score += 20;
        feedback.push("Quantifiable achievements: 20/20 points".to_string());
    } else {
        feedback.push("Quantifiable achievements: 0/20 points".to_string());
        suggestions.push("Add specific numbers and percentages to your achievements".to_string());
    }

    // 4. Keyword overlap with the job description (max 25). Skipped
    // entirely, feedback included, when no job description is supplied.
    if let Some(jd) = req.job_description.as_deref().filter(|d| !d.is_empty()) {
        let jd_lower = jd.to_lowercase();
        let jd_keywords: Vec<&str> = JOB_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| jd_lower.contains(kw))
            .collect();
        let matched = jd_keywords.iter().filter(|kw| text.contains(*kw)).count();
        let keyword_score = (matched as u32 * 2).min(25);
        score += keyword_score;
        feedback.push(format!(
            "Keyword matching: {keyword_score}/25 points ({matched} matches)"
        ));
        if matched < 5 {
            let missing = jd_keywords
                .iter()
                .copied()
                .filter(|kw| !text.contains(kw))
                .take(10)
                .collect::<Vec<_>>()
                .join(", ");
            suggestions.push(format!(
                "Include more keywords from the job description: {missing}"
            ));
        }
    }

    // 5. Length and formatting (max 20).
    let word_count = text.split_whitespace().count();
    if WORD_COUNT_RANGE.contains(&word_count) {
        score += 10;
        feedback.push("Resume length: 10/10 points".to_string());
    } else if word_count < *WORD_COUNT_RANGE.start() {
        score += 5;
        feedback.push("Resume length: 5/10 points (too short)".to_string());
        suggestions.push("Add more details to your experience and achievements".to_string());
    } else {
        score += 5;
        feedback.push("Resume length: 5/10 points (too long)".to_string());
        suggestions.push("Condense your resume to 1-2 pages".to_string());
    }

    let bullet_points = req
        .resume_text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            BULLET_PREFIXES.iter().any(|p| trimmed.starts_with(*p))
        })
        .count();
    if bullet_points >= 5 {
        score += 10;
        feedback.push("Bullet points: 10/10 points".to_string());
    } else {
        score += 5;
        feedback.push("Bullet points: 5/10 points".to_string());
        suggestions.push("Use more bullet points to highlight achievements".to_string());
    }

    let (grade, assessment) = grade_for(score);

    ScoreReport {
        score,
        max_score: MAX_SCORE,
        grade: grade.to_string(),
        assessment: assessment.to_string(),
        feedback,
        suggestions,
        word_count,
        bullet_points,
    }
}

/// Maps a total score to its letter grade and assessment string.
fn grade_for(score: u32) -> (&'static str, &'static str) {
    if score >= 80 {
        ("A", "Excellent! Your resume is well-optimized for ATS systems.")
    } else if score >= 70 {
        (
            "B",
            "Good! Your resume has solid ATS compatibility with room for improvement.",
        )
    } else if score >= 60 {
        (
            "C",
            "Fair. Your resume needs some improvements to pass ATS screening.",
        )
    } else {
        ("D", "Needs significant improvement to pass ATS screening.")
    }
}
