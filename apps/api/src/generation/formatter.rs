//! Resume text formatter. Renders structured form input into a plain-text
//! document with a fixed section order: header, Summary, Experience,
//! Education, Skills. Empty sections are dropped, never rendered as bare
//! headings.

use serde::{Deserialize, Serialize};

/// A single position held. Date strings are free-form and rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    /// "YYYY-MM" or a bare year.
    pub start: String,
    /// Absent or blank means the position is current ("Present").
    pub end: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub start: String,
    pub end: Option<String>,
    pub degree: Option<String>,
}

/// Structured form input for resume generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRequest {
    pub full_name: String,
    pub target_title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Comma or space separated URLs, rendered as-is.
    pub links: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    /// Comma-separated skill list.
    pub skills: Option<String>,
}

/// Fallback body when every section comes out empty.
pub const EMPTY_RESUME: &str = "No data provided.";

/// Underlines a section heading with dashes matching its length.
fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(title.len()))
}

/// One "- " bullet line per non-blank achievement.
fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the request into a plain-text resume. Deterministic: the same
/// input always yields byte-identical output.
pub fn format_resume(req: &ResumeRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    // Header: name and target title, then a pipe-joined contact line over
    // the non-empty contact fields in fixed order.
    let mut header: Vec<String> = Vec::new();
    for field in [&req.full_name, &req.target_title] {
        if !field.is_empty() {
            header.push(field.clone());
        }
    }
    let contact = [&req.email, &req.phone, &req.location, &req.links]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    if !contact.is_empty() {
        header.push(contact);
    }
    parts.push(header.join("\n"));

    if let Some(summary) = req.summary.as_deref() {
        let summary = summary.trim();
        if !summary.is_empty() {
            parts.push(format!("{}\n{summary}", heading("Summary")));
        }
    }

    if !req.experiences.is_empty() {
        let mut sec = vec![heading("Experience")];
        for exp in &req.experiences {
            let end = exp.end.as_deref().filter(|e| !e.is_empty()).unwrap_or("Present");
            sec.push(format!("{} — {} ({} – {end})", exp.role, exp.company, exp.start));
            let lines = bullets(&exp.achievements);
            if !lines.is_empty() {
                sec.push(lines);
            }
        }
        parts.push(sec.join("\n"));
    }

    if !req.education.is_empty() {
        let mut sec = vec![heading("Education")];
        for ed in &req.education {
            let degree = ed
                .degree
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| format!(", {d}"))
                .unwrap_or_default();
            let end = ed.end.as_deref().unwrap_or("");
            let line = format!("{}{degree} ({} – {end})", ed.school, ed.start);
            sec.push(line.trim().to_string());
        }
        parts.push(sec.join("\n"));
    }

    if let Some(skills) = req.skills.as_deref() {
        if !skills.trim().is_empty() {
            let cleaned = skills
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{}\n{cleaned}", heading("Skills")));
        }
    }

    let body = parts
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    if body.is_empty() {
        EMPTY_RESUME.to_string()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_request() -> ResumeRequest {
        ResumeRequest {
            full_name: String::new(),
            target_title: String::new(),
            email: None,
            phone: None,
            location: None,
            links: None,
            summary: None,
            experiences: vec![],
            education: vec![],
            skills: None,
        }
    }

    fn minimal_request() -> ResumeRequest {
        ResumeRequest {
            full_name: "Jane Doe".to_string(),
            target_title: "Engineer".to_string(),
            ..empty_request()
        }
    }

    #[test]
    fn test_empty_request_yields_fallback() {
        assert_eq!(format_resume(&empty_request()), "No data provided.");
    }

    #[test]
    fn test_header_only() {
        assert_eq!(format_resume(&minimal_request()), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_contact_line_is_pipe_joined_in_fixed_order() {
        let req = ResumeRequest {
            email: Some("jane@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            links: Some("github.com/jane".to_string()),
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert_eq!(
            out,
            "Jane Doe\nEngineer\njane@example.com | 555-0100 | github.com/jane"
        );
    }

    #[test]
    fn test_experience_section_matches_documented_example() {
        let req = ResumeRequest {
            experiences: vec![Experience {
                role: "Dev".to_string(),
                company: "Acme".to_string(),
                start: "2020".to_string(),
                end: Some("2022".to_string()),
                achievements: vec!["Built X".to_string()],
            }],
            ..minimal_request()
        };
        assert_eq!(
            format_resume(&req),
            "Jane Doe\nEngineer\n\nExperience\n----------\nDev — Acme (2020 – 2022)\n- Built X"
        );
    }

    #[test]
    fn test_missing_end_date_renders_present() {
        let req = ResumeRequest {
            experiences: vec![Experience {
                role: "Dev".to_string(),
                company: "Acme".to_string(),
                start: "2021".to_string(),
                end: None,
                achievements: vec![],
            }],
            ..minimal_request()
        };
        assert!(format_resume(&req).contains("Dev — Acme (2021 – Present)"));
    }

    #[test]
    fn test_blank_achievements_are_skipped() {
        let req = ResumeRequest {
            experiences: vec![Experience {
                role: "Dev".to_string(),
                company: "Acme".to_string(),
                start: "2020".to_string(),
                end: Some("2022".to_string()),
                achievements: vec!["  ".to_string(), "Shipped Y".to_string(), String::new()],
            }],
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert!(out.contains("- Shipped Y"));
        assert_eq!(out.matches("- ").count(), 1);
    }

    #[test]
    fn test_summary_trimmed_and_underlined() {
        let req = ResumeRequest {
            summary: Some("  Curious builder.  ".to_string()),
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert!(out.contains("Summary\n-------\nCurious builder."));
    }

    #[test]
    fn test_blank_summary_emits_no_section() {
        let req = ResumeRequest {
            summary: Some("   ".to_string()),
            ..minimal_request()
        };
        assert_eq!(format_resume(&req), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_education_with_degree_and_open_end() {
        let req = ResumeRequest {
            education: vec![Education {
                school: "State University".to_string(),
                start: "2014".to_string(),
                end: None,
                degree: Some("BSc Computer Science".to_string()),
            }],
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert!(out.contains("Education\n---------"));
        assert!(out.contains("State University, BSc Computer Science (2014 – )"));
    }

    #[test]
    fn test_skills_are_normalized() {
        let req = ResumeRequest {
            skills: Some(" rust ,, tokio,  axum ".to_string()),
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert!(out.contains("Skills\n------\nrust, tokio, axum"));
    }

    #[test]
    fn test_sections_joined_by_single_blank_line() {
        let req = ResumeRequest {
            summary: Some("Builder.".to_string()),
            skills: Some("rust".to_string()),
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert_eq!(
            out,
            "Jane Doe\nEngineer\n\nSummary\n-------\nBuilder.\n\nSkills\n------\nrust"
        );
    }

    #[test]
    fn test_no_blank_section_headers() {
        let req = ResumeRequest {
            summary: Some(String::new()),
            skills: Some("  ".to_string()),
            ..minimal_request()
        };
        let out = format_resume(&req);
        assert!(!out.contains("Summary"));
        assert!(!out.contains("Skills"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let req = ResumeRequest {
            summary: Some("Builder.".to_string()),
            experiences: vec![Experience {
                role: "Dev".to_string(),
                company: "Acme".to_string(),
                start: "2020".to_string(),
                end: None,
                achievements: vec!["Built X".to_string()],
            }],
            ..minimal_request()
        };
        assert_eq!(format_resume(&req), format_resume(&req));
    }
}
