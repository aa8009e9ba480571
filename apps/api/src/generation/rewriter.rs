//! Heuristic line rewriter. Swaps weak phrasing for stronger verbs, nudges
//! lines toward quantified outcomes, and appends canned improvement
//! suggestions.
//!
//! Substitution scans are plain substring matches, not word-boundary aware:
//! a weak phrase inside a longer word is rewritten too. That is the behavior
//! callers already rely on and is pinned by a test rather than "fixed".

/// Weak phrase to stronger verb, applied per line in this order.
const VERB_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("did", "accomplished"),
    ("made", "created"),
    ("worked on", "developed"),
    ("helped", "assisted"),
    ("used", "implemented"),
    ("did work", "executed"),
    ("was responsible for", "managed"),
    ("looked after", "oversaw"),
    ("did stuff", "performed"),
    ("fixed", "resolved"),
    ("changed", "transformed"),
    ("got", "achieved"),
    ("put in", "implemented"),
    ("set up", "established"),
    ("ran", "managed"),
];

/// Lines that already state a measured outcome are left alone.
const OUTCOME_WORDS: &[&str] = &[
    "increased", "decreased", "improved", "reduced", "grew", "achieved",
];

/// Lines with one of these but no digit get the metrics reminder suffix.
const BUILD_VERBS: &[&str] = &["developed", "created", "built", "implemented", "designed"];

/// Casual words flattened to "excellent" under the professional tone.
const CASUAL_WORDS: &[&str] = &["cool", "awesome", "great", "nice", "good", "stuff", "things"];

/// Leadership verbs checked when building the suggestions block.
const LEADERSHIP_WORDS: &[&str] = &["led", "managed", "coordinated", "supervised"];

const METRICS_SUFFIX: &str = " (consider adding specific metrics)";

const SUGGEST_METRICS: &str =
    "💡 Consider adding quantifiable achievements (e.g., 'increased sales by 25%')";
const SUGGEST_BULLETS: &str = "💡 Add more bullet points to highlight specific achievements";
const SUGGEST_LEADERSHIP: &str = "💡 Include leadership experiences if applicable";

/// The only tone with defined behavior; other values pass lines through
/// without the casual-word cleanup.
pub const DEFAULT_TONE: &str = "professional";

/// Title-cases each whitespace-separated word ("worked on" -> "Worked On").
fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Replaces every lowercase and title-cased occurrence of `from`, when the
/// line contains it case-insensitively.
fn substitute(line: &mut String, from: &str, to: &str) {
    if line.to_lowercase().contains(from) {
        *line = line.replace(from, to);
        *line = line.replace(&title_case(from), &title_case(to));
    }
}

fn rewrite_line(line: &str, tone: &str) -> String {
    let mut out = line.to_string();

    for (weak, strong) in VERB_SUBSTITUTIONS {
        substitute(&mut out, weak, strong);
    }

    // Suggest metrics only when the line builds something, carries no
    // outcome word, and has no digit to show for it.
    let lowered = out.to_lowercase();
    let has_outcome = OUTCOME_WORDS.iter().any(|w| lowered.contains(w));
    if !has_outcome
        && BUILD_VERBS.iter().any(|w| lowered.contains(w))
        && !contains_digit(&out)
    {
        out.push_str(METRICS_SUFFIX);
    }

    if tone == DEFAULT_TONE {
        for word in CASUAL_WORDS {
            substitute(&mut out, word, "excellent");
        }
    }

    out
}

/// Rewrites free-form resume text line by line. Non-blank lines survive
/// one-to-one; a suggestions block is appended after a blank line when any
/// of the whole-text checks fire.
pub fn improve_text(text: &str, tone: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut result = lines
        .iter()
        .map(|l| rewrite_line(l, tone))
        .collect::<Vec<_>>()
        .join("\n");

    let mut suggestions: Vec<&str> = Vec::new();
    if !contains_digit(text) {
        suggestions.push(SUGGEST_METRICS);
    }
    let bullet_lines = lines
        .iter()
        .filter(|l| l.starts_with('-') || l.starts_with('•'))
        .count();
    if bullet_lines < 3 {
        suggestions.push(SUGGEST_BULLETS);
    }
    let lowered = text.to_lowercase();
    if !LEADERSHIP_WORDS.iter().any(|w| lowered.contains(w)) {
        suggestions.push(SUGGEST_LEADERSHIP);
    }

    if !suggestions.is_empty() {
        result.push_str("\n\n");
        result.push_str(&suggestions.join("\n"));
    }

    result
}
