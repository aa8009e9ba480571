// Core text generation: resume formatting, heuristic rewriting, cover letter
// composition, and ATS scoring. Every operation here is a pure, deterministic
// function of its input: no state, no I/O.

pub mod formatter;
pub mod handlers;
pub mod letter;
pub mod rewriter;
pub mod scoring;
