//! Whitespace normalization around the structural markers of the path grammar.
//!
//! After normalization every selector segment is a single whitespace-free token:
//! `#` and `>` are glued to the name they prefix and separated from whatever
//! precedes them, bracket/`=`/`|` content loses inner padding, and `(n)` is glued
//! to its name and separated from whatever follows it. Ordinary name characters
//! are never touched. Running the pass on its own output is a no-op.
use fancy_regex::Regex;
use std::sync::LazyLock;

struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

// Order matters: marker padding is removed before separators are inserted.
const RULES: &[(&str, &str)] = &[
    (r"#\s+", "#"),
    (r">\s+", ">"),
    (r"(\S)#", "${1} #"),
    (r"(\S)>", "${1} >"),
    (r"\s+\]", "]"),
    (r"\[\s+", "["),
    (r"\s*=\s*", "="),
    (r"\s*\(\s*(\S*)\s*\)", "(${1})"),
    (r"(\(\S*\))(\S)", "${1} ${2}"),
    (r"\s*\|\s*", "|"),
];

static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(pattern, replacement)| Rewrite {
            pattern: Regex::new(pattern).expect("normalization patterns are valid"),
            replacement,
        })
        .collect()
});

pub fn normalize(path: &str) -> String {
    let mut out = path.to_owned();
    for rewrite in REWRITES.iter() {
        let next = rewrite.pattern.replace_all(&out, rewrite.replacement).into_owned();
        out = next;
    }
    out
}

/// Normalized, whitespace-separated segment tokens.
pub fn tokens(path: &str) -> Vec<String> {
    normalize(path).split_whitespace().map(str::to_owned).collect()
}
