//! Line-oriented list format for the title and channel resources.
//!
//! A meaningful line is `- item` or `- "item"`; surrounding whitespace is
//! ignored and everything else is dropped without complaint.

pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(parse_line)
        .map(str::to_owned)
        .collect()
}

fn parse_line(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix('-')?;
    let rest = rest.trim();
    // Leading and trailing quotes are each optional.
    let rest = rest.strip_prefix('"').unwrap_or(rest);
    let rest = rest.strip_suffix('"').unwrap_or(rest);
    if rest.is_empty() { None } else { Some(rest) }
}
