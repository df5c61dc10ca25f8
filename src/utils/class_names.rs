/// Joins class lists left to right, dropping empty entries and repeated
/// class names. The first occurrence of a class keeps its position.
pub fn cn<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = Vec::new();
    for class in parts.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
