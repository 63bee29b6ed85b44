use std::path::Path;

/// Lowercase dotted extension to language label. Classification is
/// extension-based only; files outside this table are not counted.
pub const EXTENSIONS: &[(&str, &str)] = &[
    (".c", "C"),
    (".cpp", "C++"),
    (".cs", "C#"),
    (".css", "CSS"),
    (".go", "Go"),
    (".html", "HTML"),
    (".java", "Java"),
    (".js", "JavaScript"),
    (".kt", "Kotlin"),
    (".php", "PHP"),
    (".py", "Python"),
    (".rb", "Ruby"),
    (".rs", "Rust"),
    (".sh", "Shell"),
    (".swift", "Swift"),
    (".ts", "TypeScript"),
    (".xml", "XML"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
];

/// Maps a file name to its language label by extension, or `None` when the
/// extension is unrecognized (the file is then skipped entirely).
pub fn classify(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_lowercase();
    let dotted = format!(".{ext}");
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == dotted)
        .map(|(_, language)| *language)
}
