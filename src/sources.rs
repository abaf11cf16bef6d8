const BASE_URL: &str = "https://www.pieas.edu.pk/faculty-partials/";
const PAGE_EXTENSION: &str = ".cshtml";

/// Department pages, in processing order. Order matters: the first page to
/// contribute a name wins ties in the aggregate.
pub const DEPARTMENTS: &[&str] = &[
    "fa-dche", "fa-dcis", "fa-dcms", "fa-dee", "fa-dme", "fa-dms", "fa-dmme", "fa-dne", "fa-dpam",
];

pub fn page_urls() -> Vec<String> {
    DEPARTMENTS
        .iter()
        .map(|code| format!("{}{}{}", BASE_URL, code, PAGE_EXTENSION))
        .collect()
}

/// Last path segment of `url` with its file extension removed.
pub fn department_from_url(url: &str) -> String {
    let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => segment.to_string(),
    }
}
