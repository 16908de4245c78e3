//! Title extraction from search results markup

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Upper bound on titles returned from one extraction pass
pub const MAX_TITLES: usize = 40;

/// Title-detail path, optionally behind a scheme and host. Matched against the
/// href with its query and fragment removed.
static TITLE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*:)?(?://[^/]+)?/title/tt\d+/?$")
        .expect("valid title path pattern")
});

static ORDINAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+").expect("valid ordinal pattern"));

static LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// Collects the link text of every title-detail link in the document.
///
/// Output is cleaned, deduplicated in first-seen order and capped at [`MAX_TITLES`].
pub fn extract_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let candidates = document.select(&LINK).filter_map(|link| {
        let href = link.value().attr("href")?;
        if !is_title_link(href) {
            return None;
        }
        // Text nodes of nested elements are separate words
        let text = link.text().collect::<Vec<_>>().join(" ");
        Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
    });

    let mut titles = dedup_titles(candidates);
    titles.truncate(MAX_TITLES);
    titles
}

fn is_title_link(href: &str) -> bool {
    let path = href
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    TITLE_PATH.is_match(path)
}

/// Trims a raw title and strips a leading "12. " ranking. Returns `None` if nothing is left.
pub fn clean_title(raw: &str) -> Option<String> {
    let stripped = ORDINAL_PREFIX.replace(raw.trim_start(), "");
    let title = stripped.trim();

    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Cleans every title and drops empties and exact repeats, keeping first-seen order
pub fn dedup_titles<I, S>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter_map(|raw| clean_title(raw.as_ref()))
        .filter(|title| seen.insert(title.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_link(id: u32, text: &str) -> String {
        format!(r#"<li><a href="/title/tt{:07}/?ref_=sr_t_{}">{}</a></li>"#, id, id, text)
    }

    fn page(body: &str) -> String {
        format!("<html><body><ul>{}</ul></body></html>", body)
    }

    #[test]
    fn test_duplicate_link_yields_one_title() {
        let html = page(&format!(
            "{}{}",
            title_link(1, "1. Sample Movie"),
            title_link(1, "1. Sample Movie")
        ));
        assert_eq!(extract_titles(&html), vec!["Sample Movie"]);
    }

    #[test]
    fn test_ignores_non_title_links() {
        let html = page(
            r#"
            <a href="/name/nm0000138/">Leonardo DiCaprio</a>
            <a href="/title/tt1375666/">Inception</a>
            <a href="/title/tt1375666/reviews">1,234 reviews</a>
            <a href="/title/popular/">Popular titles</a>
            <a href="/search/title/?genres=action">Action</a>
            <a>No href</a>
            "#,
        );
        assert_eq!(extract_titles(&html), vec!["Inception"]);
    }

    #[test]
    fn test_title_path_in_query_or_fragment_is_not_a_title_link() {
        let html = page(
            r#"
            <a href="/search/title/?next=/title/tt0000009/">Next page</a>
            <a href="/list/ls000001/#/title/tt0000010/">Watchlist</a>
            <a href="/title/tt0000011/?ref_=sr_t_1#main">Vikram Vedha</a>
            <a href="/title/tt0000012">Kaithi</a>
            "#,
        );
        assert_eq!(extract_titles(&html), vec!["Vikram Vedha", "Kaithi"]);
    }

    #[test]
    fn test_nested_text_nodes_are_space_separated() {
        let html = page(
            r#"<a href="/title/tt0000001/"><h3>Movie A</h3><span>2024</span></a>
               <a href="/title/tt0000002/"><h3>3.  Ala
                 Vaikunthapurramuloo</h3></a>"#,
        );
        assert_eq!(
            extract_titles(&html),
            vec!["Movie A 2024", "Ala Vaikunthapurramuloo"]
        );
    }

    #[test]
    fn test_is_title_link() {
        assert!(is_title_link("/title/tt1375666/"));
        assert!(is_title_link("https://www.imdb.com/title/tt1375666/?ref_=fn_al_tt_1"));
        assert!(is_title_link("//www.imdb.com/title/tt1375666"));
        assert!(!is_title_link("/title/tt1375666/reviews"));
        assert!(!is_title_link("/search/title/?next=/title/tt1375666/"));
        assert!(!is_title_link("/title/popular/"));
        assert!(!is_title_link("/en/title/tt1375666/extra"));
    }

    #[test]
    fn test_absolute_links_and_nested_markup() {
        let html = page(
            r#"<a href="https://www.imdb.com/title/tt0468569/"><h3 class="ipc-title__text">2. The Dark Knight</h3></a>"#,
        );
        assert_eq!(extract_titles(&html), vec!["The Dark Knight"]);
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let html = page(&format!(
            "{}{}{}",
            title_link(3, "3. Kaithi"),
            title_link(1, "1. Vikram"),
            title_link(3, "Kaithi")
        ));
        assert_eq!(extract_titles(&html), vec!["Kaithi", "Vikram"]);
    }

    #[test]
    fn test_caps_at_max_titles() {
        let links: String = (1..=55)
            .map(|i| title_link(i, &format!("{}. Movie {}", i, i)))
            .collect();
        let titles = extract_titles(&page(&links));

        assert_eq!(titles.len(), MAX_TITLES);
        assert_eq!(titles[0], "Movie 1");
        assert_eq!(titles[39], "Movie 40");
    }

    #[test]
    fn test_empty_and_unrelated_documents() {
        assert!(extract_titles("").is_empty());
        assert!(extract_titles("<html><body><p>Access denied</p></body></html>").is_empty());
        assert!(extract_titles(&page(&title_link(9, "   "))).is_empty());
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("  12. Premam "), Some("Premam".to_string()));
        assert_eq!(clean_title("96"), Some("96".to_string()));
        assert_eq!(clean_title("3 Idiots"), Some("3 Idiots".to_string()));
        assert_eq!(clean_title("Mr. India"), Some("Mr. India".to_string()));
        assert_eq!(clean_title("7. "), None);
        assert_eq!(clean_title(""), None);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let titles = dedup_titles(["Drishyam", "drishyam", "Drishyam", " "]);
        assert_eq!(titles, vec!["Drishyam", "drishyam"]);
    }
}
