//! End-to-end tests of the glossary auto-link flow over seeded content.
//!
//! These tests run the real pipeline (store -> registry -> cache -> rewriter)
//! against the sample seed and pin down the linking behavior a rendered page
//! relies on.

use std::sync::Arc;
use std::time::Duration;

use yatra_core::cache::InMemoryTermCache;
use yatra_core::glossary::{rewrite, GlossaryAutoLinker, LinkTerm, RegistryConfig, TermRegistry};
use yatra_core::store::InMemoryStore;

/// Load the sample seed into a fresh store
fn seeded_store() -> Arc<InMemoryStore> {
    let seed_json = include_str!("../../seeds/sample-content.json");
    Arc::new(InMemoryStore::from_seed_json(seed_json).expect("Failed to load sample seed"))
}

/// Wire the full pipeline over the sample seed
fn seeded_linker() -> GlossaryAutoLinker {
    let registry = TermRegistry::new(seeded_store(), Arc::new(InMemoryTermCache::new()));
    GlossaryAutoLinker::new(registry)
}

/// Render the acclimatization guide the way a detail template would
fn rendered_guide_page() -> String {
    let store = seeded_store();
    let post = store
        .get_post("acclimatization-guide")
        .expect("seed post missing");

    format!(
        "<html><body>\
         <nav><a href=\"/blog/\">Blog</a> AMS</nav>\
         <article class=\"post-body\"><h1>{}</h1>{}</article>\
         <footer>About AMS and Sherpa culture</footer>\
         </body></html>",
        post.title, post.content
    )
}

#[test]
fn page_without_article_region_is_unchanged() {
    let linker = seeded_linker();

    let page = "<html><body><nav>AMS Sherpa teahouse</nav></body></html>";
    assert_eq!(
        linker.auto_link(page),
        page,
        "pages without an article region must pass through untouched"
    );

    let unterminated = "<html><article><p>AMS everywhere";
    assert_eq!(
        linker.auto_link(unterminated),
        unterminated,
        "pages without a closing article tag must pass through untouched"
    );
}

#[test]
fn guide_page_gets_glossary_links() {
    let linker = seeded_linker();
    let page = rendered_guide_page();
    let linked = linker.auto_link(&page);

    // The exact anchor a glossary link renders as
    assert!(
        linked.contains(
            "<a href=\"/glossary/acute-mountain-sickness/\" class=\"glossary-term\" \
             title=\"View definition\">AMS</a>"
        ),
        "AMS mentions should link to the glossary entry"
    );

    // Both body mentions of AMS fit under its cap of 3
    assert_eq!(
        linked
            .matches("href=\"/glossary/acute-mountain-sickness/\"")
            .count(),
        2
    );
    assert_eq!(linked.matches("href=\"/glossary/sherpa/\"").count(), 1);
    assert_eq!(linked.matches("href=\"/glossary/teahouse/\"").count(), 1);
    assert_eq!(
        linked
            .matches("href=\"/glossary/acclimatization/\"")
            .count(),
        1
    );

    // Chrome outside the article region stays untouched
    assert!(
        linked.contains("<nav><a href=\"/blog/\">Blog</a> AMS</nav>"),
        "navigation should keep its plain AMS mention"
    );
    assert!(
        linked.contains("<footer>About AMS and Sherpa culture</footer>"),
        "footer should stay untouched"
    );
}

#[test]
fn opted_out_terms_are_never_linked() {
    let linker = seeded_linker();
    let linked = linker.auto_link(&rendered_guide_page());

    // The seed greets readers with "Namaste" but the term opts out of linking
    assert!(linked.contains("Namaste"));
    assert!(
        !linked.contains("/glossary/namaste/"),
        "terms with auto_link disabled must never produce anchors"
    );
}

#[test]
fn cap_limits_links_per_page() {
    let linker = seeded_linker();

    // Five mentions, cap of 3: the first three link, the rest stay plain
    let page = "<article><p>AMS one. AMS two. AMS three. AMS four. AMS five.</p></article>";
    let linked = linker.auto_link(page);

    assert_eq!(
        linked
            .matches("href=\"/glossary/acute-mountain-sickness/\"")
            .count(),
        3
    );
    assert_eq!(linked.matches(">AMS</a>").count(), 3);
    assert!(linked.contains("AMS four"), "mentions past the cap stay plain");
    assert!(linked.contains("AMS five"), "mentions past the cap stay plain");
}

#[test]
fn name_and_abbreviation_share_one_cap() {
    let linker = seeded_linker();

    let page = "<article><p>Acute Mountain Sickness is serious. \
                AMS strikes fast. AMS again. AMS once more.</p></article>";
    let linked = linker.auto_link(page);

    // One name mention plus two abbreviation mentions exhaust the cap of 3
    assert_eq!(
        linked
            .matches("href=\"/glossary/acute-mountain-sickness/\"")
            .count(),
        3
    );
    assert!(linked.contains(">Acute Mountain Sickness</a>"));
    assert_eq!(linked.matches(">AMS</a>").count(), 2);
    assert!(linked.contains("AMS once more"), "fourth mention stays plain");
}

#[test]
fn whole_word_matching_ignores_substrings() {
    let linker = seeded_linker();

    let page = "<article><p>Check the PARAMS page. SPAMS filters run nightly. \
                But AMS itself links.</p></article>";
    let linked = linker.auto_link(page);

    assert!(linked.contains("PARAMS page"), "PARAMS must stay plain");
    assert!(linked.contains("SPAMS filters"), "SPAMS must stay plain");
    assert_eq!(
        linked
            .matches("href=\"/glossary/acute-mountain-sickness/\"")
            .count(),
        1
    );
}

#[test]
fn fully_linked_page_survives_relinking() {
    let linker = seeded_linker();

    // Two mentions, cap of 2: everything links on the first pass
    let page = "<article><p>Sherpa one. Sherpa two.</p></article>";
    let once = linker.auto_link(page);
    let twice = linker.auto_link(&once);

    assert_eq!(once, twice, "relinking a fully linked page must change nothing");
    assert_eq!(twice.matches("href=\"/glossary/sherpa/\"").count(), 2);
    assert!(
        !twice.contains("<a href=\"/glossary/sherpa/\" class=\"glossary-term\" \
                         title=\"View definition\"><a"),
        "anchors must never nest"
    );
}

#[test]
fn rewriting_is_deterministic() {
    let page = rendered_guide_page();

    // Two independently wired pipelines must produce identical bytes
    let first = seeded_linker().auto_link(&page);
    let second = seeded_linker().auto_link(&page);

    assert_eq!(first, second);
}

#[test]
fn higher_priority_terms_claim_overlapping_text() {
    // Passed to the rewriter in registry order: priority descending
    let terms = vec![
        LinkTerm::new("Everest Base Camp", "everest-base-camp").with_priority(9),
        LinkTerm::new("Base Camp", "base-camp").with_priority(5),
    ];

    let page = "<article><p>The trail ends at Everest Base Camp. \
                Most groups rest at Base Camp for a day.</p></article>";
    let linked = rewrite(page, &terms);

    // The longer, higher-priority term wins the shared text
    assert!(linked.contains(">Everest Base Camp</a>"));
    assert_eq!(
        linked.matches("href=\"/glossary/everest-base-camp/\"").count(),
        1
    );

    // The shorter term only links its standalone mention
    assert_eq!(linked.matches("href=\"/glossary/base-camp/\"").count(), 1);
    assert!(linked.contains(">Base Camp</a>"));
}

#[test]
fn malformed_link_caps_disable_the_term() {
    let terms = vec![
        LinkTerm::new("Sherpa", "sherpa").with_max_links(-2),
        LinkTerm::new("Teahouse", "teahouse").with_max_links(0),
    ];

    let page = "<article><p>Sherpa hospitality in every teahouse.</p></article>";
    assert_eq!(
        rewrite(page, &terms),
        page,
        "non-positive caps must skip the term without failing the render"
    );
}

#[test]
fn second_render_hits_the_term_cache() {
    let cache = Arc::new(InMemoryTermCache::new());
    let registry = TermRegistry::new(seeded_store(), cache.clone());
    let linker = GlossaryAutoLinker::new(registry);

    let page = rendered_guide_page();
    linker.auto_link(&page);
    linker.auto_link(&page);

    let stats = cache.stats();
    assert_eq!(stats.misses, 1, "only the first render should load the store");
    assert_eq!(stats.hits, 1, "the second render should reuse cached terms");
}

#[test]
fn expired_cache_reloads_terms() {
    let cache = Arc::new(InMemoryTermCache::new());
    let config = RegistryConfig::default().with_ttl(Duration::from_millis(40));
    let registry = TermRegistry::with_config(seeded_store(), cache.clone(), config);
    let linker = GlossaryAutoLinker::new(registry);

    let page = rendered_guide_page();
    linker.auto_link(&page);
    std::thread::sleep(Duration::from_millis(60));
    linker.auto_link(&page);

    let stats = cache.stats();
    assert_eq!(
        stats.misses, 2,
        "a render after the TTL should reload from the store"
    );
}

#[test]
fn concurrent_renders_produce_identical_pages() {
    let config = RegistryConfig::default().with_ttl(Duration::from_millis(5));
    let registry =
        TermRegistry::with_config(seeded_store(), Arc::new(InMemoryTermCache::new()), config);
    let linker = Arc::new(GlossaryAutoLinker::new(registry));

    let page = rendered_guide_page();
    let expected = linker.auto_link(&page);

    let mut handles = vec![];
    for _ in 0..8 {
        let linker = Arc::clone(&linker);
        let page = page.clone();
        let expected = expected.clone();
        handles.push(std::thread::spawn(move || {
            for _ in 0..50 {
                // Renders race the term reload; the page must come out
                // byte-identical either way
                assert_eq!(linker.auto_link(&page), expected);
                std::thread::sleep(Duration::from_millis(1));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
