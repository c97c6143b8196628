//! Cross-content queries over the sample seed.
//!
//! These tests load the full seed file and verify the relations the site
//! templates depend on: landing page sections, region trees, related
//! content blocks, team pages and glossary browsing.

use yatra_core::store::{ContentStore, InMemoryStore};

/// Load the sample seed into a fresh store
fn seeded_store() -> InMemoryStore {
    let seed_json = include_str!("../../seeds/sample-content.json");
    InMemoryStore::from_seed_json(seed_json).expect("Failed to load sample seed")
}

#[test]
fn seed_loads_every_collection() {
    let store = seeded_store();
    let counts = store.counts().expect("counts");

    assert_eq!(counts.tags, 4);
    assert_eq!(counts.regions, 4);
    assert_eq!(counts.categories, 2);
    assert_eq!(counts.members, 2);
    assert_eq!(counts.trips, 5);
    assert_eq!(counts.posts, 3);
    assert_eq!(counts.terms, 5);

    assert!(store.health_check().is_ok());
}

#[test]
fn landing_page_sections() {
    let store = seeded_store();

    // Featured trips: only published + featured records qualify
    let featured = store.featured_trips(6).expect("featured trips");
    let slugs: Vec<&str> = featured.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(featured.len(), 2);
    assert!(slugs.contains(&"everest-base-camp-trek"));
    assert!(slugs.contains(&"annapurna-circuit-trek"));

    // Latest posts: featured first, then newest by publish date
    let latest = store.latest_posts(3).expect("latest posts");
    assert_eq!(latest.len(), 2, "draft posts never reach listings");
    assert_eq!(latest[0].slug, "acclimatization-guide");
    assert_eq!(latest[1].slug, "teahouse-trekking-explained");

    // Featured regions in display order, name breaking ties
    let regions = store.featured_regions(4).expect("featured regions");
    let slugs: Vec<&str> = regions.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["everest-region", "nepal", "annapurna-region"]);

    // Featured tags in display order
    let tags = store.featured_tags(8).expect("featured tags");
    let slugs: Vec<&str> = tags.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["trekking", "altitude"]);
}

#[test]
fn region_tree_navigation() {
    let store = seeded_store();

    let roots = store.root_regions().expect("roots");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].slug, "nepal");

    let children = store.child_regions("nepal").expect("children");
    let slugs: Vec<&str> = children.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["everest-region", "annapurna-region"]);

    // Breadcrumbs run root first
    let ancestors = store.region_ancestors("khumbu").expect("ancestors");
    let slugs: Vec<&str> = ancestors.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["nepal", "everest-region"]);

    let descendants = store.region_descendants("nepal").expect("descendants");
    assert_eq!(descendants.len(), 3);
}

#[test]
fn region_landing_pages_pull_subtree_content() {
    let store = seeded_store();

    // Everest region trips; the draft climbing trip stays hidden
    let everest = store.region_trips("everest-region").expect("everest trips");
    assert_eq!(everest.len(), 3);
    assert!(everest.iter().all(|t| t.is_published));

    // The country page sees trips from every sub-region
    let nepal = store.region_trips("nepal").expect("nepal trips");
    assert_eq!(nepal.len(), 4);

    // Khumbu has no trips of its own
    let khumbu = store.region_trips("khumbu").expect("khumbu trips");
    assert!(khumbu.is_empty());

    let posts = store.region_posts("everest-region", 3).expect("region posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "acclimatization-guide");
}

#[test]
fn trip_pages_pull_related_content() {
    let store = seeded_store();

    // Explicitly linked guides win over tag matches
    let guides = store
        .related_guides("everest-base-camp-trek", 5)
        .expect("related guides");
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].slug, "acclimatization-guide");

    // Same region or shared tags, featured trips ranked first
    let similar = store
        .similar_trips("everest-base-camp-trek", 4)
        .expect("similar trips");
    let slugs: Vec<&str> = similar.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(similar.len(), 3);
    assert_eq!(
        slugs[0], "annapurna-circuit-trek",
        "the only featured similar trip ranks first"
    );
    assert!(slugs.contains(&"gokyo-lakes-trek"));
    assert!(slugs.contains(&"everest-heli-tour"));
    assert!(
        !slugs.contains(&"island-peak-climbing"),
        "draft trips never appear as similar"
    );
}

#[test]
fn post_pages_pull_related_content() {
    let store = seeded_store();

    // Explicit trip links keep the order the post lists them in
    let recommended = store
        .recommended_trips("acclimatization-guide", 3)
        .expect("recommended trips");
    let slugs: Vec<&str> = recommended.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["everest-base-camp-trek", "gokyo-lakes-trek"]);

    let related = store
        .related_posts("acclimatization-guide", 4)
        .expect("related posts");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug, "teahouse-trekking-explained");

    // View counter increments and persists
    assert_eq!(store.increment_post_views("acclimatization-guide").unwrap(), 1);
    assert_eq!(store.increment_post_views("acclimatization-guide").unwrap(), 2);
    let post = store.get_post("acclimatization-guide").expect("post");
    assert_eq!(post.view_count, 2);
}

#[test]
fn tag_pages_collect_both_content_kinds() {
    let store = seeded_store();

    let content = store.tag_content("trekking").expect("tag content");
    assert_eq!(content.trips.len(), 3);
    assert_eq!(content.posts.len(), 2);

    assert_eq!(store.tag_trip_count("trekking").unwrap(), 3);
    assert_eq!(store.tag_post_count("trekking").unwrap(), 2);

    // Photography tags the heli tour and one trek
    assert_eq!(store.tag_trip_count("photography").unwrap(), 2);
    assert_eq!(store.tag_post_count("photography").unwrap(), 0);
}

#[test]
fn team_pages_show_authors_and_their_work() {
    let store = seeded_store();

    let members = store.team_members().expect("members");
    let slugs: Vec<&str> = members.iter().map(|m| m.slug.as_str()).collect();
    assert_eq!(slugs, vec!["pemba-sherpa", "anita-gurung"]);

    // Only published posts count toward an author's page
    let posts = store.member_posts("pemba-sherpa").expect("member posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "acclimatization-guide");
    assert_eq!(store.member_post_count("pemba-sherpa").unwrap(), 1);

    // Expertise derives from the tags of an author's published posts
    let expertise = store
        .member_expertise_tags("pemba-sherpa")
        .expect("expertise");
    let slugs: Vec<&str> = expertise.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["trekking", "altitude"]);
}

#[test]
fn glossary_browsing_pages() {
    let store = seeded_store();

    // Index page lists terms alphabetically
    let terms = store.terms().expect("terms");
    let names: Vec<&str> = terms.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Acclimatization",
            "Acute Mountain Sickness",
            "Namaste",
            "Sherpa",
            "Teahouse"
        ]
    );

    // Letter groups for the A-Z browse widget
    let by_letter = store.terms_by_letter().expect("terms by letter");
    let letters: Vec<&str> = by_letter.keys().map(String::as_str).collect();
    assert_eq!(letters, vec!["A", "N", "S", "T"]);
    assert_eq!(by_letter["A"].len(), 2);

    // Term detail page relations
    let related = store
        .related_terms("acute-mountain-sickness", 6)
        .expect("related terms");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug, "acclimatization");

    let trips = store
        .term_trips("acute-mountain-sickness", 4)
        .expect("term trips");
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].slug, "everest-base-camp-trek");

    // The linker only ever sees opted-in terms
    let linkable = store.auto_link_terms().expect("linkable terms");
    assert_eq!(linkable.len(), 4);
    assert!(linkable.iter().all(|t| t.slug != "namaste"));
}

#[test]
fn seo_defaults_fill_at_insert_time() {
    let store = seeded_store();

    // Terms get a default meta title derived from their name
    let term = store.get_term("sherpa").expect("term");
    assert_eq!(term.meta_title, "Sherpa - Trekking Glossary");
    assert!(!term.meta_description.is_empty());

    // Published posts get stamped exactly once
    let post = store.get_post("teahouse-trekking-explained").expect("post");
    assert!(post.published_at.is_some());
    assert_eq!(post.meta_title, post.title);
}
