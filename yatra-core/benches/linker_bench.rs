//! Benchmarks for the glossary auto-linker
//!
//! Measures the rewrite pass over article pages of increasing size, plus
//! the registry term-load with and without caching.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use yatra_core::cache::{InMemoryTermCache, NoopTermCache};
use yatra_core::glossary::{rewrite, GlossaryAutoLinker, LinkTerm, Term, TermRegistry};
use yatra_core::store::InMemoryStore;

fn bench_terms() -> Vec<LinkTerm> {
    vec![
        LinkTerm::new("Acute Mountain Sickness", "acute-mountain-sickness")
            .with_abbreviation("AMS")
            .with_priority(9),
        LinkTerm::new("Acclimatization", "acclimatization").with_priority(8),
        LinkTerm::new("Sherpa", "sherpa").with_priority(7),
        LinkTerm::new("Teahouse", "teahouse").with_priority(6),
        LinkTerm::new("Khumbu", "khumbu").with_priority(5),
        LinkTerm::new("Thorong La", "thorong-la").with_priority(5),
        LinkTerm::new("Dal Bhat", "dal-bhat").with_priority(4),
        LinkTerm::new("Kala Patthar", "kala-patthar").with_priority(4),
        LinkTerm::new("Monsoon", "monsoon").with_priority(3),
        LinkTerm::new("Porter", "porter").with_priority(3),
    ]
}

fn bench_page(paragraphs: usize) -> String {
    let mut page = String::from("<html><body><nav>AMS Sherpa Teahouse</nav><article>");
    for i in 0..paragraphs {
        page.push_str(&format!(
            "<p>Day {i}: the trail climbs through the Khumbu past every teahouse, \
             and our Sherpa crew watches the group for AMS while the porter \
             carries loads toward Kala Patthar. Dinner is dal bhat, and rest \
             days are for acclimatization before the monsoon arrives.</p>"
        ));
    }
    page.push_str("</article><footer>More about AMS</footer></body></html>");
    page
}

fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    for link_term in bench_terms() {
        let term = Term::new(link_term.name.clone(), link_term.slug.clone())
            .with_abbreviation(link_term.abbreviation.clone())
            .with_priority(link_term.link_priority);
        store.insert_term(term).unwrap();
    }
    Arc::new(store)
}

fn bench_rewrite_by_page_size(c: &mut Criterion) {
    let terms = bench_terms();
    let mut group = c.benchmark_group("rewrite_page_size");

    for paragraphs in [5, 50, 200] {
        let page = bench_page(paragraphs);
        group.bench_function(BenchmarkId::from_parameter(paragraphs), |b| {
            b.iter(|| black_box(rewrite(black_box(&page), &terms)))
        });
    }

    group.finish();
}

fn bench_rewrite_without_matches(c: &mut Criterion) {
    let terms = bench_terms();
    let mut page = String::from("<article>");
    for i in 0..50 {
        page.push_str(&format!(
            "<p>Paragraph {i} talks about valleys and rivers and bridges \
             without mentioning any glossary entries at all.</p>"
        ));
    }
    page.push_str("</article>");

    c.bench_function("rewrite_no_matches", |b| {
        b.iter(|| black_box(rewrite(black_box(&page), &terms)))
    });
}

fn bench_rewrite_without_article(c: &mut Criterion) {
    let terms = bench_terms();
    let page = "<html><body><p>AMS Sherpa teahouse everywhere</p></body></html>";

    c.bench_function("rewrite_no_article_region", |b| {
        b.iter(|| black_box(rewrite(black_box(page), &terms)))
    });
}

fn bench_registry_term_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_terms");

    // Every load goes to the store
    group.bench_function(BenchmarkId::new("uncached", "terms"), |b| {
        let registry = TermRegistry::new(seeded_store(), Arc::new(NoopTermCache));
        b.iter(|| black_box(registry.terms().unwrap()))
    });

    // First load fills the cache, the rest hit it
    group.bench_function(BenchmarkId::new("cached", "terms"), |b| {
        let registry = TermRegistry::new(seeded_store(), Arc::new(InMemoryTermCache::new()));
        let _ = registry.terms();
        b.iter(|| black_box(registry.terms().unwrap()))
    });

    group.finish();
}

fn bench_auto_link_end_to_end(c: &mut Criterion) {
    let registry = TermRegistry::new(seeded_store(), Arc::new(InMemoryTermCache::new()));
    let linker = GlossaryAutoLinker::new(registry);
    let page = bench_page(20);

    c.bench_function("auto_link_rendered_page", |b| {
        b.iter(|| black_box(linker.auto_link(black_box(&page))))
    });
}

criterion_group!(
    benches,
    bench_rewrite_by_page_size,
    bench_rewrite_without_matches,
    bench_rewrite_without_article,
    bench_registry_term_load,
    bench_auto_link_end_to_end
);

criterion_main!(benches);
