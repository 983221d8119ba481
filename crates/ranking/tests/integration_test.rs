//! Integration tests for the ranking crate.
//!
//! These drive the engine the way the storefront does: mutate a session,
//! take a snapshot, rank.

use catalog::{CartEntry, Catalog, Product};
use ranking::{
    RecommendationEngine, build_ranking_context, compute_recommendations, compute_trending,
    trending_key,
};
use rust_decimal::Decimal;
use session::Session;

fn product(id: &str, category: &str, rating: f64, reviews: u32, is_featured: bool) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        price: Decimal::from(25),
        original_price: None,
        category: category.to_string(),
        rating,
        reviews,
        is_new: false,
        is_featured,
    }
}

/// A dozen products over a few categories with repeated ratings, so ties
/// are common
fn create_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    let categories = ["A", "B", "C"];
    for i in 0..12u32 {
        let rating = [3.5, 4.0, 4.5, 5.0][(i % 4) as usize];
        catalog.insert_product(product(
            &format!("p{}", i),
            categories[(i % 3) as usize],
            rating,
            (i * 37) % 200,
            i % 5 == 0,
        ));
    }
    catalog
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_headphones_scenario() {
    let catalog = Catalog::sample();
    let mut session = Session::new();
    session.add_to_cart(catalog.get_product("1").unwrap());

    let snapshot = session.snapshot();
    assert_eq!(snapshot.viewed_ids, vec!["1"]);

    let context = build_ranking_context(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);
    assert_eq!(context.top_category.as_deref(), Some("Audio"));

    let recommended =
        compute_recommendations(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);
    // 2: 3.3, 3: 2.45, 4: 3.35, 5: 2.25, 6: 3.4, 7: 2.2, 8: 2.3
    assert_eq!(ids(&recommended), vec!["6", "4", "2", "3"]);
}

#[test]
fn test_empty_session_scenario() {
    let catalog = Catalog::sample();
    let snapshot = Session::new().snapshot();

    let context = build_ranking_context(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);
    assert!(context.top_category.is_none());

    let recommended =
        compute_recommendations(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);
    // "1" and "6" tie at 3.4 and keep catalog order
    assert_eq!(ids(&recommended), vec!["1", "6", "4", "2"]);
}

#[test]
fn test_sample_trending() {
    let trending = compute_trending(&Catalog::sample());
    assert_eq!(ids(&trending), vec!["6", "1", "5", "2"]);
}

#[test]
fn test_viewed_low_rated_product_drops_out() {
    let catalog = Catalog::sample();
    let mut session = Session::new();
    // Gaming becomes the top category, then the desk lamp (Home, 4.4) is viewed
    session.add_to_cart(catalog.get_product("5").unwrap());
    session.view("7");
    session.view("8");

    let snapshot = session.snapshot();
    let engine = RecommendationEngine::new(ranking::RankingConfig::default().with_limit(10));
    let recommended =
        engine.recommendations(&catalog, &snapshot.cart_entries, &snapshot.viewed_ids);

    let recommended = ids(&recommended);
    assert!(!recommended.contains(&"7"));
    assert!(!recommended.contains(&"5"));
    // Viewed, but in the top category: 2 + 0 + 2.3 puts it first
    assert_eq!(recommended[0], "8");
}

#[test]
fn test_category_tie_break_is_deterministic() {
    let mut catalog = Catalog::new();
    catalog.insert_product(product("a1", "A", 4.0, 10, false));
    catalog.insert_product(product("b1", "B", 4.0, 10, false));
    catalog.insert_product(product("a2", "A", 4.0, 10, false));
    catalog.insert_product(product("b2", "B", 4.0, 10, false));

    let cart = vec![
        CartEntry::new(catalog.get_product("a1").unwrap().clone()),
        CartEntry::new(catalog.get_product("b1").unwrap().clone()),
    ];

    for _ in 0..10 {
        let context = build_ranking_context(&catalog, &cart, &[] as &[&str]);
        assert_eq!(context.top_category.as_deref(), Some("A"));

        let recommended = compute_recommendations(&catalog, &cart, &[] as &[&str]);
        assert_eq!(ids(&recommended), vec!["a2", "b2"]);
    }
}

#[test]
fn test_views_break_cart_tie() {
    let catalog = Catalog::sample();
    let cart = vec![
        CartEntry::new(catalog.get_product("1").unwrap().clone()),
        CartEntry::new(catalog.get_product("5").unwrap().clone()),
    ];

    // Audio and Gaming tie on the cart, the view of "8" tips it to Gaming
    let context = build_ranking_context(&catalog, &cart, &["8"]);
    assert_eq!(context.top_category.as_deref(), Some("Gaming"));

    let recommended = compute_recommendations(&catalog, &cart, &["8"]);
    // 8: 2 + 2.3 = 4.3 beats 6: 1 + 2.4 = 3.4
    assert_eq!(ids(&recommended), vec!["8", "6", "4", "2"]);
}

#[test]
fn test_lists_never_exceed_four() {
    let catalog = create_test_catalog();
    let engine = RecommendationEngine::default();

    for cart_len in 0..catalog.len() {
        let cart: Vec<CartEntry> = catalog.products()[..cart_len]
            .iter()
            .cloned()
            .map(CartEntry::new)
            .collect();
        let viewed: Vec<&str> = catalog
            .products()
            .iter()
            .rev()
            .take(3)
            .map(|p| p.id.as_str())
            .collect();

        let result = engine.recommend(&catalog, &cart, &viewed);
        assert!(result.recommended.len() <= 4);
        assert!(result.trending.len() <= 4);
    }
}

#[test]
fn test_cart_products_never_recommended() {
    let catalog = create_test_catalog();

    for start in 0..catalog.len() {
        let cart: Vec<CartEntry> = catalog
            .products()
            .iter()
            .skip(start)
            .step_by(2)
            .cloned()
            .map(CartEntry::new)
            .collect();

        let recommended = compute_recommendations(&catalog, &cart, &["p1", "p4"]);
        for product in &recommended {
            assert!(
                cart.iter().all(|entry| entry.id() != product.id),
                "{} is in the cart",
                product.id
            );
        }
    }
}

#[test]
fn test_trending_sorted_by_key() {
    let catalog = create_test_catalog();
    let trending = compute_trending(&catalog);

    assert!(!trending.is_empty());
    for pair in trending.windows(2) {
        assert!(trending_key(&pair[0]) >= trending_key(&pair[1]));
    }
    assert!(trending.iter().all(|p| p.rating >= 4.0));
}

#[test]
fn test_idempotent() {
    let catalog = create_test_catalog();
    let cart = vec![CartEntry::new(catalog.get_product("p3").unwrap().clone())];
    let viewed = ["p0", "p7", "missing"];
    let engine = RecommendationEngine::default();

    let first = engine.recommend(&catalog, &cart, &viewed);
    let second = engine.recommend(&catalog, &cart, &viewed);
    assert_eq!(first, second);
}

#[test]
fn test_inputs_untouched() {
    let catalog = Catalog::sample();
    let before = catalog.products().to_vec();
    let cart = vec![CartEntry::new(catalog.get_product("2").unwrap().clone())];

    let _ = RecommendationEngine::default().recommend(&catalog, &cart, &["2", "3"]);

    assert_eq!(catalog.products(), before.as_slice());
    assert_eq!(cart[0].quantity, 1);
}
