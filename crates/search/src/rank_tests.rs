use chrono::Utc;
use gamedex_core::GameAttributes;

use super::*;

fn game(id: &str, attributes: GameAttributes) -> CatalogItem {
    let now = Utc::now();
    CatalogItem { id: id.to_owned(), attributes, created_at: now, updated_at: now }
}

fn board_game(id: &str, title: &str, description: &str) -> CatalogItem {
    game(
        id,
        GameAttributes {
            title: title.to_owned(),
            description: Some(description.to_owned()),
            category: Some("Board Game".to_owned()),
            genre: Some("Strategy".to_owned()),
            year: Some(1995),
            ..GameAttributes::default()
        },
    )
}

fn collection() -> Vec<CatalogItem> {
    vec![
        board_game("1", "Carcassonne", "Tile placement in medieval France"),
        board_game("2", "Catan", "Trade, build and settle an island"),
        game(
            "3",
            GameAttributes {
                title: "Halo: Combat Evolved".to_owned(),
                category: Some("Video Game".to_owned()),
                genre: Some("Shooter".to_owned()),
                platform: Some("Xbox".to_owned()),
                year: Some(2001),
                ..GameAttributes::default()
            },
        ),
        game(
            "4",
            GameAttributes {
                title: "Halo".to_owned(),
                category: Some("Video Game".to_owned()),
                platform: Some("Xbox".to_owned()),
                ..GameAttributes::default()
            },
        ),
    ]
}

fn ids(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_blank_query_is_identity() {
    let items = collection();
    assert_eq!(search(&items, ""), items);
    assert_eq!(search(&items, "   \t"), items);
}

#[test]
fn test_typo_ranks_intended_title_first() {
    let items = collection();
    let results = search(&items, "catn");
    assert_eq!(results.first().map(CatalogItem::title), Some("Catan"));
    assert!(!ids(&results).contains(&"1"), "Carcassonne should be outside tolerance");
}

#[test]
fn test_exact_title_ranks_first() {
    let items = collection();
    let results = search(&items, "HALO");
    assert_eq!(ids(&results), vec!["4", "3"]);

    let hits = rank(&items, "halo", &SearchConfig::default());
    assert_eq!(hits[0].tier, MatchTier::ExactTitle);
    assert_eq!(hits[1].tier, MatchTier::Substring);
}

#[test]
fn test_exact_title_beats_many_secondary_matches() {
    let mut items = vec![game(
        "noise",
        GameAttributes {
            title: "Something Else".to_owned(),
            description: Some("xbox".to_owned()),
            category: Some("xbox".to_owned()),
            genre: Some("xbox".to_owned()),
            platform: Some("xbox".to_owned()),
            ..GameAttributes::default()
        },
    )];
    items.push(game("exact", GameAttributes::new("Xbox")));
    let results = search(&items, "xbox");
    assert_eq!(ids(&results), vec!["exact", "noise"]);
}

#[test]
fn test_no_match_excluded() {
    let items = collection();
    assert!(search(&items, "monopoly").is_empty());
}

#[test]
fn test_matches_secondary_fields() {
    let items = collection();
    let results = search(&items, "shooter");
    assert_eq!(ids(&results), vec!["3"]);

    let results = search(&items, "2001");
    assert_eq!(ids(&results), vec!["3"]);
}

#[test]
fn test_search_is_deterministic() {
    let items = collection();
    for query in ["board", "xbox", "catn", "strategy 1995"] {
        assert_eq!(search(&items, query), search(&items, query), "query: {query}");
    }
}

#[test]
fn test_equal_scores_keep_collection_order() {
    let items = vec![
        board_game("b", "Azul", "Tiles"),
        board_game("a", "Azul", "Tiles"),
    ];
    assert_eq!(ids(&search(&items, "azul")), vec!["b", "a"]);
}

#[test]
fn test_search_does_not_mutate_collection() {
    let items = collection();
    let before = items.clone();
    let _ = search(&items, "halo");
    assert_eq!(items, before);
}

#[test]
fn test_title_weighs_more_than_description() {
    let items = vec![
        game(
            "description",
            GameAttributes {
                title: "Unrelated".to_owned(),
                description: Some("Deluxe Edition".to_owned()),
                ..GameAttributes::default()
            },
        ),
        game("title", GameAttributes::new("Deluxe Edition")),
    ];
    let hits = rank(&items, "deluxe", &SearchConfig::default());
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].item.id, "title");
    assert!(hits[0].score < hits[1].score);
}

#[test]
fn test_stricter_threshold_drops_typos() {
    let items = collection();
    let strict = SearchConfig { threshold: 0.1, ..SearchConfig::default() };
    assert!(search_with(&items, "catn", &strict).is_empty());
}

#[test]
fn test_exact_genre_outranks_partial_title_in_same_tier() {
    let items = vec![
        game("title", GameAttributes::new("Shooter Deluxe Collection")),
        game(
            "genre",
            GameAttributes {
                title: "Halo".to_owned(),
                genre: Some("Shooter".to_owned()),
                ..GameAttributes::default()
            },
        ),
    ];
    let hits = rank(&items, "shooter", &SearchConfig::default());
    assert_eq!(hits.iter().map(|h| h.item.id.as_str()).collect::<Vec<_>>(), vec!["genre", "title"]);
    assert!(hits.iter().all(|h| h.tier == MatchTier::Substring));
}
