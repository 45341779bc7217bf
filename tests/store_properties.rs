//! Property tests for the post store operations.

use atomic_blog::store::PostStore;
use atomic_blog::Post;
use proptest::prelude::*;

fn post() -> impl Strategy<Value = Post> {
    ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,24}").prop_map(|(title, body)| Post::new(title, body))
}

fn posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(post(), 0..40)
}

/// `needle` appears in `haystack` in order, not necessarily contiguously.
fn is_ordered_subset(needle: &[Post], haystack: &[Post]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn add_post_prepends(existing in posts(), new in post()) {
        let mut store = PostStore::with_posts(existing.clone());
        store.add_post(new.clone());

        prop_assert_eq!(store.posts().len(), existing.len() + 1);
        prop_assert_eq!(&store.posts()[0], &new);
        prop_assert_eq!(&store.posts()[1..], &existing[..]);
    }

    #[test]
    fn clear_posts_is_idempotent(existing in posts()) {
        let mut store = PostStore::with_posts(existing);
        store.clear_posts();
        prop_assert!(store.posts().is_empty());
        let revision = store.revision();

        store.clear_posts();
        prop_assert!(store.posts().is_empty());
        prop_assert_eq!(store.revision(), revision);
    }

    #[test]
    fn empty_query_shows_everything(existing in posts()) {
        let store = PostStore::with_posts(existing.clone());
        let visible = store.visible_posts();
        prop_assert_eq!(&*visible, &existing[..]);
    }

    #[test]
    fn filtered_view_is_an_ordered_subset(existing in posts(), query in "[a-zA-Z ]{0,4}") {
        let mut store = PostStore::with_posts(existing.clone());
        store.set_search_query(query.clone());
        let visible = store.visible_posts();

        prop_assert!(is_ordered_subset(&visible, &existing));
        prop_assert!(visible.iter().all(|p| p.matches(&query)));
        let matching = existing.iter().filter(|p| p.matches(&query)).count();
        prop_assert_eq!(visible.len(), matching);
    }

    #[test]
    fn case_does_not_change_results(existing in posts(), query in "[a-zA-Z]{1,3}") {
        let mut store = PostStore::with_posts(existing);
        store.set_search_query(query.to_lowercase());
        let lower = store.visible_posts().to_vec();
        store.set_search_query(query.to_uppercase());
        let upper = store.visible_posts();
        prop_assert_eq!(&*upper, &lower[..]);
    }
}
