use rusqlite::{params, Connection};
use scrawl_core::db::open_db_in_memory;
use scrawl_core::{
    AuthorService, PostInput, PostService, PostStatus, SqliteAuthorRepository,
    SqlitePostRepository, SqliteTagRepository, TagService,
};

fn seeded_author(conn: &Connection) -> i64 {
    let service = AuthorService::new(SqliteAuthorRepository::new(conn));
    service
        .register("ann@example.com", "ann", Some("hunter2"))
        .unwrap()
        .id
}

fn input(title: &str, tags: &str) -> PostInput {
    PostInput {
        title: title.to_string(),
        status: PostStatus::Published,
        short_desc: "teaser".to_string(),
        body: "body text".to_string(),
        tags: scrawl_core::parse_tag_names(tags),
    }
}

#[test]
fn submit_derives_slug_and_stores_tags() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    let post = service
        .submit(author_id, &input("Hello, World!", "rust, blogging"))
        .unwrap();

    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.title, "Hello, World!");
    assert!(post.published);
    assert_eq!(post.tags, vec!["blogging".to_string(), "rust".to_string()]);
    assert_eq!(post.tags_as_string(), "blogging,rust");
}

#[test]
fn get_by_slug_resolves_submitted_post() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    let created = service
        .submit(author_id, &input("Hello, World!", ""))
        .unwrap();

    let found = service.get_by_slug("hello-world").unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(service.get_by_slug("no-such-slug").unwrap().is_none());
}

#[test]
fn duplicate_slug_is_rejected_by_store() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    service
        .submit(author_id, &input("Hello, World!", ""))
        .unwrap();
    // Different title, same derived slug.
    assert!(service.submit(author_id, &input("Hello! World?", "")).is_err());
}

#[test]
fn newest_returns_most_recent_first() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);

    let (first_id, second_id) = {
        let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
        let first = service.submit(author_id, &input("First", "")).unwrap();
        let second = service.submit(author_id, &input("Second", "")).unwrap();
        (first.id, second.id)
    };

    conn.execute(
        "UPDATE posts SET created_at = 2000 WHERE id = ?1;",
        params![first_id],
    )
    .unwrap();
    conn.execute(
        "UPDATE posts SET created_at = 1000 WHERE id = ?1;",
        params![second_id],
    )
    .unwrap();

    let service = PostService::new(SqlitePostRepository::new(&mut conn));
    let page = service.newest(Some(10), 0).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, first_id);
    assert_eq!(page.items[1].id, second_id);
}

#[test]
fn newest_limit_defaults_to_10_and_caps_at_50() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    for idx in 0..60 {
        service
            .submit(author_id, &input(&format!("Post {idx}"), ""))
            .unwrap();
    }

    let defaulted = service.newest(None, 0).unwrap();
    assert_eq!(defaulted.applied_limit, 10);
    assert_eq!(defaulted.items.len(), 10);

    let capped = service.newest(Some(500), 0).unwrap();
    assert_eq!(capped.applied_limit, 50);
    assert_eq!(capped.items.len(), 50);
}

#[test]
fn newest_supports_offset_pagination() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    for idx in 0..5 {
        service
            .submit(author_id, &input(&format!("Post {idx}"), ""))
            .unwrap();
    }

    let first_page = service.newest(Some(2), 0).unwrap();
    let second_page = service.newest(Some(2), 2).unwrap();
    assert_eq!(first_page.items.len(), 2);
    assert_eq!(second_page.items.len(), 2);
    assert!(first_page
        .items
        .iter()
        .all(|post| second_page.items.iter().all(|other| other.id != post.id)));
}

#[test]
fn by_author_filters_ownership() {
    let mut conn = open_db_in_memory().unwrap();
    let ann = seeded_author(&conn);
    let bob = {
        let service = AuthorService::new(SqliteAuthorRepository::new(&conn));
        service
            .register("bob@example.com", "bob", None)
            .unwrap()
            .id
    };

    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
    service.submit(ann, &input("Ann writes", "")).unwrap();
    service.submit(bob, &input("Bob writes", "")).unwrap();

    let page = service.by_author(ann, Some(10), 0).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].author_id, ann);
}

#[test]
fn set_tags_replaces_full_set() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
    let post = service
        .submit(author_id, &input("Tag target", "alpha, beta"))
        .unwrap();

    let replaced = service.set_tags(post.id, "gamma").unwrap();
    assert_eq!(replaced.tags, vec!["gamma".to_string()]);

    let cleared = service.set_tags(post.id, "").unwrap();
    assert!(cleared.tags.is_empty());
}

#[test]
fn tag_replacement_bumps_updated_at() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);

    let post_id = {
        let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
        service.submit(author_id, &input("Clock", "")).unwrap().id
    };

    conn.execute(
        "UPDATE posts SET updated_at = 1000 WHERE id = ?1;",
        params![post_id],
    )
    .unwrap();

    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
    let touched = service.set_tags(post_id, "fresh").unwrap();
    assert!(touched.updated_at > 1000);
}

#[test]
fn duplicate_names_in_one_tag_string_share_identity() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);

    {
        let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
        service
            .submit(author_id, &input("Dup tags", "a,b,a"))
            .unwrap();
    }

    let tag_service = TagService::new(SqliteTagRepository::new(&conn));
    let parsed = tag_service.parse_tag_string("a,b,a").unwrap();
    let names: Vec<&str> = parsed.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "a"]);
    assert!(parsed.iter().all(|tag| tag.is_persisted()));
    assert_eq!(parsed[0].id, parsed[2].id);
}

#[test]
fn get_or_create_returns_same_identity_after_persistence() {
    let conn = open_db_in_memory().unwrap();
    let tag_service = TagService::new(SqliteTagRepository::new(&conn));
    use scrawl_core::TagRepository;

    let fresh = tag_service.get_or_create("x").unwrap();
    assert!(!fresh.is_persisted());

    let repo = SqliteTagRepository::new(&conn);
    let stored_id = repo.create_tag(&fresh.name).unwrap();

    let again = tag_service.get_or_create("x").unwrap();
    assert_eq!(again.id, Some(stored_id));

    let once_more = tag_service.get_or_create("x").unwrap();
    assert_eq!(once_more.id, again.id);
}

#[test]
fn all_tags_lists_every_stored_row() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);

    {
        let mut service = PostService::new(SqlitePostRepository::new(&mut conn));
        service
            .submit(author_id, &input("Tagged", "rust, sqlite"))
            .unwrap();
    }

    let tag_service = TagService::new(SqliteTagRepository::new(&conn));
    let all = tag_service.all().unwrap();
    let names: Vec<&str> = all.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["rust", "sqlite"]);
}

#[test]
fn revise_rewrites_content_slug_and_tags() {
    let mut conn = open_db_in_memory().unwrap();
    let author_id = seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    let post = service
        .submit(author_id, &input("Old Title", "old"))
        .unwrap();

    let mut revised_input = input("New Title!", "new");
    revised_input.status = PostStatus::Draft;
    let revised = service.revise(post.id, &revised_input).unwrap();

    assert_eq!(revised.id, post.id);
    assert_eq!(revised.title, "New Title!");
    assert_eq!(revised.slug, "new-title");
    assert!(!revised.published);
    assert_eq!(revised.tags, vec!["new".to_string()]);
}

#[test]
fn tagging_a_missing_post_is_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    seeded_author(&conn);
    let mut service = PostService::new(SqlitePostRepository::new(&mut conn));

    let err = service.set_tags(999, "tag").unwrap_err();
    assert!(matches!(
        err,
        scrawl_core::PostServiceError::PostNotFound(999)
    ));
}
