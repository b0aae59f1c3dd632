use books_scraper::{
    get_book_data, list_book_links, scrape_books, BookRecord, CatalogueConfig, HttpFetcher,
    Rating, Result, ScrapeError,
};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PAGE: &str = include_str!("fixtures/listing_page.html");
const ITEM_PAGE: &str = include_str!("fixtures/item_page.html");

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// One listing page with two items; page 2 is an unmatched route, so 404
async fn catalogue_server() -> MockServer {
    let server = MockServer::start().await;

    mount_page(&server, "/catalogue/page-1.html", LISTING_PAGE).await;
    mount_page(
        &server,
        "/catalogue/a-light-in-the-attic_1000/index.html",
        ITEM_PAGE,
    )
    .await;
    mount_page(
        &server,
        "/catalogue/tipping-the-velvet_999/index.html",
        r#"<h1>Tipping the Velvet</h1>
           <p class="star-rating One"></p>
           <table class="table"><tr><th>UPC</th><td>90fa61229261140a</td></tr></table>"#,
    )
    .await;

    server
}

/// Run a blocking crawl against the mock server off the async runtime
async fn run_blocking<T, F>(config: CatalogueConfig, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&HttpFetcher, &CatalogueConfig) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let fetcher = HttpFetcher::new(&config).unwrap();
        f(&fetcher, &config)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_crawl_over_http() {
    let server = catalogue_server().await;
    let config = CatalogueConfig::for_base_url(&server.uri());

    let books: Vec<BookRecord> = run_blocking(config, |fetcher, config| {
        scrape_books(fetcher, config, false)
    })
    .await
    .unwrap();

    assert_eq!(books.len(), 2);

    let first = &books[0];
    assert!(first.name.as_deref().unwrap().contains("A Light in the Attic"));
    assert_eq!(first.price.as_deref(), Some("£51.77"));
    assert_eq!(first.quantity_in_stock.as_deref(), Some("22"));
    assert!(first.description.is_some());
    assert!(!first.extra_feature.is_empty());

    for book in &books {
        if let Some(token) = &book.rating {
            assert!(Rating::parse(token).is_some(), "unexpected rating {}", token);
        }
    }
    assert_eq!(books[1].star_rating(), Some(Rating::One));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_crawl_twice_gives_same_length() {
    let server = catalogue_server().await;
    let config = CatalogueConfig::for_base_url(&server.uri());

    let (first, second) = run_blocking(config, |fetcher, config| {
        (
            scrape_books(fetcher, config, false).unwrap(),
            scrape_books(fetcher, config, false).unwrap(),
        )
    })
    .await;

    assert_eq!(first.len(), second.len());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_listing_page_is_fetched_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/catalogue/page-1.html", LISTING_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-2.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-3.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let config = CatalogueConfig::for_base_url(&server.uri());
    let links = run_blocking(config, |fetcher, config| list_book_links(fetcher, config)).await;

    assert_eq!(links.len(), 2);
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_ends_pagination_with_partial_links() {
    let server = MockServer::start().await;
    mount_page(&server, "/catalogue/page-1.html", LISTING_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-2.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = CatalogueConfig::for_base_url(&server.uri());
    let links = run_blocking(config, |fetcher, config| list_book_links(fetcher, config)).await;

    assert_eq!(
        links,
        vec![
            "a-light-in-the-attic_1000/index.html",
            "tipping-the-velvet_999/index.html",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_listing_timeout_ends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = CatalogueConfig::for_base_url(&server.uri()).with_timeout_secs(1);
    let links = run_blocking(config, |fetcher, config| list_book_links(fetcher, config)).await;

    assert!(links.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_item_is_an_error() {
    let server = catalogue_server().await;
    let config = CatalogueConfig::for_base_url(&server.uri());
    let url = config.item_url("gone_1/index.html");

    let result: Result<BookRecord> =
        run_blocking(config, move |fetcher, _| get_book_data(fetcher, &url)).await;

    match result {
        Err(e @ ScrapeError::Status { status: 404, .. }) => assert!(e.is_not_found()),
        other => panic!("expected 404, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_body_decoded_as_utf8_whatever_the_header_says() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogue/item_1/index.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<p class=\"price_color\">£12.50</p>".as_bytes().to_vec(),
            "text/html; charset=ISO-8859-1",
        ))
        .mount(&server)
        .await;

    let config = CatalogueConfig::for_base_url(&server.uri());
    let url = config.item_url("item_1/index.html");
    let book = run_blocking(config, move |fetcher, _| get_book_data(fetcher, &url))
        .await
        .unwrap();

    assert_eq!(book.price.as_deref(), Some("£12.50"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_item_is_dropped() {
    let server = catalogue_server().await;
    // Overrides the mounted item page; wiremock picks the highest priority match
    Mock::given(method("GET"))
        .and(path("/catalogue/tipping-the-velvet_999/index.html"))
        .respond_with(ResponseTemplate::new(502))
        .with_priority(1)
        .mount(&server)
        .await;

    let config = CatalogueConfig::for_base_url(&server.uri());
    let books = run_blocking(config, |fetcher, config| scrape_books(fetcher, config, false))
        .await
        .unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].name.as_deref(), Some("A Light in the Attic"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_save_writes_dump() {
    let server = catalogue_server().await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("artifacts").join("books_data.txt");
    let config = CatalogueConfig::for_base_url(&server.uri()).with_output_path(&output);

    let books = run_blocking(config, |fetcher, config| scrape_books(fetcher, config, true))
        .await
        .unwrap();

    let dump = std::fs::read_to_string(&output).unwrap();
    assert_eq!(dump.lines().count(), books.len());
}
