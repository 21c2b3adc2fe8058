#![allow(clippy::unwrap_used, clippy::expect_used)]

use parking_lot::Mutex;
use pathrouter::pattern::{seq, Literal, OptionalParameter, Parameter};
use pathrouter::{DeepLink, UrlRouter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

fn url(input: &str) -> Url {
    Url::parse(input).expect("test URL must parse")
}

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    (Arc::clone(&count), count)
}

#[test]
fn test_single_route_receives_url() {
    let received: Arc<Mutex<Option<Url>>> = Arc::new(Mutex::new(None));
    let mut router = UrlRouter::new();
    let sink = Arc::clone(&received);
    router.add(seq().then(Literal::new("search")), move |link: &DeepLink, ()| {
        *sink.lock() = Some(link.url().clone());
    });

    let target = url("https://example.com/search");
    assert!(router.handle(&target));
    assert_eq!(*received.lock(), Some(target));
}

#[test]
fn test_non_matching_route_not_called() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add(seq().then(Literal::new("search")), move |_, ()| {
        handle.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!router.handle(&url("https://example.com/profile")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_root_and_host_only_urls_match_empty_pattern() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add(seq(), move |_, ()| {
        handle.fetch_add(1, Ordering::SeqCst);
    });

    assert!(router.handle(&url("https://example.com/")));
    assert!(router.handle(&url("https://example.com")));
    assert!(!router.handle(&url("https://example.com/x")));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_parameter_extraction() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut router = UrlRouter::new();

    let sink = Arc::clone(&captured);
    router.add(
        seq()
            .then(Literal::new("users"))
            .then(Parameter)
            .then(Literal::new("posts"))
            .then(Parameter),
        move |_, (user, post): (String, String)| {
            sink.lock().push(format!("{user}/{post}"));
        },
    );

    assert!(router.handle(&url("https://example.com/users/john/posts/456")));
    assert_eq!(*captured.lock(), vec!["john/456".to_string()]);
}

#[test]
fn test_optional_parameter_present_and_absent() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut router = UrlRouter::new();
    let sink = Arc::clone(&seen);
    router.add(
        seq().then(Literal::new("search")).then(OptionalParameter),
        move |_, query: Option<String>| sink.lock().push(query),
    );

    assert!(router.handle(&url("https://example.com/search/rust")));
    assert!(router.handle(&url("https://example.com/search")));
    assert!(router.handle(&url("https://example.com/search/")));
    assert_eq!(
        *seen.lock(),
        vec![Some("rust".to_string()), None, None]
    );
}

#[test]
fn test_first_matching_route_wins() {
    let (first, first_handle) = counter();
    let (second, second_handle) = counter();
    let mut router = UrlRouter::new();
    router.add(seq().then(Literal::new("users")).then(Parameter), move |_, _| {
        first_handle.fetch_add(1, Ordering::SeqCst);
    });
    router.add(seq().then(Literal::new("users")).then(Parameter), move |_, _| {
        second_handle.fetch_add(1, Ordering::SeqCst);
    });

    assert!(router.handle(&url("https://example.com/users/123")));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

#[test]
fn test_specific_and_general_routes_in_either_order() {
    for specific_first in [true, false] {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let mut router = UrlRouter::new();

        let specific = {
            let sink = Arc::clone(&hits);
            move |_: &DeepLink, (user, post): (String, String)| {
                sink.lock().push(format!("post:{user}/{post}"));
            }
        };
        let general = {
            let sink = Arc::clone(&hits);
            move |_: &DeepLink, user: String| sink.lock().push(format!("user:{user}"))
        };
        let post_pattern = seq()
            .then(Literal::new("users"))
            .then(Parameter)
            .then(Literal::new("posts"))
            .then(Parameter);
        let user_pattern = seq().then(Literal::new("users")).then(Parameter);

        if specific_first {
            router.add(post_pattern, specific).add(user_pattern, general);
        } else {
            router.add(user_pattern, general).add(post_pattern, specific);
        }

        assert!(router.handle(&url("https://example.com/users/john/posts/123")));
        assert!(router.handle(&url("https://example.com/users/john")));
        assert_eq!(
            *hits.lock(),
            vec!["post:john/123".to_string(), "user:john".to_string()]
        );
    }
}

#[test]
fn test_query_and_fragment_pass_through() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut router = UrlRouter::new();

    let sink = Arc::clone(&seen);
    router.add(seq().then(Literal::new("users")).then(Parameter), move |link, id| {
        sink.lock().push((
            id,
            link.query().map(str::to_owned),
            link.get_query_param("tab").map(str::to_owned),
        ));
    });
    let sink = Arc::clone(&seen);
    router.add(seq().then(Literal::new("docs")).then(Parameter), move |link, page| {
        sink.lock()
            .push((page, link.fragment().map(str::to_owned), None));
    });

    assert!(router.handle(&url("https://example.com/users/123?tab=profile&view=full")));
    assert!(router.handle(&url("https://example.com/docs/readme#section1")));
    assert_eq!(
        *seen.lock(),
        vec![
            (
                "123".to_string(),
                Some("tab=profile&view=full".to_string()),
                Some("profile".to_string())
            ),
            ("readme".to_string(), Some("section1".to_string()), None),
        ]
    );
}

#[test]
fn test_schemes_are_ignored() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add(
        seq().then(Literal::new("app")).then(Literal::new("open")),
        move |_, ()| {
            handle.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert!(router.handle(&url("http://example.com/app/open")));
    assert!(router.handle(&url("https://example.com/app/open")));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_custom_scheme_host_is_not_a_segment() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add(seq().then(Literal::new("open")), move |_, ()| {
        handle.fetch_add(1, Ordering::SeqCst);
    });

    assert!(router.handle(&url("myapp://app/open")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_complete_app_routing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut router = UrlRouter::new();

    let sink = Arc::clone(&log);
    router.add(seq().then(Literal::new("users")).then(Parameter), move |_, id| {
        sink.lock().push(format!("user:{id}"));
    });
    let sink = Arc::clone(&log);
    router.add(
        seq()
            .then(Literal::new("users"))
            .then(Parameter)
            .then(Literal::new("posts"))
            .then(Parameter),
        move |_, (user, post)| sink.lock().push(format!("post:{user}/{post}")),
    );
    let sink = Arc::clone(&log);
    router.add(seq().then(Literal::new("settings")), move |_, ()| {
        sink.lock().push("settings".to_string());
    });
    let sink = Arc::clone(&log);
    router.add(
        seq().then(Literal::new("search")).then(OptionalParameter),
        move |_, query| {
            let query: Option<String> = query;
            sink.lock()
                .push(format!("search:{}", query.as_deref().unwrap_or("none")));
        },
    );

    for input in [
        "https://example.com/users/alice",
        "https://example.com/users/alice/posts/post-123",
        "https://example.com/settings",
        "https://example.com/search/rust",
        "https://example.com/search",
    ] {
        assert!(router.handle_str(input).unwrap(), "{input}");
    }
    assert_eq!(
        *log.lock(),
        vec![
            "user:alice",
            "post:alice/post-123",
            "settings",
            "search:rust",
            "search:none"
        ]
    );
}

#[test]
fn test_percent_encoded_and_unicode_segments_are_decoded() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut router = UrlRouter::new();
    let sink = Arc::clone(&seen);
    router.add(seq().then(Parameter).then(Parameter), move |_, pair| {
        sink.lock().push(pair);
    });

    assert!(router.handle(&url("https://example.com/search/hello%20world")));
    assert!(router.handle(&url("https://example.com/users/사용자")));
    assert!(router.handle(&url("https://example.com/files/a%2Fb")));
    assert_eq!(
        *seen.lock(),
        vec![
            ("search".to_string(), "hello world".to_string()),
            ("users".to_string(), "사용자".to_string()),
            ("files".to_string(), "a/b".to_string()),
        ]
    );
}

#[test]
fn test_multi_segment_and_case_insensitive_literals() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add(
        seq()
            .then(Literal::case_insensitive("API"))
            .then(Literal::case_insensitive("Users"))
            .then(Parameter),
        move |_, _| {
            handle.fetch_add(1, Ordering::SeqCst);
        },
    );
    let ids = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&ids);
    router.add(
        seq().then(Literal::new("api/v2/users")).then(Parameter),
        move |_, id| sink.lock().push(id),
    );

    assert!(router.handle_str("https://example.com/api/users/123").unwrap());
    assert!(router.handle_str("https://example.com/API/USERS/456").unwrap());
    assert!(router.handle_str("https://example.com/Api/Users/789").unwrap());
    assert!(router.handle_str("https://example.com/api/v2/users/123").unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(*ids.lock(), vec!["123".to_string()]);
}

#[test]
fn test_no_routes_registered() {
    let router = UrlRouter::new();
    assert!(router.is_empty());
    assert!(!router.handle(&url("https://example.com/anything")));
}

#[test]
fn test_handle_str_rejects_invalid_url() {
    let router = UrlRouter::new();
    let err = router.handle_str("not a url").unwrap_err();
    assert!(err.to_string().contains("Invalid deep link URL"));
    assert!(router.handle_str("https://example.com/").is_ok());
}

#[test]
fn test_handle_link_reuses_parsed_link() {
    let (calls, handle) = counter();
    let mut router = UrlRouter::new();
    router.add_labeled("settings", seq().then(Literal::new("settings")), move |_, ()| {
        handle.fetch_add(1, Ordering::SeqCst);
    });

    let link = DeepLink::parse("https://example.com/settings?from=push").unwrap();
    assert_eq!(link.segments(), &["settings".to_string()]);
    assert!(router.handle_link(&link));
    assert!(router.handle_link(&link));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(router.routes().labels().collect::<Vec<_>>(), vec!["settings"]);
}
