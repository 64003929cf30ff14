use bukurec::{
    Book, CorpusConfig, CorpusError, PreprocessConfig, RecommendConfig, RecommendError,
    RecommendRequest, TargetSelector, VectorizeConfig, VectorizeError, recommend_books,
    recommend_books_with_configs,
};

fn shelf() -> Vec<Book> {
    vec![
        Book::new("b-1", "Kucing Hutan", "fantasi", "Kucing menjelajahi hutan."),
        Book::new("b-2", "Anjing Gunung", "petualangan", "Anjing mendaki gunung."),
    ]
}

#[test]
fn empty_shelf_is_an_empty_corpus() {
    let err = recommend_books(&[], &RecommendRequest::by_id("b-1")).unwrap_err();
    assert_eq!(
        err,
        RecommendError::Corpus(CorpusError::EmptyCorpus {
            supplied: 0,
            excluded: 0
        })
    );
}

#[test]
fn fully_malformed_shelf_reports_both_counts() {
    let books = vec![
        Book::new("", "Tanpa Id", "drama", ""),
        Book::new("b-2", "   ", "drama", ""),
        Book::new("b-3", "Tanpa Genre", "", ""),
    ];

    let err = recommend_books(&books, &RecommendRequest::by_id("b-3")).unwrap_err();
    assert_eq!(
        err,
        RecommendError::Corpus(CorpusError::EmptyCorpus {
            supplied: 3,
            excluded: 3
        })
    );
    assert!(err.to_string().contains("3 books supplied"));
}

#[test]
fn unknown_id_is_terminal_and_names_the_selector() {
    let err = recommend_books(&shelf(), &RecommendRequest::by_id("b-404")).unwrap_err();

    assert_eq!(
        err,
        RecommendError::TargetNotFound {
            selector: TargetSelector::Id("b-404".to_string())
        }
    );
    assert!(err.to_string().contains("b-404"));
}

#[test]
fn unknown_title_fragment_is_terminal() {
    let err = recommend_books(&shelf(), &RecommendRequest::by_title("naga emas")).unwrap_err();
    assert!(matches!(err, RecommendError::TargetNotFound { .. }));
}

#[test]
fn excluded_book_cannot_be_a_target() {
    let mut books = shelf();
    books.push(Book::new("b-3", "Tanpa Genre", "", "Sinopsis ada."));

    let err = recommend_books(&books, &RecommendRequest::by_id("b-3")).unwrap_err();
    assert!(matches!(err, RecommendError::TargetNotFound { .. }));
}

#[test]
fn zero_result_cap_is_rejected() {
    let err = recommend_books(&shelf(), &RecommendRequest::by_id("b-1").with_top_n(0)).unwrap_err();
    assert!(matches!(err, RecommendError::InvalidRequest(_)));

    let err = recommend_books_with_configs(
        &shelf(),
        &RecommendRequest::by_id("b-1"),
        &CorpusConfig::default(),
        &PreprocessConfig::default(),
        &VectorizeConfig::default(),
        &RecommendConfig::new().with_top_n(0),
    )
    .unwrap_err();
    assert!(matches!(err, RecommendError::InvalidConfig(_)));
}

#[test]
fn invalid_stage_configs_surface_with_their_own_types() {
    let corpus_err = recommend_books_with_configs(
        &shelf(),
        &RecommendRequest::by_id("b-1"),
        &CorpusConfig::new().with_version(0),
        &PreprocessConfig::default(),
        &VectorizeConfig::default(),
        &RecommendConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        corpus_err,
        RecommendError::Corpus(CorpusError::InvalidConfig(_))
    ));

    let bad_preprocess = PreprocessConfig {
        version: 0,
        ..Default::default()
    };
    let preprocess_err = recommend_books_with_configs(
        &shelf(),
        &RecommendRequest::by_id("b-1"),
        &CorpusConfig::default(),
        &bad_preprocess,
        &VectorizeConfig::default(),
        &RecommendConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(preprocess_err, RecommendError::Preprocess(_)));

    let vectorize_err = recommend_books_with_configs(
        &shelf(),
        &RecommendRequest::by_id("b-1"),
        &CorpusConfig::default(),
        &PreprocessConfig::default(),
        &VectorizeConfig::new().with_version(0),
        &RecommendConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        vectorize_err,
        RecommendError::Vectorize(VectorizeError::InvalidConfigVersion { version: 0 })
    );
}

#[test]
fn blank_selector_text_is_rejected_up_front() {
    let err = recommend_books(&shelf(), &RecommendRequest::by_title("  ")).unwrap_err();
    assert!(matches!(err, RecommendError::InvalidRequest(_)));
}

#[test]
fn error_messages_are_human_readable() {
    let err = RecommendError::Corpus(CorpusError::EmptyCorpus {
        supplied: 2,
        excluded: 2,
    });
    assert_eq!(
        err.to_string(),
        "corpus is empty: 2 books supplied, 2 excluded as malformed"
    );

    let err = RecommendError::TargetNotFound {
        selector: TargetSelector::Title("senja".to_string()),
    };
    assert_eq!(err.to_string(), "target not found: no book matches title \"senja\"");
}
