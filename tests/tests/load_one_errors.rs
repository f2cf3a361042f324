use tests::{
    fixtures::{albums, Album},
    tests, DbTest,
};

async fn all_zero_record_is_rejected(test: &mut DbTest) {
    let seed = albums(test);
    let mut db = test.setup_db(&seed).await;

    let mut album = Album::default();
    let err = db.load_one(&mut album).await.unwrap_err();

    assert!(err.is_empty_predicate(), "{err}");
    assert!(test.log().is_empty());
    assert_eq!(album, Album::default());
}

async fn no_matching_row(test: &mut DbTest) {
    let seed = albums(test);
    let mut db = test.setup_db(&seed).await;

    let mut album = Album {
        id: 42,
        title: "Kind of Blue".to_string(),
        ..Album::default()
    };
    let before = album.clone();

    let err = db.load_one(&mut album).await.unwrap_err();

    assert!(err.is_record_not_found(), "{err}");
    assert_eq!(test.log().len(), 1);
    assert_eq!(album, before);
}

async fn invalid_schema_submits_nothing(test: &mut DbTest) {
    #[derive(Debug, Default, Clone, PartialEq, jorm::Model)]
    struct Clash {
        #[column("name")]
        first: String,
        name: String,
    }

    let mut db = test.setup_db(&[]).await;

    let mut record = Clash {
        first: "a".to_string(),
        name: "b".to_string(),
    };
    let before = record.clone();

    let err = db.load_one(&mut record).await.unwrap_err();

    assert!(err.is_invalid_schema(), "{err}");
    assert!(test.log().is_empty());
    assert_eq!(record, before);
}

async fn missing_table_is_a_driver_error(test: &mut DbTest) {
    let mut db = test.setup_db(&[]).await;

    let mut album = Album {
        id: 1,
        ..Album::default()
    };
    let err = db.load_one(&mut album).await.unwrap_err();

    assert!(err.is_driver(), "{err}");
    assert_eq!(test.log().len(), 1);
    assert_eq!(album.title, "");
}

async fn null_cell_is_a_decode_error(test: &mut DbTest) {
    let mut seed = albums(test);
    seed.push(format!(
        "INSERT INTO {} VALUES (4, NULL, 'Anonymous', 1.5)",
        test.table("album")
    ));
    let mut db = test.setup_db(&seed).await;

    let mut album = Album {
        id: 4,
        ..Album::default()
    };
    let err = db.load_one(&mut album).await.unwrap_err();

    assert!(err.is_decode(), "{err}");
    assert!(err.to_string().contains("`title`"), "{err}");
}

async fn unparseable_text_is_a_decode_error(test: &mut DbTest) {
    #[derive(Debug, Default, jorm::Model)]
    #[table = "album"]
    struct MisTyped {
        id: i64,
        // Stored as text, declared as an integer
        title: i64,
    }

    let seed = albums(test);
    let mut db = test.setup_db(&seed).await;

    let mut record = MisTyped {
        id: 1,
        ..MisTyped::default()
    };
    let err = db.load_one(&mut record).await.unwrap_err();

    assert!(err.is_decode(), "{err}");
    assert!(err.to_string().contains("`title`"), "{err}");
    assert_eq!(record.id, 1);
}

tests!(
    all_zero_record_is_rejected,
    no_matching_row,
    invalid_schema_submits_nothing,
    missing_table_is_a_driver_error,
    null_cell_is_a_decode_error,
    unparseable_text_is_a_decode_error,
);
