use pretty_assertions::assert_eq;
use tests::{tests, DbTest};

async fn naive_snake_case(test: &mut DbTest) {
    #[allow(non_snake_case)]
    #[derive(Debug, Default, jorm::Model)]
    struct UserAccount {
        Id: i64,
        CreatedAt: i64,
        HTTPCode: i64,
    }

    let table = test.table("user_account");
    let mut db = test
        .setup_db(&[
            format!("CREATE TABLE {table} (id BIGINT, created_at BIGINT, h_t_t_p_code BIGINT)"),
            format!("INSERT INTO {table} VALUES (7, 1700000000, 404)"),
        ])
        .await;

    let schema = db.schema_of::<UserAccount>().unwrap();
    assert_eq!(schema.table.name, table);
    assert_eq!(
        schema.table.column_names(),
        ["id", "created_at", "h_t_t_p_code"]
    );

    let mut account = UserAccount {
        Id: 7,
        ..UserAccount::default()
    };
    db.load_one(&mut account).await.unwrap();

    assert_eq!(account.CreatedAt, 1_700_000_000);
    assert_eq!(account.HTTPCode, 404);
}

async fn column_and_table_overrides(test: &mut DbTest) {
    #[derive(Debug, Default, jorm::Model)]
    #[table = "records"]
    struct Record {
        #[column("record_id")]
        id: i64,

        #[column("record_title")]
        title: String,

        price: f32,
    }

    let table = test.table("records");
    let mut db = test
        .setup_db(&[
            format!("CREATE TABLE {table} (record_id BIGINT, record_title VARCHAR(255), price FLOAT)"),
            format!("INSERT INTO {table} VALUES (9, 'Ballads', 12.5)"),
        ])
        .await;

    let mut record = Record {
        id: 9,
        ..Record::default()
    };
    db.load_one(&mut record).await.unwrap();

    assert_eq!(record.title, "Ballads");
    assert_eq!(record.price, 12.5);
    assert_eq!(
        test.log().last().sql,
        format!("SELECT record_id, record_title, price FROM {table} WHERE  record_id = ?  ;")
    );
}

async fn raw_identifiers(test: &mut DbTest) {
    #[derive(Debug, Default, jorm::Model)]
    struct Track {
        id: i64,
        r#type: String,
    }

    let table = test.table("track");
    let mut db = test
        .setup_db(&[
            format!("CREATE TABLE {table} (id BIGINT, type VARCHAR(255))"),
            format!("INSERT INTO {table} VALUES (1, 'single')"),
        ])
        .await;

    let mut track = Track {
        id: 1,
        ..Track::default()
    };
    db.load_one(&mut track).await.unwrap();

    assert_eq!(track.r#type, "single");
}

tests!(naive_snake_case, column_and_table_overrides, raw_identifiers);
