use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct Flag {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let test_db = common::TestDb::new("test_foreign_keys_are_enforced.db");
    let mut conn = test_db.pool().get().unwrap();

    let flag = sql_query("PRAGMA foreign_keys")
        .get_result::<Flag>(&mut conn)
        .unwrap();
    assert_eq!(flag.foreign_keys, 1);

    let orphan = sql_query("INSERT INTO wallets (hub_id, currency_id) VALUES (1, 999)")
        .execute(&mut conn);
    assert!(orphan.is_err());
}
