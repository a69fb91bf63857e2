/// All primary keys are store-assigned SQLite `INTEGER PRIMARY KEY` values.
pub type DbId = i64;
