use crate::collection::OrderCollection;
use crate::error::DatastoreError;
use core_types::Order;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Bulk-loads the JSON fixture at `path` into a fresh `OrderCollection`.
///
/// The fixture must be a JSON array of order objects. Unknown fields on a
/// record are ignored and missing fields are tolerated (they deserialize to
/// `None`), but an unreadable file or malformed JSON aborts the load: no
/// data means no meaningful report.
pub fn load_fixture(path: &Path) -> Result<OrderCollection, DatastoreError> {
    let file = File::open(path).map_err(|source| DatastoreError::FixtureRead {
        path: path.to_path_buf(),
        source,
    })?;

    let orders: Vec<Order> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            DatastoreError::FixtureMalformed {
                path: path.to_path_buf(),
                source,
            }
        })?;

    info!(path = %path.display(), records = orders.len(), "fixture loaded");

    Ok(OrderCollection::from_orders(orders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_with_missing_and_extra_fields() {
        let file = write_fixture(
            r#"[
                {"order_id": 1, "state": "California", "total_price": 1500.5,
                 "unexpected_field": "ignored"},
                {"city": "Austin"}
            ]"#,
        );

        let collection = load_fixture(file.path()).unwrap();
        assert_eq!(collection.len(), 2);

        let first = &collection.orders()[0];
        assert_eq!(first.order_id, Some(1));
        assert_eq!(first.state.as_deref(), Some("California"));
        assert!(first.total_price.is_some());

        let second = &collection.orders()[1];
        assert_eq!(second.order_id, None);
        assert_eq!(second.city.as_deref(), Some("Austin"));
    }

    #[test]
    fn empty_array_is_a_valid_empty_collection() {
        let file = write_fixture("[]");
        let collection = load_fixture(file.path()).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = load_fixture(Path::new("/no/such/fixture.json"));
        assert!(matches!(result, Err(DatastoreError::FixtureRead { .. })));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let file = write_fixture("{ not json ]");
        let result = load_fixture(file.path());
        assert!(matches!(
            result,
            Err(DatastoreError::FixtureMalformed { .. })
        ));
    }

    #[test]
    fn non_array_root_is_rejected() {
        let file = write_fixture(r#"{"order_id": 1}"#);
        assert!(load_fixture(file.path()).is_err());
    }
}
