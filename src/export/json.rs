//! JSON export of a single list
//!
//! Writes one list record (with its nested items) as pretty-printed JSON.
//! The suggested filename derives from the list name.

use std::io::Write;

use crate::error::{BakeSaleError, BakeSaleResult};
use crate::models::BakeSaleList;

/// Serialize one list to a writer as pretty-printed JSON
pub fn export_list_json<W: Write>(list: &BakeSaleList, writer: &mut W) -> BakeSaleResult<()> {
    serde_json::to_writer_pretty(writer, list)
        .map_err(|e| BakeSaleError::Export(e.to_string()))?;
    Ok(())
}

/// Derive the export filename for a list: whitespace runs become
/// underscores, suffixed `_bakesale.json`
pub fn export_filename(list_name: &str) -> String {
    let stem = list_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_bakesale.json", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BakeSaleItem;

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Saturday Market"), "Saturday_Market_bakesale.json");
        assert_eq!(export_filename("Fair"), "Fair_bakesale.json");
        assert_eq!(
            export_filename("spring   school  fair"),
            "spring_school_fair_bakesale.json"
        );
        assert_eq!(export_filename(""), "_bakesale.json");
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let mut list = BakeSaleList::new("Market");
        list.items.push(BakeSaleItem::named("Cookies"));

        let mut out = Vec::new();
        export_list_json(&list, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains('\n'));
        assert!(text.contains("\"itemName\": \"Cookies\""));
    }

    #[test]
    fn test_export_parses_back() {
        let mut list = BakeSaleList::new("Market");
        let mut item = BakeSaleItem::named("Cookies");
        item.batches = 2.0;
        item.cost_per_batch = 5.0;
        list.items.push(item);

        let mut out = Vec::new();
        export_list_json(&list, &mut out).unwrap();

        let parsed: BakeSaleList = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, list);
    }
}
