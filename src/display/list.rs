//! List overview formatting

use crate::models::BakeSaleList;

/// Format the list overview as a table of name, item count, and id
pub fn format_list_overview(lists: &[BakeSaleList]) -> String {
    if lists.is_empty() {
        return "No lists yet. Create one with `bakesale list add` or import a file.\n".to_string();
    }

    let name_width = lists
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {}\n",
        "Name",
        "Items",
        "Id",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->5}  {:-<13}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for list in lists {
        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {}\n",
            list.name,
            list.item_count(),
            list.id,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BakeSaleItem;

    #[test]
    fn test_format_overview() {
        let mut market = BakeSaleList::new("Saturday Market");
        market.items.push(BakeSaleItem::named("Cookies"));
        let fair = BakeSaleList::new("School Fair");

        let output = format_list_overview(&[market, fair]);
        assert!(output.contains("Saturday Market"));
        assert!(output.contains("School Fair"));
        assert!(output.contains("list-"));
    }

    #[test]
    fn test_format_empty_overview() {
        let output = format_list_overview(&[]);
        assert!(output.contains("No lists yet"));
    }
}
