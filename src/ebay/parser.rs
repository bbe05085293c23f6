//! XML parsing for `GetMyeBaySellingResponse` documents.

use crate::ebay::models::ListingBook;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

/// One listing item while its XML subtree is being read.
#[derive(Debug, Default)]
struct PendingItem {
    title: Option<String>,
    price_text: Option<String>,
}

/// Extracts the active listings from a `GetMyeBaySellingResponse` document.
///
/// Items are read from `ActiveList/ItemArray/Item` as they stream by, so a
/// response with a single `Item` and one with many parse identically. Items
/// missing a title or a parseable current price are skipped with a warning
/// rather than failing the whole export. Only the first `CurrentPrice` text
/// value per item is taken.
pub fn parse_active_listings(xml: &str) -> Result<ListingBook> {
    let mut reader = Reader::from_str(xml);

    let mut book = ListingBook::new();
    let mut stack: Vec<String> = Vec::new();
    let mut item: Option<PendingItem> = None;

    loop {
        let event = reader.read_event().context("Malformed XML in eBay response")?;
        match event {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "Item" && in_active_item_array(&stack) {
                    item = Some(PendingItem::default());
                }
                stack.push(name);
            }
            Event::Text(t) => {
                let Some(pending) = item.as_mut() else { continue };
                let text = t.unescape().context("Malformed text in eBay response")?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }

                match stack.last().map(String::as_str) {
                    Some("Title") if pending.title.is_none() => {
                        pending.title = Some(text.to_string());
                    }
                    // First price value wins; later price fields are ignored.
                    Some("CurrentPrice") if pending.price_text.is_none() => {
                        pending.price_text = Some(text.to_string());
                    }
                    _ => {}
                }
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == "Item" {
                    if let Some(pending) = item.take() {
                        finish_item(pending, &mut book);
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!("Parsed {} active listings", book.len());
    Ok(book)
}

fn in_active_item_array(stack: &[String]) -> bool {
    stack.iter().any(|n| n == "ActiveList") && stack.last().map(String::as_str) == Some("ItemArray")
}

fn finish_item(pending: PendingItem, book: &mut ListingBook) {
    let Some(title) = pending.title else {
        warn!("Skipping active listing without a title");
        return;
    };

    let Some(price_text) = pending.price_text else {
        warn!("Skipping '{}': no current price in response", title);
        return;
    };

    match price_text.parse::<f64>() {
        Ok(price) => book.insert(title, price),
        Err(_) => warn!("Skipping '{}': unparseable price '{}'", title, price_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_items(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<GetMyeBaySellingResponse xmlns="urn:ebay:apis:eBLBaseComponents">
    <Ack>Success</Ack>
    <ActiveList>
        <ItemArray>{}</ItemArray>
        <PaginationResult><TotalNumberOfEntries>2</TotalNumberOfEntries></PaginationResult>
    </ActiveList>
</GetMyeBaySellingResponse>"#,
            items
        )
    }

    fn item(title: &str, price: &str) -> String {
        format!(
            r#"<Item>
                <ItemID>110035400</ItemID>
                <Title>{}</Title>
                <SellingStatus>
                    <CurrentPrice currencyID="USD">{}</CurrentPrice>
                </SellingStatus>
            </Item>"#,
            title, price
        )
    }

    #[test]
    fn test_parse_multiple_items() {
        let xml =
            wrap_items(&format!("{}{}", item("Lucario VSTAR", "15.5"), item("Snorlax V", "140")));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.price("Lucario VSTAR"), Some(15.5));
        assert_eq!(book.price("Snorlax V"), Some(140.0));
    }

    #[test]
    fn test_single_item_equivalent_to_list() {
        let single = wrap_items(&item("Lucario VSTAR", "15.5"));
        let multi = wrap_items(&format!("{}{}", item("Lucario VSTAR", "15.5"), ""));

        assert_eq!(parse_active_listings(&single).unwrap(), parse_active_listings(&multi).unwrap());
    }

    #[test]
    fn test_duplicate_title_last_wins() {
        let xml =
            wrap_items(&format!("{}{}", item("Lucario VSTAR", "15.5"), item("Lucario VSTAR", "17.0")));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.price("Lucario VSTAR"), Some(17.0));
    }

    #[test]
    fn test_empty_active_list() {
        let xml = wrap_items("");
        let book = parse_active_listings(&xml).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_item_without_price_is_skipped() {
        let no_price = r#"<Item><Title>Priceless Card</Title></Item>"#;
        let xml = wrap_items(&format!("{}{}", no_price, item("Snorlax V", "140")));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.price("Snorlax V"), Some(140.0));
    }

    #[test]
    fn test_item_without_title_is_skipped() {
        let no_title = r#"<Item>
            <SellingStatus><CurrentPrice currencyID="USD">9.99</CurrentPrice></SellingStatus>
        </Item>"#;
        let xml = wrap_items(&format!("{}{}", no_title, item("Snorlax V", "140")));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_item_with_bad_price_is_skipped() {
        let xml = wrap_items(&format!("{}{}", item("Broken", "N/A"), item("Snorlax V", "140")));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.price("Broken").is_none());
    }

    #[test]
    fn test_first_price_value_wins() {
        let two_prices = r#"<Item>
            <Title>Two Prices</Title>
            <SellingStatus>
                <CurrentPrice currencyID="USD">10.0</CurrentPrice>
                <ConvertedCurrentPrice currencyID="USD">12.0</ConvertedCurrentPrice>
            </SellingStatus>
            <ListingDetails>
                <CurrentPrice currencyID="USD">99.0</CurrentPrice>
            </ListingDetails>
        </Item>"#;
        let xml = wrap_items(two_prices);

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.price("Two Prices"), Some(10.0));
    }

    #[test]
    fn test_items_outside_active_list_are_ignored() {
        let xml = r#"<?xml version="1.0"?>
<GetMyeBaySellingResponse>
    <SoldList>
        <ItemArray>
            <Item>
                <Title>Sold Card</Title>
                <SellingStatus><CurrentPrice>5.0</CurrentPrice></SellingStatus>
            </Item>
        </ItemArray>
    </SoldList>
    <ActiveList>
        <ItemArray>
            <Item>
                <Title>Active Card</Title>
                <SellingStatus><CurrentPrice>7.0</CurrentPrice></SellingStatus>
            </Item>
        </ItemArray>
    </ActiveList>
</GetMyeBaySellingResponse>"#;

        let book = parse_active_listings(xml).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.price("Active Card"), Some(7.0));
        assert!(book.price("Sold Card").is_none());
    }

    #[test]
    fn test_escaped_title_text() {
        let xml = wrap_items(&item("Mew &amp; Mewtwo GX", "25.0"));

        let book = parse_active_listings(&xml).unwrap();
        assert_eq!(book.price("Mew & Mewtwo GX"), Some(25.0));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result =
            parse_active_listings("<GetMyeBaySellingResponse><Item></Oops></GetMyeBaySellingResponse>");
        assert!(result.is_err());
    }
}
