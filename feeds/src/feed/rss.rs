//! RSS 2.0 serialization.

use rss::{validation::Validate, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use super::{FeedEntry, HistoryFeed};
use crate::error::FeedError;

/// Serialize the history feed as a validated RSS channel.
pub fn to_rss(history: &HistoryFeed) -> Result<String, FeedError> {
    let items: Vec<Item> = history.entries.iter().map(entry_to_rss).collect();

    let channel: Channel = ChannelBuilder::default()
        .title(history.meta.title.clone())
        .link(history.meta.link.clone())
        .description(history.meta.title.clone())
        .last_build_date(Some(history.updated().to_rfc2822()))
        .generator(Some(env!("CARGO_PKG_NAME").to_string()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| FeedError::Serialization(format!("RSS validation failed: {e}")))?;
    Ok(channel.to_string())
}

fn entry_to_rss(entry: &FeedEntry) -> Item {
    ItemBuilder::default()
        .title(Some(entry.title.clone()))
        .link(Some(entry.link.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(false)
                .value(entry.id.clone())
                .build(),
        ))
        .description(Some(entry.content.clone()))
        .pub_date(Some(entry.updated.to_rfc2822()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedMeta;
    use crate::test_utils::{at, test_entry};

    #[test]
    fn rss_document_parses_back() {
        let mut feed = HistoryFeed::new(FeedMeta::for_status_page("https://status.example", "Acme"));
        feed.push(test_entry("2", at(11, 0)));
        feed.push(test_entry("1", at(10, 0)));

        let xml = to_rss(&feed).unwrap();
        let channel: Channel = xml.parse().expect("valid rss");

        assert_eq!(channel.title(), "Acme Status - Incident History");
        assert_eq!(channel.link(), "https://status.example");
        assert_eq!(
            channel.last_build_date(),
            Some(at(11, 0).to_rfc2822().as_str())
        );

        let guids: Vec<&str> = channel
            .items()
            .iter()
            .filter_map(|i| i.guid().map(|g| g.value()))
            .collect();
        assert_eq!(
            guids,
            vec![
                "tag:https://status.example,2017:Incident/2",
                "tag:https://status.example,2017:Incident/1"
            ]
        );
    }

    #[test]
    fn rss_item_fields() {
        let entry = test_entry("42", at(9, 0));
        let item = entry_to_rss(&entry);

        assert_eq!(item.title(), Some(entry.title.as_str()));
        assert_eq!(item.link(), Some("https://status.example/incidents/42"));
        assert_eq!(item.description(), Some(entry.content.as_str()));
        assert_eq!(item.guid().map(|g| g.is_permalink()), Some(false));
        assert_eq!(item.pub_date(), Some(entry.updated.to_rfc2822().as_str()));
    }

    #[test]
    fn invalid_channel_link_is_a_serialization_error() {
        let feed = HistoryFeed::new(FeedMeta::for_status_page("not a url", "Acme"));

        let err = to_rss(&feed).unwrap_err();
        assert!(matches!(err, FeedError::Serialization(_)));
    }
}
