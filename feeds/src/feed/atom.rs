//! Atom 1.0 serialization.

use atom_syndication::{
    ContentBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link,
    LinkBuilder, Person, PersonBuilder, Text,
};

use super::{FeedEntry, HistoryFeed};

/// Serialize the history feed as an Atom document.
pub fn to_atom(history: &HistoryFeed) -> String {
    let author: Person = PersonBuilder::default()
        .name(history.meta.author.clone())
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(history.meta.link.clone())
        .rel("alternate".to_string())
        .build();

    let entries: Vec<Entry> = history.entries.iter().map(entry_to_atom).collect();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(history.meta.title.clone()))
        .id(history.meta.id.clone())
        .updated(FixedDateTime::from(history.updated()))
        .authors(vec![author])
        .links(vec![alternate_link])
        .generator(Some(
            GeneratorBuilder::default()
                .value(env!("CARGO_PKG_NAME"))
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .entries(entries)
        .build();

    feed.to_string()
}

fn entry_to_atom(entry: &FeedEntry) -> Entry {
    let link: Link = LinkBuilder::default()
        .href(entry.link.clone())
        .rel("alternate".to_string())
        .build();

    let content = ContentBuilder::default()
        .value(Some(entry.content.clone()))
        .content_type(Some("html".to_string()))
        .build();

    EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(entry.id.clone())
        .updated(FixedDateTime::from(entry.updated))
        .published(Some(FixedDateTime::from(entry.published)))
        .links(vec![link])
        .content(Some(content))
        .build()
}
