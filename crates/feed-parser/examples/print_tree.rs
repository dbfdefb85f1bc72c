// crates/feed-parser/examples/print_tree.rs
//! Prints the outline of a parsed feed tree

use feedpage_feed_parser::{Element, FeedParser, Node};

fn main() {
    println!("=== feedpage tree outline ===\n");

    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <link>https://example.com/news</link>
    <description>Headlines from nowhere in particular</description>

    <item>
      <title>First headline</title>
      <link>https://example.com/news/1</link>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <source url="https://wire.example.com/rss">Wire</source>
    </item>

    <item>
      <title>Second headline</title>
      <description><![CDATA[Contains <b>markup</b>]]></description>
    </item>
  </channel>
</rss>"#;

    match FeedParser::parse(rss) {
        Ok(doc) => {
            println!("RSS 2.0: {}", doc.is_rss2());
            println!("{}", "=".repeat(60));
            print_element(&doc.root, 0);
        }
        Err(e) => eprintln!("Error parsing feed: {}", e),
    }
}

fn print_element(element: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let attrs: Vec<String> = element
        .attributes
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, v))
        .collect();
    println!("{}<{}{}>", indent, element.tag, attrs.concat());

    for (index, child) in element.children.iter().enumerate() {
        match child {
            Node::Element(e) => print_element(e, depth + 1),
            Node::Text(text) => println!("{}  [{}] {:?}", indent, index, text),
        }
    }
}
