use crate::models::VideoItem;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Renders the sorted collection as a UTF-8 `<videos>` document with a
/// trailing newline. Leaf order inside each `<video>` is fixed; empty field
/// values become empty elements rather than omitted ones.
pub fn render(items: &[VideoItem]) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("videos")))?;

    for item in items {
        writer.write_event(Event::Start(BytesStart::new("video")))?;
        write_text_element(&mut writer, "channelId", &item.channel_id)?;
        write_text_element(&mut writer, "channelTitle", &item.channel_title)?;
        write_text_element(&mut writer, "videoId", &item.video_id)?;
        write_text_element(&mut writer, "title", &item.title)?;
        write_text_element(&mut writer, "description", &item.description)?;
        write_text_element(&mut writer, "publishedAt", &item.published_at)?;
        write_text_element(&mut writer, "thumbnail", &item.thumbnail)?;
        writer.write_event(Event::End(BytesEnd::new("video")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("videos")))?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    Ok(String::from_utf8(out)?)
}

// The text event is written even when empty so the element stays
// `<name></name>` instead of picking up indentation whitespace.
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::escape::unescape;

    fn sample() -> VideoItem {
        VideoItem {
            channel_id: "UC1".to_string(),
            channel_title: "Channel One".to_string(),
            video_id: "vid1".to_string(),
            title: "First".to_string(),
            description: "desc".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            thumbnail: "http://img/1.jpg".to_string(),
        }
    }

    #[test]
    fn empty_collection_renders_bare_root() {
        let doc = render(&[]).unwrap();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(doc.contains("<videos>"));
        assert!(!doc.contains("<video>"));
        assert!(doc.ends_with("</videos>\n"));
    }

    #[test]
    fn leaf_elements_appear_in_fixed_order() {
        let doc = render(&[sample()]).unwrap();
        let names = [
            "channelId",
            "channelTitle",
            "videoId",
            "title",
            "description",
            "publishedAt",
            "thumbnail",
        ];
        let positions: Vec<usize> = names
            .iter()
            .map(|n| doc.find(&format!("<{n}>")).unwrap())
            .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(doc.contains("<videoId>vid1</videoId>"));
        assert!(doc.contains("<publishedAt>2024-01-01T00:00:00Z</publishedAt>"));
    }

    #[test]
    fn special_characters_are_escaped_and_round_trip() {
        let original = r#"Q&A <live> "solo" 'take' &amp; more"#;
        let doc = render(&[VideoItem {
            title: original.to_string(),
            ..sample()
        }])
        .unwrap();

        let start = doc.find("<title>").unwrap() + "<title>".len();
        let end = doc.find("</title>").unwrap();
        let escaped = &doc[start..end];

        assert_eq!(
            escaped,
            "Q&amp;A &lt;live&gt; &quot;solo&quot; &apos;take&apos; &amp;amp; more"
        );
        assert_eq!(unescape(escaped).unwrap(), original);
    }

    #[test]
    fn empty_fields_render_as_empty_elements() {
        let doc = render(&[VideoItem {
            thumbnail: String::new(),
            description: String::new(),
            ..sample()
        }])
        .unwrap();
        assert!(doc.contains("<thumbnail></thumbnail>"));
        assert!(doc.contains("<description></description>"));
    }
}
