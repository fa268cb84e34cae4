//! XML rendering of the pack tree into the `content.xml` document.

use crate::domain::content::{Content, Contents};
use crate::domain::media::MediaRef;
use crate::domain::model::{Pack, Round, Theme};
use crate::domain::ports::PackStamper;
use crate::domain::question::Question;
use crate::utils::error::{PackError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

pub const FORMAT_VERSION: &str = "5";
pub const DIFFICULTY: &str = "5";
pub const NAMESPACE: &str = "https://github.com/VladimirKhil/SI/blob/master/assets/siq_5.xsd";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Anything that renders itself as a fragment of the package document.
pub trait XmlRender {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;

    fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_xml(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(PackError::xml)
    }
}

fn write<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(PackError::xml)
}

fn open<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<()> {
    write(writer, Event::Start(element))
}

fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Rejects characters outside the XML 1.0 `Char` production.
fn xml_value(value: &str) -> Result<&str> {
    let invalid = value.chars().find(|&c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
        )
    });
    match invalid {
        Some(c) => Err(PackError::XmlError {
            message: format!("character U+{:04X} is not allowed in XML: {:?}", c as u32, value),
        }),
        None => Ok(value),
    }
}

fn text_element<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>, text: &str) -> Result<()> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let text = xml_value(text)?;
    open(writer, element)?;
    write(writer, Event::Text(BytesText::new(text)))?;
    close(writer, &name)
}

impl XmlRender for Content {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            Content::Text(text) => text_element(writer, BytesStart::new("item"), text),
            Content::Image(image) => write_media_item(writer, image.media()),
            Content::Audio(audio) => write_media_item(writer, audio.media()),
        }
    }
}

fn write_media_item<W: Write>(writer: &mut Writer<W>, media: &MediaRef) -> Result<()> {
    // 與存檔相同：沒有檔名的路徑無法被引用
    media.archive_path()?;
    let item = BytesStart::new("item")
        .with_attributes([("type", media.kind().xml_type()), ("isRef", "True")]);
    text_element(writer, item, media.file_name())
}

fn write_content_param<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    contents: &Contents,
) -> Result<()> {
    let param = BytesStart::new("param").with_attributes([("name", name), ("type", "content")]);
    open(writer, param)?;
    for content in contents {
        content.write_xml(writer)?;
    }
    close(writer, "param")
}

impl XmlRender for Question {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let price = self.price.to_string();
        open(
            writer,
            BytesStart::new("question").with_attributes([("price", price.as_str())]),
        )?;

        open(writer, BytesStart::new("params"))?;
        write_content_param(writer, "question", self.question())?;
        if !self.answer_content().is_empty() {
            write_content_param(writer, "answer", self.answer_content())?;
        }
        close(writer, "params")?;

        open(writer, BytesStart::new("right"))?;
        text_element(writer, BytesStart::new("answer"), self.answer())?;
        close(writer, "right")?;

        close(writer, "question")
    }
}

impl XmlRender for Theme {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        open(
            writer,
            BytesStart::new("theme").with_attributes([("name", xml_value(&self.name)?)]),
        )?;
        open(writer, BytesStart::new("questions"))?;
        for question in &self.questions {
            question.write_xml(writer)?;
        }
        close(writer, "questions")?;
        close(writer, "theme")
    }
}

impl XmlRender for Round {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut round = BytesStart::new("round").with_attributes([("name", xml_value(&self.name)?)]);
        if self.is_final {
            round.push_attribute(("type", "final"));
        }
        open(writer, round)?;
        open(writer, BytesStart::new("themes"))?;
        for theme in &self.themes {
            theme.write_xml(writer)?;
        }
        close(writer, "themes")?;
        close(writer, "round")
    }
}

/// 產生完整的 content.xml；id 與日期由 stamper 提供
pub fn render_pack(pack: &Pack, stamper: &impl PackStamper) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_pack(pack, stamper, &mut writer)?;
    String::from_utf8(writer.into_inner()).map_err(PackError::xml)
}

pub fn write_pack<W: Write>(
    pack: &Pack,
    stamper: &impl PackStamper,
    writer: &mut Writer<W>,
) -> Result<()> {
    let id = stamper.package_id();
    let date = stamper.today().format(DATE_FORMAT).to_string();

    write(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;

    let package = BytesStart::new("package").with_attributes([
        ("name", xml_value(&pack.name)?),
        ("version", FORMAT_VERSION),
        ("id", id.as_str()),
        ("date", date.as_str()),
        ("difficulty", DIFFICULTY),
        ("xmlns", NAMESPACE),
    ]);
    open(writer, package)?;

    open(writer, BytesStart::new("tags"))?;
    text_element(writer, BytesStart::new("tag"), &pack.tag)?;
    close(writer, "tags")?;

    open(writer, BytesStart::new("info"))?;
    open(writer, BytesStart::new("authors"))?;
    text_element(writer, BytesStart::new("author"), &pack.author)?;
    close(writer, "authors")?;
    close(writer, "info")?;

    open(writer, BytesStart::new("rounds"))?;
    for round in &pack.rounds {
        round.write_xml(writer)?;
    }
    close(writer, "rounds")?;

    close(writer, "package")
}
